use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub profile_picture: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
    #[sea_orm(has_many = "super::user_drink_preference::Entity")]
    UserDrinkPreference,
    #[sea_orm(has_many = "super::user_restaurant_preference::Entity")]
    UserRestaurantPreference,
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::user_drink_preference::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserDrinkPreference.def()
    }
}

impl Related<super::user_restaurant_preference::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRestaurantPreference.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
