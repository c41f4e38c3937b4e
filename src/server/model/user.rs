//! User domain models and parameters.
//!
//! Provides the user model, the assembled profile view, and parameter types for
//! registration, login, and profile updates.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        auth::{AuthUserDto, LoginDto, RegisterDto},
        user::{
            PreferencesDto, ProfileDto, ProfileUserDto, TopUserDto, UpdateProfileDto,
            UserSummaryDto,
        },
    },
    server::model::review::Review,
};

/// Registered user account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// bcrypt hash of the user's password.
    pub password_hash: String,
    pub profile_picture: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            profile_picture: entity.profile_picture,
            location: entity.location,
            created_at: entity.created_at,
        }
    }

    pub fn into_summary_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            username: self.username,
            profile_picture: self.profile_picture,
        }
    }

    pub fn into_auth_dto(self) -> AuthUserDto {
        AuthUserDto {
            id: self.id,
            username: self.username,
        }
    }
}

/// Ordered preference names for a user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Preferences {
    pub drink: Vec<String>,
    pub restaurant: Vec<String>,
}

impl Preferences {
    pub fn from_dto(dto: PreferencesDto) -> Self {
        Self {
            drink: dto.drink,
            restaurant: dto.restaurant,
        }
    }

    pub fn into_dto(self) -> PreferencesDto {
        PreferencesDto {
            drink: self.drink,
            restaurant: self.restaurant,
        }
    }
}

/// A user together with everything shown on their profile page.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user: User,
    pub preferences: Preferences,
    /// Users following this user, ordered by username.
    pub followers: Vec<User>,
    /// Users this user follows, ordered by username.
    pub following: Vec<User>,
    /// Reviews written by this user, newest first.
    pub reviews: Vec<Review>,
}

impl Profile {
    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            user: ProfileUserDto {
                id: self.user.id,
                username: self.user.username,
                email: self.user.email,
                profile_picture: self.user.profile_picture,
                location: self.user.location,
                preferences: self.preferences.into_dto(),
                followers: self
                    .followers
                    .into_iter()
                    .map(User::into_summary_dto)
                    .collect(),
                following: self
                    .following
                    .into_iter()
                    .map(User::into_summary_dto)
                    .collect(),
            },
            reviews: self
                .reviews
                .into_iter()
                .map(Review::into_profile_dto)
                .collect(),
        }
    }
}

/// A user ranked by how many reviews they have written.
#[derive(Debug, Clone, PartialEq)]
pub struct TopUser {
    pub user: User,
    pub total_reviews: u64,
}

impl TopUser {
    pub fn into_dto(self) -> TopUserDto {
        TopUserDto {
            id: self.user.id,
            username: self.user.username,
            profile_picture: self.user.profile_picture,
            total_reviews: self.total_reviews,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterParam {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_string(),
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            password: dto.password,
        }
    }
}

/// Row values for inserting a user; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Parameters for a partial profile update.
///
/// `None` leaves the stored value untouched. `preferences`, when present, replaces
/// both preference lists.
#[derive(Debug, Clone)]
pub struct UpdateProfileParam {
    pub user_id: i32,
    pub username: Option<String>,
    pub profile_picture: Option<String>,
    pub location: Option<String>,
    pub preferences: Option<Preferences>,
}

impl UpdateProfileParam {
    pub fn from_dto(user_id: i32, dto: UpdateProfileDto) -> Self {
        Self {
            user_id,
            username: dto.username.map(|u| u.trim().to_string()),
            profile_picture: dto.profile_picture,
            location: dto.location,
            preferences: dto.preferences.map(Preferences::from_dto),
        }
    }
}

/// Display fields written by a profile update.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserFields {
    pub username: Option<String>,
    pub profile_picture: Option<String>,
    pub location: Option<String>,
}
