use crate::model::auth::LoginResponseDto;

/// Logged-in user and the bearer token issued at login.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientSession {
    pub token: String,
    pub user_id: i32,
    pub username: String,
}

impl ClientSession {
    pub fn from_dto(dto: LoginResponseDto) -> Self {
        Self {
            token: dto.token,
            user_id: dto.user.id,
            username: dto.user.username,
        }
    }
}
