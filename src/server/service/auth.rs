//! Account registration and password login.
//!
//! Passwords are hashed with bcrypt on the blocking thread pool; successful logins
//! receive a bearer token from `TokenService`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{internal::InternalError, AppError},
    model::user::{CreateUserParam, LoginParam, RegisterParam, User},
    service::token::TokenService,
};

/// Service for account registration and login.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub tokens: &'a TokenService,
    /// bcrypt work factor for new password hashes.
    pub bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service used to sign login tokens
    /// - `bcrypt_cost` - bcrypt work factor for new password hashes
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, bcrypt_cost: u32) -> Self {
        Self {
            db,
            tokens,
            bcrypt_cost,
        }
    }

    /// Registers a new account.
    ///
    /// # Arguments
    /// - `param` - Username, email, and plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - A field is empty, or the email or username is taken
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterParam) -> Result<User, AppError> {
        if param.username.is_empty() || param.email.is_empty() || param.password.is_empty() {
            return Err(AppError::BadRequest(
                "Username, email and password are required".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::BadRequest("Email already in use".to_string()));
        }
        if user_repo.find_by_username(&param.username).await?.is_some() {
            return Err(AppError::BadRequest("Username already taken".to_string()));
        }

        let password_hash = hash_password(param.password, self.bcrypt_cost).await?;

        let user = user_repo
            .create(CreateUserParam {
                username: param.username,
                email: param.email,
                password_hash,
            })
            .await
            .map_err(|e| AppError::on_unique_violation(e, "Email or username already in use"))?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Checks credentials and issues a bearer token.
    ///
    /// # Returns
    /// - `Ok((String, User))` - Token and the logged-in user
    /// - `Err(AppError::NotFound)` - No account with that email
    /// - `Err(AppError::BadRequest)` - Wrong password
    pub async fn login(&self, param: LoginParam) -> Result<(String, User), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&param.email).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !verify_password(param.password, user.password_hash.clone()).await? {
            tracing::debug!("Rejected login for user {}: wrong password", user.id);
            return Err(AppError::BadRequest("Invalid credentials".to_string()));
        }

        let token = self.tokens.issue(user.id)?;

        tracing::info!("User {} logged in", user.id);

        Ok((token, user))
    }
}

/// Hashes a password with bcrypt on the blocking thread pool.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(InternalError::BlockingTask)?
        .map_err(InternalError::PasswordHash)?;

    Ok(hash)
}

/// Verifies a password against a bcrypt hash on the blocking thread pool.
///
/// A stored value that is not a bcrypt hash never matches.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let result = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(InternalError::BlockingTask)?;

    Ok(result.unwrap_or(false))
}
