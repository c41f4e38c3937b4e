use crate::{
    client::{
        api::{
            helper::{parse_response, send_request},
            ApiClient,
        },
        model::{error::ApiError, session::ClientSession},
    },
    model::{
        api::MessageDto,
        auth::{LoginDto, LoginResponseDto, RegisterDto},
    },
};

impl ApiClient {
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<MessageDto, ApiError> {
        let request = self.post("/auth/register")?.json(&RegisterDto {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        });
        let response = send_request(request).await?;
        parse_response(response).await
    }

    /// Logs in and returns a session carrying the issued token.
    pub async fn login(&self, email: &str, password: &str) -> Result<ClientSession, ApiError> {
        let request = self.post("/auth/login")?.json(&LoginDto {
            email: email.to_string(),
            password: password.to_string(),
        });
        let response = send_request(request).await?;
        let dto: LoginResponseDto = parse_response(response).await?;

        Ok(ClientSession::from_dto(dto))
    }
}
