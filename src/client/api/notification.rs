use crate::{
    client::{
        api::{
            helper::{parse_response, send_request},
            ApiClient,
        },
        model::{error::ApiError, session::ClientSession},
    },
    model::notification::{MarkReadDto, NotificationDto},
};

impl ApiClient {
    pub async fn get_notifications(
        &self,
        session: &ClientSession,
    ) -> Result<Vec<NotificationDto>, ApiError> {
        let url = format!("/users/{}/notifications", session.user_id);
        let request = Self::authorized(self.get(&url)?, session);
        let response = send_request(request).await?;
        parse_response(response).await
    }

    pub async fn mark_notifications_read(
        &self,
        session: &ClientSession,
    ) -> Result<MarkReadDto, ApiError> {
        let url = format!("/users/{}/notifications/read", session.user_id);
        let request = Self::authorized(self.post(&url)?, session);
        let response = send_request(request).await?;
        parse_response(response).await
    }
}
