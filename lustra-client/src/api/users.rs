//! User endpoints: admin lookup and credential recovery

use super::CommerceApi;
use crate::ClientResult;
use crate::http::HttpClient;
use shared::models::UserInfo;
use shared::request::ResetPasswordRequest;
use shared::response::MessageResponse;
use urlencoding::encode;

impl<C: HttpClient> CommerceApi<C> {
    /// Customer profile by id (admin view).
    pub async fn user(&self, user_id: &str) -> ClientResult<UserInfo> {
        let path = format!("api/users/{}", encode(user_id));
        self.http().get(&path).await
    }

    /// Request a password-reset mail. Returns the server's message, if any.
    pub async fn reset_password(&self, email: &str) -> ClientResult<Option<String>> {
        let request = ResetPasswordRequest {
            email: email.to_string(),
        };
        let response: MessageResponse = self.http().post("api/reset-password", &request).await?;
        Ok(response.message)
    }
}
