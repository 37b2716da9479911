use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{AdminSession, LoginRequest};

impl ApiClient {
    /// Exchange admin credentials for a bearer token. Works without a token.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AdminSession> {
        tracing::info!("Signing in as {}", credentials.email);
        let request = self.post("/api/auth/admin/login").json(credentials);
        self.send(request, "login").await
    }
}
