//! ChatBackend trait implementation for HttpBackend, plus the read-only
//! helper endpoints.

use async_trait::async_trait;
use tracing::debug;
use twin_common::SessionId;

use crate::protocol::{ChatRequest, ChatResponse, ConversationRecord, HealthStatus};
use crate::{ChatBackend, ChatError};

use super::client::{transport_error, HttpBackend};

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let url = self.endpoint(&["chat"]);

        debug!(%url, has_session = request.session_id.is_some(), "chat request");

        let response = self
            .http
            .post(url)
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let response = Self::check_status(response).await?;
        Self::decode(response).await
    }
}

impl HttpBackend {
    /// Call `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, ChatError> {
        let url = self.endpoint(&["health"]);
        debug!(%url, "health check");

        let response = self.http.get(url).send().await.map_err(transport_error)?;
        let response = Self::check_status(response).await?;
        Self::decode(response).await
    }

    /// Fetch the server-side history of a session.
    pub async fn conversation(&self, session_id: &SessionId) -> Result<ConversationRecord, ChatError> {
        let url = self.endpoint(&["conversation", session_id.as_str()]);
        debug!(%url, "conversation lookup");

        let response = self
            .http
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(transport_error)?;
        let response = Self::check_status(response).await?;
        Self::decode(response).await
    }
}
