use reqwest::Method;

use crate::{
    types::{CreateTokenRequest, CreateTokenResponse, Token},
    Result, ZenfraClient,
};

impl ZenfraClient {
    /// Creates a new API token.
    ///
    /// The response includes the full token value, only returned once at
    /// creation.
    pub async fn create_token(&self, req: &CreateTokenRequest) -> Result<CreateTokenResponse> {
        self.request_json(
            Method::POST,
            "/api/v1/tokens",
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    /// Retrieves an API token by ID.
    pub async fn get_token(&self, id: &str) -> Result<Token> {
        self.request_json(Method::GET, &format!("/api/v1/tokens/{id}"), None)
            .await
    }

    /// Returns all API tokens in the organization.
    pub async fn list_tokens(&self) -> Result<Vec<Token>> {
        self.request_json(Method::GET, "/api/v1/tokens", None).await
    }

    /// Deletes an API token by ID.
    pub async fn delete_token(&self, id: &str) -> Result<()> {
        self.request_unit(Method::DELETE, &format!("/api/v1/tokens/{id}"), None)
            .await
    }
}
