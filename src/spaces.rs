use reqwest::Method;
use serde::Deserialize;

use crate::{
    types::{CreateSpaceRequest, Space, UpdateSpaceRequest},
    Result, ZenfraClient,
};

#[derive(Debug, Deserialize)]
struct ListSpacesResponse {
    items: Vec<Space>,
}

impl ZenfraClient {
    /// Creates a new space.
    pub async fn create_space(&self, req: &CreateSpaceRequest) -> Result<Space> {
        self.request_json(
            Method::POST,
            "/api/v1/spaces",
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    /// Retrieves a space by ID.
    pub async fn get_space(&self, id: &str) -> Result<Space> {
        self.request_json(Method::GET, &format!("/api/v1/spaces/{id}"), None)
            .await
    }

    /// Returns all spaces in the organization.
    pub async fn list_spaces(&self) -> Result<Vec<Space>> {
        let resp: ListSpacesResponse =
            self.request_json(Method::GET, "/api/v1/spaces", None).await?;
        Ok(resp.items)
    }

    /// Updates an existing space.
    pub async fn update_space(&self, id: &str, req: &UpdateSpaceRequest) -> Result<Space> {
        self.request_json(
            Method::PUT,
            &format!("/api/v1/spaces/{id}"),
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    /// Deletes a space by ID.
    pub async fn delete_space(&self, id: &str) -> Result<()> {
        self.request_unit(Method::DELETE, &format!("/api/v1/spaces/{id}"), None)
            .await
    }
}
