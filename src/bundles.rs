use reqwest::Method;
use serde::Deserialize;

use crate::{
    types::{
        Bundle, CreateBundleRequest, UpdateBundleContentRequest, UpdateBundleContentResponse,
        UpdateBundleRequest,
    },
    Result, ZenfraClient,
};

#[derive(Debug, Deserialize)]
struct ListBundlesResponse {
    bundles: Vec<Bundle>,
}

impl ZenfraClient {
    /// Creates a new configuration bundle.
    pub async fn create_bundle(&self, req: &CreateBundleRequest) -> Result<Bundle> {
        self.request_json(
            Method::POST,
            "/api/v1/bundles",
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    /// Retrieves a bundle by ID.
    pub async fn get_bundle(&self, id: &str) -> Result<Bundle> {
        self.request_json(Method::GET, &format!("/api/v1/bundles/{id}"), None)
            .await
    }

    /// Returns all bundles in the organization.
    pub async fn list_bundles(&self) -> Result<Vec<Bundle>> {
        let resp: ListBundlesResponse =
            self.request_json(Method::GET, "/api/v1/bundles", None).await?;
        Ok(resp.bundles)
    }

    /// Updates bundle metadata.
    pub async fn update_bundle(&self, id: &str, req: &UpdateBundleRequest) -> Result<Bundle> {
        self.request_json(
            Method::PATCH,
            &format!("/api/v1/bundles/{id}"),
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    /// Updates the content (env vars, mounted files) of a bundle.
    ///
    /// `expected_version` enables optimistic locking; a stale version is
    /// rejected by the API with a conflict.
    pub async fn update_bundle_content(
        &self,
        id: &str,
        req: &UpdateBundleContentRequest,
    ) -> Result<UpdateBundleContentResponse> {
        self.request_json(
            Method::PUT,
            &format!("/api/v1/bundles/{id}/content"),
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    /// Deletes a bundle by ID.
    pub async fn delete_bundle(&self, id: &str) -> Result<()> {
        self.request_unit(Method::DELETE, &format!("/api/v1/bundles/{id}"), None)
            .await
    }
}
