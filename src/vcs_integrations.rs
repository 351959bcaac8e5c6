use reqwest::Method;

use crate::{
    types::{CreateVcsIntegrationRequest, UpdateVcsIntegrationRequest, VcsIntegration},
    Result, ZenfraClient,
};

impl ZenfraClient {
    /// Creates a new VCS integration.
    pub async fn create_vcs_integration(
        &self,
        req: &CreateVcsIntegrationRequest,
    ) -> Result<VcsIntegration> {
        self.request_json(
            Method::POST,
            "/api/v1/vcs/integrations",
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    /// Retrieves a VCS integration by ID.
    pub async fn get_vcs_integration(&self, id: &str) -> Result<VcsIntegration> {
        self.request_json(Method::GET, &format!("/api/v1/vcs/integrations/{id}"), None)
            .await
    }

    /// Returns all VCS integrations in the organization.
    pub async fn list_vcs_integrations(&self) -> Result<Vec<VcsIntegration>> {
        self.request_json(Method::GET, "/api/v1/vcs/integrations", None)
            .await
    }

    /// Updates an existing VCS integration.
    pub async fn update_vcs_integration(
        &self,
        id: &str,
        req: &UpdateVcsIntegrationRequest,
    ) -> Result<VcsIntegration> {
        self.request_json(
            Method::PATCH,
            &format!("/api/v1/vcs/integrations/{id}"),
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    /// Deletes a VCS integration by ID.
    pub async fn delete_vcs_integration(&self, id: &str) -> Result<()> {
        self.request_unit(Method::DELETE, &format!("/api/v1/vcs/integrations/{id}"), None)
            .await
    }
}
