use reqwest::Method;

use crate::{types::Organization, Result, ZenfraClient};

impl ZenfraClient {
    /// Retrieves the organization for the authenticated user.
    pub async fn get_current_organization(&self) -> Result<Organization> {
        self.request_json(Method::GET, "/api/v1/organizations/current", None)
            .await
    }
}
