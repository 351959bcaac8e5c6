use reqwest::Method;
use serde::Deserialize;

use crate::{
    types::{AttachBundleRequest, BundleAttachment},
    Result, ZenfraClient,
};

#[derive(Debug, Deserialize)]
struct ListAttachmentsResponse {
    attachments: Vec<BundleAttachment>,
}

impl ZenfraClient {
    /// Attaches a bundle to a stack.
    pub async fn attach_bundle(&self, stack_id: &str, bundle_id: &str) -> Result<()> {
        let req = AttachBundleRequest {
            bundle_id: bundle_id.to_owned(),
        };
        self.request_unit(
            Method::POST,
            &format!("/api/v1/stacks/{stack_id}/bundles"),
            Some(serde_json::to_value(&req)?),
        )
        .await
    }

    /// Detaches a bundle from a stack.
    pub async fn detach_bundle(&self, stack_id: &str, bundle_id: &str) -> Result<()> {
        self.request_unit(
            Method::DELETE,
            &format!("/api/v1/stacks/{stack_id}/bundles/{bundle_id}"),
            None,
        )
        .await
    }

    /// Returns all bundle attachments for a stack.
    pub async fn list_stack_bundles(&self, stack_id: &str) -> Result<Vec<BundleAttachment>> {
        let resp: ListAttachmentsResponse = self
            .request_json(Method::GET, &format!("/api/v1/stacks/{stack_id}/bundles"), None)
            .await?;
        Ok(resp.attachments)
    }
}
