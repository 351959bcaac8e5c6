use reqwest::Method;
use serde::Deserialize;

use crate::{
    types::{
        CreateWorkerPoolRequest, CreateWorkerPoolResponse, UpdateWorkerPoolRequest, WorkerPool,
    },
    Result, ZenfraClient,
};

#[derive(Debug, Deserialize)]
struct ListWorkerPoolsResponse {
    pools: Vec<WorkerPool>,
}

impl ZenfraClient {
    /// Creates a new worker pool.
    ///
    /// The response includes the `api_key`, only returned once at creation.
    pub async fn create_worker_pool(
        &self,
        req: &CreateWorkerPoolRequest,
    ) -> Result<CreateWorkerPoolResponse> {
        self.request_json(
            Method::POST,
            "/api/v1/worker-pools",
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    /// Retrieves a worker pool by ID.
    pub async fn get_worker_pool(&self, id: &str) -> Result<WorkerPool> {
        self.request_json(Method::GET, &format!("/api/v1/worker-pools/{id}"), None)
            .await
    }

    /// Returns all worker pools in the organization.
    pub async fn list_worker_pools(&self) -> Result<Vec<WorkerPool>> {
        let resp: ListWorkerPoolsResponse = self
            .request_json(Method::GET, "/api/v1/worker-pools", None)
            .await?;
        Ok(resp.pools)
    }

    /// Updates an existing worker pool.
    pub async fn update_worker_pool(
        &self,
        id: &str,
        req: &UpdateWorkerPoolRequest,
    ) -> Result<WorkerPool> {
        self.request_json(
            Method::PATCH,
            &format!("/api/v1/worker-pools/{id}"),
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    /// Deletes a worker pool by ID.
    pub async fn delete_worker_pool(&self, id: &str) -> Result<()> {
        self.request_unit(Method::DELETE, &format!("/api/v1/worker-pools/{id}"), None)
            .await
    }
}
