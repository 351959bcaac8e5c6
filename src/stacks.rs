use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    types::{CreateStackRequest, Stack, StackSource, StackTriggers, StackVariable, UpdateStackRequest},
    Result, ZenfraClient,
};

/// Optional filters for [`ZenfraClient::list_stacks`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListStacksOptions {
    /// Restrict to stacks in one space.
    pub space_id: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl ListStacksOptions {
    fn to_query(&self) -> String {
        let mut parts = Vec::new();
        if let Some(space_id) = &self.space_id {
            parts.push(format!("space_id={space_id}"));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        if let Some(offset) = self.offset {
            parts.push(format!("offset={offset}"));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListStacksResponse {
    items: Vec<Stack>,
}

/// Envelope shared by the variables get and replace-all endpoints.
#[derive(Debug, Serialize, Deserialize)]
struct StackVariablesEnvelope {
    variables: Vec<StackVariable>,
}

impl ZenfraClient {
    /// Creates a new stack.
    pub async fn create_stack(&self, req: &CreateStackRequest) -> Result<Stack> {
        self.request_json(
            Method::POST,
            "/api/v1/stacks",
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    /// Retrieves a stack by ID.
    pub async fn get_stack(&self, id: &str) -> Result<Stack> {
        self.request_json(Method::GET, &format!("/api/v1/stacks/{id}"), None)
            .await
    }

    /// Returns stacks in the organization, optionally filtered.
    pub async fn list_stacks(&self, opts: Option<&ListStacksOptions>) -> Result<Vec<Stack>> {
        let query = opts.map(ListStacksOptions::to_query).unwrap_or_default();
        let resp: ListStacksResponse = self
            .request_json(Method::GET, &format!("/api/v1/stacks{query}"), None)
            .await?;
        Ok(resp.items)
    }

    /// Updates an existing stack.
    pub async fn update_stack(&self, id: &str, req: &UpdateStackRequest) -> Result<Stack> {
        self.request_json(
            Method::PUT,
            &format!("/api/v1/stacks/{id}"),
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    /// Deletes a stack by ID.
    pub async fn delete_stack(&self, id: &str) -> Result<()> {
        self.request_unit(Method::DELETE, &format!("/api/v1/stacks/{id}"), None)
            .await
    }

    /// Retrieves the environment variables for a stack.
    ///
    /// Secret values are returned masked as `****`.
    pub async fn get_stack_variables(&self, stack_id: &str) -> Result<Vec<StackVariable>> {
        let resp: StackVariablesEnvelope = self
            .request_json(Method::GET, &format!("/api/v1/stacks/{stack_id}/variables"), None)
            .await?;
        Ok(resp.variables)
    }

    /// Replaces all environment variables on a stack.
    ///
    /// This is a replace-all operation; missing keys are deleted.
    pub async fn set_stack_variables(
        &self,
        stack_id: &str,
        variables: &[StackVariable],
    ) -> Result<Vec<StackVariable>> {
        let req = StackVariablesEnvelope {
            variables: variables.to_vec(),
        };
        let resp: StackVariablesEnvelope = self
            .request_json(
                Method::PUT,
                &format!("/api/v1/stacks/{stack_id}/variables"),
                Some(serde_json::to_value(&req)?),
            )
            .await?;
        Ok(resp.variables)
    }

    /// Updates the source configuration for a stack.
    pub async fn set_stack_source(&self, stack_id: &str, source: &StackSource) -> Result<()> {
        self.request_unit(
            Method::PUT,
            &format!("/api/v1/stacks/{stack_id}/source"),
            Some(serde_json::to_value(source)?),
        )
        .await
    }

    /// Updates the trigger configuration for a stack.
    pub async fn set_stack_triggers(&self, stack_id: &str, triggers: &StackTriggers) -> Result<()> {
        self.request_unit(
            Method::PUT,
            &format!("/api/v1/stacks/{stack_id}/triggers"),
            Some(serde_json::to_value(triggers)?),
        )
        .await
    }
}
