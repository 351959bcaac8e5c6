//! Request/response types matching the Zenfra API DTOs.
//!
//! Field names serde-map 1:1 to the wire JSON; optional and omittable
//! members mirror what the API actually sends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Space types ---

/// A logical grouping of stacks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: String,
    #[serde(default)]
    pub organization_id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub depth: i64,
    #[serde(default)]
    pub inherit_bundles: bool,
    #[serde(default)]
    pub child_count: i64,
    #[serde(default)]
    pub stack_count: i64,
    #[serde(default)]
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Request body for creating a space.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSpaceRequest {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub inherit_bundles: bool,
}

/// Request body for updating a space; unset members are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSpaceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherit_bundles: Option<bool>,
}

// --- Stack types ---

/// Infrastructure-as-code tool configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IacConfig {
    pub engine: String,
    pub version: String,
}

/// Identifies what to check out: a branch or tag name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StackSourceRef {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

/// Public HTTPS git source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StackSourceRawGit {
    pub url: String,
    #[serde(rename = "ref")]
    pub git_ref: StackSourceRef,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
}

/// Integration-backed VCS source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StackSourceVcs {
    pub provider: String,
    pub integration_id: String,
    pub repository_id: String,
    #[serde(rename = "ref")]
    pub git_ref: StackSourceRef,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
}

/// Discriminated union for a stack's code source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StackSource {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_git: Option<StackSourceRawGit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcs: Option<StackSourceVcs>,
}

/// Push-based automation trigger configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StackTriggerOnPush {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
}

/// What events can automatically create runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StackTriggers {
    pub on_push: StackTriggerOnPush,
}

/// Summary of the most recent run on a stack.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LastRunInfo {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(default)]
    pub triggered_by: String,
    #[serde(default)]
    pub triggered_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
}

/// An IaC stack resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    pub id: String,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub space_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_pool_id: Option<String>,
    #[serde(default)]
    pub allow_public_pool: bool,
    #[serde(default)]
    pub iac: IacConfig,
    #[serde(default)]
    pub source: StackSource,
    #[serde(default)]
    pub triggers: StackTriggers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run: Option<LastRunInfo>,
    #[serde(default)]
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Request body for creating a stack.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateStackRequest {
    pub space_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_pool_id: Option<String>,
    #[serde(default)]
    pub allow_public_pool: bool,
    pub iac: IacConfig,
    pub source: StackSource,
}

/// Request body for updating a stack; unset members are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateStackRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_pool_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_public_pool: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iac: Option<IacConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<StackSource>,
}

/// A single environment variable on a stack.
///
/// Secret values come back masked as `****`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StackVariable {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub secret: bool,
}

// --- Worker Pool types ---

/// Org-level slot capacity for a pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolCapacity {
    pub total_slots: i64,
    pub used_slots: i64,
    pub online_workers: i64,
}

/// A worker pool resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkerPool {
    pub id: String,
    #[serde(default)]
    pub organization_id: String,
    pub name: String,
    #[serde(default)]
    pub pool_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_id: Option<String>,
    #[serde(default)]
    pub key_version: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub active_workers_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<PoolCapacity>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
}

/// Request body for creating a worker pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateWorkerPoolRequest {
    pub name: String,
}

/// Request body for updating a worker pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateWorkerPoolRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Creation response carrying the write-once `api_key`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateWorkerPoolResponse {
    pub pool: WorkerPool,
    pub api_key: String,
}

// --- Bundle types ---

/// An environment variable in a bundle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvVariable {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub secret: bool,
}

/// A mounted file in a bundle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MountedFile {
    pub path: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub secret: bool,
}

/// A configuration bundle resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: String,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub space_id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub content_version: i64,
    #[serde(default)]
    pub attached_stacks_count: i64,
    #[serde(default)]
    pub environment_variables: Vec<EnvVariable>,
    #[serde(default)]
    pub mounted_files: Vec<MountedFile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub updated_by: String,
}

/// Request body for creating a bundle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateBundleRequest {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub space_id: String,
}

/// Request body for updating bundle metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateBundleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
}

/// Request body for updating bundle content with optimistic locking.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateBundleContentRequest {
    pub content: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_version: Option<i64>,
}

/// Content update response with dedup status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateBundleContentResponse {
    pub bundle: Bundle,
    #[serde(default)]
    pub was_deduplicated: bool,
}

// --- Bundle Attachment types ---

/// A bundle attached to a stack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BundleAttachment {
    pub id: String,
    #[serde(default)]
    pub organization_id: String,
    pub stack_id: String,
    pub bundle_id: String,
    #[serde(default)]
    pub priority: i64,
    pub attached_at: DateTime<Utc>,
    #[serde(default)]
    pub attached_by: String,
}

/// Request body for attaching a bundle to a stack.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachBundleRequest {
    pub bundle_id: String,
}

// --- API Token types ---

/// An API token resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub token_prefix: String,
    #[serde(default)]
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub usage_count: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Request body for creating an API token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTokenRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub role: String,
    #[serde(
        rename = "expires_in_days",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_in: Option<i64>,
}

/// Creation response carrying the write-once token value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateTokenResponse {
    pub token: String,
    #[serde(rename = "token_obj")]
    pub token_obj: Token,
}

// --- Organization types ---

/// The authenticated user's organization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- VCS Integration types ---

/// Provider account info for a VCS integration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VcsExternalAccount {
    pub id: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub name: String,
}

/// GitHub configuration, without sensitive fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VcsGitHubConfig {
    pub installation_id: i64,
}

/// GitLab configuration, without sensitive fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VcsGitLabConfig {
    pub base_url: String,
}

/// A VCS integration resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VcsIntegration {
    pub id: String,
    #[serde(default)]
    pub organization_id: String,
    pub provider: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub external_account: VcsExternalAccount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<VcsGitHubConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitlab: Option<VcsGitLabConfig>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Request body for creating a VCS integration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateVcsIntegrationRequest {
    pub provider: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitlab: Option<CreateVcsGitLabRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<CreateVcsGitHubRequest>,
}

/// GitLab-specific creation configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateVcsGitLabRequest {
    pub base_url: String,
    pub access_token: String,
}

/// GitHub-specific creation configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateVcsGitHubRequest {
    pub installation_id: i64,
}

/// Request body for updating a VCS integration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateVcsIntegrationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
