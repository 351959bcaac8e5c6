//! `zenfra-http` is an async HTTP client for the Zenfra REST API.
//!
//! The crate wraps the `/api/v1` endpoints with typed methods per resource:
//! spaces, stacks, worker pools, configuration bundles, bundle attachments,
//! stack variables, API tokens, organizations, and VCS integrations.
//!
//! Transient failures (429/502/503/504 and network errors) are retried with
//! exponential backoff and jitter; `Retry-After` on 429 responses is honored.
//! All other non-2xx responses are classified into [`ZenfraError`] variants so
//! callers can branch on error kind without matching raw status codes:
//!
//! ```no_run
//! use zenfra_http::{ClientConfig, ZenfraClient};
//!
//! # async fn run() -> zenfra_http::Result<()> {
//! let client = ZenfraClient::new(ClientConfig {
//!     endpoint: "https://api.zenfra.io".to_owned(),
//!     api_token: "zat_example".to_owned(),
//!     ..ClientConfig::default()
//! })?;
//!
//! match client.delete_space("space-1").await {
//!     Ok(()) => {}
//!     Err(err) if err.is_not_found() => {} // already gone
//!     Err(err) => return Err(err),
//! }
//! # Ok(())
//! # }
//! ```

mod bundle_attachments;
mod bundles;
mod client;
mod config;
mod error;
mod organizations;
mod retry;
mod spaces;
mod stacks;
mod tokens;
mod types;
mod vcs_integrations;
mod worker_pools;

pub use client::ZenfraClient;
pub use config::ClientConfig;
pub use error::{ApiError, ZenfraError};
pub use retry::RetryPolicy;
pub use stacks::ListStacksOptions;
pub use types::{
    AttachBundleRequest, Bundle, BundleAttachment, CreateBundleRequest, CreateSpaceRequest,
    CreateStackRequest, CreateTokenRequest, CreateTokenResponse, CreateVcsGitHubRequest,
    CreateVcsGitLabRequest, CreateVcsIntegrationRequest, CreateWorkerPoolRequest,
    CreateWorkerPoolResponse, EnvVariable, IacConfig, LastRunInfo,
    MountedFile, Organization, PoolCapacity, Space, Stack, StackSource, StackSourceRawGit,
    StackSourceRef, StackSourceVcs, StackTriggerOnPush, StackTriggers, StackVariable, Token,
    UpdateBundleContentRequest, UpdateBundleContentResponse, UpdateBundleRequest,
    UpdateSpaceRequest, UpdateStackRequest, UpdateVcsIntegrationRequest, UpdateWorkerPoolRequest,
    VcsExternalAccount, VcsGitHubConfig, VcsGitLabConfig, VcsIntegration, WorkerPool,
};

pub type Result<T> = std::result::Result<T, ZenfraError>;
