use std::collections::HashMap;
use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;

/// Status, message, and correlation id shared by all classified API errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Message from the response body, or the status's canonical reason
    /// phrase when the body carried none.
    pub message: String,
    /// `X-Request-ID` response header, for support correlation.
    pub request_id: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.request_id {
            Some(id) => write!(
                f,
                "zenfra API error (status {}, request_id {}): {}",
                self.status, id, self.message
            ),
            None => write!(
                f,
                "zenfra API error (status {}): {}",
                self.status, self.message
            ),
        }
    }
}

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum ZenfraError {
    /// Invalid construction-time configuration; no request was attempted.
    #[error("invalid client configuration: {0}")]
    Config(String),
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// A request body that failed to serialize.
    #[error("encoding request body: {0}")]
    Encode(#[from] serde_json::Error),
    /// The requested resource does not exist (HTTP 404).
    #[error("{0}")]
    NotFound(ApiError),
    /// The request collides with existing state (HTTP 409).
    #[error("{0}")]
    Conflict(ApiError),
    /// Missing or invalid authentication (HTTP 401).
    #[error("{0}")]
    Unauthorized(ApiError),
    /// Insufficient permissions (HTTP 403).
    #[error("{0}")]
    Forbidden(ApiError),
    /// Invalid request payload (HTTP 400/422) with per-field detail.
    #[error("{api}")]
    Validation {
        api: ApiError,
        /// Field name to validation message.
        fields: HashMap<String, String>,
    },
    /// Any other non-2xx response, including exhausted retries.
    #[error("{0}")]
    Api(ApiError),
    /// A success response whose body failed to deserialize.
    #[error("decoding response (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Error payload shape the API uses for non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
    fields: Option<HashMap<String, String>>,
}

impl ZenfraError {
    /// Converts a terminal non-2xx response into its typed variant.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        // Best-effort read; an unreadable body still yields a typed error.
        let body = response.bytes().await.unwrap_or_default();
        Self::classify(status, request_id, &body)
    }

    /// Maps a status code and raw error body to the error taxonomy.
    ///
    /// Message precedence: explicit `message`, then `error`, then the
    /// status's canonical reason phrase. Body parse failure is non-fatal.
    fn classify(status: u16, request_id: Option<String>, body: &[u8]) -> Self {
        let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();

        let message = parsed
            .message
            .filter(|message| !message.is_empty())
            .or(parsed.error.filter(|error| !error.is_empty()))
            .unwrap_or_else(|| {
                StatusCode::from_u16(status)
                    .ok()
                    .and_then(|status| status.canonical_reason())
                    .unwrap_or("unknown error")
                    .to_owned()
            });

        let api = ApiError {
            status,
            message,
            request_id,
        };

        match status {
            404 => Self::NotFound(api),
            409 => Self::Conflict(api),
            401 => Self::Unauthorized(api),
            403 => Self::Forbidden(api),
            400 | 422 => Self::Validation {
                api,
                fields: parsed.fields.unwrap_or_default(),
            },
            _ => Self::Api(api),
        }
    }

    /// Returns true if the requested resource was not found (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true if the request conflicted with existing state (HTTP 409).
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Returns true if authentication was missing or invalid (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Returns true if the caller lacked permission (HTTP 403).
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    /// HTTP status of a classified API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(api)
            | Self::Conflict(api)
            | Self::Unauthorized(api)
            | Self::Forbidden(api)
            | Self::Validation { api, .. }
            | Self::Api(api) => Some(api.status),
            Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Request correlation id, if the failing response carried one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::NotFound(api)
            | Self::Conflict(api)
            | Self::Unauthorized(api)
            | Self::Forbidden(api)
            | Self::Validation { api, .. }
            | Self::Api(api) => api.request_id.as_deref(),
            _ => None,
        }
    }
}
