//! Error types for page fetching and LLM completion calls

use thiserror::Error;

/// A failure while retrieving the page under analysis.
///
/// Every variant is fatal for the request: the caller reports the message
/// and no recommendation call is attempted.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to fetch {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("non-success status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// A failure while talking to the completion API.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no API key configured for the completion endpoint")]
    MissingApiKey,

    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion response contained no message content")]
    EmptyResponse,
}

/// A model reply that yielded no usable recommendations.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("reply is not a recommendations object: {0}")]
    Json(#[from] serde_json::Error),

    #[error("none of the {0} recommendations in the reply could be decoded")]
    NoValidEntries(usize),
}

/// A failure while assembling an analyzer from configuration.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to build page fetcher: {0}")]
    Fetcher(#[from] FetchError),

    #[error("failed to build completion client: {0}")]
    Completion(#[from] LlmError),
}
