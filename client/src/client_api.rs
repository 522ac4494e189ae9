use blog_server_node::model::Blog;
use thiserror::Error;

/// Error type for the blog client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("blog {0} not found")]
    NotFound(String),
    #[error("count must not be negative, got {0}")]
    InvalidCount(i64),
    #[error("server rejected the request ({0}): {1}")]
    UnexpectedStatus(u16, String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("{0} cannot be used as a base url")]
    InvalidBaseUrl(String),
    #[error(transparent)]
    UrlError(#[from] url::ParseError),
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
}

/// [`BlogApi`] is the set of operations the blog service exposes over HTTP.
///
/// Lookups and updates of an unknown id fail with [`ClientError::NotFound`];
/// deleting an unknown id succeeds, matching the server.
#[async_trait::async_trait]
pub trait BlogApi: Send + Sync {
    /// Asks the server to generate `count` fake blogs and returns them.
    /// A negative `count` fails with [`ClientError::InvalidCount`] without a request.
    async fn create(&self, count: i64) -> Result<Vec<Blog>, ClientError>;

    async fn list(&self) -> Result<Vec<Blog>, ClientError>;

    async fn get(&self, id: &str) -> Result<Blog, ClientError>;

    async fn update(&self, id: &str, title: &str, content: &str) -> Result<Blog, ClientError>;

    async fn delete(&self, id: &str) -> Result<(), ClientError>;

    /// Number of blogs the server currently holds.
    async fn count(&self) -> Result<u64, ClientError>;
}
