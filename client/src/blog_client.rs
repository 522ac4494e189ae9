use async_trait::async_trait;
use blog_server_node::model::Blog;
use log::debug;
use reqwest::{Response, StatusCode};
use rocket::serde::DeserializeOwned;
use rocket::serde::json::Value;
use url::Url;

use crate::client_api::{BlogApi, ClientError};

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

/// [`BlogApi`] over HTTP, talking to a running blog server.
pub struct HttpBlogClient {
    base: Url,
    http: reqwest::Client,
}

impl HttpBlogClient {
    pub fn new(server: &str) -> Result<Self, ClientError> {
        let base = Url::parse(server)?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(server.to_string()));
        }
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Appends percent-encoded `segments` to the base path.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn blog_endpoint(&self, id: &str) -> Result<Url, ClientError> {
        self.endpoint(&["blog", id])
    }
}

/// Maps a failed response to an error. A 404 is [`ClientError::NotFound`]
/// only when the request named a blog.
fn status_error(status: StatusCode, id: Option<&str>, body: String) -> ClientError {
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => ClientError::NotFound(id.to_string()),
        (status, _) => ClientError::UnexpectedStatus(status.as_u16(), body),
    }
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    id: Option<&str>,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        Err(status_error(
            status,
            id,
            response.text().await.unwrap_or_default(),
        ))
    }
}

#[async_trait]
impl BlogApi for HttpBlogClient {
    async fn create(&self, count: i64) -> Result<Vec<Blog>, ClientError> {
        if count < 0 {
            return Err(ClientError::InvalidCount(count));
        }
        let mut url = self.endpoint(&["blog"])?;
        url.query_pairs_mut()
            .append_pair("count", &count.to_string());
        debug!("POST {}", url);
        let response = self.http.post(url).send().await?;
        read_json(response, None).await
    }

    async fn list(&self) -> Result<Vec<Blog>, ClientError> {
        let url = self.endpoint(&["blog"])?;
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        read_json(response, None).await
    }

    async fn get(&self, id: &str) -> Result<Blog, ClientError> {
        let url = self.blog_endpoint(id)?;
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        read_json(response, Some(id)).await
    }

    async fn update(&self, id: &str, title: &str, content: &str) -> Result<Blog, ClientError> {
        let mut url = self.blog_endpoint(id)?;
        url.query_pairs_mut()
            .append_pair("title", title)
            .append_pair("content", content);
        debug!("PUT {}", url);
        let response = self.http.put(url).send().await?;
        read_json(response, Some(id)).await
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let url = self.blog_endpoint(id)?;
        debug!("DELETE {}", url);
        let response = self.http.delete(url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(status_error(
                status,
                Some(id),
                response.text().await.unwrap_or_default(),
            ))
        }
    }

    async fn count(&self) -> Result<u64, ClientError> {
        let url = self.endpoint(&["stats"])?;
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        let stats: Value = read_json(response, None).await?;
        stats["count"]
            .as_u64()
            .ok_or_else(|| ClientError::MalformedResponse(stats.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_bare_host() {
        let client = HttpBlogClient::new("http://127.0.0.1:8000").unwrap();
        let url = client.endpoint(&["blog", "abc"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/blog/abc");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = HttpBlogClient::new("http://example.com/api/").unwrap();
        let url = client.endpoint(&["stats"]).unwrap();
        assert_eq!(url.as_str(), "http://example.com/api/stats");
    }

    #[test]
    fn test_endpoint_encodes_id() {
        let client = HttpBlogClient::new(DEFAULT_SERVER).unwrap();
        let url = client.blog_endpoint("a b/c").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/blog/a%20b%2Fc");
    }

    #[test]
    fn test_status_error_needs_an_id_for_not_found() {
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, Some("abc"), String::new()),
            ClientError::NotFound(id) if id == "abc"
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, None, String::from("nope")),
            ClientError::UnexpectedStatus(404, body) if body == "nope"
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_REQUEST, Some("abc"), String::new()),
            ClientError::UnexpectedStatus(400, _)
        ));
    }

    #[tokio::test]
    async fn test_negative_count_rejected_locally() {
        // nothing listens on port 9; the check must fire before any request
        let client = HttpBlogClient::new("http://127.0.0.1:9").unwrap();
        assert!(matches!(
            client.create(-1).await,
            Err(ClientError::InvalidCount(-1))
        ));
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(matches!(
            HttpBlogClient::new("mailto:someone@example.com"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            HttpBlogClient::new("not a url"),
            Err(ClientError::UrlError(_))
        ));
    }
}
