//! HTTP loader for posts.
//!
//! Fetches the JSONPlaceholder `/posts` collection and maps transport,
//! decoding, and not-found outcomes onto the loader error taxonomy. The
//! base URL is injectable so tests can point the loader at a local mock
//! server.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use store_core::loader::{LoadError, Loader};
use store_types::EntityId;

use crate::post::{DevicePost, NetworkPost};

/// The remote collaborator this domain is built against.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Loader fetching posts over HTTP.
#[derive(Debug, Clone)]
pub struct PostLoader {
    client: reqwest::Client,
    base_url: Url,
}

impl Default for PostLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PostLoader {
    /// Create a loader against [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"))
    }

    /// Create a loader against a custom base URL (mock servers, staging).
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, LoadError> {
        self.base_url
            .join(path)
            .map_err(|e| LoadError::Transport(e.to_string()))
    }

    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        let response = response
            .error_for_status()
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl Loader for PostLoader {
    type Device = DevicePost;

    async fn load_all(&self) -> Result<Vec<NetworkPost>, LoadError> {
        let url = self.endpoint("posts")?;
        tracing::debug!(%url, "fetching post collection");

        let body = self.get_bytes(url).await?;
        // An explicitly empty payload is an empty collection, not an error
        if body.is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&body).map_err(|e| LoadError::Decode(e.to_string()))
    }

    async fn load_one(&self, id: EntityId) -> Result<NetworkPost, LoadError> {
        let url = self.endpoint(&format!("posts/{id}"))?;
        tracing::debug!(%url, %id, "fetching post");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(LoadError::Missing(id));
        }
        let response = response
            .error_for_status()
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| LoadError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn post_json(id: u64, title: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "userId": 1,
            "title": title,
            "body": "Mock Body",
        })
    }

    async fn loader_for(server: &MockServer) -> PostLoader {
        PostLoader::with_base_url(Url::parse(&server.uri()).unwrap())
    }

    #[tokio::test]
    async fn load_all_decodes_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(vec![post_json(1, "first"), post_json(2, "second")]),
            )
            .mount(&server)
            .await;

        let posts = loader_for(&server).await.load_all().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].user_id, 1);
        assert_eq!(posts[1].title, "second");
    }

    #[tokio::test]
    async fn load_all_empty_body_is_empty_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let posts = loader_for(&server).await.load_all().await.unwrap();

        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn load_all_malformed_payload_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let result = loader_for(&server).await.load_all().await;

        assert!(matches!(result, Err(LoadError::Decode(_))));
    }

    #[tokio::test]
    async fn load_all_server_error_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = loader_for(&server).await.load_all().await;

        assert!(matches!(result, Err(LoadError::Transport(_))));
    }

    #[tokio::test]
    async fn load_one_decodes_single_post() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(post_json(7, "seventh")))
            .mount(&server)
            .await;

        let post = loader_for(&server)
            .await
            .load_one(EntityId::new(7))
            .await
            .unwrap();

        assert_eq!(post.id, 7);
        assert_eq!(post.title, "seventh");
    }

    #[tokio::test]
    async fn load_one_not_found_is_missing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/42"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = loader_for(&server).await.load_one(EntityId::new(42)).await;

        assert!(matches!(result, Err(LoadError::Missing(id)) if id == EntityId::new(42)));
    }

    #[tokio::test]
    async fn load_one_malformed_payload_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        let result = loader_for(&server).await.load_one(EntityId::new(1)).await;

        assert!(matches!(result, Err(LoadError::Decode(_))));
    }

    #[tokio::test]
    async fn unreachable_remote_is_transport_error() {
        // Nothing is listening on this port
        let loader = PostLoader::with_base_url(Url::parse("http://127.0.0.1:1").unwrap());

        let result = loader.load_all().await;

        assert!(matches!(result, Err(LoadError::Transport(_))));
    }
}
