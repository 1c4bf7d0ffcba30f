// HTTP resource source - reads resources relative to a base URL
use crate::application::resource_source::{ResourceError, ResourceSource};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpResourceSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpResourceSource {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn resource_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name.trim_start_matches('/'))
    }
}

#[async_trait]
impl ResourceSource for HttpResourceSource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        let url = self.resource_url(name);
        tracing::debug!("Fetching resource {} from {}", name, url);

        let http_error = |source: reqwest::Error| ResourceError::Http {
            name: name.to_string(),
            source,
        };

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ResourceError::NotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(ResourceError::Status {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(http_error)?;
        Ok(body.to_vec())
    }
}
