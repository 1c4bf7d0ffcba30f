// Source trait for the dashboard's static JSON resources
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("resource {0} not found")]
    NotFound(String),
    #[error("failed to read resource {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("request for resource {name} failed: {source}")]
    Http {
        name: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("resource {name} returned status {status}")]
    Status { name: String, status: u16 },
    #[error("failed to parse resource {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Fetch the raw bytes of a named resource
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, ResourceError>;
}

/// Fetch a resource and decode it as JSON
pub async fn fetch_json<T: DeserializeOwned>(
    source: &dyn ResourceSource,
    name: &str,
) -> Result<T, ResourceError> {
    let bytes = source.fetch(name).await?;
    serde_json::from_slice(&bytes).map_err(|source| ResourceError::Parse {
        name: name.to_string(),
        source,
    })
}


#[cfg(test)]
mod tests {
    use super::testing::StaticSource;
    use super::*;
    use crate::domain::summary::DashboardSummary;

    #[tokio::test]
    async fn test_fetch_json_parse_error() {
        let source = StaticSource::default().with("dashboard_data.json", "{not json");
        let err = fetch_json::<DashboardSummary>(&source, "dashboard_data.json")
            .await
            .unwrap_err();
        assert!(matches!(err, ResourceError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_fetch_json_not_found() {
        let source = StaticSource::default();
        let err = fetch_json::<DashboardSummary>(&source, "dashboard_data.json")
            .await
            .unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(name) if name == "dashboard_data.json"));
    }
}
