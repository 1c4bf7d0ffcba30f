// Directory-backed resource source
use crate::application::resource_source::{ResourceError, ResourceSource};
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileResourceSource {
    root: PathBuf,
}

impl FileResourceSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, ResourceError> {
        // Resource names are bare file names; anything with a path component is rejected
        let is_plain = !name.is_empty()
            && !name.contains(['/', '\\'])
            && name != "."
            && name != "..";
        if !is_plain {
            return Err(ResourceError::NotFound(name.to_string()));
        }
        Ok(self.root.join(name))
    }
}

#[async_trait]
impl ResourceSource for FileResourceSource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        let path = self.resolve(name)?;
        tracing::debug!("Reading resource {} from {}", name, path.display());

        tokio::fs::read(&path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(name.to_string())
            } else {
                ResourceError::Io {
                    name: name.to_string(),
                    source,
                }
            }
        })
    }
}
