use std::path::PathBuf;

use crate::{error::ModelError, sentiment::NaiveBayes};

pub struct ModelManager {
    path: PathBuf,
}

impl ModelManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub async fn load(&self) -> Result<NaiveBayes, ModelError> {
        let content = async_fs::read_to_string(&self.path).await?;
        let model: NaiveBayes = serde_json::from_str(&content)?;
        Ok(model)
    }

    /// The trained model if one was saved, otherwise the seeded default.
    pub async fn load_or_seeded(&self) -> Result<NaiveBayes, ModelError> {
        match async_fs::metadata(&self.path).await {
            Ok(_) => self.load().await,
            Err(_) => Ok(NaiveBayes::seeded()),
        }
    }

    pub async fn persist(&self, model: &NaiveBayes) -> Result<(), ModelError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string(model)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }
}
