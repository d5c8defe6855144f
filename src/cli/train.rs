use std::path::PathBuf;

use crate::{config, error, info, management::ModelManager, sentiment::NaiveBayes, success};

/// Trains the sentiment model from two corpora, one document per line.
pub async fn train(positive: PathBuf, negative: PathBuf) {
    let pos_text = match async_fs::read_to_string(&positive).await {
        Ok(text) => text,
        Err(e) => error!("Cannot read {}. Err: {}", positive.display(), e),
    };
    let neg_text = match async_fs::read_to_string(&negative).await {
        Ok(text) => text,
        Err(e) => error!("Cannot read {}. Err: {}", negative.display(), e),
    };

    info!("Training sentiment model...");
    let model = NaiveBayes::train_from_lines(&pos_text, &neg_text);
    if !model.is_trained() {
        error!("Both corpora need at least one non-empty line.");
    }

    let model_mgr = ModelManager::new(config::model_path());
    match model_mgr.persist(&model).await {
        Ok(_) => success!(
            "Model with {} features saved to {}",
            model.vocabulary_size(),
            model_mgr.path().display()
        ),
        Err(e) => error!("Cannot save model. Err: {}", e),
    }
}
