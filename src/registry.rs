// src/registry.rs

use anyhow::{bail, Context, Result};
use log::info;
use serde_json::Value as JsonValue;

use crate::models::classifier::CreditClassifier;
use crate::utils::db_connect::PgPool;

/// Loads the newest version of the named classifier from the registry. The
/// artifact is stored as JSON in the `parameters` column by the training
/// pipeline; nothing here writes to the registry.
pub async fn load_classifier(pool: &PgPool, model_type: &str) -> Result<CreditClassifier> {
    let conn = pool
        .get()
        .await
        .context("Failed to get registry connection from pool")?;

    let row_opt = conn
        .query_opt(
            "SELECT parameters FROM ml_registry.ml_models
             WHERE model_type = $1 ORDER BY version DESC LIMIT 1",
            &[&model_type],
        )
        .await
        .context("Failed to query registry for latest model")?;

    let Some(row) = row_opt else {
        bail!("No model named '{}' found in registry", model_type);
    };

    let model_json: JsonValue = row.get(0);
    let classifier: CreditClassifier = serde_json::from_value(model_json)
        .with_context(|| format!("Stored model '{}' is not a valid classifier", model_type))?;

    info!(
        "Loaded classifier '{}' (v{}) from registry.",
        model_type, classifier.version
    );
    Ok(classifier)
}
