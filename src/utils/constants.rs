// src/utils/constants.rs

/// Registry name of the classifier this service answers with. The artifact is
/// produced by the training pipeline; this service only ever reads it.
pub const MODEL_NAME: &str = "credit-default-classifier";

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "credit-prediction-api";

/// Bind address used when PREDICTOR_ADDR is not set.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
