// src/routes.rs

use actix_web::{get, post, web, HttpResponse, Responder};
use anyhow::{Context, Result};
use log::error;
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

use crate::models::features::extract_features;
use crate::registry::load_classifier;
use crate::utils::constants::{MODEL_NAME, SERVICE_NAME};
use crate::utils::db_connect::PgPool;

#[derive(Serialize)]
pub struct PredictionResponse {
    pub prediction: i32,
    pub probability: f64,
}

/// The whole request transaction: body → features → model → result. Every
/// failure bubbles up to the single boundary in `predict`.
async fn run_prediction(pool: &PgPool, body: &[u8]) -> Result<PredictionResponse> {
    let payload: JsonValue =
        serde_json::from_slice(body).context("Request body is not valid JSON")?;
    let features = extract_features(&payload)?;

    let classifier = load_classifier(pool, MODEL_NAME).await?;

    let prediction = classifier.predict(&features)?;
    let proba = classifier.predict_proba(&features)?;

    Ok(PredictionResponse {
        prediction,
        // Probability of class 1 (default)
        probability: proba[1],
    })
}

#[post("/predict")]
pub async fn predict(pool: web::Data<PgPool>, body: web::Bytes) -> impl Responder {
    match run_prediction(pool.get_ref(), &body).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Prediction request failed: {:#}", e);
            HttpResponse::InternalServerError().json(json!({ "error": format!("{:#}", e) }))
        }
    }
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "model": MODEL_NAME,
    }))
}
