use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use credit_prediction_lib::routes;
use credit_prediction_lib::utils::constants::DEFAULT_BIND_ADDR;
use credit_prediction_lib::utils::db_connect::connect;
use credit_prediction_lib::utils::env::load_env;
use log::info;

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting credit default prediction service");
    load_env();

    let pool = connect()
        .await
        .context("Failed to connect to model registry database")?;

    let addr = std::env::var("PREDICTOR_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    info!("Prediction service listening on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .service(routes::predict)
            .service(routes::health)
    })
    .bind(&addr)
    .with_context(|| format!("Failed to bind {}", addr))?
    .run()
    .await?;

    Ok(())
}
