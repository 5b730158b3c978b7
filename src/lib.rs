pub mod models;
pub mod registry;
pub mod routes;
pub mod utils;
