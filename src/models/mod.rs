pub mod classifier;
pub mod features;
