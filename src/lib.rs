pub mod chart;
pub mod error;
pub mod loader;
pub mod model;
pub mod output;
pub mod stats;
