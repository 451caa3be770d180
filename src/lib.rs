pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod normalize;
pub mod pipeline;
pub mod regression;
pub mod resolver;
pub mod server;
pub mod table;
pub mod types;

pub use error::{PipelineError, Result};
pub use pipeline::{get_museum_dataset, make_predictions, AppContext};
