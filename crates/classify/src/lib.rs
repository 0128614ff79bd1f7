pub mod config;
pub mod error;
pub mod labels;
pub mod pipeline;

pub use config::PipelineConfig;
pub use error::{ErrorKind, PipelineError, Step};
pub use labels::{Prediction, load_labels, top_k};
pub use pipeline::{Classification, Pipeline, State};
