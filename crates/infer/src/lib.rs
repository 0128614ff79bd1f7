//! Graph import, sessions and input tensor construction for frozen
//! TensorFlow graphs, on top of the `tract` runtime.

pub mod binding;
pub mod error;
pub mod graph;
pub mod session;
pub mod tensor_builder;

pub use binding::{IoBinding, ParseBindingError};
pub use error::{InferError, RunError};
pub use graph::Graph;
pub use session::Session;
pub use tensor_builder::{PixelConversion, build_tensor};
