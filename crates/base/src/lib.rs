pub mod buffer;
pub mod logging;
pub mod tensor;

pub use buffer::{Buffer, BufferError};
pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};
pub use tensor::{Tensor, TensorError};
