use base::BufferError;
use image::ImageError;
use infer::{InferError, RunError};
use std::fmt;

/// The pipeline stage that was being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Graph,
    Session,
    Image,
    Tensor,
    Inference,
    Labels,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Graph => "graph",
            Step::Session => "session",
            Step::Image => "image",
            Step::Tensor => "tensor",
            Step::Inference => "inference",
            Step::Labels => "labels",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error(transparent)]
    Io(#[from] BufferError),
    #[error("{0}")]
    GraphImport(String),
    #[error("{0}")]
    SessionInit(String),
    #[error(transparent)]
    Run(#[from] RunError),
    #[error(transparent)]
    Decode(#[from] ImageError),
    #[error("{0}")]
    Tensor(String),
    #[error("{0}")]
    Labels(String),
}

impl From<InferError> for ErrorKind {
    fn from(err: InferError) -> Self {
        match err {
            InferError::GraphImport(msg) => ErrorKind::GraphImport(msg),
            InferError::SessionInit(msg) => ErrorKind::SessionInit(msg),
            InferError::Run(err) => ErrorKind::Run(err),
            InferError::Preprocess(msg) => ErrorKind::Tensor(msg),
            InferError::Tensor(err) => ErrorKind::Tensor(err.to_string()),
            InferError::Buffer(err) => ErrorKind::Io(err),
        }
    }
}

/// A failed pipeline: which step, and why.
#[derive(Debug, thiserror::Error)]
#[error("error at step \"{step}\": {kind}")]
pub struct PipelineError {
    pub step: Step,
    #[source]
    pub kind: ErrorKind,
}

impl PipelineError {
    pub fn new(step: Step, kind: impl Into<ErrorKind>) -> Self {
        Self {
            step,
            kind: kind.into(),
        }
    }

    pub(crate) fn at<E: Into<ErrorKind>>(step: Step) -> impl FnOnce(E) -> Self {
        move |err| Self::new(step, err)
    }
}
