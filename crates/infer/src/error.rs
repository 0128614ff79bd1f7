#[derive(Debug, thiserror::Error)]
pub enum InferError {
    #[error("graph import failed: {0}")]
    GraphImport(String),
    #[error("session init failed: {0}")]
    SessionInit(String),
    #[error("run failed: {0}")]
    Run(#[from] RunError),
    #[error("preprocess failed: {0}")]
    Preprocess(String),
    #[error(transparent)]
    Tensor(#[from] base::TensorError),
    #[error(transparent)]
    Buffer(#[from] base::BufferError),
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("no input bindings given")]
    NoInputs,
    #[error("no output bindings given")]
    NoOutputs,
    #[error("no operation named \"{name}\" in graph")]
    UnknownOperation { name: String },
    #[error("operation \"{name}\" has {available} output(s), index {index} requested")]
    UnknownOutput {
        name: String,
        index: usize,
        available: usize,
    },
    #[error("shape mismatch at \"{name}\": graph expects {expected}, got {got:?}")]
    ShapeMismatch {
        name: String,
        expected: String,
        got: Vec<usize>,
    },
    #[error("type mismatch at \"{name}\": graph expects {expected}, got f32")]
    DatumMismatch { name: String, expected: String },
    #[error("{0}")]
    Runtime(String),
}

impl RunError {
    pub(crate) fn runtime(err: impl std::fmt::Display) -> Self {
        RunError::Runtime(format!("{err:#}"))
    }
}
