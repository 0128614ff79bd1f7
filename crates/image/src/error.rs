#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("decode error: {0}")]
    Decode(String),
    #[error("encode error: {0}")]
    Encode(String),
    #[error("tensor error: {0}")]
    Tensor(#[from] base::TensorError),
}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}
