use crate::InferError;
use base::Tensor;
use image::Image;

/// How decoded samples become `f32` tensor values.
///
/// Samples are always converted by value; the pixel bytes are never
/// reinterpreted as float storage.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PixelConversion {
    /// `value as f32`, so a u8 sample of 200 becomes 200.0.
    #[default]
    Cast,
    /// `(value - mean) / std`.
    Normalize { mean: f32, std: f32 },
}

impl PixelConversion {
    pub fn normalize(mean: f32, std: f32) -> Result<Self, InferError> {
        let conversion = PixelConversion::Normalize { mean, std };
        conversion.validate()?;
        Ok(conversion)
    }

    fn validate(&self) -> Result<(), InferError> {
        match *self {
            PixelConversion::Cast => Ok(()),
            PixelConversion::Normalize { mean, std } => {
                if !mean.is_finite() {
                    return Err(InferError::Preprocess(format!("mean must be finite, got {mean}")));
                }
                if !std.is_finite() || std == 0.0 {
                    return Err(InferError::Preprocess(format!(
                        "std must be finite and non-zero, got {std}"
                    )));
                }
                Ok(())
            }
        }
    }

    #[inline]
    pub fn apply(&self, value: f32) -> f32 {
        match *self {
            PixelConversion::Cast => value,
            PixelConversion::Normalize { mean, std } => (value - mean) / std,
        }
    }
}

/// Builds the graph input tensor for `image`.
///
/// The result is always `[1, height, width, channels]` of `f32`, with the
/// channel order of the decoded image. No resizing or cropping happens here;
/// an image that does not match the graph's input shape is rejected later by
/// `Session::run`.
pub fn build_tensor(image: &Image, conversion: PixelConversion) -> Result<Tensor<f32>, InferError> {
    conversion.validate()?;

    let data: Vec<f32> = match image {
        Image::U8(t) => t.data.iter().map(|&v| conversion.apply(v as f32)).collect(),
        Image::U16(t) => t.data.iter().map(|&v| conversion.apply(v as f32)).collect(),
        Image::F32(t) => t.data.iter().map(|&v| conversion.apply(v)).collect(),
    };
    let (height, width, channels) = image.dims();
    let shape = vec![1, height, width, channels];
    let tensor = Tensor::new(shape, data)?;

    log::debug!("built input tensor {:?} ({:?})", tensor.shape(), conversion);
    Ok(tensor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rejects_zero_std() {
        assert!(matches!(
            PixelConversion::normalize(128.0, 0.0),
            Err(InferError::Preprocess(_))
        ));
        assert!(PixelConversion::normalize(f32::NAN, 1.0).is_err());
    }

    #[test]
    fn test_apply() {
        assert_eq!(PixelConversion::Cast.apply(200.0), 200.0);
        let inception = PixelConversion::normalize(128.0, 128.0).unwrap();
        assert_eq!(inception.apply(0.0), -1.0);
        assert_eq!(inception.apply(128.0), 0.0);
        assert_eq!(inception.apply(192.0), 0.5);
    }
}
