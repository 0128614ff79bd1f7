use base::Tensor;
use std::fmt;

/// Sample precision a codec decoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    U8,
    U16,
    F32,
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SampleType::U8 => "u8",
            SampleType::U16 => "u16",
            SampleType::F32 => "f32",
        })
    }
}

/// Decoded pixels as a `[height, width, channels]` tensor, in the codec's
/// native precision.
#[derive(Debug, Clone, PartialEq)]
pub enum Image {
    U8(Tensor<u8>),
    U16(Tensor<u16>),
    F32(Tensor<f32>),
}

impl Image {
    pub fn sample_type(&self) -> SampleType {
        match self {
            Image::U8(_) => SampleType::U8,
            Image::U16(_) => SampleType::U16,
            Image::F32(_) => SampleType::F32,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            Image::U8(t) => t.shape(),
            Image::U16(t) => t.shape(),
            Image::F32(t) => t.shape(),
        }
    }

    /// `(height, width, channels)`. Zero for a tensor that is not rank 3.
    pub fn dims(&self) -> (usize, usize, usize) {
        match *self.shape() {
            [height, width, channels] => (height, width, channels),
            _ => (0, 0, 0),
        }
    }

    pub fn height(&self) -> usize {
        self.dims().0
    }

    pub fn width(&self) -> usize {
        self.dims().1
    }

    pub fn channels(&self) -> usize {
        self.dims().2
    }
}
