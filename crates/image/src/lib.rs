//! Image codec boundary for the label-image pipeline.
//!
//! A thin wrapper around the `image` crate that decodes an encoded image held
//! in memory into a `Tensor<T>` from `base`. All scratch state of the codec is
//! owned by a single call; nothing leaks from one decode to the next.
//!
//! All decoded images use HWC layout: `[height, width, channels]`. Channel
//! order and count are whatever the codec produced; no color-space conversion
//! is performed.

pub mod error;
pub mod image;

pub use error::ImageError;
pub use image::{Image, SampleType};

use base::Tensor;
use crates_image::{DynamicImage, ImageEncoder};

fn to_tensor<T>(
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<T>,
) -> Result<Tensor<T>, ImageError> {
    let shape = vec![height as usize, width as usize, channels];
    Ok(Tensor::new(shape, data)?)
}

/// Decodes an image from raw bytes into a typed tensor.
///
/// The format is auto-detected (JPEG and PNG are linked in). The returned
/// `Image` keeps the original sample precision (u8, u16 or f32).
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is invalid or the format is unsupported.
/// Returns `ImageError::Tensor` if tensor construction fails.
pub fn decode_image(data: &[u8]) -> Result<Image, ImageError> {
    if data.is_empty() {
        return Err(ImageError::Decode("empty image buffer".to_string()));
    }
    let img = crates_image::load_from_memory(data)?;

    let image = match img {
        DynamicImage::ImageLuma8(buf) => {
            let (w, h) = buf.dimensions();
            Image::U8(to_tensor(w, h, 1, buf.into_raw())?)
        }
        DynamicImage::ImageLumaA8(buf) => {
            let (w, h) = buf.dimensions();
            Image::U8(to_tensor(w, h, 2, buf.into_raw())?)
        }
        DynamicImage::ImageRgb8(buf) => {
            let (w, h) = buf.dimensions();
            Image::U8(to_tensor(w, h, 3, buf.into_raw())?)
        }
        DynamicImage::ImageRgba8(buf) => {
            let (w, h) = buf.dimensions();
            Image::U8(to_tensor(w, h, 4, buf.into_raw())?)
        }
        DynamicImage::ImageLuma16(buf) => {
            let (w, h) = buf.dimensions();
            Image::U16(to_tensor(w, h, 1, buf.into_raw())?)
        }
        DynamicImage::ImageLumaA16(buf) => {
            let (w, h) = buf.dimensions();
            Image::U16(to_tensor(w, h, 2, buf.into_raw())?)
        }
        DynamicImage::ImageRgb16(buf) => {
            let (w, h) = buf.dimensions();
            Image::U16(to_tensor(w, h, 3, buf.into_raw())?)
        }
        DynamicImage::ImageRgba16(buf) => {
            let (w, h) = buf.dimensions();
            Image::U16(to_tensor(w, h, 4, buf.into_raw())?)
        }
        DynamicImage::ImageRgb32F(buf) => {
            let (w, h) = buf.dimensions();
            Image::F32(to_tensor(w, h, 3, buf.into_raw())?)
        }
        DynamicImage::ImageRgba32F(buf) => {
            let (w, h) = buf.dimensions();
            Image::F32(to_tensor(w, h, 4, buf.into_raw())?)
        }
        // DynamicImage is non-exhaustive
        _ => {
            let rgba = img.to_rgba8();
            let (w, h) = rgba.dimensions();
            Image::U8(to_tensor(w, h, 4, rgba.into_raw())?)
        }
    };

    log::debug!(
        "decoded {}x{}x{} {} image",
        image.width(),
        image.height(),
        image.channels(),
        image.sample_type()
    );
    Ok(image)
}

/// Encodes an 8-bit `Image` with 1 or 3 channels as JPEG bytes.
///
/// `quality` ranges over 1–100, higher is better.
///
/// # Errors
///
/// Returns `ImageError::Encode` for non-u8 images, unsupported channel counts,
/// or encoder failures.
pub fn encode_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, ImageError> {
    let Image::U8(tensor) = image else {
        return Err(ImageError::Encode(format!(
            "JPEG needs u8 samples, got {}",
            image.sample_type()
        )));
    };
    let color_type = match image.channels() {
        1 => crates_image::ExtendedColorType::L8,
        3 => crates_image::ExtendedColorType::Rgb8,
        channels => {
            return Err(ImageError::Encode(format!(
                "unsupported channel count: {channels}"
            )));
        }
    };

    let mut buffer = Vec::new();
    crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            &tensor.data,
            image.width() as u32,
            image.height() as u32,
            color_type,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}
