use std::borrow::Cow;
use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, GrayImage, ImageFormat, ImageReader, Luma};
use ndarray::Array4;

use super::InferenceError;

pub const INPUT_SIZE: u32 = 224;

/// NHWC: batch, height, width, channel.
pub const INPUT_SHAPE: [usize; 4] = [1, INPUT_SIZE as usize, INPUT_SIZE as usize, 1];

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, InferenceError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| InferenceError::Decode(image::ImageError::IoError(e)))?;

    match reader.format() {
        Some(ImageFormat::Png) | Some(ImageFormat::Jpeg) => Ok(reader.decode()?),
        _ => Err(InferenceError::UnsupportedFormat),
    }
}

/// Grayscale, Lanczos resize to 224x224 (aspect ratio not preserved),
/// scale to [0, 1], shape (1, 224, 224, 1).
pub fn preprocess(image: &DynamicImage) -> Array4<f32> {
    let gray = to_luma(image);
    let resized = imageops::resize(&*gray, INPUT_SIZE, INPUT_SIZE, FilterType::Lanczos3);

    Array4::from_shape_fn(
        (INPUT_SHAPE[0], INPUT_SHAPE[1], INPUT_SHAPE[2], INPUT_SHAPE[3]),
        |(_, y, x, _)| f32::from(resized.get_pixel(x as u32, y as u32)[0]) / 255.0,
    )
}

/// ITU-R 601-2 luma in 16.16 fixed point, alpha dropped. `image`'s own
/// `to_luma8` uses Rec. 709 weights, which the model was not trained on.
/// Pixels are converted one at a time, so only the gray output is allocated.
fn to_luma(image: &DynamicImage) -> Cow<'_, GrayImage> {
    if let DynamicImage::ImageLuma8(gray) = image {
        return Cow::Borrowed(gray);
    }

    Cow::Owned(GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, _] = image.get_pixel(x, y).0;
        let luma = (u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000) >> 16;
        Luma([luma as u8])
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use image::{GrayAlphaImage, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

    fn assert_model_ready(tensor: &Array4<f32>) {
        assert_eq!(tensor.shape(), &INPUT_SHAPE);
        assert!(tensor.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, format).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn any_size_and_color_mode_yields_model_shape() {
        let images = vec![
            DynamicImage::ImageRgb8(RgbImage::from_pixel(500, 300, Rgb([10, 200, 30]))),
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 0]))),
            DynamicImage::ImageLuma8(GrayImage::from_fn(224, 224, |x, _| Luma([x as u8]))),
            DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(31, 977, LumaA([0, 255]))),
            DynamicImage::ImageRgb16(image::ImageBuffer::from_pixel(64, 48, Rgb([65535u16, 0, 32768]))),
        ];
        for image in &images {
            assert_model_ready(&preprocess(image));
        }
    }

    #[test]
    fn high_contrast_edges_stay_in_range() {
        // Lanczos overshoots on hard edges; the 8-bit resize must clamp.
        let checker = GrayImage::from_fn(97, 53, |x, y| Luma([if (x + y) % 2 == 0 { 0 } else { 255 }]));
        assert_model_ready(&preprocess(&DynamicImage::ImageLuma8(checker)));
    }

    #[test]
    fn mid_gray_rgb_averages_one_half() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(500, 300, Rgb([128, 128, 128])));
        let tensor = preprocess(&image);
        assert_eq!(tensor.shape(), &[1, 224, 224, 1]);
        let mean = tensor.mean().unwrap();
        assert_abs_diff_eq!(mean, 0.5, epsilon = 0.01);
    }

    #[test]
    fn grayscale_uses_601_luma_weights() {
        let pure = |rgb: [u8; 3]| {
            let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb(rgb)));
            to_luma(&image).get_pixel(0, 0)[0]
        };
        assert_eq!(pure([255, 0, 0]), 76);
        assert_eq!(pure([0, 255, 0]), 150);
        assert_eq!(pure([0, 0, 255]), 29);
        assert_eq!(pure([255, 255, 255]), 255);
        assert_eq!(pure([0, 0, 0]), 0);
    }

    #[test]
    fn gray_input_is_borrowed_and_other_modes_convert_per_pixel() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(6, 4, Luma([77])));
        assert!(matches!(to_luma(&gray), Cow::Borrowed(_)));

        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(6, 4, Rgba([255, 0, 0, 10])));
        let converted = to_luma(&rgba);
        assert_eq!(converted.dimensions(), (6, 4));
        assert!(converted.pixels().all(|p| p[0] == 76));

        let wide = DynamicImage::ImageRgb16(image::ImageBuffer::from_pixel(3, 3, Rgb([65535u16, 65535, 65535])));
        assert!(to_luma(&wide).pixels().all(|p| p[0] == 255));

        let gray_alpha = DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(2, 2, LumaA([130, 0])));
        assert!(to_luma(&gray_alpha).pixels().all(|p| p[0] == 130));
    }

    #[test]
    fn stretches_non_square_inputs() {
        // Left half black, right half white: the boundary stays centred
        // because the width is squeezed rather than cropped or padded.
        let image = GrayImage::from_fn(800, 100, |x, _| Luma([if x < 400 { 0 } else { 255 }]));
        let tensor = preprocess(&DynamicImage::ImageLuma8(image));
        assert_abs_diff_eq!(tensor[[0, 112, 20, 0]], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(tensor[[0, 112, 200, 0]], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(tensor[[0, 0, 200, 0]], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn decodes_png_and_jpeg() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 30, Rgb([90, 90, 90])));
        for format in [ImageFormat::Png, ImageFormat::Jpeg] {
            let decoded = decode_image(&encode(&image, format)).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (40, 30));
        }
    }

    #[test]
    fn rejects_other_formats() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([1, 2, 3])));
        let err = decode_image(&encode(&image, ImageFormat::Bmp)).unwrap_err();
        assert!(matches!(err, InferenceError::UnsupportedFormat));
        assert!(matches!(decode_image(b"not an image"), Err(InferenceError::UnsupportedFormat)));
    }

    #[test]
    fn corrupt_image_is_a_decode_error() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([200, 10, 10])));
        let mut bytes = encode(&image, ImageFormat::Png);
        bytes.truncate(bytes.len() / 2);
        assert!(matches!(decode_image(&bytes), Err(InferenceError::Decode(_))));
    }
}
