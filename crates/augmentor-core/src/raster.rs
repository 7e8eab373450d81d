//! Core raster type for the augmentation pipeline.

use serde::{Deserialize, Serialize};

/// Filter type for raster resampling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// A single-channel raster with 8-bit intensity values.
///
/// Dimensions are not fixed: pipeline stages routinely return rasters whose
/// extents differ from their input (rotation and shear grow the canvas,
/// trimming shrinks it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Number of rows (image height in pixels).
    pub rows: u32,
    /// Number of columns (image width in pixels).
    pub cols: u32,
    /// Intensity values in row-major order (1 byte per pixel).
    /// Length should be rows * cols.
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Create a new raster with the given dimensions and pixel data.
    pub fn new(rows: u32, cols: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (rows * cols) as usize,
            "Pixel buffer size mismatch"
        );
        Self { rows, cols, pixels }
    }

    /// Create a raster filled with a single intensity value.
    pub fn filled(rows: u32, cols: u32, value: u8) -> Self {
        Self {
            rows,
            cols,
            pixels: vec![value; (rows * cols) as usize],
        }
    }

    /// Create a raster from an image::GrayImage.
    pub fn from_gray_image(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            rows: height,
            cols: width,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an image::GrayImage for further processing.
    pub fn to_gray_image(&self) -> Option<image::GrayImage> {
        image::GrayImage::from_raw(self.cols, self.rows, self.pixels.clone())
    }

    /// Get the intensity at (row, col).
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> u8 {
        self.pixels[(row * self.cols + col) as usize]
    }

    /// Get one row of intensities as a slice.
    #[inline]
    pub fn row(&self, row: u32) -> &[u8] {
        let start = (row * self.cols) as usize;
        &self.pixels[start..start + self.cols as usize]
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.rows * self.cols
    }

    /// Check if this is an empty/invalid raster.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0 || self.pixels.is_empty()
    }
}
