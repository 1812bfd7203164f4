// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sheet extraction pipeline — binarize, detect the four corners, rectify,
// trim.

use blattwerk_core::error::{BlattwerkError, Result};
use blattwerk_core::{SheetConfig, SheetCorners};
use image::{DynamicImage, GrayImage};
use tracing::{info, instrument};

use crate::rectify::rectify;
use crate::threshold::binarize;
use crate::vertex::detect_vertices;

/// Locates and rectifies an answer sheet photographed against a background.
///
/// The pipeline binarizes the photo with a heavy median pre-blur so mostly
/// the sheet outline survives, finds one corner per image quadrant, and warps
/// the original grayscale content onto a fixed-size canvas:
///
/// ```ignore
/// let sheet = SheetExtractor::open("photo.jpg", SheetConfig::default())?
///     .extract()?;
/// ```
#[derive(Debug)]
pub struct SheetExtractor {
    /// The source photo (kept as `DynamicImage` for flexibility).
    image: DynamicImage,
    /// Pipeline settings.
    config: SheetConfig,
}

impl SheetExtractor {
    // -- Construction ---------------------------------------------------------

    /// Create an extractor from raw image bytes (JPEG, PNG, TIFF, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8], config: SheetConfig) -> Result<Self> {
        let image = image::load_from_memory(data).map_err(|err| {
            BlattwerkError::ImageError(format!("failed to decode sheet photo: {}", err))
        })?;
        info!(
            width = image.width(),
            height = image.height(),
            "Sheet photo loaded"
        );
        Ok(Self { image, config })
    }

    /// Create an extractor from a file path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>, config: SheetConfig) -> Result<Self> {
        let image = image::open(path.as_ref()).map_err(|err| {
            BlattwerkError::ImageError(format!(
                "failed to open sheet photo {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        Ok(Self { image, config })
    }

    /// Create an extractor wrapping an existing `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage, config: SheetConfig) -> Self {
        Self { image, config }
    }

    // -- Accessors ------------------------------------------------------------

    /// Borrow the source photo.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the extractor and return the source photo.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    /// Pipeline settings in use.
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    // -- Pipeline -------------------------------------------------------------

    /// Binarize the photo with the configured border filter.
    #[instrument(skip(self))]
    pub fn binarized(&self) -> GrayImage {
        binarize(&self.image.to_luma8(), self.config.blur_kernel)
    }

    /// Detect the four sheet corners in full-image coordinates.
    #[instrument(skip(self))]
    pub fn detect(&self) -> Result<SheetCorners> {
        let corners = detect_vertices(&self.binarized())?;
        info!(
            top_left = %corners.top_left,
            top_right = %corners.top_right,
            bottom_left = %corners.bottom_left,
            bottom_right = %corners.bottom_right,
            "Sheet corners detected"
        );
        Ok(corners)
    }

    /// Run the full pipeline: detect the corners, warp the grayscale photo
    /// onto the configured canvas, and trim the margin.
    #[instrument(skip(self))]
    pub fn extract(&self) -> Result<GrayImage> {
        let corners = self.detect()?;
        let rectified = rectify(
            &self.image.to_luma8(),
            &corners,
            self.config.target_width,
            self.config.target_height,
            self.config.margin_px,
        )?;
        info!(
            width = rectified.width(),
            height = rectified.height(),
            "Sheet rectified"
        );
        Ok(rectified)
    }
}
