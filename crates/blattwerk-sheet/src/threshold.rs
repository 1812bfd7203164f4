// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Border thresholding — median pre-blur followed by global Otsu
// binarization. The heavy blur suppresses printed marks so that mostly the
// sheet outline survives as foreground.

use image::GrayImage;
use imageproc::contrast::{ThresholdType, otsu_level, threshold};
use imageproc::filter::median_filter;
use tracing::debug;

/// Binarize a grayscale image: median blur with the given kernel size, then
/// a global threshold chosen from the blurred histogram by Otsu's method.
///
/// `blur_kernel` is the full kernel width in pixels; a kernel of 0 or 1
/// skips the blur. Pixels above the threshold map to 255, the rest to 0.
pub fn binarize(image: &GrayImage, blur_kernel: u32) -> GrayImage {
    let radius = blur_kernel / 2;
    let blurred = if radius == 0 {
        image.clone()
    } else {
        median_filter(image, radius, radius)
    };

    let level = otsu_level(&blurred);
    debug!(blur_kernel, level, "Otsu threshold computed");
    threshold(&blurred, level, ThresholdType::Binary)
}
