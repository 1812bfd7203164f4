// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rectification — perspective warp of the detected sheet onto a fixed-size
// canvas, followed by a border trim.

use blattwerk_core::SheetCorners;
use blattwerk_core::error::{BlattwerkError, Result};
use image::{GrayImage, Luma, imageops};
use imageproc::geometric_transformations::{Interpolation, Projection, warp_into};
use tracing::{debug, instrument};

/// Warp the sheet bounded by `corners` onto a `target_width` x `target_height`
/// canvas, then trim `margin_px` from each edge.
///
/// The warp is applied to the grayscale source so the rectified sheet keeps
/// its mark detail; only vertex detection runs on the binarized image.
#[instrument(skip(image, corners))]
pub fn rectify(
    image: &GrayImage,
    corners: &SheetCorners,
    target_width: u32,
    target_height: u32,
    margin_px: u32,
) -> Result<GrayImage> {
    let src: [(f32, f32); 4] = corners.to_array().map(|p| (p.x as f32, p.y as f32));
    let dst: [(f32, f32); 4] = [
        (0.0, 0.0),
        (target_width as f32, 0.0),
        (0.0, target_height as f32),
        (target_width as f32, target_height as f32),
    ];

    // from_control_points solves for the projective map; collinear or
    // repeated corners have no solution.
    let projection = Projection::from_control_points(src, dst).ok_or_else(|| {
        BlattwerkError::Rectification(format!(
            "no projective transform maps corners {src:?} onto a {target_width}x{target_height} rectangle"
        ))
    })?;

    let mut canvas = GrayImage::new(target_width, target_height);
    warp_into(
        image,
        &projection,
        Interpolation::Bilinear,
        Luma([0u8]),
        &mut canvas,
    );
    debug!(target_width, target_height, "Perspective warp applied");

    crop_margin(&canvas, margin_px)
}

/// Trim `margin_px` pixels from every edge of an image.
pub fn crop_margin(image: &GrayImage, margin_px: u32) -> Result<GrayImage> {
    if margin_px == 0 {
        return Ok(image.clone());
    }

    let (width, height) = image.dimensions();
    if 2 * margin_px >= width || 2 * margin_px >= height {
        return Err(BlattwerkError::Rectification(format!(
            "a margin of {margin_px}px leaves no pixels in a {width}x{height} canvas"
        )));
    }

    let cropped = imageops::crop_imm(
        image,
        margin_px,
        margin_px,
        width - 2 * margin_px,
        height - 2 * margin_px,
    );
    Ok(cropped.to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blattwerk_core::Point;
    use image::Luma;

    fn gradient_image(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| Luma([(x * 3 + y * 5) as u8]))
    }

    /// Corners placed exactly at the canvas corners give the identity warp:
    /// the output matches the source pixel for pixel.
    #[test]
    fn identity_warp_preserves_pixels() {
        let image = gradient_image(64, 64);
        let corners = SheetCorners {
            top_left: Point::new(0, 0),
            top_right: Point::new(64, 0),
            bottom_left: Point::new(0, 64),
            bottom_right: Point::new(64, 64),
        };

        let rectified = rectify(&image, &corners, 64, 64, 0).unwrap();
        assert_eq!(rectified, image);
    }

    #[test]
    fn collinear_corners_are_rejected() {
        let image = gradient_image(32, 32);
        let corners = SheetCorners {
            top_left: Point::new(0, 0),
            top_right: Point::new(10, 10),
            bottom_left: Point::new(20, 20),
            bottom_right: Point::new(30, 30),
        };

        let err = rectify(&image, &corners, 32, 32, 0).unwrap_err();
        assert!(matches!(err, BlattwerkError::Rectification(_)));
    }

    #[test]
    fn margin_crop_trims_every_edge() {
        let image = gradient_image(100, 80);
        let cropped = crop_margin(&image, 10).unwrap();
        assert_eq!(cropped.dimensions(), (80, 60));
        // The top-left of the crop is the (10, 10) pixel of the source.
        assert_eq!(cropped.get_pixel(0, 0), image.get_pixel(10, 10));
    }

    #[test]
    fn zero_margin_is_a_plain_copy() {
        let image = gradient_image(20, 20);
        assert_eq!(crop_margin(&image, 0).unwrap(), image);
    }

    #[test]
    fn margin_consuming_the_canvas_is_rejected() {
        let image = gradient_image(30, 30);
        let err = crop_margin(&image, 15).unwrap_err();
        assert!(matches!(err, BlattwerkError::Rectification(_)));
    }

    /// The default pipeline geometry: 1020x1520 canvas with a 10 px margin
    /// comes out at 1000x1500.
    #[test]
    fn default_geometry_yields_1000_by_1500() {
        let image = gradient_image(1020, 1520);
        let corners = SheetCorners {
            top_left: Point::new(50, 40),
            top_right: Point::new(970, 60),
            bottom_left: Point::new(40, 1480),
            bottom_right: Point::new(980, 1460),
        };

        let rectified = rectify(&image, &corners, 1020, 1520, 10).unwrap();
        assert_eq!(rectified.dimensions(), (1000, 1500));
    }
}
