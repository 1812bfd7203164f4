// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Vertex detection — four-quadrant decomposition, orientation normalization,
// and per-quadrant corner search over a binarized sheet photo.

pub mod corner;
pub mod geometry;
pub mod profile;

pub use corner::locate_corner;
pub use profile::{BoundaryProfile, scan_boundary};

use blattwerk_core::error::Result;
use blattwerk_core::{Point, QuadrantPosition, SheetCorners};
use image::{GrayImage, imageops};
use tracing::{debug, instrument};

/// Split an image into four axis-aligned quadrants.
///
/// The split point defaults to the midpoint row and column (integer floor).
/// Quadrants come back in the fixed top-left, top-right, bottom-left,
/// bottom-right order.
pub fn split_quadrants(
    image: &GrayImage,
    split_row: Option<u32>,
    split_col: Option<u32>,
) -> [GrayImage; 4] {
    let (width, height) = image.dimensions();
    let row = split_row.unwrap_or(height / 2);
    let col = split_col.unwrap_or(width / 2);

    [
        imageops::crop_imm(image, 0, 0, col, row).to_image(),
        imageops::crop_imm(image, col, 0, width - col, row).to_image(),
        imageops::crop_imm(image, 0, row, col, height - row).to_image(),
        imageops::crop_imm(image, col, row, width - col, height - row).to_image(),
    ]
}

/// Mirror an image along the requested axes.
///
/// Flipping both axes is a 180° rotation; flipping neither copies the input.
pub fn mirror(image: &GrayImage, flip_horizontal: bool, flip_vertical: bool) -> GrayImage {
    match (flip_horizontal, flip_vertical) {
        (false, false) => image.clone(),
        (true, false) => imageops::flip_horizontal(image),
        (false, true) => imageops::flip_vertical(image),
        (true, true) => imageops::rotate180(image),
    }
}

/// Bring every quadrant into the top-left quadrant's orientation, so the
/// corner locator always searches the same relative position.
pub fn normalize_quadrants(quadrants: &[GrayImage; 4]) -> [GrayImage; 4] {
    std::array::from_fn(|index| {
        let (flip_h, flip_v) = QuadrantPosition::ALL[index].mirror_flags();
        mirror(&quadrants[index], flip_h, flip_v)
    })
}

/// Map quadrant-local corners back to full-image coordinates, undoing the
/// mirroring applied by [`normalize_quadrants`].
///
/// `local` is in the fixed top-left, top-right, bottom-left, bottom-right
/// order.
pub fn to_global(local: [Point; 4], height: u32, width: u32) -> SheetCorners {
    SheetCorners {
        top_left: local[0],
        top_right: Point::new(width - local[1].x, local[1].y),
        bottom_left: Point::new(local[2].x, height - local[2].y),
        bottom_right: Point::new(width - local[3].x, height - local[3].y),
    }
}

/// Detect the four sheet corners in a binarized image.
///
/// Splits the image at its midpoint, normalizes each quadrant's orientation,
/// locates one corner per quadrant, and maps the results back to full-image
/// coordinates. There is no partial result: if any quadrant fails on both
/// scan axes the whole call fails.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn detect_vertices(image: &GrayImage) -> Result<SheetCorners> {
    let (width, height) = image.dimensions();
    let quadrants = split_quadrants(image, None, None);
    let normalized = normalize_quadrants(&quadrants);

    let mut local = [Point::new(0, 0); 4];
    for (index, position) in QuadrantPosition::ALL.into_iter().enumerate() {
        local[index] = locate_corner(&normalized[index], position)?;
    }

    let corners = to_global(local, height, width);
    debug!(
        top_left = %corners.top_left,
        top_right = %corners.top_right,
        bottom_left = %corners.bottom_left,
        bottom_right = %corners.bottom_right,
        "Sheet corners mapped to image coordinates"
    );
    Ok(corners)
}
