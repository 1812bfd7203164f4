// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Corner location — boundary profile plus farthest-point-from-chord search,
// with a fixed row-then-column axis fallback.

use blattwerk_core::error::{BlattwerkError, Result};
use blattwerk_core::{Point, QuadrantPosition, ScanAxis};
use image::GrayImage;
use tracing::debug;

use crate::vertex::geometry::farthest_point;
use crate::vertex::profile::scan_boundary;

/// Axis attempt order. Fixed policy: rows first, columns as the fallback.
const AXIS_ORDER: [ScanAxis; 2] = [ScanAxis::Rows, ScanAxis::Columns];

/// Locate the outer corner of one orientation-normalized quadrant.
///
/// Scans rows first, falling back to columns when the row profile does not
/// describe a single connected edge. Returns quadrant-local coordinates.
pub fn locate_corner(quadrant: &GrayImage, position: QuadrantPosition) -> Result<Point> {
    for axis in AXIS_ORDER {
        match corner_along_axis(quadrant, axis) {
            Ok(corner) => {
                debug!(quadrant = %position, %axis, corner = %corner, "Corner located");
                return Ok(corner);
            }
            Err(BlattwerkError::BoundaryDetection { reason, .. }) => {
                debug!(quadrant = %position, %axis, reason = %reason, "Scan axis rejected");
            }
            Err(other) => return Err(other),
        }
    }
    Err(BlattwerkError::BothAxesFailed { quadrant: position })
}

/// Corner candidate along one scan axis.
///
/// The chord is anchored at `(first valid line, scan extent)` and
/// `(last valid line, its boundary index)`; the sheet corner is the profile
/// point farthest from that chord.
fn corner_along_axis(image: &GrayImage, axis: ScanAxis) -> Result<Point> {
    let profile = scan_boundary(image, axis)?;

    let extent = match axis {
        ScanAxis::Rows => image.width(),
        ScanAxis::Columns => image.height(),
    };
    let a = Point::new(profile.first_position(), extent);
    let b = Point::new(profile.last_position(), profile.last_value());

    let point = farthest_point(
        &profile.valid_positions,
        &profile.valid_values,
        Some(a),
        Some(b),
    )?;
    debug!(%axis, a = %a, b = %b, profile_point = %point, "Farthest profile point found");

    // The profile point is (line position, boundary index); reorder into
    // (x, y) pixel coordinates.
    Ok(match axis {
        ScanAxis::Rows => Point::new(point.y, point.x),
        ScanAxis::Columns => point,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    /// Fill rows `from..to` of `image` from column `start(row)` to the right
    /// edge.
    fn fill_rows(image: &mut GrayImage, from: u32, to: u32, start: impl Fn(u32) -> u32) {
        let width = image.width();
        for y in from..to {
            for x in start(y)..width {
                image.put_pixel(x, y, Luma([255u8]));
            }
        }
    }

    /// A boundary that descends steeply (the sheet's top edge) and then runs
    /// almost flat (its left edge) has its corner at the knee.
    #[test]
    fn knee_of_the_boundary_is_the_corner() {
        let mut image = GrayImage::new(100, 100);
        // Rows 10..=20: first foreground walks in from 90 to 30.
        fill_rows(&mut image, 10, 21, |y| 90 - 6 * (y - 10));
        // Rows 21..100: vertical edge at column 30.
        fill_rows(&mut image, 21, 100, |_| 30);

        let corner = locate_corner(&image, QuadrantPosition::TopLeft).unwrap();
        assert_eq!(corner, Point::new(30, 20));
    }

    /// A shape invisible to the row scan (every row starts at column 0) is
    /// still located through the column fallback.
    #[test]
    fn row_failure_falls_back_to_columns() {
        let mut image = GrayImage::new(100, 100);
        // Two stacked horizontal stripes sharing columns 5..95: the row scan
        // sees a broken run, the column scan a single one.
        fill_stripe(&mut image, 10, 21, 5, 95);
        fill_stripe(&mut image, 40, 51, 5, 95);

        let corner = locate_corner(&image, QuadrantPosition::BottomLeft).unwrap();
        // Column profile is flat at row 10; the point farthest from the
        // chord (5, 100) -> (94, 10) is the first profile point.
        assert_eq!(corner, Point::new(5, 10));
    }

    #[test]
    fn both_axes_failing_reports_the_quadrant() {
        // A full-width, full-height block anchored at the origin: every row
        // and every column starts at index 0.
        let mut image = GrayImage::new(50, 50);
        fill_stripe(&mut image, 0, 50, 0, 25);

        let err = locate_corner(&image, QuadrantPosition::BottomRight).unwrap_err();
        match err {
            BlattwerkError::BothAxesFailed { quadrant } => {
                assert_eq!(quadrant, QuadrantPosition::BottomRight);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_quadrant_fails_on_both_axes() {
        let image = GrayImage::new(40, 40);
        let err = locate_corner(&image, QuadrantPosition::TopLeft).unwrap_err();
        assert!(matches!(err, BlattwerkError::BothAxesFailed { .. }));
    }

    fn fill_stripe(image: &mut GrayImage, y_from: u32, y_to: u32, x_from: u32, x_to: u32) {
        for y in y_from..y_to {
            for x in x_from..x_to {
                image.put_pixel(x, y, Luma([255u8]));
            }
        }
    }
}
