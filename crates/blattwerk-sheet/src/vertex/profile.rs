// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Boundary profiles — per-scan-line first-foreground indices used as a 1-D
// proxy for the document edge inside one quadrant.

use blattwerk_core::ScanAxis;
use blattwerk_core::error::{BlattwerkError, Result};
use image::GrayImage;

/// Per-line boundary of the foreground region along one scan axis.
///
/// `valid_values` and `valid_positions` are index-aligned and nonempty: they
/// cover exactly the scan lines whose first-foreground index is nonzero.
/// A line whose foreground starts at index 0 is indistinguishable from an
/// empty line; both profile as 0.
#[derive(Debug, Clone)]
pub struct BoundaryProfile {
    /// First-foreground index for every scan line (0 when none was found).
    pub first_foreground: Vec<u32>,
    /// Boundary indices of the valid lines.
    pub valid_values: Vec<u32>,
    /// Positions of the valid lines, aligned with `valid_values`.
    pub valid_positions: Vec<u32>,
}

impl BoundaryProfile {
    /// Position of the first valid line.
    pub fn first_position(&self) -> u32 {
        self.valid_positions[0]
    }

    /// Position of the last valid line.
    pub fn last_position(&self) -> u32 {
        *self
            .valid_positions
            .last()
            .expect("profile has at least one valid line")
    }

    /// Boundary index of the last valid line.
    pub fn last_value(&self) -> u32 {
        *self
            .valid_values
            .last()
            .expect("profile has at least one valid line")
    }
}

/// Scan the boundary profile of a binary image along the chosen axis.
///
/// For [`ScanAxis::Rows`] each scan line is a row and the boundary index is
/// the first nonzero column; for [`ScanAxis::Columns`] lines are columns and
/// the index is the first nonzero row. The nonzero boundary positions must
/// form one unbroken run, otherwise the profile does not describe a single
/// connected document edge and the scan fails.
pub fn scan_boundary(image: &GrayImage, axis: ScanAxis) -> Result<BoundaryProfile> {
    let (width, height) = image.dimensions();
    let (lines, depth) = match axis {
        ScanAxis::Rows => (height, width),
        ScanAxis::Columns => (width, height),
    };

    let mut first_foreground = vec![0u32; lines as usize];
    let mut any_foreground = false;
    for line in 0..lines {
        for step in 0..depth {
            let (x, y) = match axis {
                ScanAxis::Rows => (step, line),
                ScanAxis::Columns => (line, step),
            };
            if image.get_pixel(x, y).0[0] != 0 {
                any_foreground = true;
                first_foreground[line as usize] = step;
                break;
            }
        }
    }

    if !any_foreground {
        return Err(BlattwerkError::BoundaryDetection {
            axis,
            reason: "image contains no foreground pixels".into(),
        });
    }

    let (valid_positions, valid_values): (Vec<u32>, Vec<u32>) = first_foreground
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != 0)
        .map(|(position, &value)| (position as u32, value))
        .unzip();

    let Some((&first, &last)) = valid_positions.first().zip(valid_positions.last()) else {
        return Err(BlattwerkError::BoundaryDetection {
            axis,
            reason: "every scan line starts at index 0".into(),
        });
    };

    if last - first != valid_positions.len() as u32 - 1 {
        return Err(BlattwerkError::BoundaryDetection {
            axis,
            reason: format!(
                "boundary run is broken: positions {first}..={last} cover only {} lines",
                valid_positions.len()
            ),
        });
    }

    Ok(BoundaryProfile {
        first_foreground,
        valid_values,
        valid_positions,
    })
}
