// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Blattwerk.

use thiserror::Error;

use crate::types::{Point, QuadrantPosition, ScanAxis};

/// Top-level error type for all Blattwerk operations.
#[derive(Debug, Error)]
pub enum BlattwerkError {
    // -- Geometry errors --
    #[error("farthest-point search received an empty coordinate sequence")]
    EmptyCoordinates,

    #[error("chord anchors coincide at {at}; perpendicular distance is undefined")]
    DegenerateChord { at: Point },

    // -- Detection errors --
    #[error("boundary scan along the {axis} axis failed: {reason}")]
    BoundaryDetection { axis: ScanAxis, reason: String },

    #[error("no corner found in the {quadrant} quadrant: both scan axes failed")]
    BothAxesFailed { quadrant: QuadrantPosition },

    // -- Rectification errors --
    #[error("rectification failed: {0}")]
    Rectification(String),

    // -- Image / storage --
    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BlattwerkError>;
