// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Blattwerk sheet rectifier.

use serde::{Deserialize, Serialize};

/// Integer pixel position.
///
/// Whether the coordinates are quadrant-local or full-image global is decided
/// by context; the two frames are only ever converted through an explicit
/// transform, never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis along which a boundary profile is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanAxis {
    /// Scan along each row: one first-foreground column index per row.
    Rows,
    /// Scan along each column: one first-foreground row index per column.
    Columns,
}

impl std::fmt::Display for ScanAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rows => write!(f, "row"),
            Self::Columns => write!(f, "column"),
        }
    }
}

/// One quarter of the source image, split at its midpoint row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuadrantPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl QuadrantPosition {
    /// Fixed processing order: top-left, top-right, bottom-left, bottom-right.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Mirror flags `(flip_horizontal, flip_vertical)` that bring this
    /// quadrant's outer corner into the top-left quadrant's orientation.
    pub const fn mirror_flags(self) -> (bool, bool) {
        match self {
            Self::TopLeft => (false, false),
            Self::TopRight => (true, false),
            Self::BottomLeft => (false, true),
            Self::BottomRight => (true, true),
        }
    }
}

impl std::fmt::Display for QuadrantPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TopLeft => write!(f, "top-left"),
            Self::TopRight => write!(f, "top-right"),
            Self::BottomLeft => write!(f, "bottom-left"),
            Self::BottomRight => write!(f, "bottom-right"),
        }
    }
}

/// The four detected sheet corners in full-image coordinates.
///
/// The top-left, top-right, bottom-left, bottom-right ordering is the
/// contract consumed by the rectifier and must never be permuted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetCorners {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl SheetCorners {
    /// Corners in the fixed {top-left, top-right, bottom-left, bottom-right}
    /// order.
    pub const fn to_array(self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }
}
