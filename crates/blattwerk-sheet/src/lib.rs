// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// blattwerk-sheet — Answer-sheet location and rectification.
//
// Provides border thresholding (median pre-blur + Otsu), four-quadrant vertex
// detection (boundary profiles + farthest-point-from-chord corner search),
// and perspective rectification of the detected sheet onto a fixed-size
// canvas.

pub mod extract;
pub mod rectify;
pub mod threshold;
pub mod vertex;

// Re-export the primary entry points so callers can use
// `blattwerk_sheet::SheetExtractor` etc.
pub use extract::SheetExtractor;
pub use rectify::rectify;
pub use threshold::binarize;
pub use vertex::detect_vertices;
