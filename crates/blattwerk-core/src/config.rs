// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sheet extraction configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tunable settings for the sheet extraction pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Median pre-blur kernel size in pixels (odd) applied before Otsu
    /// binarization. Large kernels suppress printed marks so only the sheet
    /// outline survives thresholding.
    pub blur_kernel: u32,
    /// Width of the rectified canvas before the margin crop.
    pub target_width: u32,
    /// Height of the rectified canvas before the margin crop.
    pub target_height: u32,
    /// Pixels trimmed from each edge of the rectified canvas.
    pub margin_px: u32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            blur_kernel: 17,
            target_width: 1020,
            target_height: 1520,
            margin_px: 10,
        }
    }
}

impl SheetConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Write the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_pipeline() {
        let config = SheetConfig::default();
        assert_eq!(config.blur_kernel, 17);
        assert_eq!(config.target_width, 1020);
        assert_eq!(config.target_height, 1520);
        assert_eq!(config.margin_px, 10);
    }

    #[test]
    fn json_round_trip_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.json");
        let config = SheetConfig {
            blur_kernel: 9,
            ..SheetConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(SheetConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let err = SheetConfig::load("/nonexistent/sheet.json").unwrap_err();
        assert!(matches!(err, crate::BlattwerkError::Io(_)));
    }
}
