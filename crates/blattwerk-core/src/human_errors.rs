// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for scan-station operators.
//
// Every technical error is mapped to plain English with a clear suggestion.
// "Sheet not found" is a distinct, reportable outcome — never a silently
// substituted fallback image.

use crate::error::BlattwerkError;

/// Severity of an error from the operator's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Worth retrying without changing anything.
    Transient,
    /// The operator must do something (retake the photo, pick another file).
    ActionRequired,
    /// Cannot be fixed by retrying or user action — damaged file, internal bug.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the operator should try (shown as body text).
    pub suggestion: String,
    /// Whether the system should auto-retry.
    pub retriable: bool,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert a `BlattwerkError` into a `HumanError` an untrained operator can act on.
pub fn humanize_error(err: &BlattwerkError) -> HumanError {
    match err {
        // -- Detection errors --
        BlattwerkError::BoundaryDetection { .. } | BlattwerkError::BothAxesFailed { .. } => {
            HumanError {
                message: "We couldn't find the answer sheet in this photo.".into(),
                suggestion: "Make sure the whole sheet is visible against a darker background, \
                             with one corner in each quarter of the frame, then take the photo again."
                    .into(),
                retriable: false,
                severity: Severity::ActionRequired,
            }
        }

        // -- Geometry errors --
        BlattwerkError::EmptyCoordinates | BlattwerkError::DegenerateChord { .. } => HumanError {
            message: "The sheet detector hit an internal geometry problem.".into(),
            suggestion: "Try again with a different photo. If this keeps happening, please report it."
                .into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        // -- Rectification errors --
        BlattwerkError::Rectification(_) => HumanError {
            message: "The detected sheet corners don't form a usable rectangle.".into(),
            suggestion: "The sheet may be folded or partly covered. Flatten it, keep the camera \
                         square to the page, and take the photo again."
                .into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        // -- Image / storage --
        BlattwerkError::ImageError(_) => HumanError {
            message: "There's a problem with this image.".into(),
            suggestion: "The image may be damaged or in an unusual format. Try saving it as a \
                         JPEG or PNG first."
                .into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        BlattwerkError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Try choosing the file again."
                        .into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app doesn't have permission to read that file.".into(),
                    suggestion: "Check the file permissions, or try copying the file to a \
                                 different location first."
                        .into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your device's storage may be full."
                        .into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        BlattwerkError::Serialization(_) => HumanError {
            message: "The app had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{QuadrantPosition, ScanAxis};

    #[test]
    fn sheet_not_found_asks_for_a_new_photo() {
        let err = BlattwerkError::BothAxesFailed {
            quadrant: QuadrantPosition::TopRight,
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
        assert!(human.message.contains("answer sheet"));
    }

    #[test]
    fn boundary_failure_maps_like_sheet_not_found() {
        let err = BlattwerkError::BoundaryDetection {
            axis: ScanAxis::Rows,
            reason: "image contains no foreground pixels".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
    }

    #[test]
    fn degenerate_geometry_is_permanent() {
        let human = humanize_error(&BlattwerkError::EmptyCoordinates);
        assert_eq!(human.severity, Severity::Permanent);
        assert!(!human.retriable);
    }

    #[test]
    fn missing_file_is_action_required() {
        let err = BlattwerkError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
    }

    #[test]
    fn rectification_failure_is_action_required() {
        let err = BlattwerkError::Rectification("degenerate quadrilateral".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
    }
}
