#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the barcode-embed crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free while still
//! exposing a thoroughly documented error surface for library consumers.

use std::path::{Path, PathBuf};

/// Unified error type returned by the facade, the rendering engine, the preset
/// loader and the CLI.
///
/// Format resolution failures ([`Error::MissingFormat`],
/// [`Error::UnknownFormat`]) are raised by the facade itself. Every other
/// rendering failure originates in the engine and reaches the caller
/// unchanged.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Raised when a request carries an empty format token.
    #[error("barcode format is required")]
    MissingFormat,
    /// Raised when a request carries a format token outside the supported set.
    #[error("barcode format {format} is unknown")]
    UnknownFormat {
        /// Format token exactly as supplied by the caller.
        format: String
    },
    /// The symbology identifier is unknown or has no encoder.
    #[error("barcode type {symbology} is not supported")]
    UnsupportedSymbology {
        /// Symbology identifier as supplied by the caller.
        symbology: String
    },
    /// The code contains characters or a length the symbology cannot encode.
    #[error("invalid code for {symbology}: {message}")]
    InvalidCode {
        /// Symbology that rejected the code.
        symbology: String,
        /// Human readable description of the problem.
        message:   String
    },
    /// The code carries a check digit that does not match its payload.
    #[error("invalid check digit for {symbology}: expected {expected}, found {found}")]
    InvalidCheckDigit {
        /// Symbology that rejected the code.
        symbology: String,
        /// Check digit computed from the payload.
        expected:  char,
        /// Check digit present in the code.
        found:     char
    },
    /// Width factor or height outside the accepted range.
    #[error("invalid render parameter: {message}")]
    InvalidParameter {
        /// Human readable description of the rejected parameter.
        message: String
    },
    /// The color representation does not fit the output format.
    #[error("color {color} cannot be used for {format} output")]
    ColorMismatch {
        /// Output format requested by the caller.
        format: String,
        /// Rendered form of the offending color.
        color:  String
    },
    /// Wraps raster encoding failures reported by the `image` crate.
    #[error("failed to encode barcode image: {source}")]
    ImageEncode {
        /// Underlying encoder error.
        source: image::ImageError
    },
    /// Wraps I/O errors that occur while reading configuration or code lists.
    #[error("failed to read input from {path:?}: {source}")]
    Io {
        /// Location of the file being read.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps I/O errors that occur while writing rendered artifacts.
    #[error("failed to write barcode artifact at {path:?}: {source}")]
    ArtifactIo {
        /// Location of the artifact being produced.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Wraps serialization errors when writing manifests.
    #[error("failed to serialize manifest: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    },
    /// Returned when configuration or CLI input violates invariants.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs an [`Error::InvalidCode`] for the given symbology.
    pub fn invalid_code<S, M>(symbology: S, message: M) -> Self
    where
        S: Into<String>,
        M: Into<String>
    {
        Self::InvalidCode {
            symbology: symbology.into(),
            message:   message.into()
        }
    }

    /// Constructs an [`Error::InvalidParameter`].
    pub fn invalid_parameter<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::InvalidParameter {
            message: message.into()
        }
    }

    /// Returns `true` for failures raised while resolving the output format,
    /// as opposed to failures reported by the rendering engine.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::MissingFormat | Self::UnknownFormat { .. })
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(source: image::ImageError) -> Self {
        Self::ImageEncode {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the input file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::ArtifactIo`] variant capturing the failing path and
/// source.
///
/// # Parameters
///
/// * `path` - Location of the artifact that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn artifact_io_error(path: &Path, source: std::io::Error) -> Error {
    Error::ArtifactIo {
        path: path.to_path_buf(),
        source
    }
}
