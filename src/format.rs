// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Output formats understood by the facade.
//!
//! Each variant knows its MIME type, whether its raw output is binary, and
//! which color representation the renderer expects when the caller leaves the
//! color unset. Both decision points of the facade (color defaulting and
//! output wrapping) match on this enum exhaustively.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{color::Color, error::Error};

/// Named color used for markup outputs when none is configured.
pub const DEFAULT_NAMED_COLOR: &str = "black";
/// RGB triple used for raster outputs when none is configured.
pub const DEFAULT_RGB_COLOR: [u8; 3] = [0, 0, 0];

pub(crate) const SVG_MIME: &str = "image/svg+xml";
pub(crate) const PNG_MIME: &str = "image/png";
pub(crate) const JPG_MIME: &str = "image/jpg";

/// Embeddable output format produced by the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat
{
    /// Scalable vector graphics, embedded as a base64 data URI.
    #[default]
    Svg,
    /// Portable network graphics, embedded as a base64 data URI.
    Png,
    /// JPEG image, embedded as a base64 data URI.
    Jpg,
    /// Inline HTML markup, returned as-is.
    Html,
}

impl OutputFormat
{
    /// Every supported format in declaration order.
    pub const ALL: [OutputFormat; 4] = [Self::Svg, Self::Png, Self::Jpg, Self::Html,];

    /// Resolves a raw format token supplied by a caller.
    ///
    /// Tokens are trimmed and matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFormat`] for blank tokens and
    /// [`Error::UnknownFormat`] for tokens outside the supported set.
    ///
    /// # Examples
    ///
    /// ```
    /// use barcode_embed::{Error, OutputFormat};
    ///
    /// assert_eq!(OutputFormat::resolve(" PNG ",).unwrap(), OutputFormat::Png);
    /// assert!(matches!(OutputFormat::resolve("",), Err(Error::MissingFormat)));
    /// assert!(matches!(OutputFormat::resolve("bmp",), Err(Error::UnknownFormat { .. })));
    /// ```
    pub fn resolve(raw: &str,) -> Result<Self, Error,>
    {
        let token = raw.trim();
        if token.is_empty() {
            return Err(Error::MissingFormat,);
        }

        match token.to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg,),
            "png" => Ok(Self::Png,),
            "jpg" => Ok(Self::Jpg,),
            "html" => Ok(Self::Html,),
            _ => Err(Error::UnknownFormat {
                format: token.to_owned(),
            },),
        }
    }

    /// Lowercase token used in requests, configuration and file extensions.
    pub const fn as_str(self,) -> &'static str
    {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Html => "html",
        }
    }

    /// MIME type used in the data URI, `None` for markup output.
    pub const fn mime_type(self,) -> Option<&'static str,>
    {
        match self {
            Self::Svg => Some(SVG_MIME,),
            Self::Png => Some(PNG_MIME,),
            Self::Jpg => Some(JPG_MIME,),
            Self::Html => None,
        }
    }

    /// Returns `true` when the renderer produces raster bytes.
    pub const fn is_binary(self,) -> bool
    {
        matches!(self, Self::Png | Self::Jpg)
    }

    /// Returns `true` when the output is inline markup.
    pub const fn is_markup(self,) -> bool
    {
        matches!(self, Self::Html)
    }

    /// Color used when a request leaves the color unset.
    pub fn default_color(self,) -> Color
    {
        match self {
            Self::Svg | Self::Html => Color::Named(DEFAULT_NAMED_COLOR.to_owned(),),
            Self::Png | Self::Jpg => Color::Rgb(DEFAULT_RGB_COLOR,),
        }
    }

    /// Returns `true` when `color` has the representation this format expects.
    pub fn accepts(self, color: &Color,) -> bool
    {
        match self {
            Self::Svg | Self::Html => matches!(color, Color::Named(_)),
            Self::Png | Self::Jpg => matches!(color, Color::Rgb(_)),
        }
    }
}

impl fmt::Display for OutputFormat
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.as_str(),)
    }
}

impl FromStr for OutputFormat
{
    type Err = Error;

    fn from_str(raw: &str,) -> Result<Self, Self::Err,>
    {
        Self::resolve(raw,)
    }
}

impl From<OutputFormat,> for String
{
    fn from(format: OutputFormat,) -> Self
    {
        format.as_str().to_owned()
    }
}
