// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Foreground colors accepted by the renderers.
//!
//! Markup outputs (SVG, HTML) take any CSS color string; raster outputs (PNG,
//! JPG) take an RGB triple. The two representations are never converted into
//! each other: a mismatch is reported by the renderer.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

static RGB_TRIPLE: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*$",)
        .expect("static regex is valid",)
},);

/// Foreground color of the rendered bars.
///
/// # Examples
///
/// ```
/// use barcode_embed::Color;
///
/// let named: Color = "blue".parse().unwrap();
/// assert_eq!(named, Color::Named("blue".to_owned()));
///
/// let rgb: Color = "0, 0, 255".parse().unwrap();
/// assert_eq!(rgb, Color::Rgb([0, 0, 255]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,)]
#[serde(untagged)]
pub enum Color
{
    /// CSS color string used by SVG and HTML output.
    Named(String,),
    /// Red, green and blue channels used by PNG and JPG output.
    Rgb([u8; 3],),
}

impl Color
{
    /// Creates a named color.
    pub fn named<S,>(value: S,) -> Self
    where
        S: Into<String,>,
    {
        Self::Named(value.into(),)
    }

    /// Creates an RGB color.
    pub const fn rgb(red: u8, green: u8, blue: u8,) -> Self
    {
        Self::Rgb([red, green, blue,],)
    }

    /// Returns the CSS string for named colors.
    pub fn as_named(&self,) -> Option<&str,>
    {
        match self {
            Self::Named(value,) => Some(value.as_str(),),
            Self::Rgb(_,) => None,
        }
    }

    /// Returns the channels for RGB colors.
    pub const fn as_rgb(&self,) -> Option<[u8; 3],>
    {
        match self {
            Self::Named(_,) => None,
            Self::Rgb(channels,) => Some(*channels,),
        }
    }
}

impl fmt::Display for Color
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        match self {
            Self::Named(value,) => f.write_str(value,),
            Self::Rgb([red, green, blue,],) => write!(f, "{red},{green},{blue}"),
        }
    }
}

/// Parses `"r,g,b"` into [`Color::Rgb`] and any other non-blank string into
/// [`Color::Named`].
impl FromStr for Color
{
    type Err = Error;

    fn from_str(raw: &str,) -> Result<Self, Self::Err,>
    {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("color cannot be empty",),);
        }

        let Some(captures,) = RGB_TRIPLE.captures(trimmed,) else {
            return Ok(Self::Named(trimmed.to_owned(),),);
        };

        let mut channels = [0u8; 3];
        for (index, channel,) in channels.iter_mut().enumerate() {
            let digits = &captures[index + 1];
            *channel = digits.parse().map_err(|_| {
                Error::validation(format!("color channel {digits} must be between 0 and 255"),)
            },)?;
        }

        Ok(Self::Rgb(channels,),)
    }
}
