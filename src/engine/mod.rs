// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Symbology encoders that turn a code into a sequence of bars.
//!
//! The engine works in abstract module units: a [`Barcode`] stores bar widths
//! in modules and bar heights in rows. Renderers scale both dimensions with
//! the requested width factor and pixel height. Linear symbologies use a
//! single row; postal symbologies use two rows so that short bars can sit on
//! the baseline.

mod codabar;
mod code128;
mod code39;
mod ean;
mod postal;
mod two_of_five;

use tracing::trace;

use crate::{error::Error, symbology::Symbology};

/// A single bar or gap of a rendered barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub struct Bar
{
    /// Width in modules.
    pub width:             u32,
    /// Height in rows.
    pub height:            u32,
    /// Offset of the bar from the top, in rows.
    pub position_vertical: u32,
    /// `true` for dark bars, `false` for gaps.
    pub draw:              bool,
}

/// Encoded barcode ready to be laid out by a renderer.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct Barcode
{
    code:   String,
    width:  u32,
    height: u32,
    bars:   Vec<Bar,>,
}

impl Barcode
{
    pub(crate) fn new<S,>(code: S, height: u32,) -> Self
    where
        S: Into<String,>,
    {
        Self {
            code: code.into(), width: 0, height, bars: Vec::new(),
        }
    }

    /// Code actually encoded, including any computed check character.
    pub fn code(&self,) -> &str
    {
        &self.code
    }

    /// Total width in modules.
    pub fn width(&self,) -> u32
    {
        self.width
    }

    /// Total height in rows.
    pub fn height(&self,) -> u32
    {
        self.height
    }

    /// Bars and gaps from left to right.
    pub fn bars(&self,) -> &[Bar]
    {
        &self.bars
    }

    /// Appends a full-height bar or gap, merging it with the previous element
    /// when both have the same color and geometry.
    pub(crate) fn push(&mut self, draw: bool, width: u32,)
    {
        let height = self.height;
        self.push_partial(draw, width, height, 0,);
    }

    /// Appends a bar covering `height` rows starting `position_vertical` rows
    /// below the top.
    pub(crate) fn push_partial(
        &mut self,
        draw: bool,
        width: u32,
        height: u32,
        position_vertical: u32,
    )
    {
        if width == 0 {
            return;
        }
        self.width += width;

        if let Some(last,) = self.bars.last_mut()
            && last.draw == draw
            && last.height == height
            && last.position_vertical == position_vertical
        {
            last.width += width;
            return;
        }

        self.bars.push(Bar {
            width, height, position_vertical, draw,
        },);
    }

    /// Appends a module string where `1` is dark and `0` is light.
    pub(crate) fn push_modules(&mut self, modules: &str,)
    {
        for module in modules.bytes() {
            self.push(module == b'1', 1,);
        }
    }

    /// Appends alternating bars and gaps, starting with a dark bar.
    pub(crate) fn push_alternating<I,>(&mut self, widths: I,)
    where
        I: IntoIterator<Item = u32,>,
    {
        for (index, width,) in widths.into_iter().enumerate() {
            self.push(index % 2 == 0, width,);
        }
    }
}

/// Encodes `code` with the given symbology.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSymbology`] when the engine has no encoder for
/// the symbology, [`Error::InvalidCode`] when the code contains characters
/// outside the symbology alphabet, and [`Error::InvalidCheckDigit`] when a
/// supplied check digit does not match.
///
/// # Examples
///
/// ```
/// use barcode_embed::{Symbology, engine};
///
/// let barcode = engine::encode("9313920040041", Symbology::Ean13,).unwrap();
/// assert_eq!(barcode.width(), 95);
/// ```
pub fn encode(code: &str, symbology: Symbology,) -> Result<Barcode, Error,>
{
    if code.is_empty() {
        return Err(Error::invalid_code(symbology.as_str(), "code cannot be empty",),);
    }

    let barcode = match symbology {
        Symbology::Ean8 | Symbology::Ean13 | Symbology::UpcA => ean::encode(code, symbology,)?,
        Symbology::Code39 => code39::encode(code, false,)?,
        Symbology::Code39Checksum => code39::encode(code, true,)?,
        Symbology::Code128 => code128::encode(code, None,)?,
        Symbology::Code128A => code128::encode(code, Some(code128::CodeSet::A,),)?,
        Symbology::Code128B => code128::encode(code, Some(code128::CodeSet::B,),)?,
        Symbology::Code128C => code128::encode(code, Some(code128::CodeSet::C,),)?,
        Symbology::Standard25 => two_of_five::encode_standard(code, false,)?,
        Symbology::Standard25Checksum => two_of_five::encode_standard(code, true,)?,
        Symbology::Interleaved25 => two_of_five::encode_interleaved(code, false,)?,
        Symbology::Interleaved25Checksum => two_of_five::encode_interleaved(code, true,)?,
        Symbology::Codabar => codabar::encode(code,)?,
        Symbology::Postnet => postal::encode(code, postal::Variant::Postnet,)?,
        Symbology::Planet => postal::encode(code, postal::Variant::Planet,)?,
        Symbology::Code39Extended
        | Symbology::Code39ExtendedChecksum
        | Symbology::Code93
        | Symbology::Ean2
        | Symbology::Ean5
        | Symbology::UpcE
        | Symbology::Msi
        | Symbology::MsiChecksum
        | Symbology::Rms4cc
        | Symbology::Kix
        | Symbology::Imb
        | Symbology::Code11
        | Symbology::Pharma
        | Symbology::PharmaTwoTracks => {
            return Err(Error::UnsupportedSymbology {
                symbology: symbology.as_str().to_owned(),
            },);
        }
    };

    trace!(
        "encoded {} as {} ({} modules, {} bars)",
        barcode.code,
        symbology,
        barcode.width,
        barcode.bars.len()
    );
    Ok(barcode,)
}

/// Ensures every character of `code` is an ASCII digit.
fn require_digits(code: &str, symbology: Symbology,) -> Result<(), Error,>
{
    if let Some(invalid,) = code.chars().find(|c| !c.is_ascii_digit(),) {
        return Err(Error::invalid_code(
            symbology.as_str(),
            format!("character '{invalid}' is not a digit"),
        ),);
    }
    Ok((),)
}

/// Numeric value of an ASCII digit byte.
fn digit(byte: u8,) -> u32
{
    u32::from(byte - b'0',)
}
