// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! USPS POSTNET and PLANET height-modulated codes.
//!
//! Both symbologies use two rows: tall bars cover both, short bars only the
//! bottom row. Spaces and dashes in the input are ignored.

use super::{Barcode, digit, require_digits};
use crate::{error::Error, symbology::Symbology};

/// POSTNET patterns, `1` marks a tall bar. PLANET inverts them.
const PATTERNS: [&str; 10] =
    ["11000", "00011", "00101", "00110", "01001", "01010", "01100", "10001", "10010", "10100",];

const ROWS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub(super) enum Variant
{
    Postnet,
    Planet,
}

pub(super) fn encode(code: &str, variant: Variant,) -> Result<Barcode, Error,>
{
    let symbology = match variant {
        Variant::Postnet => Symbology::Postnet,
        Variant::Planet => Symbology::Planet,
    };

    let mut text: String = code.chars().filter(|c| !matches!(c, ' ' | '-'),).collect();
    if text.is_empty() {
        return Err(Error::invalid_code(symbology.as_str(), "code has no digits",),);
    }
    require_digits(&text, symbology,)?;

    let sum: u32 = text.bytes().map(digit,).sum();
    text.push(char::from(b'0' + ((10 - sum % 10) % 10) as u8,),);

    let mut barcode = Barcode::new(text.clone(), ROWS,);
    push_bar(&mut barcode, true,);
    for byte in text.bytes() {
        for element in PATTERNS[digit(byte,) as usize].bytes() {
            let tall = (element == b'1') == (variant == Variant::Postnet);
            push_bar(&mut barcode, tall,);
        }
    }
    push_bar(&mut barcode, true,);

    Ok(barcode,)
}

fn push_bar(barcode: &mut Barcode, tall: bool,)
{
    if !barcode.bars().is_empty() {
        barcode.push_partial(false, 1, ROWS, 0,);
    }
    if tall {
        barcode.push_partial(true, 1, ROWS, 0,);
    } else {
        barcode.push_partial(true, 1, 1, 1,);
    }
}
