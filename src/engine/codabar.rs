// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Codabar.
//!
//! Codes that already start and end with one of the `A`-`D` guard characters
//! are encoded as-is; anything else is wrapped in `A` guards.

use super::Barcode;
use crate::{error::Error, symbology::Symbology};

const WIDE: u32 = 3;

/// Seven element pattern for a character, `1` marks a wide element.
fn pattern(character: char,) -> Option<&'static str,>
{
    let pattern = match character {
        '0' => "0000011",
        '1' => "0000110",
        '2' => "0001001",
        '3' => "1100000",
        '4' => "0010010",
        '5' => "1000010",
        '6' => "0100001",
        '7' => "0100100",
        '8' => "0110000",
        '9' => "1001000",
        '-' => "0001100",
        '$' => "0011000",
        ':' => "1000101",
        '/' => "1010001",
        '.' => "1010100",
        '+' => "0010101",
        'A' => "0011010",
        'B' => "0101001",
        'C' => "0001011",
        'D' => "0001110",
        _ => return None,
    };
    Some(pattern,)
}

fn is_guard(character: char,) -> bool
{
    matches!(character, 'A'..='D')
}

pub(super) fn encode(code: &str,) -> Result<Barcode, Error,>
{
    let upper = code.to_ascii_uppercase();
    let guarded = upper.len() >= 2
        && upper.starts_with(is_guard,)
        && upper.ends_with(is_guard,);
    let text = if guarded { upper } else { format!("A{upper}A") };

    let inner = &text[1..text.len() - 1];
    if let Some(invalid,) = inner.chars().find(|c| is_guard(*c,) || pattern(*c,).is_none(),) {
        return Err(Error::invalid_code(
            Symbology::Codabar.as_str(),
            format!("character '{invalid}' cannot be encoded"),
        ),);
    }

    let mut barcode = Barcode::new(text.clone(), 1,);
    for (index, character,) in text.chars().enumerate() {
        if index > 0 {
            barcode.push(false, 1,);
        }
        if let Some(elements,) = pattern(character,) {
            barcode.push_alternating(elements.bytes().map(|b| if b == b'1' { WIDE } else { 1 },),);
        }
    }

    Ok(barcode,)
}
