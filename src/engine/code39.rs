// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Code 39 with optional modulo 43 check character.

use super::Barcode;
use crate::{error::Error, symbology::Symbology};

/// Characters in check-value order.
const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

/// Bar/space patterns in [`ALPHABET`] order, `1` marks a wide element.
const PATTERNS: [&str; 43] = [
    "000110100", "100100001", "001100001", "101100000", "000110001", "100110000", "001110000",
    "000100101", "100100100", "001100100", "100001001", "001001001", "101001000", "000011001",
    "100011000", "001011000", "000001101", "100001100", "001001100", "000011100", "100000011",
    "001000011", "101000010", "000010011", "100010010", "001010010", "000000111", "100000110",
    "001000110", "000010110", "110000001", "011000001", "111000000", "010010001", "110010000",
    "011010000", "010000101", "110000100", "011000100", "010101000", "010100010", "010001010",
    "000101010",
];

/// Start/stop character `*`.
const DELIMITER: &str = "010010100";

const WIDE: u32 = 3;

pub(super) fn encode(code: &str, checksum: bool,) -> Result<Barcode, Error,>
{
    let symbology = if checksum { Symbology::Code39Checksum } else { Symbology::Code39 };
    let upper = code.to_ascii_uppercase();

    let mut values = Vec::with_capacity(upper.len() + 1,);
    for character in upper.chars() {
        let value = ALPHABET.find(character,).ok_or_else(|| {
            Error::invalid_code(
                symbology.as_str(),
                format!("character '{character}' cannot be encoded"),
            )
        },)?;
        values.push(value,);
    }

    let mut text = upper;
    if checksum {
        let check = values.iter().sum::<usize>() % ALPHABET.len();
        values.push(check,);
        text.push(char::from(ALPHABET.as_bytes()[check],),);
    }

    let mut barcode = Barcode::new(text, 1,);
    push_character(&mut barcode, DELIMITER,);
    for value in values {
        barcode.push(false, 1,);
        push_character(&mut barcode, PATTERNS[value],);
    }
    barcode.push(false, 1,);
    push_character(&mut barcode, DELIMITER,);

    Ok(barcode,)
}

fn push_character(barcode: &mut Barcode, pattern: &str,)
{
    barcode.push_alternating(pattern.bytes().map(|b| if b == b'1' { WIDE } else { 1 },),);
}
