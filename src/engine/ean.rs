// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! EAN-13, EAN-8 and UPC-A.
//!
//! Codes shorter than the data length are padded with leading zeros. When the
//! check digit is missing it is computed and appended; when present it is
//! verified. Digits beyond the symbol length are ignored. UPC-A is encoded as
//! an EAN-13 symbol with a leading zero.

use super::{Barcode, digit, require_digits};
use crate::{error::Error, symbology::Symbology};

/// Odd parity (set A) patterns.
const L_CODES: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011", "0110001", "0101111", "0111011",
    "0110111", "0001011",
];
/// Even parity (set B) patterns.
const G_CODES: [&str; 10] = [
    "0100111", "0110011", "0011011", "0100001", "0011101", "0111001", "0000101", "0010001",
    "0001001", "0010111",
];
/// Right-hand (set C) patterns.
const R_CODES: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100", "1001110", "1010000", "1000100",
    "1001000", "1110100",
];
/// Parity of the left half of an EAN-13 symbol, selected by the first digit.
/// `true` selects the even parity set.
const PARITY: [[bool; 6]; 10] = [
    [false, false, false, false, false, false,],
    [false, false, true, false, true, true,],
    [false, false, true, true, false, true,],
    [false, false, true, true, true, false,],
    [false, true, false, false, true, true,],
    [false, true, true, false, false, true,],
    [false, true, true, true, false, false,],
    [false, true, false, true, false, true,],
    [false, true, false, true, true, false,],
    [false, true, true, false, true, false,],
];

const GUARD: &str = "101";
const CENTER: &str = "01010";

pub(super) fn encode(code: &str, symbology: Symbology,) -> Result<Barcode, Error,>
{
    require_digits(code, symbology,)?;

    let length = match symbology {
        Symbology::Ean8 => 8,
        Symbology::UpcA => 12,
        _ => 13,
    };
    let data_length = length - 1;

    let mut digits = format!("{code:0>data_length$}");
    let check = check_digit(&digits.as_bytes()[..data_length], length,);
    if digits.len() == data_length {
        digits.push(check,);
    } else {
        let found = char::from(digits.as_bytes()[data_length],);
        if found != check {
            return Err(Error::InvalidCheckDigit {
                symbology: symbology.as_str().to_owned(),
                expected: check,
                found,
            },);
        }
    }
    digits.truncate(length,);

    let mut barcode = Barcode::new(digits.clone(), 1,);
    if length == 8 {
        encode_ean8(&mut barcode, digits.as_bytes(),);
    } else {
        if length == 12 {
            digits.insert(0, '0',);
        }
        encode_ean13(&mut barcode, digits.as_bytes(),);
    }

    Ok(barcode,)
}

/// Computes the modulo 10 check digit for the first `length - 1` digits.
///
/// Weights alternate 3 and 1 starting from the digit next to the check digit.
fn check_digit(data: &[u8], length: usize,) -> char
{
    let (mut odd, mut even,) = (0, 0,);
    for (index, byte,) in data.iter().enumerate() {
        if index % 2 == 0 {
            even += digit(*byte,);
        } else {
            odd += digit(*byte,);
        }
    }
    let sum = if length > 12 { odd * 3 + even } else { odd + even * 3 };
    let check = (10 - sum % 10) % 10;
    char::from(b'0' + check as u8,)
}

fn encode_ean13(barcode: &mut Barcode, digits: &[u8],)
{
    let parity = PARITY[digit(digits[0],) as usize];
    barcode.push_modules(GUARD,);
    for (position, byte,) in digits[1..7].iter().enumerate() {
        let table = if parity[position] { &G_CODES } else { &L_CODES };
        barcode.push_modules(table[digit(*byte,) as usize],);
    }
    barcode.push_modules(CENTER,);
    for byte in &digits[7..13] {
        barcode.push_modules(R_CODES[digit(*byte,) as usize],);
    }
    barcode.push_modules(GUARD,);
}

fn encode_ean8(barcode: &mut Barcode, digits: &[u8],)
{
    barcode.push_modules(GUARD,);
    for byte in &digits[..4] {
        barcode.push_modules(L_CODES[digit(*byte,) as usize],);
    }
    barcode.push_modules(CENTER,);
    for byte in &digits[4..8] {
        barcode.push_modules(R_CODES[digit(*byte,) as usize],);
    }
    barcode.push_modules(GUARD,);
}
