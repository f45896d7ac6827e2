// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Standard (industrial) and interleaved 2 of 5.

use super::{Barcode, digit, require_digits};
use crate::{error::Error, symbology::Symbology};

/// Five element patterns per digit, `1` marks a wide element.
const PATTERNS: [&str; 10] =
    ["00110", "10001", "01001", "11000", "00101", "10100", "01100", "00011", "10010", "01010",];

const WIDE: u32 = 3;

/// Standard 2 of 5 encodes information in the bars only; every bar is
/// followed by a narrow gap.
pub(super) fn encode_standard(code: &str, checksum: bool,) -> Result<Barcode, Error,>
{
    let symbology = if checksum { Symbology::Standard25Checksum } else { Symbology::Standard25 };
    require_digits(code, symbology,)?;

    let mut text = code.to_owned();
    if checksum {
        text.push(check_digit(code,),);
    }

    let mut barcode = Barcode::new(text.clone(), 1,);
    for width in [WIDE, WIDE, 1,] {
        barcode.push(true, width,);
        barcode.push(false, 1,);
    }
    for byte in text.bytes() {
        for element in PATTERNS[digit(byte,) as usize].bytes() {
            barcode.push(true, element_width(element,),);
            barcode.push(false, 1,);
        }
    }
    barcode.push(true, WIDE,);
    barcode.push(false, 1,);
    barcode.push(true, 1,);
    barcode.push(false, 1,);
    barcode.push(true, WIDE,);

    Ok(barcode,)
}

/// Interleaved 2 of 5 encodes digit pairs: the first digit in the bars and
/// the second in the gaps. Odd-length codes get a leading zero.
pub(super) fn encode_interleaved(code: &str, checksum: bool,) -> Result<Barcode, Error,>
{
    let symbology =
        if checksum { Symbology::Interleaved25Checksum } else { Symbology::Interleaved25 };
    require_digits(code, symbology,)?;

    let mut text = code.to_owned();
    if checksum {
        text.push(check_digit(code,),);
    }
    if text.len() % 2 != 0 {
        text.insert(0, '0',);
    }

    let mut barcode = Barcode::new(text.clone(), 1,);
    barcode.push_alternating([1, 1, 1, 1,],);
    for pair in text.as_bytes().chunks(2,) {
        let bars = PATTERNS[digit(pair[0],) as usize].as_bytes();
        let spaces = PATTERNS[digit(pair[1],) as usize].as_bytes();
        for (bar, space,) in bars.iter().zip(spaces,) {
            barcode.push(true, element_width(*bar,),);
            barcode.push(false, element_width(*space,),);
        }
    }
    barcode.push_alternating([WIDE, 1, 1,],);

    Ok(barcode,)
}

/// Modulo 10 check digit with weight 3 on even positions counted from the
/// left.
fn check_digit(code: &str,) -> char
{
    let sum: u32 = code
        .bytes()
        .enumerate()
        .map(|(index, byte,)| if index % 2 == 0 { digit(byte,) * 3 } else { digit(byte,) },)
        .sum();
    let check = (10 - sum % 10) % 10;
    char::from(b'0' + check as u8,)
}

fn element_width(element: u8,) -> u32
{
    if element == b'1' { WIDE } else { 1 }
}
