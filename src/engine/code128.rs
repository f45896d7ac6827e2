// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Code 128 with code sets A, B and C.

use super::Barcode;
use crate::{error::Error, symbology::Symbology};

/// Element widths for symbol values 0 through 105; bars and spaces alternate
/// starting with a bar.
const PATTERNS: [&str; 106] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", "132212",
    "221213", "221312", "231212", "112232", "122132", "122231", "113222", "123122", "123221",
    "223211", "221132", "221231", "213212", "223112", "312131", "311222", "321122", "321221",
    "312212", "322112", "322211", "212123", "212321", "232121", "111323", "131123", "131321",
    "112313", "132113", "132311", "211313", "231113", "231311", "112133", "112331", "132131",
    "113123", "113321", "133121", "313121", "211331", "231131", "213113", "213311", "213131",
    "311123", "311321", "331121", "312113", "312311", "332111", "314111", "221411", "431111",
    "111224", "111422", "121124", "121421", "141122", "141221", "112214", "112412", "122114",
    "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111", "111242",
    "121142", "121241", "114212", "124112", "124211", "411212", "421112", "421211", "212141",
    "214121", "412121", "111143", "111341", "131141", "114113", "114311", "411113", "411311",
    "113141", "114131", "311141", "411131", "211412", "211214", "211232",
];

const STOP: &str = "2331112";

/// Code 128 character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub(super) enum CodeSet
{
    /// Uppercase, digits, punctuation and ASCII control characters.
    A,
    /// Full printable ASCII.
    B,
    /// Digit pairs.
    C,
}

impl CodeSet
{
    const fn start_value(self,) -> usize
    {
        match self {
            Self::A => 103,
            Self::B => 104,
            Self::C => 105,
        }
    }

    const fn symbology(self,) -> Symbology
    {
        match self {
            Self::A => Symbology::Code128A,
            Self::B => Symbology::Code128B,
            Self::C => Symbology::Code128C,
        }
    }
}

/// Encodes `code`, picking a code set automatically when `set` is `None`.
pub(super) fn encode(code: &str, set: Option<CodeSet,>,) -> Result<Barcode, Error,>
{
    let set = match set {
        Some(set,) => set,
        None => select_code_set(code,).ok_or_else(|| {
            Error::invalid_code(
                Symbology::Code128.as_str(),
                "code mixes characters from incompatible code sets",
            )
        },)?,
    };

    let (text, values,) = match set {
        CodeSet::A | CodeSet::B => (code.to_owned(), character_values(code, set,)?,),
        CodeSet::C => digit_pair_values(code,)?,
    };

    let start = set.start_value();
    let checksum = checksum(start, &values,);

    let mut barcode = Barcode::new(text, 1,);
    push_pattern(&mut barcode, PATTERNS[start],);
    for value in values {
        push_pattern(&mut barcode, PATTERNS[value],);
    }
    push_pattern(&mut barcode, PATTERNS[checksum],);
    push_pattern(&mut barcode, STOP,);

    Ok(barcode,)
}

/// Modulo 103 sum of the start value and position-weighted symbol values.
fn checksum(start: usize, values: &[usize],) -> usize
{
    values.iter().enumerate().fold(start, |sum, (index, value,)| sum + value * (index + 1),) % 103
}

/// Set C for even-length digit strings of at least four digits, otherwise
/// the first of B and A that can represent every character.
fn select_code_set(code: &str,) -> Option<CodeSet,>
{
    let bytes = code.as_bytes();
    if bytes.len() >= 4 && bytes.len() % 2 == 0 && bytes.iter().all(u8::is_ascii_digit,) {
        return Some(CodeSet::C,);
    }
    if bytes.iter().all(|b| (32..=127).contains(b,),) {
        return Some(CodeSet::B,);
    }
    if bytes.iter().all(|b| *b < 96,) {
        return Some(CodeSet::A,);
    }
    None
}

fn character_values(code: &str, set: CodeSet,) -> Result<Vec<usize,>, Error,>
{
    code.chars()
        .map(|character| {
            let value = u32::from(character,);
            let mapped = match set {
                CodeSet::A if value < 32 => Some(value + 64,),
                CodeSet::A if value < 96 => Some(value - 32,),
                CodeSet::B if (32..=127).contains(&value,) => Some(value - 32,),
                _ => None,
            };
            mapped.map(|v| v as usize,).ok_or_else(|| {
                Error::invalid_code(
                    set.symbology().as_str(),
                    format!("character {character:?} is outside the code set"),
                )
            },)
        },)
        .collect()
}

/// Pairs digits for set C, padding odd-length codes with a leading zero.
fn digit_pair_values(code: &str,) -> Result<(String, Vec<usize,>,), Error,>
{
    if let Some(invalid,) = code.chars().find(|c| !c.is_ascii_digit(),) {
        return Err(Error::invalid_code(
            Symbology::Code128C.as_str(),
            format!("character '{invalid}' is not a digit"),
        ),);
    }

    let text = if code.len() % 2 == 0 { code.to_owned() } else { format!("0{code}") };
    let values = text
        .as_bytes()
        .chunks(2,)
        .map(|pair| usize::from((pair[0] - b'0') * 10 + (pair[1] - b'0'),),)
        .collect();

    Ok((text, values,),)
}

fn push_pattern(barcode: &mut Barcode, pattern: &str,)
{
    barcode.push_alternating(pattern.bytes().map(|b| u32::from(b - b'0',),),);
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn every_symbol_spans_eleven_modules()
    {
        for pattern in PATTERNS {
            let width: u32 = pattern.bytes().map(|b| u32::from(b - b'0',),).sum();
            assert_eq!(width, 11, "pattern {pattern}");
        }
        let stop: u32 = STOP.bytes().map(|b| u32::from(b - b'0',),).sum();
        assert_eq!(stop, 13);
    }

    #[test]
    fn automatic_selection_prefers_set_c_for_digits()
    {
        assert_eq!(select_code_set("123456"), Some(CodeSet::C));
        assert_eq!(select_code_set("12345"), Some(CodeSet::B));
        assert_eq!(select_code_set("Hello"), Some(CodeSet::B));
        assert_eq!(select_code_set("A\tB"), Some(CodeSet::A));
        assert_eq!(select_code_set("a\tb"), None);
    }

    #[test]
    fn set_b_width_matches_symbol_count()
    {
        // start + 5 data + checksum = 7 symbols of 11 modules, stop has 13
        let barcode = encode("Hello", Some(CodeSet::B,),).unwrap();
        assert_eq!(barcode.width(), 7 * 11 + 13);
    }

    #[test]
    fn set_c_packs_digit_pairs()
    {
        let barcode = encode("123456", Some(CodeSet::C,),).unwrap();
        // start + 3 pairs + checksum
        assert_eq!(barcode.width(), 5 * 11 + 13);
    }

    #[test]
    fn set_c_pads_odd_length()
    {
        let barcode = encode("123", Some(CodeSet::C,),).unwrap();
        assert_eq!(barcode.code(), "0123");
    }

    #[test]
    fn checksum_uses_weighted_sum()
    {
        // 104 + 48*1 + 42*2 + 42*3 + 17*4 + 18*5 + 19*6 + 35*7 = 879
        let values = character_values("PJJ123C", CodeSet::B,).unwrap();
        assert_eq!(checksum(CodeSet::B.start_value(), &values,), 55);
    }

    #[test]
    fn set_b_rejects_control_characters()
    {
        let error = encode("a\tb", Some(CodeSet::B,),).expect_err("tab is not in set B",);
        assert!(matches!(error, Error::InvalidCode { .. }));
    }

    #[test]
    fn set_c_rejects_letters()
    {
        assert!(encode("12AB", Some(CodeSet::C,),).is_err());
    }
}
