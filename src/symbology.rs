// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Barcode standards recognized by the rendering engine.
//!
//! Requests carry the symbology as its string identifier; the engine parses
//! it into [`Symbology`] right before encoding, so an unknown identifier is
//! only reported when a barcode is actually rendered.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

macro_rules! symbologies {
    ($($(#[$meta:meta])* $variant:ident => $code:literal, $supported:literal;)+) => {
        /// Barcode standard identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,)]
        pub enum Symbology
        {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl Symbology
        {
            /// Every identifier known to the engine.
            pub const ALL: &'static [Symbology] = &[$(Self::$variant,)+];

            /// Identifier used in requests and configuration files.
            pub const fn as_str(self,) -> &'static str
            {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Returns `true` when the built-in engine has an encoder for the
            /// symbology.
            pub const fn is_supported(self,) -> bool
            {
                match self {
                    $(Self::$variant => $supported,)+
                }
            }

            fn lookup(code: &str,) -> Option<Self,>
            {
                match code {
                    $($code => Some(Self::$variant,),)+
                    _ => None,
                }
            }
        }
    };
}

symbologies! {
    /// Code 39.
    Code39 => "C39", true;
    /// Code 39 with modulo 43 check character.
    Code39Checksum => "C39+", true;
    /// Extended Code 39.
    Code39Extended => "C39E", false;
    /// Extended Code 39 with check character.
    Code39ExtendedChecksum => "C39E+", false;
    /// Code 93.
    Code93 => "C93", false;
    /// Standard (industrial) 2 of 5.
    Standard25 => "S25", true;
    /// Standard 2 of 5 with modulo 10 check digit.
    Standard25Checksum => "S25+", true;
    /// Interleaved 2 of 5.
    Interleaved25 => "I25", true;
    /// Interleaved 2 of 5 with modulo 10 check digit.
    Interleaved25Checksum => "I25+", true;
    /// Code 128 with automatic code set selection.
    Code128 => "C128", true;
    /// Code 128 code set A.
    Code128A => "C128A", true;
    /// Code 128 code set B.
    Code128B => "C128B", true;
    /// Code 128 code set C.
    Code128C => "C128C", true;
    /// Two digit EAN add-on.
    Ean2 => "EAN2", false;
    /// Five digit EAN add-on.
    Ean5 => "EAN5", false;
    /// EAN-8.
    Ean8 => "EAN8", true;
    /// EAN-13.
    Ean13 => "EAN13", true;
    /// UPC-A.
    UpcA => "UPCA", true;
    /// UPC-E.
    UpcE => "UPCE", false;
    /// MSI Plessey.
    Msi => "MSI", false;
    /// MSI Plessey with check digit.
    MsiChecksum => "MSI+", false;
    /// USPS POSTNET.
    Postnet => "POSTNET", true;
    /// USPS PLANET.
    Planet => "PLANET", true;
    /// Royal Mail 4-state customer code.
    Rms4cc => "RMS4CC", false;
    /// Dutch KIX 4-state code.
    Kix => "KIX", false;
    /// USPS Intelligent Mail barcode.
    Imb => "IMB", false;
    /// Codabar.
    Codabar => "CODABAR", true;
    /// Code 11.
    Code11 => "CODE11", false;
    /// Pharmacode one-track.
    Pharma => "PHARMA", false;
    /// Pharmacode two-track.
    PharmaTwoTracks => "PHARMA2T", false;
}

impl Default for Symbology
{
    fn default() -> Self
    {
        Self::Ean13
    }
}

impl fmt::Display for Symbology
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.as_str(),)
    }
}

/// Identifiers are matched case-insensitively after trimming.
impl FromStr for Symbology
{
    type Err = Error;

    fn from_str(raw: &str,) -> Result<Self, Self::Err,>
    {
        let normalized = raw.trim().to_ascii_uppercase();
        Self::lookup(&normalized,).ok_or_else(|| Error::UnsupportedSymbology {
            symbology: raw.trim().to_owned(),
        },)
    }
}

impl Serialize for Symbology
{
    fn serialize<S,>(&self, serializer: S,) -> Result<S::Ok, S::Error,>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str(),)
    }
}

impl<'de,> Deserialize<'de,> for Symbology
{
    fn deserialize<D,>(deserializer: D,) -> Result<Self, D::Error,>
    where
        D: Deserializer<'de,>,
    {
        let raw = String::deserialize(deserializer,)?;
        raw.parse().map_err(serde::de::Error::custom,)
    }
}

impl From<Symbology,> for String
{
    fn from(symbology: Symbology,) -> Self
    {
        symbology.as_str().to_owned()
    }
}
