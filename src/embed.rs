// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Converts raw renderer output into an embeddable string.
//!
//! Image formats become `data:` URIs with standard, padded base64 so the
//! result can be placed directly into an `src` attribute. HTML output is
//! already embeddable and passes through unchanged.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::{
    error::Error,
    format::{JPG_MIME, OutputFormat, PNG_MIME, SVG_MIME},
    render::RawContent,
};

const DATA_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Wraps `raw` according to the embedding policy for `format`.
///
/// # Examples
///
/// ```
/// use barcode_embed::{OutputFormat, RawContent, embed};
///
/// let uri = embed(OutputFormat::Svg, RawContent::Markup("<svg/>".to_owned(),),);
/// assert_eq!(uri, "data:image/svg+xml;base64,PHN2Zy8+");
///
/// let html = embed(OutputFormat::Html, RawContent::Markup("<div></div>".to_owned(),),);
/// assert_eq!(html, "<div></div>");
/// ```
pub fn embed(format: OutputFormat, raw: RawContent,) -> String
{
    match format {
        OutputFormat::Svg => data_uri(SVG_MIME, raw.as_bytes(),),
        OutputFormat::Png => data_uri(PNG_MIME, raw.as_bytes(),),
        OutputFormat::Jpg => data_uri(JPG_MIME, raw.as_bytes(),),
        OutputFormat::Html => match raw {
            RawContent::Markup(markup,) => markup,
            RawContent::Binary(bytes,) => String::from_utf8_lossy(&bytes,).into_owned(),
        },
    }
}

/// Builds `data:{mime};base64,{payload}`.
pub fn data_uri(mime: &str, bytes: &[u8],) -> String
{
    let mut uri = String::with_capacity(
        DATA_SCHEME.len() + mime.len() + BASE64_MARKER.len() + bytes.len().div_ceil(3,) * 4,
    );
    uri.push_str(DATA_SCHEME,);
    uri.push_str(mime,);
    uri.push_str(BASE64_MARKER,);
    STANDARD.encode_string(bytes, &mut uri,);
    uri
}

/// Splits a base64 data URI into its MIME type and decoded payload.
///
/// # Errors
///
/// Returns [`Error::Validation`] when the string is not a base64 data URI or
/// the payload is not valid base64.
pub fn decode_data_uri(uri: &str,) -> Result<(String, Vec<u8,>,), Error,>
{
    let rest = uri
        .trim()
        .strip_prefix(DATA_SCHEME,)
        .ok_or_else(|| Error::validation("value is not a data URI",),)?;
    let (mime, payload,) = rest
        .split_once(BASE64_MARKER,)
        .ok_or_else(|| Error::validation("data URI is not base64 encoded",),)?;
    if mime.is_empty() {
        return Err(Error::validation("data URI has no media type",),);
    }

    let bytes = STANDARD
        .decode(payload,)
        .map_err(|error| Error::validation(format!("invalid base64 payload: {error}"),),)?;
    Ok((mime.to_owned(), bytes,),)
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn prefixes_match_format()
    {
        let raw = || RawContent::Binary(vec![0, 1, 2],);
        assert!(embed(OutputFormat::Svg, raw()).starts_with("data:image/svg+xml;base64,"));
        assert!(embed(OutputFormat::Png, raw()).starts_with("data:image/png;base64,"));
        assert!(embed(OutputFormat::Jpg, raw()).starts_with("data:image/jpg;base64,"));
        for format in [OutputFormat::Svg, OutputFormat::Png, OutputFormat::Jpg] {
            let (mime, _,) = decode_data_uri(&embed(format, raw(),),).unwrap();
            assert_eq!(Some(mime.as_str()), format.mime_type());
        }
    }

    #[test]
    fn html_is_returned_verbatim()
    {
        let markup = "<div style=\"width:2px\">&nbsp;</div>\n";
        assert_eq!(embed(OutputFormat::Html, RawContent::Markup(markup.to_owned())), markup);
    }

    #[test]
    fn payload_uses_padded_standard_alphabet()
    {
        assert_eq!(data_uri("image/png", &[0xFB, 0xFF]), "data:image/png;base64,+/8=");
    }

    #[test]
    fn decode_rejects_non_data_uris()
    {
        assert!(decode_data_uri("<div></div>").is_err());
        assert!(decode_data_uri("data:image/png,plain").is_err());
        assert!(decode_data_uri("data:;base64,AA==").is_err());
        assert!(decode_data_uri("data:image/png;base64,@@@").is_err());
    }

    proptest! {
        #[test]
        fn data_uri_decodes_to_original_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            for format in [OutputFormat::Svg, OutputFormat::Png, OutputFormat::Jpg] {
                let uri = embed(format, RawContent::Binary(bytes.clone()));
                let (mime, decoded) = decode_data_uri(&uri).unwrap();
                prop_assert_eq!(Some(mime.as_str()), format.mime_type());
                prop_assert_eq!(&decoded, &bytes);
            }
        }

        #[test]
        fn html_passthrough_is_identity(markup in "[ -~]{0,64}") {
            prop_assert_eq!(embed(OutputFormat::Html, RawContent::Markup(markup.clone())), markup);
        }
    }
}
