// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Self-contained HTML page demonstrating every output format and the main
//! rendering parameters.

use std::fmt::Write as _;

use crate::{
    color::Color,
    error::Error,
    facade::BarcodeFacade,
    render::escape_xml,
    request::{BarcodeOptions, BarcodeRequest},
    symbology::Symbology,
};

/// Code used for the UPC-A section of the page.
pub const UPCA_SAMPLE: &str = "1234567899992";

enum Block
{
    Image(String,),
    Inline(String,),
}

/// Builds the demo page for `code`, which must be valid EAN-13 and Code 39
/// input.
///
/// # Errors
///
/// Returns the first rendering failure.
///
/// # Examples
///
/// ```
/// use barcode_embed::{BarcodeFacade, showcase_page};
///
/// let page = showcase_page(&BarcodeFacade::default(), "9313920040041",).unwrap();
/// assert!(page.contains("<h2>Embed as PNG</h2>"));
/// ```
pub fn showcase_page(facade: &BarcodeFacade, code: &str,) -> Result<String, Error,>
{
    let defaults = BarcodeOptions::default();
    let sections = [
        ("Embed as SVG", Block::Image(facade.embed_svg(code, &defaults,)?,),),
        ("Embed as PNG", Block::Image(facade.embed_png(code, &defaults,)?,),),
        ("Embed as JPG", Block::Image(facade.embed_jpg(code, &defaults,)?,),),
        ("Embed as HTML", Block::Inline(facade.render_html(code, &defaults,)?,),),
        (
            "Width: 1",
            Block::Image(facade.embed_svg(code, &defaults.clone().with_width_factor(1,),)?,),
        ),
        (
            "Width: 3",
            Block::Image(facade.embed_svg(code, &defaults.clone().with_width_factor(3,),)?,),
        ),
        ("Height: 50px", Block::Image(facade.embed_svg(code, &defaults.clone().with_height(50,),)?,),),
        (
            "Color: red",
            Block::Image(facade.embed_svg(code, &defaults.clone().with_color(Color::named("red",),),)?,),
        ),
        (
            "Code 39",
            Block::Image(
                facade.embed_svg(code, &defaults.clone().with_symbology(Symbology::Code39,),)?,
            ),
        ),
    ];

    let mut upca = BarcodeRequest::default().with_symbology(Symbology::UpcA,);
    upca.set_color(Color::named("blue",),).set_height(60,);
    let upca_uri = facade.render(&upca, UPCA_SAMPLE,)?;

    let mut page = String::with_capacity(64 * 1024,);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n",);
    page.push_str("<meta charset=\"UTF-8\">\n<title>Barcode generator view test</title>\n",);
    page.push_str("</head>\n<body>\n",);

    let _ = writeln!(page, "<h1>EAN-13 Code: {}</h1>", escape_xml(code));
    for (heading, block,) in sections {
        let _ = writeln!(page, "<h2>{heading}</h2>");
        match block {
            Block::Image(uri,) => {
                let _ = writeln!(page, "<img src=\"{uri}\"/>");
            }
            Block::Inline(markup,) => page.push_str(&markup,),
        }
    }

    let _ = writeln!(page, "<h1>UPC Code: {UPCA_SAMPLE}</h1>");
    page.push_str("<h2>Embed as blue SVG 60px</h2>\n",);
    let _ = writeln!(page, "<img src=\"{upca_uri}\"/>");
    page.push_str("</body>\n</html>\n",);

    Ok(page,)
}
