// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Inline HTML output built from absolutely positioned `<div>` elements.

use std::fmt::Write as _;

use super::{RawContent, Renderer, escape_xml, prepare};
use crate::{color::Color, error::Error, format::OutputFormat};

/// Renders a barcode as a block of HTML that needs no image support.
#[derive(Debug, Clone, Copy, Default,)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer
{
    fn format(&self,) -> OutputFormat
    {
        OutputFormat::Html
    }

    fn render(
        &self,
        code: &str,
        symbology: &str,
        width_factor: u32,
        height: u32,
        color: &Color,
    ) -> Result<RawContent, Error,>
    {
        let (_, layout,) =
            prepare(OutputFormat::Html, code, symbology, width_factor, height, color,)?;
        let background = escape_xml(color.as_named().unwrap_or_default(),);

        let mut buffer = String::with_capacity(128 + layout.bars.len() * 128,);
        let _ = writeln!(
            buffer,
            "<div style=\"font-size:0;position:relative;width:{}px;height:{}px;\">",
            layout.width, layout.height,
        );
        for bar in &layout.bars {
            let _ = writeln!(
                buffer,
                "<div style=\"background-color:{background};width:{}px;height:{}px;position:absolute;left:{}px;top:{}px;\">&nbsp;</div>",
                bar.width, bar.height, bar.x, bar.y,
            );
        }
        buffer.push_str("</div>\n",);

        Ok(RawContent::Markup(buffer,),)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn container_has_barcode_dimensions()
    {
        let content = HtmlRenderer
            .render("9313920040041", "EAN13", 1, 50, &Color::named("black",),)
            .unwrap();
        let html = content.as_markup().unwrap();

        assert!(html.starts_with(
            "<div style=\"font-size:0;position:relative;width:95px;height:50px;\">"
        ));
        assert!(html.trim_end().ends_with("</div>"));
    }

    #[test]
    fn every_bar_uses_the_requested_color()
    {
        let content = HtmlRenderer
            .render("12345670", "EAN8", 2, 30, &Color::named("navy",),)
            .unwrap();
        let html = content.as_markup().unwrap();

        let bars = html.matches("&nbsp;</div>",).count();
        assert_eq!(bars, html.matches("background-color:navy;",).count());
        assert!(bars > 0);
    }

    #[test]
    fn propagates_engine_errors()
    {
        let error = HtmlRenderer
            .render("not digits", "EAN13", 2, 30, &Color::named("black",),)
            .expect_err("letters are invalid for EAN-13",);
        assert!(matches!(error, Error::InvalidCode { .. }));
    }
}
