// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! SVG document output.

use std::fmt::Write as _;

use super::{RawContent, Renderer, escape_xml, prepare};
use crate::{color::Color, error::Error, format::OutputFormat};

/// Renders a standalone SVG document with one `<rect>` per bar.
#[derive(Debug, Clone, Copy, Default,)]
pub struct SvgRenderer;

impl Renderer for SvgRenderer
{
    fn format(&self,) -> OutputFormat
    {
        OutputFormat::Svg
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
        let (barcode, layout,) =
            prepare(OutputFormat::Svg, code, symbology, width_factor, height, color,)?;
        let fill = escape_xml(color.as_named().unwrap_or_default(),);

        let mut buffer = String::with_capacity(256 + layout.bars.len() * 64,);
        buffer.push_str("<?xml version=\"1.0\" standalone=\"no\" ?>\n",);
        buffer.push_str(
            "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n",
        );
        let _ = writeln!(
            buffer,
            "<svg width=\"{0}\" height=\"{1}\" viewBox=\"0 0 {0} {1}\" version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">",
            layout.width, layout.height,
        );
        let _ = writeln!(buffer, "\t<desc>{}</desc>", escape_xml(barcode.code()));
        let _ = writeln!(buffer, "\t<g id=\"bars\" fill=\"{fill}\" stroke=\"none\">");
        for bar in &layout.bars {
            let _ = writeln!(
                buffer,
                "\t\t<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" />",
                bar.x, bar.y, bar.width, bar.height,
            );
        }
        buffer.push_str("\t</g>\n</svg>\n",);

        Ok(RawContent::Markup(buffer,),)
    }
}
