// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Format-specific renderers.
//!
//! A [`Renderer`] takes a code plus presentation parameters and returns the
//! raw output for one [`OutputFormat`]. Renderers are stateless once built,
//! so a single instance per format is shared across every request through
//! the [`RendererCache`](crate::RendererCache).

mod html;
mod raster;
mod svg;

use std::{borrow::Cow, sync::Arc};

pub use html::HtmlRenderer;
pub use raster::{MAX_RASTER_PIXELS, RasterRenderer};
pub use svg::SvgRenderer;

use crate::{
    color::Color,
    engine::{self, Barcode},
    error::Error,
    format::OutputFormat,
    symbology::Symbology,
};

/// Raw renderer output before embedding.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub enum RawContent
{
    /// Encoded image bytes (PNG, JPG).
    Binary(Vec<u8,>,),
    /// Markup text (SVG, HTML).
    Markup(String,),
}

impl RawContent
{
    /// Borrows the content as bytes.
    pub fn as_bytes(&self,) -> &[u8]
    {
        match self {
            Self::Binary(bytes,) => bytes,
            Self::Markup(text,) => text.as_bytes(),
        }
    }

    /// Consumes the content and returns its bytes.
    pub fn into_bytes(self,) -> Vec<u8,>
    {
        match self {
            Self::Binary(bytes,) => bytes,
            Self::Markup(text,) => text.into_bytes(),
        }
    }

    /// Returns the markup when the content is textual.
    pub fn as_markup(&self,) -> Option<&str,>
    {
        match self {
            Self::Binary(_,) => None,
            Self::Markup(text,) => Some(text,),
        }
    }

    /// Size of the content in bytes.
    pub fn len(&self,) -> usize
    {
        self.as_bytes().len()
    }

    /// Returns `true` when the content holds no bytes.
    pub fn is_empty(&self,) -> bool
    {
        self.len() == 0
    }
}

/// Renders barcodes for a single output format.
///
/// Implementations must be free of per-call state: the facade invokes the
/// same instance concurrently for unrelated requests.
pub trait Renderer: Send + Sync
{
    /// Format produced by this renderer.
    fn format(&self,) -> OutputFormat;

    /// Renders `code` with the given symbology identifier and presentation
    /// parameters.
    ///
    /// # Errors
    ///
    /// Returns the engine failure unchanged: unsupported symbology, invalid
    /// code or check digit, out-of-range parameters, a color representation
    /// that does not match the format, or an image encoding failure.
    fn render(
        &self,
        code: &str,
        symbology: &str,
        width_factor: u32,
        height: u32,
        color: &Color,
    ) -> Result<RawContent, Error,>;
}

/// Builds renderer handles for the cache.
pub trait RendererFactory: Send + Sync
{
    /// Constructs the renderer for `format`.
    fn create(&self, format: OutputFormat,) -> Arc<dyn Renderer,>;
}

impl<F,> RendererFactory for F
where
    F: Fn(OutputFormat,) -> Arc<dyn Renderer,> + Send + Sync,
{
    fn create(&self, format: OutputFormat,) -> Arc<dyn Renderer,>
    {
        self(format,)
    }
}

/// Factory producing the renderers backed by the built-in engine.
#[derive(Debug, Clone, Copy, Default,)]
pub struct EngineRendererFactory;

impl RendererFactory for EngineRendererFactory
{
    fn create(&self, format: OutputFormat,) -> Arc<dyn Renderer,>
    {
        match format {
            OutputFormat::Svg => Arc::new(SvgRenderer,),
            OutputFormat::Png => Arc::new(RasterRenderer::png(),),
            OutputFormat::Jpg => Arc::new(RasterRenderer::jpg(),),
            OutputFormat::Html => Arc::new(HtmlRenderer,),
        }
    }
}

/// Axis-aligned rectangle in output pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub(crate) struct Rect
{
    pub x:      u32,
    pub y:      u32,
    pub width:  u32,
    pub height: u32,
}

/// Pixel geometry of a barcode scaled to the requested size.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub(crate) struct Layout
{
    pub width:  u32,
    pub height: u32,
    pub bars:   Vec<Rect,>,
}

/// Validates the shared render parameters, encodes the code and scales it to
/// output pixels.
fn prepare(
    format: OutputFormat,
    code: &str,
    symbology: &str,
    width_factor: u32,
    height: u32,
    color: &Color,
) -> Result<(Barcode, Layout,), Error,>
{
    if width_factor == 0 {
        return Err(Error::invalid_parameter("width factor must be greater than zero",),);
    }
    if height == 0 {
        return Err(Error::invalid_parameter("height must be greater than zero",),);
    }
    if !format.accepts(color,) {
        return Err(Error::ColorMismatch {
            format: format.to_string(),
            color:  color.to_string(),
        },);
    }

    let symbology: Symbology = symbology.parse()?;
    let barcode = engine::encode(code, symbology,)?;
    let layout = layout(&barcode, width_factor, height,)?;
    Ok((barcode, layout,),)
}

fn too_wide(width_factor: u32,) -> Error
{
    Error::invalid_parameter(format!("width factor {width_factor} exceeds the drawable width"),)
}

/// Scales bar widths by `width_factor` and rows to `height` pixels.
///
/// Fails with [`Error::InvalidParameter`] when the scaled geometry does not
/// fit in `u32` pixel coordinates.
pub(crate) fn layout(barcode: &Barcode, width_factor: u32, height: u32,) -> Result<Layout, Error,>
{
    let rows = u64::from(barcode.height().max(1,),);
    let scale_row = |units: u32| -> u32 {
        // units <= rows, so the quotient never exceeds height
        u32::try_from(u64::from(units,) * u64::from(height,) / rows,).unwrap_or(height,)
    };

    let mut bars = Vec::with_capacity(barcode.bars().len(),);
    let mut x: u32 = 0;
    for bar in barcode.bars() {
        let width = bar.width.checked_mul(width_factor,).ok_or_else(|| too_wide(width_factor,),)?;
        if bar.draw {
            bars.push(Rect {
                x,
                y: scale_row(bar.position_vertical,),
                width,
                height: scale_row(bar.height,),
            },);
        }
        x = x.checked_add(width,).ok_or_else(|| too_wide(width_factor,),)?;
    }

    let width = barcode.width().checked_mul(width_factor,).ok_or_else(|| too_wide(width_factor,),)?;
    Ok(Layout {
        width,
        height,
        bars,
    },)
}

/// Escapes characters with special meaning in XML and HTML.
pub(crate) fn escape_xml(value: &str,) -> Cow<'_, str,>
{
    if value.chars().any(|character| matches!(character, '&' | '<' | '>' | '\"' | '\''),) {
        let mut escaped = String::with_capacity(value.len(),);
        for character in value.chars() {
            match character {
                '&' => escaped.push_str("&amp;",),
                '<' => escaped.push_str("&lt;",),
                '>' => escaped.push_str("&gt;",),
                '\"' => escaped.push_str("&quot;",),
                '\'' => escaped.push_str("&apos;",),
                other => escaped.push(other,),
            }
        }
        Cow::Owned(escaped,)
    } else {
        Cow::Borrowed(value,)
    }
}
