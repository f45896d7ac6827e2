// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Turns a request and a code into an embeddable string.
//!
//! Every render follows the same steps: resolve the format token, fetch the
//! renderer for that format from the cache, fill in the default color when
//! none is set, render, and wrap the raw output with the embedding policy.

use std::sync::{Arc, OnceLock};

use tracing::{debug, trace};

use crate::{
    cache::RendererCache,
    embed::embed,
    error::Error,
    format::OutputFormat,
    render::RawContent,
    request::{BarcodeOptions, BarcodeRequest},
};

static SHARED: OnceLock<BarcodeFacade,> = OnceLock::new();

/// Entry point for rendering barcodes.
///
/// Cloning is cheap: clones share the same renderer cache.
#[derive(Debug, Clone, Default,)]
pub struct BarcodeFacade
{
    cache: Arc<RendererCache,>,
}

impl BarcodeFacade
{
    /// Creates a facade backed by `cache`.
    pub const fn new(cache: Arc<RendererCache,>,) -> Self
    {
        Self {
            cache,
        }
    }

    /// Process-wide facade used by the one-shot helpers and
    /// [`BarcodeRequest::render`]. Initialized on first access.
    pub fn shared() -> &'static Self
    {
        SHARED.get_or_init(|| {
            debug!("initializing shared barcode facade");
            Self::default()
        },)
    }

    /// Renderer cache used by this facade.
    pub fn cache(&self,) -> &Arc<RendererCache,>
    {
        &self.cache
    }

    /// Renders `code` and wraps the result for inline embedding.
    ///
    /// SVG, PNG and JPG become base64 `data:` URIs; HTML is returned as
    /// markup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFormat`] or [`Error::UnknownFormat`] when the
    /// request format cannot be resolved, and any renderer failure unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use barcode_embed::{BarcodeFacade, BarcodeRequest};
    ///
    /// let facade = BarcodeFacade::default();
    /// let html = facade
    ///     .render(&BarcodeRequest::default().with_format("html",), "9313920040041",)
    ///     .unwrap();
    /// assert!(html.starts_with("<div"));
    /// ```
    pub fn render(&self, request: &BarcodeRequest, code: &str,) -> Result<String, Error,>
    {
        let (format, raw,) = self.render_raw(request, code,)?;
        Ok(embed(format, raw,),)
    }

    /// Renders `code` without embedding.
    ///
    /// # Errors
    ///
    /// Same as [`Self::render`].
    pub fn raw_content(&self, request: &BarcodeRequest, code: &str,) -> Result<RawContent, Error,>
    {
        self.render_raw(request, code,).map(|(_, raw,)| raw,)
    }

    /// Renders `code` as an SVG data URI.
    ///
    /// # Errors
    ///
    /// Returns any renderer failure.
    pub fn embed_svg(&self, code: &str, options: &BarcodeOptions,) -> Result<String, Error,>
    {
        self.render_with(OutputFormat::Svg, code, options,)
    }

    /// Renders `code` as a PNG data URI.
    ///
    /// # Errors
    ///
    /// Returns any renderer failure.
    pub fn embed_png(&self, code: &str, options: &BarcodeOptions,) -> Result<String, Error,>
    {
        self.render_with(OutputFormat::Png, code, options,)
    }

    /// Renders `code` as a JPG data URI.
    ///
    /// # Errors
    ///
    /// Returns any renderer failure.
    pub fn embed_jpg(&self, code: &str, options: &BarcodeOptions,) -> Result<String, Error,>
    {
        self.render_with(OutputFormat::Jpg, code, options,)
    }

    /// Renders `code` as inline HTML.
    ///
    /// # Errors
    ///
    /// Returns any renderer failure.
    pub fn render_html(&self, code: &str, options: &BarcodeOptions,) -> Result<String, Error,>
    {
        self.render_with(OutputFormat::Html, code, options,)
    }

    fn render_with(
        &self,
        format: OutputFormat,
        code: &str,
        options: &BarcodeOptions,
    ) -> Result<String, Error,>
    {
        let request = BarcodeRequest::from_options(format.as_str(), options.clone(),);
        self.render(&request, code,)
    }

    fn render_raw(
        &self,
        request: &BarcodeRequest,
        code: &str,
    ) -> Result<(OutputFormat, RawContent,), Error,>
    {
        let (format, renderer,) = self.cache.resolve(request.format(),)?;
        let color = request.resolved_color(format,);
        trace!(
            %format,
            symbology = request.symbology(),
            width_factor = request.width_factor(),
            height = request.height(),
            %color,
            "rendering barcode {code}"
        );

        let raw = renderer.render(
            code,
            request.symbology(),
            request.width_factor(),
            request.height(),
            &color,
        )?;
        trace!(%format, bytes = raw.len(), "rendered barcode {code}");
        Ok((format, raw,),)
    }
}

/// Renders `code` as an SVG data URI with the shared facade.
///
/// # Errors
///
/// Returns any renderer failure.
///
/// # Examples
///
/// ```
/// use barcode_embed::{BarcodeOptions, embed_svg};
///
/// let uri = embed_svg("9313920040041", &BarcodeOptions::default(),).unwrap();
/// assert!(uri.starts_with("data:image/svg+xml;base64,"));
/// ```
pub fn embed_svg(code: &str, options: &BarcodeOptions,) -> Result<String, Error,>
{
    BarcodeFacade::shared().embed_svg(code, options,)
}

/// Renders `code` as a PNG data URI with the shared facade.
///
/// # Errors
///
/// Returns any renderer failure.
pub fn embed_png(code: &str, options: &BarcodeOptions,) -> Result<String, Error,>
{
    BarcodeFacade::shared().embed_png(code, options,)
}

/// Renders `code` as a JPG data URI with the shared facade.
///
/// # Errors
///
/// Returns any renderer failure.
pub fn embed_jpg(code: &str, options: &BarcodeOptions,) -> Result<String, Error,>
{
    BarcodeFacade::shared().embed_jpg(code, options,)
}

/// Renders `code` as inline HTML with the shared facade.
///
/// # Errors
///
/// Returns any renderer failure.
pub fn render_html(code: &str, options: &BarcodeOptions,) -> Result<String, Error,>
{
    BarcodeFacade::shared().render_html(code, options,)
}
