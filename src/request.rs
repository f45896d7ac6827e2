// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Rendering parameters.
//!
//! [`BarcodeRequest`] is the reusable configuration object: build it once and
//! render as many codes with it as needed. [`BarcodeOptions`] carries every
//! parameter except the format and backs the one-shot helpers whose format is
//! fixed by the function name.
//!
//! Nothing is validated here. The format is resolved when a render starts and
//! the symbology, dimensions and color are checked by the renderer.

use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    error::Error,
    facade::BarcodeFacade,
    format::OutputFormat,
    render::RawContent,
    symbology::Symbology,
};

/// Default module width multiplier.
pub const DEFAULT_WIDTH_FACTOR: u32 = 2;
/// Default bar height in output pixels.
pub const DEFAULT_HEIGHT: u32 = 30;

/// Symbology, dimensions and color of a rendered barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
#[serde(default)]
pub struct BarcodeOptions
{
    #[serde(rename = "type", alias = "symbology")]
    symbology:    String,
    width_factor: u32,
    height:       u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    color:        Option<Color,>,
}

impl Default for BarcodeOptions
{
    fn default() -> Self
    {
        Self {
            symbology:    Symbology::default().as_str().to_owned(),
            width_factor: DEFAULT_WIDTH_FACTOR,
            height:       DEFAULT_HEIGHT,
            color:        None,
        }
    }
}

impl BarcodeOptions
{
    /// Symbology identifier, for example `EAN13` or `C128`.
    pub fn symbology(&self,) -> &str
    {
        &self.symbology
    }

    /// Width of the narrowest bar in pixels.
    pub const fn width_factor(&self,) -> u32
    {
        self.width_factor
    }

    /// Bar height in pixels.
    pub const fn height(&self,) -> u32
    {
        self.height
    }

    /// Explicit color, `None` when the format default applies.
    pub const fn color(&self,) -> Option<&Color,>
    {
        self.color.as_ref()
    }

    /// Sets the symbology identifier.
    pub fn set_symbology<S,>(&mut self, symbology: S,) -> &mut Self
    where
        S: Into<String,>,
    {
        self.symbology = symbology.into();
        self
    }

    /// Sets the width factor.
    pub fn set_width_factor(&mut self, width_factor: u32,) -> &mut Self
    {
        self.width_factor = width_factor;
        self
    }

    /// Sets the bar height.
    pub fn set_height(&mut self, height: u32,) -> &mut Self
    {
        self.height = height;
        self
    }

    /// Sets or clears the color.
    pub fn set_color<C,>(&mut self, color: C,) -> &mut Self
    where
        C: Into<Option<Color,>,>,
    {
        self.color = color.into();
        self
    }

    /// Builder form of [`Self::set_symbology`].
    pub fn with_symbology<S,>(mut self, symbology: S,) -> Self
    where
        S: Into<String,>,
    {
        self.set_symbology(symbology,);
        self
    }

    /// Builder form of [`Self::set_width_factor`].
    pub fn with_width_factor(mut self, width_factor: u32,) -> Self
    {
        self.set_width_factor(width_factor,);
        self
    }

    /// Builder form of [`Self::set_height`].
    pub fn with_height(mut self, height: u32,) -> Self
    {
        self.set_height(height,);
        self
    }

    /// Builder form of [`Self::set_color`].
    pub fn with_color<C,>(mut self, color: C,) -> Self
    where
        C: Into<Option<Color,>,>,
    {
        self.set_color(color,);
        self
    }

    /// Color handed to the renderer for `format`: the explicit color when
    /// set, otherwise the format default.
    pub fn resolved_color(&self, format: OutputFormat,) -> Color
    {
        match &self.color {
            Some(color,) => color.clone(),
            None => format.default_color(),
        }
    }
}

/// Complete set of rendering parameters including the output format.
///
/// The format is stored as the caller supplied it so that an empty or
/// unknown token surfaces as [`Error::MissingFormat`] or
/// [`Error::UnknownFormat`] when rendering, not when configuring.
///
/// # Examples
///
/// ```
/// use barcode_embed::{BarcodeRequest, Color};
///
/// let mut request = BarcodeRequest::default();
/// request.set_symbology("UPCA",).set_color(Color::named("blue",),).set_height(60,);
///
/// let uri = request.render("1234567899992",).unwrap();
/// assert!(uri.starts_with("data:image/svg+xml;base64,"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
#[serde(default)]
pub struct BarcodeRequest
{
    format:  String,
    #[serde(flatten)]
    options: BarcodeOptions,
}

impl Default for BarcodeRequest
{
    fn default() -> Self
    {
        Self {
            format:  OutputFormat::default().as_str().to_owned(),
            options: BarcodeOptions::default(),
        }
    }
}

impl BarcodeRequest
{
    /// Creates a request with every field given explicitly.
    pub fn new<F, S,>(
        format: F,
        symbology: S,
        width_factor: u32,
        height: u32,
        color: Option<Color,>,
    ) -> Self
    where
        F: Into<String,>,
        S: Into<String,>,
    {
        Self {
            format:  format.into(),
            options: BarcodeOptions {
                symbology: symbology.into(),
                width_factor,
                height,
                color,
            },
        }
    }

    /// Creates a request for `format` from existing options.
    pub fn from_options<F,>(format: F, options: BarcodeOptions,) -> Self
    where
        F: Into<String,>,
    {
        Self {
            format: format.into(),
            options,
        }
    }

    /// Format token as supplied.
    pub fn format(&self,) -> &str
    {
        &self.format
    }

    /// Parameters other than the format.
    pub const fn options(&self,) -> &BarcodeOptions
    {
        &self.options
    }

    /// Symbology identifier.
    pub fn symbology(&self,) -> &str
    {
        self.options.symbology()
    }

    /// Width factor.
    pub const fn width_factor(&self,) -> u32
    {
        self.options.width_factor()
    }

    /// Bar height.
    pub const fn height(&self,) -> u32
    {
        self.options.height()
    }

    /// Explicit color, if any.
    pub const fn color(&self,) -> Option<&Color,>
    {
        self.options.color()
    }

    /// Sets the format token.
    pub fn set_format<F,>(&mut self, format: F,) -> &mut Self
    where
        F: Into<String,>,
    {
        self.format = format.into();
        self
    }

    /// Sets the symbology identifier.
    pub fn set_symbology<S,>(&mut self, symbology: S,) -> &mut Self
    where
        S: Into<String,>,
    {
        self.options.set_symbology(symbology,);
        self
    }

    /// Sets the width factor.
    pub fn set_width_factor(&mut self, width_factor: u32,) -> &mut Self
    {
        self.options.set_width_factor(width_factor,);
        self
    }

    /// Sets the bar height.
    pub fn set_height(&mut self, height: u32,) -> &mut Self
    {
        self.options.set_height(height,);
        self
    }

    /// Sets or clears the color.
    pub fn set_color<C,>(&mut self, color: C,) -> &mut Self
    where
        C: Into<Option<Color,>,>,
    {
        self.options.set_color(color,);
        self
    }

    /// Builder form of [`Self::set_format`].
    pub fn with_format<F,>(mut self, format: F,) -> Self
    where
        F: Into<String,>,
    {
        self.set_format(format,);
        self
    }

    /// Builder form of [`Self::set_symbology`].
    pub fn with_symbology<S,>(mut self, symbology: S,) -> Self
    where
        S: Into<String,>,
    {
        self.set_symbology(symbology,);
        self
    }

    /// Builder form of [`Self::set_width_factor`].
    pub fn with_width_factor(mut self, width_factor: u32,) -> Self
    {
        self.set_width_factor(width_factor,);
        self
    }

    /// Builder form of [`Self::set_height`].
    pub fn with_height(mut self, height: u32,) -> Self
    {
        self.set_height(height,);
        self
    }

    /// Builder form of [`Self::set_color`].
    pub fn with_color<C,>(mut self, color: C,) -> Self
    where
        C: Into<Option<Color,>,>,
    {
        self.set_color(color,);
        self
    }

    /// Color handed to the renderer for `format`.
    pub fn resolved_color(&self, format: OutputFormat,) -> Color
    {
        self.options.resolved_color(format,)
    }

    /// Renders `code` into an embeddable string with the shared facade.
    ///
    /// # Errors
    ///
    /// See [`BarcodeFacade::render`].
    pub fn render(&self, code: &str,) -> Result<String, Error,>
    {
        BarcodeFacade::shared().render(self, code,)
    }

    /// Renders `code` without embedding, using the shared facade.
    ///
    /// # Errors
    ///
    /// See [`BarcodeFacade::raw_content`].
    pub fn raw_content(&self, code: &str,) -> Result<RawContent, Error,>
    {
        BarcodeFacade::shared().raw_content(self, code,)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn defaults_follow_documented_values()
    {
        let request = BarcodeRequest::default();
        assert_eq!(request.format(), "svg");
        assert_eq!(request.symbology(), "EAN13");
        assert_eq!(request.width_factor(), 2);
        assert_eq!(request.height(), 30);
        assert_eq!(request.color(), None);
    }

    #[test]
    fn setters_chain_on_the_same_object()
    {
        let mut request = BarcodeRequest::default();
        request
            .set_format("png",)
            .set_symbology("C128",)
            .set_width_factor(3,)
            .set_height(45,)
            .set_color(Color::rgb(0, 0, 255,),);

        assert_eq!(
            request,
            BarcodeRequest::new("png", "C128", 3, 45, Some(Color::rgb(0, 0, 255)))
        );
    }

    #[test]
    fn builders_match_setters()
    {
        let built = BarcodeRequest::default()
            .with_format("html",)
            .with_symbology("C39",)
            .with_width_factor(1,)
            .with_height(10,)
            .with_color(Color::named("red",),);

        let mut set = BarcodeRequest::default();
        set.set_format("html",)
            .set_symbology("C39",)
            .set_width_factor(1,)
            .set_height(10,)
            .set_color(Color::named("red",),);

        assert_eq!(built, set);
    }

    #[test]
    fn construction_does_not_validate()
    {
        let request = BarcodeRequest::new("bmp", "NOPE", 0, 0, Some(Color::named("")),);
        assert_eq!(request.format(), "bmp");
        assert_eq!(request.symbology(), "NOPE");
    }

    #[test]
    fn color_can_be_cleared()
    {
        let mut request = BarcodeRequest::default().with_color(Color::named("red",),);
        request.set_color(None::<Color,>,);
        assert_eq!(request.color(), None);
    }

    #[test]
    fn resolved_color_prefers_explicit_value()
    {
        let request = BarcodeRequest::default();
        assert_eq!(request.resolved_color(OutputFormat::Html), Color::named("black"));
        assert_eq!(request.resolved_color(OutputFormat::Png), Color::rgb(0, 0, 0));

        let request = request.with_color(Color::named("navy",),);
        assert_eq!(request.resolved_color(OutputFormat::Svg), Color::named("navy"));
    }

    #[test]
    fn deserializes_partial_documents_with_defaults()
    {
        let request: BarcodeRequest =
            serde_yaml::from_str("format: png\ntype: UPCA\ncolor: [0, 0, 255]\n",).unwrap();
        assert_eq!(request, BarcodeRequest::new("png", "UPCA", 2, 30, Some(Color::rgb(0, 0, 255))));
    }

    #[test]
    fn serializes_without_unset_color()
    {
        let json = serde_json::to_value(BarcodeRequest::default(),).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"format": "svg", "type": "EAN13", "width_factor": 2, "height": 30})
        );
    }
}
