// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! PNG and JPG output encoded with the `image` crate.

use std::io::Cursor;

use image::{DynamicImage, ImageBuffer, ImageFormat, Pixel, Rgb, Rgba};

use super::{Layout, RawContent, Renderer, prepare};
use crate::{color::Color, error::Error, format::OutputFormat};

/// Largest image, in pixels, the raster renderers will allocate.
pub const MAX_RASTER_PIXELS: u64 = 64 * 1024 * 1024;

/// Renders raster images. PNG output has a transparent background; JPG has
/// no alpha channel and uses white.
#[derive(Debug, Clone, Copy,)]
pub struct RasterRenderer
{
    format: OutputFormat,
}

impl RasterRenderer
{
    /// PNG renderer.
    pub const fn png() -> Self
    {
        Self {
            format: OutputFormat::Png,
        }
    }

    /// JPG renderer.
    pub const fn jpg() -> Self
    {
        Self {
            format: OutputFormat::Jpg,
        }
    }
}

impl Renderer for RasterRenderer
{
    fn format(&self,) -> OutputFormat
    {
        self.format
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
        let (_, layout,) = prepare(self.format, code, symbology, width_factor, height, color,)?;
        let pixels = u64::from(layout.width,) * u64::from(layout.height,);
        if pixels > MAX_RASTER_PIXELS {
            return Err(Error::invalid_parameter(format!(
                "{}x{} image exceeds the {MAX_RASTER_PIXELS} pixel limit",
                layout.width, layout.height
            ),),);
        }
        let [red, green, blue,] = color.as_rgb().unwrap_or_default();

        let image = match self.format {
            OutputFormat::Jpg => DynamicImage::ImageRgb8(paint(
                &layout,
                Rgb([255, 255, 255,],),
                Rgb([red, green, blue,],),
            ),),
            _ => DynamicImage::ImageRgba8(paint(
                &layout,
                Rgba([0, 0, 0, 0,],),
                Rgba([red, green, blue, 255,],),
            ),),
        };
        let image_format = match self.format {
            OutputFormat::Jpg => ImageFormat::Jpeg,
            _ => ImageFormat::Png,
        };

        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes,), image_format,)?;
        Ok(RawContent::Binary(bytes,),)
    }
}

fn paint<P,>(layout: &Layout, background: P, foreground: P,) -> ImageBuffer<P, Vec<u8,>,>
where
    P: Pixel<Subpixel = u8,>,
{
    let mut image = ImageBuffer::from_pixel(layout.width, layout.height, background,);
    for bar in &layout.bars {
        for y in bar.y..(bar.y + bar.height).min(layout.height,) {
            for x in bar.x..(bar.x + bar.width).min(layout.width,) {
                image.put_pixel(x, y, foreground,);
            }
        }
    }
    image
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn decode(content: &RawContent,) -> DynamicImage
    {
        image::load_from_memory(content.as_bytes(),).expect("renderer output should decode",)
    }

    #[test]
    fn png_output_has_signature_and_dimensions()
    {
        let content = RasterRenderer::png()
            .render("9313920040041", "EAN13", 2, 30, &Color::rgb(0, 0, 0,),)
            .unwrap();
        assert!(content.as_bytes().starts_with(&[0x89, b'P', b'N', b'G']));

        let image = decode(&content,);
        assert_eq!((image.width(), image.height()), (190, 30));
    }

    #[test]
    fn png_background_is_transparent_and_bars_are_colored()
    {
        let content = RasterRenderer::png()
            .render("9313920040041", "EAN13", 1, 10, &Color::rgb(0, 0, 255,),)
            .unwrap();
        let image = decode(&content,).to_rgba8();

        // module 0 is the first guard bar, module 1 the gap after it
        assert_eq!(image.get_pixel(0, 5).0, [0, 0, 255, 255]);
        assert_eq!(image.get_pixel(1, 5).0[3], 0);
    }

    #[test]
    fn jpg_output_has_signature_and_dimensions()
    {
        let content = RasterRenderer::jpg()
            .render("9313920040041", "EAN13", 3, 40, &Color::rgb(0, 0, 0,),)
            .unwrap();
        assert!(content.as_bytes().starts_with(&[0xFF, 0xD8]));

        let image = decode(&content,);
        assert_eq!((image.width(), image.height()), (285, 40));
    }

    #[test]
    fn rejects_named_color()
    {
        let error = RasterRenderer::jpg()
            .render("9313920040041", "EAN13", 2, 30, &Color::named("black",),)
            .expect_err("named color is invalid for jpg",);
        assert!(matches!(error, Error::ColorMismatch { .. }));
    }

    #[test]
    fn rejects_images_above_pixel_limit()
    {
        // 95 modules x 1000 x 1000 is above the limit but fits in u32 coordinates
        let error = RasterRenderer::png()
            .render("9313920040041", "EAN13", 1000, 1000, &Color::rgb(0, 0, 0,),)
            .expect_err("oversized image",);
        assert!(matches!(error, Error::InvalidParameter { .. }));
    }

    #[test]
    fn rejects_overflowing_width_factor()
    {
        let error = RasterRenderer::jpg()
            .render("9313920040041", "EAN13", u32::MAX / 2, 30, &Color::rgb(0, 0, 0,),)
            .expect_err("overflowing width",);
        assert!(matches!(error, Error::InvalidParameter { .. }));
    }

    #[test]
    fn output_is_deterministic()
    {
        let renderer = RasterRenderer::png();
        let first = renderer.render("12345670", "EAN8", 2, 30, &Color::rgb(0, 0, 0,),).unwrap();
        let second = renderer.render("12345670", "EAN8", 2, 30, &Color::rgb(0, 0, 0,),).unwrap();
        assert_eq!(first, second);
    }
}
