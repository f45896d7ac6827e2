//! Barcode rendering into strings that can be embedded directly in web pages.
//!
//! A [`BarcodeRequest`] bundles the output format, symbology, width factor,
//! height and color. The [`BarcodeFacade`] resolves the format, fetches the
//! renderer for it from a shared [`RendererCache`], renders the code with the
//! built-in [`engine`] and wraps the output: SVG, PNG and JPG become base64
//! `data:` URIs usable as `<img src>`, HTML is returned as inline markup.
//!
//! ```
//! use barcode_embed::{BarcodeOptions, BarcodeRequest, Color, embed_svg, render_html};
//!
//! let uri = embed_svg("9313920040041", &BarcodeOptions::default(),).unwrap();
//! assert!(uri.starts_with("data:image/svg+xml;base64,"));
//!
//! let html = render_html("9313920040041", &BarcodeOptions::default().with_height(50,),).unwrap();
//! assert!(html.starts_with("<div"));
//!
//! let request = BarcodeRequest::new("png", "UPCA", 2, 60, Some(Color::rgb(0, 0, 255,),),);
//! assert!(request.render("1234567899992",).unwrap().starts_with("data:image/png;base64,"));
//! ```
//!
//! Presets loaded from YAML ([`load_presets`]) drive the batch renderer
//! ([`render_batch`]) and the `barcode-embed` command-line tool.

mod artifact;
mod cache;
mod color;
mod config;
mod embed;
pub mod engine;
mod error;
mod facade;
mod format;
mod normalizer;
mod render;
mod request;
mod showcase;
mod slug;
mod symbology;

pub use artifact::{
    ArtifactFailure, ArtifactRecord, BatchReport, MANIFEST_FILE, load_codes, parse_codes,
    render_batch,
};
pub use cache::RendererCache;
pub use color::Color;
pub use config::{PresetConfig, PresetDefaults, PresetEntry};
pub use embed::{data_uri, decode_data_uri, embed};
pub use error::{Error, artifact_io_error, io_error};
pub use facade::{BarcodeFacade, embed_jpg, embed_png, embed_svg, render_html};
pub use format::{DEFAULT_NAMED_COLOR, DEFAULT_RGB_COLOR, OutputFormat};
pub use normalizer::{Preset, PresetsDocument, load_presets, parse_presets};
pub use render::{
    EngineRendererFactory, HtmlRenderer, MAX_RASTER_PIXELS, RasterRenderer, RawContent, Renderer,
    RendererFactory, SvgRenderer,
};
pub use request::{BarcodeOptions, BarcodeRequest, DEFAULT_HEIGHT, DEFAULT_WIDTH_FACTOR};
pub use showcase::{UPCA_SAMPLE, showcase_page};
pub use slug::{DEFAULT_MAX_LENGTH, SlugStrategy};
pub use symbology::Symbology;
