//! Transformation logic that converts raw preset entries into ready-to-render
//! requests.
//!
//! Each field resolves in order: the entry, the document `defaults` block,
//! the library default. The resulting requests are checked up front so a
//! broken preset is reported when the configuration loads instead of on the
//! first render.

use std::{collections::HashSet, fs, path::Path};

use serde::Serialize;
use tracing::debug;

use crate::{
    color::Color,
    config::{PresetConfig, PresetDefaults, PresetEntry},
    error::{self, Error},
    format::OutputFormat,
    request::{BarcodeRequest, DEFAULT_HEIGHT, DEFAULT_WIDTH_FACTOR},
    symbology::Symbology,
};

/// Named request derived from a configuration entry.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
pub struct Preset
{
    /// Display name as written in the configuration, trimmed.
    pub name:    String,
    /// Unique slug used for lookups and output directories.
    pub slug:    String,
    /// Fully resolved rendering parameters.
    pub request: BarcodeRequest,
}

impl Preset
{
    /// Output format of the preset.
    ///
    /// # Errors
    ///
    /// Only fails for presets built outside [`parse_presets`], since
    /// normalization rejects unresolvable formats.
    pub fn format(&self,) -> Result<OutputFormat, Error,>
    {
        OutputFormat::resolve(self.request.format(),)
    }
}

/// Document containing all normalized presets.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
pub struct PresetsDocument
{
    /// Presets in declaration order.
    pub presets: Vec<Preset,>,
}

impl PresetsDocument
{
    /// Finds a preset by slug or by case-insensitive name.
    ///
    /// # Examples
    ///
    /// ```
    /// use barcode_embed::parse_presets;
    ///
    /// let document = parse_presets("presets:\n  - name: Shelf Label\n",).unwrap();
    /// assert!(document.find("shelf-label").is_some());
    /// assert!(document.find("SHELF LABEL").is_some());
    /// assert!(document.find("missing").is_none());
    /// ```
    pub fn find(&self, name_or_slug: &str,) -> Option<&Preset,>
    {
        let needle = name_or_slug.trim();
        self.presets
            .iter()
            .find(|preset| preset.slug == needle || preset.name.eq_ignore_ascii_case(needle,),)
    }

    /// Slugs of all presets in declaration order.
    pub fn slugs(&self,) -> impl Iterator<Item = &str,>
    {
        self.presets.iter().map(|preset| preset.slug.as_str(),)
    }
}

/// Loads presets from the provided YAML configuration file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, the YAML cannot be
/// deserialized, or a preset fails validation.
pub fn load_presets(path: &Path,) -> Result<PresetsDocument, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    debug!("loaded preset configuration from {}", path.display());
    parse_presets(&contents,)
}

/// Parses presets from the provided YAML document string.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded
/// and [`Error::Validation`](Error::Validation) when the document has no
/// presets or a preset is invalid.
pub fn parse_presets(contents: &str,) -> Result<PresetsDocument, Error,>
{
    let config: PresetConfig = serde_yaml::from_str(contents,)?;
    if config.presets.is_empty() {
        return Err(Error::validation("configuration must include at least one preset",),);
    }

    normalize_presets(&config.defaults, &config.presets,)
}

/// Normalizes raw entries into a document with unique slugs.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) for invalid entries and
/// slug collisions.
fn normalize_presets(
    defaults: &PresetDefaults,
    entries: &[PresetEntry],
) -> Result<PresetsDocument, Error,>
{
    let mut normalized = Vec::with_capacity(entries.len(),);
    let mut seen_slugs = HashSet::with_capacity(entries.len(),);

    for entry in entries {
        let preset = normalize_entry(defaults, entry,)?;
        if !seen_slugs.insert(preset.slug.clone(),) {
            return Err(Error::validation(format!("duplicate slug '{}'", preset.slug),),);
        }
        normalized.push(preset,);
    }

    Ok(PresetsDocument {
        presets: normalized,
    },)
}

/// Converts a raw entry into a validated preset.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when the name is blank,
/// no slug can be derived, the format or symbology is not usable, a
/// dimension is zero, or the color does not suit the format.
fn normalize_entry(defaults: &PresetDefaults, entry: &PresetEntry,) -> Result<Preset, Error,>
{
    let name = entry.name.trim();
    if name.is_empty() {
        return Err(Error::validation("preset name cannot be empty",),);
    }

    let slug = entry
        .resolved_slug()
        .ok_or_else(|| Error::validation(format!("unable to derive slug for preset '{name}'"),),)?;

    let format_token = entry
        .format
        .as_deref()
        .or(defaults.format.as_deref(),)
        .unwrap_or(OutputFormat::default().as_str(),);
    let format = OutputFormat::resolve(format_token,)
        .map_err(|error| Error::validation(format!("preset '{name}': {error}"),),)?;

    let symbology = normalize_symbology(
        name,
        entry.symbology.as_deref().or(defaults.symbology.as_deref(),),
    )?;

    let width_factor = normalize_dimension(
        name,
        "width_factor",
        entry.width_factor.or(defaults.width_factor,).unwrap_or(DEFAULT_WIDTH_FACTOR,),
    )?;
    let height = normalize_dimension(
        name,
        "height",
        entry.height.or(defaults.height,).unwrap_or(DEFAULT_HEIGHT,),
    )?;

    let color = entry.color.as_ref().or(defaults.color.as_ref(),).cloned();
    if let Some(color,) = color.as_ref()
        && !format.accepts(color,)
    {
        return Err(Error::validation(color_mismatch_message(name, format, color,),),);
    }

    Ok(Preset {
        name: name.to_owned(),
        slug,
        request: BarcodeRequest::new(format.as_str(), symbology.as_str(), width_factor, height, color,),
    },)
}

fn normalize_symbology(name: &str, raw: Option<&str,>,) -> Result<Symbology, Error,>
{
    let Some(raw,) = raw else {
        return Ok(Symbology::default(),);
    };

    let symbology = raw
        .parse::<Symbology,>()
        .map_err(|error| Error::validation(format!("preset '{name}': {error}"),),)?;
    if !symbology.is_supported() {
        return Err(Error::validation(format!(
            "preset '{name}': barcode type {symbology} has no built-in encoder"
        ),),);
    }
    Ok(symbology,)
}

fn normalize_dimension(name: &str, field: &str, value: u32,) -> Result<u32, Error,>
{
    if value == 0 {
        return Err(Error::validation(format!("preset '{name}': {field} must be greater than zero"),),);
    }
    Ok(value,)
}

fn color_mismatch_message(name: &str, format: OutputFormat, color: &Color,) -> String
{
    if format.is_binary() {
        format!("preset '{name}': {format} output needs an [r, g, b] color, got '{color}'")
    } else {
        format!("preset '{name}': {format} output needs a CSS color string, got '{color}'")
    }
}

#[cfg(test)]
mod tests
{
    use std::io::Write;

    use super::{Error, load_presets, normalize_entry, normalize_presets, parse_presets};
    use crate::{
        color::Color,
        config::{PresetDefaults, PresetEntry},
        format::OutputFormat,
    };

    fn shelf_entry() -> PresetEntry
    {
        PresetEntry {
            format: Some("png".to_owned(),),
            symbology: Some("UPCA".to_owned(),),
            height: Some(60,),
            color: Some(Color::rgb(0, 0, 255,),),
            ..PresetEntry::named("Shelf Label",)
        }
    }

    fn validation_message(error: Error,) -> String
    {
        match error {
            Error::Validation {
                message,
            } => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn normalizes_fully_specified_entry()
    {
        let preset = normalize_entry(&PresetDefaults::default(), &shelf_entry(),)
            .expect("expected normalization success",);

        assert_eq!(preset.name, "Shelf Label");
        assert_eq!(preset.slug, "shelf-label");
        assert_eq!(preset.format().unwrap(), OutputFormat::Png);
        assert_eq!(preset.request.symbology(), "UPCA");
        assert_eq!(preset.request.width_factor(), 2);
        assert_eq!(preset.request.height(), 60);
        assert_eq!(preset.request.color(), Some(&Color::rgb(0, 0, 255)));
    }

    #[test]
    fn empty_entry_uses_library_defaults()
    {
        let preset = normalize_entry(&PresetDefaults::default(), &PresetEntry::named("Plain",),)
            .expect("expected defaults",);

        assert_eq!(preset.request.format(), "svg");
        assert_eq!(preset.request.symbology(), "EAN13");
        assert_eq!(preset.request.width_factor(), 2);
        assert_eq!(preset.request.height(), 30);
        assert_eq!(preset.request.color(), None);
    }

    #[test]
    fn document_defaults_fill_unset_fields()
    {
        let defaults = PresetDefaults {
            format:       Some("html".to_owned(),),
            symbology:    Some("c128".to_owned(),),
            width_factor: Some(3,),
            height:       Some(45,),
            color:        Some(Color::named("navy",),),
        };
        let entry = PresetEntry {
            height: Some(10,),
            ..PresetEntry::named("Mixed",)
        };

        let preset = normalize_entry(&defaults, &entry,).expect("expected normalization",);
        assert_eq!(preset.request.format(), "html");
        assert_eq!(preset.request.symbology(), "C128");
        assert_eq!(preset.request.width_factor(), 3);
        assert_eq!(preset.request.height(), 10);
        assert_eq!(preset.request.color(), Some(&Color::named("navy")));
    }

    #[test]
    fn format_tokens_are_canonicalized()
    {
        let entry = PresetEntry {
            format: Some(" JPG ".to_owned(),),
            ..PresetEntry::named("Upper",)
        };
        let preset = normalize_entry(&PresetDefaults::default(), &entry,).unwrap();
        assert_eq!(preset.request.format(), "jpg");
    }

    #[test]
    fn rejects_blank_name()
    {
        let error = normalize_entry(&PresetDefaults::default(), &PresetEntry::named("   "),)
            .unwrap_err();
        assert_eq!(validation_message(error), "preset name cannot be empty");
    }

    #[test]
    fn rejects_unknown_format()
    {
        let entry = PresetEntry {
            format: Some("bmp".to_owned(),),
            ..PresetEntry::named("Bitmap",)
        };
        let error = normalize_entry(&PresetDefaults::default(), &entry,).unwrap_err();
        assert_eq!(validation_message(error), "preset 'Bitmap': barcode format bmp is unknown");
    }

    #[test]
    fn rejects_unknown_and_unsupported_symbologies()
    {
        let unknown = PresetEntry {
            symbology: Some("QR".to_owned(),),
            ..PresetEntry::named("Square",)
        };
        assert!(normalize_entry(&PresetDefaults::default(), &unknown,).is_err());

        let unsupported = PresetEntry {
            symbology: Some("IMB".to_owned(),),
            ..PresetEntry::named("Mail",)
        };
        let message =
            validation_message(normalize_entry(&PresetDefaults::default(), &unsupported,).unwrap_err(),);
        assert!(message.contains("has no built-in encoder"));
    }

    #[test]
    fn rejects_zero_dimensions()
    {
        let entry = PresetEntry {
            width_factor: Some(0,),
            ..PresetEntry::named("Thin",)
        };
        let message =
            validation_message(normalize_entry(&PresetDefaults::default(), &entry,).unwrap_err(),);
        assert_eq!(message, "preset 'Thin': width_factor must be greater than zero");

        let defaults = PresetDefaults {
            height: Some(0,),
            ..PresetDefaults::default()
        };
        assert!(normalize_entry(&defaults, &PresetEntry::named("Flat"),).is_err());
    }

    #[test]
    fn rejects_color_that_does_not_suit_format()
    {
        let entry = PresetEntry {
            color: Some(Color::named("blue",),),
            ..shelf_entry()
        };
        let message =
            validation_message(normalize_entry(&PresetDefaults::default(), &entry,).unwrap_err(),);
        assert!(message.contains("png output needs an [r, g, b] color"));
    }

    #[test]
    fn prevents_duplicate_slugs()
    {
        let entries = [PresetEntry::named("Shelf Label",), PresetEntry::named("shelf_label",),];
        let error = normalize_presets(&PresetDefaults::default(), &entries,).unwrap_err();
        assert_eq!(validation_message(error), "duplicate slug 'shelf-label'");
    }

    #[test]
    fn normalized_document_preserves_order()
    {
        let entries = [PresetEntry::named("Second",), PresetEntry::named("First",),];
        let document = normalize_presets(&PresetDefaults::default(), &entries,).unwrap();
        assert_eq!(document.slugs().collect::<Vec<_>>(), ["second", "first"]);
    }

    #[test]
    fn parse_presets_rejects_empty_configuration()
    {
        let error = parse_presets("presets: []",).unwrap_err();
        assert_eq!(validation_message(error), "configuration must include at least one preset");
    }

    #[test]
    fn parse_presets_handles_valid_document()
    {
        let yaml = r"
            defaults:
              height: 50
            presets:
              - name: Demo SVG
              - name: Blue UPC-A
                slug: upca-blue
                format: svg
                type: UPCA
                color: blue
                height: 60
        ";

        let document = parse_presets(yaml,).expect("expected parse success",);
        assert_eq!(document.presets.len(), 2);
        assert_eq!(document.presets[0].request.height(), 50);

        let upca = document.find("upca-blue",).expect("expected preset by slug",);
        assert_eq!(upca.name, "Blue UPC-A");
        assert_eq!(upca.request.height(), 60);
        assert_eq!(document.find("blue upc-a"), Some(upca));
    }

    #[test]
    fn parse_presets_propagates_decode_errors()
    {
        let error = parse_presets("presets: [",).unwrap_err();
        assert!(matches!(error, Error::Parse { .. }));
    }

    #[test]
    fn load_presets_reads_configuration_from_disk()
    {
        let mut file = tempfile::NamedTempFile::new().expect("expected temp file",);
        write!(file, "presets:\n  - name: Disk\n    format: html\n").expect("expected write to succeed",);

        let document = load_presets(file.path(),).expect("expected load to succeed",);
        assert_eq!(document.presets[0].slug, "disk");
        assert_eq!(document.presets[0].request.format(), "html");
    }

    #[test]
    fn load_presets_reports_io_errors()
    {
        let path = std::path::Path::new("/nonexistent/presets.yaml",);
        let error = load_presets(path,).expect_err("expected io error",);
        assert!(matches!(error, Error::Io { .. }));
    }
}
