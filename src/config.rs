//! Configuration document types describing barcode presets.
//!
//! The types in this module mirror the YAML documents consumed by the CLI.
//! Every rendering field is optional: an entry falls back to the document
//! `defaults` block and then to the library defaults. Normalization into
//! ready-to-render requests lives in [`crate::normalizer`].

use serde::{Deserialize, Serialize};

use crate::{color::Color, slug::SlugStrategy};

/// Root configuration document.
///
/// # Examples
///
/// ```
/// use barcode_embed::PresetConfig;
///
/// let yaml = r#"
/// defaults:
///   height: 40
/// presets:
///   - name: Shelf Label
///     format: png
///     type: UPCA
///     color: [0, 0, 255]
/// "#;
/// let config: PresetConfig = serde_yaml::from_str(yaml,).expect("valid configuration",);
/// assert_eq!(config.presets.len(), 1);
/// assert_eq!(config.defaults.height, Some(40));
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
#[serde(deny_unknown_fields)]
pub struct PresetConfig
{
    /// Values applied to every preset that leaves a field unset.
    #[serde(default)]
    pub defaults: PresetDefaults,

    /// Named presets in declaration order.
    #[serde(default)]
    pub presets: Vec<PresetEntry,>,
}

/// Document-wide overrides of the library defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq,)]
#[serde(deny_unknown_fields)]
pub struct PresetDefaults
{
    /// Output format token.
    #[serde(default)]
    pub format: Option<String,>,

    /// Symbology identifier.
    #[serde(default, rename = "type", alias = "symbology")]
    pub symbology: Option<String,>,

    /// Width of the narrowest bar in pixels.
    #[serde(default, alias = "width")]
    pub width_factor: Option<u32,>,

    /// Bar height in pixels.
    #[serde(default)]
    pub height: Option<u32,>,

    /// Foreground color, a CSS string or an `[r, g, b]` list.
    #[serde(default)]
    pub color: Option<Color,>,
}

/// Raw preset entry before normalization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq,)]
#[serde(deny_unknown_fields)]
pub struct PresetEntry
{
    /// Human readable preset name.
    pub name: String,

    /// Optional slug override used for lookups and output directories.
    #[serde(default)]
    pub slug: Option<String,>,

    /// Output format token.
    #[serde(default)]
    pub format: Option<String,>,

    /// Symbology identifier.
    #[serde(default, rename = "type", alias = "symbology")]
    pub symbology: Option<String,>,

    /// Width of the narrowest bar in pixels.
    #[serde(default, alias = "width")]
    pub width_factor: Option<u32,>,

    /// Bar height in pixels.
    #[serde(default)]
    pub height: Option<u32,>,

    /// Foreground color.
    #[serde(default)]
    pub color: Option<Color,>,
}

impl PresetEntry
{
    /// Creates an entry that inherits every rendering field.
    pub fn named<S,>(name: S,) -> Self
    where
        S: Into<String,>,
    {
        Self {
            name:         name.into(),
            slug:         None,
            format:       None,
            symbology:    None,
            width_factor: None,
            height:       None,
            color:        None,
        }
    }

    /// Returns the slug for this preset: the normalized override when one is
    /// given, otherwise the slug of the name.
    ///
    /// # Examples
    ///
    /// ```
    /// use barcode_embed::PresetEntry;
    ///
    /// let entry = PresetEntry::named("Shelf Label",);
    /// assert_eq!(entry.resolved_slug().as_deref(), Some("shelf-label"));
    /// ```
    pub fn resolved_slug(&self,) -> Option<String,>
    {
        let source = self.slug.as_deref().unwrap_or(&self.name,);
        SlugStrategy::builder(source,).build()
    }
}

#[cfg(test)]
mod tests
{
    use super::{PresetConfig, PresetDefaults, PresetEntry};
    use crate::color::Color;

    #[test]
    fn resolved_slug_prefers_custom_value()
    {
        let entry = PresetEntry {
            slug: Some("  Custom Slug  ".to_owned(),),
            ..PresetEntry::named("Shelf Label",)
        };
        assert_eq!(entry.resolved_slug().as_deref(), Some("custom-slug"));
    }

    #[test]
    fn resolved_slug_falls_back_to_name()
    {
        let entry = PresetEntry::named("Blue UPC-A",);
        assert_eq!(entry.resolved_slug().as_deref(), Some("blue-upc-a"));
    }

    #[test]
    fn resolved_slug_returns_none_when_unable_to_derive()
    {
        assert!(PresetEntry::named("***").resolved_slug().is_none());
    }

    #[test]
    fn entry_supports_field_aliases()
    {
        let yaml = r"
            name: Aliased
            symbology: C39
            width: 3
        ";

        let entry: PresetEntry = serde_yaml::from_str(yaml,).expect("expected aliases to deserialize",);
        assert_eq!(entry.symbology.as_deref(), Some("C39"));
        assert_eq!(entry.width_factor, Some(3));
    }

    #[test]
    fn entry_accepts_both_color_representations()
    {
        let yaml = r"
            - name: Named
              color: red
            - name: Triple
              color: [0, 0, 255]
        ";

        let entries: Vec<PresetEntry,> = serde_yaml::from_str(yaml,).expect("expected entries",);
        assert_eq!(entries[0].color, Some(Color::named("red")));
        assert_eq!(entries[1].color, Some(Color::rgb(0, 0, 255)));
    }

    #[test]
    fn entry_rejects_unknown_fields()
    {
        let yaml = r"
            name: Typo
            heigth: 40
        ";

        let error = serde_yaml::from_str::<PresetEntry,>(yaml,).unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }

    #[test]
    fn config_defaults_block_is_optional()
    {
        let config: PresetConfig =
            serde_yaml::from_str("presets:\n  - name: Only\n",).expect("expected config",);
        assert_eq!(config.defaults, PresetDefaults::default());
        assert_eq!(config.presets, vec![PresetEntry::named("Only")]);
    }
}
