// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Stable slugs for preset names and rendered file names.
//!
//! Slugs contain only lowercase ASCII alphanumerics separated by single
//! hyphens, so a preset called `Shelf Label` and a Code 39 payload such as
//! `CODE-39 / A.1` both map to portable directory and file names.

/// Upper bound on slug length, well below common file name limits.
pub const DEFAULT_MAX_LENGTH: usize = 96;

/// Builder for slug strings.
#[derive(Debug, Clone, Copy,)]
pub struct SlugStrategy<'input,>
{
    source:     &'input str,
    max_length: usize,
}

impl<'input,> SlugStrategy<'input,>
{
    /// Creates a builder over `source` without allocating.
    pub fn builder(source: &'input str,) -> Self
    {
        Self {
            source,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Caps the slug at `max_length` bytes. A cut never leaves a trailing
    /// hyphen.
    pub fn max_length(mut self, max_length: usize,) -> Self
    {
        self.max_length = max_length;
        self
    }

    /// Builds the slug, or `None` when nothing slug-worthy remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use barcode_embed::SlugStrategy;
    ///
    /// let slug = SlugStrategy::builder(" Shelf Label / UPC-A ",).build();
    /// assert_eq!(slug.as_deref(), Some("shelf-label-upc-a"));
    ///
    /// assert!(SlugStrategy::builder("***",).build().is_none());
    /// ```
    pub fn build(self,) -> Option<String,>
    {
        let trimmed = self.source.trim();
        if trimmed.is_empty() || self.max_length == 0 {
            return None;
        }

        let mut slug = String::with_capacity(trimmed.len().min(self.max_length,),);
        let mut previous_hyphen = false;

        for candidate in trimmed.chars() {
            if slug.len() >= self.max_length {
                break;
            }
            if candidate.is_ascii_alphanumeric() {
                slug.push(candidate.to_ascii_lowercase(),);
                previous_hyphen = false;
            } else if !previous_hyphen && !slug.is_empty() {
                slug.push('-',);
                previous_hyphen = true;
            }
        }

        while slug.ends_with('-',) {
            slug.pop();
        }

        if slug.is_empty() { None } else { Some(slug,) }
    }
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn slug_contains_only_allowed_characters(input in "[A-Za-z0-9$%+*._/ -]{1,48}") {
            let slug = SlugStrategy::builder(&input).build();
            let well_formed = slug.is_none_or(|value| {
                !value.starts_with('-')
                    && !value.ends_with('-')
                    && !value.contains("--")
                    && value.chars().all(|ch| matches!(ch, 'a'..='z' | '0'..='9' | '-'))
            });
            prop_assert!(well_formed, "malformed slug for {:?}", input);
        }

        #[test]
        fn slug_respects_max_length(input in "[A-Za-z0-9 -]{1,200}", limit in 1usize..64) {
            let slug = SlugStrategy::builder(&input).max_length(limit).build();
            let within_limit = slug.is_none_or(|value| value.len() <= limit);
            prop_assert!(within_limit);
        }
    }

    #[test]
    fn numeric_codes_are_kept_verbatim()
    {
        let slug = SlugStrategy::builder("9313920040041",).build();
        assert_eq!(slug.as_deref(), Some("9313920040041"));
    }

    #[test]
    fn code39_symbols_collapse_into_single_hyphens()
    {
        let slug = SlugStrategy::builder("CODE-39 / A.1 $%",).build();
        assert_eq!(slug.as_deref(), Some("code-39-a-1"));
    }

    #[test]
    fn preset_names_are_lowercased()
    {
        let slug = SlugStrategy::builder("  Shelf Label__Blue  ",).build();
        assert_eq!(slug.as_deref(), Some("shelf-label-blue"));
    }

    #[test]
    fn returns_none_without_alphanumerics()
    {
        assert!(SlugStrategy::builder("   ").build().is_none());
        assert!(SlugStrategy::builder("---___...///").build().is_none());
        assert!(SlugStrategy::builder("世界").build().is_none());
    }

    #[test]
    fn non_ascii_characters_act_as_separators()
    {
        let slug = SlugStrategy::builder("label-世界-test",).build();
        assert_eq!(slug.as_deref(), Some("label-test"));
    }

    #[test]
    fn truncation_drops_trailing_separator()
    {
        let slug = SlugStrategy::builder("abc def",).max_length(4,).build();
        assert_eq!(slug.as_deref(), Some("abc"));
    }

    #[test]
    fn long_codes_are_capped_by_default()
    {
        let input = "7".repeat(300,);
        let slug = SlugStrategy::builder(&input,).build().expect("slug",);
        assert_eq!(slug.len(), DEFAULT_MAX_LENGTH);
    }

    #[test]
    fn zero_length_limit_yields_none()
    {
        assert!(SlugStrategy::builder("abc").max_length(0).build().is_none());
    }
}
