// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Batch rendering of preset and code combinations into files.
//!
//! Every preset gets a directory named after its slug; every code becomes a
//! file named after the code slug with the extension of the preset format.
//! A `manifest.json` at the root of the output directory lists what was
//! written and which codes the engine rejected.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    error::{self, Error},
    facade::BarcodeFacade,
    format::OutputFormat,
    normalizer::Preset,
    slug::SlugStrategy,
};

/// File name of the batch manifest.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Rendered file written by a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct ArtifactRecord
{
    /// Slug of the preset used.
    pub preset: String,
    /// Code as listed in the input.
    pub code:   String,
    /// Output format of the file.
    pub format: OutputFormat,
    /// Path relative to the output directory.
    pub path:   PathBuf,
    /// File size in bytes.
    pub bytes:  usize,
}

/// Code the engine could not render with a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct ArtifactFailure
{
    /// Slug of the preset used.
    pub preset:  String,
    /// Code as listed in the input.
    pub code:    String,
    /// Engine error message.
    pub message: String,
}

/// Outcome of [`render_batch`], also written as the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct BatchReport
{
    /// Written files in preset then code order.
    pub artifacts: Vec<ArtifactRecord,>,
    /// Rejected combinations in preset then code order.
    pub failures:  Vec<ArtifactFailure,>,
}

impl BatchReport
{
    /// Total bytes written, manifest excluded.
    pub fn total_bytes(&self,) -> usize
    {
        self.artifacts.iter().map(|artifact| artifact.bytes,).sum()
    }

    /// Returns `true` when every combination rendered.
    pub fn is_complete(&self,) -> bool
    {
        self.failures.is_empty()
    }
}

enum Outcome
{
    Written(ArtifactRecord,),
    Rejected(ArtifactFailure,),
}

/// Reads codes from a text file, one per line.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read.
pub fn load_codes(path: &Path,) -> Result<Vec<String,>, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    Ok(parse_codes(&contents,),)
}

/// Extracts codes from text. Lines are trimmed; blank lines and lines
/// starting with `#` are skipped.
///
/// # Examples
///
/// ```
/// use barcode_embed::parse_codes;
///
/// let codes = parse_codes("# shelf\n9313920040041\n\n  12345670  \n",);
/// assert_eq!(codes, ["9313920040041", "12345670"]);
/// ```
pub fn parse_codes(contents: &str,) -> Vec<String,>
{
    contents
        .lines()
        .map(str::trim,)
        .filter(|line| !line.is_empty() && !line.starts_with('#',),)
        .map(str::to_owned,)
        .collect()
}

/// Renders every preset and code combination in parallel and writes the
/// results under `output_dir`.
///
/// Engine failures for single combinations are collected in the report.
///
/// # Errors
///
/// Returns [`Error::ArtifactIo`] when a directory, a file or the manifest
/// cannot be written, [`Error::Serialize`] when the manifest cannot be
/// encoded and [`Error::Validation`] when a preset format cannot be resolved.
pub fn render_batch(
    facade: &BarcodeFacade,
    presets: &[Preset],
    codes: &[String],
    output_dir: &Path,
) -> Result<BatchReport, Error,>
{
    let formats = presets
        .iter()
        .map(|preset| {
            preset.format().map_err(|error| {
                Error::validation(format!("preset '{}': {error}", preset.name),)
            },)
        },)
        .collect::<Result<Vec<_,>, _,>>()?;

    for preset in presets {
        let directory = output_dir.join(&preset.slug,);
        fs::create_dir_all(&directory,)
            .map_err(|source| error::artifact_io_error(&directory, source,),)?;
    }

    let stems = file_stems(codes,);
    let jobs: Vec<(usize, usize,),> = (0..presets.len())
        .flat_map(|preset| (0..codes.len()).map(move |code| (preset, code,),),)
        .collect();
    debug!(
        "rendering {} combinations of {} presets and {} codes",
        jobs.len(),
        presets.len(),
        codes.len()
    );

    let outcomes = jobs
        .par_iter()
        .map(|&(preset_index, code_index,)| {
            render_one(
                facade,
                &presets[preset_index],
                formats[preset_index],
                &codes[code_index],
                stems[code_index].as_deref(),
                output_dir,
            )
        },)
        .collect::<Result<Vec<Outcome,>, Error,>>()?;

    let mut report = BatchReport {
        artifacts: Vec::with_capacity(outcomes.len(),),
        failures:  Vec::new(),
    };
    for outcome in outcomes {
        match outcome {
            Outcome::Written(record,) => report.artifacts.push(record,),
            Outcome::Rejected(failure,) => report.failures.push(failure,),
        }
    }

    let manifest_path = output_dir.join(MANIFEST_FILE,);
    let manifest = serde_json::to_string_pretty(&report,)?;
    fs::write(&manifest_path, manifest,)
        .map_err(|source| error::artifact_io_error(&manifest_path, source,),)?;

    info!(
        "batch complete: {} files, {} bytes, {} failures",
        report.artifacts.len(),
        report.total_bytes(),
        report.failures.len()
    );
    Ok(report,)
}

fn render_one(
    facade: &BarcodeFacade,
    preset: &Preset,
    format: OutputFormat,
    code: &str,
    stem: Option<&str,>,
    output_dir: &Path,
) -> Result<Outcome, Error,>
{
    let rejected = |message: String| {
        warn!("preset {} rejected code {code}: {message}", preset.slug);
        Ok(Outcome::Rejected(ArtifactFailure {
            preset: preset.slug.clone(),
            code: code.to_owned(),
            message,
        },),)
    };

    let Some(stem,) = stem else {
        return rejected("code has no characters usable in a file name".to_owned(),);
    };

    let content = match facade.raw_content(&preset.request, code,) {
        Ok(content,) => content,
        Err(error,) => return rejected(error.to_display_string(),),
    };

    let relative = Path::new(&preset.slug,).join(format!("{stem}.{}", format.as_str()),);
    let path = output_dir.join(&relative,);
    let bytes = content.len();
    fs::write(&path, content.into_bytes(),).map_err(|source| error::artifact_io_error(&path, source,),)?;
    debug!("wrote {} ({bytes} bytes)", path.display());

    Ok(Outcome::Written(ArtifactRecord {
        preset: preset.slug.clone(),
        code: code.to_owned(),
        format,
        path: relative,
        bytes,
    },),)
}

/// Derives a unique file stem per code. A code whose slug is already taken
/// gets the lowest numeric suffix that no earlier stem uses.
fn file_stems(codes: &[String],) -> Vec<Option<String,>,>
{
    let mut issued: HashSet<String,> = HashSet::with_capacity(codes.len(),);
    codes
        .iter()
        .map(|code| {
            let slug = SlugStrategy::builder(code,).build()?;
            let mut stem = slug.clone();
            let mut suffix = 2_usize;
            while issued.contains(&stem,) {
                stem = format!("{slug}-{suffix}");
                suffix += 1;
            }
            issued.insert(stem.clone(),);
            Some(stem,)
        },)
        .collect()
}
