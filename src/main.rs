//! Command-line interface for the barcode-embed binary.
//!
//! The CLI renders single codes into embeddable strings or files, writes the
//! demo page, renders code lists against configured presets, and inspects
//! data URIs produced by any of the above.

use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
    time::Duration,
};

use barcode_embed::{
    BarcodeFacade, BarcodeRequest, BatchReport, Color, Error, OutputFormat, Preset, PresetsDocument,
    artifact_io_error, decode_data_uri, load_codes, load_presets, render_batch, showcase_page,
};
use clap::{ArgAction, Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the preset configuration path.
const CONFIG_ENV: &str = "BARCODE_EMBED_CONFIG";
/// Code rendered by `page` when none is given.
const DEFAULT_PAGE_CODE: &str = "9313920040041";

/// Command line interface for rendering embeddable barcodes.
#[derive(Debug, Parser,)]
#[command(name = "barcode-embed", version, about = "Render barcodes as data URIs and inline HTML")]
struct Cli
{
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Render one code and print the embeddable string.
    Render(RenderArgs,),
    /// Write the demo page showing every format and parameter.
    Page(PageArgs,),
    /// Render a list of codes with every configured preset.
    Batch(BatchArgs,),
    /// Decode a data URI and report its media type and size.
    Inspect(InspectArgs,),
}

#[derive(Debug, Args, Default,)]
/// Arguments accepted by the `render` subcommand.
struct RenderArgs
{
    /// Code to encode.
    #[arg(long = "code", value_name = "CODE")]
    code: String,

    /// Output format: svg, png, jpg or html.
    #[arg(long = "format", value_name = "FORMAT")]
    format: Option<String,>,

    /// Symbology identifier such as EAN13, UPCA, C39 or C128.
    #[arg(long = "type", value_name = "TYPE")]
    symbology: Option<String,>,

    /// Width of the narrowest bar in pixels.
    #[arg(long = "width-factor", value_name = "N")]
    width_factor: Option<u32,>,

    /// Bar height in pixels.
    #[arg(long = "height", value_name = "N")]
    height: Option<u32,>,

    /// CSS color for svg/html, `r,g,b` for png/jpg.
    #[arg(long = "color", value_name = "COLOR")]
    color: Option<Color,>,

    /// YAML preset configuration.
    #[arg(long = "config", value_name = "PATH", env = CONFIG_ENV)]
    config: Option<PathBuf,>,

    /// Preset name or slug used as the base request.
    #[arg(long = "preset", value_name = "NAME", requires = "config")]
    preset: Option<String,>,

    /// Emit raw output instead of the embeddable string.
    #[arg(long = "raw", action = ArgAction::SetTrue)]
    raw: bool,

    /// Write the output to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `page` subcommand.
struct PageArgs
{
    /// EAN-13 code shown on the page.
    #[arg(long = "code", value_name = "CODE", default_value = DEFAULT_PAGE_CODE)]
    code: String,

    /// Write the page to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `batch` subcommand.
struct BatchArgs
{
    /// YAML preset configuration.
    #[arg(long = "config", value_name = "PATH", env = CONFIG_ENV)]
    config: PathBuf,

    /// Text file with one code per line.
    #[arg(long = "codes", value_name = "PATH")]
    codes: PathBuf,

    /// Restrict rendering to the named presets.
    #[arg(long = "preset", value_name = "NAME")]
    presets: Vec<String,>,

    /// Directory receiving the rendered files and the manifest.
    #[arg(long = "output", value_name = "DIR", default_value = "barcodes")]
    output: PathBuf,
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `inspect` subcommand.
struct InspectArgs
{
    /// Data URI to decode.
    #[arg(long = "uri", value_name = "URI")]
    uri: String,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    init_tracing();
    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, `warn` by default.
fn init_tracing()
{
    let filter =
        EnvFilter::builder().with_default_directive(LevelFilter::WARN.into(),).from_env_lossy();
    let _ = tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).try_init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates rendering, configuration and I/O errors.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    let facade = BarcodeFacade::shared();

    match cli.command {
        Command::Render(args,) => run_render(facade, &args, &mut io::stdout().lock(),),
        Command::Page(args,) => run_page(facade, &args, &mut io::stdout().lock(),),
        Command::Batch(args,) => run_batch(facade, &args,).map(|report| print_summary(&report,),),
        Command::Inspect(args,) => run_inspect(&args, &mut io::stdout().lock(),),
    }
}

fn run_render<W: io::Write,>(
    facade: &BarcodeFacade,
    args: &RenderArgs,
    writer: &mut W,
) -> Result<(), Error,>
{
    let request = build_request(args,)?;
    debug!("rendering {} with {:?}", args.code, request);

    let bytes = if args.raw || args.output.is_some() {
        facade.raw_content(&request, &args.code,)?.into_bytes()
    } else {
        facade.render(&request, &args.code,)?.into_bytes()
    };

    match args.output.as_deref() {
        Some(path,) => write_file(path, &bytes,),
        None => write_stdout(writer, &bytes, !args.raw,),
    }
}

/// Builds the request from an optional preset plus command-line overrides.
fn build_request(args: &RenderArgs,) -> Result<BarcodeRequest, Error,>
{
    let mut request = match (args.preset.as_deref(), args.config.as_deref(),) {
        (Some(name,), Some(config,),) => find_preset(config, name,)?.request,
        (Some(_,), None,) => {
            return Err(Error::validation(format!(
                "--preset requires --config <PATH> or {CONFIG_ENV}"
            ),),);
        }
        (None, _,) => BarcodeRequest::default(),
    };

    if let Some(format,) = args.format.as_deref() {
        request.set_format(format,);
    }
    if let Some(symbology,) = args.symbology.as_deref() {
        request.set_symbology(symbology,);
    }
    if let Some(width_factor,) = args.width_factor {
        request.set_width_factor(width_factor,);
    }
    if let Some(height,) = args.height {
        request.set_height(height,);
    }
    if let Some(color,) = args.color.clone() {
        request.set_color(color,);
    }

    Ok(request,)
}

fn find_preset(config: &Path, name: &str,) -> Result<Preset, Error,>
{
    let document = load_presets(config,)?;
    document
        .find(name,)
        .cloned()
        .ok_or_else(|| Error::validation(format!("preset '{name}' was not found"),),)
}

fn run_page<W: io::Write,>(facade: &BarcodeFacade, args: &PageArgs, writer: &mut W,) -> Result<(), Error,>
{
    let page = showcase_page(facade, &args.code,)?;
    match args.output.as_deref() {
        Some(path,) => write_file(path, page.as_bytes(),),
        None => write_stdout(writer, page.as_bytes(), false,),
    }
}

fn run_batch(facade: &BarcodeFacade, args: &BatchArgs,) -> Result<BatchReport, Error,>
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.yellow} [{elapsed_precise}] {msg}",)
            .unwrap_or_else(|_| ProgressStyle::default_spinner(),),
    );
    pb.enable_steady_tick(Duration::from_millis(100,),);

    pb.set_message(format!("Loading presets from {}...", args.config.display()),);
    let document = load_presets(&args.config,)?;
    let presets = select_presets(document.presets, &args.presets,)?;

    pb.set_message(format!("Loading codes from {}...", args.codes.display()),);
    let codes = load_codes(&args.codes,)?;
    if codes.is_empty() {
        pb.finish_and_clear();
        return Err(Error::validation(format!("no codes found in {}", args.codes.display()),),);
    }

    pb.set_message(format!(
        "Rendering {} codes with {} presets into {}...",
        codes.len(),
        presets.len(),
        args.output.display()
    ),);
    let report = render_batch(facade, &presets, &codes, &args.output,);
    match &report {
        Ok(report,) => pb.finish_with_message(format!(
            "Batch complete: {} files, {} failures",
            report.artifacts.len(),
            report.failures.len()
        ),),
        Err(_,) => pb.finish_and_clear(),
    }
    report
}

/// Keeps only the presets named on the command line, in that order.
/// Picks the presets named on the command line in the order given. A preset
/// named more than once, by name or by slug, is kept only at its first
/// position.
fn select_presets(presets: Vec<Preset,>, selected: &[String],) -> Result<Vec<Preset,>, Error,>
{
    if selected.is_empty() {
        return Ok(presets,);
    }

    let document = PresetsDocument {
        presets,
    };
    let mut picked: Vec<Preset,> = Vec::with_capacity(selected.len(),);
    for name in selected {
        let preset = document
            .find(name,)
            .ok_or_else(|| Error::validation(format!("preset '{name}' was not found"),),)?;
        if picked.iter().any(|existing| existing.slug == preset.slug,) {
            debug!("preset '{name}' selected more than once");
            continue;
        }
        picked.push(preset.clone(),);
    }
    Ok(picked,)
}

fn print_summary(report: &BatchReport,)
{
    for failure in &report.failures {
        eprintln!("{}: {}: {}", failure.preset, failure.code, failure.message);
    }
    println!(
        "{} files written ({} bytes), {} failures",
        report.artifacts.len(),
        report.total_bytes(),
        report.failures.len()
    );
}

fn run_inspect<W: io::Write,>(args: &InspectArgs, writer: &mut W,) -> Result<(), Error,>
{
    let (mime, bytes,) = decode_data_uri(&args.uri,)?;
    let format = OutputFormat::ALL.into_iter().find(|format| format.mime_type() == Some(mime.as_str()),);
    let label = format.map_or("unknown", OutputFormat::as_str,);
    let line = format!("{mime} ({label}): {} bytes\n", bytes.len());
    write_stdout(writer, line.as_bytes(), false,)
}

fn write_file(path: &Path, bytes: &[u8],) -> Result<(), Error,>
{
    if let Some(parent,) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent,).map_err(|source| artifact_io_error(parent, source,),)?;
    }
    fs::write(path, bytes,).map_err(|source| artifact_io_error(path, source,),)?;
    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok((),)
}

fn write_stdout<W: io::Write,>(writer: &mut W, bytes: &[u8], newline: bool,) -> Result<(), Error,>
{
    let stdout = Path::new("<stdout>",);
    writer.write_all(bytes,).map_err(|source| artifact_io_error(stdout, source,),)?;
    if newline {
        writer.write_all(b"\n",).map_err(|source| artifact_io_error(stdout, source,),)?;
    }
    writer.flush().map_err(|source| artifact_io_error(stdout, source,),)
}
