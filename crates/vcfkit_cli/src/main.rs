//! `vcfkit` command-line entry point.
//!
//! # Responsibility
//! - Read input files, select CSV columns explicitly, write named outputs.
//! - Map flags and an optional JSON settings file onto `vcfkit_core` calls.
//!
//! # Invariants
//! - All conversion semantics live in `vcfkit_core`; this binary only does I/O.
//! - "No valid numbers" is reported as a status line, not a failure.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use vcfkit_core::{
    analyze_sources, convert_to_vcards, default_log_level, extract_contacts_with,
    extract_to_numbers, init_logging, merge_contacts, render_contacts, split_lines, split_vcard,
    ColumnSelector, ConvertOutcome, DecodeMode, ExportFormat, LogTarget, OutputBundle, Settings,
    Source, SourceSet, ValidationMode,
};

#[derive(Parser)]
#[command(name = "vcfkit")]
#[command(about = "Convert, split and merge phone number lists and vCard files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON settings file; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write rotating log files to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert TXT/CSV/VCF numbers into batched VCF files
    #[command(name = "to-vcf")]
    ToVcf(ToVcfArgs),

    /// Extract numbers from VCF files into one TXT or CSV file
    #[command(name = "to-txt")]
    ToTxt(ToTxtArgs),

    /// Print a JSON report of what a conversion would collect
    Analyze(AnalyzeArgs),

    /// Split a TXT or VCF file into fixed-size chunks
    Split(SplitArgs),

    /// Merge VCF files by contact name and/or number
    Merge(MergeArgs),
}

#[derive(Args)]
struct SourceArgs {
    /// Input files (.txt, .csv or .vcf), read in the given order
    #[arg(short, long = "input")]
    inputs: Vec<PathBuf>,

    /// Pasted numbers, one per line; always appended after file inputs
    #[arg(long)]
    manual: Option<String>,

    /// CSV column holding phone numbers
    #[arg(long, default_value = "phone", conflicts_with = "csv_index")]
    csv_column: String,

    /// Zero-based CSV column index holding phone numbers
    #[arg(long)]
    csv_index: Option<usize>,
}

#[derive(Args)]
struct NormalizeArgs {
    /// Accept numbers of plausible length instead of numbering-plan valid ones
    #[arg(long)]
    lenient: bool,

    /// ISO 3166 region used for numbers without a country code (e.g. GB)
    #[arg(long)]
    region: Option<String>,
}

#[derive(Args)]
struct ToVcfArgs {
    #[command(flatten)]
    sources: SourceArgs,

    #[command(flatten)]
    normalize: NormalizeArgs,

    /// Directory receiving `<file-prefix> <set>.vcf` files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Contact name prefix used in N/FN
    #[arg(long)]
    name_prefix: Option<String>,

    /// Output file name prefix
    #[arg(long)]
    file_prefix: Option<String>,

    /// Contacts per VCF file
    #[arg(long)]
    batch_size: Option<usize>,

    /// First set number
    #[arg(long)]
    start_set: Option<u32>,
}

#[derive(Args)]
struct ToTxtArgs {
    /// VCF input files
    #[arg(short, long = "input", required = true)]
    inputs: Vec<PathBuf>,

    /// Output file path
    #[arg(short, long)]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Keep digits only (drops `+` and separators)
    #[arg(long)]
    digits_only: bool,

    /// Normalize values and drop invalid ones
    #[arg(long)]
    canonicalize: bool,

    /// Drop repeated values
    #[arg(long)]
    dedupe: bool,

    #[command(flatten)]
    normalize: NormalizeArgs,
}

#[derive(Args)]
struct AnalyzeArgs {
    #[command(flatten)]
    sources: SourceArgs,

    #[command(flatten)]
    normalize: NormalizeArgs,
}

#[derive(Args)]
struct SplitArgs {
    /// File to split
    #[arg(short, long)]
    input: PathBuf,

    /// Input kind; inferred from the extension when omitted
    #[arg(long, value_enum)]
    kind: Option<SplitKind>,

    /// Output file name prefix
    #[arg(long)]
    prefix: Option<String>,

    /// Lines or records per chunk
    #[arg(long)]
    size: Option<usize>,

    /// First chunk number
    #[arg(long)]
    start_set: Option<u32>,

    /// Directory receiving chunk files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args)]
struct MergeArgs {
    /// VCF input files
    #[arg(short, long = "input", required = true)]
    inputs: Vec<PathBuf>,

    /// Output VCF path
    #[arg(short, long)]
    output: PathBuf,

    /// Keep same-named contacts as separate entries
    #[arg(long)]
    no_merge_by_name: bool,

    /// Allow the same number on several contacts
    #[arg(long)]
    no_dedupe: bool,

    /// Reject malformed vCard structure instead of dropping records
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Txt,
    Csv,
}

impl FormatArg {
    fn as_domain(self) -> ExportFormat {
        match self {
            Self::Txt => ExportFormat::Txt,
            Self::Csv => ExportFormat::Csv,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SplitKind {
    Txt,
    Vcf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logging(cli.log_level.as_deref(), cli.log_dir.as_deref())?;
    let mut settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::ToVcf(args) => run_to_vcf(args, &mut settings),
        Commands::ToTxt(args) => run_to_txt(args, &mut settings),
        Commands::Analyze(args) => run_analyze(args, &mut settings),
        Commands::Split(args) => run_split(args, &mut settings),
        Commands::Merge(args) => run_merge(args, &mut settings),
    }
}

fn init_cli_logging(level: Option<&str>, log_dir: Option<&Path>) -> Result<()> {
    let (level, target) = match log_dir {
        Some(dir) => {
            let dir = if dir.is_absolute() {
                dir.to_path_buf()
            } else {
                std::env::current_dir()
                    .context("Failed to resolve current directory")?
                    .join(dir)
            };
            (level.unwrap_or(default_log_level()), LogTarget::Directory(dir))
        }
        None => (level.unwrap_or("warn"), LogTarget::Stderr),
    };
    init_logging(level, &target).map_err(|err| anyhow!(err))
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid settings file {}", path.display()))?;
    debug!("event=settings_loaded module=cli status=ok path={}", path.display());
    Ok(settings)
}

fn apply_normalize(args: &NormalizeArgs, settings: &mut Settings) {
    if args.lenient {
        settings.normalize.validation = ValidationMode::Lenient;
    }
    if let Some(region) = &args.region {
        settings.normalize.default_region = Some(region.clone());
    }
}

fn build_sources(args: &SourceArgs) -> Result<SourceSet> {
    let column = match args.csv_index {
        Some(index) => ColumnSelector::Index(index),
        None => ColumnSelector::Name(args.csv_column.clone()),
    };

    let mut sources = SourceSet::new();
    for path in &args.inputs {
        let text = read_text(path)?;
        let source = match extension(path).as_str() {
            "csv" => Source::Csv {
                text,
                column: column.clone(),
            },
            "vcf" | "vcard" => Source::VCard(text),
            _ => Source::Text(text),
        };
        sources.push_file(source);
    }
    if let Some(manual) = &args.manual {
        sources.set_manual(manual.as_str());
    }
    Ok(sources)
}

fn run_to_vcf(args: ToVcfArgs, settings: &mut Settings) -> Result<()> {
    apply_normalize(&args.normalize, settings);
    if let Some(name_prefix) = args.name_prefix {
        settings.convert.name_prefix = name_prefix;
    }
    if let Some(file_prefix) = args.file_prefix {
        settings.convert.file_prefix = file_prefix;
    }
    if let Some(batch_size) = args.batch_size {
        settings.convert.batch_size = batch_size;
    }
    if let Some(start_set) = args.start_set {
        settings.convert.start_set_number = start_set;
    }
    settings.validate().context("Invalid settings")?;

    let sources = build_sources(&args.sources)?;
    if sources.file_count() == 0 && !sources.has_manual() {
        bail!("No input given; pass --input and/or --manual");
    }

    match convert_to_vcards(&sources, &settings.normalize, &settings.convert)? {
        ConvertOutcome::Converted { bundle, report } => {
            let written = write_bundle(&args.out_dir, &bundle, "vcf")?;
            println!(
                "Converted {} contacts into {} VCF file(s) (skipped {}, duplicates {})",
                report.valid, written, report.skipped, report.duplicates
            );
        }
        ConvertOutcome::NoValidNumbers { report } => {
            println!(
                "No valid phone numbers found ({} input value(s) skipped)",
                report.skipped
            );
        }
    }
    Ok(())
}

fn run_to_txt(args: ToTxtArgs, settings: &mut Settings) -> Result<()> {
    apply_normalize(&args.normalize, settings);
    let extract = &mut settings.extract;
    extract.digits_only |= args.digits_only;
    extract.canonicalize |= args.canonicalize;
    extract.dedupe |= args.dedupe;
    if let Some(format) = args.format {
        extract.format = format.as_domain();
    }
    settings.validate().context("Invalid settings")?;

    let texts = args
        .inputs
        .iter()
        .map(|path| read_text(path))
        .collect::<Result<Vec<_>>>()?;
    let outcome = extract_to_numbers(&texts, &settings.extract, &settings.normalize);
    if outcome.numbers.is_empty() {
        println!("No phone numbers found in {} VCF file(s)", texts.len());
        return Ok(());
    }

    let content = outcome
        .render(settings.extract.format)
        .context("Failed to render numbers")?;
    write_file(&args.output, &content)?;
    println!(
        "Extracted {} number(s) from {} VCF file(s) into {}",
        outcome.numbers.len(),
        texts.len(),
        args.output.display()
    );
    Ok(())
}

fn run_analyze(args: AnalyzeArgs, settings: &mut Settings) -> Result<()> {
    apply_normalize(&args.normalize, settings);
    settings.validate().context("Invalid settings")?;

    let sources = build_sources(&args.sources)?;
    let analysis = analyze_sources(&sources, &settings.normalize)?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

fn run_split(args: SplitArgs, settings: &mut Settings) -> Result<()> {
    if let Some(prefix) = args.prefix {
        settings.split.prefix = prefix;
    }
    if let Some(size) = args.size {
        settings.split.chunk_size = size;
    }
    if let Some(start_set) = args.start_set {
        settings.split.start_set_number = start_set;
    }
    settings.validate().context("Invalid settings")?;

    let kind = match args.kind {
        Some(kind) => kind,
        None if matches!(extension(&args.input).as_str(), "vcf" | "vcard") => SplitKind::Vcf,
        None => SplitKind::Txt,
    };
    let text = read_text(&args.input)?;
    let (bundle, ext) = match kind {
        SplitKind::Txt => (split_lines(&text, &settings.split)?, "txt"),
        SplitKind::Vcf => (split_vcard(&text, &settings.split)?, "vcf"),
    };
    let written = write_bundle(&args.out_dir, &bundle, ext)?;
    println!("Split into {written} {} file(s)", ext.to_uppercase());
    Ok(())
}

fn run_merge(args: MergeArgs, settings: &mut Settings) -> Result<()> {
    if args.no_merge_by_name {
        settings.merge.merge_by_name = false;
    }
    if args.no_dedupe {
        settings.merge.dedupe_numbers = false;
    }
    let mode = if args.strict {
        DecodeMode::Strict
    } else {
        DecodeMode::Permissive
    };

    let mut contacts = Vec::new();
    for path in &args.inputs {
        let text = read_text(path)?;
        let decoded = extract_contacts_with(&text, mode)
            .with_context(|| format!("Malformed vCard in {}", path.display()))?;
        contacts.extend(decoded);
    }
    let decoded_count = contacts.len();
    let merged = merge_contacts(contacts, &settings.merge);
    if merged.is_empty() {
        println!("No contacts with phone numbers found");
        return Ok(());
    }

    write_file(&args.output, &render_contacts(&merged))?;
    println!(
        "Merged {} contact(s) into {} record(s) in {}",
        decoded_count,
        merged.len(),
        args.output.display()
    );
    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn write_bundle(dir: &Path, bundle: &OutputBundle, ext: &str) -> Result<usize> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    for unit in bundle {
        let path = dir.join(format!("{}.{ext}", unit.name));
        write_file(&path, &unit.content)?;
    }
    Ok(bundle.len())
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}
