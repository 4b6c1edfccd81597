use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use clap::{ArgAction, Parser, Subcommand};
use textcue::{Document, Generator, GeneratorConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "textcue", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a text document and write storyboard placements.
    Generate(GenerateArgs),
    /// Parse, validate and dry-run a text document; print diagnostics.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input text document (JSON, or YAML for .yaml/.yml files).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Generator config JSON (font, effects, layer). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Osb)]
    format: OutputFormat,

    /// Fail when any layout diagnostic is reported.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input text document (JSON, or YAML for .yaml/.yml files).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Generator config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load(in_path: &Path, config: Option<&Path>) -> anyhow::Result<(Document, Generator)> {
    let doc = Document::from_path(in_path)
        .with_context(|| format!("load document '{}'", in_path.display()))?;
    let cfg = match config {
        Some(p) => GeneratorConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => GeneratorConfig::default(),
    };
    Ok((doc, Generator::new(cfg)?))
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let (doc, generator) = load(&args.in_path, args.config.as_deref())?;
    let rendered = generator.render(&doc, args.format)?;

    eprint!("{}", rendered.report.diagnostics);
    if args.strict && !rendered.report.diagnostics.is_clean() {
        bail!(
            "{} diagnostic(s) reported in strict mode",
            rendered.report.diagnostics.len()
        );
    }

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, rendered.text.as_bytes())
                .with_context(|| format!("write output '{}'", out.display()))?;
            eprintln!(
                "wrote {} ({} placements)",
                out.display(),
                rendered.report.placements
            );
        }
        None => print!("{}", rendered.text),
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let (doc, generator) = load(&args.in_path, args.config.as_deref())?;
    let glyphs = generator.glyph_source()?;
    let mut placements = Vec::new();
    let report = generator.generate(&doc, glyphs, &mut placements)?;

    print!("{}", report.diagnostics);
    println!(
        "nodes: {}, passes: {}, placements: {}, warnings: {}",
        doc.root.node_count(),
        report.nodes_visited,
        report.placements,
        report.diagnostics.len()
    );
    if !report.diagnostics.is_clean() {
        bail!("document has {} warning(s)", report.diagnostics.len());
    }
    Ok(())
}
