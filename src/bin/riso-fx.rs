use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::{Digest as _, Sha256};

#[derive(Parser, Debug)]
#[command(name = "riso-fx", version)]
struct Cli {
    /// Log level for stderr diagnostics (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a theme's effects to a PNG.
    Apply(ApplyArgs),
    /// Print the numeric seed derived from an identifier.
    Seed(SeedArgs),
    /// Print the normalized risograph config of a theme as JSON.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Theme JSON containing an `effects` section.
    #[arg(long)]
    theme: PathBuf,

    /// Seed identifier (e.g. a preset id). Defaults to the built-in seed.
    #[arg(long)]
    seed: Option<String>,

    /// Enable row-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Print the SHA-256 of the output RGBA bytes.
    #[arg(long, default_value_t = false)]
    print_sha256: bool,
}

#[derive(Parser, Debug)]
struct SeedArgs {
    /// Identifier to hash.
    id: String,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Theme JSON containing an `effects` section.
    #[arg(long)]
    theme: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level)
        .init();

    match cli.cmd {
        Command::Apply(args) => cmd_apply(args),
        Command::Seed(args) => {
            println!("{}", riso_fx::seed_from_str(Some(&args.id)));
            Ok(())
        }
        Command::Config(args) => cmd_config(args),
    }
}

fn read_theme(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read theme '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse theme '{}'", path.display()))
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let theme = read_theme(&args.theme)?;
    let effects = riso_fx::EffectsConfig::from_theme(&theme);

    let img = image::open(&args.in_path)
        .with_context(|| format!("decode image '{}'", args.in_path.display()))?
        .to_rgba8();
    let canvas = riso_fx::Canvas::new(img.width(), img.height());
    let mut data = img.into_raw();

    let opts = riso_fx::PipelineOpts {
        threading: riso_fx::Threading {
            parallel: args.parallel,
            threads: args.threads,
        },
    };
    let report = riso_fx::apply_effect_pipeline_with_report(
        &mut data,
        canvas,
        effects.as_ref(),
        args.seed.as_deref(),
        &opts,
    )
    .with_context(|| format!("apply effects from '{}'", args.theme.display()))?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &data,
        canvas.width,
        canvas.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    if args.print_sha256 {
        println!("{:x}", Sha256::digest(&data));
    }
    eprintln!(
        "wrote {} (effects applied: {:?})",
        args.out.display(),
        report.applied
    );
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let theme = read_theme(&args.theme)?;
    let cfg = riso_fx::EffectsConfig::from_theme(&theme)
        .and_then(|effects| effects.risograph().map(riso_fx::RisographConfig::normalize))
        .unwrap_or_default();
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}
