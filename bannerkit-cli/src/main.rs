use std::path::{Path, PathBuf};

use anyhow::Context as _;
use bannerkit::{
    Design, DocumentSource as _, FsSource, HtmlAdapter, RenderAdapter as _, ResolveConfig,
    Walker, resolve_many, source::unwrap_envelope,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bannerkit", version)]
struct Cli {
    /// Base url that relative media references are joined onto.
    #[arg(long, global = true, env = "BANNERKIT_ASSET_BASE_URL")]
    asset_base_url: Option<url::Url>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a document and print its render descriptors as JSON.
    Resolve(ResolveArgs),
    /// Resolve a document and write it as HTML.
    Html(HtmlArgs),
    /// Decode and validate a document, reporting skipped layers.
    Check(CheckArgs),
    /// Resolve several documents from a directory of `<id>.json` files in parallel.
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Input document JSON (bare design or `{"banner": ...}` envelope).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct HtmlArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,

    /// Write only the banner fragment instead of a full page.
    #[arg(long, default_value_t = false)]
    fragment: bool,

    /// Keep layers whose visibility flag is off.
    #[arg(long, default_value_t = false)]
    include_hidden: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Directory holding `<id>.json` documents.
    #[arg(long)]
    root: PathBuf,

    /// Document ids to resolve.
    #[arg(long = "id", required = true)]
    ids: Vec<String>,

    /// Directory the `<id>.json` descriptor files are written to.
    #[arg(long)]
    out_dir: PathBuf,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.json_logs);

    let config = match cli.asset_base_url {
        Some(base) => ResolveConfig::new().with_asset_base_url(base),
        None => ResolveConfig::new(),
    };

    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args, &config),
        Command::Html(args) => cmd_html(args, &config),
        Command::Check(args) => cmd_check(args, &config),
        Command::Batch(args) => cmd_batch(args, &config),
    }
}

fn init_logging(level: &str, json: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    if json {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
}

fn load_design(path: &Path) -> anyhow::Result<Design> {
    let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse json '{}'", path.display()))?;
    let design = Design::from_value(unwrap_envelope(value)?)
        .with_context(|| format!("decode design '{}'", path.display()))?;
    Ok(design)
}

fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_resolve(args: ResolveArgs, config: &ResolveConfig) -> anyhow::Result<()> {
    let design = load_design(&args.in_path)?;
    let sequence = Walker::resolve(&design, config)
        .with_context(|| format!("resolve '{}'", args.in_path.display()))?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&sequence)?
    } else {
        serde_json::to_string(&sequence)?
    };
    match &args.out {
        Some(out) => {
            write_output(out, &json)?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_html(args: HtmlArgs, config: &ResolveConfig) -> anyhow::Result<()> {
    let design = load_design(&args.in_path)?;
    let sequence = Walker::resolve(&design, config)
        .with_context(|| format!("resolve '{}'", args.in_path.display()))?;

    let adapter = HtmlAdapter {
        full_page: !args.fragment,
        include_hidden: args.include_hidden,
    };
    let html = adapter.render(&sequence)?;
    write_output(&args.out, &html)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_check(args: CheckArgs, config: &ResolveConfig) -> anyhow::Result<()> {
    let design = load_design(&args.in_path)?;
    let sequence = Walker::resolve(&design, config)
        .with_context(|| format!("resolve '{}'", args.in_path.display()))?;

    eprintln!(
        "ok: {} slide(s), {} element(s), {} warning(s)",
        sequence.design.slide_count,
        sequence.len(),
        sequence.warnings.len()
    );
    for warning in &sequence.warnings {
        eprintln!("  {}: {}", warning.path, warning.message);
    }
    Ok(())
}

fn cmd_batch(args: BatchArgs, config: &ResolveConfig) -> anyhow::Result<()> {
    if let Some(threads) = args.threads {
        rayon_threads(threads)?;
    }

    let source = FsSource::new(&args.root);
    let designs = args
        .ids
        .iter()
        .map(|id| source.load(id).with_context(|| format!("load '{id}'")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let results = resolve_many(&designs, config);
    let mut failed = 0usize;
    for (id, result) in args.ids.iter().zip(results) {
        match result {
            Ok(sequence) => {
                let out = args.out_dir.join(format!("{id}.json"));
                write_output(&out, &serde_json::to_string(&sequence)?)?;
                eprintln!("wrote {}", out.display());
            }
            Err(err) => {
                failed += 1;
                eprintln!("{id}: {err}");
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} document(s) failed to resolve", args.ids.len());
    }
    Ok(())
}

fn rayon_threads(threads: usize) -> anyhow::Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("configure rayon thread pool")
}
