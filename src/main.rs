use clap::{Parser, Subcommand};
use simple_folio::filter::{self, FilterCriteria, SortBy, TypeFilter};
use simple_folio::{config, generate, output, process, scan};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread::JoinHandle;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Static site generator for developer portfolios")]
#[command(long_about = "\
Static site generator for developer portfolios

Your filesystem is the data source. TOML files describe projects and career
milestones, markdown files become pages and TechLog posts, and screenshots
are ordered by numeric prefix.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── assets/                      # Copied to the output root (placeholder.svg, resume.pdf)
  ├── 010-about.md                 # Page (numbered = shown in nav)
  ├── 050-Blog.md                  # Link page (URL-only .md → external nav link)
  ├── featured/                    # Home carousel, one directory per slide
  │   └── 010-fillme/
  │       ├── project.toml
  │       ├── 001-login.png        # Screenshots, ordered by number
  │       └── 002-report.png
  ├── projects/                    # Side-project showcase
  │   └── 010-flowin-ledger.toml
  ├── career/                      # Timeline milestones, oldest first
  │   └── 010-bootcamp.toml
  └── techlog/                     # One post per stack
      └── 010-typescript.md

Contact email and chat link can be set per deployment with
SIMPLE_FOLIO_CONTACT_EMAIL and SIMPLE_FOLIO_CONTACT_CHAT.

Run 'simple-folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest, processed screenshots)
    #[arg(long, default_value = ".simple-folio-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Fingerprint and copy screenshots
    Process,
    /// Produce the final HTML site from the processed manifest
    Generate,
    /// Run the full pipeline: scan → process → generate
    Build,
    /// Validate content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Search side projects the way the showcase page does
    Search(SearchArgs),
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Case-insensitive text matched against title, summary and tags
    #[arg(long, default_value = "")]
    query: String,

    /// Project type (App, Web, Library, CLI, Design) or "all"
    #[arg(long = "type", default_value = "all")]
    project_type: TypeFilter,

    /// Required stack tag; repeat to require several
    #[arg(long = "stack")]
    stacks: Vec<String>,

    /// Sort order: recent or title (defaults to showcase.default_sort)
    #[arg(long)]
    sort: Option<SortBy>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Process => {
            let scan_manifest_path = cli.temp_dir.join("manifest.json");
            let manifest_content = std::fs::read_to_string(&scan_manifest_path)?;
            let input_manifest: serde_json::Value = serde_json::from_str(&manifest_content)?;
            let site_config: config::SiteConfig =
                serde_json::from_value(input_manifest.get("config").cloned().unwrap_or_default())?;
            init_thread_pool(&site_config.processing);
            run_process(&scan_manifest_path, &cli.source, &cli.temp_dir)?;
        }
        Command::Generate => {
            let processed_dir = cli.temp_dir.join("processed");
            let processed_manifest_path = processed_dir.join("manifest.json");
            generate::generate(
                &processed_manifest_path,
                &processed_dir,
                &cli.output,
                &cli.source,
            )?;
            let manifest_content = std::fs::read_to_string(&processed_manifest_path)?;
            let manifest: scan::Manifest = serde_json::from_str(&manifest_content)?;
            output::print_generate_output(&manifest);
        }
        Command::Build => {
            std::fs::create_dir_all(&cli.temp_dir)?;

            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let scan_manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&scan_manifest_path, json)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Processing screenshots");
            init_thread_pool(&manifest.config.processing);
            let processed = run_process(&scan_manifest_path, &cli.source, &cli.temp_dir)?;

            println!("==> Stage 3: Generating HTML → {}", cli.output.display());
            let processed_dir = cli.temp_dir.join("processed");
            generate::generate_site(&processed, &processed_dir, &cli.output, &cli.source)?;
            output::print_generate_output(&processed);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Search(args) => {
            let manifest = scan::scan(&cli.source)?;
            // Every --stack is required, so a repeated tag is still one tag
            let criteria = FilterCriteria {
                query: args.query,
                project_type: args.project_type,
                stacks: args.stacks.into_iter().collect(),
                sort_by: args.sort.unwrap_or(manifest.config.showcase.default_sort),
            };
            let results = filter::showcase(&manifest.projects, &criteria);
            output::print_search_results(&results, &criteria);
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run the process stage with a printer thread and write the processed
/// manifest next to the screenshots.
fn run_process(
    scan_manifest_path: &Path,
    source: &Path,
    temp_dir: &Path,
) -> Result<scan::Manifest, Box<dyn std::error::Error>> {
    let processed_dir = temp_dir.join("processed");
    let (tx, rx) = mpsc::channel();
    let printer: JoinHandle<()> = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_process_event(&event) {
                println!("{}", line);
            }
        }
    });
    let manifest = process::process(scan_manifest_path, source, &processed_dir, Some(tx))?;
    printer
        .join()
        .map_err(|_| "progress printer thread panicked")?;
    let output_manifest = processed_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(&output_manifest, &json)?;
    Ok(manifest)
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
