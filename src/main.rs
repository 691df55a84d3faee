use clap::Parser;
use diet_image::batch::{self, BatchError};
use diet_image::confirm::TerminalPrompter;
use diet_image::imaging::RustBackend;
use diet_image::output::{self, ProgressFormatter};
use diet_image::types::{BatchResult, ResizeRequest};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let hash = env!("DIET_IMAGE_GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{} ({hash})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "diet-image")]
#[command(about = "Resize an image, or every image in a folder")]
#[command(long_about = "\
Resize an image, or every image in a folder

Results go to <input-dir>/min unless --out is given. Hidden files and
subfolders are skipped. Existing results are never overwritten without
asking.

Give --width, --height, or both:
  --width 200              200px wide, height follows the aspect ratio
  --height 200             200px tall, width follows the aspect ratio
  --width 200 --height 200 cover 200x200, then center-crop
  (neither)                re-encode at the original size")]
#[command(version = version_string())]
struct Cli {
    /// Image file or folder of images
    input: PathBuf,

    /// Target width in pixels
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Target height in pixels
    #[arg(short = 'H', long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Prepended to every output filename
    #[arg(short, long, default_value = "")]
    prefix: String,

    /// Output directory [default: <input-dir>/min]
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Answer yes to every overwrite / continue prompt
    #[arg(short, long)]
    yes: bool,

    /// Maximum number of images resized at once [default: CPU count]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,

    /// Print the result as JSON after the summary
    #[arg(long)]
    json: bool,

    /// Log per-file diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn request(&self) -> ResizeRequest {
        ResizeRequest {
            input_path: self.input.clone(),
            width: self.width,
            height: self.height,
            prefix: self.prefix.clone(),
            out_dir: self.out.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    init_thread_pool(cli.jobs);

    let prompter = TerminalPrompter::new(cli.yes);
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        let mut progress = ProgressFormatter::new();
        for event in rx {
            for line in progress.format(&event) {
                println!("{}", line);
            }
        }
    });

    let result = batch::run(&cli.request(), &RustBackend::new(), &prompter, Some(tx));
    if printer.join().is_err() {
        tracing::warn!("progress printer panicked");
    }

    match result {
        Ok(result) => report(&result, cli.json),
        Err(e) => fail(&e),
    }
}

fn report(result: &BatchResult, json: bool) -> ExitCode {
    output::print_summary(result);
    if json {
        match serde_json::to_string_pretty(result) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                output::print_error(&format!("cannot serialize result: {e}"));
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

/// User-correctable stops exit 0; anything else is a real failure.
fn fail(error: &BatchError) -> ExitCode {
    output::print_error(&error.to_string());
    if error.is_graceful() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Diagnostics go to stderr so they never mix with the summary or `--json`.
///
/// `RUST_LOG` overrides the level picked by `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "diet_image=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Cap the rayon pool when `--jobs` is given; the default is one thread per core.
fn init_thread_pool(jobs: Option<u32>) {
    if let Some(jobs) = jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs as usize)
            .build_global()
            .ok();
    }
}
