use anyhow::anyhow;
use classify::{Pipeline, PipelineConfig, load_labels, top_k};
use clap::Parser;
use infer::{IoBinding, PixelConversion};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

/// Classify one JPEG image with a frozen TensorFlow graph.
///
/// The image is not resized; its dimensions must match the graph input.
#[derive(Parser, Debug)]
#[command(name = "label_image", version)]
struct Args {
    /// Frozen graph (serialized GraphDef)
    graph: PathBuf,
    /// Label file, one class name per line
    labels: PathBuf,
    /// JPEG image to classify
    image: PathBuf,

    /// Input operation, `name` or `name:index`
    #[arg(long, default_value = classify::config::DEFAULT_INPUT)]
    input: IoBinding,
    /// Output operation(s); the first one is reported as class scores
    #[arg(long = "output", default_value = classify::config::DEFAULT_OUTPUT)]
    outputs: Vec<IoBinding>,

    /// Subtract from every sample (requires --std)
    #[arg(long, requires = "std")]
    mean: Option<f32>,
    /// Divide every sample by this after subtracting --mean
    #[arg(long, requires = "mean")]
    std: Option<f32>,

    /// Number of predictions to print
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Write logs to daily files in this directory instead of stdout
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Log debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    match &args.log_dir {
        Some(dir) => base::init_file_logger(dir, level)
            .map_err(|e| anyhow!("error at step \"logging\": {dir:?}: {e}")),
        None => {
            base::init_stdout_logger(level);
            Ok(())
        }
    }
}

fn config(args: &Args) -> anyhow::Result<PipelineConfig> {
    let conversion = match (args.mean, args.std) {
        (Some(mean), Some(std)) => PixelConversion::normalize(mean, std)
            .map_err(|e| anyhow!("error at step \"tensor\": {e}"))?,
        _ => PixelConversion::Cast,
    };
    Ok(PipelineConfig {
        input: args.input.clone(),
        outputs: args.outputs.clone(),
        conversion,
    })
}

fn run(args: Args) -> anyhow::Result<()> {
    init_logging(&args)?;
    let mut pipeline = Pipeline::new(config(&args)?);

    let classification = pipeline.run(&args.graph, &args.image)?;
    let labels = load_labels(&args.labels)?;

    let scores = classification.scores();
    if scores.len() != labels.len() {
        log::warn!(
            "{} scores but {} labels in {:?}",
            scores.len(),
            labels.len(),
            args.labels
        );
    }
    for prediction in top_k(scores, &labels, args.top) {
        println!(
            "{} ({}): {:.5}",
            prediction.label, prediction.index, prediction.score
        );
    }
    Ok(())
}

// clap's report on one line, without the usage block.
fn argument_error(err: &clap::Error) -> String {
    let message = err
        .to_string()
        .lines()
        .map(str::trim)
        .take_while(|line| !line.starts_with("Usage:"))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "error at step \"arguments\": {}",
        message.trim_start_matches("error: ")
    )
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if !err.use_stderr() => {
            // --help and --version
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{}", argument_error(&err));
            return ExitCode::FAILURE;
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::logger().flush();
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
