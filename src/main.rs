// Command-line entry point for StackScope.

use clap::Parser;
use stackscope::application::SynthesizeUsecase;
use stackscope::infrastructure::{JsonAstLoader, JsonTraceExporter};
use stackscope::ports::timeline_exporter::TimelineExporter;
use stackscope::ports::TraceExporter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// AST JSON file (bare node or parse-backend envelope)
    #[arg(short, long)]
    input: String,

    /// Starting argument value for the simulated recursion (1-20)
    #[arg(short, long, default_value_t = 5)]
    start: i64,

    /// Maximum simulated recursion depth (1-20)
    #[arg(short = 'm', long, default_value_t = 10)]
    max_depth: u32,

    /// Output file path
    #[arg(short, long)]
    output: String,

    /// Output format (json, text)
    #[arg(short, long, default_value = "json")]
    format: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let exporter: &dyn TraceExporter = match cli.format.as_str() {
        "text" => &TimelineExporter,
        "json" => &JsonTraceExporter,
        other => anyhow::bail!("Unknown format: {} (expected json or text)", other),
    };

    let usecase = SynthesizeUsecase {
        source: &JsonAstLoader,
        exporter,
    };

    let report = usecase.run(&cli.input, cli.start, cli.max_depth, &cli.output)?;

    match &report.recursive_function {
        Some(f) => println!(
            "[StackScope] Simulated {}({}) from line {}: {} events written to {} (format: {})",
            f.name,
            f.parameters.join(", "),
            f.line,
            report.trace.len(),
            cli.output,
            cli.format
        ),
        None => println!(
            "[StackScope] No self-recursive function found: {} events written to {} (format: {})",
            report.trace.len(),
            cli.output,
            cli.format
        ),
    }

    Ok(())
}
