mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use retrolist_eval::{EvaluatorSet, ScoredRecord, Summary, SystemClock, summarize};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use common::resolve_output_dir;
use logic::{
    convert_capture, load_dataset, run_evaluations, select_evaluators, write_artifacts,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary with colour
    Console,
    /// Markdown tables
    Markdown,
    /// The summary as pretty JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "retrolist-tester", version = "0.1.0")]
#[command(about = "Scores Retro Game List behaviour logs and aggregates the results")]
struct Args {
    /// JSONL dataset of logged interactions
    #[arg(long, default_value = "evaluation/evaluation_data.jsonl")]
    data: PathBuf,

    /// Directory for the results and summary files (defaults to the dataset's directory)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Evaluators to run (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    evaluators: String,

    /// List all available evaluators and exit
    #[arg(long)]
    list_evaluators: bool,

    /// Convert a captured responses.json into the dataset at --data before evaluating
    #[arg(long)]
    from_responses: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print every metric's score and reason per record
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("{} {err:#}", "❌ Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if maybe_list_evaluators(args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let evaluators = select_evaluators(&args.evaluators)?;

    if let Some(capture) = &args.from_responses {
        let converted = convert_capture(capture, &args.data)?;
        println!(
            "🔄 Converted {converted} captured responses into {}",
            args.data.display()
        );
    }

    println!("📂 Loading evaluation data from: {}", args.data.display());
    let records = load_dataset(&args.data)?;
    println!("✓ Loaded {} test cases", records.len());
    println!();

    let results = run_evaluations(&evaluators, &records, args.verbose);
    let summary = summarize(&results, &SystemClock);

    save_artifacts(args, &results, &summary)?;
    write_reports(args, &summary, start_time)?;

    println!("{}", "✨ Evaluation complete!".bright_green().bold());
    Ok(())
}

fn maybe_list_evaluators(args: &Args) -> Result<bool> {
    if !args.list_evaluators {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available evaluators:")?;
    for evaluator in EvaluatorSet::builtin().iter() {
        let query_types: Vec<&str> = evaluator
            .recognized_types()
            .iter()
            .map(|query_type| query_type.as_str())
            .collect();
        writeln!(
            output_target.writer(),
            "  {:25} - {} [{}]",
            evaluator.name(),
            evaluator.metric().description(),
            query_types.join(", ")
        )?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🎮 Retro Game List Evaluator".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn save_artifacts(args: &Args, results: &[ScoredRecord], summary: &Summary) -> Result<()> {
    let output_dir = resolve_output_dir(&args.data, args.output_dir.as_deref());
    let paths = write_artifacts(&output_dir, results, summary)?;
    println!();
    println!("💾 Detailed results saved to: {}", paths.results.display());
    println!("💾 Summary saved to: {}", paths.summary.display());
    Ok(())
}

fn write_reports(args: &Args, summary: &Summary, start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => logic::reports::generate_json_report(&mut output_target, summary)?,
        ReportFormat::Markdown => {
            logic::reports::generate_markdown_report(&mut output_target, summary)?;
        }
        ReportFormat::Console => {
            logic::reports::generate_console_report(&mut output_target, summary)?;
            let duration = start_time.elapsed();
            writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
