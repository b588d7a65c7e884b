mod audit;
mod reports;
mod scenario;
mod storage;
mod tester;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use keyshop_core::{Catalog, format_price};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;

use audit::{audit_file, describe};
use scenario::{all_scenario_keys, get_scenario, list_scenarios};
use tester::{CartTester, ScenarioResult};
use util::split_csv;

#[derive(Debug, Parser)]
#[command(name = "keyshop-tester", version)]
#[command(about = "Runs cart scenarios against keyshop-core and audits saved carts")]
struct Args {
    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Number of iterations per scenario
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Audit a saved cart slot file and exit
    #[arg(long, value_name = "FILE")]
    audit: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    if let Some(path) = args.audit.as_deref() {
        if !run_audit(&args, path)? {
            std::process::exit(1);
        }
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let results = run_cart_scenarios(&args, &scenarios);

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:25} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🛒 Keyshop Cart Tester".bright_cyan().bold());
    println!("{}", "======================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for key in all_scenario_keys() {
            if !scenarios.contains(&key) {
                scenarios.push(key);
            }
        }
    }
    scenarios
}

fn run_cart_scenarios(args: &Args, scenarios: &[String]) -> Vec<ScenarioResult> {
    println!("{}", "🧠 Running Cart Scenarios".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let tester = CartTester::new(Catalog::builtin(), args.verbose);
    let mut results = Vec::new();
    for scenario_name in scenarios {
        if let Some(scenario) = get_scenario(scenario_name) {
            results.push(tester.run_scenario(&scenario, args.iterations));
        } else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
        }
    }
    results
}

/// Print what a saved cart file decodes to. Returns whether it was clean.
fn run_audit(args: &Args, path: &Path) -> Result<bool> {
    let summary = audit_file(path)?;
    let mut output_target = OutputTarget::new(args.output.clone())?;
    let out = output_target.writer();

    writeln!(out, "Cart audit: {}", summary.path.display())?;
    writeln!(out, "  Status: {}", describe(&summary.report))?;
    for line in &summary.lines {
        writeln!(
            out,
            "  {:30} {:>4} x {:>10} = {}",
            format!("{} / {}", line.game_name, line.pass_title),
            line.quantity,
            line.pass_price,
            format_price(line.line_total())
        )?;
    }
    writeln!(out, "  Items: {}", summary.item_count())?;
    writeln!(out, "  Total: {}", format_price(summary.total()))?;
    output_target.flush_inner()?;

    if !summary.is_clean() {
        log::warn!("{} has malformed entries", path.display());
    }
    Ok(summary.is_clean())
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => {
            if results.is_empty() {
                writeln!(&mut output_target, "[]")?;
            } else {
                reports::generate_json_report(&mut output_target, results)?;
            }
        }
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Keyshop Cart Scenario Results\n\n_No scenarios executed._"
                )?;
            } else {
                reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No cart scenarios executed.")?;
            } else {
                reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
        }
    }

    let duration = start_time.elapsed();
    writeln!(&mut output_target)?;
    writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
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
