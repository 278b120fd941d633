//! fraction-distance CLI - Fraction Distance Visualizer
//!
//! Compares candidate fractions against a target value and renders both on a
//! terminal number line.
//!
//! Usage:
//!   fraction-distance --target 2/5 --candidates "1/3, 3/8, 1/4"
//!   fraction-distance            (interactive prompt loop)

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};

use fraction_distance::config::{self, CONFIG_FILE_NAME, ViewSettings};
use fraction_distance::{
    ComparisonReport, EvaluationError, ViewMode, compare, compute_view_extents,
    render_number_line,
};

/// fraction-distance - compare your estimation against a target fraction
#[derive(Parser, Debug)]
#[command(name = "fraction-distance")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target fraction, e.g. 2/5
    #[arg(short, long)]
    target: Option<String>,

    /// Comma-separated candidate fractions, e.g. "1/3, 3/8, 1/4"
    #[arg(short, long)]
    candidates: Option<String>,

    /// Which number-line view(s) to render
    #[arg(long, value_enum, default_value_t = ModeArg::Both)]
    mode: ModeArg,

    /// Config file path (default: fraction-distance.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Fixed,
    Auto,
    Both,
}

impl ModeArg {
    fn modes(self) -> &'static [ViewMode] {
        match self {
            ModeArg::Fixed => &[ViewMode::FixedWidth],
            ModeArg::Auto => &[ViewMode::AutoFit],
            ModeArg::Both => &[ViewMode::FixedWidth, ViewMode::AutoFit],
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match (cli.target, cli.candidates) {
        (Some(target), Some(candidates)) => {
            if let Err(e) = run_once(&target, &candidates, cli.mode.modes(), &settings) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        (None, None) => run_interactive(cli.mode.modes(), &settings),
        _ => {
            eprintln!("Error: --target and --candidates must be given together");
            process::exit(2);
        }
    }
}

fn load_settings(path: Option<&Path>) -> Result<ViewSettings, config::ConfigError> {
    match path {
        Some(path) => config::load_settings(path),
        None => {
            let default_path = Path::new(CONFIG_FILE_NAME);
            if default_path.exists() {
                config::load_settings(default_path)
            } else {
                Ok(ViewSettings::default())
            }
        }
    }
}

fn run_once(
    target: &str,
    candidates: &str,
    modes: &[ViewMode],
    settings: &ViewSettings,
) -> Result<(), EvaluationError> {
    let report = compare(target, candidates)?;
    print_report(&report, modes, settings);
    Ok(())
}

/// Prompt loop: one full, independent re-evaluation per submission. An empty
/// target line (or EOF) exits.
fn run_interactive(modes: &[ViewMode], settings: &ViewSettings) {
    println!("Fraction Distance Visualizer");
    println!("Use this to compare your estimation against the target value.");
    println!("Press Enter on an empty target to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        let Some(target) = prompt(&mut lines, "Target fraction (e.g. 2/5): ") else {
            break;
        };
        if target.trim().is_empty() {
            break;
        }
        let Some(candidates) = prompt(&mut lines, "Candidate fractions (comma separated): ")
        else {
            break;
        };

        match compare(&target, &candidates) {
            Ok(report) => print_report(&report, modes, settings),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, text: &str) -> Option<String> {
    print!("{}", text);
    io::stdout().flush().ok()?;
    lines.next()?.ok()
}

fn print_report(report: &ComparisonReport, modes: &[ViewMode], settings: &ViewSettings) {
    println!("Closest estimate: {}", report.closest().label);
    println!("Distance: {:.6}", report.evaluation.closest_distance());

    let extents = compute_view_extents(
        &report.plotted_values(),
        settings.padding,
        settings.min_width,
    );
    for mode in modes {
        println!();
        print!(
            "{}",
            render_number_line(
                &report.candidates,
                &report.target,
                extents.for_mode(*mode),
                *mode,
                settings.axis_width,
            )
        );
    }
}
