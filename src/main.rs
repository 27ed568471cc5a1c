mod sample_reader;
mod visualizer;

use std::path::PathBuf;
use std::process;

use clap::Parser;

/// Plots an iteration/time sample file as a line chart.
#[derive(Parser, Debug)]
#[command(name = "iteration-plot", version, about)]
struct Cli {
    /// Sample file: one "<iteration> <time>" integer pair per line
    #[arg(default_value = "iteration_x_time.txt")]
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let samples = match sample_reader::read(&cli.input) {
        Ok(samples) => samples,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if let Err(e) = visualizer::render_plot(samples) {
        eprintln!("{e}");
        process::exit(1);
    }
}
