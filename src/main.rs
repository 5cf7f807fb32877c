//! # covgraph
//!
//! `covgraph` writes a Graphviz DOT document visualizing the exact-cover
//! constraint matrix of a Sudoku-like puzzle to standard output.
//!
//! Every candidate placement (row, column, digit) covers one column in each
//! of the four constraint families (cell, row, column, box). The generated
//! document contains one pinned, colored node per covered column; rendering
//! it with a layout engine that honors fixed positions (e.g. `neato -n`)
//! produces a picture of the matrix.
//!
//! ## Usage
//!
//! ```sh
//! # Compact layout: one node per candidate and constraint family.
//! covgraph > matrix.dot
//!
//! # Strip layout: pad every non-covered column with muted nodes.
//! covgraph --inactive-cells > matrix.dot
//!
//! # Write to a file and print generation statistics to stderr.
//! covgraph -o matrix.dot --stats
//!
//! # Generate shell completion scripts.
//! covgraph completions bash
//! ```
//!
//! The puzzle size is fixed at compile time via the `D` constant below;
//! the library itself is generic over [`GridParameters`].

use clap::{Args, CommandFactory, Parser, Subcommand};
use covgraph::matrix::GridParameters;
use covgraph::matrix::graph::MatrixGraphBuilder;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tikv_jemalloc_ctl::{epoch, stats};

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// figures of the `--stats` table.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Box dimension of the rendered puzzle; the grid dimension is `D²`.
const D: usize = 2;

/// Defines the command-line interface for the generator.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "covgraph",
    version,
    about = "Renders the Sudoku exact-cover constraint matrix as Graphviz DOT"
)]
struct Cli {
    /// Specifies the subcommand to execute.
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Options for document generation.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options controlling the generated document.
#[derive(Args, Debug, Default)]
struct CommonOptions {
    /// Emit a full strip of nodes per candidate and constraint family,
    /// padding non-covered columns with muted filler nodes.
    #[arg(short, long, default_value_t = false)]
    inactive_cells: bool,

    /// Write the document to a file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print generation statistics to standard error.
    #[arg(short, long, default_value_t = false)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = generate(&cli.common) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Builds the document and writes it to the requested destination.
fn generate(common: &CommonOptions) -> Result<(), String> {
    epoch::advance().unwrap();
    let time = std::time::Instant::now();

    let builder = MatrixGraphBuilder::new(GridParameters::new(D), common.inactive_cells);
    let doc = builder.build();

    let elapsed = time.elapsed();

    match &common.output {
        Some(path) => {
            std::fs::write(path, &doc)
                .map_err(|e| format!("Unable to write {}: {e}", path.display()))?;
        }
        None => {
            std::io::stdout()
                .lock()
                .write_all(doc.as_bytes())
                .map_err(|e| format!("Unable to write to stdout: {e}"))?;
        }
    }

    if common.stats {
        print_stats(builder, doc.len(), elapsed);
    }

    Ok(())
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    eprintln!("|  {label:<28} {value:>18}  |");
}

/// Prints a summary of the generated document and resource usage.
fn print_stats(builder: MatrixGraphBuilder, bytes: usize, elapsed: Duration) {
    // Advance epoch so the jemalloc counters reflect the generation phase.
    epoch::advance().unwrap();
    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();

    #[allow(clippy::cast_precision_loss)]
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    #[allow(clippy::cast_precision_loss)]
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    let params = builder.params();

    eprintln!("\n======================[ Generation Statistics ]======================");
    stat_line("Box dimension", params.box_dim());
    stat_line("Grid dimension", params.grid_dim());
    stat_line("Candidates", params.candidate_count());
    stat_line("Matrix columns", params.column_count());
    stat_line("Node records", builder.node_count());
    stat_line("Document bytes", bytes);
    stat_line(
        "Generation time (s)",
        format!("{:.3}", elapsed.as_secs_f64()),
    );
    stat_line("Memory usage (MiB)", format!("{allocated_mib:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident_mib:.2}"));
    eprintln!("======================================================================");
}
