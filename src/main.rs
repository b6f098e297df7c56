use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use arrow::util::pretty::pretty_format_batches;
use clap::{Parser, ValueEnum};

use datablock::{load_all_blocks, load_query, status_message, Block, BlockQuery, ExtractionPlan};

#[derive(Parser)]
#[command(name = "datablock")]
#[command(about = "Print a numeric data block found under a header line of a text file")]
struct Cli {
    /// Text file to read
    file: PathBuf,

    /// Text identifying the header line of the block
    marker: Option<String>,

    /// Which occurrence of the marker to use (1-based)
    #[arg(short, long, default_value_t = 1)]
    instance: usize,

    /// Lines to skip between the header and the first data row
    #[arg(short, long, default_value_t = 0)]
    skip: usize,

    /// Print every block introduced by the marker
    #[arg(long, conflicts_with = "instance")]
    all: bool,

    /// Path to an extraction plan JSON (replaces MARKER)
    #[arg(short, long, conflicts_with_all = ["marker", "all"])]
    plan: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Arrow pretty table (padding shown as empty cells)
    Table,
    /// JSON object with `columns` and `row_lengths`
    Json,
    /// Tab-separated rows
    Tsv,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let named: Vec<(String, Option<Block>)> = if let Some(plan_path) = &cli.plan {
        let plan = ExtractionPlan::from_path(plan_path)?;
        plan.run(&cli.file)
            .with_context(|| format!("running plan {}", plan_path.display()))?
    } else {
        let Some(marker) = cli.marker.clone() else {
            bail!("either MARKER or --plan is required");
        };
        if cli.all {
            load_all_blocks(&cli.file, &marker, cli.skip)?
                .into_iter()
                .enumerate()
                .map(|(i, b)| (format!("{marker} #{}", i + 1), Some(b)))
                .collect()
        } else {
            let query = BlockQuery::new(marker.clone())
                .instance(cli.instance)
                .skip(cli.skip);
            vec![(marker, load_query(&cli.file, &query)?)]
        }
    };

    if named.is_empty() {
        eprintln!("{}", status_message(None));
    }

    let show_names = named.len() > 1 || cli.plan.is_some() || cli.all;
    for (name, block) in &named {
        eprintln!("{}", status_message(block.as_ref()));
        let Some(block) = block else {
            continue;
        };
        if show_names {
            println!("# {name}");
        }
        print_block(block, cli.format)?;
    }

    Ok(())
}

fn print_block(block: &Block, format: Format) -> Result<()> {
    match format {
        Format::Table => {
            let batch = block.to_record_batch()?;
            let table = pretty_format_batches(&[batch]).context("formatting table")?;
            println!("{table}");
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(block)?);
        }
        Format::Tsv => print!("{block}"),
    }
    Ok(())
}
