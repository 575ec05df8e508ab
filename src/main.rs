//! `partsplit` refines the partitions of a dataset by one greedy split.
//!
//! **Usage:**
//! ```text
//! partsplit [OPTIONS] [DATASET INPUT OUTPUT]
//! ```
//! Without the three paths, they are read from one line of the standard
//! input, separated by whitespace.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use partsplit::prelude::*;


/// Replace the partition with the greatest weighted information gain
/// by the non-empty groups of its best ternary split.
#[derive(Parser)]
#[command(name = "partsplit", version, about)]
struct Args {
    /// The dataset file, the input partition file,
    /// and the output partition file, in this order.
    #[arg(value_name = "FILE", num_args = 0..=3)]
    files: Vec<PathBuf>,

    /// Write the gain of every (partition, feature) pair to a CSV file.
    #[arg(long, value_name = "PATH")]
    gains: Option<PathBuf>,

    /// Print the refinement report as JSON instead of the summary.
    #[arg(long)]
    json: bool,

    /// Do not print the prompt or the summary.
    /// The `--json` report is still printed.
    #[arg(long, short)]
    quiet: bool,
}


struct Files {
    dataset: PathBuf,
    input: PathBuf,
    output: PathBuf,
}


impl Files {
    fn from_paths(mut paths: Vec<PathBuf>) -> Result<Self> {
        if paths.len() != 3 {
            bail!(
                "expected 3 files (dataset, input partition, output partition), got {}",
                paths.len()
            );
        }
        let output = paths.remove(2);
        let input = paths.remove(1);
        let dataset = paths.remove(0);
        Ok(Self { dataset, input, output })
    }


    /// Parse one line of whitespace-separated paths.
    fn from_line(line: &str) -> Result<Self> {
        let paths = line.split_whitespace()
            .map(PathBuf::from)
            .collect();
        Self::from_paths(paths)
    }


    fn prompt<R: BufRead>(mut input: R, quiet: bool) -> Result<Self> {
        if !quiet {
            println!("Enter names of the files dataset input-partition output-partition");
            io::stdout().flush()?;
        }

        let mut line = String::new();
        input.read_line(&mut line)?;
        Self::from_line(&line)
    }
}


fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let files = if args.files.is_empty() {
        Files::prompt(io::stdin().lock(), args.quiet)?
    } else {
        Files::from_paths(args.files)?
    };

    let sample = SampleReader::new()
        .file(&files.dataset)
        .read()
        .with_context(|| {
            format!("failed to read the dataset {}", files.dataset.display())
        })?;
    let partitions = PartitionReader::new(&sample)
        .file(&files.input)
        .read()
        .with_context(|| {
            format!("failed to read the partitions {}", files.input.display())
        })?;

    let refiner = RefinerBuilder::new(&sample).build()?;
    let refinement = refiner.refine(&partitions)
        .context("failed to refine the partitions")?;

    refinement.partitions()
        .save(&files.output)
        .with_context(|| {
            format!("failed to write the partitions {}", files.output.display())
        })?;

    if let Some(path) = &args.gains {
        GainLogger::create(path)
            .and_then(|mut logger| logger.log(refinement.report()))
            .with_context(|| {
                format!("failed to write the gains {}", path.display())
            })?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(refinement.report())?);
    } else if !args.quiet {
        Summary::new(refinement.report(), sample.shape()).print();
    }

    Ok(())
}
