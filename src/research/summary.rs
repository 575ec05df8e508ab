use colored::Colorize;

use crate::constants::{
    FULL_WIDTH,
    STAT_WIDTH,
    PRINT_WIDTH,
    PRINT_PRECISION,
};
use crate::sample::Shape;
use crate::refiner::RefineReport;


/// Struct `Summary` renders what a refinement did:
/// the dataset shape, the replaced partition, the feature it was split on,
/// the successors, and the evaluation of every partition.
pub struct Summary<'a> {
    report: &'a RefineReport,
    shape: Shape,
}


impl<'a> Summary<'a> {
    /// Create a new instance of `Summary`.
    pub fn new(report: &'a RefineReport, shape: Shape) -> Self {
        Self { report, shape }
    }


    /// Print the summary to the standard output.
    pub fn print(&self) {
        println!("{}", self.render());
    }


    /// Returns the summary as a string.
    pub fn render(&self) -> String {
        let mut lines = vec![self.stats(), self.table_header()];
        lines.extend(self.rows());
        lines.join("\n")
    }


    fn stats(&self) -> String {
        let report = self.report;
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "SUMMARY".bold(), "",
        );

        let info = [
            ("Position", (report.position() + 1).to_string()),
            ("Feature", report.feature().to_string()),
            ("Gain", format!("{:.PRINT_PRECISION$}", report.gain())),
            ("Score", format!("{:.PRINT_PRECISION$}", report.score())),
        ];
        let info = info.into_iter()
            .map(|(key, val)| {
                format!(
                    "    + {:<STAT_WIDTH$}\t{:>width$}",
                    key,
                    val.bold().yellow(),
                    width = STAT_WIDTH - 8
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {info}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n",
            "Examples (m)".bold(),
            self.shape.n_examples().to_string().bold().green(),
            "Columns (n)".bold(),
            self.shape.n_columns().to_string().bold().green(),
            "Partitions".bold(),
            report.candidates().len().to_string().bold().green(),
            "Replaced".bold(),
            report.replaced().bold().green(),
            "Successors".bold(),
            report.successors().join(", ").bold().green(),
            "".bold(),
        )
    }


    fn table_header(&self) -> String {
        format!(
            "      {:>PRINT_WIDTH$}\t{:>PRINT_WIDTH$}\t{:>PRINT_WIDTH$}\t{:>PRINT_WIDTH$}\t{:>PRINT_WIDTH$}\n",
            "PART.".bold().red(),
            "SIZE".bold().blue(),
            "FEATURE".bold().green(),
            "GAIN".bold().yellow(),
            "SCORE".bold().cyan(),
        )
    }


    fn rows(&self) -> Vec<String> {
        let position = self.report.position();
        self.report.candidates()
            .iter()
            .enumerate()
            .map(|(i, candidate)| {
                let tag = if i == position {
                    "[FIN]".bold().bright_green()
                } else {
                    "[LOG]".bold().magenta()
                };
                format!(
                    "{} {}\t{}\t{}\t{}\t{}",
                    tag,
                    format!("{:>PRINT_WIDTH$}", candidate.name()).red(),
                    format!("{:>PRINT_WIDTH$}", candidate.size()).blue(),
                    format!("{:>PRINT_WIDTH$}", candidate.feature()).green(),
                    format!("{:>PRINT_WIDTH$.PRINT_PRECISION$}", candidate.gain()).yellow(),
                    format!("{:>PRINT_WIDTH$.PRINT_PRECISION$}", candidate.score()).cyan(),
                )
            })
            .collect()
    }
}
