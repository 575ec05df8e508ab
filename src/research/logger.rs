use crate::Result;
use crate::refiner::RefineReport;

use std::fs::File;
use std::io::prelude::*;
use std::io::BufWriter;
use std::path::Path;

const HEADER: &str = "Partition,Feature,Gain,Score\n";


/// Struct `GainLogger` writes, for every partition a refinement evaluated
/// and every feature, one CSV row `Partition,Feature,Gain,Score`
/// where `Score = (|partition| / m) * Gain`.
pub struct GainLogger<W> {
    writer: W,
    header_written: bool,
}


impl GainLogger<BufWriter<File>> {
    /// Create a logger that writes to the file `filename`,
    /// replacing its content.
    pub fn create<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let file = File::create(filename)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}


impl<W: Write> GainLogger<W> {
    /// Create a new instance of `GainLogger`.
    pub fn new(writer: W) -> Self {
        Self { writer, header_written: false }
    }


    /// Write the rows of `report`.
    /// The header is written before the first row.
    pub fn log(&mut self, report: &RefineReport) -> Result<()> {
        if !self.header_written {
            self.writer.write_all(HEADER.as_bytes())?;
            self.header_written = true;
        }

        for candidate in report.candidates() {
            let name = candidate.name();
            for (j, &gain) in candidate.gains().iter().enumerate() {
                let feature = j + 1;
                let score = candidate.weight() * gain;
                let line = format!("{name},{feature},{gain},{score}\n");
                self.writer.write_all(line.as_bytes())?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }


    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
