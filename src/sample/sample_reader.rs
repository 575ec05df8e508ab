use std::path::Path;
use std::io;

use crate::Result;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a dataset file to [`Sample`].
/// By default the file starts with the header line `m n`.
/// # Example
/// The following code is a simple example to read a dataset file.
/// ```no_run
/// use partsplit::SampleReader;
/// let filename = "/path/to/dataset.txt";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
}


impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: true,
        }
    }


    /// Set the flag whether the file has the `m n` header row or not.
    /// Default is `true.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `partsplit::Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .ok_or_else(|| io::Error::new(
                io::ErrorKind::InvalidInput,
                "the dataset file is not set",
            ))?;
        Sample::from_file(file, self.has_header)
    }
}
