use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::{Error, Result};
use crate::log_targets;
use super::sample_struct::{Sample, parse_integer};
use super::partition::{Partition, PartitionSet};


/// A struct that returns [`PartitionSet`].
/// Each non-blank line of a partition file has the form
/// ```txt
/// name id_1 id_2 ... id_k
/// ```
/// where `id_j` is the 1-based id of an example of the given [`Sample`].
/// # Example
/// ```no_run
/// use partsplit::{PartitionReader, SampleReader};
/// let sample = SampleReader::new()
///     .file("/path/to/dataset.txt")
///     .read()
///     .unwrap();
/// let partitions = PartitionReader::new(&sample)
///     .file("/path/to/partition.txt")
///     .read()
///     .unwrap();
/// ```
pub struct PartitionReader<'a, P> {
    sample: &'a Sample,
    file: Option<P>,
}


impl<'a, P> PartitionReader<'a, P> {
    /// Construct a new instance of [`PartitionReader`]
    /// that resolves ids against `sample`.
    pub fn new(sample: &'a Sample) -> Self {
        Self { sample, file: None }
    }
}


impl<'a, P> PartitionReader<'a, P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file and returns the partitions in file order.
    /// This method consumes `self`.
    pub fn read(self) -> Result<PartitionSet<'a>> {
        let file = self.file
            .ok_or_else(|| io::Error::new(
                io::ErrorKind::InvalidInput,
                "the partition file is not set",
            ))?;
        let file = File::open(file)?;
        read_partitions(self.sample, BufReader::new(file))
    }
}


/// Reads partitions from `reader`, resolving ids against `sample`.
pub(crate) fn read_partitions<'a, R>(sample: &'a Sample, reader: R)
    -> Result<PartitionSet<'a>>
    where R: BufRead,
{
    let mut partitions = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = i + 1;
        let mut words = line.split_whitespace();

        // The first word is the partition name.
        let Some(name) = words.next() else { continue; };

        let examples = words
            .map(|word| {
                let id = parse_integer(word, lineno)?;
                usize::try_from(id).ok()
                    .and_then(|id| sample.example(id))
                    .ok_or(Error::UnknownExample {
                        line: lineno,
                        id: id.max(0) as usize,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        partitions.push(Partition::new(name, examples));
    }

    log::debug!(
        target: log_targets::READER,
        "read {} partitions",
        partitions.len(),
    );

    Ok(PartitionSet::new(partitions))
}


impl<'a> PartitionSet<'a> {
    /// Reads partitions from `reader`,
    /// resolving ids against `sample`.
    /// See [`PartitionReader`] for the format.
    pub fn from_reader<R: BufRead>(sample: &'a Sample, reader: R)
        -> Result<Self>
    {
        read_partitions(sample, reader)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Sample {
        let text = "4 3\n1 1 1\n1 0 0\n0 1 0\n0 0 1\n";
        Sample::from_reader(text.as_bytes(), true).unwrap()
    }

    #[test]
    fn test_read() {
        let sample = sample();
        let text = "A 1 2\nB 4 3\n\n";
        let set = PartitionSet::from_reader(&sample, text.as_bytes()).unwrap();
        assert_eq!(set.names(), vec!["A", "B"]);
        assert_eq!(set.example_ids(), vec![vec![1, 2], vec![4, 3]]);
        assert_eq!(set.get(1).unwrap().examples()[0].label(), 1);
    }

    #[test]
    fn test_name_only_line_is_empty_partition() {
        let sample = sample();
        let set = PartitionSet::from_reader(&sample, "C\n".as_bytes())
            .unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.get(0).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_example() {
        let sample = sample();
        let err = PartitionSet::from_reader(&sample, "A 1 5\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownExample { line: 1, id: 5 }));

        let err = PartitionSet::from_reader(&sample, "A 1\nB 0\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownExample { line: 2, id: 0 }));
    }

    #[test]
    fn test_not_an_id() {
        let sample = sample();
        let err = PartitionSet::from_reader(&sample, "A one\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }
}
