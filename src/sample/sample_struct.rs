use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::{Error, Result};
use crate::log_targets;
use super::example::Example;


/// The pair `(m, n)` of a dataset.
/// `m` is the number of examples and
/// `n` is the number of columns of a raw row (features and the label).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    n_examples: usize,
    n_columns: usize,
}


impl Shape {
    /// Construct a new `Shape` from `m` and `n`.
    pub fn new(n_examples: usize, n_columns: usize) -> Self {
        Self { n_examples, n_columns }
    }


    /// Returns `m`.
    #[inline(always)]
    pub fn n_examples(&self) -> usize {
        self.n_examples
    }


    /// Returns `n`.
    #[inline(always)]
    pub fn n_columns(&self) -> usize {
        self.n_columns
    }


    /// Returns the number of feature columns, `n - 1`.
    #[inline(always)]
    pub fn n_features(&self) -> usize {
        self.n_columns.saturating_sub(1)
    }
}


/// Struct `Sample` holds the examples of a dataset in file order.
/// The example at position `i` has id `i + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    examples: Vec<Example>,
    n_columns: usize,
}


impl Sample {
    /// Construct a `Sample` from raw rows.
    /// The last column of each row is the label.
    /// Ids are assigned from the row positions, starting at `1`.
    pub fn from_rows<T>(rows: T) -> Result<Self>
        where T: IntoIterator<Item = Vec<i64>>,
    {
        let mut examples = Vec::new();
        let mut n_columns = None;
        for (i, row) in rows.into_iter().enumerate() {
            push_row(&mut examples, &mut n_columns, &row, i + 1)?;
        }
        let n_columns = n_columns.unwrap_or(0);

        Ok(Self { examples, n_columns })
    }


    /// Read a dataset file to `Sample` type.
    /// See [`Sample::from_reader`] for the format.
    pub fn from_file<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        Self::from_reader(BufReader::new(file), has_header)
    }


    /// Read a dataset to `Sample` type.
    ///
    /// With `has_header == true`, the first line is `m n`
    /// and the next `m` non-blank lines hold `n` whitespace-separated
    /// integers each. Lines after the `m`-th row are not read.
    ///
    /// With `has_header == false`, every non-blank line is a row
    /// and `n` is the column count of the first row.
    pub fn from_reader<R>(reader: R, has_header: bool) -> Result<Self>
        where R: BufRead,
    {
        let mut lines = reader.lines().enumerate();

        let header = if has_header {
            let line = match lines.next() {
                Some((_, line)) => line?,
                None => String::new(),
            };
            Some(parse_header(&line)?)
        } else {
            None
        };

        let mut examples = Vec::new();
        let mut n_columns = header.map(|shape| shape.n_columns());

        for (i, line) in lines {
            if header.is_some_and(|shape| examples.len() == shape.n_examples()) {
                break;
            }
            let line = line?;
            if line.trim().is_empty() { continue; }

            let lineno = i + 1;
            let row = parse_row(&line, lineno)?;
            push_row(&mut examples, &mut n_columns, &row, lineno)?;
        }

        if let Some(shape) = header {
            if examples.len() < shape.n_examples() {
                return Err(Error::MissingRows {
                    expected: shape.n_examples(),
                    found: examples.len(),
                });
            }
        }
        let n_columns = n_columns.unwrap_or(0);

        log::debug!(
            target: log_targets::READER,
            "read {} examples with {n_columns} columns",
            examples.len(),
        );

        Ok(Self { examples, n_columns })
    }


    /// Returns the pair `(m, n)`.
    pub fn shape(&self) -> Shape {
        Shape::new(self.examples.len(), self.n_columns)
    }


    /// Returns the examples in file order.
    pub fn examples(&self) -> &[Example] {
        &self.examples[..]
    }


    /// Returns the example of the given 1-based id.
    pub fn example(&self, id: usize) -> Option<&Example> {
        let index = id.checked_sub(1)?;
        self.examples.get(index)
    }


    /// Returns the number of examples.
    pub fn len(&self) -> usize {
        self.examples.len()
    }


    /// Returns `true` if the sample has no example.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}


/// Append `row` as the next example.
/// The first row fixes the column count `n`;
/// a row of another length, or an empty one, fails with `RowLength`.
fn push_row(
    examples: &mut Vec<Example>,
    n_columns: &mut Option<usize>,
    row: &[i64],
    lineno: usize,
) -> Result<()>
{
    let expected = *n_columns.get_or_insert(row.len());
    let id = examples.len() + 1;
    let example = Some(row)
        .filter(|row| row.len() == expected)
        .and_then(|row| Example::from_row(id, row))
        .ok_or(Error::RowLength {
            line: lineno, expected, found: row.len(),
        })?;
    examples.push(example);
    Ok(())
}


/// Parse the `m n` header line.
fn parse_header(line: &str) -> Result<Shape> {
    let values = parse_row(line, 1)?;
    match values.as_slice() {
        &[m, n] if m >= 0 && n >= 0 => Ok(Shape::new(m as usize, n as usize)),
        _ => Err(Error::Parse {
            line: 1,
            message: format!("expected a header `m n`, found `{}`", line.trim()),
        }),
    }
}


/// Parse a line of whitespace-separated integers.
pub(super) fn parse_row(line: &str, lineno: usize) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|token| parse_integer(token, lineno))
        .collect()
}


pub(super) fn parse_integer(token: &str, lineno: usize) -> Result<i64> {
    token.parse::<i64>()
        .map_err(|_| Error::Parse {
            line: lineno,
            message: format!("`{token}` is not an integer"),
        })
}


#[cfg(test)]
mod tests {
    use super::*;

    const XOR: &str = "4 3\n1 1 1\n1 0 0\n0 1 0\n0 0 1\n";

    #[test]
    fn test_read_with_header() {
        let sample = Sample::from_reader(XOR.as_bytes(), true).unwrap();
        assert_eq!(sample.shape(), Shape::new(4, 3));
        assert_eq!(sample.shape().n_features(), 2);

        let ids = sample.examples().iter()
            .map(|ex| ex.id())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let ex = sample.example(2).unwrap();
        assert_eq!(ex.features(), &[1, 0]);
        assert_eq!(ex.label(), 0);
        assert!(sample.example(0).is_none());
        assert!(sample.example(5).is_none());
    }

    #[test]
    fn test_read_without_header() {
        let text = "1 1 1\n\n1 0 0\n";
        let sample = Sample::from_reader(text.as_bytes(), false).unwrap();
        assert_eq!(sample.shape(), Shape::new(2, 3));
        assert_eq!(sample.example(2).unwrap().features(), &[1, 0]);
    }

    #[test]
    fn test_rows_after_m_are_ignored() {
        let text = "1 2\n0 1\n2 0\n";
        let sample = Sample::from_reader(text.as_bytes(), true).unwrap();
        assert_eq!(sample.len(), 1);
    }

    #[test]
    fn test_missing_rows() {
        let text = "3 2\n0 1\n";
        let err = Sample::from_reader(text.as_bytes(), true).unwrap_err();
        assert!(matches!(err, Error::MissingRows { expected: 3, found: 1 }));
    }

    #[test]
    fn test_bad_header() {
        let err = Sample::from_reader("4\n".as_bytes(), true).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));

        let err = Sample::from_reader("".as_bytes(), true).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_row_length() {
        let text = "2 3\n1 1 1\n1 0\n";
        let err = Sample::from_reader(text.as_bytes(), true).unwrap_err();
        assert!(matches!(
            err,
            Error::RowLength { line: 3, expected: 3, found: 2 }
        ));
    }

    #[test]
    fn test_not_an_integer() {
        let text = "1 2\n1 x\n";
        let err = Sample::from_reader(text.as_bytes(), true).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_from_rows() {
        let sample = Sample::from_rows(vec![vec![0, 1], vec![2, 0]]).unwrap();
        assert_eq!(sample.shape(), Shape::new(2, 2));
        assert_eq!(sample.example(1).unwrap().label(), 1);

        let err = Sample::from_rows(vec![vec![0, 1], vec![2]]).unwrap_err();
        assert!(matches!(err, Error::RowLength { line: 2, .. }));
    }

    #[test]
    fn test_push_row() {
        let mut examples = Vec::new();
        let mut n_columns = None;

        push_row(&mut examples, &mut n_columns, &[2, 0, 1], 4).unwrap();
        assert_eq!(n_columns, Some(3));
        assert_eq!(examples[0].id(), 1);
        assert_eq!(examples[0].label(), 1);

        // Ids count examples, not lines.
        push_row(&mut examples, &mut n_columns, &[0, 1, 0], 9).unwrap();
        assert_eq!(examples[1].id(), 2);

        let err = push_row(&mut examples, &mut n_columns, &[0, 1], 10)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::RowLength { line: 10, expected: 3, found: 2 }
        ));
        assert_eq!(examples.len(), 2);
    }

    #[test]
    fn test_empty_row() {
        let err = Sample::from_rows(vec![Vec::new()]).unwrap_err();
        assert!(matches!(
            err,
            Error::RowLength { line: 1, expected: 0, found: 0 }
        ));
    }
}
