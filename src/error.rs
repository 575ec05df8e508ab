//! Defines the error type shared by the measures, the refiner,
//! and the readers/writer.

use thiserror::Error;

use std::io;


/// A `Result` whose error type is [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;


/// Errors raised by this crate.
/// None of them are recoverable locally;
/// a refinement that fails leaves the input collection untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// A measure or the refiner received a partition with no example.
    #[error("partition has no example")]
    EmptyPartition,


    /// A feature value outside `{0, 1, 2}` was found during a split.
    #[error(
        "example {id} has value {value} at feature {feature}; \
        expected one of 0, 1, 2"
    )]
    InvalidFeatureValue {
        /// Stable id of the offending example.
        id: usize,
        /// 1-based feature index.
        feature: usize,
        /// The value found.
        value: i64,
    },


    /// The feature index does not address a feature column.
    #[error("feature {feature} is out of range (features are 1..={n_features})")]
    FeatureOutOfRange {
        /// The requested 1-based index.
        feature: usize,
        /// Number of feature columns of the example.
        n_features: usize,
    },


    /// Names and partitions are not paired one to one.
    #[error("{names} names given for {partitions} partitions")]
    InconsistentNamesLength {
        /// Number of names.
        names: usize,
        /// Number of partitions.
        partitions: usize,
    },


    /// The sample has no feature column to split on.
    #[error("sample has no feature column")]
    NoFeatures,


    /// A partition line refers to an id that the dataset does not have.
    #[error("line {line}: example id {id} does not exist")]
    UnknownExample {
        /// 1-based line number in the partition file.
        line: usize,
        /// The id that failed to resolve.
        id: usize,
    },


    /// A token could not be read as an integer, or a header is missing.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },


    /// A dataset row does not have `n` columns.
    #[error("line {line}: expected {expected} columns, found {found}")]
    RowLength {
        /// 1-based line number.
        line: usize,
        /// Column count announced by the header.
        expected: usize,
        /// Column count found on the row.
        found: usize,
    },


    /// The dataset ends before `m` rows were read.
    #[error("expected {expected} examples, found {found}")]
    MissingRows {
        /// Row count announced by the header.
        expected: usize,
        /// Rows actually read.
        found: usize,
    },


    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}
