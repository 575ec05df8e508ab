#![warn(missing_docs)]

//!
//! A crate that refines a collection of named example partitions
//! by one greedy, information-gain driven split.
//!
//! Each example holds ternary features (values `0`, `1`, `2`)
//! and a binary label.
//! Given a dataset and a collection of named partitions over it,
//! [`Refiner::refine`] finds the `(partition, feature)` pair
//! with the greatest information gain, weighted by the share of
//! the dataset the partition holds,
//! and replaces that partition by the non-empty groups of its split.
//! The successors of a partition `A` are named `A1`, `A2`, ...
//!
//! This is one node expansion of ID3-style decision tree induction;
//! no tree is built.
//!
//! ```no_run
//! use partsplit::prelude::*;
//!
//! let sample = SampleReader::new()
//!     .file("dataset.txt")
//!     .read()
//!     .unwrap();
//! let partitions = PartitionReader::new(&sample)
//!     .file("partition.txt")
//!     .read()
//!     .unwrap();
//! let refiner = RefinerBuilder::new(&sample)
//!     .build()
//!     .unwrap();
//! let refinement = refiner.refine(&partitions).unwrap();
//! refinement.partitions().save("refined.txt").unwrap();
//! ```

pub mod constants;
pub mod error;
pub mod log_targets;
pub mod sample;
pub mod measure;
pub mod refiner;
pub mod research;
pub mod prelude;

pub(crate) mod common;


pub use error::{Error, Result};

pub use sample::{
    Example,
    Sample,
    Shape,
    SampleReader,
    Partition,
    PartitionSet,
    PartitionReader,
    write_partitions,
};

pub use measure::{
    probability,
    entropy,
    split_by_feature,
    conditional_entropy,
    information_gain,
};

pub use refiner::{
    Refiner,
    RefinerBuilder,
    Refinement,
    RefineReport,
    Candidate,
};
