//! The partition refinement step.
//!
//! A [`Refiner`] scores every `(partition, feature)` pair of a
//! [`PartitionSet`](crate::PartitionSet) by information gain,
//! weighted by the share of the dataset the partition holds,
//! and replaces the best partition by the non-empty groups
//! of its best ternary split.

/// Defines the builder of `Refiner`.
pub mod builder;

/// Defines `Refiner` and the refinement algorithm.
pub mod refiner_algorithm;

/// Defines the report of a refinement.
pub mod report;


pub use builder::RefinerBuilder;
pub use refiner_algorithm::{Refiner, Refinement};
pub use report::{Candidate, RefineReport};
