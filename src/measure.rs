//! Information measures over a set of examples
//! with respect to the binary label.
//!
//! - [`probability`] and [`entropy`] measure a set as a whole.
//! - [`split_by_feature`] partitions a set by the value of one feature,
//!   and [`conditional_entropy`] / [`information_gain`] measure that split.
//!
//! Every function takes the examples as a slice of references,
//! so that a [`Partition`](crate::Partition) can be measured
//! without copying its members.

/// Defines the label probability and the binary entropy.
pub mod probability;

/// Defines the ternary split and the conditional entropy.
pub mod split;


pub use probability::{probability, entropy};
pub use split::{split_by_feature, conditional_entropy, information_gain};
