//! This directory provides some features to inspect a refinement.
//! - A colored summary of the replaced partition and its successors.
//! - A CSV trace of the gain of every `(partition, feature)` pair.

/// Writes the gain trace of a refinement to a CSV file.
pub mod logger;

/// Prints the summary of a refinement.
pub mod summary;

pub use logger::GainLogger;
pub use summary::Summary;
