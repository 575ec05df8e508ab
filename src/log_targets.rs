//! Targets used with the `log` facade.
//! Filter them with `RUST_LOG`, e.g. `RUST_LOG=gain=trace`.

/// Per `(partition, feature)` gain evaluations.
pub const GAIN: &str = "gain";
/// Selection of the partition to replace.
pub const SELECTION: &str = "selection";
/// Reading the dataset and the partition files.
pub const READER: &str = "reader";
/// Writing the refined partitions.
pub const WRITER: &str = "writer";
