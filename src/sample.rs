//! Struct `Sample` holds the examples read from a dataset file,
//! and `PartitionSet` holds the named partitions over them.

// Provides example struct.
pub(crate) mod example;
// Provides sample struct.
pub(crate) mod sample_struct;
// Provides named partitions.
pub(crate) mod partition;

// Provides a struct that reads a dataset file.
pub(crate) mod sample_reader;
// Provides a struct that reads a partition file.
pub(crate) mod partition_reader;
// Writes the refined partitions.
pub(crate) mod partition_writer;


pub use example::Example;
pub use sample_struct::{Sample, Shape};
pub use partition::{Partition, PartitionSet};
pub use sample_reader::SampleReader;
pub use partition_reader::PartitionReader;
pub use partition_writer::write_partitions;
