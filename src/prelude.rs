//! Exports the readers, the refiner, and the measures.
//!
pub use crate::sample::{
    // Data model -------------------------------
    Example,
    Sample,
    Shape,
    Partition,
    PartitionSet,


    // Input / output ---------------------------
    SampleReader,
    PartitionReader,
    write_partitions,
};


pub use crate::measure::{
    probability,
    entropy,
    split_by_feature,
    conditional_entropy,
    information_gain,
};


pub use crate::refiner::{
    Refiner,
    RefinerBuilder,
    Refinement,
    RefineReport,
};


pub use crate::research::{
    GainLogger,
    Summary,
};


pub use crate::error::Error;
