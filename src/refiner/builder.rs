use crate::{Sample, Result};
use crate::sample::Shape;
use crate::common::checker;
use super::refiner_algorithm::Refiner;


/// A struct that builds [`Refiner`].
/// `RefinerBuilder` keeps the dataset shape `(m, n)`
/// that every score is computed against.
///
/// # Example
///
/// ```no_run
/// use partsplit::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/dataset.txt")
///     .read()
///     .unwrap();
/// let refiner = RefinerBuilder::new(&sample)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RefinerBuilder {
    shape: Shape,
}


impl RefinerBuilder {
    /// Construct a new instance of [`RefinerBuilder`]
    /// from the shape of `sample`.
    pub fn new(sample: &Sample) -> Self {
        Self { shape: sample.shape() }
    }


    /// Construct a new instance of [`RefinerBuilder`]
    /// from an explicit `(m, n)`.
    pub fn from_shape(shape: Shape) -> Self {
        Self { shape }
    }


    /// Build a [`Refiner`].
    /// Fails with `EmptyPartition` if `m == 0`,
    /// and with `NoFeatures` if `n < 2`.
    /// This method consumes `self`.
    pub fn build(self) -> Result<Refiner> {
        checker::shape(self.shape)?;
        Ok(Refiner::from_components(self.shape))
    }
}
