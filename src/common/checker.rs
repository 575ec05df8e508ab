//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data, alignment of names and partitions.

use crate::{Error, Result};
use crate::sample::Shape;


/// Check whether the given slice has an item or not.
#[inline(always)]
pub(crate) fn non_empty<T>(items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(Error::EmptyPartition);
    }
    Ok(())
}


/// Check whether names and partitions are paired one to one.
#[inline(always)]
pub(crate) fn names_aligned(names: usize, partitions: usize) -> Result<()> {
    if names != partitions {
        return Err(Error::InconsistentNamesLength { names, partitions });
    }
    Ok(())
}


/// Check whether the shape admits a refinement,
/// i.e., `m > 0` and there is at least one feature column.
#[inline(always)]
pub(crate) fn shape(shape: Shape) -> Result<()> {
    if shape.n_examples() == 0 {
        return Err(Error::EmptyPartition);
    }
    if shape.n_features() == 0 {
        return Err(Error::NoFeatures);
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_success() {
        assert!(non_empty(&[1]).is_ok());
    }

    #[test]
    fn test_non_empty_failure() {
        let items: [usize; 0] = [];
        assert!(matches!(non_empty(&items), Err(Error::EmptyPartition)));
    }

    #[test]
    fn test_names_aligned_success() {
        assert!(names_aligned(3, 3).is_ok());
    }

    #[test]
    fn test_names_aligned_failure() {
        assert!(matches!(
            names_aligned(2, 3),
            Err(Error::InconsistentNamesLength { names: 2, partitions: 3 })
        ));
    }

    #[test]
    fn test_shape_success() {
        assert!(shape(Shape::new(4, 3)).is_ok());
    }

    #[test]
    fn test_shape_without_feature() {
        assert!(matches!(shape(Shape::new(4, 1)), Err(Error::NoFeatures)));
        assert!(matches!(shape(Shape::new(4, 0)), Err(Error::NoFeatures)));
    }

    #[test]
    fn test_shape_without_example() {
        assert!(matches!(shape(Shape::new(0, 3)), Err(Error::EmptyPartition)));
    }
}
