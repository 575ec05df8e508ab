use crate::Result;
use crate::constants::POSITIVE_LABEL;
use crate::common::checker;
use crate::sample::Example;


/// Returns the pair `(p1, p0)` where `p1` is the fraction of examples
/// labeled `1` and `p0 = 1 - p1`.
///
/// Fails with `EmptyPartition` if `examples` is empty.
#[inline]
pub fn probability(examples: &[&Example]) -> Result<(f64, f64)> {
    checker::non_empty(examples)?;

    let positives = examples.iter()
        .filter(|ex| ex.label() == POSITIVE_LABEL)
        .count();

    let p1 = positives as f64 / examples.len() as f64;
    let p0 = 1.0 - p1;
    Ok((p1, p0))
}


/// Returns the binary Shannon entropy (in bits) of the labels.
/// A pure set has entropy exactly `0`.
///
/// Fails with `EmptyPartition` if `examples` is empty.
#[inline]
pub fn entropy(examples: &[&Example]) -> Result<f64> {
    let (p1, p0) = probability(examples)?;

    // `log2(0)` is never evaluated.
    if p1 == 0.0 || p0 == 0.0 {
        return Ok(0.0);
    }

    Ok(-(p1 * p1.log2() + p0 * p0.log2()))
}
