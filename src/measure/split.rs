use crate::{Error, Result};
use crate::constants::FEATURE_ARITY;
use crate::common::checker;
use crate::sample::Example;
use super::probability::entropy;


/// The groups of a ternary split.
/// `groups[v]` holds the examples whose feature value is `v`.
pub type Groups<'a> = [Vec<&'a Example>; FEATURE_ARITY];


/// Splits `examples` into exactly three groups
/// by their value at the 1-based `feature`.
/// Each group keeps the input order of its members.
///
/// Fails with `InvalidFeatureValue` if a value lies outside `{0, 1, 2}`,
/// and with `FeatureOutOfRange` if an example has no such feature.
/// No group is returned on failure.
pub fn split_by_feature<'a>(examples: &[&'a Example], feature: usize)
    -> Result<Groups<'a>>
{
    let mut groups: Groups<'a> = Default::default();

    for &ex in examples {
        let value = ex.feature(feature)
            .ok_or(Error::FeatureOutOfRange {
                feature,
                n_features: ex.n_features(),
            })?;
        let slot = usize::try_from(value).ok()
            .filter(|&v| v < FEATURE_ARITY)
            .ok_or(Error::InvalidFeatureValue {
                id: ex.id(),
                feature,
                value,
            })?;

        groups[slot].push(ex);
    }

    Ok(groups)
}


/// Returns the size-weighted entropy of the groups
/// that [`split_by_feature`] produces:
/// ```text
/// Σ_v (|g_v| / |examples|) * entropy(g_v)
/// ```
/// Empty groups contribute nothing.
///
/// Fails with `EmptyPartition` if `examples` is empty.
pub fn conditional_entropy(examples: &[&Example], feature: usize)
    -> Result<f64>
{
    checker::non_empty(examples)?;

    let total = examples.len() as f64;
    let groups = split_by_feature(examples, feature)?;

    groups.iter()
        .filter(|group| !group.is_empty())
        .try_fold(0.0, |acc, group| {
            let weight = group.len() as f64 / total;
            Ok(acc + weight * entropy(group)?)
        })
}


/// Returns the information gain of splitting `examples` on `feature`,
/// i.e., `entropy(examples) - conditional_entropy(examples, feature)`.
pub fn information_gain(examples: &[&Example], feature: usize)
    -> Result<f64>
{
    let base = entropy(examples)?;
    let cond = conditional_entropy(examples, feature)?;
    Ok(base - cond)
}
