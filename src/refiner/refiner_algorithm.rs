use crate::{Error, Result};
use crate::log_targets;
use crate::common::checker;
use crate::measure::{entropy, conditional_entropy, split_by_feature};
use crate::sample::{Example, Partition, PartitionSet, Shape};
use super::report::{Candidate, RefineReport};


/// Replaces the partition with the greatest weighted information gain
/// by the non-empty groups of its best ternary split.
/// Construct it with [`RefinerBuilder`](super::RefinerBuilder).
#[derive(Debug, Clone, Copy)]
pub struct Refiner {
    shape: Shape,
}


/// The outcome of [`Refiner::refine`]:
/// the successor collection and the report of the step.
#[derive(Debug, Clone)]
pub struct Refinement<'a> {
    partitions: PartitionSet<'a>,
    report: RefineReport,
}


impl<'a> Refinement<'a> {
    /// Returns the refined collection.
    pub fn partitions(&self) -> &PartitionSet<'a> {
        &self.partitions
    }


    /// Returns the report.
    pub fn report(&self) -> &RefineReport {
        &self.report
    }


    /// Returns the names of the refined collection in order.
    pub fn names(&self) -> Vec<&str> {
        self.partitions.names()
    }


    /// Returns the member ids of every refined partition in order.
    pub fn example_ids(&self) -> Vec<Vec<usize>> {
        self.partitions.example_ids()
    }
}


impl Refiner {
    #[inline]
    pub(super) fn from_components(shape: Shape) -> Self {
        Self { shape }
    }


    /// Returns the gain of every feature `1..=n-1` on `examples`,
    /// in feature order.
    /// Fails with `EmptyPartition` if `examples` is empty.
    pub fn gains(&self, examples: &[&Example]) -> Result<Vec<f64>> {
        let base = entropy(examples)?;

        (1..=self.shape.n_features())
            .map(|feature| {
                conditional_entropy(examples, feature)
                    .map(|cond| base - cond)
            })
            .collect()
    }


    /// Returns the pair `(feature, gain)` with the greatest gain.
    /// On a tie the smaller feature index wins.
    pub fn best_feature(&self, examples: &[&Example])
        -> Result<(usize, f64)>
    {
        let gains = self.gains(examples)?;
        select_first_max(&gains)
            .map(|i| (i + 1, gains[i]))
            .ok_or(Error::NoFeatures)
    }


    /// Evaluates one partition.
    fn evaluate(&self, partition: &Partition<'_>) -> Result<Candidate> {
        let gains = self.gains(partition.examples())?;
        let best = select_first_max(&gains).ok_or(Error::NoFeatures)?;
        let (feature, gain) = (best + 1, gains[best]);

        let weight = partition.len() as f64 / self.shape.n_examples() as f64;
        let score = weight * gain;

        for (j, g) in gains.iter().enumerate() {
            log::trace!(
                target: log_targets::GAIN,
                "{}: feature {} gain {g}",
                partition.name(), j + 1,
            );
        }
        log::debug!(
            target: log_targets::GAIN,
            "{}: best feature {feature}, gain {gain}, score {score}",
            partition.name(),
        );

        let candidate = Candidate {
            name: partition.name().to_string(),
            size: partition.len(),
            weight,
            gains,
            feature,
            gain,
            score,
        };
        Ok(candidate)
    }


    /// Refines `partitions` by one step.
    ///
    /// 1. Every partition is evaluated on every feature;
    ///    its best feature is the first one with the greatest gain.
    /// 2. Its score is `(|partition| / m) * gain`;
    ///    the first partition with the greatest score is chosen.
    /// 3. The chosen partition is split on its best feature,
    ///    and the non-empty groups, named `<name>1`, `<name>2`, ...
    ///    in value order, take its place.
    ///
    /// The input is left untouched.
    /// Fails with `EmptyPartition` if the collection
    /// or any of its partitions is empty.
    pub fn refine<'a>(&self, partitions: &PartitionSet<'a>)
        -> Result<Refinement<'a>>
    {
        checker::shape(self.shape)?;
        checker::non_empty(partitions.partitions())?;

        let mut candidates = Vec::with_capacity(partitions.len());
        for partition in partitions {
            candidates.push(self.evaluate(partition)?);
        }

        let scores = candidates.iter()
            .map(|candidate| candidate.score)
            .collect::<Vec<_>>();
        let position = select_first_max(&scores)
            .ok_or(Error::EmptyPartition)?;

        let target = &partitions.partitions()[position];
        let chosen = &candidates[position];
        let (feature, gain, score) = (chosen.feature, chosen.gain, chosen.score);

        let groups = split_by_feature(target.examples(), feature)?;
        let successors = groups.into_iter()
            .filter(|group| !group.is_empty())
            .enumerate()
            .map(|(k, group)| {
                let name = format!("{}{}", target.name(), k + 1);
                Partition::new(name, group)
            })
            .collect::<Vec<_>>();

        log::info!(
            target: log_targets::SELECTION,
            "split `{}` on feature {} (gain {}, score {}) into {} partitions",
            target.name(), feature, gain, score, successors.len(),
        );

        let successor_names = successors.iter()
            .map(|part| part.name().to_string())
            .collect::<Vec<_>>();

        // The successors sit contiguously where the target was.
        let parts = partitions.partitions();
        let mut next = Vec::with_capacity(parts.len() + successors.len() - 1);
        next.extend_from_slice(&parts[..position]);
        next.extend(successors);
        next.extend_from_slice(&parts[position + 1..]);
        let next = PartitionSet::new(next);

        let report = RefineReport {
            replaced: target.name().to_string(),
            position,
            feature,
            gain,
            score,
            successors: successor_names,
            candidates,
        };

        Ok(Refinement { partitions: next, report })
    }


    /// Refines the collection given as parallel `partitions` and `names`,
    /// and returns the refined names and member ids.
    ///
    /// Fails with `InconsistentNamesLength`
    /// if the two vectors differ in length.
    pub fn refine_named<'a>(
        &self,
        partitions: Vec<Vec<&'a Example>>,
        names: Vec<String>,
    ) -> Result<(Vec<String>, Vec<Vec<usize>>)>
    {
        let set = PartitionSet::from_parts(names, partitions)?;
        let refinement = self.refine(&set)?;

        let names = refinement.names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let ids = refinement.example_ids();
        checker::names_aligned(names.len(), ids.len())?;

        Ok((names, ids))
    }
}


/// Returns the index of the first maximal value.
/// A later value replaces the current best only if it is strictly greater.
fn select_first_max(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &v) in values.iter().enumerate() {
        let replace = best.map_or(true, |b| v > values[b]);
        if replace { best = Some(i); }
    }
    best
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_first_max() {
        assert_eq!(select_first_max(&[]), None);
        assert_eq!(select_first_max(&[0.0]), Some(0));
        assert_eq!(select_first_max(&[0.2, 0.5, 0.5, 0.1]), Some(1));
        assert_eq!(select_first_max(&[0.0, 0.0, 0.0]), Some(0));
        assert_eq!(select_first_max(&[-1.0, 0.0]), Some(1));
    }
}
