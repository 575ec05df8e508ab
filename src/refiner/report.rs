use serde::Serialize;


/// The evaluation of one partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub(super) name: String,
    pub(super) size: usize,
    pub(super) weight: f64,
    pub(super) gains: Vec<f64>,
    pub(super) feature: usize,
    pub(super) gain: f64,
    pub(super) score: f64,
}


impl Candidate {
    /// Returns the partition name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the number of examples of the partition.
    pub fn size(&self) -> usize {
        self.size
    }


    /// Returns `size / m`, the share of the dataset the partition holds.
    pub fn weight(&self) -> f64 {
        self.weight
    }


    /// Returns the gain of every feature.
    /// `gains()[j - 1]` is the gain of feature `j`.
    pub fn gains(&self) -> &[f64] {
        &self.gains[..]
    }


    /// Returns the 1-based feature with the greatest gain.
    pub fn feature(&self) -> usize {
        self.feature
    }


    /// Returns the gain of [`Candidate::feature`].
    pub fn gain(&self) -> f64 {
        self.gain
    }


    /// Returns `(size / m) * gain`.
    pub fn score(&self) -> f64 {
        self.score
    }
}


/// What a refinement did:
/// which partition it replaced, on which feature,
/// and which partitions took its place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefineReport {
    pub(super) replaced: String,
    pub(super) position: usize,
    pub(super) feature: usize,
    pub(super) gain: f64,
    pub(super) score: f64,
    pub(super) successors: Vec<String>,
    pub(super) candidates: Vec<Candidate>,
}


impl RefineReport {
    /// Returns the name of the replaced partition.
    pub fn replaced(&self) -> &str {
        &self.replaced
    }


    /// Returns the position of the replaced partition,
    /// which is also the position of its first successor.
    pub fn position(&self) -> usize {
        self.position
    }


    /// Returns the 1-based feature the partition was split on.
    pub fn feature(&self) -> usize {
        self.feature
    }


    /// Returns the gain of the split.
    pub fn gain(&self) -> f64 {
        self.gain
    }


    /// Returns the score of the replaced partition.
    pub fn score(&self) -> f64 {
        self.score
    }


    /// Returns the names of the successors in order.
    pub fn successors(&self) -> &[String] {
        &self.successors[..]
    }


    /// Returns the evaluation of every input partition, in input order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates[..]
    }
}
