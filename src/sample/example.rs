use std::fmt;


/// A labeled record `(id, feature_1, ..., feature_k, label)`.
///
/// `id` is the 1-based row position in the dataset file.
/// It never takes part in a computation and is only reported back.
/// Features are addressed 1-based, so `feature(1)` is the first
/// feature column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    id: usize,
    features: Vec<i64>,
    label: i64,
}


impl Example {
    /// Construct a new example.
    pub fn new(id: usize, features: Vec<i64>, label: i64) -> Self {
        Self { id, features, label }
    }


    /// Construct an example from a raw dataset row,
    /// whose last column is the label.
    /// Returns `None` for an empty row.
    pub fn from_row(id: usize, row: &[i64]) -> Option<Self> {
        let (&label, features) = row.split_last()?;
        Some(Self::new(id, features.to_vec(), label))
    }


    /// Returns the stable id.
    #[inline(always)]
    pub fn id(&self) -> usize {
        self.id
    }


    /// Returns the label.
    #[inline(always)]
    pub fn label(&self) -> i64 {
        self.label
    }


    /// Returns the value at the 1-based feature index `feature`,
    /// or `None` if there is no such column.
    #[inline(always)]
    pub fn feature(&self, feature: usize) -> Option<i64> {
        let index = feature.checked_sub(1)?;
        self.features.get(index).copied()
    }


    /// Returns all feature values in column order.
    pub fn features(&self) -> &[i64] {
        &self.features[..]
    }


    /// Returns the number of feature columns.
    pub fn n_features(&self) -> usize {
        self.features.len()
    }
}


impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [", self.id)?;
        for (i, x) in self.features.iter().enumerate() {
            if i > 0 { write!(f, " ")?; }
            write!(f, "{x}")?;
        }
        write!(f, "] -> {}", self.label)
    }
}
