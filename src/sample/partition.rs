use std::io::Write;
use std::path::Path;
use std::fs::File;
use std::io::BufWriter;
use std::slice::Iter;

use crate::Result;
use crate::common::checker;
use super::example::Example;
use super::partition_writer::write_partitions;


/// A named, ordered collection of examples.
/// The examples are borrowed from the [`Sample`](crate::Sample)
/// they were read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<'a> {
    name: String,
    examples: Vec<&'a Example>,
}


impl<'a> Partition<'a> {
    /// Construct a new partition.
    pub fn new<S: ToString>(name: S, examples: Vec<&'a Example>) -> Self {
        Self { name: name.to_string(), examples }
    }


    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the members in order.
    pub fn examples(&self) -> &[&'a Example] {
        &self.examples[..]
    }


    /// Returns the stable ids of the members in order.
    pub fn ids(&self) -> Vec<usize> {
        self.examples.iter()
            .map(|ex| ex.id())
            .collect()
    }


    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.examples.len()
    }


    /// Returns `true` if the partition has no member.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}


/// An ordered collection of partitions.
/// Position matters: a refinement puts the successors of a partition
/// at the position the partition had.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartitionSet<'a> {
    partitions: Vec<Partition<'a>>,
}


impl<'a> PartitionSet<'a> {
    /// Construct a new collection.
    pub fn new(partitions: Vec<Partition<'a>>) -> Self {
        Self { partitions }
    }


    /// Pair `names[i]` with `groups[i]`.
    /// Fails with `InconsistentNamesLength`
    /// if the two vectors differ in length.
    pub fn from_parts(names: Vec<String>, groups: Vec<Vec<&'a Example>>)
        -> Result<Self>
    {
        checker::names_aligned(names.len(), groups.len())?;

        let partitions = names.into_iter()
            .zip(groups)
            .map(|(name, examples)| Partition::new(name, examples))
            .collect();
        Ok(Self { partitions })
    }


    /// Returns the partitions in order.
    pub fn partitions(&self) -> &[Partition<'a>] {
        &self.partitions[..]
    }


    /// Returns the partition at position `i`.
    pub fn get(&self, i: usize) -> Option<&Partition<'a>> {
        self.partitions.get(i)
    }


    /// Returns the names in order.
    pub fn names(&self) -> Vec<&str> {
        self.partitions.iter()
            .map(|part| part.name())
            .collect()
    }


    /// Returns, for each partition in order,
    /// the stable ids of its members.
    pub fn example_ids(&self) -> Vec<Vec<usize>> {
        self.partitions.iter()
            .map(|part| part.ids())
            .collect()
    }


    /// Returns the number of partitions.
    pub fn len(&self) -> usize {
        self.partitions.len()
    }


    /// Returns `true` if there is no partition.
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }


    /// Write one line `name id_1 ... id_k` per partition.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        write_partitions(writer, &self.names(), &self.example_ids())
    }


    /// Write the partitions to the file `path`,
    /// replacing its content.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }
}


impl<'a, 'b> IntoIterator for &'b PartitionSet<'a> {
    type Item = &'b Partition<'a>;
    type IntoIter = Iter<'b, Partition<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.partitions.iter()
    }
}
