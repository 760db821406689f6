use alloc::{collections::BTreeSet, vec::Vec};
use serde::{Deserialize, Serialize};

/// Set of choice indices picked for a single question. Serialized as an ascending array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeSet<usize>);

impl Selection {
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn single(index: usize) -> Self {
        Self(BTreeSet::from([index]))
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest selected index, if any.
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub const fn as_set(&self) -> &BTreeSet<usize> {
        &self.0
    }

    /// Returns a copy of this selection with `index` added.
    #[must_use]
    pub fn with(&self, index: usize) -> Self {
        let mut set = self.0.clone();
        set.insert(index);
        Self(set)
    }

    /// Returns a copy of this selection with `index` removed.
    #[must_use]
    pub fn without(&self, index: usize) -> Self {
        let mut set = self.0.clone();
        set.remove(&index);
        Self(set)
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[usize; N]> for Selection {
    fn from(indices: [usize; N]) -> Self {
        Self(BTreeSet::from(indices))
    }
}

/// Submitted selections in question order. Entries can only be appended.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerLog(Vec<Selection>);

impl AnswerLog {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn append(&mut self, selection: Selection) {
        self.0.push(selection);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Selection> {
        self.0.get(index)
    }
}

impl FromIterator<Selection> for AnswerLog {
    fn from_iter<I: IntoIterator<Item = Selection>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AnswerLog {
    type Item = &'a Selection;
    type IntoIter = core::slice::Iter<'a, Selection>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
