use smol_str::SmolStr;
use std::collections::{BTreeMap, btree_map};

use crate::format::Entry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Value of the `group-title` attribute shared by every entry
    pub title: SmolStr,
    /// Entries in the order they were read
    pub entries: Vec<Entry>,
}

impl Group {
    pub fn new(title: impl Into<SmolStr>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Entries of a playlist, grouped by `group-title`.
///
/// Groups are kept in a sorted map, so iterating a playlist always yields
/// titles in ascending code point order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    pub(crate) groups: BTreeMap<SmolStr, Group>,
}

impl Playlist {
    pub(crate) fn push(&mut self, entry: Entry) {
        let title = SmolStr::new(entry.group_title());
        self.groups
            .entry(title.clone())
            .or_insert_with(|| Group::new(title))
            .entries
            .push(entry);
    }

    pub(crate) fn insert_group(&mut self, group: Group) {
        self.groups.insert(group.title.clone(), group);
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.groups.values().map(Group::len).sum()
    }

    pub fn get(&self, title: &str) -> Option<&Group> {
        self.groups.get(title)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(SmolStr::as_str)
    }

    pub fn groups(&self) -> btree_map::Values<'_, SmolStr, Group> {
        self.groups.values()
    }

    /// Every entry, group by group, each group in its original order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.groups.values().flat_map(|x| x.entries.iter())
    }
}

impl FromIterator<Entry> for Playlist {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        let mut result = Self::default();
        for entry in iter {
            result.push(entry);
        }
        result
    }
}
