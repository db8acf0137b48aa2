use std::collections::BTreeSet;

/// 去重後的 IP / CIDR 條目集合，以字串原樣比較並依字典序迭代
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpSet {
    entries: BTreeSet<String>,
}

impl IpSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the entry was not present yet.
    pub fn insert(&mut self, entry: impl Into<String>) -> bool {
        self.entries.insert(entry.into())
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Entries carrying a `/N` suffix, sorted.
    pub fn cidr_ranges(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|entry| entry.contains('/'))
    }

    /// Plain addresses, sorted.
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|entry| !entry.contains('/'))
    }
}

impl<S: Into<String>> Extend<S> for IpSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for IpSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = IpSet::new();
        set.extend(iter);
        set
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub url: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ExtractResult {
    pub entries: IpSet,
    pub succeeded: Vec<String>,
    pub failed: Vec<SourceFailure>,
}

#[derive(Debug, Clone)]
pub struct RenderedBlocklist {
    pub content: String,
    pub total_entries: usize,
}
