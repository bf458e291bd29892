use super::splitter::SplitName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Username shapes derived from a split name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationPattern {
    /// `rsharma`
    FirstInitialLast,
    /// `r.sharma`
    FirstInitialDotLast,
    /// `sharmar`
    LastFirstInitial,
    /// `rahul.sharma`
    FirstDotLast,
    /// `rahuls`
    FirstLastInitial,
    /// `rahul`
    FirstOnly,
}

impl MutationPattern {
    pub const ALL: [MutationPattern; 6] = [
        MutationPattern::FirstInitialLast,
        MutationPattern::FirstInitialDotLast,
        MutationPattern::LastFirstInitial,
        MutationPattern::FirstDotLast,
        MutationPattern::FirstLastInitial,
        MutationPattern::FirstOnly,
    ];

    /// Stem used for the per-pattern output file.
    pub fn file_stem(self) -> &'static str {
        match self {
            MutationPattern::FirstInitialLast => "flast",
            MutationPattern::FirstInitialDotLast => "f.last",
            MutationPattern::LastFirstInitial => "lastf",
            MutationPattern::FirstDotLast => "first.last",
            MutationPattern::FirstLastInitial => "firstl",
            MutationPattern::FirstOnly => "first",
        }
    }

    /// Candidates for this pattern alone. When the name has a second part it
    /// is also tried in place of the last name.
    pub fn apply(self, parts: &SplitName) -> Vec<String> {
        let first = parts.first();
        let mut surnames = vec![parts.last()];
        if parts.has_second() && self != MutationPattern::FirstOnly {
            surnames.push(parts.second());
        }

        surnames
            .into_iter()
            .filter_map(|surname| self.render(first, surname))
            .collect()
    }

    fn render(self, first: &str, surname: &str) -> Option<String> {
        let first_initial = initial(first)?;
        let candidate = match self {
            MutationPattern::FirstInitialLast => format!("{first_initial}{surname}"),
            MutationPattern::FirstInitialDotLast => format!("{first_initial}.{surname}"),
            MutationPattern::LastFirstInitial => format!("{surname}{first_initial}"),
            MutationPattern::FirstDotLast => format!("{first}.{surname}"),
            MutationPattern::FirstLastInitial => format!("{first}{}", initial(surname)?),
            MutationPattern::FirstOnly => first.to_string(),
        };
        Some(candidate)
    }
}

fn initial(part: &str) -> Option<char> {
    part.chars().next()
}

/// Deduplicated, ordered usernames generated for one name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateSet(BTreeSet<String>);

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, candidate: String) -> bool {
        self.0.insert(candidate)
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.0.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Candidates rendered as `candidate@domain`.
    pub fn with_domain(&self, domain: &str) -> Vec<String> {
        let domain = domain.trim().trim_start_matches('@');
        self.iter()
            .map(|candidate| format!("{candidate}@{domain}"))
            .collect()
    }
}

impl Extend<String> for CandidateSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for CandidateSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Union of every pattern in [`MutationPattern::ALL`].
pub fn mutate(parts: &SplitName) -> CandidateSet {
    MutationPattern::ALL
        .iter()
        .flat_map(|pattern| pattern.apply(parts))
        .collect()
}
