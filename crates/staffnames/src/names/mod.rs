//! Display-name cleanup and username mutation.

mod mutator;
mod normalizer;
mod splitter;

pub use mutator::{mutate, CandidateSet, MutationPattern};
pub use normalizer::{normalize, CleanName, TITLES};
pub use splitter::{split, SplitName};

use serde::Serialize;

/// Raised for a single name that cannot be turned into candidates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("name {raw:?} has no usable characters after normalization")]
    InvalidName { raw: String },
}

/// Every intermediate form of one processed name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCandidates {
    pub raw: String,
    pub clean: CleanName,
    pub parts: SplitName,
    pub candidates: CandidateSet,
}

/// Run a raw display name through normalize, split and mutate.
pub fn candidates_for(raw: &str) -> Result<NameCandidates, NameError> {
    let clean = normalize(raw);
    let parts = split(&clean).map_err(|_| NameError::InvalidName {
        raw: raw.to_string(),
    })?;
    let candidates = mutate(&parts);

    Ok(NameCandidates {
        raw: raw.to_string(),
        clean,
        parts,
        candidates,
    })
}
