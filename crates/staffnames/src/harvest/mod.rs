//! Drives a directory source over a segment plan and collects candidates.

mod source;
mod writer;

pub use source::{DirectoryPage, DirectorySource, Profile, RosterSource, SourceError};
pub use writer::{file_prefix, OutputWriter, WriterError};

use crate::names::{candidates_for, CandidateSet, MutationPattern, NameCandidates};
use crate::segments::Segment;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    #[error("segment {segment} failed at offset {offset}: {source}")]
    Source {
        segment: String,
        offset: u32,
        #[source]
        source: SourceError,
    },
}

/// A name the kernel could not use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedName {
    pub raw: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarvestSummary {
    pub segments: usize,
    pub pages_fetched: u32,
    pub profiles_seen: usize,
    pub unique_profiles: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HarvestReport {
    /// Unique profiles in first-seen order.
    pub profiles: Vec<Profile>,
    pub results: Vec<NameCandidates>,
    pub rejected: Vec<RejectedName>,
    pub summary: HarvestSummary,
}

impl HarvestReport {
    pub fn candidates_by_pattern(&self) -> BTreeMap<MutationPattern, BTreeSet<String>> {
        let mut by_pattern: BTreeMap<MutationPattern, BTreeSet<String>> = BTreeMap::new();
        for result in &self.results {
            for pattern in MutationPattern::ALL {
                by_pattern
                    .entry(pattern)
                    .or_default()
                    .extend(pattern.apply(&result.parts));
            }
        }
        by_pattern
    }

    pub fn all_candidates(&self) -> CandidateSet {
        self.results
            .iter()
            .flat_map(|result| result.candidates.iter().map(str::to_string))
            .collect()
    }
}

pub struct Harvester<S> {
    source: S,
}

impl<S: DirectorySource> Harvester<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Fetch every page of every segment, stopping a segment early once the
    /// source returns a short page.
    pub fn run(&mut self, segments: &[Segment]) -> Result<HarvestReport, HarvestError> {
        let started_at = Utc::now();
        let mut seen: HashSet<String> = HashSet::new();
        let mut profiles = Vec::new();
        let mut results = Vec::new();
        let mut rejected = Vec::new();
        let mut pages_fetched = 0;
        let mut profiles_seen = 0;

        for segment in segments {
            let label = segment.facet.label();
            let before = profiles.len();

            for offset in segment.page_offsets() {
                let page = self.source.fetch_page(segment, offset).map_err(|source| {
                    HarvestError::Source {
                        segment: label.clone(),
                        offset,
                        source,
                    }
                })?;
                pages_fetched += 1;
                profiles_seen += page.profiles.len();
                let short_page = page.profiles.len() < segment.page_size as usize;

                for profile in page.profiles {
                    if !seen.insert(profile.full_name.clone()) {
                        continue;
                    }
                    match candidates_for(&profile.full_name) {
                        Ok(result) => results.push(result),
                        Err(err) => {
                            warn!(name = %profile.full_name, error = %err, "skipping name");
                            rejected.push(RejectedName {
                                raw: profile.full_name.clone(),
                                reason: err.to_string(),
                            });
                        }
                    }
                    profiles.push(profile);
                }

                if short_page {
                    break;
                }
            }

            info!(
                segment = %label,
                new_profiles = profiles.len() - before,
                "segment harvested"
            );
        }

        let summary = HarvestSummary {
            segments: segments.len(),
            pages_fetched,
            profiles_seen,
            unique_profiles: profiles.len(),
            accepted: results.len(),
            rejected: rejected.len(),
            started_at,
            finished_at: Utc::now(),
        };

        Ok(HarvestReport {
            profiles,
            results,
            rejected,
            summary,
        })
    }
}
