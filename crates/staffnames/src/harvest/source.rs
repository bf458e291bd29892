use crate::segments::{Segment, SegmentFacet};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// One person returned by a directory search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
}

impl Profile {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            occupation: None,
        }
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }
}

/// Profiles returned for one page of one segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryPage {
    pub profiles: Vec<Profile>,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can answer a paged, segmented directory search.
///
/// Network-backed fetchers (authentication, throttling, proxies) live outside
/// this crate and plug in here.
pub trait DirectorySource {
    fn fetch_page(&mut self, segment: &Segment, offset: u32)
        -> Result<DirectoryPage, SourceError>;
}

#[derive(Debug, Clone)]
struct RosterEntry {
    profile: Profile,
    region: Option<String>,
}

impl RosterEntry {
    fn matches(&self, facet: &SegmentFacet) -> bool {
        match facet {
            SegmentFacet::Unfiltered => true,
            SegmentFacet::Region { code, .. } => self.region.as_deref() == Some(*code),
            SegmentFacet::Keyword { keyword } => {
                let needle = keyword.to_lowercase();
                self.profile.full_name.to_lowercase().contains(&needle)
                    || self
                        .profile
                        .occupation
                        .as_deref()
                        .is_some_and(|occupation| occupation.to_lowercase().contains(&needle))
            }
        }
    }
}

/// Offline directory backed by an exported roster file.
#[derive(Debug, Clone, Default)]
pub struct RosterSource {
    entries: Vec<RosterEntry>,
}

impl RosterSource {
    /// Load a roster, reading `.csv` files as CSV and anything else as one
    /// name per line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            Self::from_csv_reader(file)
        } else {
            Self::from_lines(BufReader::new(file))
        }
    }

    /// CSV with a `Name` column and optional `Occupation` and `Region` columns.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, SourceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut entries = Vec::new();

        for record in csv_reader.deserialize::<RosterRow>() {
            let row = record?;
            if row.name.trim().is_empty() {
                continue;
            }
            entries.push(RosterEntry {
                profile: Profile {
                    full_name: row.name,
                    occupation: row.occupation,
                },
                region: row.region.map(|region| region.to_ascii_lowercase()),
            });
        }

        Ok(Self { entries })
    }

    pub fn from_lines<R: BufRead>(reader: R) -> Result<Self, SourceError> {
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let name = line.trim();
            if name.is_empty() {
                continue;
            }
            entries.push(RosterEntry {
                profile: Profile::new(name),
                region: None,
            });
        }
        Ok(Self { entries })
    }

    pub fn from_profiles<I>(profiles: I) -> Self
    where
        I: IntoIterator<Item = Profile>,
    {
        let entries = profiles
            .into_iter()
            .map(|profile| RosterEntry {
                profile,
                region: None,
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DirectorySource for RosterSource {
    fn fetch_page(
        &mut self,
        segment: &Segment,
        offset: u32,
    ) -> Result<DirectoryPage, SourceError> {
        let profiles = self
            .entries
            .iter()
            .filter(|entry| entry.matches(&segment.facet))
            .skip(offset as usize)
            .take(segment.page_size as usize)
            .map(|entry| entry.profile.clone())
            .collect();

        Ok(DirectoryPage { profiles })
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Name", alias = "name")]
    name: String,
    #[serde(
        rename = "Occupation",
        alias = "occupation",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    occupation: Option<String>,
    #[serde(
        rename = "Region",
        alias = "region",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    region: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
