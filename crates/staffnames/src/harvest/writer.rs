use super::HarvestReport;
use crate::names::MutationPattern;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write metadata CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes a harvest as flat text files named `<prefix>-<kind>.txt`.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
    prefix: String,
    domain: Option<String>,
}

impl OutputWriter {
    pub fn new<P: Into<PathBuf>>(dir: P, company: &str) -> Self {
        Self {
            dir: dir.into(),
            prefix: file_prefix(company),
            domain: None,
        }
    }

    /// Append `@domain` to every username written.
    pub fn with_domain(mut self, domain: Option<String>) -> Self {
        self.domain = domain
            .map(|domain| domain.trim().trim_start_matches('@').to_string())
            .filter(|domain| !domain.is_empty());
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn path_for(&self, kind: &str, extension: &str) -> PathBuf {
        self.dir.join(format!("{}-{kind}.{extension}", self.prefix))
    }

    /// Write raw names, metadata and one file per mutation pattern. Returns
    /// the paths written, in that order.
    pub fn write(&self, report: &HarvestReport) -> Result<Vec<PathBuf>, WriterError> {
        fs::create_dir_all(&self.dir)?;
        let mut written = Vec::new();

        let raw_path = self.path_for("rawnames", "txt");
        write_lines(
            &raw_path,
            report.profiles.iter().map(|profile| profile.full_name.as_str()),
        )?;
        written.push(raw_path);

        let metadata_path = self.path_for("metadata", "csv");
        let mut metadata = csv::Writer::from_path(&metadata_path)?;
        metadata.write_record(["name", "occupation"])?;
        for profile in &report.profiles {
            metadata.write_record([
                profile.full_name.as_str(),
                profile.occupation.as_deref().unwrap_or_default(),
            ])?;
        }
        metadata.flush()?;
        written.push(metadata_path);

        let by_pattern = report.candidates_by_pattern();
        for pattern in MutationPattern::ALL {
            let path = self.path_for(pattern.file_stem(), "txt");
            let usernames = by_pattern.get(&pattern).into_iter().flatten();
            let lines: Vec<String> = match &self.domain {
                Some(domain) => usernames
                    .map(|username| format!("{username}@{domain}"))
                    .collect(),
                None => usernames.cloned().collect(),
            };
            write_lines(&path, lines.iter().map(String::as_str))?;
            debug!(path = %path.display(), entries = lines.len(), "wrote pattern file");
            written.push(path);
        }

        Ok(written)
    }
}

fn write_lines<'a, I>(path: &Path, lines: I) -> Result<(), std::io::Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = BufWriter::new(fs::File::create(path)?);
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Lowercase, filesystem-safe form of a company name.
pub fn file_prefix(company: &str) -> String {
    let slug = company
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "company".to_string()
    } else {
        slug
    }
}
