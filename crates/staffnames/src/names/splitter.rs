use super::normalizer::CleanName;
use super::NameError;
use serde::Serialize;

/// First, optional second, and last name parts of a cleaned display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SplitName {
    first: String,
    second: String,
    last: String,
}

impl SplitName {
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Second-to-last token for names with three or more tokens, otherwise empty.
    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn has_second(&self) -> bool {
        !self.second.is_empty()
    }
}

/// Split a cleaned name on spaces and hyphens.
///
/// With more than two tokens the first, second-to-last and last tokens are
/// kept; anything in between is discarded. A single token is used as both
/// first and last name.
pub fn split(clean: &CleanName) -> Result<SplitName, NameError> {
    let tokens: Vec<&str> = clean
        .as_str()
        .split([' ', '-'])
        .filter(|token| !token.is_empty())
        .collect();

    let (first, last) = match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => {
            return Err(NameError::InvalidName {
                raw: clean.as_str().to_string(),
            })
        }
    };

    let second = if tokens.len() > 2 {
        tokens[tokens.len() - 2]
    } else {
        ""
    };

    Ok(SplitName {
        first: first.to_string(),
        second: second.to_string(),
        last: last.to_string(),
    })
}
