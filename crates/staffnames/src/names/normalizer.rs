use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Honorifics and credentials dropped from display names.
pub const TITLES: &[&str] = &[
    "mr",
    "miss",
    "mrs",
    "phd",
    "prof",
    "professor",
    "md",
    "dr",
    "mba",
];

const ACCENT_FOLDS: &[(&str, &str)] = &[
    ("àáâãäå", "a"),
    ("èéêë", "e"),
    ("ìíîï", "i"),
    ("òóôõö", "o"),
    ("ùúûü", "u"),
    ("ýÿ", "y"),
    ("ß", "ss"),
    ("ñ", "n"),
];

/// A display name reduced to lowercase ASCII letters, single spaces and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CleanName(String);

impl CleanName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CleanName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CleanName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a raw directory display name.
///
/// The steps run in a fixed order: lowercase, fold accented Latin letters,
/// drop parenthesised runs, keep only `[a-z -]`, strip whole-word titles and
/// collapse whitespace. The result may be empty; callers that need a usable
/// name go through [`super::split`], which rejects empty input.
///
/// Parenthesised runs are matched without nesting, so for `a (b (c) d)` only
/// `(c)` is removed and the outer parentheses are later discarded as
/// disallowed characters, leaving their contents in place.
pub fn normalize(raw: &str) -> CleanName {
    let lowered = raw.to_lowercase();
    let folded = fold_accents(&lowered);
    let without_parens = parenthetical_pattern().replace_all(&folded, "");
    let allowed: String = without_parens
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | ' ' | '-'))
        .collect();
    let without_titles = title_pattern().replace_all(&allowed, "");
    let collapsed = without_titles.split_whitespace().collect::<Vec<_>>().join(" ");

    CleanName(collapsed)
}

fn fold_accents(value: &str) -> String {
    let mut folded = String::with_capacity(value.len());
    for c in value.chars() {
        match fold_char(c) {
            Some(replacement) => folded.push_str(replacement),
            None => folded.push(c),
        }
    }
    folded
}

fn fold_char(c: char) -> Option<&'static str> {
    ACCENT_FOLDS
        .iter()
        .find(|(variants, _)| variants.contains(c))
        .map(|(_, replacement)| *replacement)
}

fn parenthetical_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\([^()]*\)").expect("parenthetical pattern compiles"))
}

fn title_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r"\b(?:{})\b", TITLES.join("|"));
        Regex::new(&pattern).expect("title pattern compiles")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_closed(value: &str) -> bool {
        value.chars().all(|c| matches!(c, 'a'..='z' | ' ' | '-'))
            && !value.contains("  ")
            && value.trim() == value
    }

    #[test]
    fn folds_accents_from_the_table() {
        assert_eq!(normalize("José").as_str(), "jose");
        assert_eq!(normalize("Ñúñez Großmann").as_str(), "nunez grossmann");
        assert_eq!(normalize("ÀÉÎÕÜ Ÿves").as_str(), "aeiou yves");
    }

    #[test]
    fn characters_outside_the_fold_table_are_dropped() {
        assert_eq!(normalize("Łukasz Wójcik").as_str(), "ukasz wojcik");
        assert_eq!(normalize("Zoë Çelik").as_str(), "zoe elik");
    }

    #[test]
    fn strips_titles_as_whole_words_only() {
        assert_eq!(normalize("John Smith PhD"), normalize("John Smith"));
        assert_eq!(normalize("Dr. Jane Doe, MBA").as_str(), "jane doe");
        assert_eq!(normalize("Prof Mrs Ada Lovelace").as_str(), "ada lovelace");
        assert_eq!(normalize("Andrew Drmond").as_str(), "andrew drmond");
        assert_eq!(normalize("Mdina Mrazek").as_str(), "mdina mrazek");
    }

    #[test]
    fn removes_parenthesised_runs() {
        assert_eq!(normalize("Robert (Bob) Jones").as_str(), "robert jones");
        assert_eq!(
            normalize("Alice Smith (she/her) (CISSP)").as_str(),
            "alice smith"
        );
    }

    #[test]
    fn nested_parentheses_only_lose_the_innermost_run() {
        assert_eq!(normalize("Ann (ex (old) corp) Lee").as_str(), "ann ex corp lee");
    }

    #[test]
    fn collapses_whitespace_and_keeps_hyphens() {
        assert_eq!(
            normalize("  Mary-Jane    Watson  ").as_str(),
            "mary-jane watson"
        );
        assert_eq!(normalize("Sam 😀 Lee, CPA").as_str(), "sam lee cpa");
    }

    #[test]
    fn credentials_only_name_is_empty() {
        assert!(normalize("(Recruiter)").is_empty());
        assert!(normalize("Dr. PhD, MBA").is_empty());
        assert!(normalize("  ").is_empty());
    }

    #[test]
    fn normalization_is_idempotent_and_closed() {
        let samples = [
            "José María García-López",
            "Dr. Hans Müller (Berlin)",
            "O'Brien, Conor - MBA",
            "  Ünal   Öztürk  ",
            "Ann (ex (old) corp) Lee",
            "smith-md",
            "李 Wei Zhang",
            "Jean-Luc Picard, PhD (Captain)",
            "---",
            "",
        ];

        for raw in samples {
            let once = normalize(raw);
            let twice = normalize(once.as_str());
            assert_eq!(once, twice, "normalizing {raw:?} twice changed the result");
            assert!(is_closed(once.as_str()), "{once:?} escaped [a-z -]");
        }
    }
}
