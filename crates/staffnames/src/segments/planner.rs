use super::regions::{regions, GeoRegion};
use super::PlanError;
use serde::{Deserialize, Serialize};

/// Paging limits imposed by the directory search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchBudget {
    pub result_cap: u32,
    pub page_size: u32,
}

impl SearchBudget {
    pub const DEFAULT: SearchBudget = SearchBudget {
        result_cap: 1_000,
        page_size: 50,
    };

    /// Whole pages reachable before the result cap. Zero for an unusable budget.
    pub fn max_pages(&self) -> u32 {
        self.result_cap.checked_div(self.page_size).unwrap_or(0)
    }

    pub fn pages_for(&self, results: u32) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        results.div_ceil(self.page_size)
    }

    /// A budget must allow at least one full page.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.page_size == 0 || self.result_cap < self.page_size {
            return Err(PlanError::InvalidBudget {
                result_cap: self.result_cap,
                page_size: self.page_size,
            });
        }
        Ok(())
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Caller-supplied retrieval options. Geo and keyword modes are exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub geoblast: bool,
    /// Comma separated keyword list.
    pub keywords: Option<String>,
    /// Pages to request per segment.
    pub depth: Option<u32>,
    /// Headcount reported for the company, used to size unfiltered searches.
    pub staff_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    Unfiltered,
    Geo,
    Keywords(Vec<String>),
}

impl PlanRequest {
    pub fn mode(&self) -> Result<SearchMode, PlanError> {
        match (self.geoblast, self.keywords.as_deref()) {
            (true, Some(_)) => Err(PlanError::ConfigurationConflict),
            (true, None) => Ok(SearchMode::Geo),
            (false, Some(raw)) => {
                let keywords = split_keywords(raw);
                if keywords.is_empty() {
                    Err(PlanError::NoKeywords)
                } else {
                    Ok(SearchMode::Keywords(keywords))
                }
            }
            (false, None) => Ok(SearchMode::Unfiltered),
        }
    }
}

fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// What a segment filters the directory search on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentFacet {
    Unfiltered,
    Region {
        code: &'static str,
        filter: &'static str,
    },
    Keyword {
        keyword: String,
    },
}

impl SegmentFacet {
    /// Filter value handed to the directory service, if any.
    pub fn query_filter(&self) -> Option<&str> {
        match self {
            SegmentFacet::Unfiltered => None,
            SegmentFacet::Region { filter, .. } => Some(*filter),
            SegmentFacet::Keyword { keyword } => Some(keyword.as_str()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            SegmentFacet::Unfiltered => "all".to_string(),
            SegmentFacet::Region { code, .. } => format!("region {code}"),
            SegmentFacet::Keyword { keyword } => format!("keyword '{keyword}'"),
        }
    }
}

impl From<GeoRegion> for SegmentFacet {
    fn from(region: GeoRegion) -> Self {
        SegmentFacet::Region {
            code: region.code,
            filter: region.filter,
        }
    }
}

/// One independently retrievable slice of the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub facet: SegmentFacet,
    pub pages: u32,
    pub page_size: u32,
}

impl Segment {
    /// Result offsets for each page request.
    pub fn page_offsets(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.pages).map(move |page| page * self.page_size)
    }
}

/// Build the segment list for a request using the default search budget.
pub fn plan(request: &PlanRequest) -> Result<Vec<Segment>, PlanError> {
    plan_with_budget(request, SearchBudget::DEFAULT)
}

pub fn plan_with_budget(
    request: &PlanRequest,
    budget: SearchBudget,
) -> Result<Vec<Segment>, PlanError> {
    budget.validate()?;
    let mode = request.mode()?;
    let requested = match request.depth {
        Some(0) => return Err(PlanError::InvalidDepth),
        Some(depth) => Some(depth.min(budget.max_pages())),
        None => None,
    };

    let segment = |facet: SegmentFacet, pages: u32| Segment {
        facet,
        pages,
        page_size: budget.page_size,
    };
    let facet_pages = requested.unwrap_or_else(|| budget.max_pages());

    let segments = match mode {
        SearchMode::Unfiltered => {
            let pages = requested.unwrap_or_else(|| match request.staff_count {
                Some(staff) => budget.pages_for(staff).max(1).min(budget.max_pages()),
                None => budget.max_pages(),
            });
            vec![segment(SegmentFacet::Unfiltered, pages)]
        }
        SearchMode::Geo => regions()
            .map(|region| segment(region.into(), facet_pages))
            .collect(),
        SearchMode::Keywords(keywords) => keywords
            .into_iter()
            .map(|keyword| segment(SegmentFacet::Keyword { keyword }, facet_pages))
            .collect(),
    };

    Ok(segments)
}
