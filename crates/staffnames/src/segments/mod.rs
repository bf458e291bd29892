//! Splitting one company search into segments that each stay under the
//! directory's result cap.

mod planner;
mod regions;

pub use planner::{
    plan, plan_with_budget, PlanRequest, SearchBudget, SearchMode, Segment, SegmentFacet,
};
pub use regions::{region, regions, GeoRegion, GEO_REGIONS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("geo and keyword segmentation cannot be combined")]
    ConfigurationConflict,
    #[error("keyword segmentation needs at least one non-empty keyword")]
    NoKeywords,
    #[error("search depth must be at least one page")]
    InvalidDepth,
    #[error("search budget of {result_cap} results cannot hold a page of {page_size}")]
    InvalidBudget { result_cap: u32, page_size: u32 },
}
