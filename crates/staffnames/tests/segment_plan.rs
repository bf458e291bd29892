use staffnames::segments::{plan, PlanError, PlanRequest, SearchMode, SegmentFacet};
use std::collections::HashSet;

#[test]
fn geo_and_keyword_requests_conflict_before_planning() {
    let request: PlanRequest =
        serde_json::from_str(r#"{"geoblast": true, "keywords": "sales"}"#).expect("valid json");
    assert_eq!(request.mode(), Err(PlanError::ConfigurationConflict));
    assert_eq!(plan(&request), Err(PlanError::ConfigurationConflict));
}

#[test]
fn geo_plan_yields_thirteen_disjoint_segments() {
    let segments = plan(&PlanRequest {
        geoblast: true,
        ..PlanRequest::default()
    })
    .expect("geo plan");
    assert_eq!(segments.len(), 13);

    let mut codes = HashSet::new();
    let mut countries = HashSet::new();
    for segment in &segments {
        match &segment.facet {
            SegmentFacet::Region { code, filter } => {
                assert!(codes.insert(*code));
                for token in filter.split('|') {
                    assert!(countries.insert(token), "{token} repeated");
                }
            }
            other => panic!("unexpected facet {other:?}"),
        }
    }
    assert!(segments
        .iter()
        .any(|segment| segment.facet.query_filter() == Some("fr:0|de:0")));
}

#[test]
fn keyword_mode_is_one_segment_per_keyword() {
    let request = PlanRequest {
        keywords: Some("sales, marketing".to_string()),
        ..PlanRequest::default()
    };
    assert_eq!(
        request.mode(),
        Ok(SearchMode::Keywords(vec![
            "sales".to_string(),
            "marketing".to_string()
        ]))
    );
    assert_eq!(plan(&request).expect("plan").len(), 2);
}

#[test]
fn default_mode_is_a_single_unfiltered_segment() {
    let segments = plan(&PlanRequest {
        depth: Some(4),
        ..PlanRequest::default()
    })
    .expect("plan");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].facet, SegmentFacet::Unfiltered);
    assert_eq!(segments[0].pages, 4);
}

#[test]
fn segments_serialize_with_a_kind_tag() {
    let segments = plan(&PlanRequest {
        keywords: Some("ops".to_string()),
        depth: Some(1),
        ..PlanRequest::default()
    })
    .expect("plan");
    let value = serde_json::to_value(&segments[0]).expect("serializes");
    assert_eq!(value["facet"]["kind"], "keyword");
    assert_eq!(value["facet"]["keyword"], "ops");
    assert_eq!(value["pages"], 1);
    assert_eq!(value["page_size"], 50);
}
