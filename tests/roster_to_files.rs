use staffnames::harvest::{Harvester, OutputWriter, RosterSource};
use staffnames::names::MutationPattern;
use staffnames::segments::{plan, PlanRequest};
use std::fs;

#[test]
fn plain_text_roster_becomes_pattern_files() {
    let dir = tempfile::tempdir().expect("scratch dir");
    let roster = dir.path().join("people.txt");
    fs::write(
        &roster,
        "Rahul Sharma\nProf. Ada King Lovelace\n\nJosé Álvarez (Madrid)\nRahul Sharma\n",
    )
    .expect("roster written");

    let source = RosterSource::from_path(&roster).expect("roster loads");
    assert_eq!(source.len(), 4);

    let segments = plan(&PlanRequest {
        staff_count: Some(4),
        ..PlanRequest::default()
    })
    .expect("plan");
    assert_eq!(segments[0].pages, 1);

    let report = Harvester::new(source).run(&segments).expect("harvest");
    assert_eq!(report.summary.unique_profiles, 3);

    let out = dir.path().join("out");
    let written = OutputWriter::new(&out, "Initech")
        .write(&report)
        .expect("files written");
    assert_eq!(written.len(), 2 + MutationPattern::ALL.len());

    let first_last = fs::read_to_string(out.join("initech-first.last.txt")).expect("first.last");
    assert_eq!(
        first_last.lines().collect::<Vec<_>>(),
        vec!["ada.king", "ada.lovelace", "jose.alvarez", "rahul.sharma"]
    );

    let first = fs::read_to_string(out.join("initech-first.txt")).expect("first");
    assert_eq!(first.lines().collect::<Vec<_>>(), vec!["ada", "jose", "rahul"]);
}

#[test]
fn keyword_conflict_stops_before_any_io() {
    let request = PlanRequest {
        geoblast: true,
        keywords: Some("sales".to_string()),
        ..PlanRequest::default()
    };
    assert!(plan(&request).is_err());
}
