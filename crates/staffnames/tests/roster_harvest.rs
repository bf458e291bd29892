use staffnames::harvest::{Harvester, OutputWriter, RosterSource};
use staffnames::segments::{plan, PlanRequest};
use std::fs;
use std::io::Cursor;

const ROSTER: &str = "Name,Occupation,Region\n\
Rahul Kumar Sharma,Sales Director,r6\n\
Claire Dubois,Software Engineer,r8\n\
Hans Müller,Head of Sales,r8\n\
Rahul Kumar Sharma,Sales Director,r6\n\
(LinkedIn Member),,r0\n\
Jane Doe PhD,Researcher,r0\n";

#[test]
fn geo_harvest_merges_regions_and_skips_unusable_names() {
    let source = RosterSource::from_csv_reader(Cursor::new(ROSTER)).expect("roster parses");
    let segments = plan(&PlanRequest {
        geoblast: true,
        depth: Some(2),
        ..PlanRequest::default()
    })
    .expect("plan");

    let report = Harvester::new(source).run(&segments).expect("harvest");

    assert_eq!(report.summary.segments, 13);
    assert_eq!(report.summary.pages_fetched, 13);
    assert_eq!(report.summary.unique_profiles, 5);
    assert_eq!(report.summary.accepted, 4);
    assert_eq!(report.summary.rejected, 1);

    let all = report.all_candidates();
    assert!(all.contains("rsharma"));
    assert!(all.contains("rkumar"));
    assert!(all.contains("hmuller"));
    assert!(all.contains("jane.doe"));
    assert!(!all.iter().any(|candidate| candidate.contains("phd")));
}

#[test]
fn writer_emits_one_file_per_pattern_with_domain() {
    let source = RosterSource::from_csv_reader(Cursor::new(ROSTER)).expect("roster parses");
    let segments = plan(&PlanRequest::default()).expect("plan");
    let report = Harvester::new(source).run(&segments).expect("harvest");

    let scratch = tempfile::tempdir().expect("scratch dir");
    let dir = scratch.path().join("out");
    let writer = OutputWriter::new(&dir, "Acme Corp").with_domain(Some("acme.io".to_string()));
    let written = writer.write(&report).expect("files written");
    assert_eq!(written.len(), 8);

    let raw = fs::read_to_string(dir.join("acme-corp-rawnames.txt")).expect("raw names");
    assert_eq!(raw.lines().count(), 5);
    assert!(raw.lines().any(|line| line == "(LinkedIn Member)"));

    let flast = fs::read_to_string(dir.join("acme-corp-flast.txt")).expect("flast file");
    let lines: Vec<&str> = flast.lines().collect();
    assert!(lines.contains(&"rsharma@acme.io"));
    assert!(lines.contains(&"rkumar@acme.io"));
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted, "pattern files are sorted");

    let metadata = fs::read_to_string(dir.join("acme-corp-metadata.csv")).expect("metadata");
    assert!(metadata.starts_with("name,occupation\n"));
    assert!(metadata.contains("Claire Dubois,Software Engineer"));
}
