use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use staffnames::config::AppConfig;
use staffnames::error::AppError;
use staffnames::harvest::{HarvestReport, Harvester, OutputWriter, RosterSource};
use staffnames::names::{candidates_for, NameCandidates};
use staffnames::segments::{plan, PlanRequest, Segment};
use staffnames::telemetry;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "staffnames",
    about = "Generate probable corporate usernames from an employee directory",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Harvest a roster over a search plan and write username files
    Generate(GenerateArgs),
    /// Print the search segments a harvest would request
    Plan(PlanArgs),
    /// Print username candidates for individual names
    Mutate(MutateArgs),
}

#[derive(Args, Debug, Default)]
struct SearchArgs {
    /// Split the search across the fixed geographic regions
    #[arg(long, conflicts_with = "keywords")]
    geoblast: bool,
    /// Comma separated keywords, one search segment each
    #[arg(long)]
    keywords: Option<String>,
    /// Pages of 50 results to request per segment (max 20)
    #[arg(long)]
    depth: Option<u32>,
    /// Reported company headcount, used to size an unfiltered search
    #[arg(long)]
    staff_count: Option<u32>,
}

impl SearchArgs {
    fn into_request(self, default_depth: Option<u32>) -> PlanRequest {
        PlanRequest {
            geoblast: self.geoblast,
            keywords: self.keywords,
            depth: self.depth.or(default_depth),
            staff_count: self.staff_count,
        }
    }
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Exported directory roster (.csv with a Name column, or one name per line)
    #[arg(long)]
    roster: PathBuf,
    /// Company name used to prefix output files
    #[arg(long)]
    company: String,
    /// Email domain appended to every username
    #[arg(long)]
    domain: Option<String>,
    /// Directory for output files
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Print the harvest report as JSON
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Print segments as JSON
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args, Debug)]
struct MutateArgs {
    /// Display names to expand
    #[arg(required = true)]
    names: Vec<String>,
    /// Email domain appended to every username
    #[arg(long)]
    domain: Option<String>,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Generate(args) => run_generate(args, &config),
        Command::Plan(args) => run_plan(args, &config),
        Command::Mutate(args) => run_mutate(args, &config),
    }
}

fn run_generate(args: GenerateArgs, config: &AppConfig) -> Result<(), AppError> {
    let GenerateArgs {
        roster,
        company,
        domain,
        output_dir,
        json,
        search,
    } = args;

    let request = search.into_request(config.harvest.search_depth);
    let segments = plan(&request)?;
    let source = RosterSource::from_path(&roster)?;
    info!(roster = %roster.display(), entries = source.len(), segments = segments.len(), "starting harvest");

    let report = Harvester::new(source).run(&segments)?;

    let output_dir = output_dir.unwrap_or_else(|| config.harvest.output_dir.clone());
    let domain = domain.or_else(|| config.harvest.email_domain.clone());
    let writer = OutputWriter::new(output_dir, &company).with_domain(domain);
    let written = writer.write(&report)?;

    if json {
        print_json(&report)?;
    } else {
        render_report(&report, &written);
    }

    Ok(())
}

fn run_plan(args: PlanArgs, config: &AppConfig) -> Result<(), AppError> {
    let request = args.search.into_request(config.harvest.search_depth);
    let segments = plan(&request)?;

    if args.json {
        print_json(&segments)?;
    } else {
        render_plan(&segments);
    }

    Ok(())
}

fn run_mutate(args: MutateArgs, config: &AppConfig) -> Result<(), AppError> {
    let domain = args
        .domain
        .or_else(|| config.harvest.email_domain.clone());
    let mut results: Vec<NameCandidates> = Vec::new();

    for raw in &args.names {
        match candidates_for(raw) {
            Ok(result) => results.push(result),
            Err(err) => warn!(name = %raw, error = %err, "skipping name"),
        }
    }

    if args.json {
        return print_json(&results);
    }

    for result in &results {
        println!("{} -> {}", result.raw, result.clean);
        let lines = match &domain {
            Some(domain) => result.candidates.with_domain(domain),
            None => result.candidates.iter().map(str::to_string).collect(),
        };
        for line in lines {
            println!("  {line}");
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn render_plan(segments: &[Segment]) {
    println!("Search plan ({} segments)", segments.len());
    for segment in segments {
        let filter = segment.facet.query_filter().unwrap_or("-");
        println!(
            "- {}: {} pages of {} (filter {})",
            segment.facet.label(),
            segment.pages,
            segment.page_size,
            filter
        );
    }
}

fn render_report(report: &HarvestReport, written: &[PathBuf]) {
    let summary = &report.summary;
    println!("Harvest complete");
    println!(
        "Segments: {}, pages fetched: {}",
        summary.segments, summary.pages_fetched
    );
    println!(
        "Profiles: {} seen, {} unique, {} usable, {} skipped",
        summary.profiles_seen, summary.unique_profiles, summary.accepted, summary.rejected
    );

    if !report.rejected.is_empty() {
        println!("\nSkipped names");
        for rejected in &report.rejected {
            println!("- {} ({})", rejected.raw, rejected.reason);
        }
    }

    println!("\nFiles written");
    for path in written {
        println!("- {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_rejects_geoblast_with_keywords() {
        let parsed = Cli::try_parse_from(["staffnames", "plan", "--geoblast", "--keywords", "sales"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn configured_depth_is_used_when_flag_missing() {
        let search = SearchArgs::default();
        assert_eq!(search.into_request(Some(7)).depth, Some(7));

        let search = SearchArgs {
            depth: Some(2),
            ..SearchArgs::default()
        };
        assert_eq!(search.into_request(Some(7)).depth, Some(2));
    }

    #[test]
    fn generate_parses_search_flags() {
        let cli = Cli::try_parse_from([
            "staffnames",
            "generate",
            "--roster",
            "people.csv",
            "--company",
            "Acme",
            "--keywords",
            "sales,ops",
            "--depth",
            "3",
        ])
        .expect("parses");

        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.company, "Acme");
                let request = args.search.into_request(None);
                assert_eq!(request.keywords.as_deref(), Some("sales,ops"));
                assert_eq!(request.depth, Some(3));
                assert!(!request.geoblast);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
