use crate::infra::{
    default_scoring_config, InMemoryApplicationStore, InMemoryNotificationPublisher,
    InMemoryProfileRepository,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use welfare_engine::advisor::domain::{
    Area, EducationLevel, FamilyMember, Gender, Occupation, Profile, UserId,
};
use welfare_engine::advisor::report::{CohortEntry, CohortReport};
use welfare_engine::advisor::{
    AdvisorService, AdvisoryReport, ApplicationStatus, ScenarioAdjustments, SchemeCatalog,
    ScoringEngine,
};
use welfare_engine::error::AppError;
use welfare_engine::roster::{RosterImport, RosterImporter, RosterIssue};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional enrollment roster CSV to seed the demo profiles.
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Application date for the tracking portion (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the application tracking portion of the demo.
    #[arg(long)]
    pub(crate) skip_applications: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CohortReportArgs {
    /// Enrollment roster CSV export to summarize
    #[arg(long)]
    pub(crate) roster: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AdviseArgs {
    /// Enrollment roster CSV holding the citizen to advise (sample households when omitted)
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Citizen id to advise, defaulting to the first profile
    #[arg(long)]
    pub(crate) citizen: Option<String>,
}

pub(crate) fn run_advise(args: AdviseArgs) -> Result<(), AppError> {
    let AdviseArgs { roster, citizen } = args;

    let (profiles, issues) = match roster {
        Some(path) => {
            let RosterImport { profiles, issues } = RosterImporter::from_path(path)?;
            (profiles, issues)
        }
        None => (sample_households(), Vec::new()),
    };

    if !issues.is_empty() {
        println!("Roster issues");
        for issue in &issues {
            println!("- row {}: {}", issue.row, issue.reason);
        }
    }

    let selected = match citizen {
        Some(wanted) => profiles.into_iter().find(|(user_id, _)| user_id.0 == wanted),
        None => profiles.into_iter().next(),
    };

    let (user_id, profile) = match selected {
        Some(found) => found,
        None => {
            println!("No matching citizen profile to advise");
            return Ok(());
        }
    };

    let service = AdvisorService::new(
        Arc::new(InMemoryProfileRepository::default()),
        Arc::new(InMemoryApplicationStore::default()),
        Arc::new(InMemoryNotificationPublisher::default()),
        default_scoring_config(),
    );

    let mut report = service.advise_profile(&profile, 0);
    report.user_id = Some(user_id);
    render_advisory(&report);

    Ok(())
}

pub(crate) fn run_cohort_report(args: CohortReportArgs) -> Result<(), AppError> {
    let RosterImport { profiles, issues } = RosterImporter::from_path(args.roster)?;

    let engine = ScoringEngine::new(default_scoring_config());
    let catalog = SchemeCatalog::standard();
    let entries: Vec<CohortEntry> = profiles
        .into_iter()
        .map(|(user_id, profile)| CohortEntry {
            user_id,
            profile,
            completed_applications: 0,
        })
        .collect();

    let report = CohortReport::build(&entries, catalog.schemes(), &engine);
    render_cohort_report(&report, &issues);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        roster,
        today,
        skip_applications,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("Citizen welfare advisory demo");

    let (citizen_profiles, roster_issues) = match roster {
        Some(path) => {
            let RosterImport { profiles, issues } = RosterImporter::from_path(path)?;
            println!("Data source: enrollment roster import");
            (profiles, issues)
        }
        None => {
            println!("Data source: built-in sample households (no roster provided)");
            (sample_households(), Vec::new())
        }
    };

    if !roster_issues.is_empty() {
        println!("\nRoster issues");
        for issue in &roster_issues {
            println!("- row {}: {}", issue.row, issue.reason);
        }
    }

    let profiles_store = Arc::new(InMemoryProfileRepository::default());
    let applications = Arc::new(InMemoryApplicationStore::default());
    let notifications = Arc::new(InMemoryNotificationPublisher::default());
    let service = Arc::new(AdvisorService::new(
        profiles_store,
        applications,
        notifications.clone(),
        default_scoring_config(),
    ));

    println!("\nEnrolling {} citizen profile(s)", citizen_profiles.len());
    let mut enrolled = Vec::new();
    for (user_id, profile) in citizen_profiles {
        let saved = match service.save_profile(user_id.clone(), profile) {
            Ok(saved) => saved,
            Err(err) => {
                println!("- {} enrollment failed: {}", user_id.0, err);
                continue;
            }
        };

        if saved.warnings.is_empty() {
            println!("- {} enrolled", user_id.0);
        } else {
            println!(
                "- {} enrolled with {} plausibility warning(s)",
                user_id.0,
                saved.warnings.len()
            );
            for warning in &saved.warnings {
                println!("    - {}", warning);
            }
        }
        enrolled.push(user_id);
    }

    let spotlight = match enrolled.first() {
        Some(user_id) => user_id.clone(),
        None => {
            println!("\nNo usable profiles to advise");
            return Ok(());
        }
    };

    let report = match service.advise(&spotlight) {
        Ok(report) => report,
        Err(err) => {
            println!("\nAdvisory unavailable: {}", err);
            return Ok(());
        }
    };
    render_advisory(&report);

    if skip_applications {
        return Ok(());
    }

    println!("\nApplication tracking demo");
    let scheme_id = match report.recommendations.first() {
        Some(recommendation) => recommendation.scheme.id,
        None => {
            println!("- No eligible schemes to apply for");
            return Ok(());
        }
    };

    let application = match service.apply(&spotlight, scheme_id, today) {
        Ok(application) => application,
        Err(err) => {
            println!("- Application rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "- {} applied to {} on {} -> status {}",
        spotlight.0,
        scheme_id,
        application.applied_on,
        application.status.label()
    );

    for status in [ApplicationStatus::Approved, ApplicationStatus::Completed] {
        match service.set_application_status(&application.id, status) {
            Ok(updated) => println!("- {} moved to {}", updated.id.0, updated.status.label()),
            Err(err) => {
                println!("- Status update failed: {}", err);
                return Ok(());
            }
        }
    }

    let events = notifications.events();
    if events.is_empty() {
        println!("- Citizen notifications: none dispatched");
    } else {
        println!("- Citizen notifications:");
        for event in events {
            println!("    - {} <- {}", event.user_id.0, event.message);
        }
    }

    match service.advise(&spotlight) {
        Ok(updated) => println!(
            "- Welfare score after completion bonus: {} (was {})",
            updated.score.total, report.score.total
        ),
        Err(err) => println!("- Follow-up advisory unavailable: {}", err),
    }

    println!("\nScenario simulation");
    let adjustments = ScenarioAdjustments {
        income_override: Some(600_000),
        age_offset: 5,
    };
    println!("- Adjustments: head income INR 600000, five years older");
    match service.simulate(&spotlight, &adjustments) {
        Ok(outcome) => {
            println!(
                "- Welfare score {} -> {} (delta {})",
                outcome.current_score.total, outcome.simulated_score.total, outcome.score_delta
            );
            if outcome.top_recommendations.is_empty() {
                println!("- Simulated eligibility: no schemes");
            } else {
                println!("- Simulated top recommendations:");
                for recommendation in &outcome.top_recommendations {
                    println!(
                        "    - {} (match {})",
                        recommendation.scheme.name, recommendation.match_score
                    );
                }
            }
        }
        Err(err) => println!("- Simulation unavailable: {}", err),
    }

    println!("\nCohort snapshot");
    match service.cohort() {
        Ok(cohort) => {
            let summary = cohort.summary();
            println!(
                "- {} profile(s) | average score {} | {} high need",
                summary.total_profiles, summary.average_score, summary.high_risk_profiles
            );
            match serde_json::to_string_pretty(&summary.insights()) {
                Ok(json) => println!("  Insights payload:\n{}", json),
                Err(err) => println!("  Insights payload unavailable: {}", err),
            }
        }
        Err(err) => println!("- Cohort unavailable: {}", err),
    }

    Ok(())
}

fn render_advisory(report: &AdvisoryReport) {
    match &report.user_id {
        Some(user_id) => println!("\nAdvisory for {}", user_id.0),
        None => println!("\nAdvisory"),
    }

    println!(
        "Household income: INR {} | welfare score {} ({} need)",
        report.household_income,
        report.score.total,
        report.score.risk_category.label()
    );
    println!(
        "Score components: income {} | dependents {} | insurance {} | occupation {} | education {}",
        report.score.income,
        report.score.dependents,
        report.score.insurance,
        report.score.occupation,
        report.score.education
    );

    if report.recommendations.is_empty() {
        println!("\nRecommended schemes: none eligible");
    } else {
        println!("\nRecommended schemes");
        for recommendation in &report.recommendations {
            println!(
                "- {} (match {})",
                recommendation.scheme.name, recommendation.match_score
            );
            println!("    {}", recommendation.reason);
        }
    }

    if report.coverage_gaps.is_empty() {
        println!("\nCoverage gaps: none");
    } else {
        println!("\nCoverage gaps");
        for gap in &report.coverage_gaps {
            println!("- {}", gap.label());
        }
    }

    if report.future_plan.is_empty() {
        println!("\nForward plan: nothing scheduled");
    } else {
        println!("\nForward plan");
        for entry in &report.future_plan {
            println!("- [{}] {}: {}", entry.year_range, entry.title, entry.action);
        }
    }

    if !report.warnings.is_empty() {
        println!("\nPlausibility warnings");
        for warning in &report.warnings {
            println!("- {}", warning);
        }
    }
}

fn render_cohort_report(report: &CohortReport, issues: &[RosterIssue]) {
    let summary = report.summary();
    let insights = summary.insights();

    println!("Cohort welfare report");
    println!(
        "- {} profile(s) | average score {} | {} high need ({}%)",
        summary.total_profiles,
        summary.average_score,
        summary.high_risk_profiles,
        summary.high_risk_pct
    );

    println!("\nRisk distribution");
    for band in &summary.risk_distribution {
        println!("- {}: {}", band.category_label, band.profiles);
    }

    println!("\nEnrollment by state");
    for entry in &summary.state_distribution {
        println!("- {}: {}", entry.state, entry.profiles);
    }

    if let Some(top) = &summary.top_scheme {
        println!(
            "\nMost recommended scheme: {} ({} profile(s))",
            top.scheme, top.profiles
        );
    }

    if summary.flagged_profiles.is_empty() {
        println!("\nFlagged profiles: none");
    } else {
        println!("\nFlagged profiles");
        for flagged in &summary.flagged_profiles {
            println!(
                "- {} ({} warning(s))",
                flagged.user_id.0, flagged.warning_count
            );
            for warning in &flagged.warnings {
                println!("    - {}", warning);
            }
        }
    }

    if issues.is_empty() {
        println!("\nRoster issues: none");
    } else {
        println!("\nRoster issues");
        for issue in issues {
            println!("- row {}: {}", issue.row, issue.reason);
        }
    }

    if !insights.observations.is_empty() {
        println!("\nObservations");
        for note in &insights.observations {
            println!("- {}", note);
        }
    }

    if !insights.recommended_actions.is_empty() {
        println!("\nRecommended actions");
        for action in &insights.recommended_actions {
            println!("- {}", action);
        }
    }
}

fn sample_households() -> Vec<(UserId, Profile)> {
    vec![
        (
            UserId("ctz-1001".to_string()),
            Profile {
                age: 45,
                income: 180_000,
                occupation: Occupation::Farmer,
                education: EducationLevel::Secondary,
                gender: Gender::Male,
                area: Area::Rural,
                state: "Bihar".to_string(),
                family_size: 5,
                family_members: vec![
                    FamilyMember {
                        occupation: Occupation::Student,
                        annual_income: 0,
                    },
                    FamilyMember {
                        occupation: Occupation::Housewife,
                        annual_income: 0,
                    },
                    FamilyMember {
                        occupation: Occupation::Student,
                        annual_income: 0,
                    },
                    FamilyMember {
                        occupation: Occupation::Farmer,
                        annual_income: 20_000,
                    },
                ],
                has_health_insurance: false,
                has_pension: false,
            },
        ),
        (
            UserId("ctz-1002".to_string()),
            Profile {
                age: 30,
                income: 900_000,
                occupation: Occupation::Salaried,
                education: EducationLevel::Postgraduate,
                gender: Gender::Female,
                area: Area::Urban,
                state: "Karnataka".to_string(),
                family_size: 2,
                family_members: vec![FamilyMember {
                    occupation: Occupation::Salaried,
                    annual_income: 600_000,
                }],
                has_health_insurance: true,
                has_pension: true,
            },
        ),
        (
            UserId("ctz-1003".to_string()),
            Profile {
                age: 20,
                income: 0,
                occupation: Occupation::Student,
                education: EducationLevel::HigherSecondary,
                gender: Gender::Male,
                area: Area::Urban,
                state: "Delhi".to_string(),
                family_size: 4,
                family_members: vec![
                    FamilyMember {
                        occupation: Occupation::Salaried,
                        annual_income: 250_000,
                    },
                    FamilyMember {
                        occupation: Occupation::Housewife,
                        annual_income: 0,
                    },
                    FamilyMember {
                        occupation: Occupation::Student,
                        annual_income: 0,
                    },
                ],
                has_health_insurance: true,
                has_pension: false,
            },
        ),
    ]
}
