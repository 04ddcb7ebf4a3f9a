mod analyze;
mod cli;
mod config;
mod error;
mod import;
mod instructions;
mod report;
mod telemetry;
mod types;

use crate::analyze::collaborator::{
    AnalysisCollaborator, AnalysisRequest, ExternalCommand, ResponseFile,
};
use crate::error::{Result, ScorerError};
use crate::types::campaign::CampaignInput;
use crate::types::config::ScorerConfig;
use crate::types::goals::{CampaignGoalDetails, Objective};
use crate::types::scoring::{RubricScore, RubricScores};
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WEAK_VERDICT: i32 = 1;
    pub const INPUT_ERROR: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

/// A fully resolved submission, before validation.
struct Submission {
    objective: Option<Objective>,
    details: CampaignGoalDetails,
    campaigns: Vec<CampaignInput>,
    keywords: Vec<String>,
}

fn load_submission(args: &cli::SubmissionArgs, cfg: &ScorerConfig) -> Result<Submission> {
    let objective = args.objective.map(Objective::from).or(cfg.objective());

    let mut details = cfg.goal_details();
    if let Some(audience) = args.audience {
        details = details.with_target_audience(audience.into());
    }
    if let Some(text) = &args.custom_audience {
        details = details.with_custom_target_audience(text.clone());
    }
    if let Some(tone) = args.tone {
        details = details.with_brand_tone(tone.into());
    }
    if let Some(text) = &args.custom_tone {
        details = details.with_custom_brand_tone(text.clone());
    }
    if let Some(text) = &args.key_message {
        details = details.with_key_message(text.clone());
    }

    let campaigns = match (&args.campaigns, &args.message, &args.cta) {
        (Some(path), _, _) => import::import_campaigns(&import::sheet::read_rows(path)?),
        (None, Some(message), Some(cta)) if !message.trim().is_empty() && !cta.trim().is_empty() => {
            vec![CampaignInput::new(message.clone(), cta.clone())]
        }
        _ => Vec::new(),
    };

    let keywords = match &args.keywords {
        Some(path) => import::import_keywords(&import::sheet::read_rows(path)?),
        None => args
            .keyword
            .iter()
            .filter(|keyword| !keyword.is_empty())
            .cloned()
            .collect(),
    };

    analyze::validate_submission(&campaigns, &keywords)?;
    tracing::debug!(
        campaigns = campaigns.len(),
        keywords = keywords.len(),
        "submission accepted"
    );
    Ok(Submission {
        objective,
        details,
        campaigns,
        keywords,
    })
}

fn select_collaborator(
    cmd: &cli::AnalyzeCommand,
    cfg: &ScorerConfig,
) -> Result<Box<dyn AnalysisCollaborator>> {
    if let Some(path) = &cmd.responses {
        return Ok(Box::new(ResponseFile::new(path)));
    }
    let command_line = cmd
        .command
        .as_deref()
        .or(cfg.collaborator_command())
        .ok_or_else(|| {
            ScorerError::Validation(
                "no analysis collaborator configured; pass --responses or --command".to_string(),
            )
        })?;
    let command = ExternalCommand::parse(command_line).ok_or_else(|| {
        ScorerError::Validation("collaborator command cannot be empty".to_string())
    })?;
    Ok(Box::new(command))
}

fn run_analyze(cmd: cli::AnalyzeCommand, cfg: &ScorerConfig, cwd: &Path) -> Result<i32> {
    let submission = load_submission(&cmd.submission, cfg)?;
    let collaborator = select_collaborator(&cmd, cfg)?;

    let instruction_text = instructions::compile(submission.objective, &submission.details);
    let prompt = instructions::prompt::build_prompt(
        &instruction_text,
        &submission.campaigns,
        &submission.keywords,
    )?;
    let request = AnalysisRequest {
        requested_at: chrono::Utc::now(),
        objective: submission.objective,
        campaigns: submission.campaigns,
        keywords: submission.keywords,
        instructions: instruction_text,
        prompt,
    };

    let records = analyze::analyze(collaborator.as_ref(), &request)?;
    let grid = report::grid::serialize(&records);

    let out = cmd.out.unwrap_or_else(|| cwd.join(cfg.report_file_name()));
    report::xlsx::write_report(&grid, &out, cfg.sheet_name())?;

    let summary = report::RunSummary::new(
        submission.objective,
        out.display().to_string(),
        cfg.sheet_name(),
        &records,
    );
    let output_format = match cmd.format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    };
    println!("{}", report::render(&summary, output_format)?);

    if summary.has_weak() {
        Ok(exit_code::WEAK_VERDICT)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn run_score(cmd: &cli::ScoreCommand) -> Result<i32> {
    let scores = RubricScores {
        emotion: RubricScore::new(cmd.emotion, ""),
        clarity_and_impact: RubricScore::new(cmd.clarity, ""),
        trend_relevance: RubricScore::new(cmd.trend, ""),
        shareability: RubricScore::new(cmd.shareability, ""),
        cta_strength: RubricScore::new(cmd.cta, ""),
        subjective_fit: RubricScore::new(cmd.fit, ""),
    };
    let outcome = analyze::scoring::score(&scores)?;
    println!("confidence: {:.2}", outcome.confidence);
    println!("verdict: {}", outcome.verdict.badge());
    Ok(exit_code::SUCCESS)
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(&cwd)?;
    telemetry::init(&telemetry::resolve_level(
        cli.verbose,
        cli.quiet,
        cfg.log_level(),
    ))?;
    for source in &cfg.sources {
        tracing::debug!(path = %source.display(), "merged config file");
    }

    match cli.command {
        cli::Commands::Analyze(cmd) => run_analyze(cmd, &cfg, &cwd),
        cli::Commands::Prompt(cmd) => {
            let submission = load_submission(&cmd.submission, &cfg)?;
            let instruction_text =
                instructions::compile(submission.objective, &submission.details);
            let prompt = instructions::prompt::build_prompt(
                &instruction_text,
                &submission.campaigns,
                &submission.keywords,
            )?;
            print!("{prompt}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => run_score(&cmd),
        cli::Commands::Template(cmd) => {
            let path = report::xlsx::write_template(cmd.kind.into(), &cmd.dir)?;
            println!("template written: {}", path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_input_error() {
                exit_code::INPUT_ERROR
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
