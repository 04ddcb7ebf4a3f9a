use crate::report::xlsx::TemplateKind;
use crate::types::goals::{Audience, BrandTone, Objective};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "campaign-scorer",
    version,
    about = "Score marketing campaign messages and export a confidence report workbook"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze campaigns and write the report workbook
    Analyze(AnalyzeCommand),
    /// Print the analysis prompt for a submission without analyzing it
    Prompt(PromptCommand),
    /// Compute a confidence score and verdict from six rubric scores
    Score(ScoreCommand),
    /// Write a blank input workbook
    Template(TemplateCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ObjectiveArg {
    Awareness,
    Consideration,
    Sales,
    Loyalty,
}

impl From<ObjectiveArg> for Objective {
    fn from(arg: ObjectiveArg) -> Self {
        match arg {
            ObjectiveArg::Awareness => Objective::Awareness,
            ObjectiveArg::Consideration => Objective::Consideration,
            ObjectiveArg::Sales => Objective::Sales,
            ObjectiveArg::Loyalty => Objective::Loyalty,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AudienceArg {
    None,
    General,
    Genz,
    Millennials,
    Parents,
    B2b,
    Smb,
    Custom,
}

impl From<AudienceArg> for Audience {
    fn from(arg: AudienceArg) -> Self {
        match arg {
            AudienceArg::None => Audience::None,
            AudienceArg::General => Audience::General,
            AudienceArg::Genz => Audience::Genz,
            AudienceArg::Millennials => Audience::Millennials,
            AudienceArg::Parents => Audience::Parents,
            AudienceArg::B2b => Audience::B2b,
            AudienceArg::Smb => Audience::Smb,
            AudienceArg::Custom => Audience::Custom,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ToneArg {
    None,
    Professional,
    Friendly,
    Humorous,
    Empathetic,
    Inspirational,
    Urgent,
    Custom,
}

impl From<ToneArg> for BrandTone {
    fn from(arg: ToneArg) -> Self {
        match arg {
            ToneArg::None => BrandTone::None,
            ToneArg::Professional => BrandTone::Professional,
            ToneArg::Friendly => BrandTone::Friendly,
            ToneArg::Humorous => BrandTone::Humorous,
            ToneArg::Empathetic => BrandTone::Empathetic,
            ToneArg::Inspirational => BrandTone::Inspirational,
            ToneArg::Urgent => BrandTone::Urgent,
            ToneArg::Custom => BrandTone::Custom,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TemplateArg {
    Keywords,
    Campaigns,
}

impl From<TemplateArg> for TemplateKind {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Keywords => TemplateKind::Keywords,
            TemplateArg::Campaigns => TemplateKind::Campaigns,
        }
    }
}

/// Campaigns, keywords and strategic context shared by `analyze` and `prompt`.
#[derive(Args)]
pub struct SubmissionArgs {
    /// Spreadsheet or CSV with "Campaign Message" and "Call to Action" columns
    #[arg(long)]
    pub campaigns: Option<PathBuf>,

    /// Single campaign message, used when no campaign file is given
    #[arg(long, requires = "cta")]
    pub message: Option<String>,

    /// Call to action for --message
    #[arg(long, requires = "message")]
    pub cta: Option<String>,

    /// Spreadsheet or CSV with a "Keyword" column
    #[arg(long)]
    pub keywords: Option<PathBuf>,

    /// Trending keyword, used when no keyword file is given (repeatable)
    #[arg(long = "keyword")]
    pub keyword: Vec<String>,

    #[arg(long, value_enum)]
    pub objective: Option<ObjectiveArg>,

    #[arg(long, value_enum)]
    pub audience: Option<AudienceArg>,

    /// Only used with --audience custom
    #[arg(long)]
    pub custom_audience: Option<String>,

    #[arg(long, value_enum)]
    pub tone: Option<ToneArg>,

    /// Only used with --tone custom
    #[arg(long)]
    pub custom_tone: Option<String>,

    #[arg(long)]
    pub key_message: Option<String>,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub submission: SubmissionArgs,

    /// Captured analysis payload (JSON) to score instead of calling a program
    #[arg(long, conflicts_with = "command")]
    pub responses: Option<PathBuf>,

    /// Program that reads the request on stdin and prints the payload
    #[arg(long)]
    pub command: Option<String>,

    /// Output workbook; defaults to the configured report file name
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct PromptCommand {
    #[command(flatten)]
    pub submission: SubmissionArgs,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[arg(long, allow_negative_numbers = true)]
    pub emotion: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub clarity: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub trend: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub shareability: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub cta: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub fit: f64,
}

#[derive(Args)]
pub struct TemplateCommand {
    #[arg(value_enum)]
    pub kind: TemplateArg,

    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}
