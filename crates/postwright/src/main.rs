use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Parser, ValueEnum};
use postwright::{
    ApiKey, EventInput, EventPostGenerator, GenerationResult, GeneratorConfig, ProviderId,
    ReportView, Submission, SubmissionReport, Tone, ValidationError,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "postwright",
    version,
    about = "Generate LinkedIn, Twitter and WhatsApp posts for an event"
)]
struct Cli {
    /// Event name, e.g. "Annual Tech Conference 2024"
    #[arg(long)]
    name: String,

    /// What the event is about
    #[arg(long)]
    description: String,

    /// Event date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Start time (HH:MM); defaults to now
    #[arg(long, value_parser = parse_time)]
    time: Option<NaiveTime>,

    #[arg(long)]
    venue: String,

    #[arg(long)]
    registration_link: Option<String>,

    /// Contact info shown in the posts
    #[arg(long)]
    contact: Option<String>,

    #[arg(long, value_enum, default_value_t = ProviderArg::Openai)]
    provider: ProviderArg,

    #[arg(long, value_enum, default_value_t = ToneArg::Professional)]
    tone: ToneArg,

    /// Also generate one promotional image (OpenAI only)
    #[arg(long)]
    image: bool,

    /// Provider API key; falls back to OPENAI_API_KEY, ANTHROPIC_API_KEY or
    /// GEMINI_API_KEY depending on --provider
    #[arg(long)]
    api_key: Option<String>,

    /// TOML file with timeouts, endpoints and platforms
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ProviderArg {
    Openai,
    Claude,
    Gemini,
}

impl From<ProviderArg> for ProviderId {
    fn from(value: ProviderArg) -> Self {
        match value {
            ProviderArg::Openai => ProviderId::OpenAi,
            ProviderArg::Claude => ProviderId::Claude,
            ProviderArg::Gemini => ProviderId::Gemini,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ToneArg {
    Professional,
    Casual,
    Enthusiastic,
    Sarcastic,
    Humorous,
    Inspirational,
    Urgent,
    Friendly,
}

impl From<ToneArg> for Tone {
    fn from(value: ToneArg) -> Self {
        match value {
            ToneArg::Professional => Tone::Professional,
            ToneArg::Casual => Tone::Casual,
            ToneArg::Enthusiastic => Tone::Enthusiastic,
            ToneArg::Sarcastic => Tone::Sarcastic,
            ToneArg::Humorous => Tone::Humorous,
            ToneArg::Inspirational => Tone::Inspirational,
            ToneArg::Urgent => Tone::Urgent,
            ToneArg::Friendly => Tone::Friendly,
        }
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
}

fn key_env_var(provider: ProviderId) -> &'static str {
    match provider {
        ProviderId::OpenAi => "OPENAI_API_KEY",
        ProviderId::Claude => "ANTHROPIC_API_KEY",
        ProviderId::Gemini => "GEMINI_API_KEY",
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = ?err, "postwright failed");
            eprintln!("Something went wrong while generating posts: {err}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    let provider = ProviderId::from(cli.provider);
    let api_key = cli
        .api_key
        .or_else(|| std::env::var(key_env_var(provider)).ok())
        .map(ApiKey::new)
        .unwrap_or_else(|| ApiKey::new(""));

    let now = Local::now();
    let mut event = EventInput::new(
        cli.name,
        cli.description,
        cli.date.unwrap_or_else(|| now.date_naive()),
        cli.time.unwrap_or_else(|| now.time()),
        cli.venue,
    );
    event.registration_link = cli.registration_link;
    event.contact = cli.contact;

    let submission = Submission::new(event, provider, api_key)
        .with_tone(cli.tone.into())
        .with_image(cli.image);

    let generator =
        EventPostGenerator::from_config(&config).context("couldn’t set up provider backends")?;

    let report = match generator.generate(&submission).await {
        Ok(report) => report,
        Err(err) => return Ok(validation_failed(&err)),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&ReportView::from(&report))?);
    } else {
        print_report(&report);
    }

    Ok(ExitCode::SUCCESS)
}

fn validation_failed(err: &ValidationError) -> ExitCode {
    eprintln!("{err}");
    ExitCode::from(2)
}

fn print_report(report: &SubmissionReport) {
    println!("📱 Generated posts ({}, {})", report.provider, report.tone);

    match &report.image {
        Some(Ok(url)) => println!("\n🖼️ Event image: {url}"),
        Some(Err(failure)) => println!("\n🖼️ {failure}"),
        None => {}
    }

    for result in &report.results {
        print_post(result);
    }
}

fn print_post(result: &GenerationResult) {
    println!("\n📊 {} Post", result.platform);
    println!("{}", result.display_text());

    if let Some(length) = result.length {
        if length.within_limit {
            println!("✅ Character count: {}/{}", length.count, length.limit);
        } else {
            println!(
                "⚠️ Character count: {}/{} (exceeds limit)",
                length.count, length.limit
            );
        }
    }
}
