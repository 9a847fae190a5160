use anyhow::{anyhow, Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use prakriti_engine::{classify, ClassificationSnapshot};
use prakriti_report::{merge, ProfileRecord, TemplateStore};
use serde_json::{json, Value};
use std::borrow::Cow;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Environment variable naming a template asset when `--templates` is absent
pub const TEMPLATES_ENV: &str = "PRAKRITI_TEMPLATES";

#[derive(Parser)]
#[command(name = "prakriti")]
#[command(about = "Dosha questionnaire classification and narrative reports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Template asset (overrides PRAKRITI_TEMPLATES; default: builtin templates)
    #[arg(long, global = true)]
    templates: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a 36-item answer vector
    Classify(ClassifyArgs),

    /// Merge narrative templates into a stored profile record
    Merge(MergeArgs),

    /// Load the template asset and report entry counts
    #[command(name = "check-templates")]
    CheckTemplates,
}

#[derive(Args)]
struct ClassifyArgs {
    /// Answers as a comma or whitespace separated list of 1/2/3
    #[arg(long, conflicts_with = "stdin")]
    answers: Option<String>,

    /// Read answers as a JSON array from stdin
    #[arg(long)]
    stdin: bool,

    /// Also merge narrative templates into the result
    #[arg(long)]
    merge: bool,
}

#[derive(Args)]
struct MergeArgs {
    /// Path to a profile record JSON file
    #[arg(long)]
    record: PathBuf,
}

pub fn main_entry() -> ExitCode {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match run(cli) {
        Ok(body) => {
            print_json(&body);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err:#}");
            print_json(&json!({ "status": "error", "message": format!("{err:#}") }));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Value> {
    let templates_path = resolve_templates_path(cli.templates);

    match cli.command {
        Commands::Classify(args) => run_classify(args, templates_path.as_deref()),
        Commands::Merge(args) => run_merge(&args, templates_path.as_deref()),
        Commands::CheckTemplates => run_check_templates(templates_path.as_deref()),
    }
}

fn run_classify(args: ClassifyArgs, templates_path: Option<&Path>) -> Result<Value> {
    let raw = if args.stdin {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read answers from stdin")?;
        serde_json::from_str::<Vec<i64>>(&input).context("stdin must be a JSON array of integers")?
    } else {
        let answers = args
            .answers
            .ok_or_else(|| anyhow!("Provide answers with --answers or --stdin"))?;
        parse_answer_list(&answers)?
    };

    let snapshot = classify(&raw)?;
    let record = ProfileRecord::from(&snapshot);
    let mut body = json!({
        "status": "ok",
        "snapshot": snapshot_json(&snapshot)?,
        "record": record,
    });

    if args.merge {
        let templates = load_templates(templates_path)?;
        body["report"] = serde_json::to_value(merge(&record, &*templates))?;
    }

    Ok(body)
}

fn run_merge(args: &MergeArgs, templates_path: Option<&Path>) -> Result<Value> {
    let raw = fs::read_to_string(&args.record)
        .with_context(|| format!("Failed to read record {}", args.record.display()))?;
    let record: ProfileRecord = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid profile record {}", args.record.display()))?;

    let templates = load_templates(templates_path)?;
    Ok(json!({
        "status": "ok",
        "report": merge(&record, &*templates),
    }))
}

fn run_check_templates(templates_path: Option<&Path>) -> Result<Value> {
    let templates = load_templates(templates_path)?;
    let source = templates_path.map_or_else(|| "builtin".to_string(), |p| p.display().to_string());
    Ok(json!({
        "status": "ok",
        "source": source,
        "stats": templates.stats(),
    }))
}

fn resolve_templates_path(flag: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| {
        env::var_os(TEMPLATES_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

fn load_templates(path: Option<&Path>) -> Result<Cow<'static, TemplateStore>> {
    match path {
        Some(path) => Ok(Cow::Owned(TemplateStore::load(path)?)),
        None => Ok(Cow::Borrowed(TemplateStore::builtin()?)),
    }
}

fn snapshot_json(snapshot: &ClassificationSnapshot) -> Result<Value> {
    let mut value = serde_json::to_value(snapshot)?;
    value["emotional_sentence"] = Value::from(snapshot.emotional_line.sentence());
    Ok(value)
}

/// Parse `1,2,3` or `1 2 3` into raw answer values
fn parse_answer_list(input: &str) -> Result<Vec<i64>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("Invalid answer token '{token}'"))
        })
        .collect()
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(err) => log::error!("Failed to serialize output: {err}"),
    }
}
