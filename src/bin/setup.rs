use std::env;

use anyhow::{anyhow, Context, Result};
use skillgap::workspace::{config_file_path, ensure_workspace_structure, load_or_default, save, AppConfig};

fn main() -> Result<()> {
    ensure_workspace_structure()?;
    let args = CliArgs::parse()?;
    let config_path = config_file_path()?;
    let mut config = load_or_default()?;
    let changed = args.apply(&mut config)?;

    if changed || !config_path.exists() {
        save(&config)?;
        println!("SkillGap settings recorded at {}", config_path.display());
    } else {
        println!("SkillGap settings already configured.");
    }
    println!(
        "  questions per level: {}\n  max questions: {}\n  schedule weeks: {}\n  candidate name: {}",
        config.quiz.questions_per_level,
        config.quiz.max_questions,
        config.schedule.weeks,
        config.export.candidate_name
    );

    Ok(())
}

#[derive(Default)]
struct CliArgs {
    per_level: Option<usize>,
    max_questions: Option<usize>,
    weeks: Option<usize>,
    candidate: Option<String>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--per-level" => parsed.per_level = Some(number(args.next(), "--per-level")?),
                "--max-questions" => {
                    parsed.max_questions = Some(number(args.next(), "--max-questions")?)
                }
                "--weeks" => parsed.weeks = Some(number(args.next(), "--weeks")?),
                "--candidate" => {
                    let value = args
                        .next()
                        .context("Expected a name after --candidate")?;
                    parsed.candidate = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(parsed)
    }

    /// Applies overrides; returns whether anything changed.
    fn apply(&self, config: &mut AppConfig) -> Result<bool> {
        let mut changed = false;
        changed |= set_if_differs(&mut config.quiz.questions_per_level, self.per_level);
        changed |= set_if_differs(&mut config.quiz.max_questions, self.max_questions);
        changed |= set_if_differs(&mut config.schedule.weeks, self.weeks);
        changed |= set_if_differs(&mut config.export.candidate_name, self.candidate.clone());
        config.validate()?;
        Ok(changed)
    }
}

fn number(value: Option<String>, flag: &str) -> Result<usize> {
    let value = value.with_context(|| format!("Expected a number after {flag}"))?;
    value
        .parse()
        .with_context(|| format!("'{value}' is not a valid number for {flag}"))
}

fn set_if_differs<T: PartialEq>(slot: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) if *slot != value => {
            *slot = value;
            true
        }
        _ => false,
    }
}

fn print_usage() {
    println!("SkillGap setup");
    println!("Records quiz and report defaults in config.toml.");
    println!("Usage: cargo run --bin setup -- [options]");
    println!("Options:");
    println!("  --per-level <n>       Questions drawn per difficulty level (default: 5)");
    println!("  --max-questions <n>   Maximum quiz length (default: 25)");
    println!("  --weeks <n>           Study schedule length in weeks (default: 4)");
    println!("  --candidate <name>    Name printed on exported reports (default: Student)");
}
