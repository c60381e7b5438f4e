use hebrew_lingua::{ActivityParams, AgeGroup, EngineConfig, GeneratedContent, HebrewEngine, SoundPosition};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage:
  inspect [--config <file>] [--snapshot <file>] <word>...
  inspect [--config <file>] [--snapshot <file>] --activity <file> [--age 2-3|3-4|4-6] [--sound <letter>] [--position initial|medial|final|any]";

#[derive(Default)]
struct Args {
    config: Option<PathBuf>,
    snapshot: Option<PathBuf>,
    activity: Option<PathBuf>,
    age: AgeGroup,
    sound: Option<String>,
    position: SoundPosition,
    words: Vec<String>,
}

fn parse_args() -> hebrew_lingua::Result<Option<Args>> {
    let mut args = Args::default();
    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        let mut value = |flag: &str| {
            raw.next().ok_or_else(|| {
                hebrew_lingua::EngineError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("{flag} needs a value"),
                ))
            })
        };
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            "--snapshot" => args.snapshot = Some(PathBuf::from(value("--snapshot")?)),
            "--activity" => args.activity = Some(PathBuf::from(value("--activity")?)),
            "--age" => args.age = value("--age")?.parse()?,
            "--sound" => args.sound = Some(value("--sound")?),
            "--position" => args.position = value("--position")?.parse()?,
            other => args.words.push(other.to_string()),
        }
    }
    if args.activity.is_none() && args.words.is_empty() {
        return Ok(None);
    }
    Ok(Some(args))
}

fn run(args: Args) -> hebrew_lingua::Result<()> {
    let config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    let engine = match &args.snapshot {
        Some(path) => HebrewEngine::from_snapshot_or_standard(path, config),
        None => HebrewEngine::new(std::sync::Arc::new(hebrew_lingua::Lexicon::standard()), config),
    };

    if let Some(path) = &args.activity {
        let content = GeneratedContent::from_json_str(&std::fs::read_to_string(path)?)?;
        let mut params = ActivityParams::hebrew(args.age);
        if let Some(sound) = &args.sound {
            params = params.with_target(sound, args.position);
        }
        let report = engine.validate_activity(&content, &params);
        print!("{}", report.summary());
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    for word in &args.words {
        let bundle = engine.analyze_word(word);
        println!("{}", serde_json::to_string_pretty(&bundle)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
        Err(e) => {
            eprintln!("[ERROR] {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("[ERROR] {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
