use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use zapio::{Config, StudyMode, Zapio, ZapioError, logger};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Document to study (.pdf, .docx or .txt)
    document: PathBuf,

    /// Generate this content directly, skipping the selection screen
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Append logs to this file (verbosity via RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Flashcards,
    Quiz,
    Cheatsheet,
}

impl From<Mode> for StudyMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Flashcards => StudyMode::Flashcards,
            Mode::Quiz => StudyMode::Quiz,
            Mode::Cheatsheet => StudyMode::Cheatsheet,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ZapioError> {
    logger::init(args.log_file.as_deref())?;

    let config = Config::load()?;
    let zapio = Zapio::new(&args.document, args.mode.map(Into::into), &config)?;
    zapio.run().await
}
