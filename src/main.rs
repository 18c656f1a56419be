//! Hipsum - hipster ipsum for your documents
//!
//! Terminal host for the generate command: loads a document, asks for a
//! unit and a count, and replaces the selection with generated text.

use anyhow::{bail, Context, Result};
use clap::Parser;
use hipsum::config::{config_path, Config};
use hipsum::core::{HipsumClient, Style, Unit};
use hipsum::host::{
    ProgressReporter, Selection, SilentProgress, SpinnerProgress, TerminalPrompter, TextBuffer,
};
use hipsum::{activate, CommandRegistry, GenerateCommand, Outcome, COMMAND_ID};
use std::fs::File;
use std::io::{BufReader, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Document to edit (reads stdin and writes stdout when omitted)
    file: Option<PathBuf>,

    /// Selection to replace, one-based: LINE:COL or LINE:COL-LINE:COL (default: end of document)
    #[arg(short, long)]
    selection: Option<Selection>,

    /// Answer the unit prompt up front
    #[arg(short, long, value_enum)]
    unit: Option<Unit>,

    /// Answer the count prompt up front
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    count: Option<i64>,

    /// Text style requested from the generator
    #[arg(long, value_enum)]
    style: Option<Style>,

    /// Generator endpoint
    #[arg(long, env = "HIPSUM_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (0 disables it)
    #[arg(long)]
    timeout: Option<u64>,

    /// Ask the generator to start with "Lorem ipsum"
    #[arg(long)]
    start_with_lorem: Option<bool>,

    /// Config file (default: platform config dir, or HIPSUM_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the edited document instead of writing FILE
    #[arg(long)]
    stdout: bool,

    /// Hide the progress spinner
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Where prompt answers are read from when stdin carries the document
    #[arg(long, env = "HIPSUM_TTY", default_value = "/dev/tty", hide = true)]
    tty: PathBuf,
}

impl Args {
    /// Both prompts answered on the command line
    fn fully_answered(&self) -> bool {
        self.unit.is_some() && self.count.is_some()
    }

    fn apply_to(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(style) = self.style {
            config.style = style;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if self.start_with_lorem.is_some() {
            config.start_with_lorem = self.start_with_lorem;
        }
    }
}

/// Prompter for this run. With a file, answers come from stdin; without
/// one, stdin is the document and answers come from the terminal device.
fn build_prompter(args: &Args) -> Result<TerminalPrompter> {
    let prompter = if args.file.is_some() {
        TerminalPrompter::stdin()
    } else if args.fully_answered() {
        TerminalPrompter::detached()
    } else {
        let tty = match File::open(&args.tty) {
            Ok(tty) => tty,
            Err(e) => bail!(
                "stdin holds the document and {} cannot be opened for prompts ({e}); \
                 pass --unit and --count",
                args.tty.display()
            ),
        };
        debug!("⌨️ Prompting on {}", args.tty.display());
        TerminalPrompter::new(
            Some(Box::new(BufReader::new(tty))),
            Box::new(std::io::stderr()),
        )
    };

    let prompter = match args.unit {
        Some(unit) => prompter.with_pick_answer(unit.id()),
        None => prompter,
    };
    Ok(match args.count {
        Some(count) => prompter.with_input_answer(count.to_string()),
        None => prompter,
    })
}

fn init_logging(verbose: bool, log_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .with_context(|| {
        let path = args.config.clone().unwrap_or_else(config_path);
        format!("failed to load config from {}", path.display())
    })?;
    args.apply_to(&mut config);

    init_logging(args.verbose, &config.log_level);
    debug!("🔧 Config: {:?}", config);

    let prompter = build_prompter(&args)?;

    let source = match &args.file {
        Some(file) => std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read document from stdin")?;
            text
        }
    };
    let mut buffer = TextBuffer::new(source);
    if let Some(selection) = args.selection {
        buffer.set_selection(selection);
    }

    let progress: Arc<dyn ProgressReporter> = if args.quiet || !std::io::stderr().is_terminal() {
        Arc::new(SilentProgress)
    } else {
        Arc::new(SpinnerProgress::new())
    };

    let client = HipsumClient::new(&config).context("failed to set up the hipsum client")?;
    let command = GenerateCommand::new(Arc::new(client), Arc::new(prompter), progress)
        .with_options(config.request_options())
        .with_single_flight(config.single_flight);

    let mut registry = CommandRegistry::new();
    activate(&mut registry, command);

    let outcome = registry.execute(COMMAND_ID, &mut buffer).await?;
    if let Outcome::Inserted { blocks, .. } = &outcome {
        info!("📝 {} block(s) inserted", blocks);
    }

    let text = buffer.into_text();
    match (&args.file, args.stdout) {
        (Some(file), false) => {
            if matches!(outcome, Outcome::Inserted { .. }) {
                std::fs::write(file, text)
                    .with_context(|| format!("failed to write {}", file.display()))?;
            }
        }
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
