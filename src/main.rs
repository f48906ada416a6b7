use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::process::ExitCode;
use ucdnorm::command::{self, CommandError};

#[derive(Parser, Debug)]
#[command(version, about = "Unicode normalization and general-category lookup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize TEXT (or stdin when omitted) to the requested form.
    Normalize {
        #[arg(long, default_value = "nfc")]
        mode: String,
        #[arg(long, default_value = "strict")]
        profile: String,
        text: Option<String>,
    },
    /// Print the general category of every code point in TEXT.
    Categorize {
        #[arg(long, default_value = "strict")]
        profile: String,
        text: Option<String>,
    },
    /// Print the Unicode version of the compiled tables.
    Version,
    /// Print the build string, or answer one build-info query.
    BuildInfo { option: Option<String> },
    /// Print a package configuration value.
    Pkgconfig { key: Option<String> },
}

impl Command {
    /// Tcl-style word list for [`command::dispatch`].
    fn into_words(self) -> io::Result<Vec<Vec<u8>>> {
        let words: Vec<Vec<u8>> = match self {
            Command::Normalize {
                mode,
                profile,
                text,
            } => vec![
                b"normalize".to_vec(),
                b"-profile".to_vec(),
                profile.into_bytes(),
                b"-mode".to_vec(),
                mode.into_bytes(),
                text_or_stdin(text)?,
            ],
            Command::Categorize { profile, text } => vec![
                b"categorize".to_vec(),
                b"-profile".to_vec(),
                profile.into_bytes(),
                text_or_stdin(text)?,
            ],
            Command::Version => vec![b"version".to_vec()],
            Command::BuildInfo { option } => std::iter::once(b"build-info".to_vec())
                .chain(option.map(String::into_bytes))
                .collect(),
            Command::Pkgconfig { key } => std::iter::once(b"pkgconfig".to_vec())
                .chain(key.map(String::into_bytes))
                .collect(),
        };
        Ok(words)
    }
}

/// Stdin is read as raw bytes so the profile decides how malformed input is
/// handled.
fn text_or_stdin(text: Option<String>) -> io::Result<Vec<u8>> {
    match text {
        Some(text) => Ok(text.into_bytes()),
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let words = match cli.command.into_words() {
        Ok(words) => words,
        Err(err) => {
            eprintln!("ucdnorm: cannot read stdin: {err}");
            return ExitCode::FAILURE;
        }
    };

    match command::dispatch(&words) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if writeln!(stdout, "{output}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &CommandError) {
    tracing::debug!(error = ?err, "command failed");
    eprintln!("ucdnorm: {err}");
}
