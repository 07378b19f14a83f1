/// CLI argument parsing, help text and the per-argument conversion loop
use crate::config::{OutputFormat, RunMode, Settings};
use crate::error::Result;
use crate::models::ConversionResponse;
use crate::text_processing::inline_numbers::spell_numbers_in_text;
use crate::text_processing::number_formatter::parse;
use std::io::Write;

pub const USAGE: &str = "Usage: number_words <number> [number...]";

/// Parsed command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub help: bool,
    pub version: bool,
    pub settings: Settings,
    pub inputs: Vec<String>,
}

/// Split arguments into flags and inputs
///
/// Only the exact flags below are recognized. Everything else is an input,
/// including arguments that start with '-' such as "-13" or "--001000000".
pub fn parse_args<I, S>(args: I, defaults: Settings) -> CliArgs
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut cli = CliArgs {
        settings: defaults,
        ..CliArgs::default()
    };

    for arg in args {
        let arg = arg.into();
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "-v" | "--version" => cli.version = true,
            "--json" => cli.settings.output = OutputFormat::Json,
            "--text" => cli.settings.mode = RunMode::Text,
            _ => cli.inputs.push(arg),
        }
    }

    cli
}

/// Run the conversion loop over all inputs
///
/// Results go to `out`, per-argument failures to `err` as `Error:  <message>`.
/// A failing argument never stops the ones after it. Returns the number of
/// arguments that failed.
pub fn run<W, E>(cli: &CliArgs, out: &mut W, err: &mut E) -> Result<usize>
where
    W: Write,
    E: Write,
{
    if cli.help {
        print_help(out)?;
        return Ok(0);
    }

    if cli.version {
        print_version(out)?;
        return Ok(0);
    }

    if cli.inputs.is_empty() {
        writeln!(out, "{}", USAGE)?;
        return Ok(0);
    }

    let mut failures = 0;

    for input in &cli.inputs {
        let result = match cli.settings.mode {
            RunMode::Number => parse(input),
            RunMode::Text => Ok(spell_numbers_in_text(input)),
        };

        if result.is_err() {
            failures += 1;
        }

        match cli.settings.output {
            OutputFormat::Plain => match &result {
                Ok(words) => writeln!(out, "{}", words)?,
                Err(e) => writeln!(err, "Error:  {}", e)?,
            },
            OutputFormat::Json => {
                let response = ConversionResponse::from_result(input, &result);
                writeln!(out, "{}", serde_json::to_string(&response)?)?;
            }
        }
    }

    tracing::debug!(total = cli.inputs.len(), failures, "Processed all inputs");

    Ok(failures)
}

pub fn print_help<W: Write>(out: &mut W) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    writeln!(out, "Number Words v{}", version)?;
    writeln!(out, "Spell out integers in English words")?;
    writeln!(out)?;
    writeln!(out, "USAGE:")?;
    writeln!(out, "    number_words [OPTIONS] <number> [number...]")?;
    writeln!(out)?;
    writeln!(out, "OPTIONS:")?;
    writeln!(out, "    --json                One JSON object per input on stdout")?;
    writeln!(out, "    --text                Treat inputs as text and spell the numbers inside")?;
    writeln!(out, "    -h, --help            Print this help message")?;
    writeln!(out, "    -v, --version         Print version information")?;
    writeln!(out)?;
    writeln!(out, "EXAMPLES:")?;
    writeln!(out, "    number_words 5237")?;
    writeln!(out, "    # Five thousand two hundred thirty seven")?;
    writeln!(out)?;
    writeln!(out, "    number_words \"1,000,027,001\" \" - 13\"")?;
    writeln!(out, "    # One billion twenty seven thousand one")?;
    writeln!(out, "    # Minus thirteen")?;
    writeln!(out)?;
    writeln!(out, "    number_words --text \"Chapter 12 has 1,250 words\"")?;
    writeln!(out, "    # Chapter twelve has one thousand two hundred fifty words")?;
    writeln!(out)?;
    writeln!(out, "Accepted range: -2147483648 to 2147483647")?;
    writeln!(out)?;
    writeln!(out, "ENVIRONMENT VARIABLES:")?;
    writeln!(out, "    NUMBER_WORDS_OUTPUT              - Output format (plain/json)")?;
    writeln!(out, "    NUMBER_WORDS_MODE                - Input mode (number/text)")?;
    writeln!(out, "    NUMBER_WORDS_LOG_FORMAT          - Log format (compact/pretty/json)")?;
    writeln!(out, "    RUST_LOG                         - Log level (error/warn/info/debug/trace)")?;
    writeln!(out)?;
    writeln!(out, "CONFIGURATION:")?;
    writeln!(out, "    Settings can also be placed in a .env file in the working directory")?;
    Ok(())
}

pub fn print_version<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Number Words v{}", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
