use number_words::cli::{parse_args, run};
use number_words::config::Settings;
use number_words::error;
use number_words::logging::{init_logging, LogConfig};
use std::env;
use std::io;

fn main() -> error::Result<()> {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    // Logs go to stderr; default is warnings only.
    // Override with RUST_LOG, e.g. RUST_LOG=number_words=debug
    if let Err(e) = init_logging(&LogConfig::from_env()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = parse_args(env::args().skip(1), Settings::from_env());

    let stdout = io::stdout();
    let stderr = io::stderr();
    let failures = run(&cli, &mut stdout.lock(), &mut stderr.lock())?;

    if failures > 0 {
        tracing::info!(failures, "Some inputs could not be converted");
    }

    Ok(())
}
