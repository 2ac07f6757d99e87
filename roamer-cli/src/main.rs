//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use flexi_logger::Logger;

fn main() {
    if let Err(err) = run() {
        eprintln!("roamer: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Held for the life of the process so buffered records are flushed.
    let _logger = Logger::try_with_env_or_str("warn")?
        .log_to_stderr()
        .start()?;
    roamer_cli::run()?;
    Ok(())
}
