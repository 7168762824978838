use anyhow::Result;
use clap::Parser;
use repo_shell::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Routes log::info!() etc. to the debug log file; RUST_LOG also mirrors to stderr.
    // --log-level takes precedence, then RUST_LOG, then config (applied in cli::run).
    repo_shell::debug::init_log_bridge(cli.log_level);

    log::info!("Starting repo-shell {}", repo_shell::VERSION);

    match cli::run(cli) {
        Ok(0) => Ok(()),
        // Non-zero exit without an error: the command already reported why
        Ok(code) => {
            log::Log::flush(log::logger());
            std::process::exit(code);
        }
        Err(e) => {
            eprintln!("repo-shell: error: {e:#}");
            Err(e)
        }
    }
}
