use clap::Parser;
use personal_form::config::FormConfig;
use personal_form::logging;
use personal_form::runtime::Runtime;
use personal_form::state::app::AppState;
use personal_form::state::controller::FormController;
use personal_form::task::SaveExecutor;
use personal_form::terminal::Terminal;
use personal_form::{FieldValues, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const COMMAND_LINE_ORIGIN: &str = "<command line>";

/// Fill in and save a personal info form in the terminal.
#[derive(Parser, Debug)]
#[command(name = "personal-form", version, about, long_about = None)]
struct Cli {
    /// Path to a YAML or JSON config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Simulated save latency in milliseconds
    #[arg(long, value_name = "N")]
    save_delay_ms: Option<u64>,

    /// Log filter directive, e.g. `debug` or `personal_form=trace`
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the last save receipt as JSON on exit
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn apply(&self, config: &mut FormConfig) {
        if let Some(delay_ms) = self.save_delay_ms {
            config.save.delay_ms = delay_ms;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => FormConfig::load(path)?,
        None => FormConfig::default(),
    };
    config.apply_env();
    cli.apply(&mut config);
    // File values were checked on load and blank env values are skipped.
    config.check(Path::new(COMMAND_LINE_ORIGIN))?;
    logging::init(&config.logging)?;

    let prefill = config.prefill.clone().unwrap_or_else(FieldValues::new);
    let state = AppState::new(FormController::prefilled(&prefill));
    let executor = SaveExecutor::new(config.save.backend());
    let terminal = Terminal::new()?;

    let state = Runtime::new(state, terminal, executor).run()?;

    if cli.json {
        if let Some(receipt) = state.controller().last_receipt() {
            println!("{}", serde_json::to_string_pretty(receipt)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{COMMAND_LINE_ORIGIN, Cli};
    use clap::Parser;
    use personal_form::Error;
    use personal_form::config::FormConfig;
    use std::path::{Path, PathBuf};

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "personal-form",
            "--save-delay-ms",
            "5",
            "--log-level",
            "debug",
            "--log-file",
            "form.log",
        ]);
        let mut config = FormConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.save.delay_ms, 5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("form.log")));
        assert!(config.check(Path::new(COMMAND_LINE_ORIGIN)).is_ok());
    }

    #[test]
    fn blank_level_flag_fails_the_check() {
        let cli = Cli::parse_from(["personal-form", "--log-level", ""]);
        let mut config = FormConfig::default();
        cli.apply(&mut config);
        let err = config
            .check(Path::new(COMMAND_LINE_ORIGIN))
            .expect_err("blank level");
        let Error::Config { path, .. } = err else {
            panic!("expected a config error, got {err:?}");
        };
        assert_eq!(path, PathBuf::from("<command line>"));
    }
}
