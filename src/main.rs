use clap::Parser;
use mead_calc::app::report;
use mead_calc::utils::error::ErrorSeverity;
use mead_calc::utils::logger::{self, LogFormat};
use mead_calc::utils::validation::Validate;
use mead_calc::{CliConfig, ConsoleSession, RecipeEngine, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, LogFormat::from_flag(config.log_json));

    tracing::info!("Starting mead-calc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> mead_calc::Result<()> {
    if let Some(topic) = config.info {
        println!("{}", topic.render());
        return Ok(());
    }

    let settings = match &config.config {
        Some(path) => {
            tracing::info!("Loading settings from: {}", path.display());
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };

    let policy = config.apply_overrides(settings.policy());
    policy.validate()?;
    tracing::debug!("Effective policy: {:?}", policy);

    let format = config.format.unwrap_or_else(|| settings.output_format());
    let engine = RecipeEngine::new(policy);

    match config.request(settings.default_unit()) {
        Some(request) => {
            let plan = engine.run(&request)?;
            print!("{}", report::render(&plan, format)?);
        }
        None => {
            let stdin = std::io::stdin();
            let mut console = ConsoleSession::new(stdin.lock(), std::io::stdout());
            console.run(&engine, format)?;
        }
    }

    Ok(())
}
