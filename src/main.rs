use aibom_policy::adapters::outbound::console::StderrProgressReporter;
use aibom_policy::adapters::outbound::filesystem::FileSystemReader;
use aibom_policy::aibom::services::RuleRegistry;
use aibom_policy::application::dto::EvaluationRequest;
use aibom_policy::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use aibom_policy::application::use_cases::EvaluatePoliciesUseCase;
use aibom_policy::cli::Args;
use aibom_policy::config::{self, ConfigFile, RunOptions, CONFIG_FILENAME};
use aibom_policy::ports::inbound::PolicyEvaluationPort;
use aibom_policy::shared::error::ExitCode;
use aibom_policy::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Installs the stderr subscriber; `RUST_LOG` takes precedence over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let registry = RuleRegistry::with_builtin_rules();

    if args.list_rules {
        for rule_type in registry.rule_types() {
            println!("{}", rule_type);
        }
        return Ok(ExitCode::Success);
    }

    let config = load_config(&args)?;
    let options = RunOptions::merge(&args, config.as_ref())?;
    tracing::debug!(?options, "effective options");

    let reader = FileSystemReader::new();
    let use_case =
        EvaluatePoliciesUseCase::new(reader, reader, StderrProgressReporter::new(), registry);

    let request = EvaluationRequest::new(options.bom.clone(), options.policies.clone());
    let response = use_case.evaluate(request)?;

    eprintln!("{}", FormatterFactory::progress_message(options.format));
    let colored =
        !options.no_color && options.output.is_none() && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(options.format, colored);
    let rendered = formatter.format(&response.report)?;

    let presenter = PresenterFactory::create(PresenterType::from(options.output.clone()));
    presenter.present(&rendered)?;

    Ok(if response.has_failures() {
        ExitCode::PolicyViolations
    } else {
        ExitCode::Success
    })
}

/// Explicit `--config` must exist; otherwise the working directory is searched
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = args.config.as_deref() {
        let config = config::load_config_from_path(path)?;
        eprintln!("⚙️  Loaded config from: {}", path.display());
        return Ok(Some(config));
    }

    let discovered = config::discover_config(Path::new("."))?;
    if discovered.is_some() {
        eprintln!("⚙️  Auto-discovered config file: {}", CONFIG_FILENAME);
    }
    Ok(discovered)
}
