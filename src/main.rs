use hideout_planner::adapters::inbound::EventScriptRunner;
use hideout_planner::adapters::outbound::console::StderrProgressReporter;
use hideout_planner::adapters::outbound::filesystem::JsonFileSelectionStore;
use hideout_planner::application::app::HideoutApp;
use hideout_planner::application::dto::OutputFormat;
use hideout_planner::application::factories::{
    DatasetSourceFactory, FormatterFactory, PresenterFactory,
};
use hideout_planner::application::read_models::{
    HideoutReadModelBuilder, ReadModelOptions, SummarySection,
};
use hideout_planner::application::use_cases::LoadHideoutUseCase;
use hideout_planner::cli::{Args, Command};
use hideout_planner::config::{self, ConfigFile};
use hideout_planner::ports::inbound::{HideoutInteractionPort, IgnoredReason, InteractionOutcome};
use hideout_planner::shared::error::{ExitCode, HideoutError};
use hideout_planner::shared::Result;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

const DEFAULT_DATASET: &str = "hideout.json";
const DEFAULT_STATE_FILE: &str = "hideout-planner.state.json";

/// Effective settings after merging config file and CLI flags
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    dataset: String,
    state_file: Option<PathBuf>,
    format: OutputFormat,
    color: bool,
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let args = Args::parse_args();
    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let settings = resolve_settings(&args, config.as_ref())?;
    tracing::debug!(?settings, "effective settings");

    // One-shot queries never touch the saved selection
    let store = match args.command {
        Command::Closure { .. } | Command::Summary { .. } => None,
        _ => settings.state_file.as_ref().map(JsonFileSelectionStore::new),
    };

    let source = DatasetSourceFactory::create(&settings.dataset)?;
    let loader = LoadHideoutUseCase::new(source, StderrProgressReporter::new());
    let mut app = HideoutApp::new();
    app.start(&loader, store).await?;
    let session = app.require_session_mut()?;

    let formatter = FormatterFactory::create(settings.format, settings.color);
    let presenter = PresenterFactory::for_output(settings.output.clone());

    let options = match &args.command {
        Command::Stations => ReadModelOptions {
            summary: SummarySection::Never,
            stations: true,
            edges: false,
        },
        Command::Closure { station } => {
            click_known(session, station, false)?;
            ReadModelOptions::summary_only(SummarySection::Never)
        }
        Command::Summary { stations } => {
            for station in stations {
                click_known(session, station, true)?;
            }
            ReadModelOptions::summary_only(SummarySection::Always)
        }
        Command::Show => ReadModelOptions::full(),
        Command::Session { script } => {
            let runner = EventScriptRunner::new(formatter.as_ref(), presenter.as_ref());
            let report = match script.as_deref() {
                Some(path) if path != Path::new("-") => {
                    let file = File::open(path).map_err(|e| HideoutError::FileReadError {
                        path: path.to_path_buf(),
                        details: e.to_string(),
                    })?;
                    runner.run(session, BufReader::new(file))?
                }
                _ => runner.run(session, io::stdin().lock())?,
            };
            tracing::info!(
                applied = report.applied,
                ignored = report.ignored,
                invalid = report.invalid,
                "session finished"
            );
            return Ok(());
        }
    };

    let model = HideoutReadModelBuilder::build(&*session, &options);
    presenter.present(&formatter.format(&model)?)?;
    Ok(())
}

/// Clicks `station`, turning an unknown id into an error
fn click_known<P>(port: &mut P, station: &str, extend: bool) -> Result<()>
where
    P: HideoutInteractionPort + ?Sized,
{
    match port.click(station, extend) {
        InteractionOutcome::Applied => Ok(()),
        InteractionOutcome::Ignored(IgnoredReason::UnknownStation(id)) => {
            Err(HideoutError::UnknownStation { id }.into())
        }
        InteractionOutcome::Ignored(reason) => Err(HideoutError::Validation {
            message: format!("click on '{}' was ignored: {}", station, reason),
        }
        .into()),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)
        }
    }
}

/// CLI flags win over the config file, which wins over defaults
fn resolve_settings(args: &Args, config: Option<&ConfigFile>) -> Result<Settings> {
    let dataset = args
        .dataset
        .clone()
        .or_else(|| config.and_then(|c| c.dataset.clone()))
        .unwrap_or_else(|| DEFAULT_DATASET.to_string());

    let format = match args.format {
        Some(format) => format,
        None => match config {
            Some(config) => config.output_format()?.unwrap_or_default(),
            None => OutputFormat::default(),
        },
    };

    let persist = !args.no_persist && config.and_then(|c| c.persist).unwrap_or(true);
    let state_file = persist.then(|| {
        args.state_file
            .clone()
            .or_else(|| config.and_then(|c| c.state_file.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE))
    });

    let color = !args.no_color
        && config.and_then(|c| c.color).unwrap_or(true)
        && std::env::var_os("NO_COLOR").is_none()
        && args.output.is_none()
        && io::stdout().is_terminal();

    Ok(Settings {
        dataset,
        state_file,
        format,
        color,
        output: args.output.clone(),
    })
}
