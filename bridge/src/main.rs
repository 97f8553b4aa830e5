use certbridge::{cli, mount, ui, App, Config, Event, HttpClient, Page, SubmitOutcome};
use certbridge::cli::Command;
use api_core::CertificateApi;
use std::process;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = cli::parse_args();

    // Load configuration (use defaults unless config file is provided)
    let mut config = match &args.config_path {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => fail(&format!("Failed to load configuration: {}", e)),
        },
        None => Config::default(),
    };

    // Environment, then CLI overrides
    config.apply_env_overrides();
    config.apply_cli_overrides(&args);

    init_logging(&config.log.level);
    ui::set_colors(config.ui.color && ui::supports_colors());

    if let Err(e) = config.validate() {
        fail(&e.to_string());
    }

    ui::print_banner(env!("CARGO_PKG_VERSION"), &config.api.base_url);
    ui::print_config_summary(&config);

    let client: Arc<dyn CertificateApi> = match HttpClient::with_config(&config.api) {
        Ok(client) => Arc::new(client),
        Err(e) => fail(&format!("Failed to create HTTP client: {}", e)),
    };

    let page = Page::standard();
    let app = match mount(&page, client.clone()) {
        Ok(app) => app,
        Err(e) => fail(&format!("Failed to mount page: {}", e)),
    };

    let succeeded = run(&app, client.as_ref(), &args.command).await;
    if !succeeded {
        process::exit(1);
    }
}

async fn run(app: &App, client: &dyn CertificateApi, command: &Command) -> bool {
    match command {
        Command::AddBlock { .. } => {
            let mut event = Event::submit();
            let outcome = app.bridge().submit_add_block(&mut event, &command.form_data()).await;
            ui::print_response("Add Block", &app.bridge().add_block_response().inner_html());
            report(&outcome)
        }
        Command::Validate { .. } => {
            let mut event = Event::submit();
            let outcome = app
                .bridge()
                .submit_validate_certificate(&mut event, &command.form_data())
                .await;
            ui::print_response("Validate Certificate", &app.bridge().validate_block_response().inner_html());
            report(&outcome)
        }
        Command::Ping => match client.health().await {
            Ok(health) => {
                ui::print_status("✓", &format!("Service reachable: {}", health.message), ui::StatusType::Success);
                true
            }
            Err(e) => {
                ui::print_status("✗", &format!("Service check failed: {}", e), ui::StatusType::Error);
                error!("Service check failed: {}", e);
                false
            }
        },
        Command::Tabs { click } => {
            let tabs = app.tabs();
            let Some(link) = tabs.find_link(click) else {
                ui::print_status("✗", &format!("No tab link with href {}", click), ui::StatusType::Error);
                return false;
            };

            let mut event = Event::click();
            let target = tabs.click(link, &mut event);
            ui::print_panels(tabs.panels());
            if let Some(target) = target {
                let id = target.id().unwrap_or_default();
                ui::print_status("!", &format!("Panel #{} was not activated", id), ui::StatusType::Warning);
            }
            true
        }
    }
}

fn report<T>(outcome: &SubmitOutcome<T>) -> bool {
    match outcome {
        SubmitOutcome::Rendered(_) => {
            info!("Submission succeeded");
            ui::print_status("✓", "Submission succeeded", ui::StatusType::Success);
            true
        }
        SubmitOutcome::Rejected { status, detail } => {
            ui::print_status("✗", &format!("Rejected by service ({}): {}", status, detail), ui::StatusType::Error);
            false
        }
        SubmitOutcome::Unreachable { reason } => {
            ui::print_status("✗", &format!("Service unreachable: {}", reason), ui::StatusType::Error);
            false
        }
        SubmitOutcome::Malformed { reason } => {
            ui::print_status("✗", &format!("Unexpected response: {}", reason), ui::StatusType::Error);
            false
        }
    }
}

fn fail(message: &str) -> ! {
    ui::print_status("✗", message, ui::StatusType::Error);
    error!("{}", message);
    process::exit(1);
}

fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();
}
