use anyhow::Context;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trakt_proxy::error::AppError;
use trakt_proxy::infrastructure::config::{Config, LogFormat};
use trakt_proxy::infrastructure::http::ReqwestTransport;
use trakt_proxy::infrastructure::trakt::{TraktApi, TraktProxy};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "trakt-proxy")]
#[command(about = "Check Trakt credentials and connectivity")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the URL to open in a browser to authorize this client
    AuthUrl {
        /// Opaque value round-tripped by the authorization server
        #[arg(long, short = 's')]
        state: Option<String>,
    },
    /// Print the slug of the user owning TRAKT_ACCESS_TOKEN
    Whoami,
    /// Validate TRAKT_ACCESS_TOKEN against the Trakt API
    Test,
    /// Exchange TRAKT_REFRESH_TOKEN for a new token pair
    Refresh,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    init_logging(&config);

    match run(cli.command, &config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {:#}", e);
            let code = e.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code as u8)
        }
    }
}

async fn run(command: Command, config: &Config) -> anyhow::Result<ExitCode> {
    let transport = ReqwestTransport::new(config.http_timeout(), &config.http_user_agent)
        .map_err(AppError::from)?;
    let proxy = TraktProxy::new(Arc::new(transport));

    match command {
        Command::AuthUrl { state } => {
            let state = state.unwrap_or_else(|| Uuid::new_v4().to_string());
            println!("{}", proxy.get_oauth_request(&state).url());
        }
        Command::Whoami => {
            let token = require(&config.trakt_access_token, "TRAKT_ACCESS_TOKEN")?;
            match proxy.get_user_name(token).await {
                Some(slug) => println!("{}", slug),
                None => {
                    eprintln!("Could not resolve the Trakt user for this token");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Test => {
            let settings = config.trakt_settings();
            match proxy.test(&settings).await.into_failure() {
                None => println!("Trakt settings are valid"),
                Some(failure) => {
                    eprintln!("{}", failure);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Refresh => {
            let token = require(&config.trakt_refresh_token, "TRAKT_REFRESH_TOKEN")?;
            let refreshed = proxy
                .refresh_auth_token(token)
                .await
                .ok_or_else(|| AppError::ExternalService("Token renewal failed".to_string()))?;
            let body = serde_json::to_string_pretty(&refreshed)
                .context("Failed to render renewed tokens")?;
            println!("{}", body);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn require<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, AppError> {
    value
        .as_deref()
        .ok_or_else(|| AppError::Config(format!("{} is not set", name)))
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "trakt_proxy=info".into());

    // Logs go to stderr so stdout only carries command output
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
