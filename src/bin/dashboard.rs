//! Terminal front end for the command center dashboard.
//!
//! Runs the same flows as the browser page against a backend, keeping the
//! bearer token in a per-origin file between invocations.
//!
//! # Usage
//!
//! ```bash
//! # Log in (prompts for anything not given on the command line)
//! cargo run --bin dashboard -- login --email admin@example.com
//!
//! # Show whatever the page would show on load
//! cargo run --bin dashboard -- show
//!
//! # Refresh the system status panel
//! cargo run --bin dashboard -- status
//!
//! # Ask the assistant
//! cargo run --bin dashboard -- ask summarize the open incidents
//!
//! # Forget the stored token
//! cargo run --bin dashboard -- logout
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_BASE_URL` (optional): backend origin, overridden by `--base-url`
//! - `DASHBOARD_SESSION_DIR` (optional): where session tokens are kept
//! - `DASHBOARD_REQUEST_TIMEOUT_SECS` (optional): per-request timeout
//!
//! Exits with status 1 when the command ends with an error on screen.

use command_center::client::{
    ClientConfig, Dashboard, DashboardView, Panel, SessionStore, Tone, View, ViewState,
};
use command_center::telemetry::{self, LogTarget};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use std::process::ExitCode;
use std::sync::Arc;
use url::Url;

/// Command center dashboard in the terminal.
#[derive(Parser)]
#[command(name = "dashboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend origin, e.g. http://127.0.0.1:8000
    #[arg(long, global = true)]
    base_url: Option<Url>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        email: Option<String>,

        /// Password (prompted without echo if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Check the backend status
    Status,

    /// Send a prompt to the assistant
    Ask {
        /// Prompt text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },

    /// Show the initial view for the stored session
    Show,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    config.validate()?;

    telemetry::init_with_target(&config.log_level, &config.log_format, LogTarget::Stderr);

    let session: Arc<dyn SessionStore> = Arc::new(config.session_store());
    let mut dashboard = Dashboard::new(config.api_client()?, session, ViewState::new());

    match cli.command {
        Commands::Login { email, password } => login(&mut dashboard, email, password).await?,
        Commands::Logout => logout(&mut dashboard),
        Commands::Status => status(&mut dashboard).await,
        Commands::Ask { prompt } => ask(&mut dashboard, prompt.join(" ")).await,
        Commands::Show => show(&mut dashboard).await,
    }

    if has_visible_error(dashboard.view()) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

async fn login(
    dashboard: &mut Dashboard<ViewState>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("Email")
            .allow_empty(true)
            .interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
    };

    let view = dashboard.view_mut();
    view.set_email(email.as_str());
    view.set_password(password);

    dashboard.handle_login().await;

    let view = dashboard.view();
    if view.visible_view() == View::Dashboard {
        println!("{} {}", "✓".green().bold(), format!("Logged in as {email}").bold());
        println!();
        print_panel("Status", view.status());
    } else {
        print_panel("Login", view.login_error());
    }

    Ok(())
}

fn logout(dashboard: &mut Dashboard<ViewState>) {
    dashboard.handle_logout();
    println!("{}", "Logged out".yellow());
}

async fn status(dashboard: &mut Dashboard<ViewState>) {
    dashboard.load_system_status().await;
    print_panel("Status", dashboard.view().status());
}

async fn ask(dashboard: &mut Dashboard<ViewState>, prompt: String) {
    if dashboard.session().get().is_none() {
        eprintln!(
            "{}",
            "No session token stored, run `dashboard login` first".dimmed()
        );
    }

    dashboard.view_mut().set_prompt(prompt);
    println!("{}", "Processing...".dimmed());

    dashboard.handle_assistant().await;
    print_panel("Assistant", dashboard.view().response());
}

async fn show(dashboard: &mut Dashboard<ViewState>) {
    dashboard.bootstrap().await;

    let view = dashboard.view();
    match view.visible_view() {
        View::Login => {
            println!("{}", "Not logged in".yellow().bold());
            println!("Run `dashboard login` to sign in.");
        }
        View::Dashboard => {
            println!("{}", "Dashboard".bold());
            println!();
            print_panel("Status", view.status());
        }
    }
}

fn print_panel(title: &str, panel: &Panel) {
    if panel.content().is_empty() {
        return;
    }

    println!("{}", format!("{title}:").bold());
    for line in panel.content().lines() {
        let line = match panel.tone() {
            Tone::Success => line.green(),
            Tone::Error => line.red(),
            Tone::Neutral => line.normal(),
        };
        println!("  {line}");
    }
}

fn has_visible_error(view: &ViewState) -> bool {
    (view.login_error().is_visible() && view.login_error().tone() == Tone::Error)
        || view.status().tone() == Tone::Error
        || (view.response().is_visible() && view.response().tone() == Tone::Error)
}
