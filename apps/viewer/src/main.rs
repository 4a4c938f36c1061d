use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use client_core::{project, PlanController, PlanState, WeeklyPlanClient};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod render;

/// Terminal viewer for the weekly assignment plan.
#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the planning API; overrides viewer.toml and environment.
    #[arg(long)]
    server_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(server_url) = args.server_url {
        settings.api_base_url = server_url;
    }
    let base_url = config::normalize_base_url(&settings.api_base_url)?;
    debug!(%base_url, "resolved planning API base url");

    let controller = PlanController::new(Arc::new(WeeklyPlanClient::new(base_url)));
    let mut events = controller.subscribe_events();
    controller.mount().await;
    eprintln!("{}", render::LOADING_MESSAGE);

    loop {
        tokio::select! {
            state = events.recv() => match state {
                Ok(PlanState::Ready(plan)) => {
                    print!("{}", render::render_plan(&project(&plan)));
                    break;
                }
                Ok(PlanState::Error(message)) => {
                    eprintln!("{message}");
                    std::process::exit(1);
                }
                Ok(PlanState::Loading) => continue,
                Err(_) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                debug!("interrupt received, abandoning weekly plan fetch");
                controller.unmount().await;
                break;
            }
        }
    }

    Ok(())
}
