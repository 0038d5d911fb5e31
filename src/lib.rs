pub mod cli;
pub mod client;
pub mod error;
pub mod gate;
pub mod models;
pub mod orchestrator;
pub mod schedule;
pub mod settings;
pub mod timestamp;
pub mod validation;

use config::ConfigError;
use tracing::info;

use crate::cli::Args;
use crate::client::SitSession;
use crate::error::BookError;
use crate::models::{BookingRequest, Credentials};
use crate::orchestrator::{Outcome, run_attempts};
use crate::schedule::ScheduleMode;
use crate::settings::Settings;

pub async fn run(args: Args) -> Result<Outcome, BookError> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let request = build_request(&args, &settings)?;
    let credentials = Credentials {
        username: args.username.clone(),
        password: resolve_password(&args, &settings)?,
    };
    let max_tries = validation::validate_tries(args.max_tries)?;

    info!(
        start = %request.start,
        studio = %args.studio,
        activity = args.activity_name(),
        "booking target"
    );

    run_attempts(
        || SitSession::new(&settings),
        &request,
        &credentials,
        max_tries,
    )
    .await
}

fn build_request(args: &Args, settings: &Settings) -> Result<BookingRequest, BookError> {
    let time = validation::validate_time_of_day(&args.time)?;
    let mode = if args.resource {
        ScheduleMode::Resource
    } else {
        ScheduleMode::Flat
    };
    Ok(BookingRequest {
        activity_id: settings.activity_id(args.activity_name())?,
        start: timestamp::target_start(args.days, time),
        studio_id: settings.studio_id(&args.studio)?,
        resource_id: settings.resource_id,
        mode,
    })
}

fn resolve_password(args: &Args, settings: &Settings) -> Result<String, BookError> {
    if args.password == "ENV" {
        settings.password.clone().ok_or_else(|| {
            BookError::Config(ConfigError::Message(
                "password is ENV but SIT_PASSWORD is not set".into(),
            ))
        })
    } else {
        Ok(args.password.clone())
    }
}
