use tracing::{info, warn};

use crate::client::BookingApi;
use crate::error::BookError;
use crate::gate::await_window;
use crate::models::{BookingRequest, Credentials};
use crate::schedule::{self, ScheduleMode};

/// Terminal result of a run. Finding no qualifying slot is a normal negative
/// outcome, not an error, and is never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Booked,
    Unmatched,
}

/// Runs booking attempts until one settles or `max_tries` is exhausted.
/// Every attempt gets a session of its own from `open_session` and drops it
/// on the way out, whatever happened inside.
pub async fn run_attempts<A, F>(
    mut open_session: F,
    request: &BookingRequest,
    credentials: &Credentials,
    max_tries: u32,
) -> Result<Outcome, BookError>
where
    A: BookingApi,
    F: FnMut() -> Result<A, BookError>,
{
    let mut attempt = 1;
    loop {
        let result = match open_session() {
            Ok(session) => attempt_once(&session, request, credentials).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(outcome) => return Ok(outcome),
            Err(err) if attempt >= max_tries => return Err(err),
            Err(err) => {
                warn!(attempt, error = %err, "booking attempt failed, retrying with a fresh session");
            }
        }
        attempt += 1;
    }
}

async fn attempt_once<A: BookingApi>(
    session: &A,
    request: &BookingRequest,
    credentials: &Credentials,
) -> Result<Outcome, BookError> {
    session
        .log_in(&credentials.username, &credentials.password)
        .await?;
    let token = session.fetch_token().await?;

    let payload = match request.mode {
        ScheduleMode::Flat => session.fetch_schedule(&token, request.studio_id).await?,
        ScheduleMode::Resource => {
            session
                .fetch_resource_schedule(&token, request.studio_id, request.resource_id)
                .await?
        }
    };

    let Some(slot) = schedule::find_match(&payload, request)? else {
        return Ok(Outcome::Unmatched);
    };

    if let Some(opens_at) = slot.opens_at {
        await_window(opens_at).await;
    }

    match request.mode {
        ScheduleMode::Flat => session.book_class(&token, slot.entry_id).await?,
        ScheduleMode::Resource => session.book_resource(&token, slot.entry_id).await?,
    }
    info!(entry_id = slot.entry_id, "slot booked");
    Ok(Outcome::Booked)
}
