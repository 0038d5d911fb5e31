use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::schedule::ScheduleMode;

/// Response of both `Schedule/getSchedule` and `ResourceBooking/getSchedule`.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulePayload {
    #[serde(default)]
    pub days: Vec<ScheduleDay>,
}

/// One calendar day of the schedule. The flat schedule fills `classes`, the
/// resource schedule fills `rows`; `bookingOpensAt` is only meaningful for
/// the flat variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub date: String,
    #[serde(default)]
    pub booking_opens_at: Option<String>,
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
    #[serde(default)]
    pub rows: Vec<ResourceRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRow {
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
}

/// A single bookable slot. `id` is the unique booking identifier. The
/// activity key arrives as `activityId` in the flat schedule but nested as
/// `activity.id` in the resource schedule, so both shapes are kept.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    pub id: u64,
    #[serde(default)]
    pub activity_id: Option<u64>,
    #[serde(default)]
    pub activity: Option<ActivityRef>,
    pub from: String,
    #[serde(default)]
    pub booking_opens_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityRef {
    pub id: u64,
}

/// What the user asked to book. `resource_id` is only consulted in resource
/// mode, where the schedule fetch has to pin it.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub activity_id: u64,
    pub start: NaiveDateTime,
    pub studio_id: u32,
    pub resource_id: u32,
    pub mode: ScheduleMode,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
