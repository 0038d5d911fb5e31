use chrono::NaiveDateTime;

use crate::error::BookError;
use crate::models::{BookingRequest, ClassEntry, ScheduleDay, SchedulePayload};
use crate::timestamp::{parse_date, parse_timestamp};

/// The two shapes the schedule API serves. Each variant knows where its
/// entries, activity keys and opens-at timestamps live, so the matching loop
/// below stays a single algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleMode {
    Flat,
    Resource,
}

impl ScheduleMode {
    fn entries<'a>(&self, day: &'a ScheduleDay) -> Box<dyn Iterator<Item = &'a ClassEntry> + 'a> {
        match self {
            ScheduleMode::Flat => Box::new(day.classes.iter()),
            ScheduleMode::Resource => {
                Box::new(day.rows.iter().flat_map(|row| row.classes.iter()))
            }
        }
    }

    fn entry_activity(&self, entry: &ClassEntry) -> Option<u64> {
        match self {
            ScheduleMode::Flat => entry.activity_id,
            ScheduleMode::Resource => entry.activity.as_ref().map(|activity| activity.id),
        }
    }

    /// The flat schedule announces the booking window on the day, the
    /// resource schedule on the entry itself.
    fn opens_at<'a>(&self, day: &'a ScheduleDay, entry: &'a ClassEntry) -> Option<&'a str> {
        match self {
            ScheduleMode::Flat => day.booking_opens_at.as_deref(),
            ScheduleMode::Resource => entry.booking_opens_at.as_deref(),
        }
    }
}

/// The slot `find_match` settled on: its booking id and, when the payload
/// declares one, the instant its booking window opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotMatch {
    pub entry_id: u64,
    pub opens_at: Option<NaiveDateTime>,
}

/// Walks the schedule for the first entry matching the requested date,
/// activity and exact start timestamp. No qualifying entry is a normal
/// `Ok(None)`; unreadable timestamp text is an error.
pub fn find_match(
    schedule: &SchedulePayload,
    request: &BookingRequest,
) -> Result<Option<SlotMatch>, BookError> {
    let target_date = request.start.date();
    for day in &schedule.days {
        if parse_date(&day.date)? != target_date {
            continue;
        }
        for entry in request.mode.entries(day) {
            if request.mode.entry_activity(entry) != Some(request.activity_id) {
                continue;
            }
            if parse_timestamp(&entry.from)? != request.start {
                continue;
            }
            let opens_at = match request.mode.opens_at(day, entry) {
                Some(raw) => Some(parse_timestamp(raw)?),
                None => None,
            };
            return Ok(Some(SlotMatch {
                entry_id: entry.id,
                opens_at,
            }));
        }
    }
    Ok(None)
}
