use clap::Parser;

/// Book training slots (egentrening) at Sit.
#[derive(Parser, Debug)]
#[command(name = "sit-booker", version, about)]
pub struct Args {
    /// Sit username (email)
    pub username: String,

    /// Sit password, or ENV to read it from $SIT_PASSWORD
    pub password: String,

    /// Start time of the training slot (example: 0730)
    #[arg(long, value_name = "HHMM")]
    pub time: String,

    /// Number of days until the training slot (0 is today)
    #[arg(long, default_value_t = 2)]
    pub days: i64,

    /// Book a bookable resource (hall) instead of a class slot
    #[arg(long)]
    pub resource: bool,

    /// Activity to book; defaults to hall4 in resource mode, egentrening otherwise
    #[arg(long)]
    pub activity: Option<String>,

    /// Studio
    #[arg(long, default_value = "gløshaugen")]
    pub studio: String,

    /// Max number of tries
    #[arg(long, default_value_t = 2)]
    pub max_tries: u32,
}

impl Args {
    pub fn activity_name(&self) -> &str {
        match (&self.activity, self.resource) {
            (Some(name), _) => name,
            (None, true) => "hall4",
            (None, false) => "egentrening",
        }
    }
}
