use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    Bathroomentry,
    Bathroomexit,
    Bedentry,
    Bedexit,
    Fall,
    Longstay,
    Entry,
    Exit,
}

impl EventType {
    pub const ALL: [EventType; 8] = [
        EventType::Bathroomentry,
        EventType::Bathroomexit,
        EventType::Bedentry,
        EventType::Bedexit,
        EventType::Fall,
        EventType::Longstay,
        EventType::Entry,
        EventType::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EventType::Bathroomentry => "Bathroomentry",
            EventType::Bathroomexit => "Bathroomexit",
            EventType::Bedentry => "Bedentry",
            EventType::Bedexit => "Bedexit",
            EventType::Fall => "Fall",
            EventType::Longstay => "Longstay",
            EventType::Entry => "Entry",
            EventType::Exit => "Exit",
        }
    }

    /// Lower-cased column name in the CSV schema.
    pub fn column(self) -> &'static str {
        match self {
            EventType::Bathroomentry => "bathroomentry",
            EventType::Bathroomexit => "bathroomexit",
            EventType::Bedentry => "bedentry",
            EventType::Bedexit => "bedexit",
            EventType::Fall => "fall",
            EventType::Longstay => "longstay",
            EventType::Entry => "entry",
            EventType::Exit => "exit",
        }
    }
}

impl Default for EventType {
    fn default() -> Self {
        EventType::Fall
    }
}

/// Per-row counts, one field per event type. `get` is the explicit
/// enum-to-accessor mapping; ingest validates the matching columns against
/// the CSV header, so lookups are total at call time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventCounts {
    pub bathroomentry: u64,
    pub bathroomexit: u64,
    pub bedentry: u64,
    pub bedexit: u64,
    pub fall: u64,
    pub longstay: u64,
    pub entry: u64,
    pub exit: u64,
}

impl EventCounts {
    pub fn get(&self, ty: EventType) -> u64 {
        match ty {
            EventType::Bathroomentry => self.bathroomentry,
            EventType::Bathroomexit => self.bathroomexit,
            EventType::Bedentry => self.bedentry,
            EventType::Bedexit => self.bedexit,
            EventType::Fall => self.fall,
            EventType::Longstay => self.longstay,
            EventType::Entry => self.entry,
            EventType::Exit => self.exit,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRow {
    pub facility: String,
    /// Calendar date of the events; any time-of-day component is stripped
    /// at ingest so comparisons work on whole days.
    pub event_date: NaiveDate,
    pub counts: EventCounts,
}
