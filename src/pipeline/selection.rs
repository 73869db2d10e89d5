use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::model::{EventTable, EventType};

/// The operator's current filter choices. Recreated defaults come from the
/// loaded table: every facility selected, date range spanning the latest
/// month present, event type Fall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSelection {
    pub facilities: BTreeSet<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub event_type: EventType,
}

impl FilterSelection {
    pub fn defaults(table: &EventTable) -> Self {
        let end_date = table
            .max_date()
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let start_date = end_date.with_day(1).unwrap_or(end_date);
        Self {
            facilities: table.facilities().into_iter().collect(),
            start_date,
            end_date,
            event_type: EventType::default(),
        }
    }
}
