use chrono::NaiveDate;

use crate::model::EventRow;

/// Ordered collection of event rows; read-only after load.
#[derive(Clone, Debug, Default)]
pub struct EventTable {
    rows: Vec<EventRow>,
}

impl EventTable {
    pub fn from_rows(rows: Vec<EventRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventRow> {
        self.rows.iter()
    }

    /// Distinct facility names, sorted alphabetically.
    pub fn facilities(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rows.iter().map(|r| r.facility.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.rows.iter().map(|r| r.event_date).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventCounts;

    fn row(facility: &str, date: &str) -> EventRow {
        EventRow {
            facility: facility.to_string(),
            event_date: date.parse().unwrap(),
            counts: EventCounts::default(),
        }
    }

    #[test]
    fn facilities_are_distinct_and_sorted() {
        let table = EventTable::from_rows(vec![
            row("North Wing", "2024-03-01"),
            row("Annex", "2024-03-02"),
            row("North Wing", "2024-03-03"),
        ]);
        assert_eq!(table.facilities(), vec!["Annex", "North Wing"]);
    }

    #[test]
    fn max_date_of_empty_table_is_none() {
        assert_eq!(EventTable::default().max_date(), None);
    }

    #[test]
    fn max_date_picks_latest_row() {
        let table = EventTable::from_rows(vec![
            row("A", "2024-03-15"),
            row("A", "2024-02-01"),
        ]);
        assert_eq!(
            table.max_date(),
            Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
    }
}
