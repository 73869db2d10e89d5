use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{EventRow, EventTable, EventType};
use crate::pipeline::FilterSelection;

/// Non-owning subset of the event table matching a filter selection.
/// Row order matches table order; recomputed on every render pass.
pub struct FilteredView<'a> {
    rows: Vec<&'a EventRow>,
}

impl<'a> FilteredView<'a> {
    /// Facility matching is exact set membership; the date range is
    /// inclusive on both bounds. An inverted range (start after end)
    /// simply matches nothing.
    pub fn compute(table: &'a EventTable, sel: &FilterSelection) -> Self {
        let rows = table
            .iter()
            .filter(|row| {
                sel.facilities.contains(&row.facility)
                    && row.event_date >= sel.start_date
                    && row.event_date <= sel.end_date
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[&'a EventRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of the selected event type's counts; 0 for an empty view.
    pub fn total_count(&self, ty: EventType) -> u64 {
        self.rows.iter().map(|row| row.counts.get(ty)).sum()
    }

    /// Number of unique calendar dates present; 0 for an empty view.
    pub fn distinct_date_count(&self) -> usize {
        let mut dates: Vec<NaiveDate> = self.rows.iter().map(|row| row.event_date).collect();
        dates.sort();
        dates.dedup();
        dates.len()
    }

    /// Per-date sum of the selected event type, ascending by date.
    pub fn daily_series(&self, ty: EventType) -> Vec<(NaiveDate, u64)> {
        let mut by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for row in &self.rows {
            *by_date.entry(row.event_date).or_default() += row.counts.get(ty);
        }
        by_date.into_iter().collect()
    }

    /// Rows sorted ascending by date (stable, so table order breaks ties).
    pub fn sorted_by_date(&self) -> Vec<&'a EventRow> {
        let mut rows = self.rows.clone();
        rows.sort_by_key(|row| row.event_date);
        rows
    }
}
