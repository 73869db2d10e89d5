use chrono::NaiveDate;

use crate::model::{EventRow, EventTable};
use crate::pipeline::{FilterSelection, FilteredView};

/// Everything the render pass needs, computed in one place so the UI layer
/// stays free of aggregation logic. Owns no state beyond the borrow of the
/// table; rebuilt from scratch on every frame.
pub struct DisplayModel<'a> {
    pub total_count: u64,
    pub day_count: usize,
    pub series: Vec<(NaiveDate, u64)>,
    /// Filtered rows sorted ascending by date, for the detail table.
    pub rows: Vec<&'a EventRow>,
}

impl<'a> DisplayModel<'a> {
    pub fn build(table: &'a EventTable, sel: &FilterSelection) -> Self {
        let view = FilteredView::compute(table, sel);
        Self {
            total_count: view.total_count(sel.event_type),
            day_count: view.distinct_date_count(),
            series: view.daily_series(sel.event_type),
            rows: view.sorted_by_date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventCounts, EventType};

    #[test]
    fn build_matches_view_aggregates() {
        let table = EventTable::from_rows(vec![
            EventRow {
                facility: "FacilityA".to_string(),
                event_date: "2024-03-01".parse().unwrap(),
                counts: EventCounts {
                    fall: 2,
                    ..EventCounts::default()
                },
            },
            EventRow {
                facility: "FacilityB".to_string(),
                event_date: "2024-03-02".parse().unwrap(),
                counts: EventCounts {
                    fall: 5,
                    ..EventCounts::default()
                },
            },
        ]);
        let sel = FilterSelection {
            facilities: ["FacilityA", "FacilityB"]
                .iter()
                .map(|f| f.to_string())
                .collect(),
            start_date: "2024-03-01".parse().unwrap(),
            end_date: "2024-03-02".parse().unwrap(),
            event_type: EventType::Fall,
        };
        let model = DisplayModel::build(&table, &sel);
        assert_eq!(model.total_count, 7);
        assert_eq!(model.day_count, 2);
        assert_eq!(model.series.len(), 2);
        assert_eq!(model.rows.len(), 2);
        assert!(model.rows[0].event_date <= model.rows[1].event_date);
    }
}
