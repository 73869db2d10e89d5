use chrono::{Datelike, NaiveDate};
use eframe::egui;
use egui_plot::{uniform_grid_spacer, Line, Plot, PlotPoints, Points};

use crate::pipeline::DisplayModel;

pub fn timeline_chart(ui: &mut egui::Ui, model: &DisplayModel) {
    ui.label(egui::RichText::new("Timeline").strong());
    ui.add_space(4.0);

    let points: Vec<[f64; 2]> = model
        .series
        .iter()
        .map(|(date, sum)| [date_to_x(*date), *sum as f64])
        .collect();

    Plot::new("timeline_chart")
        .height(280.0)
        .allow_scroll(false)
        .x_axis_formatter(|mark, _max_chars, _range| {
            x_to_date(mark.value)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
        // Integer ticks only on the count axis.
        .y_grid_spacer(uniform_grid_spacer(|_input| [1.0, 5.0, 10.0]))
        .y_axis_formatter(|mark, _max_chars, _range| {
            if mark.value >= 1.0 && mark.value.fract() == 0.0 {
                format!("{}", mark.value as i64)
            } else {
                String::new()
            }
        })
        .label_formatter(|_name, point| {
            match x_to_date(point.x) {
                Some(date) => format!("{date}\n{:.0}", point.y),
                None => String::new(),
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(PlotPoints::from(points.clone())));
            plot_ui.points(Points::new(PlotPoints::from(points)).radius(3.0));
        });
}

fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn x_to_date(x: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_axis_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(x_to_date(date_to_x(date)), Some(date));
    }

    #[test]
    fn consecutive_dates_are_one_unit_apart() {
        let a = date_to_x(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        let b = date_to_x(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(b - a, 1.0);
    }
}
