use eframe::egui;
use egui_extras::DatePickerButton;

use crate::app::EventSummaryApp;
use crate::model::EventType;

pub fn filters_panel(ui: &mut egui::Ui, app: &mut EventSummaryApp) {
    ui.heading("Filters");
    ui.add_space(6.0);

    egui::ScrollArea::vertical()
        .id_source("filters_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            facility_picker(ui, app);
            ui.add_space(10.0);
            date_range_picker(ui, app);
            ui.add_space(10.0);
            event_type_picker(ui, app);
        });
}

fn facility_picker(ui: &mut egui::Ui, app: &mut EventSummaryApp) {
    ui.label(egui::RichText::new("Facility").strong());
    ui.add_space(2.0);

    let facilities = app.table.facilities();
    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.selection.facilities = facilities.iter().cloned().collect();
        }
        if ui.button("None").clicked() {
            app.selection.facilities.clear();
        }
    });
    for name in &facilities {
        let mut checked = app.selection.facilities.contains(name);
        if ui.checkbox(&mut checked, name).changed() {
            if checked {
                app.selection.facilities.insert(name.clone());
            } else {
                app.selection.facilities.remove(name);
            }
        }
    }
}

fn date_range_picker(ui: &mut egui::Ui, app: &mut EventSummaryApp) {
    ui.label(egui::RichText::new("Date Range").strong());
    ui.add_space(2.0);

    // Start after end is allowed; the filter then matches nothing.
    ui.horizontal(|ui| {
        ui.label("Start");
        ui.add(DatePickerButton::new(&mut app.selection.start_date).id_source("start_date"));
    });
    ui.horizontal(|ui| {
        ui.label("End");
        ui.add(DatePickerButton::new(&mut app.selection.end_date).id_source("end_date"));
    });
}

fn event_type_picker(ui: &mut egui::Ui, app: &mut EventSummaryApp) {
    ui.label(egui::RichText::new("Event Type").strong());
    ui.add_space(2.0);

    for ty in EventType::ALL {
        ui.selectable_value(&mut app.selection.event_type, ty, ty.label());
    }
}
