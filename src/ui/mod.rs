mod chart;
mod details;
mod filters;
mod summary;

use eframe::egui;

use crate::app::EventSummaryApp;
use crate::pipeline::FilteredView;

pub fn render_app(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut EventSummaryApp) {
    top_bar(ctx, frame, app);
    status_bar(ctx, app);

    egui::SidePanel::left("filters_panel")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| filters::filters_panel(ui, app));

    egui::CentralPanel::default().show(ctx, |ui| summary::summary_panel(ui, app));

    about_window(ctx, app);
}

fn top_bar(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut EventSummaryApp) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open events CSV...").clicked() {
                    ui.close_menu();
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("CSV", &["csv"])
                        .pick_file()
                    {
                        if let Err(e) = app.load_events(path) {
                            log::error!("reload events: {e:#}");
                            app.ui.last_error = Some(e.to_string());
                        }
                    }
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    let _ = frame;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset zoom").clicked() {
                    ctx.set_zoom_factor(1.0);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    app.ui.show_about = true;
                    ui.close_menu();
                }
            });
        });
    });
}

fn about_window(ctx: &egui::Context, app: &mut EventSummaryApp) {
    if !app.ui.show_about {
        return;
    }

    egui::Window::new("About Event Summary")
        .open(&mut app.ui.show_about)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Facility event dashboard.");
            ui.label("Filter by facility, date range, and event type; the KPIs, timeline, and detail table follow the current selection.");
        });
}

fn status_bar(ctx: &egui::Context, app: &EventSummaryApp) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let filtered = FilteredView::compute(&app.table, &app.selection).len();
            ui.label(format!("Rows: {} ({} in view)", app.table.len(), filtered));
            ui.separator();
            let name = app
                .source_path
                .file_name()
                .map(|s| s.to_string_lossy())
                .unwrap_or_else(|| app.source_path.to_string_lossy());
            ui.label(format!("Source: {name}"));
            if let Some(err) = &app.ui.last_error {
                ui.separator();
                ui.colored_label(
                    egui::Color32::from_rgb(255, 70, 70),
                    format!("Error: {err}"),
                );
            }
        });
    });
}

/// Group an integer's digits with commas, e.g. 1234567 -> "1,234,567".
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_thousands;

    #[test]
    fn groups_digits_with_commas() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
