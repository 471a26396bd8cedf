use crate::app::{format_duration, GreenApp};

pub fn show(ctx: &egui::Context, app: &mut GreenApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Progress bar
        if app.ui_state.is_busy() {
            let fraction = match (app.ui_state.progress_done, app.ui_state.progress_total) {
                (Some(done), Some(total)) if total > 0 => (done as f32 / total as f32).min(1.0),
                _ => 0.0, // indeterminate
            };

            let detail = match (app.ui_state.progress_done, app.ui_state.progress_total) {
                (Some(done), Some(total)) => format!("Integrating ({done}/{total} columns)"),
                _ => "Integrating...".to_string(),
            };

            ui.add(egui::ProgressBar::new(fraction).text(detail).animate(true));
        } else {
            // Invisible placeholder, same height, no animation
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        let config = app.session.config();
        ui.horizontal(|ui| {
            ui.label(format!("Step: {}", config.step));
            ui.separator();
            ui.label(format!("Decimals: {}", config.decimals));
            if let Some(elapsed) = app.ui_state.last_elapsed {
                ui.separator();
                ui.label(format!("Last run: {}", format_duration(elapsed)));
            }
        });

        ui.add_space(2.0);
    });
}
