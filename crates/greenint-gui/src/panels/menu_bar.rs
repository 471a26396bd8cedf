use greenint_core::config::IntegrationConfig;
use greenint_core::session::CalculatorSession;

use crate::app::GreenApp;
use crate::messages::WorkerResult;

pub fn show(ctx: &egui::Context, app: &mut GreenApp) {
    let calculate_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Enter);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                let can_edit = !app.ui_state.is_busy();
                if ui
                    .add_enabled(can_edit, egui::Button::new("Calculate").shortcut_text(ctx.format_shortcut(&calculate_shortcut)))
                    .clicked()
                {
                    ui.close();
                    app.start_calculation();
                }

                ui.separator();

                if ui.add_enabled(can_edit, egui::Button::new("Clear Form")).clicked() {
                    ui.close();
                    let config = app.session.config().clone();
                    app.session = CalculatorSession::new(config);
                    app.ui_state.samples = None;
                    app.ui_state.add_log("Form cleared".into());
                }

                if ui.add_enabled(can_edit, egui::Button::new("Reset Config")).clicked() {
                    ui.close();
                    app.session.set_config(IntegrationConfig::default());
                    app.ui_state.add_log("Config reset to defaults".into());
                    app.request_samples();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&calculate_shortcut)) {
            app.start_calculation();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn import_config(app: &mut GreenApp) {
    let result_tx = app.result_tx.clone();
    let ctx = app.ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let result = match IntegrationConfig::load(&path) {
            Ok(config) => WorkerResult::ConfigImported { config },
            Err(e) => WorkerResult::Error {
                message: format!("Failed to import {}: {e}", path.display()),
            },
        };
        let _ = result_tx.send(result);
        ctx.request_repaint();
    });
}

fn export_config(app: &mut GreenApp) {
    let content = match app.session.config().to_toml() {
        Ok(content) => content,
        Err(e) => {
            app.ui_state.add_log(format!("ERROR: {e}"));
            return;
        }
    };
    let result_tx = app.result_tx.clone();
    let ctx = app.ctx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("greenint.toml")
            .save_file()
        {
            let result = match std::fs::write(&path, content) {
                Ok(()) => WorkerResult::Log {
                    message: format!("Config saved to {}", path.display()),
                },
                Err(e) => WorkerResult::Error {
                    message: format!("Failed to write {}: {e}", path.display()),
                },
            };
            let _ = result_tx.send(result);
            ctx.request_repaint();
        }
    });
}
