use greenint_core::integrate::{CalculationResult, IntegrationMode};

use crate::app::GreenApp;
use crate::panels::helpers::expression_field;

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 90, 80);
const RESULT_COLOR: egui::Color32 = egui::Color32::from_rgb(80, 180, 80);

pub fn show(ctx: &egui::Context, app: &mut GreenApp) {
    egui::SidePanel::left("controls")
        .resizable(true)
        .default_width(330.0)
        .min_width(260.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(4.0);
                form_section(ui, app);
                ui.separator();
                actions_section(ui, app);
                ui.separator();
                result_section(ui, app);
            });
        });
}

fn form_section(ui: &mut egui::Ui, app: &mut GreenApp) {
    crate::panels::section_header(ui, "Integrand", None);

    let busy = app.ui_state.is_busy();
    let session = &mut app.session;

    ui.add_enabled_ui(!busy, |ui| {
        crate::panels::enum_combo(ui, "Mode", &mut session.mode, IntegrationMode::ALL);
    });
    ui.add_space(4.0);

    let vector_field = session.mode.needs_field_p();
    egui::Grid::new("integrand_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            if vector_field {
                expression_field(ui, "P(x, y)", &mut session.field_p, "-y", !busy);
                expression_field(ui, "Q(x, y)", &mut session.field_q, "x", !busy);
            } else {
                expression_field(ui, "f(x, y)", &mut session.field_q, "x * y", !busy);
            }
        });

    ui.add_space(8.0);
    crate::panels::section_header(ui, "Region", None);

    egui::Grid::new("region_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            expression_field(ui, "y min", &mut session.curve_lower, "x^2", !busy);
            expression_field(ui, "y max", &mut session.curve_upper, "x", !busy);

            ui.label("x min");
            ui.add_enabled(!busy, egui::DragValue::new(&mut session.x_min).speed(0.05));
            ui.end_row();

            ui.label("x max");
            ui.add_enabled(!busy, egui::DragValue::new(&mut session.x_max).speed(0.05));
            ui.end_row();
        });

    if vector_field {
        ui.add_space(4.0);
        ui.small("Integrates ∂Q/∂x − ∂P/∂y over the region.");
    }
}

fn actions_section(ui: &mut egui::Ui, app: &mut GreenApp) {
    let busy = app.ui_state.is_busy();

    ui.horizontal(|ui| {
        let calculate = egui::Button::new("Calculate").min_size(egui::vec2(100.0, 0.0));
        if ui.add_enabled(!busy, calculate).clicked() {
            app.start_calculation();
        }
        if ui.add_enabled(busy, egui::Button::new("Cancel")).clicked() {
            app.ui_state.cancel();
        }
    });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Step");
        let mut config = app.session.config().clone();
        let changed = ui
            .add_enabled(
                !busy,
                egui::DragValue::new(&mut config.step)
                    .speed(0.001)
                    .range(0.0005..=0.5)
                    .max_decimals(4),
            )
            .changed();
        if changed {
            app.session.set_config(config);
        }
    });
}

fn result_section(ui: &mut egui::Ui, app: &mut GreenApp) {
    crate::panels::section_header(ui, "Result", None);

    match app.session.last_result() {
        Some(CalculationResult::Success(v)) => {
            ui.label(
                egui::RichText::new(v.formatted_value())
                    .size(22.0)
                    .strong()
                    .color(RESULT_COLOR),
            );
            ui.label(&v.expression_label);
        }
        Some(CalculationResult::Failure { message, .. }) => {
            ui.colored_label(ERROR_COLOR, message);
            // The last good value stays visible beneath the error.
            if let Some(v) = app.session.last_success() {
                ui.add_space(4.0);
                ui.small(format!(
                    "Previous: {} = {}",
                    v.expression_label,
                    v.formatted_value()
                ));
            }
        }
        None => {
            ui.weak("No calculation yet");
        }
    }
}
