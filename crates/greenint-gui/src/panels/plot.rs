use egui_plot::{Legend, Line, Plot, PlotPoints, VLine};
use greenint_core::consts::{LOWER_CURVE_LABEL, UPPER_CURVE_LABEL};

use crate::app::GreenApp;

const LOWER_COLOR: egui::Color32 = egui::Color32::from_rgb(90, 160, 230);
const UPPER_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 140, 60);
const LIMIT_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 150, 150);

pub fn show(ctx: &egui::Context, app: &mut GreenApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (Some(samples), Some(snapshot)) = (&app.ui_state.samples, app.session.graph()) else {
            show_placeholder(ui);
            return;
        };

        Plot::new("boundary_curves")
            .legend(Legend::default())
            .x_axis_label("x")
            .y_axis_label("y")
            .show(ui, |plot_ui| {
                for segment in finite_segments(samples.lower_points()) {
                    plot_ui.line(
                        Line::new(LOWER_CURVE_LABEL, PlotPoints::from(segment))
                            .color(LOWER_COLOR)
                            .width(2.0),
                    );
                }
                for segment in finite_segments(samples.upper_points()) {
                    plot_ui.line(
                        Line::new(UPPER_CURVE_LABEL, PlotPoints::from(segment))
                            .color(UPPER_COLOR)
                            .width(2.0),
                    );
                }
                plot_ui.vline(VLine::new("x limits", snapshot.x_range.min).color(LIMIT_COLOR));
                plot_ui.vline(VLine::new("x limits", snapshot.x_range.max).color(LIMIT_COLOR));
            });
    });
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.weak("Boundary curves appear here after a successful calculation");
    });
}

/// Split a polyline at non-finite points so gaps are drawn as gaps.
fn finite_segments(points: Vec<[f64; 2]>) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for p in points {
        if p[1].is_finite() {
            current.push(p);
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}
