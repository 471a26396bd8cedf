use std::sync::mpsc;

use greenint_core::integrate::{CalculationResult, CancelToken};
use greenint_core::session::CalculatorSession;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::UIState;
use crate::worker;

pub struct GreenApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    /// Cloned into file-dialog threads so they can report back.
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ctx: egui::Context,
    pub session: CalculatorSession,
    pub ui_state: UIState,
    pub show_about: bool,
}

impl GreenApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ctx: ctx.clone(),
            session: CalculatorSession::default(),
            ui_state: UIState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Progress {
                    columns_done,
                    columns_total,
                } => {
                    self.ui_state.progress_done = Some(columns_done);
                    self.ui_state.progress_total = columns_total;
                }
                WorkerResult::Calculated {
                    request,
                    result,
                    elapsed,
                } => {
                    self.ui_state.finish_run();
                    self.ui_state.last_elapsed = Some(elapsed);
                    match self.session.apply(&request, result) {
                        CalculationResult::Success(v) => {
                            let message = format!(
                                "{} = {} ({} samples, {})",
                                v.expression_label,
                                v.formatted_value(),
                                v.samples,
                                format_duration(elapsed)
                            );
                            self.ui_state.add_log(message);
                            self.request_samples();
                        }
                        CalculationResult::Failure { kind, message } => {
                            let message = format!("{kind}: {message}");
                            self.ui_state.add_log(message);
                        }
                    }
                }
                WorkerResult::Sampled { samples } => {
                    self.ui_state.samples = Some(samples);
                }
                WorkerResult::ConfigImported { config } => {
                    self.session.set_config(config);
                    self.ui_state.add_log("Config imported".into());
                    self.request_samples();
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Submit the current form to the worker.
    pub fn start_calculation(&mut self) {
        if self.ui_state.is_busy() {
            return;
        }
        let cancel = CancelToken::new();
        self.ui_state.running = Some(cancel.clone());
        self.ui_state.progress_done = Some(0);
        self.ui_state.progress_total = None;
        self.send_command(WorkerCommand::Calculate {
            request: self.session.request(),
            config: self.session.config().clone(),
            cancel,
        });
    }

    /// Resample the chart for the current snapshot, if there is one.
    pub fn request_samples(&self) {
        if let Some(snapshot) = self.session.graph() {
            self.send_command(WorkerCommand::Sample {
                snapshot: snapshot.clone(),
                display: self.session.config().display.clone(),
            });
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for GreenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::plot::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Green's Theorem Calculator");
                        ui.label("Double integrals over regions bounded by two curves");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

pub(crate) fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}min")
    }
}
