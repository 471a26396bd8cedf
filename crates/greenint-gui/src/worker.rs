use std::sync::mpsc;
use std::time::Instant;

use greenint_core::config::{DisplayConfig, IntegrationConfig};
use greenint_core::display::{sample_curves, GraphSnapshot};
use greenint_core::expr::SymbolicEngine;
use greenint_core::integrate::{integrate_reported, CalculationRequest, CancelToken};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::progress::ChannelProgressReporter;

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("greenint-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let engine = SymbolicEngine;

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Calculate {
                request,
                config,
                cancel,
            } => {
                handle_calculate(&engine, request, &config, &cancel, &tx, &ctx);
            }
            WorkerCommand::Sample { snapshot, display } => {
                handle_sample(&engine, &snapshot, &display, &tx, &ctx);
            }
        }
    }
}

fn handle_calculate(
    engine: &SymbolicEngine,
    request: CalculationRequest,
    config: &IntegrationConfig,
    cancel: &CancelToken,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    send_log(tx, ctx, format!("Integrating {} (step {})", request.mode, config.step));

    let reporter = ChannelProgressReporter::new(tx.clone(), ctx.clone());
    let start = Instant::now();
    let result = integrate_reported(engine, &request, config, &reporter, cancel);

    send(
        tx,
        ctx,
        WorkerResult::Calculated {
            request,
            result,
            elapsed: start.elapsed(),
        },
    );
}

fn handle_sample(
    engine: &SymbolicEngine,
    snapshot: &GraphSnapshot,
    display: &DisplayConfig,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match sample_curves(engine, snapshot, display) {
        Ok(samples) => send(tx, ctx, WorkerResult::Sampled { samples }),
        Err(e) => send_error(tx, ctx, format!("Failed to sample curves: {e}")),
    }
}
