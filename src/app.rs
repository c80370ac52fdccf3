use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::*;

use crate::config::AppConfig;
use crate::core::helix::{HelixSpec, HelixStructure};
use crate::core::params::{ControlParams, Preset};
use crate::pipeline::{render_frame, FrameOptions};
use crate::session::Session;
use crate::ui::viewdata::UiFrame;
use crate::ui::windows::{main_window, ControlsState};

/// Messages from the UI thread to the worker owning the session.
#[derive(Clone, Copy, Debug)]
pub enum ControlMsg {
    SetParams(ControlParams),
    Preset(Preset),
    AnimateCycle,
}

pub struct App {
    ui_frame_rx: Receiver<UiFrame>,
    ctrl_tx: Sender<ControlMsg>,
    last_frame: UiFrame,
    controls: ControlsState,
    viewer_yaw_rate: f32,
    viewer_pitch: f32,
    worker_handle: Option<thread::JoinHandle<()>>,
    exiting: Arc<AtomicBool>,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        cfg: AppConfig,
        preset: Option<Preset>,
        stop_flag: Arc<AtomicBool>,
    ) -> Self {
        let (ui_frame_tx, ui_frame_rx) = bounded::<UiFrame>(8);
        let (ctrl_tx, ctrl_rx) = bounded::<ControlMsg>(32);

        let controls = ControlsState {
            params: preset.map_or_else(ControlParams::default, Preset::params),
        };
        let viewer_yaw_rate = cfg.viewer.yaw_rate;
        let viewer_pitch = cfg.viewer.pitch;

        let stop_flag_worker = stop_flag.clone();
        let worker_handle = Some(
            thread::Builder::new()
                .name("worker".into())
                .spawn(move || worker_loop(ui_frame_tx, ctrl_rx, cfg, preset, stop_flag_worker))
                .expect("spawn worker"),
        );

        cc.egui_ctx.set_pixels_per_point(1.25);

        Self {
            ui_frame_rx,
            ctrl_tx,
            last_frame: UiFrame::empty(),
            controls,
            viewer_yaw_rate,
            viewer_pitch,
            worker_handle,
            exiting: stop_flag,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.exiting.load(Ordering::SeqCst) {
            eprintln!("SIGINT received: closing window.");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Pull newest frame (drain to latest)
        while let Ok(f) = self.ui_frame_rx.try_recv() {
            self.last_frame = f;
        }

        let yaw = self.last_frame.scene.time * self.viewer_yaw_rate;
        for msg in main_window(
            ctx,
            &self.last_frame,
            &mut self.controls,
            self.viewer_pitch,
            yaw,
        ) {
            if self.ctrl_tx.try_send(msg).is_err() {
                warn!("control channel full; dropping message");
            }
        }

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.exiting.store(true, Ordering::SeqCst);
        if let Some(handle) = self.worker_handle.take() {
            let _ = handle.join();
        }
    }
}

/// Worker owning the per-session state. One pass per tick: apply pending
/// control messages, advance the clock, run the pipeline, publish a snapshot.
fn worker_loop(
    ui_tx: Sender<UiFrame>,
    ctrl_rx: Receiver<ControlMsg>,
    cfg: AppConfig,
    preset: Option<Preset>,
    exiting: Arc<AtomicBool>,
) {
    // Structural geometry is computed once and reused read-only; only the
    // deformation varies per frame.
    let structure = HelixStructure::generate(HelixSpec::default());

    let mut session = Session::new(cfg.animation.reset_time_on_preset);
    if let Some(p) = preset {
        session.apply_preset(p);
    }

    let opts = FrameOptions {
        reactions_enabled: cfg.reactions.enabled,
        marker_count: cfg.viewer.marker_count,
    };

    let tick = Duration::from_secs_f32(1.0 / cfg.animation.tick_hz.max(1.0));
    let mut next_deadline = Instant::now();
    let mut frame_index: u64 = 0;

    loop {
        if exiting.load(Ordering::SeqCst) {
            eprintln!("Stopping worker thread.");
            break;
        }
        next_deadline += tick;

        while let Ok(msg) = ctrl_rx.try_recv() {
            match msg {
                ControlMsg::SetParams(p) => session.set_params(p),
                ControlMsg::Preset(p) => session.apply_preset(p),
                ControlMsg::AnimateCycle => session.advance(cfg.animation.cycle_dt),
            }
        }

        session.advance(cfg.animation.tick_dt);
        let scene = render_frame(&structure, &session, &opts);
        trace!(
            time = scene.time,
            stability = scene.stability,
            "rendered frame"
        );

        let _ = ui_tx.try_send(UiFrame { scene, frame_index });
        frame_index += 1;

        let now = Instant::now();
        if now < next_deadline {
            thread::sleep(next_deadline - now);
        } else {
            next_deadline = now;
            trace!("worker overrun");
        }
    }
}
