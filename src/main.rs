// Entry point: launches the egui viewer, or runs the render pipeline headless.

use clap::Parser;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tracing::info;

use helicoil::app::App;
use helicoil::cli::Args;
use helicoil::config::AppConfig;
use helicoil::core::helix::{HelixSpec, HelixStructure};
use helicoil::core::params::Preset;
use helicoil::pipeline::{render_frame, FrameOptions};
use helicoil::session::Session;

fn main() -> eframe::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args = Args::parse();
    let mut cfg = AppConfig::load_or_default(&args.config);
    if let Some(enabled) = args.reactions {
        cfg.reactions.enabled = enabled;
    }

    let preset = match args.preset.as_deref() {
        Some(name) => match Preset::from_name(name) {
            Some(p) => Some(p),
            None => {
                eprintln!("Unknown preset \"{name}\"; starting from defaults.");
                None
            }
        },
        None => None,
    };

    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_flag_for_ctrlc = stop_flag.clone();
    ctrlc::set_handler(move || {
        stop_flag_for_ctrlc.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    if args.nogui {
        run_headless(&cfg, preset, args.frames, &stop_flag);
        return Ok(());
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Helicoil",
        native_options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, cfg, preset, stop_flag.clone())))),
    )
}

/// Run the fixed pipeline for a frame budget without a window, logging the
/// stability trace. Useful for smoke runs and profiling.
fn run_headless(cfg: &AppConfig, preset: Option<Preset>, frames: u32, stop_flag: &AtomicBool) {
    let structure = HelixStructure::generate(HelixSpec::default());
    let mut session = Session::new(cfg.animation.reset_time_on_preset);
    if let Some(p) = preset {
        session.apply_preset(p);
    }
    let opts = FrameOptions {
        reactions_enabled: cfg.reactions.enabled,
        marker_count: cfg.viewer.marker_count,
    };

    for i in 0..frames {
        if stop_flag.load(Ordering::SeqCst) {
            break;
        }
        session.advance(cfg.animation.tick_dt);
        let frame = render_frame(&structure, &session, &opts);
        info!(
            frame = i,
            time = frame.time,
            stability = frame.stability,
            warnings = frame.reaction.as_ref().map_or(0, |r| r.warnings.len()),
            "headless frame"
        );
    }
}
