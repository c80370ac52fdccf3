use egui::{CentralPanel, Color32, RichText, SidePanel, Slider, TopBottomPanel};

use crate::app::ControlMsg;
use crate::core::params::{
    ControlParams, Preset, GRAVITY_RANGE, INERTIA_RANGE, PRESSURE_RANGE, SLEEP_WAKE_RANGE,
    THERMAL_RANGE,
};
use crate::core::reaction::ReactionColor;
use crate::core::stability;
use crate::ui::plots::{scene_plot, Projection};
use crate::ui::viewdata::UiFrame;

/// Slider state owned by the UI thread; the worker owns the authoritative
/// session and clamps whatever it receives.
#[derive(Clone, Debug, Default)]
pub struct ControlsState {
    pub params: ControlParams,
}

fn reaction_color32(color: ReactionColor) -> Color32 {
    match color {
        ReactionColor::Baseline => Color32::LIGHT_GRAY,
        ReactionColor::Red => Color32::from_rgb(230, 60, 60),
        ReactionColor::Yellow => Color32::from_rgb(230, 210, 50),
        ReactionColor::Purple => Color32::from_rgb(175, 85, 225),
        ReactionColor::Green => Color32::from_rgb(70, 200, 90),
        ReactionColor::Pink => Color32::from_rgb(240, 120, 180),
    }
}

/// === Main window ===
///
/// Returns the control messages produced by this frame's interactions.
pub fn main_window(
    ctx: &egui::Context,
    frame: &UiFrame,
    controls: &mut ControlsState,
    pitch: f32,
    yaw: f32,
) -> Vec<ControlMsg> {
    let mut msgs = Vec::new();

    TopBottomPanel::top("top").show(ctx, |ui| {
        ui.heading("Helicoil — double-helix deformation viewer");
        ui.label("Backbone strands, deformable hairs, gel container");
    });

    SidePanel::left("controls").min_width(240.0).show(ctx, |ui| {
        ui.heading("Forces");
        let p = &mut controls.params;
        let mut changed = false;
        changed |= ui
            .add(Slider::new(&mut p.thermal, THERMAL_RANGE).text("thermal noise"))
            .changed();
        changed |= ui
            .add(Slider::new(&mut p.gravity, GRAVITY_RANGE).text("gravity sag"))
            .changed();
        changed |= ui
            .add(Slider::new(&mut p.inertia, INERTIA_RANGE).text("inertia lag"))
            .changed();
        changed |= ui
            .add(Slider::new(&mut p.pressure, PRESSURE_RANGE).text("pressure"))
            .changed();
        changed |= ui
            .add(Slider::new(&mut p.sleep_wake, SLEEP_WAKE_RANGE).text("sleep/wake"))
            .changed();
        if changed {
            msgs.push(ControlMsg::SetParams(controls.params));
        }

        ui.separator();
        ui.heading("Presets");
        for preset in Preset::ALL {
            if ui.button(preset.label()).clicked() {
                controls.params = preset.params();
                msgs.push(ControlMsg::Preset(preset));
            }
        }

        ui.separator();
        if ui.button("Animate cycle").clicked() {
            msgs.push(ControlMsg::AnimateCycle);
        }

        ui.separator();
        let stab = frame.scene.stability;
        ui.label(format!("Stability: {stab:.0}"));
        ui.label(format!("Delta: {:+.0}", stab - stability::BASELINE));
        ui.label(format!("t = {:.2}", frame.scene.time));

        if let Some(reaction) = &frame.scene.reaction {
            let color = reaction_color32(reaction.color);
            for warning in &reaction.warnings {
                ui.label(RichText::new(*warning).color(color));
            }
        }
    });

    CentralPanel::default().show(ctx, |ui| {
        scene_plot(ui, &frame.scene, Projection { yaw, pitch });
    });

    msgs
}
