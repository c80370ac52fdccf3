use egui::Color32;
use egui_plot::{Line, Plot, Points};

use crate::core::curve::{Curve3, SurfaceGrid};
use crate::pipeline::FrameOutput;

/// Turntable projection: yaw about the helix axis, then tilt by a fixed
/// pitch, drawn orthographically.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub yaw: f32,
    pub pitch: f32,
}

impl Projection {
    pub fn project(&self, x: f32, y: f32, z: f32) -> [f64; 2] {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        let x1 = x * cy - y * sy;
        let y1 = x * sy + y * cy;
        let z2 = y1 * sp + z * cp;
        [x1 as f64, z2 as f64]
    }

    fn curve_points(&self, curve: &Curve3) -> Vec<[f64; 2]> {
        (0..curve.len())
            .map(|i| self.project(curve.xs[i], curve.ys[i], curve.zs[i]))
            .collect()
    }
}

const STRAND_A_COLOR: Color32 = Color32::from_rgb(0, 255, 255);
const STRAND_B_COLOR: Color32 = Color32::from_rgb(255, 0, 255);
const HAIR_COLOR: Color32 = Color32::ORANGE;
const MARKER_COLOR: Color32 = Color32::YELLOW;
const CONTAINER_COLOR: Color32 = Color32::from_rgba_premultiplied(40, 70, 140, 60);

/// Draw the whole projected scene into one plot.
pub fn scene_plot(ui: &mut egui::Ui, frame: &FrameOutput, proj: Projection) {
    Plot::new("scene")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_scroll(false)
        .allow_drag(false)
        .show(ui, |plot_ui| {
            draw_container(plot_ui, &frame.container, proj);

            plot_ui.line(
                Line::new("strand A", proj.curve_points(&frame.strand_a))
                    .color(STRAND_A_COLOR)
                    .width(3.0),
            );
            plot_ui.line(
                Line::new("strand B", proj.curve_points(&frame.strand_b))
                    .color(STRAND_B_COLOR)
                    .width(3.0),
            );
            plot_ui.line(
                Line::new("centerline", proj.curve_points(&frame.centerline))
                    .color(Color32::WHITE)
                    .width(1.0),
            );
            for hair in &frame.hairs {
                plot_ui.line(
                    Line::new("", proj.curve_points(hair))
                        .color(HAIR_COLOR)
                        .width(1.5),
                );
            }
            plot_ui.points(
                Points::new("sparks", proj.curve_points(&frame.markers))
                    .color(MARKER_COLOR)
                    .radius(3.0),
            );
        });
}

/// Sketch the container tube as a sparse wireframe: every height row as a
/// ring plus a handful of vertical seams.
fn draw_container(plot_ui: &mut egui_plot::PlotUi<'_>, grid: &SurfaceGrid, proj: Projection) {
    if grid.n_rows == 0 || grid.n_cols == 0 {
        return;
    }
    for row in 0..grid.n_rows {
        let pts: Vec<[f64; 2]> = (0..grid.n_cols)
            .map(|col| {
                let (x, y, z) = grid.point(row, col);
                proj.project(x, y, z)
            })
            .collect();
        plot_ui.line(Line::new("", pts).color(CONTAINER_COLOR).width(1.0));
    }
    let seam_stride = (grid.n_cols / 8).max(1);
    for col in (0..grid.n_cols).step_by(seam_stride) {
        let pts: Vec<[f64; 2]> = (0..grid.n_rows)
            .map(|row| {
                let (x, y, z) = grid.point(row, col);
                proj.project(x, y, z)
            })
            .collect();
        plot_ui.line(Line::new("", pts).color(CONTAINER_COLOR).width(1.0));
    }
}
