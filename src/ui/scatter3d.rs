use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Stroke, Ui, Vec2};

use crate::chart::ChartSpec;
use crate::color::{glow, hex_to_color32};
use crate::theme::ThemeStyle;

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

/// Orbit camera around the unit cube: yaw about the vertical axis, then pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.35,
        }
    }
}

const PITCH_LIMIT: f32 = 1.5;
const DRAG_SPEED: f32 = 0.01;

impl Orbit {
    pub fn drag(&mut self, delta: Vec2) {
        self.yaw += delta.x * DRAG_SPEED;
        self.pitch = (self.pitch + delta.y * DRAG_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Orthographic projection of `p` (z up). Returns `[screen_x, screen_y, depth]`,
    /// screen y pointing up, larger depth further from the viewer.
    pub fn project(&self, p: [f32; 3]) -> [f32; 3] {
        let [x, y, z] = p;
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        let rx = x * cy - y * sy;
        let ry = x * sy + y * cy;
        [rx, z * cp - ry * sp, ry * cp + z * sp]
    }
}

/// Per-axis scaling of data into [-1, 1].
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min: [f64; 3],
    max: [f64; 3],
}

impl Bounds {
    fn of(chart: &ChartSpec) -> Option<Bounds> {
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for trace in &chart.traces {
            let z = trace.z.as_ref()?;
            for ((&x, &y), &z) in trace.x.iter().zip(&trace.y).zip(z) {
                for (axis, v) in [x, y, z].into_iter().enumerate() {
                    min[axis] = min[axis].min(v);
                    max[axis] = max[axis].max(v);
                }
            }
        }
        min[0].is_finite().then_some(Bounds { min, max })
    }

    fn normalise(&self, p: [f64; 3]) -> [f32; 3] {
        let mut out = [0.0f32; 3];
        for axis in 0..3 {
            let range = self.max[axis] - self.min[axis];
            out[axis] = if range.abs() < f64::EPSILON {
                0.0
            } else {
                ((p[axis] - self.min[axis]) / range * 2.0 - 1.0) as f32
            };
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw a 3D chart as a rotatable orthographic projection. Drag to orbit.
pub fn scatter_3d(ui: &mut Ui, chart: &ChartSpec, style: &ThemeStyle, orbit: &mut Orbit, height: f32) {
    let Some(bounds) = Bounds::of(chart) else {
        ui.label("No 3D data.");
        return;
    };

    let size = egui::vec2(ui.available_width(), height);
    let (response, painter) = ui.allocate_painter(size, Sense::drag());
    if response.dragged() {
        orbit.drag(response.drag_delta());
    }

    let rect = response.rect;
    painter.rect_filled(rect, 4.0, style.background);
    painter.text(
        rect.center_top() + egui::vec2(0.0, 14.0),
        Align2::CENTER_CENTER,
        &chart.title,
        FontId::proportional(15.0),
        style.text,
    );

    let scale = rect.width().min(rect.height()) * 0.3;
    let center = rect.center();
    let to_screen = |p: [f32; 3]| -> (Pos2, f32) {
        let [sx, sy, depth] = orbit.project(p);
        (Pos2::new(center.x + sx * scale, center.y - sy * scale), depth)
    };

    // Cube edges.
    let corners: Vec<[f32; 3]> = (0..8)
        .map(|i| {
            [
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                if i & 4 == 0 { -1.0 } else { 1.0 },
            ]
        })
        .collect();
    for a in 0..8usize {
        for bit in [1usize, 2, 4] {
            let b = a | bit;
            if b != a {
                painter.line_segment(
                    [to_screen(corners[a]).0, to_screen(corners[b]).0],
                    Stroke::new(1.0, style.grid),
                );
            }
        }
    }

    // Axis labels at the far end of each axis from the origin corner.
    let axis_names = [Some(chart.x), Some(chart.y), chart.z];
    for (axis, name) in axis_names.into_iter().enumerate() {
        let Some(name) = name else { continue };
        let mut tip = [-1.0f32; 3];
        tip[axis] = 1.15;
        painter.text(
            to_screen(tip).0,
            Align2::CENTER_CENTER,
            name.label(),
            FontId::proportional(12.0),
            style.text,
        );
    }

    // Markers, far to near.
    let mut markers: Vec<(Pos2, f32, Color32)> = Vec::new();
    for trace in &chart.traces {
        let Some(zs) = &trace.z else { continue };
        let base = hex_to_color32(&trace.color).unwrap_or(Color32::GRAY);
        let color = style.marker_color(base);
        for ((&x, &y), &z) in trace.x.iter().zip(&trace.y).zip(zs) {
            let (pos, depth) = to_screen(bounds.normalise([x, y, z]));
            markers.push((pos, depth, color));
        }
    }
    markers.sort_by(|a, b| b.1.total_cmp(&a.1));
    for (pos, _, color) in markers {
        if style.glow {
            painter.circle_filled(pos, style.marker_radius * 1.8, glow(color));
        }
        painter.circle_filled(pos, style.marker_radius, color);
    }

    response.on_hover_text("Drag to rotate");
}
