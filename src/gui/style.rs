//! Shared look: gradient backgrounds, purple buttons, white labels.

use egui::epaint::Mesh;
use egui::style::WidgetVisuals;
use egui::{Color32, Painter, Rect, RichText, Rounding, Shape, Stroke};

pub const RED: Color32 = Color32::from_rgb(255, 0, 0);
pub const PURPLE: Color32 = Color32::from_rgb(128, 0, 128); // #800080
pub const DARK_PURPLE: Color32 = Color32::from_rgb(75, 0, 130); // #4B0082

pub const BUTTON_WIDTH: f32 = 250.0;
const BUTTON_HEIGHT: f32 = 44.0;
const BUTTON_ROUNDING: f32 = 20.0;
const BUTTON_TEXT_SIZE: f32 = 18.0;
pub const LABEL_TEXT_SIZE: f32 = 20.0;

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

/// Linear blend between two opaque colors.
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    Color32::from_rgb(
        lerp_u8(a.r(), b.r(), t),
        lerp_u8(a.g(), b.g(), t),
        lerp_u8(a.b(), b.b(), t),
    )
}

fn paint_quad(painter: &Painter, rect: Rect, colors: [Color32; 4]) {
    // Corner order: top-left, top-right, bottom-right, bottom-left.
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), colors[0]);
    mesh.colored_vertex(rect.right_top(), colors[1]);
    mesh.colored_vertex(rect.right_bottom(), colors[2]);
    mesh.colored_vertex(rect.left_bottom(), colors[3]);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Top-to-bottom gradient.
pub fn paint_vertical_gradient(painter: &Painter, rect: Rect, top: Color32, bottom: Color32) {
    paint_quad(painter, rect, [top, top, bottom, bottom]);
}

/// Top-left to bottom-right gradient.
pub fn paint_diagonal_gradient(painter: &Painter, rect: Rect, start: Color32, end: Color32) {
    let mid = lerp_color(start, end, 0.5);
    paint_quad(painter, rect, [start, mid, end, mid]);
}

fn apply_button_visuals(visuals: &mut WidgetVisuals, fill: Color32) {
    visuals.bg_fill = fill;
    visuals.weak_bg_fill = fill;
    visuals.bg_stroke = Stroke::NONE;
    visuals.rounding = Rounding::same(BUTTON_ROUNDING);
    visuals.fg_stroke.color = Color32::WHITE;
}

/// Rounded purple button, darker on hover. `width` fixes the minimum width.
pub fn purple_button(ui: &mut egui::Ui, text: &str, width: Option<f32>) -> egui::Response {
    ui.scope(|ui| {
        let widgets = &mut ui.visuals_mut().widgets;
        apply_button_visuals(&mut widgets.inactive, PURPLE);
        apply_button_visuals(&mut widgets.hovered, DARK_PURPLE);
        apply_button_visuals(&mut widgets.active, DARK_PURPLE);

        let button = egui::Button::new(
            RichText::new(text)
                .size(BUTTON_TEXT_SIZE)
                .color(Color32::WHITE),
        )
        .min_size(egui::vec2(width.unwrap_or(0.0), BUTTON_HEIGHT));
        ui.add(button)
    })
    .inner
}

/// Large white label text.
pub fn white_text(text: impl Into<String>) -> RichText {
    RichText::new(text).size(LABEL_TEXT_SIZE).color(Color32::WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp_color(RED, PURPLE, 0.0), RED);
        assert_eq!(lerp_color(RED, PURPLE, 1.0), PURPLE);
        assert_eq!(lerp_color(RED, PURPLE, 0.5), Color32::from_rgb(192, 0, 64));
    }

    #[test]
    fn lerp_clamps_out_of_range() {
        assert_eq!(lerp_color(RED, PURPLE, -1.0), RED);
        assert_eq!(lerp_color(RED, PURPLE, 2.0), PURPLE);
    }
}
