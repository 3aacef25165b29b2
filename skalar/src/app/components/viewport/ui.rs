use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Vec2};

use scene_core::format::round_to;
use scene_core::{scale, VectorState};

use crate::app::config::Config;

const GRID_COLOR: Color32 = Color32::from_rgb(220, 230, 240);
const AXIS_COLOR: Color32 = Color32::from_rgb(140, 140, 140);
const TICK_COLOR: Color32 = Color32::from_rgb(70, 70, 70);
const LABEL_COLOR: Color32 = Color32::from_rgb(30, 30, 30);
const BASE_COLOR: Color32 = Color32::from_rgb(46, 160, 113);
const SCALED_POSITIVE_COLOR: Color32 = Color32::from_rgb(43, 143, 214);
const SCALED_NEGATIVE_COLOR: Color32 = Color32::from_rgb(224, 75, 75);

const GRID_STROKE_WIDTH: f32 = 1.0;
const AXIS_STROKE_WIDTH: f32 = 1.6;
const BASE_STROKE_WIDTH: f32 = 3.0;
const SCALED_STROKE_WIDTH: f32 = 3.6;
const BASE_ARROW_SIZE: f64 = 8.0;
const SCALED_ARROW_SIZE: f64 = 10.0;

impl super::Viewport {
    pub fn render(&mut self, state: &VectorState, config: &Config, ui: &mut egui::Ui) {
        let side = scale::canvas_side(ui.available_width(), config.min_canvas_side);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
        let rect = response.rect;
        // A collapsed container paints nothing.
        if !rect.is_positive() {
            return;
        }

        let center = rect.center();
        let (w, h) = (rect.width() as f64, rect.height() as f64);
        let unit = scale::pixels_per_unit(state, w, h);

        painter.rect_filled(rect, 0.0, Color32::WHITE);
        // Oversized vectors clip at the canvas edge instead of rescaling
        // below the legibility floor.
        let painter = painter.with_clip_rect(rect);

        draw_grid(&painter, center, w, h, unit);
        draw_axes(&painter, center, w, h);
        draw_ticks(&painter, center, w, h, unit);

        draw_vector(
            &painter,
            center,
            scale::to_screen(state.x, state.y, unit),
            BASE_COLOR,
            BASE_STROKE_WIDTH,
            BASE_ARROW_SIZE,
        );
        let (sx, sy) = state.scaled();
        let scaled_color = if state.k < 0.0 {
            SCALED_NEGATIVE_COLOR
        } else {
            SCALED_POSITIVE_COLOR
        };
        draw_vector(
            &painter,
            center,
            scale::to_screen(sx, sy, unit),
            scaled_color,
            SCALED_STROKE_WIDTH,
            SCALED_ARROW_SIZE,
        );

        draw_labels(&painter, rect.left_top(), w, state);
    }
}

fn draw_grid(painter: &egui::Painter, center: Pos2, w: f64, h: f64, unit: f64) {
    let stroke = Stroke::new(GRID_STROKE_WIDTH, GRID_COLOR);
    let (half_w, half_h) = ((w / 2.0) as f32, (h / 2.0) as f32);
    for off in scale::grid_offsets(w / 2.0, unit) {
        let x = center.x + off as f32;
        painter.line_segment(
            [
                Pos2::new(x, center.y - half_h),
                Pos2::new(x, center.y + half_h),
            ],
            stroke,
        );
    }
    for off in scale::grid_offsets(h / 2.0, unit) {
        let y = center.y + off as f32;
        painter.line_segment(
            [
                Pos2::new(center.x - half_w, y),
                Pos2::new(center.x + half_w, y),
            ],
            stroke,
        );
    }
}

fn draw_axes(painter: &egui::Painter, center: Pos2, w: f64, h: f64) {
    let stroke = Stroke::new(AXIS_STROKE_WIDTH, AXIS_COLOR);
    let (half_w, half_h) = ((w / 2.0) as f32, (h / 2.0) as f32);
    let inset = scale::AXIS_INSET as f32;
    painter.line_segment(
        [
            Pos2::new(center.x - half_w + inset, center.y),
            Pos2::new(center.x + half_w - inset, center.y),
        ],
        stroke,
    );
    painter.line_segment(
        [
            Pos2::new(center.x, center.y - half_h + inset),
            Pos2::new(center.x, center.y + half_h - inset),
        ],
        stroke,
    );
}

fn draw_ticks(painter: &egui::Painter, center: Pos2, w: f64, h: f64, unit: f64) {
    let font = FontId::proportional(scale::tick_text_size(w) as f32);
    let x_range = scale::tick_range(w / 2.0, unit);
    for i in -x_range..=x_range {
        let pos = center + egui::vec2((i as f64 * unit) as f32, 12.0);
        painter.text(pos, Align2::CENTER_CENTER, i, font.clone(), TICK_COLOR);
    }
    let y_range = scale::tick_range(h / 2.0, unit);
    for j in -y_range..=y_range {
        // The origin is already labelled on the x axis.
        if j == 0 {
            continue;
        }
        let pos = center + egui::vec2(-12.0, (-j as f64 * unit) as f32);
        painter.text(pos, Align2::CENTER_CENTER, j, font.clone(), TICK_COLOR);
    }
}

fn draw_vector(
    painter: &egui::Painter,
    center: Pos2,
    offset: (f64, f64),
    color: Color32,
    stroke_width: f32,
    arrow_size: f64,
) {
    let (dx, dy) = offset;
    let tip = center + egui::vec2(dx as f32, dy as f32);
    painter.line_segment([center, tip], Stroke::new(stroke_width, color));
    let head: Vec<Pos2> = scale::arrowhead(dx, dy, arrow_size)
        .into_iter()
        .map(|(px, py)| center + egui::vec2(px as f32, py as f32))
        .collect();
    painter.add(Shape::convex_polygon(head, LABEL_COLOR, Stroke::NONE));
}

fn draw_labels(painter: &egui::Painter, corner: Pos2, w: f64, state: &VectorState) {
    let font = FontId::proportional(scale::label_text_size(w) as f32);
    painter.text(
        corner + egui::vec2(8.0, 8.0),
        Align2::LEFT_TOP,
        format!("{}({}, {})", state.name, state.x, state.y),
        font.clone(),
        LABEL_COLOR,
    );
    let (sx, sy) = state.scaled();
    painter.text(
        corner + egui::vec2(8.0, 28.0),
        Align2::LEFT_TOP,
        format!("k{}({}, {})", state.name, round_to(sx, 2), round_to(sy, 2)),
        font,
        LABEL_COLOR,
    );
}
