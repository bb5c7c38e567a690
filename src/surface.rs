//! The drawing surface the field renders onto.

use cgmath::{Point2, Vector2};
use eframe::egui;

/// RGB color with an alpha factor in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn same_rgb(&self, other: &Color) -> bool {
        (self.r, self.g, self.b) == (other.r, other.g, other.b)
    }
}

impl From<Color> for egui::Color32 {
    fn from(color: Color) -> Self {
        let alpha = (color.alpha * 255.0).round() as u8;
        egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
    }
}

/// Maps a screen position into the coordinates of a surface occupying
/// `rect`. Positions outside `rect`, or no position at all, give `None`.
pub fn surface_pointer(pos: Option<egui::Pos2>, rect: egui::Rect) -> Option<Point2<f32>> {
    pos.filter(|pos| rect.contains(*pos))
        .map(|pos| Point2::new(pos.x - rect.min.x, pos.y - rect.min.y))
}

pub trait Surface {
    /// Width and height in surface units.
    fn size(&self) -> Vector2<f32>;
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Point2<f32>, radius: f32, color: Color);
    fn line(&mut self, from: Point2<f32>, to: Point2<f32>, color: Color, width: f32);
}

/// A [`Surface`] backed by an egui painter. Surface coordinates are relative
/// to the top left corner of `rect`.
pub struct EguiCanvas {
    painter: egui::Painter,
    rect: egui::Rect,
    background: Color,
}

impl EguiCanvas {
    pub fn new(painter: egui::Painter, rect: egui::Rect, background: Color) -> Self {
        Self {
            painter,
            rect,
            background,
        }
    }

    fn to_screen(&self, point: Point2<f32>) -> egui::Pos2 {
        self.rect.min + egui::vec2(point.x, point.y)
    }
}

impl Surface for EguiCanvas {
    fn size(&self) -> Vector2<f32> {
        Vector2::new(self.rect.width(), self.rect.height())
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn fill_circle(&mut self, center: Point2<f32>, radius: f32, color: Color) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color);
    }

    fn line(&mut self, from: Point2<f32>, to: Point2<f32>, color: Color, width: f32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(width, color),
        );
    }
}
