use glam::Vec2;
use image::RgbaImage;

use super::TextureId;
use crate::text::Font;

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub(crate) fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64 / 255.0,
            g: self.g as f64 / 255.0,
            b: self.b as f64 / 255.0,
            a: self.a as f64 / 255.0,
        }
    }
}

/// Axis-aligned rectangle in canvas pixels, origin top-left, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn min(&self) -> Vec2 {
        self.origin
    }

    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }
}

#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Draws an uploaded texture stretched over `dest`.
    Sprite { texture: TextureId, dest: Rect },
    /// Draws a CPU-side image that lives for this frame only.
    Image { image: RgbaImage, dest: Rect },
}

impl DrawCommand {
    pub fn dest(&self) -> Rect {
        match self {
            DrawCommand::Sprite { dest, .. } | DrawCommand::Image { dest, .. } => *dest,
        }
    }
}

/// One frame worth of draw commands, executed in recording order.
#[derive(Debug, Clone)]
pub struct Frame {
    canvas: Vec2,
    clear: Color,
    commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new(canvas: Vec2) -> Self {
        Self {
            canvas,
            clear: Color::BLACK,
            commands: Vec::new(),
        }
    }

    pub fn canvas(&self) -> Vec2 {
        self.canvas
    }

    pub fn clear_color(&self) -> Color {
        self.clear
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drops everything recorded so far and sets the background colour.
    pub fn clear(&mut self, color: Color) {
        self.clear = color;
        self.commands.clear();
    }

    pub fn draw_sprite(&mut self, texture: TextureId, dest: Rect) {
        self.commands.push(DrawCommand::Sprite { texture, dest });
    }

    pub fn draw_image(&mut self, image: RgbaImage, top_left: Vec2) {
        let dest = Rect {
            origin: top_left,
            size: Vec2::new(image.width() as f32, image.height() as f32),
        };
        self.commands.push(DrawCommand::Image { image, dest });
    }

    /// Rasterizes `text` and draws it with its top-left corner at `top_left`.
    pub fn draw_text(&mut self, font: &Font, text: &str, color: Color, top_left: Vec2) {
        let image = font.rasterize(text, color.to_array());
        self.draw_image(image, top_left);
    }

    /// Like [`Frame::draw_text`], centered horizontally on the canvas.
    pub fn draw_text_centered(&mut self, font: &Font, text: &str, color: Color, y: f32) {
        let image = font.rasterize(text, color.to_array());
        let x = ((self.canvas.x - image.width() as f32) * 0.5).max(0.0);
        self.draw_image(image, Vec2::new(x.floor(), y));
    }
}
