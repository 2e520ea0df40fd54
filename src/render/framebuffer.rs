//! CPU framebuffer used for headless capture.
use std::io::{self, Write};

use crate::render::projector::{CEILING, FLOOR, Frame, Rgb};
use crate::render::topdown::TopDownView;

/// Colour of cleared pixels and of reads outside the buffer.
pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);

pub struct Framebuffer {
    color_buffer: Vec<Rgb>,
    width: u32,
    height: u32,
    current_color: Rgb,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![BACKGROUND; size],
            width,
            height,
            current_color: Rgb::new(255, 255, 255),
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(BACKGROUND);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            let idx = self.index(x as u32, y as u32);
            self.color_buffer[idx] = self.current_color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Rgb {
        if x < self.width && y < self.height {
            return self.color_buffer[self.index(x, y)];
        }
        BACKGROUND
    }

    #[inline] pub fn set_current_color(&mut self, c: Rgb) { self.current_color = c; }

    /// Fills `[x, x+w) x [y, y+h)` clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        for yy in y0..y1 {
            let row = self.index(0, yy as u32);
            for xx in x0..x1 {
                self.color_buffer[row + xx as usize] = color;
            }
        }
    }

    /// Integer Bresenham line, clipped per pixel.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        self.set_current_color(color);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            self.set_pixel(x, y);
            if x == x1 && y == y1 { break; }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; x += sx; }
            if e2 <= dx { err += dx; y += sy; }
        }
    }

    /// Ceiling above the midline, floor below.
    pub fn paint_backdrop(&mut self) {
        let w = self.width as i32;
        let h = self.height as i32;
        self.fill_rect(0, 0, w, h, CEILING);
        self.fill_rect(0, h / 2, w, h / 2, FLOOR);
    }

    pub fn draw_frame(&mut self, frame: &Frame) {
        self.paint_backdrop();
        for s in &frame.walls {
            self.fill_rect(s.screen_x_start, s.y_top, s.screen_width, s.height, s.color);
        }
        for s in &frame.sprites {
            self.fill_rect(s.x, s.y, s.size, s.size, s.color);
        }
    }

    pub fn draw_top_down(&mut self, view: &TopDownView) {
        self.clear();
        for c in &view.cells {
            self.fill_rect(c.x, c.y, c.w, c.h, c.color);
        }
        for s in &view.rays {
            self.draw_line(s.x0, s.y0, s.x1, s.y1, s.color);
        }
        for m in &view.markers {
            self.fill_rect(m.x, m.y, m.w, m.h, m.color);
        }
    }

    /// Binary PPM (P6).
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let mut bytes = Vec::with_capacity(self.color_buffer.len() * 3);
        for c in &self.color_buffer {
            bytes.extend_from_slice(&[c.r, c.g, c.b]);
        }
        out.write_all(&bytes)?;
        out.flush()
    }
}
