#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use tactile_ui::{Color, Payload, PayloadLoader, Rect, ResourceLoadError, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub text: String,
    pub color: Color,
    pub w: i32,
    pub h: i32,
}

impl Payload for Glyph {
    fn size(&self) -> (i32, i32) {
        (self.w, self.h)
    }
}

/// 文字宽度 = 字数 * 字号 / 2，高度 = 字号
#[derive(Default)]
pub struct FakeLoader {
    pub images: HashMap<PathBuf, (i32, i32)>,
    pub rendered: Vec<String>,
}

impl FakeLoader {
    pub fn with_image(mut self, path: &str, size: (i32, i32)) -> Self {
        self.images.insert(PathBuf::from(path), size);
        self
    }
}

impl PayloadLoader for FakeLoader {
    type Payload = Glyph;

    fn render_text(&mut self, text: &str, size: u32, color: Color) -> Result<Glyph, ResourceLoadError> {
        self.rendered.push(text.to_string());
        Ok(Glyph {
            text: text.to_string(),
            color,
            w: text.chars().count() as i32 * size as i32 / 2,
            h: size as i32,
        })
    }

    fn load_image(&mut self, path: &Path) -> Result<Glyph, ResourceLoadError> {
        match self.images.get(path) {
            Some(&(w, h)) => Ok(Glyph {
                text: path.display().to_string(),
                color: Color::WHITE,
                w,
                h,
            }),
            None => Err(ResourceLoadError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Rect { rect: Rect, color: Color, stroke: f32, radius: f32 },
    Circle { center: (f32, f32), radius: f32, color: Color },
    Blit { text: String, pos: (i32, i32) },
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn rects(&self) -> Vec<(Rect, Color, f32, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rect { rect, color, stroke, radius } => Some((*rect, *color, *stroke, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<((f32, f32), f32, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Circle { center, radius, color } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn blits(&self) -> Vec<(String, (i32, i32))> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Blit { text, pos } => Some((text.clone(), *pos)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    type Payload = Glyph;

    fn draw_rect(&mut self, rect: Rect, color: Color, stroke: f32, radius: f32) {
        self.ops.push(Op::Rect { rect, color, stroke, radius });
    }

    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        self.ops.push(Op::Circle { center, radius, color });
    }

    fn blit(&mut self, payload: &Glyph, pos: (i32, i32)) {
        self.ops.push(Op::Blit { text: payload.text.clone(), pos });
    }
}
