use std::fs;
use std::path::Path;

use skia_safe::{png_encoder, surfaces};
use tactile_ui::Color;
use thiserror::Error;

use crate::surface::{to_skia_color, SkiaSurface};

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Cannot allocate a {width}x{height} raster surface")]
    Allocate { width: i32, height: i32 },
    #[error("Failed to encode frame as PNG")]
    Encode,
    #[error("Could not write frame: {0}")]
    Io(#[from] std::io::Error),
}

/// 离屏画布，宿主每帧清屏后把控件画进来
pub struct Frame {
    surface: skia_safe::Surface,
    background: Color,
}

impl Frame {
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, FrameError> {
        let surface = surfaces::raster_n32_premul((width, height))
            .ok_or(FrameError::Allocate { width, height })?;
        Ok(Self { surface, background })
    }

    /// 清屏并返回本帧的绘制目标
    pub fn begin(&mut self) -> SkiaSurface<'_> {
        let canvas = self.surface.canvas();
        canvas.clear(to_skia_color(self.background));
        SkiaSurface::new(canvas)
    }

    pub fn size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    pub fn save_png(&mut self, path: &Path) -> Result<(), FrameError> {
        let pixmap = self.surface.peek_pixels().ok_or(FrameError::Encode)?;
        let mut bytes = Vec::new();
        if !png_encoder::encode(&pixmap, &mut bytes, &png_encoder::Options::default()) {
            return Err(FrameError::Encode);
        }
        fs::write(path, &bytes)?;
        log::debug!("Frame written to {:?}", path);
        Ok(())
    }
}
