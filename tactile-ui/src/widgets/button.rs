use std::path::Path;

use crate::{Clickable, Color, Payload, PayloadLoader, Rect, ResourceLoadError, Surface, UiAction, Widget};
use crate::input::Pointer;

const CORNER_RADIUS: f32 = 20.0;
const STROKE_WIDTH: f32 = 2.0;

/// 内容在按钮内居中的左上角坐标 (整数除法向下取整)
pub(crate) fn centered(pos: (i32, i32), size: (i32, i32), content: (i32, i32)) -> (i32, i32) {
    (
        pos.0 + (size.0.div_euclid(2) - content.0.div_euclid(2)),
        pos.1 + (size.1.div_euclid(2) - content.1.div_euclid(2)),
    )
}

pub struct PushButton<P> {
    pub(crate) pos: (i32, i32),
    pub(crate) size: (i32, i32),
    pub(crate) rect: Rect,

    base_color: Color,
    pub(crate) color: Color,

    pub(crate) payload: P,
    action: UiAction,
}

impl<P: Payload> PushButton<P> {
    /// 没有图片时渲染文字，有图片时用图片本身的像素尺寸
    pub fn new<L>(
        loader: &mut L,
        label: &str,
        text_size: u32,
        pos: (i32, i32),
        size: (i32, i32),
        color: Color,
        image: Option<&Path>,
    ) -> Result<Self, ResourceLoadError>
    where
        L: PayloadLoader<Payload = P>,
    {
        let payload = match image {
            None => loader.render_text(label, text_size, Color::WHITE)?,
            Some(path) => {
                log::debug!("Loading button image: {:?}", path);
                loader.load_image(path)?
            }
        };

        Ok(Self::from_payload(pos, size, color, payload))
    }

    pub fn from_payload(pos: (i32, i32), size: (i32, i32), color: Color, payload: P) -> Self {
        Self {
            pos,
            size,
            rect: Rect::from_ints(pos, size),
            base_color: color,
            color,
            payload,
            action: UiAction::None,
        }
    }

    /// 点击时交给宿主的指令
    pub fn with_action(mut self, action: UiAction) -> Self {
        self.action = action;
        self
    }

    /// 悬停变灰；按住时每一帧都会触发 `interact`
    pub fn update(&mut self, x: f32, y: f32, pressed: bool) -> UiAction {
        let interaction = Pointer::new(x, y, pressed).hit(self.rect);

        if !interaction.is_hovered() {
            self.color = self.base_color;
            return UiAction::None;
        }

        self.color = Color::HIGHLIGHT;
        if interaction.is_pressed() {
            return self.interact();
        }
        UiAction::None
    }

    pub fn draw<S: Surface<Payload = P>>(&self, surface: &mut S) {
        self.draw_framed(surface, STROKE_WIDTH);
    }

    pub(crate) fn draw_framed<S: Surface<Payload = P>>(&self, surface: &mut S, stroke: f32) {
        surface.draw_rect(self.rect, self.color, stroke, CORNER_RADIUS);
        let at = centered(self.pos, self.size, self.payload.size());
        surface.blit(&self.payload, at);
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn base_color(&self) -> Color {
        self.base_color
    }

    pub fn payload_size(&self) -> (i32, i32) {
        self.payload.size()
    }
}

impl<P: Payload> Clickable for PushButton<P> {
    fn interact(&mut self) -> UiAction {
        self.action.clone()
    }
}

impl<P: Payload, S: Surface<Payload = P>> Widget<S> for PushButton<P> {
    fn update(&mut self, x: f32, y: f32, pressed: bool) -> UiAction {
        PushButton::update(self, x, y, pressed)
    }

    fn draw(&self, surface: &mut S) {
        PushButton::draw(self, surface)
    }
}
