use crate::{Clickable, Color, Payload, PayloadLoader, ResourceLoadError, Surface, UiAction, Widget};
use crate::input::Pointer;
use crate::widgets::PushButton;

/// 一次切换后需要等待的帧数
pub const DEBOUNCE_FRAMES: i32 = 25;
/// 构造时第一次 `interact` 之前的倒计时，保证它不会翻转状态
const INITIAL_COUNTDOWN: i32 = 5;
const LABEL_SIZE: u32 = 20;

const COLORS: [Color; 2] = [Color::RED, Color::GREEN];
const LABELS: [&str; 2] = ["OFF", "ON"];

pub struct ToggleButton<P> {
    base: PushButton<P>,
    state: bool,
    countdown: i32,
    /// 按状态预先渲染好的 "OFF" / "ON"
    labels: [P; 2],
    shown: bool,
}

impl<P: Payload + Clone> ToggleButton<P> {
    pub fn new<L>(loader: &mut L, pos: (i32, i32), size: (i32, i32), color: Color) -> Result<Self, ResourceLoadError>
    where
        L: PayloadLoader<Payload = P>,
    {
        let labels = [
            loader.render_text(LABELS[0], LABEL_SIZE, COLORS[0])?,
            loader.render_text(LABELS[1], LABEL_SIZE, COLORS[1])?,
        ];

        let mut toggle = Self {
            base: PushButton::from_payload(pos, size, color, labels[0].clone()),
            state: false,
            countdown: INITIAL_COUNTDOWN,
            labels,
            shown: false,
        };
        toggle.interact();
        Ok(toggle)
    }

    /// 倒计时每帧减一 (与是否悬停无关)，颜色完全由状态决定
    pub fn update(&mut self, x: f32, y: f32, pressed: bool) -> UiAction {
        if self.countdown > 0 {
            self.countdown -= 1;
        }

        if Pointer::new(x, y, pressed).hit(self.base.rect).is_pressed() {
            return self.interact();
        }
        UiAction::None
    }

    pub fn draw<S: Surface<Payload = P>>(&self, surface: &mut S) {
        self.base.draw_framed(surface, 0.0);
    }

    /// 直接写状态，不经过防抖，也不刷新颜色和文字
    pub fn set_data(&mut self, state: bool) {
        self.state = state;
    }

    /// 按当前状态重新套用颜色和文字，不翻转、不动倒计时
    pub fn refresh_visuals(&mut self) {
        let idx = usize::from(self.state);
        self.base.color = COLORS[idx];
        self.base.payload = self.labels[idx].clone();
        self.shown = self.state;
    }

    pub fn state(&self) -> bool {
        self.state
    }

    /// 当前显示的文字
    pub fn label(&self) -> &'static str {
        LABELS[usize::from(self.shown)]
    }

    pub fn color(&self) -> Color {
        self.base.color
    }

    pub fn debounce_countdown(&self) -> i32 {
        self.countdown
    }

    pub fn payload_size(&self) -> (i32, i32) {
        self.base.payload_size()
    }
}

impl<P: Payload + Clone> Clickable for ToggleButton<P> {
    /// 倒计时未结束时只刷新外观；无论是否翻转都重置倒计时
    fn interact(&mut self) -> UiAction {
        let flipped = self.countdown < 1;
        if flipped {
            self.state = !self.state;
            log::debug!("Toggle flipped to {}", self.state);
        }

        self.refresh_visuals();
        self.countdown = DEBOUNCE_FRAMES;

        if flipped {
            UiAction::Toggled(self.state)
        } else {
            UiAction::None
        }
    }
}

impl<P: Payload + Clone, S: Surface<Payload = P>> Widget<S> for ToggleButton<P> {
    fn update(&mut self, x: f32, y: f32, pressed: bool) -> UiAction {
        ToggleButton::update(self, x, y, pressed)
    }

    fn draw(&self, surface: &mut S) {
        ToggleButton::draw(self, surface)
    }
}
