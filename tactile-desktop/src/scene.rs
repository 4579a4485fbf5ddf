use std::path::Path;

use tactile_ui::widgets::{PushButton, Slider, ToggleButton};
use tactile_ui::{Color, PayloadLoader, Pointer, ResourceLoadError, Surface, UiAction};

// 设计分辨率
pub const WIDTH: i32 = 500;
pub const HEIGHT: i32 = 466;

const READOUT_SIZE: u32 = 20;

/// 宿主循环该继续还是退出
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Scene<L: PayloadLoader> {
    loader: L,

    close: PushButton<L::Payload>,
    slider: Slider,
    toggle: ToggleButton<L::Payload>,

    settings_close: PushButton<L::Payload>,
    settings_open: bool,

    readout: L::Payload,
    readout_value: i32,
}

impl<L> Scene<L>
where
    L: PayloadLoader,
    L::Payload: Clone,
{
    pub fn build(mut loader: L, image_button: Option<&Path>) -> Result<Self, ResourceLoadError> {
        let close_pos = ((WIDTH - 300) / 2, (HEIGHT - 50) / 4);
        let close_color = Color::rgb(255, 255, 100);

        let close = match image_button {
            Some(path) => PushButton::new(&mut loader, "Close Window", 40, close_pos, (300, 50), close_color, Some(path))
                .or_else(|e| {
                    log::warn!("{}, falling back to a text button", e);
                    PushButton::new(&mut loader, "Close Window", 40, close_pos, (300, 50), close_color, None)
                })?,
            None => PushButton::new(&mut loader, "Close Window", 40, close_pos, (300, 50), close_color, None)?,
        }
        .with_action(UiAction::Quit);

        let slider = Slider::new(((WIDTH - 300) / 2, (HEIGHT - 50) * 2 / 3), (200, 10))
            .preset(25)
            .stylish(true);

        let toggle = ToggleButton::new(&mut loader, ((WIDTH - 150) / 2, 350), (150, 50), Color::WHITE)?;

        let settings_close = PushButton::new(&mut loader, "Close", 20, (WIDTH - 30, 20), (10, 100), Color::rgb(100, 100, 200), None)?
            .with_action(UiAction::CloseSettings);

        let readout_value = slider.get_progress();
        let readout = loader.render_text(&readout_value.to_string(), READOUT_SIZE, Color::WHITE)?;

        Ok(Self {
            loader,
            close,
            slider,
            toggle,
            settings_close,
            settings_open: true,
            readout,
            readout_value,
        })
    }

    /// 用同一个指针快照更新所有控件，再统一处理返回的指令
    pub fn step(&mut self, pointer: Pointer) -> Result<Flow, ResourceLoadError> {
        let Pointer { x, y, pressed } = pointer;

        let mut actions = vec![
            self.close.update(x, y, pressed),
            self.slider.update(x, y, pressed),
            self.toggle.update(x, y, pressed),
        ];
        if self.settings_open {
            actions.push(self.settings_close.update(x, y, pressed));
        }

        let mut flow = Flow::Continue;
        for action in actions {
            match action {
                UiAction::None => {}
                UiAction::Quit => {
                    log::info!("Quit requested");
                    flow = Flow::Quit;
                }
                UiAction::CloseSettings => {
                    log::info!("Settings panel closed");
                    self.settings_open = false;
                }
                UiAction::Toggled(state) => {
                    log::info!("Toggle is now {}", if state { "ON" } else { "OFF" });
                }
                UiAction::Progress(p) => {
                    if p != self.readout_value {
                        self.readout = self.loader.render_text(&p.to_string(), READOUT_SIZE, Color::WHITE)?;
                        self.readout_value = p;
                    }
                }
            }
        }

        Ok(flow)
    }

    pub fn draw<S: Surface<Payload = L::Payload>>(&self, surface: &mut S) {
        self.close.draw(surface);
        self.slider.draw(surface);
        surface.blit(&self.readout, (10, 10));
        self.toggle.draw(surface);
        if self.settings_open {
            self.settings_close.draw(surface);
        }
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn progress(&self) -> i32 {
        self.slider.get_progress()
    }

    pub fn readout_value(&self) -> i32 {
        self.readout_value
    }

    pub fn toggle_state(&self) -> bool {
        self.toggle.state()
    }
}
