use crate::Rect;

/// 单帧的指针快照
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
    /// 左键是否处于按下状态 (按住时每帧都为 true)
    pub pressed: bool,
}

impl Pointer {
    pub fn new(x: f32, y: f32, pressed: bool) -> Self {
        Self { x, y, pressed }
    }

    /// 按钮用的命中检测，边上的点不算在内
    pub fn hit(&self, rect: Rect) -> Interaction {
        if !rect.contains_strict(self.x, self.y) {
            return Interaction::None;
        }
        if self.pressed {
            Interaction::Pressed
        } else {
            Interaction::Hovered
        }
    }
}

pub struct UiContext {
    pointer: Pointer,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            pointer: Pointer::default(),
        }
    }

    /// 更新输入状态 (由宿主每帧调用一次)
    pub fn feed(&mut self, x: f32, y: f32, pressed: bool) {
        self.pointer = Pointer::new(x, y, pressed);
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    None,
    Hovered,
    Pressed, // 悬停且按下
}

impl Interaction {
    pub fn is_hovered(&self) -> bool {
        !matches!(self, Interaction::None)
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, Interaction::Pressed)
    }
}
