use crate::{Color, Rect, Surface, UiAction, Widget};

/// 命中区域上下额外扩出的距离
const CATCH_Y: f32 = 20.0;
/// 命中区域左右额外扩出的距离
const CATCH_X: f32 = 10.0;
const TRACK_RADIUS: f32 = 10.0;
/// 拖动时圆钮每个通道加亮的量
const PULSE: u8 = 10;

pub struct Slider {
    pos: (i32, i32),
    size: (i32, i32),
    progress: i32,

    track_color: Color, // 已填充部分 / 单色轨道
    fill_color: Color,  // 未填充部分
    stylish: bool,

    hit_rect: Rect,
    track_rect: Rect,
    touched: bool,
}

impl Slider {
    pub fn new(pos: (i32, i32), size: (i32, i32)) -> Self {
        let visual = Rect::from_ints(pos, size);
        // 轨道只保留高度的三分之一
        let track_h = size.1 - size.1.div_euclid(3) * 2;

        Self {
            pos,
            size,
            progress: 50,
            track_color: Color::NAVY,
            fill_color: Color::WHITE,
            stylish: false,
            hit_rect: visual.inflate(CATCH_X, CATCH_Y),
            track_rect: Rect::from_ints(pos, (size.0, track_h)),
            touched: false,
        }
    }

    /// 初始进度，这里不做范围检查
    pub fn preset(mut self, progress: i32) -> Self {
        self.progress = progress;
        self
    }

    /// 双色轨道：左边已填充，右边未填充
    pub fn stylish(mut self, stylish: bool) -> Self {
        self.stylish = stylish;
        self
    }

    pub fn colors(mut self, track: Color, fill: Color) -> Self {
        self.track_color = track;
        self.fill_color = fill;
        self
    }

    /// 按下且在命中区域内时，进度直接跳到指针所在的位置
    pub fn update(&mut self, x: f32, y: f32, pressed: bool) -> UiAction {
        if !(pressed && self.hit_rect.contains(x, y)) {
            self.touched = false;
            return UiAction::None;
        }

        // 先乘后除，半格位置能精确落在 .5 上
        let raw = (x - self.pos.0 as f32) * 100.0 / self.size.0 as f32;
        // 恰好在 .5 上时取偶数；NaN (宽度为 0) 转成 0，无穷大饱和到 i32 边界
        self.progress = (raw.round_ties_even() as i32).clamp(0, 100);
        self.touched = true;
        UiAction::Progress(self.progress)
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        let center_x = self.thumb_x();
        let knob_color = if self.touched {
            self.track_color.brighten(PULSE)
        } else {
            self.track_color
        };

        if self.stylish {
            let (filled, rest) = self.track_segments();
            surface.draw_rect(filled, self.track_color, 0.0, TRACK_RADIUS);
            surface.draw_rect(rest, self.fill_color, 0.0, TRACK_RADIUS);
        } else {
            surface.draw_rect(self.track_rect, self.track_color, 0.0, TRACK_RADIUS);
        }

        let center_y = self.pos.1 as f32 + self.size.1 as f32 / 3.0;
        let radius = (self.size.1.div_euclid(3) * 2) as f32;
        surface.draw_circle((center_x, center_y), radius, knob_color);
    }

    /// 圆钮中心的 x 坐标
    pub fn thumb_x(&self) -> f32 {
        self.pos.0 as f32 + self.progress as f32 * self.size.0 as f32 / 100.0
    }

    /// 双色模式下的两段轨道。
    /// 右段从轨道末端开始，宽度是 `thumb_x - 轨道末端`，进度不到 100 时为负。
    pub fn track_segments(&self) -> (Rect, Rect) {
        let t = self.track_rect;
        let center_x = self.thumb_x();
        let filled = Rect::new(t.x, t.y, center_x - t.x, t.h);
        let rest = Rect::new(t.right(), t.y, center_x - t.right(), t.h);
        (filled, rest)
    }

    pub fn get_progress(&self) -> i32 {
        self.progress
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn hit_rect(&self) -> Rect {
        self.hit_rect
    }

    pub fn track_rect(&self) -> Rect {
        self.track_rect
    }
}

impl<S: Surface> Widget<S> for Slider {
    fn update(&mut self, x: f32, y: f32, pressed: bool) -> UiAction {
        Slider::update(self, x, y, pressed)
    }

    fn draw(&self, surface: &mut S) {
        Slider::draw(self, surface)
    }
}
