#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };
    pub const RED: Self = Self { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Self = Self { r: 0, g: 255, b: 0, a: 255 };
    pub const NAVY: Self = Self { r: 0, g: 0, b: 155, a: 255 };
    /// 按钮悬停时的描边颜色
    pub const HIGHLIGHT: Self = Self { r: 200, g: 200, b: 200, a: 255 };

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// 每个通道加亮 `amount`，到 255 封顶 (alpha 不变)
    pub fn brighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
            a: self.a,
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// 整数几何 (位置 + 尺寸) 转为绘制用矩形
    pub fn from_ints(pos: (i32, i32), size: (i32, i32)) -> Self {
        Self::new(pos.0 as f32, pos.1 as f32, size.0 as f32, size.1 as f32)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// 半开区间：左/上边包含，右/下边不包含
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() &&
            y >= self.y && y < self.bottom()
    }

    /// 严格包含：四条边都不算在内
    pub fn contains_strict(&self, x: f32, y: f32) -> bool {
        x > self.x && x < self.right() &&
            y > self.y && y < self.bottom()
    }

    /// 左右各扩 `dx`，上下各扩 `dy`
    pub fn inflate(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(
            self.x - dx,
            self.y - dy,
            self.w + dx * 2.0,
            self.h + dy * 2.0,
        )
    }
}
