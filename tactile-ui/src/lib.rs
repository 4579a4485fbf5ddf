pub mod error;
pub mod input;
pub mod types;
pub mod widgets;

use std::path::Path;

pub use error::ResourceLoadError;
pub use input::{Interaction, Pointer, UiContext};
pub use types::{Color, Rect};

/// 可绘制的内容 (文字渲染结果或图片)，控件只关心它的尺寸
pub trait Payload {
    fn size(&self) -> (i32, i32);
}

/// 文字/图片的加载端，由宿主在构造控件前初始化好
pub trait PayloadLoader {
    type Payload: Payload;

    /// 把文字渲染成一张贴图
    fn render_text(&mut self, text: &str, size: u32, color: Color) -> Result<Self::Payload, ResourceLoadError>;

    /// 读取并解码图片
    fn load_image(&mut self, path: &Path) -> Result<Self::Payload, ResourceLoadError>;
}

pub trait Surface {
    type Payload: Payload;

    /// 绘制圆角矩形，`stroke == 0` 时为实心
    fn draw_rect(&mut self, rect: Rect, color: Color, stroke: f32, radius: f32);

    /// 绘制实心圆
    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Color);

    /// 把内容贴到左上角 `pos` 处
    fn blit(&mut self, payload: &Self::Payload, pos: (i32, i32));
}

/// 控件交给宿主解释的指令
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiAction {
    #[default]
    None,
    Quit,
    CloseSettings,
    Toggled(bool),
    Progress(i32),
}

/// 所有控件的逐帧约定：先 `update` 再 `draw`
pub trait Widget<S: Surface> {
    fn update(&mut self, x: f32, y: f32, pressed: bool) -> UiAction;

    fn draw(&self, surface: &mut S);
}

pub trait Clickable {
    /// 点击触发
    fn interact(&mut self) -> UiAction;
}
