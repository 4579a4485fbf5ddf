use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub log_path: String,
    pub log_level: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_path: "logs/".into(),
            log_level: "info".into(),
        }
    }
}

/// 一段持续若干帧的指针状态
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerStep {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub pressed: bool,
    #[serde(default = "one_frame")]
    pub frames: u32,
}

fn one_frame() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// 最多运行的帧数
    pub frames: u32,
    /// 每隔多少帧保存一张截图，0 表示不保存
    pub snapshot_every: u32,
    pub output_path: String,
    /// 设置后 "Close Window" 按钮改用这张图片
    pub image_button: Option<String>,
    pub steps: Vec<PointerStep>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let step = |x, y, pressed, frames| PointerStep { x, y, pressed, frames };
        Self {
            frames: 600,
            snapshot_every: 10,
            output_path: "frames/".into(),
            image_button: None,
            steps: vec![
                step(250.0, 129.0, false, 30), // 悬停在 Close Window 上
                step(250.0, 375.0, true, 10),  // 按住开关
                step(250.0, 375.0, false, 5),
                step(150.0, 282.0, true, 5),   // 拖动滑块
                step(250.0, 282.0, true, 5),
                step(250.0, 282.0, false, 10),
                step(475.0, 70.0, true, 1),    // 关闭设置面板
                step(475.0, 70.0, false, 5),
                step(250.0, 129.0, true, 1),   // 退出
            ],
        }
    }
}
