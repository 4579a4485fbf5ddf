use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: i32,
    pub height: i32,
    pub background: [u8; 3],
    /// 找不到时由字体管理器回退到系统默认字体
    pub font_family: String,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// 该目录下的 ttf/otf 会被注册，别名为文件名
    pub fonts_path: String,
}

impl RenderConfig {
    /// 读取全局配置里的 `[render]` 段，未初始化或缺失时为默认值
    pub fn load() -> Self {
        tactile_shared::config::get("render")
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 466,
            background: [0, 0, 0],
            font_family: "Consolas".to_string(),
            assets: AssetsConfig::default(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            fonts_path: "./assets/fonts".to_string(),
        }
    }
}
