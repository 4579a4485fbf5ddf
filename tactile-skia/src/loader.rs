use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use skia_safe::textlayout::{FontCollection, ParagraphBuilder, ParagraphStyle, TextStyle, TypefaceFontProvider};
use skia_safe::{surfaces, Data, FontMgr, Image, Point};
use tactile_ui::{Color, PayloadLoader, ResourceLoadError};
use walkdir::WalkDir;

use crate::config::RenderConfig;
use crate::surface::{to_skia_color, SkiaPayload};

/// 文字与图片的加载端。必须在构造任何控件之前创建。
pub struct SkiaLoader {
    fonts: FontCollection,
    font_family: String,
    image_cache: HashMap<PathBuf, Image>,
}

impl SkiaLoader {
    pub fn new(cfg: &RenderConfig) -> Self {
        let mut provider = TypefaceFontProvider::new();
        let registered = register_fonts(Path::new(&cfg.assets.fonts_path), &mut provider);

        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(FontMgr::default(), None);
        if registered > 0 {
            fonts.set_asset_font_manager(Some(provider.into()));
        }

        Self {
            fonts,
            font_family: cfg.font_family.clone(),
            image_cache: HashMap::new(),
        }
    }
}

fn register_fonts(root: &Path, provider: &mut TypefaceFontProvider) -> usize {
    if !root.exists() {
        log::debug!("Font directory {:?} not found, using system fonts only", root);
        return 0;
    }

    let mut count = 0;
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else { continue };
        if !matches!(ext.to_lowercase().as_str(), "ttf" | "otf") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else { continue };

        match fs::read(path) {
            Ok(bytes) => {
                let data = Data::new_copy(&bytes);
                if let Some(typeface) = FontMgr::default().new_from_data(&data, None) {
                    provider.register_typeface(typeface, Some(name));
                    log::info!("Registered font: '{}'", name);
                    count += 1;
                } else {
                    log::error!("Failed to parse font: {:?}", path);
                }
            }
            Err(e) => {
                log::error!("Failed to read font file {:?}: {}", path, e);
            }
        }
    }
    count
}

impl PayloadLoader for SkiaLoader {
    type Payload = SkiaPayload;

    fn render_text(&mut self, text: &str, size: u32, color: Color) -> Result<SkiaPayload, ResourceLoadError> {
        let mut ts = TextStyle::new();
        ts.set_color(to_skia_color(color));
        ts.set_font_size(size as f32);
        ts.set_font_families(&[self.font_family.as_str()]);

        let mut ps = ParagraphStyle::new();
        ps.set_text_style(&ts);

        let mut builder = ParagraphBuilder::new(&ps, &self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);

        let mut paragraph = builder.build();
        paragraph.layout(f32::MAX);

        let w = paragraph.max_intrinsic_width().ceil() as i32;
        let h = paragraph.height().ceil() as i32;

        // 空字符串测出来宽度为 0，至少分配 1x1
        let mut surface = surfaces::raster_n32_premul((w.max(1), h.max(1))).ok_or_else(|| {
            ResourceLoadError::Glyph {
                text: text.to_string(),
                reason: format!("cannot allocate {}x{} raster", w, h),
            }
        })?;
        paragraph.paint(surface.canvas(), Point::new(0.0, 0.0));

        Ok(SkiaPayload(surface.image_snapshot()))
    }

    fn load_image(&mut self, path: &Path) -> Result<SkiaPayload, ResourceLoadError> {
        if let Some(image) = self.image_cache.get(path) {
            return Ok(SkiaPayload(image.clone()));
        }

        log::debug!("Loading image: {:?}", path);
        let bytes = fs::read(path).map_err(|source| ResourceLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let data = Data::new_copy(&bytes);
        let image = Image::from_encoded(data).ok_or_else(|| ResourceLoadError::Decode {
            path: path.to_path_buf(),
        })?;

        self.image_cache.insert(path.to_path_buf(), image.clone());
        Ok(SkiaPayload(image))
    }
}
