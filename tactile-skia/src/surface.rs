use skia_safe::{Canvas, Image, Paint, Point, Rect as SkRect};
use tactile_ui::{Color, Payload, Rect, Surface};

/// 文字渲染结果或解码后的图片
#[derive(Clone)]
pub struct SkiaPayload(pub Image);

impl Payload for SkiaPayload {
    fn size(&self) -> (i32, i32) {
        (self.0.width(), self.0.height())
    }
}

pub(crate) fn to_skia_color(c: Color) -> skia_safe::Color {
    skia_safe::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub struct SkiaSurface<'a> {
    canvas: &'a Canvas,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a Canvas) -> Self {
        Self { canvas }
    }

    fn to_skia_rect(&self, r: Rect) -> SkRect {
        SkRect::new(r.x, r.y, r.x + r.w, r.y + r.h)
    }
}

impl<'a> Surface for SkiaSurface<'a> {
    type Payload = SkiaPayload;

    fn draw_rect(&mut self, rect: Rect, color: Color, stroke: f32, radius: f32) {
        // 宽或高不为正的矩形什么都不画
        if rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }

        let sk_rect = self.to_skia_rect(rect);
        let mut paint = Paint::default();
        paint.set_color(to_skia_color(color));
        paint.set_anti_alias(true);
        if stroke > 0.0 {
            paint.set_style(skia_safe::paint::Style::Stroke);
            paint.set_stroke_width(stroke);
        }
        self.canvas.draw_round_rect(sk_rect, radius, radius, &paint);
    }

    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        let mut paint = Paint::default();
        paint.set_color(to_skia_color(color));
        paint.set_anti_alias(true);

        self.canvas.draw_circle(Point::new(center.0, center.1), radius, &paint);
    }

    fn blit(&mut self, payload: &SkiaPayload, pos: (i32, i32)) {
        self.canvas.draw_image(&payload.0, Point::new(pos.0 as f32, pos.1 as f32), None);
    }
}
