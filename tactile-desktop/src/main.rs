mod config;
mod config_gen;
mod scene;
mod setup;
mod timeline;

use std::fs;
use std::path::Path;

use anyhow::Context;
use tactile_skia::config::RenderConfig;
use tactile_skia::{Frame, SkiaLoader};
use tactile_ui::{Color, UiContext};

use crate::config::DemoConfig;
use crate::scene::{Flow, Scene};
use crate::timeline::Timeline;

fn main() -> anyhow::Result<()> {
    setup::init();
    log::info!(">>> Tactile Demo Started <<<");

    let render_cfg = RenderConfig::load();
    let demo_cfg: DemoConfig = tactile_shared::config::get("demo");

    // 字体系统要先于任何控件初始化
    let loader = SkiaLoader::new(&render_cfg);
    let image_button = demo_cfg.image_button.as_deref().map(Path::new);
    let mut scene = Scene::build(loader, image_button).context("Failed to build demo scene")?;

    let mut frame = Frame::new(render_cfg.width, render_cfg.height, Color::from(render_cfg.background))?;
    let out_dir = Path::new(&demo_cfg.output_path);
    if demo_cfg.snapshot_every > 0 {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create output dir {:?}", out_dir))?;
    }

    let (w, h) = frame.size();
    let mut timeline = Timeline::new(demo_cfg.steps.clone());
    let mut ui_ctx = UiContext::new();
    log::info!("Running {} scripted frames on a {}x{} frame (cap {})", timeline.remaining(), w, h, demo_cfg.frames);

    let mut ran = 0;
    for index in 0..demo_cfg.frames {
        let Some(pointer) = timeline.next() else { break };
        ran = index + 1;

        ui_ctx.feed(pointer.x, pointer.y, pointer.pressed);
        let flow = scene.step(ui_ctx.pointer())?;

        {
            let mut surface = frame.begin();
            scene.draw(&mut surface);
        }

        let last = flow == Flow::Quit;
        if demo_cfg.snapshot_every > 0 && (index % demo_cfg.snapshot_every == 0 || last) {
            let path = out_dir.join(format!("frame_{:04}.png", index));
            frame.save_png(&path)?;
        }

        if last {
            break;
        }
    }

    log::info!(
        "Demo finished after {} frames (progress {}, readout {}, toggle {}, settings open {})",
        ran,
        scene.progress(),
        scene.readout_value(),
        scene.toggle_state(),
        scene.settings_open()
    );
    Ok(())
}
