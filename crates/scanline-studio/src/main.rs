use anyhow::Context;
use scanline_engine::logging::{init_logging, LoggingConfig};
use scanline_engine::{Color, Framebuffer, Point, Scene};

/// Demo scene settings.
#[derive(Debug, Clone)]
struct SceneConfig {
    width: usize,
    height: usize,
    /// Output base name; `.ppm` is appended on export.
    output: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self { width: 1024, height: 1024, output: "output".to_string() }
    }
}

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// The fixed demo scene. Two rectangles fail on purpose: one runs off the bottom
/// edge, one carries a non-color value.
fn demo_scene() -> Scene {
    let mut scene = Scene::new();
    scene.push_rect("rect", p(100, 300), p(600, 900), Color::RED);
    scene.push_rect("rect2", p(0, 0), p(100, 1024), Color::GREEN);
    scene.push_rect("rect3", p(0, 0), p(100, 1022), 102i64);
    scene.push_circle("circ", p(500, 500), 200, Color::GREEN);
    scene.push_triangle("tri", [p(100, 100), p(600, 300), p(859, 850)], Color::YELLOW);
    scene
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = SceneConfig::default();
    log::info!("starting {}x{} scene", config.width, config.height);

    let mut fb = Framebuffer::new(config.width, config.height);
    let report = demo_scene().render(&mut fb);
    log::info!("{} shapes drawn, {} failed", report.drawn, report.failures.len());

    let path = fb
        .export(&config.output)
        .with_context(|| format!("failed to export {}", config.output))?;
    println!("wrote {}", path.display());
    Ok(())
}
