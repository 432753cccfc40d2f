//! Renders one demo frame of every generator to an SVG file.
//!
//! Usage: `linework-studio [OUTPUT]` (defaults to `linework-demo.svg`).

mod args;
mod svg;

use anyhow::{Context, Result, bail};
use clap::Parser;
use glam::{Mat4, Vec2, Vec3};
use linework::logging::{LoggingConfig, init_logging};
use linework::{Color, FrameBatch, FrameConsumer, FrameSession, FrameView, Layer, Rect, Viewport};

use args::Args;
use svg::SvgFrame;

const VIEWPORT: Viewport = Viewport::new(960.0, 640.0);

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.logging());

    let path = args.output;
    if !VIEWPORT.is_valid() {
        bail!("invalid viewport {VIEWPORT:?}");
    }

    let mut session = FrameSession::new();
    session.set_active(true);
    draw_world(&mut session);
    draw_screen(&mut session);
    log::info!("recorded {}", session.stats());

    let view = Mat4::look_at_rh(Vec3::new(7.0, 5.0, 9.0), Vec3::new(0.0, 0.5, 0.0), Vec3::Y);
    let proj = Mat4::perspective_rh(45f32.to_radians(), VIEWPORT.aspect(), 0.1, 100.0);
    let mut svg = SvgFrame::new(VIEWPORT, proj * view);
    let mut batch = FrameBatch::new();

    session.present(&mut |frame: &FrameView<'_>| {
        batch.fill(frame);
        svg.consume(frame);
    });

    for layer in Layer::DRAW_ORDER {
        log::info!("{layer:?}: {} vertices, {} bytes", batch.vertex_count(layer), batch.bytes(layer).len());
    }
    if svg.skipped() > 0 {
        log::warn!("{} world segments behind the camera were skipped", svg.skipped());
    }

    std::fs::write(&path, svg.document()).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn draw_world(session: &mut FrameSession) {
    let mut world = session.world();

    world.set_color(Color::GRAY.with_alpha(0.5));
    for i in -5..=5 {
        let t = i as f32;
        world.line(Vec3::new(t, 0.0, -5.0), Vec3::new(t, 0.0, 5.0));
        world.line(Vec3::new(-5.0, 0.0, t), Vec3::new(5.0, 0.0, t));
    }

    world.set_color(Color::RED);
    world.arrow(Vec3::ZERO, Vec3::X * 1.5);
    world.set_color(Color::GREEN);
    world.arrow(Vec3::ZERO, Vec3::Y * 1.5);
    world.set_color(Color::BLUE);
    world.arrow(Vec3::ZERO, Vec3::Z * 1.5);

    world.set_color(Color::CYAN);
    world.sphere(Vec3::new(-3.0, 1.0, -2.0), 1.0);
    world.set_color(Color::YELLOW);
    world.cube(Vec3::new(3.0, 0.5, -2.0), Vec3::ONE, Vec3::new(1.0, 0.0, 1.0), Vec3::Y);
    world.set_color(Color::MAGENTA);
    world.capsule(Vec3::new(-3.0, 0.0, 2.5), Vec3::new(-3.0, 2.5, 2.5), 0.5);
    world.set_color(Color::WHITE);
    world.cylinder(Vec3::new(3.0, 0.0, 2.5), Vec3::new(3.0, 1.5, 2.5), 0.6);
    world.cone(Vec3::new(0.0, 3.0, -3.0), Vec3::NEG_Y * 1.5, 30.0);
    world.helix(Vec3::new(0.0, 0.0, 3.5), Vec3::new(0.0, 3.0, 3.5), Vec3::X, 0.4, 1440.0);
    world.spiral(Vec3::new(1.5, 0.01, 0.0), Vec3::Y, Vec3::X, 1.0);
    world.point(Vec3::new(0.0, 2.0, 0.0), 0.3);

    world.set_color(Color::rgb(1.0, 0.6, 0.2));
    world.conic_section(Vec3::ZERO, 0.6, 2.0, Vec3::Y, Vec3::X, 64);
    world.circle_default(Vec3::ZERO, 4.5, Vec3::Y);
}

fn draw_screen(session: &mut FrameSession) {
    let mut screen = session.screen();

    screen.set_color(Color::WHITE.with_alpha(0.15));
    screen.grid(8, 4, Rect::new(20.0, 20.0, 320.0, 160.0));

    screen.set_color(Color::GREEN);
    screen.graph(Rect::new(20.0, 20.0, 320.0, 160.0), Rect::new(0.0, 0.0, 40.0, 60.0), |x| (x * 0.05).sin());

    screen.set_fill_color(Color::BLUE.with_alpha(0.6));
    screen.fill_rect(Rect::new(380.0, 20.0, 120.0, 80.0));
    screen.set_color(Color::WHITE);
    screen.rect(Rect::new(380.0, 20.0, 120.0, 80.0));

    screen.set_fill_color(Color::YELLOW);
    screen.pie(Vec2::new(580.0, 60.0), 20.0, 40.0, 0.7);
    screen.set_color(Color::YELLOW);
    screen.circle_default(Vec2::new(580.0, 60.0), 42.0);
    screen.ellipse(Vec2::new(700.0, 60.0), Vec2::new(90.0, 50.0), 48);

    screen.slider(0.35, 780, 30, Color::GREEN, 160);
    screen.mid_slider(-0.6, 780, 60, Color::RED, 160);

    screen.set_fill_color(Color::MAGENTA.with_alpha(0.5));
    screen.fill_fan(&[
        Vec2::new(860.0, 120.0),
        Vec2::new(920.0, 140.0),
        Vec2::new(930.0, 190.0),
        Vec2::new(880.0, 210.0),
        Vec2::new(840.0, 170.0),
    ]);
}
