use anyhow::{ensure, Context};
use kestrel_engine::logging::{init_logging, LoggingConfig};
use kestrel_engine::render::record::{recording_renderer, BackendCall, MapSkin, RecordingRenderer};
use kestrel_ui::prelude::*;

const WIDTH: f32 = 480.0;
const HEIGHT: f32 = 320.0;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let (mut renderer, calls) = recording_renderer(RendererConfig::default());
    renderer.set_skin(
        (2..=5).fold(MapSkin::new(), |skin, r| skin.with(format!("rounded_rect_{r}"), DrawableHandle::new(r))),
    );
    renderer.set_viewport_size(WIDTH, HEIGHT);

    paint_frame(&mut renderer)?;

    let recorded = calls.take();
    let batches = recorded
        .iter()
        .filter(|c| matches!(c, BackendCall::SpriteBegin | BackendCall::ShapeBegin(_)))
        .count();
    log::info!("frame recorded: {} backend calls in {} batches", recorded.len(), batches);
    for call in &recorded {
        log::debug!("{call:?}");
    }

    ensure!(renderer.translation() == Vec2::zero(), "translation leaked past end_frame");
    Ok(())
}

/// Paints a toolbar and a two-column body into `renderer`.
fn paint_frame(renderer: &mut RecordingRenderer) -> anyhow::Result<()> {
    let screen = Rect::new(0.0, 0.0, WIDTH, HEIGHT);
    let rows = split(
        screen,
        Axis::Vertical,
        &SizePolicyModel::new(vec![UnifiedSize::absolute(32.0), UnifiedSize::relative(1.0)]),
        0.0,
    );
    let [toolbar, body] = rows[..] else {
        anyhow::bail!("expected two rows, got {}", rows.len());
    };

    renderer.begin_frame();

    renderer.set_brush(Color::from_srgb_u8(0x20, 0x24, 0x2c, 0xff));
    renderer.fill_rect(toolbar);
    renderer.set_pen(Pen::new(1.0, Color::from_srgb_u8(0xe0, 0xe0, 0xe0, 0xff)));
    let label = Alignment::MiddleLeft.place(toolbar, Vec2::new(80.0, 14.0));
    renderer.draw_text_with_shadow("Kestrel", label + Vec2::new(8.0, 0.0), Vec2::new(1.0, 1.0), Color::BLACK);

    let columns = split(
        body,
        Axis::Horizontal,
        &SizePolicyModel::new(vec![UnifiedSize::new(120.0, 1.0), UnifiedSize::relative(2.0)]),
        4.0,
    );
    let sidebar = columns.first().copied().context("missing sidebar column")?;
    let content = columns.get(1).copied().context("missing content column")?;

    renderer.set_brush(Color::from_srgb_u8(0x30, 0x36, 0x40, 0xff));
    renderer.fill_rounded_rect(sidebar, 4);

    if renderer.begin_clip(content) {
        renderer.translate(content.x(), content.y());
        {
            let mut faded = renderer.with_opacity(0.6);
            faded.draw_rect((0.0, 0.0, content.width(), content.height()));
            faded.draw_line(0.0, 24.0, content.width() - 1.0, 24.0);
            faded.draw_text("Body", (8.0, 4.0));
        }
        renderer.translate(-content.x(), -content.y());
        renderer.end_clip();
    }

    renderer.end_frame();
    Ok(())
}
