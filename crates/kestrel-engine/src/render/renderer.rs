use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::{Brush, Color, Pen};

use super::backend::{ClipStack, Font, Projection, ShapeBatcher, ShapeType, Skin, SpriteBatcher};
use super::config::RendererConfig;
use super::mode::RenderMode;
use super::state::{OpacityGuard, PaintState};

/// Maps a corner radius to the id suffix of a pre-baked rounded-rect drawable.
///
/// Radii 1–5 have dedicated assets (1 shares the radius-2 asset); anything
/// else falls back to `"2"`.
pub fn rounded_rect_bucket(corner_radius: i32) -> &'static str {
    match corner_radius {
        3 => "3",
        4 => "4",
        5 => "5",
        _ => "2",
    }
}

#[inline]
fn sanitize_opacity(opacity: f32) -> f32 {
    if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) }
}

/// Paint context translating UI draw calls into backend batches.
///
/// Owns the sprite batcher `S`, the shape batcher `P` and the clip stack `C`,
/// plus all paint state for the pass: pen, brush, opacity, translation and
/// viewport. At most one backend batch is open at a time; switching between
/// text/drawables, outlines and fills closes the open batch first, so output
/// order always equals call order.
///
/// Frame protocol:
///
/// ```rust,ignore
/// renderer.begin_frame();
/// renderer.set_brush(Brush::solid(bg));
/// renderer.fill_rect((0.0, 0.0, 200.0, 40.0));
/// renderer.draw_text("Hello", (8.0, 12.0));
/// renderer.end_frame();
/// ```
pub struct Renderer<S, P, C>
where
    S: SpriteBatcher,
    P: ShapeBatcher,
    C: ClipStack,
{
    sprites: S,
    shapes: P,
    clips: C,
    font: Option<Box<dyn Font>>,
    skin: Option<Box<dyn Skin>>,

    mode: RenderMode,
    viewport: Viewport,
    translation: Vec2,

    state: PaintState,
    saved_states: Vec<PaintState>,

    rounded_rect_prefix: String,
    warned_missing_font: bool,
    warned_missing_skin: bool,
}

impl<S, P, C> Renderer<S, P, C>
where
    S: SpriteBatcher,
    P: ShapeBatcher,
    C: ClipStack,
{
    pub fn new(sprites: S, shapes: P, clips: C) -> Self {
        Self::with_config(sprites, shapes, clips, RendererConfig::default())
    }

    pub fn with_config(sprites: S, shapes: P, clips: C, config: RendererConfig) -> Self {
        Self {
            sprites,
            shapes,
            clips,
            font: None,
            skin: None,
            mode: RenderMode::Idle,
            viewport: Viewport::default(),
            translation: Vec2::zero(),
            state: PaintState {
                pen: config.pen,
                brush: config.brush,
                opacity: sanitize_opacity(config.opacity),
            },
            saved_states: Vec::new(),
            rounded_rect_prefix: config.rounded_rect_prefix,
            warned_missing_font: false,
            warned_missing_skin: false,
        }
    }

    // ── collaborators ─────────────────────────────────────────────────────

    pub fn set_font(&mut self, font: impl Font + 'static) {
        self.font = Some(Box::new(font));
        self.warned_missing_font = false;
    }

    pub fn set_skin(&mut self, skin: impl Skin + 'static) {
        self.skin = Some(Box::new(skin));
        self.warned_missing_skin = false;
    }

    #[inline]
    pub fn sprites(&self) -> &S {
        &self.sprites
    }

    #[inline]
    pub fn shapes(&self) -> &P {
        &self.shapes
    }

    #[inline]
    pub fn clips(&self) -> &C {
        &self.clips
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Starts a frame. Must be called before any draw call.
    pub fn begin_frame(&mut self) {
        if !self.mode.is_idle() {
            log::warn!("begin_frame with {:?} still open; closing it", self.mode);
            self.flush();
        }
        self.mode = RenderMode::Idle;
    }

    /// Closes any open batch and undoes this frame's translation.
    pub fn end_frame(&mut self) {
        self.flush();
        let undo = -self.translation;
        self.translate(undo.x, undo.y);
    }

    /// Closes the open batch, if any, and returns to [`RenderMode::Idle`].
    pub fn flush(&mut self) {
        self.end_mode();
        self.mode = RenderMode::Idle;
    }

    #[inline]
    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    // ── style state ───────────────────────────────────────────────────────

    #[inline]
    pub fn pen(&self) -> Pen {
        self.state.pen
    }

    #[inline]
    pub fn set_pen(&mut self, pen: Pen) {
        self.state.pen = pen;
    }

    #[inline]
    pub fn brush(&self) -> Brush {
        self.state.brush
    }

    #[inline]
    pub fn set_brush(&mut self, brush: impl Into<Brush>) {
        self.state.brush = brush.into();
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.state.opacity
    }

    /// Sets the opacity applied to every color drawn from now on and returns
    /// the previous value. `opacity` is clamped to `[0, 1]`; NaN counts as 0.
    pub fn set_opacity(&mut self, opacity: f32) -> f32 {
        std::mem::replace(&mut self.state.opacity, sanitize_opacity(opacity))
    }

    /// Sets the opacity until the returned guard is dropped.
    pub fn with_opacity(&mut self, opacity: f32) -> OpacityGuard<'_, S, P, C> {
        OpacityGuard::new(self, opacity)
    }

    #[inline]
    pub fn paint_state(&self) -> PaintState {
        self.state
    }

    /// Saves pen, brush and opacity.
    pub fn push_state(&mut self) {
        self.saved_states.push(self.state);
    }

    /// Restores the state saved by the matching [`push_state`](Self::push_state).
    pub fn pop_state(&mut self) {
        match self.saved_states.pop() {
            Some(state) => self.state = state,
            None => log::warn!("pop_state without matching push_state"),
        }
    }

    // ── coordinate space ──────────────────────────────────────────────────

    #[inline]
    pub fn viewport_size(&self) -> Viewport {
        self.viewport
    }

    /// Updates the viewport and both backend projections.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        if !self.viewport.is_valid() {
            log::warn!("degenerate viewport {width}x{height}");
        }

        let projection = Projection::ortho_2d(0.0, 0.0, width, height);
        self.sprites.set_projection(projection);
        self.shapes.set_projection(projection);
        log::debug!("viewport set to {width}x{height}");
    }

    /// Offset accumulated by [`translate`](Self::translate) in this frame.
    #[inline]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Shifts all subsequent draws by `(dx, dy)` in UI space.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.flush();
        self.translation += Vec2::new(dx, dy);
        self.sprites.translate(dx, -dy);
        self.shapes.translate(dx, -dy);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Narrows drawing to `rect` (UI space, before translation).
    ///
    /// Returns `false` when the backend rejects the region; in that case
    /// nothing was pushed and [`end_clip`](Self::end_clip) must not be called.
    #[must_use]
    pub fn begin_clip(&mut self, rect: impl Into<Rect>) -> bool {
        self.flush();

        let rect = rect.into();
        let clip = Rect::new(
            rect.x() + self.translation.x,
            self.viewport.flip_y(rect.y()) - rect.height() - self.translation.y,
            rect.width(),
            rect.height(),
        );

        let pushed = self.clips.push(clip);
        if pushed {
            log::trace!("clip pushed {clip:?}");
        } else {
            log::trace!("clip rejected {clip:?}");
        }
        pushed
    }

    /// Ends the region started by the last successful [`begin_clip`](Self::begin_clip).
    pub fn end_clip(&mut self) {
        self.flush();
        if self.clips.pop().is_none() {
            log::warn!("end_clip without an active clip region");
        }
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Draws `text` with its top-left at `position` using the pen color.
    pub fn draw_text(&mut self, text: &str, position: impl Into<Vec2>) {
        let position = position.into();
        self.ensure_mode(RenderMode::SpriteBatch);

        let color = self.fade(self.state.pen.color);
        let y = self.viewport.flip_y(position.y);

        let Some(font) = self.font.as_mut() else {
            self.warn_missing_font();
            return;
        };

        let original = font.color();
        font.set_color(color);
        font.draw(&mut self.sprites, text, position.x, y);
        font.set_color(original);
    }

    /// Draws `text` over a copy of itself shifted by `shadow_offset`.
    ///
    /// A zero offset draws the text once, exactly like [`draw_text`](Self::draw_text).
    pub fn draw_text_with_shadow(
        &mut self,
        text: &str,
        position: impl Into<Vec2>,
        shadow_offset: Vec2,
        shadow_color: Color,
    ) {
        let position = position.into();
        if shadow_offset.is_zero() {
            self.draw_text(text, position);
            return;
        }

        self.ensure_mode(RenderMode::SpriteBatch);

        let shadow_color = self.fade(shadow_color);
        let text_color = self.fade(self.state.pen.color);
        let y = self.viewport.flip_y(position.y);

        let Some(font) = self.font.as_mut() else {
            self.warn_missing_font();
            return;
        };

        let original = font.color();

        font.set_color(shadow_color);
        font.draw(
            &mut self.sprites,
            text,
            position.x + shadow_offset.x,
            y - shadow_offset.y,
        );

        font.set_color(text_color);
        font.draw(&mut self.sprites, text, position.x, y);

        font.set_color(original);
    }

    // ── outlines ──────────────────────────────────────────────────────────

    /// Outlines `rect` with the pen.
    ///
    /// Right and bottom edges sit on the last pixel inside the rectangle
    /// (`x + w - 1`, `y + h - 1`).
    pub fn draw_rect(&mut self, rect: impl Into<Rect>) {
        let rect: Rect = rect.into();
        let (x, y, w, h) = (rect.x(), rect.y(), rect.width(), rect.height());

        self.ensure_mode(RenderMode::for_shape(ShapeType::Line));
        self.shapes.set_color(self.fade(self.state.pen.color));

        let right = x + w - 1.0;
        let bottom = y + h - 1.0;
        self.line_internal(x, y, right, y);
        self.line_internal(x, y, x, bottom);
        self.line_internal(right, y, right, bottom);
        self.line_internal(x, bottom, right, bottom);
    }

    /// Draws a segment from `(x1, y1)` to `(x2, y2)` with the pen.
    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ensure_mode(RenderMode::for_shape(ShapeType::Line));
        self.shapes.set_color(self.fade(self.state.pen.color));
        self.line_internal(x1, y1, x2, y2);
    }

    // ── fills ─────────────────────────────────────────────────────────────

    /// Fills `rect` with the current brush.
    ///
    /// Solid brushes are faded by the renderer opacity. Drawable brushes are
    /// tinted straight white at their own opacity (premultiplied, every
    /// channel equals that opacity) and ignore the renderer opacity.
    pub fn fill_rect(&mut self, rect: impl Into<Rect>) {
        let rect = rect.into();
        let y = self.viewport.flip_y(rect.y()) - rect.height();

        let brush = self.state.brush;
        match brush {
            Brush::Solid(color) => {
                self.ensure_mode(RenderMode::for_shape(ShapeType::Filled));
                self.shapes.set_color(self.fade(color));
                self.shapes.rect(rect.x(), y, rect.width(), rect.height());
            }
            Brush::Drawable { drawable, opacity } => {
                self.ensure_mode(RenderMode::SpriteBatch);
                self.sprites.set_color(Color::WHITE.with_opacity(opacity));
                self.sprites.draw(drawable, rect.x(), y, rect.width(), rect.height());
            }
        }
    }

    /// Fills `rect` with a pre-baked rounded-rectangle drawable from the skin.
    ///
    /// The geometry is truncated to whole pixels. The drawable is tinted with
    /// the brush: a solid color faded by the renderer opacity, or white at the
    /// drawable brush's own opacity.
    pub fn fill_rounded_rect(&mut self, rect: impl Into<Rect>, corner_radius: i32) {
        let rect = rect.into().truncated();
        let id = format!("{}{}", self.rounded_rect_prefix, rounded_rect_bucket(corner_radius));

        let Some(drawable) = self.skin.as_ref().and_then(|skin| skin.drawable(&id)) else {
            self.warn_missing_skin(&id);
            return;
        };

        self.ensure_mode(RenderMode::SpriteBatch);

        let brush = self.state.brush;
        let tint = match brush {
            Brush::Solid(color) => self.fade(color),
            Brush::Drawable { opacity, .. } => Color::WHITE.with_opacity(opacity),
        };
        self.sprites.set_color(tint);

        let y = self.viewport.flip_y(rect.y()) - rect.height();
        self.sprites.draw(drawable, rect.x(), y, rect.width(), rect.height());

        self.sprites.set_color(Color::WHITE);
    }

    // ── internal ──────────────────────────────────────────────────────────

    /// Second endpoint is biased by `(+1, -1)` so the segment covers its
    /// last pixel and adjacent segments tile without gaps.
    #[inline]
    fn line_internal(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let vp = self.viewport;
        self.shapes.line(x1, vp.flip_y(y1), x2 + 1.0, vp.flip_y(y2) - 1.0);
    }

    #[inline]
    fn fade(&self, color: Color) -> Color {
        color.with_opacity(self.state.opacity)
    }

    fn ensure_mode(&mut self, mode: RenderMode) {
        if self.mode != mode {
            log::trace!("render mode {:?} -> {:?}", self.mode, mode);
            self.end_mode();
            self.mode = mode;
            self.begin_mode();
        }
    }

    fn begin_mode(&mut self) {
        match self.mode {
            RenderMode::Idle => {}
            RenderMode::SpriteBatch => self.sprites.begin(),
            RenderMode::ShapeOutline => self.shapes.begin(ShapeType::Line),
            RenderMode::ShapeFilled => self.shapes.begin(ShapeType::Filled),
        }
    }

    fn end_mode(&mut self) {
        match self.mode {
            RenderMode::Idle => {}
            RenderMode::SpriteBatch => self.sprites.end(),
            RenderMode::ShapeOutline | RenderMode::ShapeFilled => self.shapes.end(),
        }
    }

    fn warn_missing_font(&mut self) {
        if !self.warned_missing_font {
            log::warn!("text drawn without a font; call set_font first");
            self.warned_missing_font = true;
        }
    }

    fn warn_missing_skin(&mut self, id: &str) {
        if self.warned_missing_skin {
            return;
        }
        if self.skin.is_some() {
            log::warn!("skin has no drawable `{id}`");
        } else {
            log::warn!("`{id}` requested without a skin; call set_skin first");
        }
        self.warned_missing_skin = true;
    }
}
