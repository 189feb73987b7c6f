use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::backend::{Font, SpriteBatcher};

use super::{BackendCall, CallLog};

/// [`Font`] that records each text run with its color and position.
#[derive(Debug)]
pub struct RecordingFont {
    log: CallLog,
    color: Color,
}

impl RecordingFont {
    pub fn new(log: CallLog) -> Self {
        Self { log, color: Color::WHITE }
    }
}

impl Font for RecordingFont {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw(&mut self, _sprites: &mut dyn SpriteBatcher, text: &str, x: f32, y: f32) {
        self.log.record(BackendCall::Text {
            text: text.to_owned(),
            position: Vec2::new(x, y),
            color: self.color,
        });
    }
}
