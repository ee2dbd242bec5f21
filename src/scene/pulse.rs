use crate::{
    basis::{Circle, Color, WindowSpec},
    raster::{fill_circle, Frame},
};

use super::{Arrows, Scene};

const MIN_RADIUS: i32 = 20;
const MAX_RADIUS: i32 = 320;
const GROWTH: i32 = 2;

const BACKGROUND: Color = Color::rgb(0, 106, 78);
const FOREGROUND: Color = Color::rgb(244, 42, 65);

/// `Pulse` はウィンドウ中央で膨らみ続け, 大きくなりすぎると元の大きさに戻る円を表す.
#[derive(Debug, Clone)]
pub struct Pulse {
    circle: Circle,
}

impl Default for Pulse {
    fn default() -> Self {
        Self::new()
    }
}

impl Pulse {
    pub fn new() -> Self {
        let center = Self::WINDOW.center();

        Self {
            circle: Circle::new(center.x, center.y, MIN_RADIUS),
        }
    }

    pub fn circle(&self) -> Circle {
        self.circle
    }
}

impl Scene for Pulse {
    const WINDOW: WindowSpec = WindowSpec {
        title: "Circle Task102",
        width: 640,
        height: 640,
    };

    /// キー入力は使わない.
    fn update(&mut self, _held: Arrows) {
        self.circle.radius += GROWTH;

        if self.circle.radius >= MAX_RADIUS {
            tracing::debug!(reached = self.circle.radius, "radius wrapped");
            self.circle.radius = MIN_RADIUS;
        }
    }

    fn render<F: Frame + ?Sized>(&self, frame: &mut F) {
        frame.set_color(BACKGROUND);
        frame.clear();

        frame.set_color(FOREGROUND);
        fill_circle(frame, &self.circle);
    }
}
