use crate::{
    basis::{Circle, Color, WindowSpec},
    collision::collides,
    raster::{fill_circle, Frame},
};

use super::{Arrows, Scene};

const DRIFTER_RADIUS: i32 = 50;
const DRIFTER_SPEED: i32 = 1;
const PLAYER_RADIUS: i32 = 20;
const PLAYER_SPEED: i32 = 5;

const BACKGROUND: Color = Color::rgb(255, 150, 220);
const DRIFTER_COLOR: Color = Color::rgb(244, 42, 65);
const PLAYER_COLOR: Color = Color::WHITE;
const COLLISION_COLOR: Color = Color::RED;

/// `Chase` は左から右へ流れ続ける円 `drifter` と, 矢印キーで動かす円 `player` を表す.
///
/// `player` は画面外へ出ても止めない. 二つが触れている間は中心同士を結ぶ線を描く.
#[derive(Debug, Clone)]
pub struct Chase {
    drifter: Circle,
    player: Circle,
    colliding: bool,
}

impl Default for Chase {
    fn default() -> Self {
        Self::new()
    }
}

impl Chase {
    pub fn new() -> Self {
        let drifter = Circle::new(0, Self::WINDOW.center().y, DRIFTER_RADIUS);
        let player = Circle::new(Self::WINDOW.center().x, 0, PLAYER_RADIUS);

        Self {
            drifter,
            player,
            colliding: collides(&drifter, &player),
        }
    }

    pub fn drifter(&self) -> Circle {
        self.drifter
    }

    pub fn player(&self) -> Circle {
        self.player
    }

    pub fn is_colliding(&self) -> bool {
        self.colliding
    }
}

impl Scene for Chase {
    const WINDOW: WindowSpec = WindowSpec {
        title: "Circle",
        width: 640,
        height: 480,
    };

    fn update(&mut self, held: Arrows) {
        let drifter = &mut self.drifter.center;
        drifter.x += DRIFTER_SPEED;
        // 右端から完全に出たら左端の外から出直す
        if drifter.x > Self::WINDOW.width as i32 + DRIFTER_RADIUS {
            drifter.x = -DRIFTER_RADIUS;
        }

        self.player.center += held.offset(PLAYER_SPEED);

        let colliding = collides(&self.drifter, &self.player);
        if colliding != self.colliding {
            tracing::debug!(
                drifter = ?self.drifter.center,
                player = ?self.player.center,
                colliding,
                "collision state changed"
            );
        }
        self.colliding = colliding;
    }

    fn render<F: Frame + ?Sized>(&self, frame: &mut F) {
        frame.set_color(BACKGROUND);
        frame.clear();

        frame.set_color(DRIFTER_COLOR);
        fill_circle(frame, &self.drifter);

        frame.set_color(PLAYER_COLOR);
        fill_circle(frame, &self.player);

        if self.colliding {
            frame.set_color(COLLISION_COLOR);
            frame.draw_line(self.drifter.center, self.player.center);
        }
    }
}
