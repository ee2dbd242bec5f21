use crate::{
    basis::{Point, WindowSpec},
    raster::Frame,
};

mod chase;
mod pulse;


pub use chase::Chase;
pub use pulse::Pulse;

bitflags::bitflags! {
    /// `Arrows` はあるフレームで押されている矢印キーの集合を表す.
    pub struct Arrows: u8 {
        const UP =    0b0001;
        const DOWN =  0b0010;
        const LEFT =  0b0100;
        const RIGHT = 0b1000;
    }
}

impl Arrows {
    /// 押されている矢印キーそれぞれについて `step` だけ動かしたときの移動量を返す.
    ///
    /// 各キーは独立に加算されるので, 斜め移動になったり, 逆向きのキー同士が打ち消しあったりする.
    pub fn offset(self, step: i32) -> Point {
        let mut offset = Point::default();

        if self.contains(Arrows::UP) {
            offset.y -= step;
        }
        if self.contains(Arrows::DOWN) {
            offset.y += step;
        }
        if self.contains(Arrows::LEFT) {
            offset.x -= step;
        }
        if self.contains(Arrows::RIGHT) {
            offset.x += step;
        }

        offset
    }
}

/// `Scene` はフレームごとに更新されて描画されるデモの状態を表す.
pub trait Scene {
    /// このデモが開くウィンドウ.
    const WINDOW: WindowSpec;

    /// 1 フレーム分状態を進める. `held` はそのフレームで押されていた矢印キー.
    fn update(&mut self, held: Arrows);

    /// 背景の消去から全ての図形の描画までを行う. `present` は呼ばない.
    fn render<F: Frame + ?Sized>(&self, frame: &mut F);
}
