use crate::basis::{Circle, Color, Point};

#[cfg(test)]
pub(crate) mod tests;

/// `Frame` は 1 フレーム分の描画先を表す. `Canvas` のほか, テストでは描画命令を記録するだけの実装を使う.
///
/// 描画の失敗はフレームループでは検査しないので, どのメソッドも結果を返さない.
pub trait Frame {
    fn set_color(&mut self, color: Color);

    /// 現在の色でフレーム全体を塗りつぶす.
    fn clear(&mut self);

    /// 現在の色で `points` の各点を打つ.
    fn plot_points(&mut self, points: &[Point]);

    fn draw_line(&mut self, from: Point, to: Point);

    /// 描き終えたフレームを画面に出す.
    fn present(&mut self);
}

/// 円盤 `circle` に含まれる格子点を列挙する.
///
/// 外接正方形 `[-r, r]²` の各オフセット `(dx, dy)` を `dx` を外側にして走査し, `dx² + dy² <= r²` を満たすものだけを返す.
/// 境界追跡はしないので O(r²) かかる. クリッピングもしない.
pub fn disk_points(circle: Circle) -> impl Iterator<Item = Point> {
    let Circle { center, radius } = circle;
    let limit = radius as i64 * radius as i64;

    (-radius..=radius).flat_map(move |dx| {
        (-radius..=radius)
            .filter(move |&dy| (dx as i64).pow(2) + (dy as i64).pow(2) <= limit)
            .map(move |dy| center + Point::new(dx, dy))
    })
}

/// 現在の色で円盤を塗る. 点はまとめて一度に `frame` へ渡す.
pub fn fill_circle<F: Frame + ?Sized>(frame: &mut F, circle: &Circle) {
    let points = disk_points(*circle).collect::<Vec<_>>();
    frame.plot_points(&points);
}
