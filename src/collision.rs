use crate::basis::Circle;

/// 二つの円盤が接触または重なっているかを返す.
///
/// 平方根を避けるため, 中心間距離の二乗と半径の和の二乗を比べる. ちょうど接している場合も衝突とみなす.
pub fn collides(a: &Circle, b: &Circle) -> bool {
    let reach = a.radius as i128 + b.radius as i128;
    a.center.distance_squared(b.center) <= reach * reach
}
