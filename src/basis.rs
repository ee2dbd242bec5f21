use std::ops;

/// `Color` は 32 ビットの RGBA カラーを表す.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// `Point` は画面上の整数座標を表す. 画面外を指していてもよい.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// 二点間のユークリッド距離の二乗を返す.
    ///
    /// 差は最大で 2^32 - 1 になり, その二乗の和は `i64` に収まらないので `i128` で計算する.
    pub fn distance_squared(self, other: Self) -> i128 {
        let dx = other.x as i128 - self.x as i128;
        let dy = other.y as i128 - self.y as i128;
        dx * dx + dy * dy
    }
}

impl ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// `Circle` は中心 `center` と半径 `radius` で表される円盤を表す.
///
/// `radius` は負にならない.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
}

impl Circle {
    pub const fn new(x: i32, y: i32, radius: i32) -> Self {
        Self {
            center: Point::new(x, y),
            radius,
        }
    }
}

/// `WindowSpec` はデモが開くウィンドウのタイトルと大きさを表す.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
}

impl WindowSpec {
    /// ウィンドウの中心座標を返す.
    pub fn center(&self) -> Point {
        Point::new(self.width as i32 / 2, self.height as i32 / 2)
    }
}

#[test]
fn test_window_center() {
    let spec = WindowSpec {
        title: "test",
        width: 640,
        height: 480,
    };
    assert_eq!(spec.center(), Point::new(320, 240));
}

#[test]
fn test_distance_squared_does_not_overflow() {
    let a = Point::new(i32::MIN, 0);
    let b = Point::new(i32::MAX, 0);
    assert_eq!(a.distance_squared(b), (u32::MAX as i128).pow(2));

    let a = Point::new(i32::MIN, i32::MIN);
    let b = Point::new(i32::MAX, i32::MAX);
    assert_eq!(a.distance_squared(b), 2 * (u32::MAX as i128).pow(2));
    assert_eq!(b.distance_squared(a), a.distance_squared(b));
}
