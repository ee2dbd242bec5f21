use std::collections::HashSet;

use super::{disk_points, fill_circle, Frame};
use crate::basis::{Circle, Color, Point};

/// `Recorder` は `Frame` への呼び出しをそのまま記録する.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    SetColor(Color),
    Clear,
    Points(Vec<Point>),
    Line(Point, Point),
    Present,
}

#[derive(Default)]
pub(crate) struct Recorder {
    pub(crate) commands: Vec<Command>,
}

impl Frame for Recorder {
    fn set_color(&mut self, color: Color) {
        self.commands.push(Command::SetColor(color));
    }

    fn clear(&mut self) {
        self.commands.push(Command::Clear);
    }

    fn plot_points(&mut self, points: &[Point]) {
        self.commands.push(Command::Points(points.to_vec()));
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.commands.push(Command::Line(from, to));
    }

    fn present(&mut self) {
        self.commands.push(Command::Present);
    }
}

#[test]
fn zero_radius_is_center_only() {
    let points = disk_points(Circle::new(7, -3, 0)).collect::<Vec<_>>();
    assert_eq!(points, vec![Point::new(7, -3)]);
}

#[test]
fn radius_one_is_a_plus_sign() {
    let points = disk_points(Circle::new(0, 0, 1)).collect::<HashSet<_>>();
    let expected = [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)]
        .iter()
        .map(|&p| Point::from(p))
        .collect::<HashSet<_>>();
    assert_eq!(points, expected);
}

#[test]
fn scan_is_x_major() {
    let points = disk_points(Circle::new(0, 0, 2)).collect::<Vec<_>>();
    // dx = -2 の列は (-2, 0) だけ
    assert_eq!(points[0], Point::new(-2, 0));
    assert_eq!(points[1], Point::new(-1, -1));
    assert_eq!(*points.last().unwrap(), Point::new(2, 0));
}

#[test]
fn membership_matches_disk_equation() {
    for r in (0..320).step_by(13) {
        let center = Point::new(320, 320);
        let plotted = disk_points(Circle::new(center.x, center.y, r)).collect::<HashSet<_>>();

        for dx in -r - 1..=r + 1 {
            for dy in -r - 1..=r + 1 {
                let inside = dx * dx + dy * dy <= r * r;
                assert_eq!(
                    plotted.contains(&(center + Point::new(dx, dy))),
                    inside,
                    "r = {}, offset = ({}, {})",
                    r,
                    dx,
                    dy
                );
            }
        }
    }
}

#[test]
fn point_count_approximates_area() {
    for r in (0..320).step_by(29) {
        let count = disk_points(Circle::new(0, 0, r)).count() as f64;
        let area = std::f64::consts::PI * (r as f64).powi(2);
        let bound = 2.0 * std::f64::consts::SQRT_2 * std::f64::consts::PI * r as f64 + 1.0;

        assert!(
            (count - area).abs() <= bound,
            "r = {}: {} points, area {}",
            r,
            count,
            area
        );
    }
}

#[test]
fn off_surface_center_is_not_clipped() {
    let points = disk_points(Circle::new(-50, -50, 10)).collect::<Vec<_>>();
    assert!(points.iter().all(|p| p.x < 0 && p.y < 0));
    assert_eq!(points.len(), disk_points(Circle::new(0, 0, 10)).count());
}

#[test]
fn fill_circle_submits_one_batch() {
    let mut frame = Recorder::default();
    let circle = Circle::new(10, 20, 5);
    fill_circle(&mut frame, &circle);
    fill_circle(&mut frame, &circle);

    assert_eq!(frame.commands.len(), 2);
    assert_eq!(frame.commands[0], frame.commands[1]);
    match &frame.commands[0] {
        Command::Points(p) => assert_eq!(p, &disk_points(circle).collect::<Vec<_>>()),
        c => panic!("unexpected command {:?}", c),
    }
}
