//! Shape structs, the `Shape` enum and the `Measure` trait.
//!
//! - `Measure`: perimeter and area, both scalars ≥ 0 for valid dimensions.
//! - `Shape`: closed tagged union over the known variants; `kind()` exposes the
//!   variant tag without borrowing the geometry.

use std::f64::consts::PI;
use std::fmt;

use nalgebra::Vector2;

use crate::parallelogram_area;

/// Anything that can report a perimeter and an area.
pub trait Measure {
    fn perimeter(&self) -> f64;
    fn area(&self) -> f64;
}

/// Circle of the given radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Measure for Circle {
    #[inline]
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
    #[inline]
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

/// Square of the given side length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Square {
    #[inline]
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Measure for Square {
    #[inline]
    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }
    #[inline]
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Measure for Rectangle {
    #[inline]
    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
    #[inline]
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Triangle given by its three vertices (any orientation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub c: Vector2<f64>,
}

impl Triangle {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Self {
        Self { a, b, c }
    }

    /// Equilateral triangle with one edge on the x-axis starting at the origin.
    pub fn equilateral(side: f64) -> Self {
        let h = side * 3f64.sqrt() / 2.0;
        Self {
            a: Vector2::zeros(),
            b: Vector2::new(side, 0.0),
            c: Vector2::new(side / 2.0, h),
        }
    }
}

impl Measure for Triangle {
    fn perimeter(&self) -> f64 {
        (self.b - self.a).norm() + (self.c - self.b).norm() + (self.a - self.c).norm()
    }
    fn area(&self) -> f64 {
        // half the unsigned parallelogram spanned by two edges
        parallelogram_area(self.b - self.a, self.c - self.a).abs() / 2.0
    }
}

/// Variant tag of a `Shape`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A shape value as held by a `ShapeBox`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Square(Square),
    Rectangle(Rectangle),
    Triangle(Triangle),
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }

    #[inline]
    pub fn is_circle(&self) -> bool {
        matches!(self, Shape::Circle(_))
    }

    /// All dimensions finite and non-negative (triangle vertices finite).
    pub fn is_valid(&self) -> bool {
        let ok = |x: f64| x.is_finite() && x >= 0.0;
        match *self {
            Shape::Circle(c) => ok(c.radius),
            Shape::Square(s) => ok(s.side),
            Shape::Rectangle(r) => ok(r.width) && ok(r.height),
            Shape::Triangle(t) => [t.a, t.b, t.c]
                .iter()
                .all(|v| v.x.is_finite() && v.y.is_finite()),
        }
    }
}

impl Measure for Shape {
    fn perimeter(&self) -> f64 {
        match self {
            Shape::Circle(s) => s.perimeter(),
            Shape::Square(s) => s.perimeter(),
            Shape::Rectangle(s) => s.perimeter(),
            Shape::Triangle(s) => s.perimeter(),
        }
    }
    fn area(&self) -> f64 {
        match self {
            Shape::Circle(s) => s.area(),
            Shape::Square(s) => s.area(),
            Shape::Rectangle(s) => s.area(),
            Shape::Triangle(s) => s.area(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => write!(f, "Circle(r={})", c.radius),
            Shape::Square(s) => write!(f, "Square(s={})", s.side),
            Shape::Rectangle(r) => write!(f, "Rectangle(w={}, h={})", r.width, r.height),
            Shape::Triangle(t) => write!(
                f,
                "Triangle(({}, {}), ({}, {}), ({}, {}))",
                t.a.x, t.a.y, t.b.x, t.b.y, t.c.x, t.c.y
            ),
        }
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Shape::Circle(s)
    }
}
impl From<Square> for Shape {
    fn from(s: Square) -> Self {
        Shape::Square(s)
    }
}
impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}
impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Self {
        Shape::Triangle(s)
    }
}
