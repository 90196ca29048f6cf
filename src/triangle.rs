//! Robinson triangles: the two variants, their deflation rules and
//! their decorative arcs.

use crate::errors::*;
use crate::geometry::*;

//////////////////////////////////////////////////////////////////////
// some useful types for constructing Penrose tiles

#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum Variant {
    Acute,  // 36-72-72
    Obtuse  // 36-36-108
}

// fixed palette; arcs and bodies never get styled beyond this
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    Purple,
    Blue,
    Orange,
    Red,
    Black
}

impl Color {

    pub fn rgb(self) -> Vec3d {
        match self {
            Color::Purple => Vec3d::new(160.0, 32.0, 240.0) / 255.0,
            Color::Blue => Vec3d::new(0.0, 0.0, 1.0),
            Color::Orange => Vec3d::new(1.0, 165.0 / 255.0, 0.0),
            Color::Red => Vec3d::new(1.0, 0.0, 0.0),
            Color::Black => Vec3d::new(0.0, 0.0, 0.0),
        }
    }

}

pub const OUTLINE_COLOR: Color = Color::Black;

// indexed by Variant; arc slot 0 is centered on vertex a, slot 1 on c.
// the swap between rows keeps arcs continuous across shared edges.
const BODY_COLORS: [Color; 2] = [Color::Purple, Color::Blue];

const ARC_COLORS: [[Color; 2]; 2] = [
    [Color::Orange, Color::Red],
    [Color::Red, Color::Orange]
];

impl Variant {

    pub fn body_color(self) -> Color {
        BODY_COLORS[self as usize]
    }

    pub fn arc_colors(self) -> [Color; 2] {
        ARC_COLORS[self as usize]
    }

}

//////////////////////////////////////////////////////////////////////
// primitives handed to a drawing surface

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Body {
    pub points: [Point2d; 3],
    pub fill: Color
}

// polyline a -> b -> b -> c; the c-a edge is left unstroked
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Outline {
    pub points: [Point2d; 4],
    pub color: Color
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ArcStroke {
    pub geometry: ArcGeometry,
    pub color: Color
}

//////////////////////////////////////////////////////////////////////
// half-tile triangle: a is the tip, b the outer vertex and c the
// inner vertex

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Triangle {
    pub a: Point2d,
    pub b: Point2d,
    pub c: Point2d,
    pub variant: Variant
}

impl Triangle {

    pub fn new(variant: Variant, a: Point2d, b: Point2d, c: Point2d) -> Self {
        Triangle { a: a, b: b, c: c, variant: variant }
    }

    pub fn acute(a: Point2d, b: Point2d, c: Point2d) -> Self {
        Self::new(Variant::Acute, a, b, c)
    }

    pub fn obtuse(a: Point2d, b: Point2d, c: Point2d) -> Self {
        Self::new(Variant::Obtuse, a, b, c)
    }

    pub fn points(&self) -> [Point2d; 3] {
        [self.a, self.b, self.c]
    }

    pub fn area(&self) -> f64 {
        triangle_area(&self.a, &self.b, &self.c)
    }

    // substitute with smaller triangles: acute -> 2 acute + 1 obtuse,
    // obtuse -> 1 acute + 1 obtuse

    pub fn deflate(&self) -> Vec<Triangle> {

        let (a, b, c) = (self.a, self.b, self.c);

        match self.variant {

            Variant::Acute => {

                let d = b + (a - b) / PHI;
                let e = a + (c - a) / PHI;

                vec![Triangle::acute(b, c, e),
                     Triangle::acute(b, d, e),
                     Triangle::obtuse(d, e, a)]

            }

            Variant::Obtuse => {

                let d = c + (b - c) / PHI;

                vec![Triangle::acute(c, d, a),
                     Triangle::obtuse(d, a, b)]

            }

        }

    }

    // arc radii at vertex a and vertex c
    fn arc_radii(&self) -> (f64, f64) {

        match self.variant {
            Variant::Acute => (
                (self.c - self.a).norm() / PHI,
                (self.b - self.c).norm() / PHI
            ),
            Variant::Obtuse => (
                (self.b - self.a).norm() * (1.0 - 1.0 / PHI),
                (self.b - self.c).norm() * (1.0 - 1.0 / PHI)
            )
        }

    }

    // the two connection arcs, centered at a and at c
    pub fn arcs(&self) -> Result<[ArcStroke; 2]> {

        let (ra, rc) = self.arc_radii();
        let [color_a, color_c] = self.variant.arc_colors();

        let at_a = arc_geometry(&(self.c - self.a), &(self.b - self.a), &self.a, ra)?;
        let at_c = arc_geometry(&(self.a - self.c), &(self.b - self.c), &self.c, rc)?;

        Ok([ArcStroke { geometry: at_a, color: color_a },
            ArcStroke { geometry: at_c, color: color_c }])

    }

    pub fn body(&self) -> Body {
        Body { points: self.points(), fill: self.variant.body_color() }
    }

    pub fn outline(&self) -> Outline {
        Outline {
            points: [self.a, self.b, self.b, self.c],
            color: OUTLINE_COLOR
        }
    }

}

//////////////////////////////////////////////////////////////////////
