//! The tiling engine: builds the "sun" seed and deflates it to a
//! requested depth.

use log::{debug, info, warn};

use crate::config::TilingConfig;
use crate::errors::*;
use crate::geometry::*;
use crate::triangle::*;

//////////////////////////////////////////////////////////////////////
// initial seed shape: ten acute triangles around a shared tip at
// center, with exact 5-fold rotational symmetry

pub fn sun(center: &Point2d, radius: f64) -> Vec<Triangle> {

    let rim = |theta: f64| center + radius * Vec2d::new(theta.cos(), theta.sin());

    let theta2 = 2.0*PI / 10.0;

    let mut shapes = Vec::with_capacity(10);

    for i in 0..5 {

        let theta1 = 2.0*PI / 5.0 * (i as f64);

        shapes.push(Triangle::acute(*center,
                                    rim(theta1),
                                    rim(theta1 + theta2)));

        shapes.push(Triangle::acute(*center,
                                    rim(theta1 + 2.0*theta2),
                                    rim(theta1 + theta2)));

    }

    shapes

}

// one substitution step over a whole collection, keeping order
pub fn deflate_all(shapes: &[Triangle]) -> Vec<Triangle> {

    let mut new_list = Vec::with_capacity(2 * shapes.len());

    for shape in shapes {
        new_list.extend(shape.deflate());
    }

    new_list

}

//////////////////////////////////////////////////////////////////////
// number of (acute, obtuse) triangles after deflating the sun depth
// times: acute' = 2 acute + obtuse, obtuse' = acute + obtuse

pub fn expected_counts(depth: usize) -> (usize, usize) {

    let mut acute = 10;
    let mut obtuse = 0;

    for _ in 0..depth {
        let next_acute = 2*acute + obtuse;
        obtuse += acute;
        acute = next_acute;
    }

    (acute, obtuse)

}

//////////////////////////////////////////////////////////////////////
// external triggers

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Action {
    Grow,
    Shrink
}

//////////////////////////////////////////////////////////////////////
// the tiling at its current depth; owns its triangles exclusively

#[derive(Debug, Clone, PartialEq)]
pub struct Tiling {
    center: Point2d,
    radius: f64,
    depth: usize,
    shapes: Vec<Triangle>
}

impl Tiling {

    // seed only (depth 0)
    pub fn new(center: Point2d, radius: f64) -> Result<Self> {

        if !(radius > 0.0) || !radius.is_finite() {
            bail!(ErrorKind::Config(format!("seed radius must be positive, got {:}", radius)));
        }

        if !center.x.is_finite() || !center.y.is_finite() {
            bail!(ErrorKind::Config(format!("seed center must be finite, got {:}", center)));
        }

        Ok(Tiling {
            center: center,
            radius: radius,
            depth: 0,
            shapes: sun(&center, radius)
        })

    }

    pub fn with_depth(center: Point2d, radius: f64, depth: usize) -> Result<Self> {

        let mut tiling = Self::new(center, radius)?;
        tiling.deflate_to_depth(depth);

        Ok(tiling)

    }

    pub fn from_config(config: &TilingConfig) -> Result<Self> {

        let depth = config.initial_depth()?;
        let radius = config.seed_radius()?;

        Self::with_depth(config.center()?, radius, depth)

    }

    pub fn center(&self) -> Point2d {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    // (acute, obtuse)
    pub fn counts(&self) -> (usize, usize) {

        let acute = self.shapes.iter()
            .filter(|t| t.variant == Variant::Acute)
            .count();

        (acute, self.shapes.len() - acute)

    }

    pub fn total_area(&self) -> f64 {
        self.shapes.iter().map(|t| t.area()).sum()
    }

    //////////////////////////////////////////////////

    fn deflate(&mut self) {

        let new_list = deflate_all(&self.shapes);

        debug!("deflated {:} triangles into {:}", self.shapes.len(), new_list.len());

        self.shapes = new_list;
        self.depth += 1;

    }

    fn report(&self) {

        let (acute, obtuse) = self.counts();

        info!("depth {:}: {:} triangles ({:} acute, {:} obtuse), area {:.1}",
              self.depth, self.shapes.len(), acute, obtuse, self.total_area());

    }

    // rebuild the seed and deflate depth times; deflation is not
    // invertible so this is the only way down
    pub fn deflate_to_depth(&mut self, depth: usize) {

        self.shapes = sun(&self.center, self.radius);
        self.depth = 0;

        for _ in 0..depth {
            self.deflate();
        }

        self.report();

    }

    pub fn grow(&mut self) {

        self.deflate();
        self.report();

    }

    pub fn shrink(&mut self) {

        if self.depth == 0 {
            warn!("already at depth 0, not shrinking");
            return;
        }

        self.deflate_to_depth(self.depth - 1);

    }

    pub fn apply(&mut self, action: Action) {

        match action {
            Action::Grow => self.grow(),
            Action::Shrink => self.shrink()
        }

    }

    //////////////////////////////////////////////////
    // queries for drawing, each in tiling order

    pub fn bodies<'a>(&'a self) -> impl Iterator<Item=Body> + 'a {
        self.shapes.iter().map(|t| t.body())
    }

    pub fn outlines<'a>(&'a self) -> impl Iterator<Item=Outline> + 'a {
        self.shapes.iter().map(|t| t.outline())
    }

    pub fn arcs(&self) -> Result<Vec<ArcStroke>> {

        let mut rval = Vec::with_capacity(2 * self.shapes.len());

        for t in &self.shapes {
            rval.extend(t.arcs()?.iter().copied());
        }

        Ok(rval)

    }

}

//////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {

    use super::*;

    const VIEW: f64 = 750.0;

    fn view_center() -> Point2d {
        Point2d::new(VIEW / 2.0, VIEW / 2.0)
    }

    fn seed() -> Tiling {
        Tiling::new(view_center(), VIEW / 2.0).unwrap()
    }

    #[test]
    fn sun_has_ten_acute_triangles_sharing_the_tip() {
        let tiling = seed();
        assert_eq!(tiling.depth(), 0);
        assert_eq!(tiling.len(), 10);
        for t in tiling.triangles() {
            assert_eq!(t.variant, Variant::Acute);
            assert_eq!(t.a, view_center());
            assert!(((t.b - t.a).norm() - VIEW / 2.0).abs() < 1e-9);
            assert!(((t.c - t.a).norm() - VIEW / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn sun_is_five_fold_symmetric() {
        let shapes = seed().shapes;
        let c = view_center();
        let rot = nalgebra::Rotation2::new(2.0*PI / 5.0);
        for i in 0..10 {
            let t = &shapes[i];
            let u = &shapes[(i + 2) % 10];
            assert!((c + rot * (t.b - c) - u.b).norm() < 1e-9);
            assert!((c + rot * (t.c - c) - u.c).norm() < 1e-9);
        }
    }

    #[test]
    fn sun_covers_decagon_area() {
        // ten isosceles triangles with 36 degree apex
        let r = VIEW / 2.0;
        let expected = 10.0 * 0.5 * r * r * (36.0*DEG).sin();
        assert!((seed().total_area() - expected).abs() < 1e-6 * expected);
    }

    #[test]
    fn expected_counts_follow_substitution() {
        assert_eq!(expected_counts(0), (10, 0));
        assert_eq!(expected_counts(1), (20, 10));
        assert_eq!(expected_counts(2), (50, 30));
        assert_eq!(expected_counts(3), (130, 80));
    }

    #[test_log::test]
    fn deflated_counts_match_analytic_counts() {
        let mut tiling = seed();
        for depth in 1..7 {
            tiling.grow();
            assert_eq!(tiling.depth(), depth);
            assert_eq!(tiling.counts(), expected_counts(depth));
        }
    }

    #[test_log::test]
    fn grow_never_loses_triangles_or_area() {
        let mut tiling = seed();
        let area = tiling.total_area();
        for _ in 0..5 {
            let before = tiling.len();
            tiling.grow();
            assert!(tiling.len() >= before);
            assert!((tiling.total_area() - area).abs() < 1e-6 * area);
        }
    }

    #[test_log::test]
    fn shrink_matches_fresh_build() {
        let mut tiling = Tiling::with_depth(view_center(), VIEW / 2.0, 4).unwrap();
        tiling.shrink();
        let fresh = Tiling::with_depth(view_center(), VIEW / 2.0, 3).unwrap();
        assert_eq!(tiling.depth(), 3);
        assert_eq!(tiling.len(), fresh.len());
        assert_eq!(tiling, fresh);
    }

    #[test_log::test]
    fn shrink_at_depth_zero_is_noop() {
        let mut tiling = seed();
        tiling.shrink();
        assert_eq!(tiling.depth(), 0);
        assert_eq!(tiling, seed());
    }

    #[test]
    fn builds_are_deterministic() {
        let first = Tiling::with_depth(view_center(), VIEW / 2.0, 3).unwrap();
        let second = Tiling::with_depth(view_center(), VIEW / 2.0, 3).unwrap();
        assert_eq!(first.triangles(), second.triangles());
    }

    #[test_log::test]
    fn growing_from_seed_matches_direct_build() {
        let mut tiling = seed();
        for _ in 0..3 {
            tiling.apply(Action::Grow);
        }
        let direct = Tiling::with_depth(view_center(), VIEW / 2.0, 3).unwrap();
        assert_eq!(tiling.len(), 210);
        assert_eq!(direct.len(), 210);
        assert_eq!(tiling.triangles(), direct.triangles());
    }

    #[test]
    fn render_queries_follow_tiling_order() {
        let tiling = Tiling::with_depth(view_center(), VIEW / 2.0, 2).unwrap();
        let bodies: Vec<Body> = tiling.bodies().collect();
        let outlines: Vec<Outline> = tiling.outlines().collect();
        let arcs = tiling.arcs().unwrap();
        assert_eq!(bodies.len(), tiling.len());
        assert_eq!(outlines.len(), tiling.len());
        assert_eq!(arcs.len(), 2 * tiling.len());
        for (i, t) in tiling.triangles().iter().enumerate() {
            assert_eq!(bodies[i], t.body());
            assert_eq!(outlines[i], t.outline());
            assert_eq!(arcs[2*i].geometry.center(), t.arcs().unwrap()[0].geometry.center());
        }
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(Tiling::new(view_center(), 0.0).is_err());
        assert!(Tiling::new(view_center(), -1.0).is_err());
        assert!(Tiling::new(view_center(), f64::NAN).is_err());
    }

}
