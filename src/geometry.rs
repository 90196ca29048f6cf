//! Point arithmetic and the angle bookkeeping behind the decorative arcs.

use crate::errors::*;

//////////////////////////////////////////////////////////////////////
// define some constants for Penrose tiles

pub const PHI: f64 = 1.618033988749895;
pub const PI: f64 = std::f64::consts::PI;
pub const DEG: f64 = PI / 180.0;

//////////////////////////////////////////////////////////////////////
// pull in some types from nalgebra

pub type Vec2d = nalgebra::Vector2<f64>;
pub type Vec3d = nalgebra::Vector3<f64>;
pub type Point2d = nalgebra::geometry::Point2<f64>;

//////////////////////////////////////////////////////////////////////
// angle in degrees between v and the +x axis, in [0, 360)
//
// fails for a zero-length vector since there is nothing to normalize

pub fn angle_of(v: &Vec2d) -> Result<f64> {

    let len = v.norm();

    if !(len > 0.0) || !len.is_finite() {
        bail!(ErrorKind::Domain(
            format!("angle of vector ({:}, {:}) is undefined", v.x, v.y)));
    }

    let angle = (v.x / len).max(-1.0).min(1.0).acos() / DEG;

    if v.y < 0.0 && angle > 0.0 {
        Ok(360.0 - angle)
    } else {
        Ok(angle)
    }

}

//////////////////////////////////////////////////////////////////////
// circular arc ready for a drawing surface: square bounding box with
// corners p0 = center + (r, r) and p1 = center - (r, r), plus start
// and signed sweep angles in degrees

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ArcGeometry {
    pub p0: Point2d,
    pub p1: Point2d,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl ArcGeometry {

    pub fn center(&self) -> Point2d {
        self.p1 + 0.5*(self.p0 - self.p1)
    }

    pub fn radius(&self) -> f64 {
        0.5*(self.p0.x - self.p1.x).abs()
    }

    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

}

// arc around center sweeping the short way from direction v1 to
// direction v2; the sweep always lands in (-180, 180]

pub fn arc_geometry(v1: &Vec2d,
                    v2: &Vec2d,
                    center: &Point2d,
                    radius: f64) -> Result<ArcGeometry> {

    let start_angle = angle_of(v1)?;
    let mut sweep_angle = angle_of(v2)? - start_angle;

    if sweep_angle.abs() > 180.0 {
        sweep_angle -= sweep_angle.signum() * 360.0;
    }

    if sweep_angle <= -180.0 {
        sweep_angle += 360.0;
    }

    let r = Vec2d::repeat(radius);

    Ok(ArcGeometry {
        p0: center + r,
        p1: center - r,
        start_angle: start_angle,
        sweep_angle: sweep_angle,
    })

}

//////////////////////////////////////////////////////////////////////
// unsigned area of triangle (p0, p1, p2)

pub fn triangle_area(p0: &Point2d, p1: &Point2d, p2: &Point2d) -> f64 {

    let u = p1 - p0;
    let v = p2 - p0;

    0.5*(u.x*v.y - u.y*v.x).abs()

}

//////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {

    use super::*;

    fn unit(deg: f64) -> Vec2d {
        Vec2d::new((deg*DEG).cos(), (deg*DEG).sin())
    }

    #[test]
    fn angle_of_axes() {
        assert!(angle_of(&Vec2d::new(1.0, 0.0)).unwrap().abs() < 1e-12);
        assert!((angle_of(&Vec2d::new(0.0, 2.0)).unwrap() - 90.0).abs() < 1e-12);
        assert!((angle_of(&Vec2d::new(-3.0, 0.0)).unwrap() - 180.0).abs() < 1e-12);
        assert!((angle_of(&Vec2d::new(0.0, -0.5)).unwrap() - 270.0).abs() < 1e-12);
    }

    #[test]
    fn angle_of_stays_below_360() {
        for i in 0..3600 {
            let deg = i as f64 * 0.1;
            let angle = angle_of(&unit(deg)).unwrap();
            assert!(angle >= 0.0 && angle < 360.0, "{:} -> {:}", deg, angle);
        }
        let tiny = angle_of(&Vec2d::new(1.0, -1e-300)).unwrap();
        assert!(tiny < 360.0);
    }

    #[test]
    fn angle_of_zero_vector_is_domain_error() {
        match angle_of(&Vec2d::zeros()) {
            Err(Error(ErrorKind::Domain(_), _)) => {}
            other => panic!("expected domain error, got {:?}", other),
        }
    }

    #[test]
    fn sweep_takes_short_way_across_zero() {
        let center = Point2d::new(5.0, 5.0);
        let arc = arc_geometry(&unit(10.0), &unit(350.0), &center, 1.0).unwrap();
        assert!((arc.start_angle - 10.0).abs() < 1e-9);
        assert!((arc.sweep_angle + 20.0).abs() < 1e-9);

        let arc = arc_geometry(&unit(350.0), &unit(10.0), &center, 1.0).unwrap();
        assert!((arc.sweep_angle - 20.0).abs() < 1e-9);
    }

    #[test]
    fn sweep_is_half_open_range() {
        let center = Point2d::origin();
        for i in 0..72 {
            for j in 0..72 {
                let arc = arc_geometry(&unit(5.0*i as f64), &unit(5.0*j as f64),
                                       &center, 1.0).unwrap();
                assert!(arc.sweep_angle > -180.0 && arc.sweep_angle <= 180.0,
                        "{:} {:} -> {:}", i, j, arc.sweep_angle);
            }
        }
        let arc = arc_geometry(&Vec2d::new(0.0, 1.0), &Vec2d::new(0.0, -1.0),
                               &center, 1.0).unwrap();
        assert_eq!(arc.sweep_angle, 180.0);
    }

    #[test]
    fn arc_bounding_box_is_square_around_center() {
        let center = Point2d::new(3.0, -2.0);
        let arc = arc_geometry(&unit(0.0), &unit(90.0), &center, 1.5).unwrap();
        assert_eq!(arc.p0, Point2d::new(4.5, -0.5));
        assert_eq!(arc.p1, Point2d::new(1.5, -3.5));
        assert_eq!(arc.center(), center);
        assert_eq!(arc.radius(), 1.5);
        assert!((arc.end_angle() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn area_of_right_triangle() {
        let area = triangle_area(&Point2d::new(0.0, 0.0),
                                 &Point2d::new(4.0, 0.0),
                                 &Point2d::new(0.0, 3.0));
        assert_eq!(area, 6.0);
    }

}
