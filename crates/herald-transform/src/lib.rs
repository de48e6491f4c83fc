//! Composable coordinate transforms.
//!
//! Screen pixels, minimap pixels, and world units are related by linear
//! maps. Name transforms `a_to_b`: `fwd` takes a point or distance in `a`
//! to `b`, `back` goes the other way. Compose with [`Chain`]:
//! `Chain(a_to_b, b_to_c)` is `a_to_c`, applying forward in order and
//! backward in reverse.
//!
//! [`PixelToCoord`] encodes the pixel/point duality at the end of a chain:
//! going forward a fractional coordinate becomes the pixel index containing
//! it; coming back a pixel index becomes the coordinate of that pixel's
//! center.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use herald_core::{ConfigError, Point};

/// A bidirectional map between two 2D coordinate systems.
///
/// Object-safe so heterogeneous transforms can be chained as
/// `Box<dyn Transform>`.
pub trait Transform {
    /// Map a distance forward. Distances scale by the x component only.
    fn fwd_dist(&self, dist: f64) -> f64;
    /// Map a point forward.
    fn fwd_pt(&self, pt: Point) -> Point;
    /// Map a distance backward.
    fn back_dist(&self, dist: f64) -> f64;
    /// Map a point backward.
    fn back_pt(&self, pt: Point) -> Point;
}

/// A linear transform: scale then offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Linear {
    /// Per-axis scale. Both components are non-zero by construction.
    pub scale: Point,
    /// Additive offset, applied after scaling.
    pub offset: Point,
}

impl Linear {
    /// Build a linear transform. A zero scale component is a configuration
    /// error: the transform would not be invertible.
    pub fn new(scale: Point, offset: Point) -> Result<Self, ConfigError> {
        if scale.x == 0.0 || scale.y == 0.0 {
            return Err(ConfigError::ZeroScale {
                scale: (scale.x, scale.y),
            });
        }
        Ok(Self { scale, offset })
    }

    /// A pure scaling transform.
    pub fn scaling(scale: Point) -> Result<Self, ConfigError> {
        Self::new(scale, Point::default())
    }

    /// A pure translation. Always valid: the implicit scale is one.
    pub fn translation(offset: Point) -> Self {
        Self {
            scale: Point::splat(1.0),
            offset,
        }
    }
}

impl Transform for Linear {
    fn fwd_dist(&self, dist: f64) -> f64 {
        dist * self.scale.x
    }

    fn fwd_pt(&self, pt: Point) -> Point {
        pt * self.scale + self.offset
    }

    fn back_dist(&self, dist: f64) -> f64 {
        dist / self.scale.x
    }

    fn back_pt(&self, pt: Point) -> Point {
        (pt - self.offset) / self.scale
    }
}

/// The pixel/point duality at the end of a pixel-space chain.
///
/// Forward, a fractional coordinate maps to the index of the pixel that
/// contains it. Backward, a pixel index maps to the coordinate of that
/// pixel's center, so a round trip lands mid-pixel rather than on the
/// top-left corner. Distances pass through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelToCoord;

impl Transform for PixelToCoord {
    fn fwd_dist(&self, dist: f64) -> f64 {
        dist
    }

    fn fwd_pt(&self, pt: Point) -> Point {
        pt.floor()
    }

    fn back_dist(&self, dist: f64) -> f64 {
        dist
    }

    fn back_pt(&self, pt: Point) -> Point {
        pt.floor() + Point::splat(0.5)
    }
}

/// An ordered composition of transforms.
///
/// `fwd` applies the steps in order, `back` in reverse, so a chain built
/// from `a_to_b, b_to_c` behaves as `a_to_c`.
pub struct Chain {
    steps: Vec<Box<dyn Transform>>,
}

impl Chain {
    /// Compose a sequence of transforms.
    pub fn new(steps: Vec<Box<dyn Transform>>) -> Self {
        Self { steps }
    }
}

impl Transform for Chain {
    fn fwd_dist(&self, mut dist: f64) -> f64 {
        for step in &self.steps {
            dist = step.fwd_dist(dist);
        }
        dist
    }

    fn fwd_pt(&self, mut pt: Point) -> Point {
        for step in &self.steps {
            pt = step.fwd_pt(pt);
        }
        pt
    }

    fn back_dist(&self, mut dist: f64) -> f64 {
        for step in self.steps.iter().rev() {
            dist = step.back_dist(dist);
        }
        dist
    }

    fn back_pt(&self, mut pt: Point) -> Point {
        for step in self.steps.iter().rev() {
            pt = step.back_pt(pt);
        }
        pt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn linear_scale_only() {
        let t = Linear::scaling(Point::splat(2.0)).unwrap();
        assert_eq!(t.fwd_pt(Point::new(3.0, 4.0)), Point::new(6.0, 8.0));
        assert_eq!(t.back_pt(Point::new(6.0, 8.0)), Point::new(3.0, 4.0));
        assert_eq!(t.fwd_dist(5.0), 10.0);
        assert_eq!(t.back_dist(10.0), 5.0);
    }

    #[test]
    fn zero_scale_rejected() {
        assert!(matches!(
            Linear::scaling(Point::new(0.0, 2.0)),
            Err(ConfigError::ZeroScale { .. })
        ));
        assert!(matches!(
            Linear::new(Point::new(1.0, 0.0), Point::splat(3.0)),
            Err(ConfigError::ZeroScale { .. })
        ));
    }

    #[test]
    fn chain_applies_in_order_and_reverses() {
        // a_to_b doubles, b_to_c shifts by (1, 1).
        let chain = Chain::new(vec![
            Box::new(Linear::scaling(Point::splat(2.0)).unwrap()),
            Box::new(Linear::translation(Point::splat(1.0))),
        ]);
        assert_eq!(chain.fwd_pt(Point::new(3.0, 4.0)), Point::new(7.0, 9.0));
        assert_eq!(chain.back_pt(Point::new(7.0, 9.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn pixel_to_coord_duality() {
        let p = PixelToCoord;
        assert_eq!(p.fwd_pt(Point::new(15.8, 3.2)), Point::new(15.0, 3.0));
        assert_eq!(p.back_pt(Point::new(15.0, 3.0)), Point::new(15.5, 3.5));
        // A fractional point snaps to its pixel, then returns as the center.
        assert_eq!(p.back_pt(p.fwd_pt(Point::new(15.8, 3.2))), Point::new(15.5, 3.5));
        assert_eq!(p.fwd_dist(2.75), 2.75);
    }

    fn arb_linear() -> impl Strategy<Value = Linear> {
        let nonzero = prop_oneof![-64.0f64..-0.25, 0.25f64..64.0];
        (nonzero.clone(), nonzero, -100.0f64..100.0, -100.0f64..100.0)
            .prop_map(|(sx, sy, ox, oy)| {
                Linear::new(Point::new(sx, sy), Point::new(ox, oy)).unwrap()
            })
    }

    proptest! {
        #[test]
        fn linear_roundtrip(t in arb_linear(), x in -1e3f64..1e3, y in -1e3f64..1e3) {
            let p = Point::new(x, y);
            let back = t.back_pt(t.fwd_pt(p));
            prop_assert!((back.x - p.x).abs() < 1e-6);
            prop_assert!((back.y - p.y).abs() < 1e-6);
        }

        #[test]
        fn dist_roundtrip(t in arb_linear(), d in -1e3f64..1e3) {
            prop_assert!((t.back_dist(t.fwd_dist(d)) - d).abs() < 1e-6);
            prop_assert!((t.fwd_dist(t.back_dist(d)) - d).abs() < 1e-6);
        }

        #[test]
        fn chain_roundtrip(
            a in arb_linear(),
            b in arb_linear(),
            x in -1e3f64..1e3,
            y in -1e3f64..1e3,
        ) {
            let chain = Chain::new(vec![Box::new(a), Box::new(b)]);
            let p = Point::new(x, y);
            let back = chain.back_pt(chain.fwd_pt(p));
            prop_assert!((back.x - p.x).abs() < 1e-5);
            prop_assert!((back.y - p.y).abs() < 1e-5);
        }
    }
}
