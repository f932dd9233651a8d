use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// 3-vector in the trap frame (SI meters / meters-per-second).
pub type Vec3 = nalgebra::Vector3<Real>;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Clamp a cosine ratio into the acos domain.
///
/// Amplitude/phase algebra can push the ratio a few ulps past ±1; the true
/// mathematical value is in range whenever the motion is bounded, so the
/// overshoot is absorbed silently.
pub fn clamp_unit(v: Real) -> Real {
    v.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn clamp_unit_absorbs_overshoot() {
        assert_eq!(clamp_unit(1.0 + 1e-15), 1.0);
        assert_eq!(clamp_unit(-1.0 - 1e-15), -1.0);
        assert_eq!(clamp_unit(0.5), 0.5);
        assert!(clamp_unit(1.0000001).acos().is_finite());
    }

    proptest::proptest! {
        #[test]
        fn clamp_unit_keeps_acos_domain(v in -10.0f64..10.0) {
            let c = clamp_unit(v);
            proptest::prop_assert!((-1.0..=1.0).contains(&c));
            proptest::prop_assert!(c.acos().is_finite());
        }
    }
}
