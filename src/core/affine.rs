use crate::error::{SkewError, SkewResult};

/// 2D affine map: `x' = a*x + b*y + c`, `y' = d*x + e*y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine2 {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
            e: 1.0,
            f: 0.0,
        }
    }

    /// Independent axis scaling followed by translation.
    #[must_use]
    pub const fn scale_translate(sx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self {
            a: sx,
            b: 0.0,
            c: tx,
            d: 0.0,
            e: sy,
            f: ty,
        }
    }

    /// Horizontal shear: `x' = x + y * tan_theta`, `y' = y`.
    #[must_use]
    pub const fn shear_x(tan_theta: f64) -> Self {
        Self {
            a: 1.0,
            b: tan_theta,
            c: 0.0,
            d: 0.0,
            e: 1.0,
            f: 0.0,
        }
    }

    /// Composes `self` followed by `next` (i.e. `next * self`).
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            a: next.a * self.a + next.b * self.d,
            b: next.a * self.b + next.b * self.e,
            c: next.a * self.c + next.b * self.f + next.c,
            d: next.d * self.a + next.e * self.d,
            e: next.d * self.b + next.e * self.e,
            f: next.d * self.c + next.e * self.f + next.f,
        }
    }

    #[must_use]
    pub fn determinant(self) -> f64 {
        self.a * self.e - self.b * self.d
    }

    pub fn invert(self) -> SkewResult<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < f64::EPSILON {
            return Err(SkewError::SingularTransform(format!(
                "affine map is not invertible (determinant {det})"
            )));
        }

        let a = self.e / det;
        let b = -self.b / det;
        let d = -self.d / det;
        let e = self.a / det;
        Ok(Self {
            a,
            b,
            c: -(a * self.c + b * self.f),
            d,
            e,
            f: -(d * self.c + e * self.f),
        })
    }

    #[must_use]
    pub fn apply(self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.b * y + self.c,
            self.d * x + self.e * y + self.f,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Affine2;

    #[test]
    fn shear_then_inverse_is_identity() {
        let shear = Affine2::shear_x(30.0_f64.to_radians().tan());
        let inverse = shear.invert().expect("shear is invertible");
        let (x, y) = inverse.apply(shear.apply(3.5, -2.0).0, -2.0);
        assert!((x - 3.5).abs() < 1e-12);
        assert!((y + 2.0).abs() < 1e-12);
    }

    #[test]
    fn composition_applies_left_to_right() {
        let normalize = Affine2::scale_translate(0.5, 0.5, 0.0, 0.0);
        let shear = Affine2::shear_x(1.0);
        let composed = normalize.then(shear);

        let (nx, ny) = normalize.apply(2.0, 2.0);
        let (step_x, step_y) = shear.apply(nx, ny);
        let (composed_x, composed_y) = composed.apply(2.0, 2.0);
        assert!((step_x - composed_x).abs() < 1e-12);
        assert!((step_y - composed_y).abs() < 1e-12);
    }

    #[test]
    fn degenerate_scale_is_rejected() {
        let flat = Affine2::scale_translate(1.0, 0.0, 0.0, 0.0);
        assert!(flat.invert().is_err());
    }
}
