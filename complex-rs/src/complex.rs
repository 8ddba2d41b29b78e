use serde::{Deserialize, Serialize};

/// Double precision complex number. Single precision visibly changes the
/// escape times near the set boundary, so there is no `f32` flavour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Squared modulus, `re² + im²`.
    pub fn arg_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// `z²` expanded as `(re² - im², 2·re·im)`.
    pub fn square(self) -> Self {
        Self {
            re: self.re * self.re - self.im * self.im,
            im: 2.0 * self.re * self.im,
        }
    }
}

impl std::ops::Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Complex {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_matches_self_multiplication() {
        let z = Complex::new(0.75, -1.25);
        assert_eq!(z.square(), z * z);
    }

    #[test]
    fn arg_sq_is_squared_modulus() {
        assert_eq!(Complex::new(3.0, 4.0).arg_sq(), 25.0);
        assert_eq!(Complex::ZERO.arg_sq(), 0.0);
    }

    #[test]
    fn add_is_componentwise() {
        let z = Complex::new(1.0, 2.0) + Complex::new(-0.5, 0.25);
        assert_eq!(z, Complex::new(0.5, 2.25));
    }
}
