use complex_rs::complex::Complex;

/// Color index given to points that never escape within the bound.
pub const IN_SET: u8 = 255;

/// Escape-time coloring of the Mandelbrot set for a fixed iteration bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mandelbrot {
    pub max_iteration: u32,
}

impl Mandelbrot {
    pub fn new(max_iteration: u32) -> Self {
        Self { max_iteration }
    }

    /// Iterates `z = z² + c` from `z = 0` and returns the color index.
    ///
    /// The result is [`IN_SET`] if `|z|²` stays below 4 for all
    /// `max_iteration` steps, otherwise the escape step reduced modulo 255.
    /// The modulo (rather than a clamp) is part of the output format.
    pub fn color(&self, c: Complex) -> u8 {
        let mut z = Complex::ZERO;
        let mut i = 0;

        while i < self.max_iteration {
            if z.arg_sq() >= 4.0 {
                break;
            }
            z = z.square() + c;
            i += 1;
        }

        if i == self.max_iteration {
            IN_SET
        } else {
            (i % 255) as u8
        }
    }
}

/// Shorthand for `Mandelbrot::new(max_iteration).color(Complex::new(a, b))`.
pub fn escape_time(a: f64, b: f64, max_iteration: u32) -> u8 {
    Mandelbrot::new(max_iteration).color(Complex::new(a, b))
}
