use num_complex::Complex;

// data type: f64, matching the arrays the simulation saves
pub type F = f64;

// complex data type consistent with F
pub type C = Complex<F>;

/// Fixed upper bound of the color scale. Intensities at or above it
/// saturate to the top color of the gradient.
pub const COLORBAR_MAX: F = 1e-7;

/// Base side of the plot area in pixels; the frame is shrunk along one
/// axis so that a data unit spans the same number of pixels in x and y.
pub const BASE_SIZE: F = 800.0;

/// Width of the color-bar strip in pixels.
pub const COLORBAR_WIDTH: u32 = 90;
