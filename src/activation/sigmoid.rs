use std::f64::consts::E;

use crate::math::matrix::Matrix;

/// Logistic activation `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Sigmoid derivative expressed on the already-activated value `y = sigmoid(x)`.
///
/// The network keeps post-activation matrices around for backprop, so this
/// takes `y` directly and must not re-apply `sigmoid`.
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

/// Applies `sigmoid` to every cell of `m` in place.
pub fn activate(m: &mut Matrix) {
    m.map_in_place(sigmoid);
}

/// Element-wise derivative of an activated matrix, returned as a new matrix.
pub fn gradient(activated: &Matrix) -> Matrix {
    activated.map(sigmoid_derivative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_one_half_at_zero() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn derivative_peaks_at_one_half() {
        assert_eq!(sigmoid_derivative(0.5), 0.25);
        assert_eq!(sigmoid_derivative(0.0), 0.0);
        assert_eq!(sigmoid_derivative(1.0), 0.0);
    }

    #[test]
    fn gradient_leaves_input_untouched() {
        let m = Matrix::from_vec(&[0.5, 0.9]);
        let g = gradient(&m);
        assert_eq!(m.to_vec().unwrap(), vec![0.5, 0.9]);
        assert_eq!(g.get(0, 0).unwrap(), 0.25);
    }
}
