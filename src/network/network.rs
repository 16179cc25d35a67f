use log::trace;
use rand::Rng;

use crate::activation::sigmoid;
use crate::math::{Matrix, MatrixError};
use crate::network::topology::Topology;

pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Perceptron with exactly one hidden layer and sigmoid activations.
///
/// Weight shapes: `weights_ih` is hidden x input, `weights_ho` is output x
/// hidden; both bias vectors are single columns. The shapes are fixed for
/// the lifetime of the network and only the values change under `train`.
#[derive(Debug, Clone)]
pub struct Network {
    weights_ih: Matrix,
    weights_ho: Matrix,
    bias_h: Matrix,
    bias_o: Matrix,
    learning_rate: f64,
}

/// Post-activation values of one forward pass, kept for backprop.
struct Activations {
    inputs: Matrix,
    hidden: Matrix,
    output: Matrix,
}

impl Network {
    /// Random weights and biases in [-1, 1), learning rate 0.1.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Network {
        Network::new_with_rng(&mut rand::thread_rng(), input_size, hidden_size, output_size)
    }

    pub fn new_with_rng<R: Rng + ?Sized>(
        rng: &mut R,
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
    ) -> Network {
        Network {
            weights_ih: Matrix::random_with(rng, hidden_size, input_size),
            weights_ho: Matrix::random_with(rng, output_size, hidden_size),
            bias_h: Matrix::random_with(rng, hidden_size, 1),
            bias_o: Matrix::random_with(rng, output_size, 1),
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }

    pub fn from_topology(topology: &Topology) -> Network {
        Network::new(topology.input_size, topology.hidden_size, topology.output_size)
    }

    /// Assembles a network from explicit matrices.
    ///
    /// Fails with `DimensionMismatch` unless the four matrices agree on the
    /// input/hidden/output sizes.
    pub fn from_parts(
        weights_ih: Matrix,
        weights_ho: Matrix,
        bias_h: Matrix,
        bias_o: Matrix,
        learning_rate: f64,
    ) -> Result<Network, MatrixError> {
        let hidden = weights_ih.rows();
        let output = weights_ho.rows();

        if weights_ho.cols() != hidden {
            return Err(MatrixError::DimensionMismatch {
                op: "from_parts",
                left: weights_ih.shape(),
                right: weights_ho.shape(),
            });
        }
        if bias_h.shape() != (hidden, 1) {
            return Err(MatrixError::DimensionMismatch {
                op: "from_parts",
                left: (hidden, 1),
                right: bias_h.shape(),
            });
        }
        if bias_o.shape() != (output, 1) {
            return Err(MatrixError::DimensionMismatch {
                op: "from_parts",
                left: (output, 1),
                right: bias_o.shape(),
            });
        }

        Ok(Network { weights_ih, weights_ho, bias_h, bias_o, learning_rate })
    }

    pub fn topology(&self) -> Topology {
        Topology::new(self.weights_ih.cols(), self.weights_ih.rows(), self.weights_ho.rows())
    }

    pub fn weights_ih(&self) -> &Matrix {
        &self.weights_ih
    }

    pub fn weights_ho(&self) -> &Matrix {
        &self.weights_ho
    }

    pub fn bias_h(&self) -> &Matrix {
        &self.bias_h
    }

    pub fn bias_o(&self) -> &Matrix {
        &self.bias_o
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }

    fn feed_forward(&self, input: &[f64]) -> Result<Activations, MatrixError> {
        let inputs = Matrix::from_vec(input);

        let mut hidden = self.weights_ih.multiply(&inputs)?;
        hidden.add(&self.bias_h)?;
        sigmoid::activate(&mut hidden);

        let mut output = self.weights_ho.multiply(&hidden)?;
        output.add(&self.bias_o)?;
        sigmoid::activate(&mut output);

        Ok(Activations { inputs, hidden, output })
    }

    /// Forward pass only; the network is not modified.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>, MatrixError> {
        self.feed_forward(input)?.output.to_vec()
    }

    /// One step of online gradient descent on a single input/target pair.
    ///
    /// A wrong-length `input` fails before anything is mutated. A wrong-length
    /// `target` also fails before any update. Errors are not rolled back
    /// otherwise, so callers must not assume atomicity.
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> Result<(), MatrixError> {
        let Activations { inputs, hidden, output } = self.feed_forward(input)?;

        let targets = Matrix::from_vec(target);
        let output_errors = targets.subtract(&output)?;

        let mut output_delta = sigmoid::gradient(&output).hadamard(&output_errors)?;
        output_delta.scale(self.learning_rate);

        let weights_ho_deltas = output_delta.multiply(&hidden.transpose())?;

        // Must read weights_ho before it absorbs this step's deltas.
        let hidden_errors = self.weights_ho.transpose().multiply(&output_errors)?;

        self.weights_ho.add(&weights_ho_deltas)?;
        self.bias_o.add(&output_delta)?;

        let mut hidden_delta = sigmoid::gradient(&hidden).hadamard(&hidden_errors)?;
        hidden_delta.scale(self.learning_rate);

        let weights_ih_deltas = hidden_delta.multiply(&inputs.transpose())?;

        self.weights_ih.add(&weights_ih_deltas)?;
        self.bias_h.add(&hidden_delta)?;

        trace!("train step output:\n{}", output);
        Ok(())
    }
}
