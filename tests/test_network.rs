use approx::assert_relative_eq;
use hidden_mlp::{
    sigmoid,
    train::{evaluate, train_epoch, xor_samples},
    Matrix, MatrixError, Network,
};

fn filled(rows: usize, cols: usize, value: f64) -> Matrix {
    let mut m = Matrix::zeros(rows, cols);
    m.map_in_place(|_| value);
    m
}

/// 2-2-1 network with every weight 0.5 and zero biases.
fn half_weights() -> Network {
    Network::from_parts(
        filled(2, 2, 0.5),
        filled(1, 2, 0.5),
        Matrix::zeros(2, 1),
        Matrix::zeros(1, 1),
        0.1,
    )
    .unwrap()
}

fn column(rows: Vec<f64>) -> Matrix {
    Matrix::from_vec(&rows)
}

#[test]
fn predict_matches_hand_computation() {
    let net = half_weights();

    let out = net.predict(&[0.0, 0.0]).unwrap();

    // Both hidden units see 0 and emit 0.5; the output sees 0.5*0.5 + 0.5*0.5.
    assert_eq!(out.len(), 1);
    assert_relative_eq!(out[0], sigmoid(0.5), epsilon = 1e-12);
    assert_relative_eq!(out[0], 0.6224593312018546, epsilon = 1e-12);
}

#[test]
fn predict_does_not_mutate() {
    let net = half_weights();
    net.predict(&[1.0, 0.0]).unwrap();
    assert_eq!(net.weights_ih(), &filled(2, 2, 0.5));
    assert_eq!(net.bias_o(), &Matrix::zeros(1, 1));
}

#[test]
fn wrong_input_length_fails_before_any_mutation() {
    let mut net = Network::new(2, 3, 1);
    let before = net.clone();

    let err = net.train(&[1.0, 0.0, 1.0], &[1.0]).unwrap_err();

    assert!(matches!(err, MatrixError::DimensionMismatch { op: "multiply", .. }));
    assert_eq!(net.bias_h(), before.bias_h());
    assert_eq!(net.bias_o(), before.bias_o());
    assert_eq!(net.weights_ih(), before.weights_ih());
    assert_eq!(net.weights_ho(), before.weights_ho());
}

#[test]
fn predict_rejects_wrong_input_length() {
    let net = Network::new(2, 3, 1);
    assert!(matches!(
        net.predict(&[1.0]),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn single_step_uses_pre_update_hidden_to_output_weights() {
    let mut net = half_weights();
    let lr = 0.1;

    net.train(&[1.0, 0.0], &[1.0]).unwrap();

    let h = sigmoid(0.5);
    let o = sigmoid(0.5 * h + 0.5 * h);
    let err = 1.0 - o;
    let out_delta = o * (1.0 - o) * err * lr;

    let new_who = 0.5 + out_delta * h;
    assert_relative_eq!(net.weights_ho().get(0, 0).unwrap(), new_who, epsilon = 1e-12);
    assert_relative_eq!(net.weights_ho().get(0, 1).unwrap(), new_who, epsilon = 1e-12);
    assert_relative_eq!(net.bias_o().get(0, 0).unwrap(), out_delta, epsilon = 1e-12);

    // Hidden error is propagated through the weight before its update (0.5).
    let hidden_delta = h * (1.0 - h) * (0.5 * err) * lr;
    let stale = h * (1.0 - h) * (new_who * err) * lr;
    assert!((hidden_delta - stale).abs() > 1e-6);

    assert_eq!(net.weights_ih().shape(), (2, 2));
    for i in 0..2 {
        assert_relative_eq!(net.weights_ih().get(i, 0).unwrap(), 0.5 + hidden_delta, epsilon = 1e-12);
        // Input 2 was 0, so its column does not move.
        assert_relative_eq!(net.weights_ih().get(i, 1).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(net.bias_h().get(i, 0).unwrap(), hidden_delta, epsilon = 1e-12);
    }
}

#[test]
fn learning_rate_is_assignable() {
    let mut net = Network::new(2, 2, 1);
    assert_eq!(net.learning_rate(), 0.1);
    net.set_learning_rate(0.5);
    assert_eq!(net.learning_rate(), 0.5);
}

#[test]
fn xor_converges_within_tolerance() {
    let mut net = Network::from_parts(
        Matrix::from_data(vec![
            vec![0.5, -0.4],
            vec![-0.3, 0.6],
            vec![0.8, 0.2],
            vec![-0.7, -0.9],
        ])
        .unwrap(),
        Matrix::from_data(vec![vec![0.3, -0.2, 0.6, -0.5]]).unwrap(),
        column(vec![0.1, -0.1, 0.2, 0.0]),
        column(vec![0.05]),
        0.5,
    )
    .unwrap();
    let samples = xor_samples();

    let initial_loss = evaluate(&net, &samples).unwrap();
    let mut checkpoints = vec![initial_loss];

    for epoch in 1..=5000 {
        train_epoch(&mut net, &samples, false).unwrap();
        if epoch % 1000 == 0 {
            checkpoints.push(evaluate(&net, &samples).unwrap());
        }
    }

    assert!(checkpoints.last().unwrap() < &initial_loss);
    assert!(checkpoints[checkpoints.len() - 1] < checkpoints[1]);

    for sample in &samples {
        let out = net.predict(&sample.input).unwrap();
        assert!(
            (out[0] - sample.target[0]).abs() < 0.1,
            "input {:?} predicted {} expected {}",
            sample.input,
            out[0],
            sample.target[0]
        );
    }
}
