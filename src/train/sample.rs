use std::fmt;

/// One labeled training pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Sample {
        Sample { input, target }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.input, self.target)
    }
}

/// The four exclusive-or patterns.
pub fn xor_samples() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0, 0.0], vec![0.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![1.0, 1.0], vec![0.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_input_and_target() {
        let s = Sample::new(vec![0.0, 1.0], vec![1.0]);
        assert_eq!(s.to_string(), "[0.0, 1.0] -> [1.0]");
    }

    #[test]
    fn xor_targets_follow_exclusive_or() {
        for s in xor_samples() {
            let expected = if s.input[0] != s.input[1] { 1.0 } else { 0.0 };
            assert_eq!(s.target, vec![expected]);
        }
    }
}
