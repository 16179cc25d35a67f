use std::fmt;

use crate::dump::error::DumpError;

/// Which layer a dumped matrix belongs to. Tag `h` or `o`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Hidden,
    Output,
}

/// Whether a dump is taken before or after training. Tag `b` or `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    Before,
    After,
}

impl TryFrom<char> for LayerKind {
    type Error = DumpError;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag {
            'h' => Ok(LayerKind::Hidden),
            'o' => Ok(LayerKind::Output),
            _ => Err(DumpError::UnknownTag { what: "layer kind", tag }),
        }
    }
}

impl TryFrom<char> for Timing {
    type Error = DumpError;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag {
            'b' => Ok(Timing::Before),
            'a' => Ok(Timing::After),
            _ => Err(DumpError::UnknownTag { what: "timing", tag }),
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timing::Before => write!(f, "before"),
            Timing::After => write!(f, "after"),
        }
    }
}

/// File name for a bias dump.
pub fn bias_file_name(kind: LayerKind, timing: Timing) -> String {
    let layer = match kind {
        LayerKind::Hidden => "hidden",
        LayerKind::Output => "output",
    };
    format!("Bias_{layer}_layer_{timing}.txt")
}

/// File name for a weight dump. The hidden kind names the input→hidden
/// matrix, the output kind the hidden→output matrix.
pub fn weight_file_name(kind: LayerKind, timing: Timing) -> String {
    let link = match kind {
        LayerKind::Hidden => "input-hidden",
        LayerKind::Output => "hidden-output",
    };
    format!("Weight_{link}_{timing}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_and_reject_unknown() {
        assert_eq!(LayerKind::try_from('h').unwrap(), LayerKind::Hidden);
        assert_eq!(LayerKind::try_from('o').unwrap(), LayerKind::Output);
        assert_eq!(Timing::try_from('b').unwrap(), Timing::Before);
        assert_eq!(Timing::try_from('a').unwrap(), Timing::After);
        assert!(matches!(
            LayerKind::try_from('x'),
            Err(DumpError::UnknownTag { what: "layer kind", tag: 'x' })
        ));
        assert!(Timing::try_from('h').is_err());
    }

    #[test]
    fn file_names_cover_all_eight_dumps() {
        assert_eq!(bias_file_name(LayerKind::Hidden, Timing::Before), "Bias_hidden_layer_before.txt");
        assert_eq!(bias_file_name(LayerKind::Output, Timing::After), "Bias_output_layer_after.txt");
        assert_eq!(weight_file_name(LayerKind::Hidden, Timing::Before), "Weight_input-hidden_before.txt");
        assert_eq!(weight_file_name(LayerKind::Output, Timing::After), "Weight_hidden-output_after.txt");
    }
}
