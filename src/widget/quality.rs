// src/widget/quality.rs
use super::tree::Palette;

/// Quality vocabulary of the EPA site. Matched case-sensitively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Quality {
    Good,
    Fair,
    Poor,
    Illegal,
    /// Anything else, including the `unavailable` sentinel.
    Other(String),
}

impl Quality {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Good" => Quality::Good,
            "Fair" => Quality::Fair,
            "Poor" => Quality::Poor,
            "Illegal" => Quality::Illegal,
            other => Quality::Other(s!(other)),
        }
    }

    pub fn color(&self) -> Palette {
        match self {
            Quality::Good => Palette::Green,
            Quality::Fair => Palette::Yellow,
            Quality::Poor => Palette::Red,
            Quality::Illegal => Palette::Brown,
            Quality::Other(_) => Palette::TEXT,
        }
    }
}

/// Label → colour in one step.
pub fn quality_color(label: &str) -> Palette {
    Quality::from_label(label).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_maps_to_fixed_colors() {
        assert_eq!(quality_color("Good"), Palette::Green);
        assert_eq!(quality_color("Fair"), Palette::Yellow);
        assert_eq!(quality_color("Poor"), Palette::Red);
        assert_eq!(quality_color("Illegal"), Palette::Brown);
    }

    #[test]
    fn anything_else_is_neutral() {
        assert_eq!(quality_color("unavailable"), Palette::TEXT);
        assert_eq!(quality_color("good"), Palette::TEXT); // case-sensitive
        assert_eq!(quality_color(""), Palette::TEXT);
        assert_eq!(Quality::from_label("Closed"), Quality::Other(s!("Closed")));
    }
}
