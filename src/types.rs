use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Brush stroke width presets offered by the size selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushSize {
    Small,
    Medium,
    Large,
}

impl BrushSize {
    pub const ALL: [BrushSize; 3] = [BrushSize::Small, BrushSize::Medium, BrushSize::Large];

    /// Line width in canvas pixels
    pub fn width(&self) -> f64 {
        match self {
            BrushSize::Small => 2.0,
            BrushSize::Medium => 5.0,
            BrushSize::Large => 10.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BrushSize::Small => "Small",
            BrushSize::Medium => "Medium",
            BrushSize::Large => "Large",
        }
    }

    /// Parse the value attribute of a size `<option>`
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "2" => Some(BrushSize::Small),
            "5" => Some(BrushSize::Medium),
            "10" => Some(BrushSize::Large),
            _ => None,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            BrushSize::Small => "2",
            BrushSize::Medium => "5",
            BrushSize::Large => "10",
        }
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        BrushSize::Medium
    }
}

/// Number of refinement passes requested from the inference service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationCount {
    Rapid,
    Enhanced,
}

impl IterationCount {
    pub const ALL: [IterationCount; 2] = [IterationCount::Rapid, IterationCount::Enhanced];

    /// String-encoded integer sent as the `num_iterations` form field
    pub fn as_field(&self) -> &'static str {
        match self {
            IterationCount::Rapid => "1",
            IterationCount::Enhanced => "10",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IterationCount::Rapid => "Rapid",
            IterationCount::Enhanced => "Enhanced",
        }
    }

    /// Parse the value attribute of an iteration `<option>`
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "1" => Some(IterationCount::Rapid),
            "10" => Some(IterationCount::Enhanced),
            _ => None,
        }
    }
}

impl Default for IterationCount {
    fn default() -> Self {
        IterationCount::Rapid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_size_round_trip() {
        for size in BrushSize::ALL {
            assert_eq!(BrushSize::from_value(size.value()), Some(size));
        }
        assert_eq!(BrushSize::from_value("7"), None);
    }

    #[test]
    fn test_brush_widths() {
        assert_eq!(BrushSize::Small.width(), 2.0);
        assert_eq!(BrushSize::Medium.width(), 5.0);
        assert_eq!(BrushSize::Large.width(), 10.0);
    }

    #[test]
    fn test_iteration_field_encoding() {
        assert_eq!(IterationCount::Rapid.as_field(), "1");
        assert_eq!(IterationCount::Enhanced.as_field(), "10");
    }

    #[test]
    fn test_iteration_from_value() {
        assert_eq!(IterationCount::from_value("1"), Some(IterationCount::Rapid));
        assert_eq!(
            IterationCount::from_value("10"),
            Some(IterationCount::Enhanced)
        );
        assert_eq!(IterationCount::from_value("2"), None);
        assert_eq!(IterationCount::default(), IterationCount::Rapid);
    }
}
