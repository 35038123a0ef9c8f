//! Sea-state value types shared by route analysis and regional weather.

use std::fmt;

use serde::{Serialize, Serializer};

/// Horizontal visibility at sea.
///
/// Displayed as whole nautical miles, or `10+` when visibility is unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeaVisibility {
    NauticalMiles(u32),
    Unlimited,
}

impl fmt::Display for SeaVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeaVisibility::NauticalMiles(nm) => write!(f, "{nm}"),
            SeaVisibility::Unlimited => f.write_str("10+"),
        }
    }
}

impl Serialize for SeaVisibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Round to one decimal place, the precision wave heights are reported in.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_display() {
        assert_eq!(SeaVisibility::NauticalMiles(2).to_string(), "2");
        assert_eq!(SeaVisibility::Unlimited.to_string(), "10+");
    }

    #[test]
    fn test_visibility_serializes_as_string() {
        let json = serde_json::to_string(&SeaVisibility::Unlimited).unwrap();
        assert_eq!(json, "\"10+\"");
        let json = serde_json::to_string(&SeaVisibility::NauticalMiles(5)).unwrap();
        assert_eq!(json, "\"5\"");
    }

    #[test]
    fn test_round_to_tenth() {
        assert!((round_to_tenth(6.2) - 6.2).abs() < 1e-12);
        assert!((round_to_tenth(3.74) - 3.7).abs() < 1e-12);
        assert!((round_to_tenth(3.76) - 3.8).abs() < 1e-12);
    }
}
