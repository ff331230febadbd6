use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The viewport dimension a media query constrains.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Width,
    Height,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Width => "width",
            Axis::Height => "height",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "width" => Ok(Axis::Width),
            "height" => Ok(Axis::Height),
            other => Err(format!("Unknown media query axis: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_parse() {
        assert_eq!("width".parse::<Axis>(), Ok(Axis::Width));
        assert_eq!(" height ".parse::<Axis>(), Ok(Axis::Height));
        assert!("depth".parse::<Axis>().is_err());
        assert_eq!(Axis::default(), Axis::Width);
    }
}
