//! Three-colour traffic light.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// Signal colours, cycling Red -> Green -> Orange -> Red.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TrafficLight {
    Red,
    Green,
    Orange,
}

impl TrafficLight {
    pub const ALL: [TrafficLight; 3] = [Self::Red, Self::Green, Self::Orange];
}

impl State for TrafficLight {
    fn name(&self) -> &str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Orange => "Orange",
        }
    }

    fn label(&self) -> &str {
        match self {
            Self::Red => "Red Light",
            Self::Green => "Green Light",
            Self::Orange => "Orange Light",
        }
    }

    fn next(&self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Orange,
            Self::Orange => Self::Red,
        }
    }
}
