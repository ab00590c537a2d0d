use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::segment::SegmentKind;

/// The sensory beverage a judge owns. Doubles as the judge's role: every
/// judge also scores the shared latte-art category, but only the cappuccino
/// judge scores cappuccino sensory and only the espresso judge scores
/// espresso sensory.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Beverage {
    Cappuccino,
    Espresso,
}

impl Beverage {
    /// The segment that has to end before this beverage may be scored.
    #[must_use]
    pub fn segment(&self) -> SegmentKind {
        match self {
            Self::Cappuccino => SegmentKind::Cappuccino,
            Self::Espresso => SegmentKind::Espresso,
        }
    }
}

impl fmt::Display for Beverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cappuccino => write!(f, "cappuccino"),
            Self::Espresso => write!(f, "espresso"),
        }
    }
}

impl FromStr for Beverage {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string {
            "cappuccino" => Ok(Self::Cappuccino),
            "espresso" => Ok(Self::Espresso),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a Beverage!"
            ))),
        }
    }
}

/// Binds a judge to a heat with their sensory beverage.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JudgeAssignment {
    pub name: String,
    pub beverage: Beverage,
}

impl fmt::Display for JudgeAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.beverage)
    }
}
