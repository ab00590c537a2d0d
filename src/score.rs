// This file is part of barista-throwdown.
//
// barista-throwdown is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// barista-throwdown is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::side::{Side, Slot};

pub const LATTE_ART_POINTS: u32 = 3;
pub const SENSORY_POINTS: u32 = 1;
pub const OVERALL_POINTS: u32 = 5;

/// The four fields a judge may vote on.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ScoreField {
    LatteArt,
    Taste,
    Tactile,
    Flavour,
}

impl fmt::Display for ScoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LatteArt => write!(f, "latte_art"),
            Self::Taste => write!(f, "taste"),
            Self::Tactile => write!(f, "tactile"),
            Self::Flavour => write!(f, "flavour"),
        }
    }
}

impl FromStr for ScoreField {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string {
            "latte_art" => Ok(Self::LatteArt),
            "taste" => Ok(Self::Taste),
            "tactile" => Ok(Self::Tactile),
            "flavour" => Ok(Self::Flavour),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a ScoreField!"
            ))),
        }
    }
}

/// One submission from a judge. Fields left as `None` preserve whatever the
/// stored scorecard already holds; a submission is applied atomically.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ScorePatch {
    pub latte_art: Option<Side>,
    pub taste: Option<Side>,
    pub tactile: Option<Side>,
    pub flavour: Option<Side>,
}

impl ScorePatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.latte_art.is_none()
            && self.taste.is_none()
            && self.tactile.is_none()
            && self.flavour.is_none()
    }

    #[must_use]
    pub fn has_sensory(&self) -> bool {
        self.taste.is_some() || self.tactile.is_some() || self.flavour.is_some()
    }

    pub(crate) fn set(&mut self, field: ScoreField, side: Side) {
        match field {
            ScoreField::LatteArt => self.latte_art = Some(side),
            ScoreField::Taste => self.taste = Some(side),
            ScoreField::Tactile => self.tactile = Some(side),
            ScoreField::Flavour => self.flavour = Some(side),
        }
    }
}

/// A judge's stored votes for one heat: the shared latte-art vote plus the
/// sensory triple for the beverage their role owns.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Scorecard {
    pub latte_art: Option<Side>,
    pub taste: Option<Side>,
    pub tactile: Option<Side>,
    pub flavour: Option<Side>,
}

impl Scorecard {
    /// Overwrites the fields the patch carries and keeps the rest.
    pub fn apply(&mut self, patch: ScorePatch) {
        if let Some(side) = patch.latte_art {
            self.latte_art = Some(side);
        }
        if let Some(side) = patch.taste {
            self.taste = Some(side);
        }
        if let Some(side) = patch.tactile {
            self.tactile = Some(side);
        }
        if let Some(side) = patch.flavour {
            self.flavour = Some(side);
        }
    }

    #[must_use]
    pub fn sensory_complete(&self) -> bool {
        self.taste.is_some() && self.tactile.is_some() && self.flavour.is_some()
    }

    #[must_use]
    pub fn complete(&self) -> bool {
        self.latte_art.is_some() && self.sensory_complete()
    }

    /// The side with at least two of the three sensory votes. Never stored
    /// and never accepted as input; with three binary votes a tie cannot
    /// happen.
    #[must_use]
    pub fn overall(&self) -> Option<Side> {
        let (taste, tactile, flavour) = (self.taste?, self.tactile?, self.flavour?);

        let left_votes = [taste, tactile, flavour]
            .iter()
            .filter(|side| **side == Side::Left)
            .count();

        if left_votes >= 2 {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }
}

/// Running point totals for the two competitor slots of a heat.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Totals {
    pub slot_one: u32,
    pub slot_two: u32,
}

impl Totals {
    pub(crate) fn credit(&mut self, slot: Slot, points: u32) {
        match slot {
            Slot::One => self.slot_one += points,
            Slot::Two => self.slot_two += points,
        }
    }

    /// Strictly-more wins; an even split is a tie the operator has to break.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        match self.slot_one.cmp(&self.slot_two) {
            std::cmp::Ordering::Greater => Verdict::Winner(Slot::One),
            std::cmp::Ordering::Less => Verdict::Winner(Slot::Two),
            std::cmp::Ordering::Equal => Verdict::Tie,
        }
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.slot_one, self.slot_two)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Verdict {
    Winner(Slot),
    Tie,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(slot) => write!(f, "slot {slot} wins"),
            Self::Tie => write!(f, "tie (unresolved)"),
        }
    }
}
