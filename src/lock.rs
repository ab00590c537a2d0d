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

//! When a heat's scoring becomes read-only.
//!
//! Lock status is a point-in-time answer computed from segment state and
//! judging completeness, never a stored flag that could drift from its
//! inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{heat::Heat, judge::Beverage, score::ScoreField};

/// An outstanding vote an operator can chase a judge for.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MissingVote {
    pub judge: String,
    pub beverage: Option<Beverage>,
    pub field: ScoreField,
}

impl fmt::Display for MissingVote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.beverage {
            Some(beverage) => write!(f, "{}: {} {}", self.judge, beverage, self.field),
            None => write!(f, "{}: {}", self.judge, self.field),
        }
    }
}

/// True exactly when every segment has ended and every assigned judge has a
/// latte-art vote plus a complete sensory triple for their beverage.
#[must_use]
pub fn is_locked(heat: &Heat) -> bool {
    !heat.judges.is_empty() && heat.fully_elapsed() && missing_votes(heat).is_empty()
}

/// Every (judge, vote) still outstanding, in judge assignment order.
#[must_use]
pub fn missing_votes(heat: &Heat) -> Vec<MissingVote> {
    let mut missing = Vec::new();

    for judge in &heat.judges {
        let card = heat
            .scorecards
            .get(&judge.name)
            .copied()
            .unwrap_or_default();

        if card.latte_art.is_none() {
            missing.push(MissingVote {
                judge: judge.name.clone(),
                beverage: None,
                field: ScoreField::LatteArt,
            });
        }

        for (vote, field) in [
            (card.taste, ScoreField::Taste),
            (card.tactile, ScoreField::Tactile),
            (card.flavour, ScoreField::Flavour),
        ] {
            if vote.is_none() {
                missing.push(MissingVote {
                    judge: judge.name.clone(),
                    beverage: Some(judge.beverage),
                    field,
                });
            }
        }
    }

    missing
}
