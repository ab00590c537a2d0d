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

use thiserror::Error;

use crate::segment::SegmentKind;

/// The broad failure classes every [`Error`] variant falls into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    Validation,
    IllegalTransition,
    NotFound,
    Conflict,
}

/// Everything the tournament core can refuse to do.
///
/// No variant is retryable by the core itself and no failed call leaves a
/// partial effect behind.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    #[error("bracket: at least two competitors are required")]
    InvalidFieldSize,
    #[error("bracket: seed {0} is assigned more than once")]
    DuplicateSeed(u32),
    #[error("bracket: the bracket is frozen once the tournament is underway")]
    TournamentNotInSetup,
    #[error("bracket: at least one station is required")]
    NoStations,
    #[error("bracket: no bracket has been generated")]
    NoBracket,
    #[error("round: every heat must be done before the next round")]
    RoundNotComplete,
    #[error("round: the champion has already been decided")]
    TournamentComplete,
    #[error("register: a competitor needs a name")]
    EmptyName,
    #[error("register: '{0}' is already on the roster")]
    DuplicateCompetitor(String),
    #[error("heat {0}: no such heat")]
    UnknownHeat(usize),
    #[error("station '{0}': no such station")]
    UnknownStation(String),
    #[error("judge '{0}': not assigned to this heat for that beverage")]
    JudgeNotAssigned(String),
    #[error("score: the {0} segment has not ended yet")]
    SegmentNotEligible(SegmentKind),
    #[error("score: the submission contains no votes")]
    EmptyScore,
    #[error("heat {0}: scoring is locked")]
    HeatLocked(usize),
    #[error("heat: the chosen slot has no competitor")]
    EmptySlot,
    #[error("segment: illegal transition, {0}")]
    IllegalTransition(&'static str),
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::InvalidFieldSize
            | Self::DuplicateSeed(_)
            | Self::NoStations
            | Self::EmptyName
            | Self::DuplicateCompetitor(_)
            | Self::EmptyScore
            | Self::EmptySlot => Kind::Validation,
            Self::IllegalTransition(_) => Kind::IllegalTransition,
            Self::UnknownHeat(_) | Self::UnknownStation(_) | Self::JudgeNotAssigned(_) => {
                Kind::NotFound
            }
            Self::TournamentNotInSetup
            | Self::NoBracket
            | Self::RoundNotComplete
            | Self::TournamentComplete
            | Self::SegmentNotEligible(_)
            | Self::HeatLocked(_) => Kind::Conflict,
        }
    }
}
