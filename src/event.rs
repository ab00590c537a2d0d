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

use std::{
    fmt,
    sync::mpsc::{Receiver, Sender, channel},
};

use crate::segment::SegmentKind;

/// What changed, published after each committed transition. Delivery is the
/// sink's problem; the core drops dead receivers and moves on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    BracketGenerated { heats: usize },
    SeedsShuffled,
    TournamentBegan,
    HeatReady { heat: usize },
    SegmentStarted { heat: usize, kind: SegmentKind },
    SegmentEnded { heat: usize, kind: SegmentKind },
    ScoreSubmitted { heat: usize, judge: String },
    HeatLocked { heat: usize },
    HeatResolved { heat: usize, winner: String },
    RoundAdvanced { round: u32, heats: usize },
    ChampionDecided { name: String },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BracketGenerated { heats } => write!(f, "bracket_generated {heats}"),
            Self::SeedsShuffled => write!(f, "seeds_shuffled"),
            Self::TournamentBegan => write!(f, "tournament_began"),
            Self::HeatReady { heat } => write!(f, "heat_ready {heat}"),
            Self::SegmentStarted { heat, kind } => write!(f, "segment_started {heat} {kind}"),
            Self::SegmentEnded { heat, kind } => write!(f, "segment_ended {heat} {kind}"),
            Self::ScoreSubmitted { heat, judge } => write!(f, "score_submitted {heat} {judge}"),
            Self::HeatLocked { heat } => write!(f, "heat_locked {heat}"),
            Self::HeatResolved { heat, winner } => write!(f, "heat_resolved {heat} {winner}"),
            Self::RoundAdvanced { round, heats } => write!(f, "round_advanced {round} {heats}"),
            Self::ChampionDecided { name } => write!(f, "champion_decided {name}"),
        }
    }
}

/// Fan-out to whoever wants to hear about committed transitions.
#[derive(Clone, Debug, Default)]
pub struct Subscribers(Vec<Sender<Event>>);

impl Subscribers {
    pub fn subscribe(&mut self) -> Receiver<Event> {
        let (tx, rx) = channel();
        self.0.push(tx);
        rx
    }

    pub fn publish(&mut self, event: &Event) {
        self.0.retain(|sender| sender.send(event.clone()).is_ok());
    }
}
