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

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{
    config::Durations,
    error::Error,
    judge::{Beverage, JudgeAssignment},
    participant::Participant,
    score::{LATTE_ART_POINTS, OVERALL_POINTS, SENSORY_POINTS, Scorecard, Totals, Verdict},
    segment::{Segment, SegmentKind, SegmentStatus},
    side::Slot,
};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum HeatStatus {
    #[default]
    Pending,
    Ready,
    Running,
    Done,
}

impl fmt::Display for HeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Ready => write!(f, "ready"),
            Self::Running => write!(f, "running"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// One match between two competitors, or one competitor and a bye.
///
/// Owns its three segments, its judge assignments, and the scorecards keyed
/// per judge so concurrent submissions from different judges never touch the
/// same entry.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Heat {
    pub id: usize,
    pub round: u32,
    pub station: String,
    pub slot_one: Option<Participant>,
    pub slot_two: Option<Participant>,
    pub status: HeatStatus,
    pub winner: Option<Slot>,
    pub segments: [Segment; 3],
    pub judges: Vec<JudgeAssignment>,
    pub scorecards: FxHashMap<String, Scorecard>,
}

impl Heat {
    #[must_use]
    pub fn new(
        id: usize,
        round: u32,
        station: String,
        slot_one: Option<Participant>,
        slot_two: Option<Participant>,
        durations: &Durations,
    ) -> Self {
        let segments = [
            Segment::new(SegmentKind::DialIn, durations.minutes_for(SegmentKind::DialIn)),
            Segment::new(
                SegmentKind::Cappuccino,
                durations.minutes_for(SegmentKind::Cappuccino),
            ),
            Segment::new(
                SegmentKind::Espresso,
                durations.minutes_for(SegmentKind::Espresso),
            ),
        ];

        Self {
            id,
            round,
            station,
            slot_one,
            slot_two,
            status: HeatStatus::Pending,
            winner: None,
            segments,
            judges: Vec::new(),
            scorecards: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn participant(&self, slot: Slot) -> Option<&Participant> {
        match slot {
            Slot::One => self.slot_one.as_ref(),
            Slot::Two => self.slot_two.as_ref(),
        }
    }

    #[must_use]
    pub fn is_bye(&self) -> bool {
        self.slot_one.is_none() || self.slot_two.is_none()
    }

    #[must_use]
    pub fn segment(&self, kind: SegmentKind) -> &Segment {
        &self.segments[kind.index()]
    }

    pub(crate) fn segment_mut(&mut self, kind: SegmentKind) -> &mut Segment {
        &mut self.segments[kind.index()]
    }

    /// All three segments have ended.
    #[must_use]
    pub fn fully_elapsed(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| segment.status == SegmentStatus::Ended)
    }

    #[must_use]
    pub fn judge(&self, name: &str) -> Option<&JudgeAssignment> {
        self.judges.iter().find(|judge| judge.name == name)
    }

    /// Binds a judge; re-assigning the same name replaces the beverage.
    /// Returns whether this assignment made the heat ready.
    ///
    /// # Errors
    ///
    /// If the heat is already done.
    pub(crate) fn assign_judge(&mut self, name: &str, beverage: Beverage) -> Result<bool, Error> {
        if self.status == HeatStatus::Done {
            return Err(Error::IllegalTransition("the heat is already done"));
        }

        if let Some(judge) = self.judges.iter_mut().find(|judge| judge.name == name) {
            judge.beverage = beverage;
        } else {
            self.judges.push(JudgeAssignment {
                name: name.to_string(),
                beverage,
            });
        }

        let covered = |wanted: Beverage| self.judges.iter().any(|judge| judge.beverage == wanted);

        if self.status == HeatStatus::Pending
            && covered(Beverage::Cappuccino)
            && covered(Beverage::Espresso)
        {
            self.status = HeatStatus::Ready;
            return Ok(true);
        }

        Ok(false)
    }

    pub(crate) fn start_segment(
        &mut self,
        kind: SegmentKind,
        now: i64,
        left_cups: Slot,
    ) -> Result<(), Error> {
        if self.status == HeatStatus::Done {
            return Err(Error::IllegalTransition("the heat is already done"));
        }

        if let Some(predecessor) = kind.predecessor() {
            if self.status != HeatStatus::Running {
                return Err(Error::IllegalTransition("the heat is not running"));
            }
            if self.segment(predecessor).status != SegmentStatus::Ended {
                return Err(Error::IllegalTransition(
                    "the previous segment has not ended",
                ));
            }
        } else if self.status == HeatStatus::Pending {
            return Err(Error::IllegalTransition(
                "the heat is not ready, assign both judges first",
            ));
        }

        self.segment_mut(kind).start(now, left_cups)?;
        self.status = HeatStatus::Running;

        Ok(())
    }

    pub(crate) fn end_segment(&mut self, kind: SegmentKind, now: i64) -> Result<(), Error> {
        self.segment_mut(kind).end(now)
    }

    /// Point totals per competitor slot, translated through each vote's
    /// governing segment's cup codes: latte art through dial-in, each sensory
    /// triple and its derived overall through its own beverage segment.
    #[must_use]
    pub fn totals(&self) -> Totals {
        let mut totals = Totals::default();

        for judge in &self.judges {
            let Some(card) = self.scorecards.get(&judge.name) else {
                continue;
            };

            let dial_in = self.segment(SegmentKind::DialIn);
            if let Some(side) = card.latte_art
                && let Some(slot) = dial_in.competitor_on(side)
            {
                totals.credit(slot, LATTE_ART_POINTS);
            }

            let sensory = self.segment(judge.beverage.segment());
            for side in [card.taste, card.tactile, card.flavour].into_iter().flatten() {
                if let Some(slot) = sensory.competitor_on(side) {
                    totals.credit(slot, SENSORY_POINTS);
                }
            }

            if let Some(side) = card.overall()
                && let Some(slot) = sensory.competitor_on(side)
            {
                totals.credit(slot, OVERALL_POINTS);
            }
        }

        totals
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.totals().verdict()
    }

    pub(crate) fn resolve(&mut self, slot: Slot) {
        self.winner = Some(slot);
        self.status = HeatStatus::Done;
    }

    #[must_use]
    pub fn winner_participant(&self) -> Option<&Participant> {
        self.winner.and_then(|slot| self.participant(slot))
    }
}

impl fmt::Display for Heat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |participant: &Option<Participant>| {
            participant
                .as_ref()
                .map_or_else(|| "(bye)".to_string(), |participant| participant.name.clone())
        };

        write!(
            f,
            "heat {} [round {}, station {}]: {} vs {}, {}",
            self.id,
            self.round,
            self.station,
            name(&self.slot_one),
            name(&self.slot_two),
            self.status,
        )
    }
}
