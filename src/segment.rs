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

use crate::{
    error::Error,
    side::{Side, Slot},
};

/// The three timed phases of a heat, in the only order they may run.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum SegmentKind {
    DialIn,
    Cappuccino,
    Espresso,
}

impl SegmentKind {
    pub const ALL: [Self; 3] = [Self::DialIn, Self::Cappuccino, Self::Espresso];

    /// The segment that must end before this one may start.
    #[must_use]
    pub fn predecessor(&self) -> Option<Self> {
        match self {
            Self::DialIn => None,
            Self::Cappuccino => Some(Self::DialIn),
            Self::Espresso => Some(Self::Cappuccino),
        }
    }

    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::DialIn => 0,
            Self::Cappuccino => 1,
            Self::Espresso => 2,
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DialIn => write!(f, "dial_in"),
            Self::Cappuccino => write!(f, "cappuccino"),
            Self::Espresso => write!(f, "espresso"),
        }
    }
}

impl FromStr for SegmentKind {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string {
            "dial_in" => Ok(Self::DialIn),
            "cappuccino" => Ok(Self::Cappuccino),
            "espresso" => Ok(Self::Espresso),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a SegmentKind!"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum SegmentStatus {
    #[default]
    Idle,
    Running,
    Ended,
}

impl fmt::Display for SegmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Ended => write!(f, "ended"),
        }
    }
}

/// One timed phase of a heat.
///
/// `left_cups` is the blind-judging cup code: the slot whose cups sit on the
/// judges' left. It is fixed once at `start` and never changes for the rest
/// of the segment's life.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub status: SegmentStatus,
    pub planned_minutes: u32,
    pub started_at: Option<i64>,
    pub ended_at: Option<i64>,
    pub left_cups: Option<Slot>,
}

impl Segment {
    #[must_use]
    pub fn new(kind: SegmentKind, planned_minutes: u32) -> Self {
        Self {
            kind,
            status: SegmentStatus::Idle,
            planned_minutes,
            started_at: None,
            ended_at: None,
            left_cups: None,
        }
    }

    pub(crate) fn start(&mut self, now: i64, left_cups: Slot) -> Result<(), Error> {
        if self.status != SegmentStatus::Idle {
            return Err(Error::IllegalTransition("only an idle segment may start"));
        }

        self.status = SegmentStatus::Running;
        self.started_at = Some(now);
        self.left_cups = Some(left_cups);

        Ok(())
    }

    pub(crate) fn end(&mut self, now: i64) -> Result<(), Error> {
        if self.status != SegmentStatus::Running {
            return Err(Error::IllegalTransition("only a running segment may end"));
        }

        self.status = SegmentStatus::Ended;
        self.ended_at = Some(now);

        Ok(())
    }

    /// Seconds left on the clock at `now_ms`, floored at zero. The caller's
    /// timer owns the clock; this is a pure read.
    #[must_use]
    pub fn remaining_seconds(&self, now_ms: i64) -> i64 {
        let planned = i64::from(self.planned_minutes) * 60;

        match (self.status, self.started_at) {
            (SegmentStatus::Running, Some(started_at)) => {
                let elapsed = (now_ms - started_at) / 1_000;
                (planned - elapsed).max(0)
            }
            (SegmentStatus::Ended, _) => 0,
            _ => planned,
        }
    }

    /// Which competitor a vote for `side` points at, once cups are assigned.
    #[must_use]
    pub fn competitor_on(&self, side: Side) -> Option<Slot> {
        self.left_cups.map(|left| match side {
            Side::Left => left,
            Side::Right => left.opposite(),
        })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} min)",
            self.kind, self.status, self.planned_minutes
        )
    }
}
