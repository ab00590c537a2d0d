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

use serde::{Deserialize, Serialize};

/// A physical machine station. Offsets stagger the stations' opening times
/// from tournament start; heats are pinned to a station at bracket
/// generation and never move.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Station {
    pub name: String,
    pub offset_minutes: u32,
    /// Anchored at `begin` to start + offset, then bumped to the end time of
    /// each segment that ends here. An operator read, not a gate.
    #[serde(default)]
    pub next_available_at: Option<i64>,
}

impl Station {
    #[must_use]
    pub fn new(name: &str, offset_minutes: u32) -> Self {
        Self {
            name: name.to_string(),
            offset_minutes,
            next_available_at: None,
        }
    }

    pub(crate) fn anchor(&mut self, started_at: i64) {
        self.next_available_at = Some(started_at + i64::from(self.offset_minutes) * 60 * 1_000);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "station {} (+{} min)", self.name, self.offset_minutes)
    }
}
