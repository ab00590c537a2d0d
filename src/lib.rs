//! A single-elimination coffee throwdown engine.
//!
//! The crate builds the bracket, drives every heat through its three timed
//! segments, routes blind judge scorecards, derives winners, and decides when
//! a heat's scoring is immutably locked. Transport, storage, and rendering
//! are somebody else's job: callers hand in plain requests with explicit
//! identifiers and get back plain results, typed failures, and events.
//!
//! ## Command Protocol
//!
//! The engine also speaks a line protocol, see
//! [`message::Message`] and the `throwdown` binary.

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

#![deny(clippy::panic)]

pub mod bracket;
pub mod config;
pub mod error;
pub mod event;
pub mod heat;
pub mod judge;
pub mod lock;
pub mod message;
pub mod participant;
pub mod score;
pub mod segment;
pub mod side;
pub mod station;
pub mod tournament;
pub mod utils;
