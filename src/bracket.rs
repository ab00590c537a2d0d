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

//! Seeds competitors into a power-of-two single-elimination tree and pairs
//! round winners into the next round.

use crate::{
    config::Durations,
    error::Error,
    heat::{Heat, HeatStatus},
    participant::Roster,
    station::Station,
};

/// The classic bracket order for a power-of-two field: ranks are laid out so
/// 1 meets the field size, 2 meets field size minus one, and the top seeds
/// cannot meet before the last possible round.
///
/// `seeding_order(8)` is `[1, 8, 4, 5, 2, 7, 3, 6]`; adjacent pairs are the
/// first-round heats.
#[must_use]
pub fn seeding_order(field: usize) -> Vec<usize> {
    let mut order = vec![1];
    let mut size = 1;

    while size < field {
        size *= 2;

        let mut next = Vec::with_capacity(size);
        for rank in &order {
            next.push(*rank);
            next.push(size + 1 - rank);
        }
        order = next;
    }

    order
}

/// Builds the full round-1 heat set: the field padded to the next power of
/// two with byes, heats assigned round-robin across the stations.
pub(crate) fn first_round(
    roster: &Roster,
    stations: &[Station],
    durations: &Durations,
    first_id: usize,
) -> Result<Vec<Heat>, Error> {
    if roster.len() < 2 {
        return Err(Error::InvalidFieldSize);
    }
    if let Some(seed) = roster.duplicate_seed() {
        return Err(Error::DuplicateSeed(seed));
    }
    if stations.is_empty() {
        return Err(Error::NoStations);
    }

    let field = roster.seeded();
    let order = seeding_order(field.len().next_power_of_two());

    let mut heats = Vec::with_capacity(order.len() / 2);
    for (index, pair) in order.chunks_exact(2).enumerate() {
        let competitor = |rank: usize| field.get(rank - 1).cloned();

        heats.push(Heat::new(
            first_id + index,
            1,
            stations[index % stations.len()].name.clone(),
            competitor(pair[0]),
            competitor(pair[1]),
            durations,
        ));
    }

    Ok(heats)
}

/// Pairs the winners of a finished round, in bracket order. An odd remainder
/// gets a bye; the caller auto-resolves bye heats.
pub(crate) fn next_round(
    previous: &[Heat],
    round: u32,
    stations: &[Station],
    durations: &Durations,
    first_id: usize,
) -> Result<Vec<Heat>, Error> {
    if previous.iter().any(|heat| heat.status != HeatStatus::Done) {
        return Err(Error::RoundNotComplete);
    }
    if previous.len() <= 1 {
        return Err(Error::TournamentComplete);
    }
    if stations.is_empty() {
        return Err(Error::NoStations);
    }

    let winners: Vec<_> = previous
        .iter()
        .filter_map(|heat| heat.winner_participant().cloned())
        .collect();

    let mut heats = Vec::with_capacity(winners.len().div_ceil(2));
    for (index, pair) in winners.chunks(2).enumerate() {
        heats.push(Heat::new(
            first_id + index,
            round,
            stations[index % stations.len()].name.clone(),
            pair.first().cloned(),
            pair.get(1).cloned(),
            durations,
        ));
    }

    Ok(heats)
}
