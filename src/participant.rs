use std::fmt;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Participant {
    pub name: String,
    pub seed: u32,
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (seed {})", self.name, self.seed)
    }
}

/// The registered field, in registration order. Seeds are handed out at
/// registration and must stay distinct; gaps are allowed.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Roster(pub Vec<Participant>);

impl Roster {
    /// Registers a competitor and hands out the next free seed.
    ///
    /// # Errors
    ///
    /// If the name is empty or already on the roster.
    pub fn register(&mut self, name: &str) -> Result<u32, Error> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.0.iter().any(|participant| participant.name == name) {
            return Err(Error::DuplicateCompetitor(name.to_string()));
        }

        let seed = self
            .0
            .iter()
            .map(|participant| participant.seed)
            .max()
            .unwrap_or(0)
            + 1;

        self.0.push(Participant {
            name: name.to_string(),
            seed,
        });

        Ok(seed)
    }

    /// Re-deals seeds 1..N in a random order.
    pub fn shuffle(&mut self) {
        let mut rng = rand::rng();
        self.0.shuffle(&mut rng);

        for (index, participant) in self.0.iter_mut().enumerate() {
            participant.seed = u32::try_from(index).unwrap_or(u32::MAX - 1) + 1;
        }
    }

    /// The first seed that appears twice, if any.
    #[must_use]
    pub fn duplicate_seed(&self) -> Option<u32> {
        let mut seeds: Vec<u32> = self.0.iter().map(|participant| participant.seed).collect();
        seeds.sort_unstable();
        seeds
            .windows(2)
            .find(|window| window[0] == window[1])
            .map(|window| window[0])
    }

    /// Participants ordered by seed, best first.
    #[must_use]
    pub fn seeded(&self) -> Vec<Participant> {
        let mut field = self.0.clone();
        field.sort_unstable_by_key(|participant| participant.seed);
        field
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let participants: Vec<String> = self.seeded().iter().map(ToString::to_string).collect();

        write!(f, "{}", participants.join(", "))
    }
}
