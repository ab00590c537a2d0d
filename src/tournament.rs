use std::{
    fmt,
    str::FromStr,
    sync::{Arc, Mutex, MutexGuard, PoisonError, mpsc::Receiver},
};

use chrono::Utc;
use log::{debug, info};
use rand::random;
use serde::{Deserialize, Serialize};

use crate::{
    bracket,
    config::Config,
    error::Error,
    event::{Event, Subscribers},
    heat::{Heat, HeatStatus},
    judge::Beverage,
    lock::{self, MissingVote},
    message::{COMMANDS, Message},
    participant::{Participant, Roster},
    score::{ScorePatch, Totals, Verdict},
    segment::{SegmentKind, SegmentStatus},
    side::{Side, Slot},
    station::Station,
};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Phase {
    #[default]
    Setup,
    Running,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup => write!(f, "setup"),
            Self::Running => write!(f, "running"),
            Self::Done => write!(f, "done"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Round {
    pub number: u32,
    pub heats: Vec<Heat>,
}

/// The tournament of record: rounds of heats, the roster, the stations, and
/// the phase gate. Every call names its targets explicitly; there is no
/// ambient "current heat".
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Tournament {
    pub phase: Phase,
    pub config: Config,
    pub roster: Roster,
    pub rounds: Vec<Round>,
    pub stations: Vec<Station>,
    pub started_at: Option<i64>,
    next_heat_id: usize,
    #[serde(skip)]
    subscribers: Subscribers,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Tournament {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let stations = config.stations.clone();

        Self {
            phase: Phase::Setup,
            config,
            roster: Roster::default(),
            rounds: Vec::new(),
            stations,
            started_at: None,
            next_heat_id: 1,
            subscribers: Subscribers::default(),
        }
    }

    /// A channel that receives every event committed from now on.
    pub fn subscribe(&mut self) -> Receiver<Event> {
        self.subscribers.subscribe()
    }

    fn publish(&mut self, event: Event) {
        debug!("event: {event}");
        self.subscribers.publish(&event);
    }

    /// Registers a competitor and hands out the next seed. Any generated
    /// bracket is discarded, it no longer covers the field.
    ///
    /// # Errors
    ///
    /// If the tournament is underway or the name is empty or taken.
    pub fn register(&mut self, name: &str) -> Result<u32, Error> {
        if self.phase != Phase::Setup {
            return Err(Error::TournamentNotInSetup);
        }

        let seed = self.roster.register(name)?;
        self.rounds.clear();

        info!("registered {name} with seed {seed}");
        Ok(seed)
    }

    /// Re-deals the seeds at random. Setup only; discards any bracket.
    ///
    /// # Errors
    ///
    /// If the tournament is underway.
    pub fn shuffle_seeds(&mut self) -> Result<(), Error> {
        if self.phase != Phase::Setup {
            return Err(Error::TournamentNotInSetup);
        }

        self.roster.shuffle();
        self.rounds.clear();
        self.publish(Event::SeedsShuffled);

        Ok(())
    }

    /// Builds round 1 from the roster, replacing any prior bracket. Legal
    /// any number of times while the tournament is still in setup.
    ///
    /// # Errors
    ///
    /// `InvalidFieldSize`, `DuplicateSeed`, `NoStations`, or
    /// `TournamentNotInSetup` once underway.
    pub fn generate_bracket(&mut self) -> Result<usize, Error> {
        if self.phase != Phase::Setup {
            return Err(Error::TournamentNotInSetup);
        }

        let heats = bracket::first_round(
            &self.roster,
            &self.config.stations,
            &self.config.durations,
            1,
        )?;

        let count = heats.len();
        self.next_heat_id = count + 1;
        self.rounds.clear();
        self.rounds.push(Round { number: 1, heats });
        self.stations = self.config.stations.clone();

        info!("generated round 1 with {count} heats");
        self.publish(Event::BracketGenerated { heats: count });
        self.resolve_byes();

        Ok(count)
    }

    /// Freezes the bracket and opens the stations: setup becomes running,
    /// and every station's availability is anchored to start + offset.
    ///
    /// # Errors
    ///
    /// If there is no bracket or the tournament already began.
    pub fn begin(&mut self) -> Result<(), Error> {
        if self.phase != Phase::Setup {
            return Err(Error::TournamentNotInSetup);
        }
        if self.rounds.is_empty() {
            return Err(Error::NoBracket);
        }

        let now = Utc::now().timestamp_millis();
        self.phase = Phase::Running;
        self.started_at = Some(now);

        for station in &mut self.stations {
            station.anchor(now);
        }

        info!("the tournament began");
        self.publish(Event::TournamentBegan);

        Ok(())
    }

    /// # Errors
    ///
    /// If no heat has that id.
    pub fn heat(&self, id: usize) -> Result<&Heat, Error> {
        self.rounds
            .iter()
            .flat_map(|round| &round.heats)
            .find(|heat| heat.id == id)
            .ok_or(Error::UnknownHeat(id))
    }

    fn heat_mut(&mut self, id: usize) -> Result<&mut Heat, Error> {
        self.rounds
            .iter_mut()
            .flat_map(|round| &mut round.heats)
            .find(|heat| heat.id == id)
            .ok_or(Error::UnknownHeat(id))
    }

    /// Binds a judge to a heat for a beverage; both beverages covered makes
    /// the heat ready.
    ///
    /// # Errors
    ///
    /// If the heat is unknown or already done.
    pub fn assign_judge(
        &mut self,
        heat_id: usize,
        name: &str,
        beverage: Beverage,
    ) -> Result<(), Error> {
        let became_ready = self.heat_mut(heat_id)?.assign_judge(name, beverage)?;

        info!("heat {heat_id}: {name} judges {beverage}");
        if became_ready {
            self.publish(Event::HeatReady { heat: heat_id });
        }

        Ok(())
    }

    /// Starts a segment. The cup codes are fixed here for the whole segment:
    /// the operator may pick which slot's cups sit on the judges' left,
    /// otherwise a coin flip decides, independently of earlier segments.
    ///
    /// # Errors
    ///
    /// `IllegalTransition` if the tournament, heat, or segment order says no.
    pub fn start_segment(
        &mut self,
        heat_id: usize,
        kind: SegmentKind,
        left_cups: Option<Slot>,
    ) -> Result<(), Error> {
        if self.phase != Phase::Running {
            return Err(Error::IllegalTransition("the tournament is not running"));
        }

        let now = Utc::now().timestamp_millis();
        let cups = left_cups.unwrap_or_else(|| if random() { Slot::One } else { Slot::Two });

        self.heat_mut(heat_id)?.start_segment(kind, now, cups)?;

        info!("heat {heat_id}: {kind} started, slot {cups} cups on the left");
        self.publish(Event::SegmentStarted {
            heat: heat_id,
            kind,
        });

        Ok(())
    }

    /// Ends a running segment. The core never ends a segment on its own
    /// clock; the caller's timer decides when to invoke this.
    ///
    /// # Errors
    ///
    /// `IllegalTransition` unless the segment is running.
    pub fn end_segment(&mut self, heat_id: usize, kind: SegmentKind) -> Result<(), Error> {
        if self.phase != Phase::Running {
            return Err(Error::IllegalTransition("the tournament is not running"));
        }

        let now = Utc::now().timestamp_millis();
        let station = {
            let heat = self.heat_mut(heat_id)?;
            heat.end_segment(kind, now)?;
            heat.station.clone()
        };

        if let Some(station) = self
            .stations
            .iter_mut()
            .find(|candidate| candidate.name == station)
        {
            station.next_available_at = Some(now);
        }

        info!("heat {heat_id}: {kind} ended");
        self.publish(Event::SegmentEnded {
            heat: heat_id,
            kind,
        });
        self.settle(heat_id);

        Ok(())
    }

    /// Upserts one judge's votes for a heat. Fields the patch omits keep
    /// their stored values; the whole call applies atomically or not at all.
    ///
    /// # Errors
    ///
    /// `UnknownHeat`, `HeatLocked`, `JudgeNotAssigned` (also when the
    /// beverage is not the judge's), `SegmentNotEligible` while the
    /// governing segment has not ended, or `EmptyScore`.
    pub fn submit_score(
        &mut self,
        heat_id: usize,
        judge: &str,
        beverage: Beverage,
        patch: ScorePatch,
    ) -> Result<(), Error> {
        if patch.is_empty() {
            return Err(Error::EmptyScore);
        }

        let heat = self.heat(heat_id)?;
        if lock::is_locked(heat) {
            return Err(Error::HeatLocked(heat_id));
        }

        let Some(assignment) = heat.judge(judge) else {
            return Err(Error::JudgeNotAssigned(judge.to_string()));
        };
        if assignment.beverage != beverage {
            return Err(Error::JudgeNotAssigned(judge.to_string()));
        }

        if patch.latte_art.is_some()
            && heat.segment(SegmentKind::DialIn).status != SegmentStatus::Ended
        {
            return Err(Error::SegmentNotEligible(SegmentKind::DialIn));
        }
        if patch.has_sensory() && heat.segment(beverage.segment()).status != SegmentStatus::Ended {
            return Err(Error::SegmentNotEligible(beverage.segment()));
        }

        self.heat_mut(heat_id)?
            .scorecards
            .entry(judge.to_string())
            .or_default()
            .apply(patch);

        info!("heat {heat_id}: {judge} submitted votes");
        self.publish(Event::ScoreSubmitted {
            heat: heat_id,
            judge: judge.to_string(),
        });
        self.settle(heat_id);

        Ok(())
    }

    /// The operator escape hatch: finishes a heat directly, bypassing
    /// segment completion. Covers walkovers and tie breaks.
    ///
    /// # Errors
    ///
    /// If the tournament is not underway, the heat is unknown or already
    /// done, or the slot is a bye.
    pub fn finish_heat(&mut self, heat_id: usize, slot: Slot) -> Result<(), Error> {
        if self.phase != Phase::Running {
            return Err(Error::IllegalTransition("the tournament is not running"));
        }

        let heat = self.heat(heat_id)?;
        if heat.status == HeatStatus::Done {
            return Err(Error::IllegalTransition("the heat is already done"));
        }
        if heat.participant(slot).is_none() {
            return Err(Error::EmptySlot);
        }

        self.resolve_heat(heat_id, slot);
        Ok(())
    }

    /// Pairs the winners of the finished round into the next one.
    ///
    /// # Errors
    ///
    /// `RoundNotComplete` while any heat is not done, `TournamentComplete`
    /// after the final.
    pub fn advance_round(&mut self) -> Result<u32, Error> {
        if self.phase == Phase::Done {
            return Err(Error::TournamentComplete);
        }
        if self.phase != Phase::Running {
            return Err(Error::IllegalTransition("the tournament is not running"));
        }

        let Some(previous) = self.rounds.last() else {
            return Err(Error::NoBracket);
        };

        let number = previous.number + 1;
        let heats = bracket::next_round(
            &previous.heats,
            number,
            &self.config.stations,
            &self.config.durations,
            self.next_heat_id,
        )?;

        let count = heats.len();
        self.next_heat_id += count;
        self.rounds.push(Round { number, heats });

        info!("round {number} paired with {count} heats");
        self.publish(Event::RoundAdvanced {
            round: number,
            heats: count,
        });
        self.resolve_byes();

        Ok(number)
    }

    /// Point-in-time lock status, recomputed from segment state and judging
    /// completeness on every call.
    ///
    /// # Errors
    ///
    /// If no heat has that id.
    pub fn is_locked(&self, heat_id: usize) -> Result<bool, Error> {
        Ok(lock::is_locked(self.heat(heat_id)?))
    }

    /// The outstanding (judge, vote) pairs an operator can chase.
    ///
    /// # Errors
    ///
    /// If no heat has that id.
    pub fn missing_votes(&self, heat_id: usize) -> Result<Vec<MissingVote>, Error> {
        Ok(lock::missing_votes(self.heat(heat_id)?))
    }

    /// # Errors
    ///
    /// If no heat has that id.
    pub fn totals(&self, heat_id: usize) -> Result<Totals, Error> {
        Ok(self.heat(heat_id)?.totals())
    }

    /// # Errors
    ///
    /// If no heat has that id.
    pub fn verdict(&self, heat_id: usize) -> Result<Verdict, Error> {
        Ok(self.heat(heat_id)?.verdict())
    }

    /// Seconds left on a segment's clock at the caller's `now_ms`.
    ///
    /// # Errors
    ///
    /// If no heat has that id.
    pub fn remaining_seconds(
        &self,
        heat_id: usize,
        kind: SegmentKind,
        now_ms: i64,
    ) -> Result<i64, Error> {
        Ok(self.heat(heat_id)?.segment(kind).remaining_seconds(now_ms))
    }

    /// The earliest pending heat pinned to a station, in bracket order.
    /// Heats never move between stations after generation.
    ///
    /// # Errors
    ///
    /// If no station has that name.
    pub fn next_heat_for(&self, station: &str) -> Result<Option<&Heat>, Error> {
        if !self
            .stations
            .iter()
            .any(|candidate| candidate.name == station)
        {
            return Err(Error::UnknownStation(station.to_string()));
        }

        Ok(self
            .rounds
            .iter()
            .flat_map(|round| &round.heats)
            .find(|heat| heat.station == station && heat.status == HeatStatus::Pending))
    }

    /// The winner of the final, once the tournament is done.
    #[must_use]
    pub fn champion(&self) -> Option<&Participant> {
        if self.phase != Phase::Done {
            return None;
        }

        self.rounds
            .last()
            .and_then(|round| round.heats.first())
            .and_then(Heat::winner_participant)
    }

    /// Auto-resolves bye heats in the newest round.
    fn resolve_byes(&mut self) {
        let Some(round) = self.rounds.last() else {
            return;
        };

        let byes: Vec<(usize, Slot)> = round
            .heats
            .iter()
            .filter(|heat| heat.status != HeatStatus::Done && heat.is_bye())
            .map(|heat| {
                let slot = if heat.slot_one.is_some() {
                    Slot::One
                } else {
                    Slot::Two
                };
                (heat.id, slot)
            })
            .collect();

        for (heat_id, slot) in byes {
            self.resolve_heat(heat_id, slot);
        }
    }

    /// Recomputes the lock after a relevant write; on lock, publishes the
    /// fact and resolves the heat unless the totals tie.
    fn settle(&mut self, heat_id: usize) {
        let (done, locked, verdict) = match self.heat(heat_id) {
            Ok(heat) => (
                heat.status == HeatStatus::Done,
                lock::is_locked(heat),
                heat.verdict(),
            ),
            Err(_) => return,
        };

        if done || !locked {
            return;
        }

        self.publish(Event::HeatLocked { heat: heat_id });

        match verdict {
            Verdict::Winner(slot) => self.resolve_heat(heat_id, slot),
            Verdict::Tie => info!("heat {heat_id}: locked at a tie, waiting on the operator"),
        }
    }

    fn resolve_heat(&mut self, heat_id: usize, slot: Slot) {
        let winner = {
            let Ok(heat) = self.heat_mut(heat_id) else {
                return;
            };

            heat.resolve(slot);
            heat.winner_participant()
                .map_or_else(String::new, |participant| participant.name.clone())
        };

        info!("heat {heat_id}: won by {winner}");
        self.publish(Event::HeatResolved {
            heat: heat_id,
            winner,
        });
        self.check_champion();
    }

    fn check_champion(&mut self) {
        if self.phase == Phase::Done {
            return;
        }

        let name = match self.rounds.last() {
            Some(round) if round.heats.len() == 1 => match round.heats.first() {
                Some(heat) if heat.status == HeatStatus::Done => heat
                    .winner_participant()
                    .map(|participant| participant.name.clone()),
                _ => None,
            },
            _ => None,
        };

        if let Some(name) = name {
            self.phase = Phase::Done;
            info!("champion: {name}");
            self.publish(Event::ChampionDecided { name });
        }
    }

    /// # Errors
    ///
    /// If the command is illegal or invalid.
    pub fn read_line(&mut self, buffer: &str) -> anyhow::Result<Option<String>> {
        let mut buffer = std::borrow::Cow::from(buffer);
        if let Some(comment_offset) = buffer.find('#') {
            buffer.to_mut().replace_range(comment_offset.., "");
        }

        self.update(Message::from_str(buffer.as_ref())?)
    }

    /// # Errors
    ///
    /// If the command is illegal or invalid.
    #[allow(clippy::too_many_lines)]
    pub fn update(&mut self, message: Message) -> anyhow::Result<Option<String>> {
        match message {
            Message::AssignJudge {
                heat,
                judge,
                beverage,
            } => {
                self.assign_judge(heat, &judge, beverage)?;
                Ok(Some(String::new()))
            }
            Message::Begin => {
                self.begin()?;
                Ok(Some(String::new()))
            }
            Message::Champion => Ok(Some(self.champion().map_or_else(
                || "none".to_string(),
                |participant| participant.name.clone(),
            ))),
            Message::Dump => Ok(Some(ron::ser::to_string(self)?)),
            Message::Empty => Ok(None),
            Message::EndSegment { heat, kind } => {
                self.end_segment(heat, kind)?;
                Ok(Some(String::new()))
            }
            Message::FinishHeat { heat, slot } => {
                self.finish_heat(heat, slot)?;
                Ok(Some(String::new()))
            }
            Message::GenerateBracket => {
                let heats = self.generate_bracket()?;
                Ok(Some(heats.to_string()))
            }
            Message::KnownCommand(command) => {
                if COMMANDS.contains(&command.as_str()) {
                    Ok(Some("true".to_string()))
                } else {
                    Ok(Some("false".to_string()))
                }
            }
            Message::ListCommands => {
                let mut commands = "\n".to_string();
                commands.push_str(&COMMANDS.join("\n"));
                Ok(Some(commands))
            }
            Message::Locked { heat } => Ok(Some(self.is_locked(heat)?.to_string())),
            Message::Missing { heat } => {
                let missing = self.missing_votes(heat)?;
                if missing.is_empty() {
                    Ok(Some("none".to_string()))
                } else {
                    let missing: Vec<String> = missing.iter().map(ToString::to_string).collect();
                    Ok(Some(missing.join("; ")))
                }
            }
            Message::Name => {
                let name = env!("CARGO_PKG_NAME");
                Ok(Some(name.to_string()))
            }
            Message::NextHeat { station } => Ok(Some(
                self.next_heat_for(&station)?
                    .map_or_else(|| "none".to_string(), ToString::to_string),
            )),
            Message::NextRound => {
                let round = self.advance_round()?;
                Ok(Some(round.to_string()))
            }
            Message::Register { name } => {
                let seed = self.register(&name)?;
                Ok(Some(seed.to_string()))
            }
            Message::Remaining { heat, kind } => {
                let now = Utc::now().timestamp_millis();
                Ok(Some(self.remaining_seconds(heat, kind, now)?.to_string()))
            }
            Message::Score {
                heat,
                judge,
                beverage,
                patch,
            } => {
                self.submit_score(heat, &judge, beverage, patch)?;
                Ok(Some(String::new()))
            }
            Message::ShowBracket => Ok(Some(format!("\n{self}"))),
            Message::ShowHeat { heat } => {
                let heat = self.heat(heat)?;
                let segments: Vec<String> = heat.segments.iter().map(ToString::to_string).collect();

                Ok(Some(format!(
                    "{heat}; {}; totals {}",
                    segments.join(", "),
                    heat.totals()
                )))
            }
            Message::ShowScores { heat } => {
                let heat = self.heat(heat)?;
                let vote = |side: Option<Side>| {
                    side.map_or_else(|| "unset".to_string(), |side| side.to_string())
                };

                let cards: Vec<String> = heat
                    .judges
                    .iter()
                    .map(|judge| {
                        let card = heat
                            .scorecards
                            .get(&judge.name)
                            .copied()
                            .unwrap_or_default();

                        format!(
                            "{judge}: latte_art={} taste={} tactile={} flavour={} overall={}",
                            vote(card.latte_art),
                            vote(card.taste),
                            vote(card.tactile),
                            vote(card.flavour),
                            vote(card.overall()),
                        )
                    })
                    .collect();

                if cards.is_empty() {
                    Ok(Some("none".to_string()))
                } else {
                    Ok(Some(cards.join("; ")))
                }
            }
            Message::ShowStations => {
                let stations: Vec<String> = self
                    .stations
                    .iter()
                    .map(|station| match station.next_available_at {
                        Some(at) => format!("{station}, available at {at}"),
                        None => station.to_string(),
                    })
                    .collect();

                Ok(Some(stations.join("; ")))
            }
            Message::ShuffleSeeds => {
                self.shuffle_seeds()?;
                Ok(Some(self.roster.to_string()))
            }
            Message::StartSegment {
                heat,
                kind,
                left_cups,
            } => {
                self.start_segment(heat, kind, left_cups)?;
                Ok(Some(String::new()))
            }
            Message::Totals { heat } => Ok(Some(self.totals(heat)?.to_string())),
            Message::Version => {
                let version = env!("CARGO_PKG_VERSION");
                Ok(Some(version.to_string()))
            }
        }
    }
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "phase: {}", self.phase)?;
        writeln!(f, "roster: {}", self.roster)?;

        for round in &self.rounds {
            writeln!(f, "round {}:", round.number)?;
            for heat in &round.heats {
                writeln!(f, "  {heat}")?;
            }
        }

        Ok(())
    }
}

/// A cloneable handle that serializes every operation on one tournament
/// behind a single mutex. Stronger than the per-judge and per-heat minimum
/// the model needs, and nothing here blocks: every call is short and
/// synchronous. A poisoned mutex is recovered, not propagated.
#[derive(Clone, Debug, Default)]
pub struct SharedTournament(Arc<Mutex<Tournament>>);

impl SharedTournament {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self(Arc::new(Mutex::new(Tournament::new(config))))
    }

    fn guard(&self) -> MutexGuard<'_, Tournament> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn subscribe(&self) -> Receiver<Event> {
        self.guard().subscribe()
    }

    /// A consistent copy of the whole tournament, detached from the handle.
    #[must_use]
    pub fn snapshot(&self) -> Tournament {
        let mut tournament = self.guard().clone();
        tournament.subscribers = Subscribers::default();
        tournament
    }

    /// # Errors
    ///
    /// See [`Tournament::register`].
    pub fn register(&self, name: &str) -> Result<u32, Error> {
        self.guard().register(name)
    }

    /// # Errors
    ///
    /// See [`Tournament::shuffle_seeds`].
    pub fn shuffle_seeds(&self) -> Result<(), Error> {
        self.guard().shuffle_seeds()
    }

    /// # Errors
    ///
    /// See [`Tournament::generate_bracket`].
    pub fn generate_bracket(&self) -> Result<usize, Error> {
        self.guard().generate_bracket()
    }

    /// # Errors
    ///
    /// See [`Tournament::begin`].
    pub fn begin(&self) -> Result<(), Error> {
        self.guard().begin()
    }

    /// # Errors
    ///
    /// See [`Tournament::assign_judge`].
    pub fn assign_judge(&self, heat: usize, name: &str, beverage: Beverage) -> Result<(), Error> {
        self.guard().assign_judge(heat, name, beverage)
    }

    /// # Errors
    ///
    /// See [`Tournament::start_segment`].
    pub fn start_segment(
        &self,
        heat: usize,
        kind: SegmentKind,
        left_cups: Option<Slot>,
    ) -> Result<(), Error> {
        self.guard().start_segment(heat, kind, left_cups)
    }

    /// # Errors
    ///
    /// See [`Tournament::end_segment`].
    pub fn end_segment(&self, heat: usize, kind: SegmentKind) -> Result<(), Error> {
        self.guard().end_segment(heat, kind)
    }

    /// # Errors
    ///
    /// See [`Tournament::submit_score`].
    pub fn submit_score(
        &self,
        heat: usize,
        judge: &str,
        beverage: Beverage,
        patch: ScorePatch,
    ) -> Result<(), Error> {
        self.guard().submit_score(heat, judge, beverage, patch)
    }

    /// # Errors
    ///
    /// See [`Tournament::finish_heat`].
    pub fn finish_heat(&self, heat: usize, slot: Slot) -> Result<(), Error> {
        self.guard().finish_heat(heat, slot)
    }

    /// # Errors
    ///
    /// See [`Tournament::advance_round`].
    pub fn advance_round(&self) -> Result<u32, Error> {
        self.guard().advance_round()
    }

    /// # Errors
    ///
    /// See [`Tournament::is_locked`].
    pub fn is_locked(&self, heat: usize) -> Result<bool, Error> {
        self.guard().is_locked(heat)
    }

    /// # Errors
    ///
    /// See [`Tournament::missing_votes`].
    pub fn missing_votes(&self, heat: usize) -> Result<Vec<MissingVote>, Error> {
        self.guard().missing_votes(heat)
    }

    /// # Errors
    ///
    /// See [`Tournament::totals`].
    pub fn totals(&self, heat: usize) -> Result<Totals, Error> {
        self.guard().totals(heat)
    }

    /// # Errors
    ///
    /// See [`Tournament::verdict`].
    pub fn verdict(&self, heat: usize) -> Result<Verdict, Error> {
        self.guard().verdict(heat)
    }

    /// # Errors
    ///
    /// See [`Tournament::remaining_seconds`].
    pub fn remaining_seconds(
        &self,
        heat: usize,
        kind: SegmentKind,
        now_ms: i64,
    ) -> Result<i64, Error> {
        self.guard().remaining_seconds(heat, kind, now_ms)
    }

    /// The id of the earliest pending heat pinned to a station.
    ///
    /// # Errors
    ///
    /// See [`Tournament::next_heat_for`].
    pub fn next_heat_for(&self, station: &str) -> Result<Option<usize>, Error> {
        Ok(self.guard().next_heat_for(station)?.map(|heat| heat.id))
    }

    /// # Errors
    ///
    /// If the command is illegal or invalid.
    pub fn read_line(&self, buffer: &str) -> anyhow::Result<Option<String>> {
        self.guard().read_line(buffer)
    }
}
