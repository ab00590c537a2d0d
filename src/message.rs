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

//! The line protocol the console and any thin transport layer speak to the
//! tournament core.

use std::str::FromStr;

use crate::{
    judge::Beverage,
    score::{ScoreField, ScorePatch},
    segment::SegmentKind,
    side::{Side, Slot},
};

pub const COMMANDS: [&str; 25] = [
    "assign_judge",
    "begin",
    "champion",
    "dump",
    "end_segment",
    "finish_heat",
    "generate_bracket",
    "known_command",
    "list_commands",
    "locked",
    "missing",
    "name",
    "next_heat",
    "next_round",
    "register",
    "remaining",
    "score",
    "show_bracket",
    "show_heat",
    "show_scores",
    "show_stations",
    "shuffle_seeds",
    "start_segment",
    "totals",
    "version",
];

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AssignJudge {
        heat: usize,
        judge: String,
        beverage: Beverage,
    },
    Begin,
    Champion,
    Dump,
    Empty,
    EndSegment {
        heat: usize,
        kind: SegmentKind,
    },
    FinishHeat {
        heat: usize,
        slot: Slot,
    },
    GenerateBracket,
    KnownCommand(String),
    ListCommands,
    Locked {
        heat: usize,
    },
    Missing {
        heat: usize,
    },
    Name,
    NextHeat {
        station: String,
    },
    NextRound,
    Register {
        name: String,
    },
    Remaining {
        heat: usize,
        kind: SegmentKind,
    },
    Score {
        heat: usize,
        judge: String,
        beverage: Beverage,
        patch: ScorePatch,
    },
    ShowBracket,
    ShowHeat {
        heat: usize,
    },
    ShowScores {
        heat: usize,
    },
    ShowStations,
    ShuffleSeeds,
    StartSegment {
        heat: usize,
        kind: SegmentKind,
        left_cups: Option<Slot>,
    },
    Totals {
        heat: usize,
    },
    Version,
}

fn heat_id(args: &[&str], usage: &'static str) -> anyhow::Result<usize> {
    let Some(id) = args.get(1) else {
        return Err(anyhow::Error::msg(usage));
    };

    Ok(id.parse::<usize>()?)
}

fn parse_patch(pairs: &[&str]) -> anyhow::Result<ScorePatch> {
    let mut patch = ScorePatch::default();

    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(anyhow::Error::msg(
                "score: expected FIELD=SIDE pairs, e.g. taste=left",
            ));
        };

        if key == "overall" {
            return Err(anyhow::Error::msg(
                "score: overall is derived from the sensory votes and cannot be submitted",
            ));
        }

        patch.set(ScoreField::from_str(key)?, Side::from_str(value)?);
    }

    Ok(patch)
}

impl FromStr for Message {
    type Err = anyhow::Error;

    #[allow(clippy::too_many_lines)]
    fn from_str(line: &str) -> anyhow::Result<Self> {
        let args: Vec<&str> = line.split_whitespace().collect();

        let Some(command) = args.first() else {
            return Ok(Self::Empty);
        };

        match *command {
            "assign_judge" => {
                let (Some(heat), Some(judge), Some(beverage)) =
                    (args.get(1), args.get(2), args.get(3))
                else {
                    return Err(anyhow::Error::msg(
                        "expected: 'assign_judge HEAT JUDGE BEVERAGE'",
                    ));
                };

                Ok(Self::AssignJudge {
                    heat: heat.parse::<usize>()?,
                    judge: (*judge).to_string(),
                    beverage: Beverage::from_str(beverage)?,
                })
            }
            "begin" => Ok(Self::Begin),
            "champion" => Ok(Self::Champion),
            "dump" => Ok(Self::Dump),
            "end_segment" => {
                let (Some(heat), Some(kind)) = (args.get(1), args.get(2)) else {
                    return Err(anyhow::Error::msg("expected: 'end_segment HEAT SEGMENT'"));
                };

                Ok(Self::EndSegment {
                    heat: heat.parse::<usize>()?,
                    kind: SegmentKind::from_str(kind)?,
                })
            }
            "finish_heat" => {
                let (Some(heat), Some(slot)) = (args.get(1), args.get(2)) else {
                    return Err(anyhow::Error::msg("expected: 'finish_heat HEAT SLOT'"));
                };

                Ok(Self::FinishHeat {
                    heat: heat.parse::<usize>()?,
                    slot: Slot::from_str(slot)?,
                })
            }
            "generate_bracket" => Ok(Self::GenerateBracket),
            "known_command" => {
                let Some(command) = args.get(1) else {
                    return Err(anyhow::Error::msg("expected: 'known_command COMMAND'"));
                };

                Ok(Self::KnownCommand((*command).to_string()))
            }
            "list_commands" => Ok(Self::ListCommands),
            "locked" => Ok(Self::Locked {
                heat: heat_id(&args, "expected: 'locked HEAT'")?,
            }),
            "missing" => Ok(Self::Missing {
                heat: heat_id(&args, "expected: 'missing HEAT'")?,
            }),
            "name" => Ok(Self::Name),
            "next_heat" => {
                let Some(station) = args.get(1) else {
                    return Err(anyhow::Error::msg("expected: 'next_heat STATION'"));
                };

                Ok(Self::NextHeat {
                    station: (*station).to_string(),
                })
            }
            "next_round" => Ok(Self::NextRound),
            "register" => {
                let Some(name) = args.get(1) else {
                    return Err(anyhow::Error::msg("expected: 'register NAME'"));
                };

                Ok(Self::Register {
                    name: (*name).to_string(),
                })
            }
            "remaining" => {
                let (Some(heat), Some(kind)) = (args.get(1), args.get(2)) else {
                    return Err(anyhow::Error::msg("expected: 'remaining HEAT SEGMENT'"));
                };

                Ok(Self::Remaining {
                    heat: heat.parse::<usize>()?,
                    kind: SegmentKind::from_str(kind)?,
                })
            }
            "score" => {
                let (Some(heat), Some(judge), Some(beverage)) =
                    (args.get(1), args.get(2), args.get(3))
                else {
                    return Err(anyhow::Error::msg(
                        "expected: 'score HEAT JUDGE BEVERAGE FIELD=SIDE ...'",
                    ));
                };

                Ok(Self::Score {
                    heat: heat.parse::<usize>()?,
                    judge: (*judge).to_string(),
                    beverage: Beverage::from_str(beverage)?,
                    patch: parse_patch(args.get(4..).unwrap_or_default())?,
                })
            }
            "show_bracket" => Ok(Self::ShowBracket),
            "show_heat" => Ok(Self::ShowHeat {
                heat: heat_id(&args, "expected: 'show_heat HEAT'")?,
            }),
            "show_scores" => Ok(Self::ShowScores {
                heat: heat_id(&args, "expected: 'show_scores HEAT'")?,
            }),
            "show_stations" => Ok(Self::ShowStations),
            "shuffle_seeds" => Ok(Self::ShuffleSeeds),
            "start_segment" => {
                let (Some(heat), Some(kind)) = (args.get(1), args.get(2)) else {
                    return Err(anyhow::Error::msg(
                        "expected: 'start_segment HEAT SEGMENT [LEFT_CUPS]'",
                    ));
                };

                let left_cups = match args.get(3) {
                    Some(slot) => Some(Slot::from_str(slot)?),
                    None => None,
                };

                Ok(Self::StartSegment {
                    heat: heat.parse::<usize>()?,
                    kind: SegmentKind::from_str(kind)?,
                    left_cups,
                })
            }
            "totals" => Ok(Self::Totals {
                heat: heat_id(&args, "expected: 'totals HEAT'")?,
            }),
            "version" => Ok(Self::Version),
            _ => Err(anyhow::Error::msg(format!("unknown command: {command}"))),
        }
    }
}
