use std::thread;

use barista_throwdown::{
    config::Config,
    event::Event,
    heat::HeatStatus,
    judge::Beverage,
    score::ScorePatch,
    segment::SegmentKind,
    side::{Side, Slot},
    tournament::{Phase, SharedTournament, Tournament},
};

fn sweep(side: Side) -> ScorePatch {
    ScorePatch {
        latte_art: Some(side),
        taste: Some(side),
        tactile: Some(side),
        flavour: Some(side),
    }
}

fn field(count: usize) -> anyhow::Result<SharedTournament> {
    let tournament = SharedTournament::new(Config::default());
    for index in 1..=count {
        tournament.register(&format!("barista-{index}"))?;
    }
    tournament.generate_bracket()?;
    tournament.begin()?;

    Ok(tournament)
}

fn run_heat(tournament: &SharedTournament, heat: usize) -> anyhow::Result<()> {
    tournament.assign_judge(heat, "anna", Beverage::Cappuccino)?;
    tournament.assign_judge(heat, "omar", Beverage::Espresso)?;

    for kind in SegmentKind::ALL {
        tournament.start_segment(heat, kind, Some(Slot::One))?;
        tournament.end_segment(heat, kind)?;
    }

    Ok(())
}

#[test]
fn concurrent_judges_lock_a_heat_exactly_once() -> anyhow::Result<()> {
    let tournament = field(4)?;
    let events = tournament.subscribe();
    run_heat(&tournament, 1)?;

    let mut handles = Vec::new();
    for (judge, beverage) in [("anna", Beverage::Cappuccino), ("omar", Beverage::Espresso)] {
        let shared = tournament.clone();
        handles.push(thread::spawn(move || {
            shared.submit_score(1, judge, beverage, sweep(Side::Left))
        }));
    }

    for handle in handles {
        handle.join().expect("the judge thread ran")?;
    }

    let snapshot = tournament.snapshot();
    assert!(tournament.is_locked(1)?);
    assert_eq!(snapshot.heat(1)?.status, HeatStatus::Done);
    assert_eq!(snapshot.heat(1)?.winner, Some(Slot::One));

    let locks = events
        .try_iter()
        .filter(|event| matches!(event, Event::HeatLocked { heat: 1 }))
        .count();
    assert_eq!(locks, 1);

    Ok(())
}

#[test]
fn snapshots_stay_consistent_under_concurrent_writes() -> anyhow::Result<()> {
    let tournament = field(8)?;

    let reader = {
        let shared = tournament.clone();
        thread::spawn(move || {
            // Totals can only ever be made of whole submissions: with every
            // vote worth 1, 3, or 5 points toward one slot, a torn read
            // would show up as an impossible intermediate sum.
            for _ in 0..1_000 {
                let snapshot = shared.snapshot();
                for heat in snapshot.rounds.iter().flat_map(|round| &round.heats) {
                    let totals = heat.totals();
                    assert!(totals.slot_one + totals.slot_two <= 22);
                }
            }
        })
    };

    for heat in 1..=4 {
        run_heat(&tournament, heat)?;
        tournament.submit_score(heat, "anna", Beverage::Cappuccino, sweep(Side::Left))?;
        tournament.submit_score(heat, "omar", Beverage::Espresso, sweep(Side::Left))?;
    }

    reader.join().expect("the reader thread ran");

    Ok(())
}

#[test]
fn an_eight_barista_field_crowns_the_top_seed() -> anyhow::Result<()> {
    let tournament = field(8)?;
    let events = tournament.subscribe();

    // With slot one's cups always on the left and both judges sweeping
    // left, the better seed wins every heat.
    let mut rounds = 1;
    loop {
        let pending: Vec<usize> = {
            let snapshot = tournament.snapshot();
            snapshot
                .rounds
                .last()
                .map(|round| {
                    round
                        .heats
                        .iter()
                        .filter(|heat| heat.status != HeatStatus::Done)
                        .map(|heat| heat.id)
                        .collect()
                })
                .unwrap_or_default()
        };

        for heat in pending {
            run_heat(&tournament, heat)?;
            tournament.submit_score(heat, "anna", Beverage::Cappuccino, sweep(Side::Left))?;
            tournament.submit_score(heat, "omar", Beverage::Espresso, sweep(Side::Left))?;
            assert!(tournament.is_locked(heat)?);
        }

        if tournament.snapshot().phase == Phase::Done {
            break;
        }
        rounds = tournament.advance_round()?;
    }

    assert_eq!(rounds, 3);

    let snapshot = tournament.snapshot();
    assert_eq!(
        snapshot.champion().map(|participant| participant.name.as_str()),
        Some("barista-1")
    );

    let champions = events
        .try_iter()
        .filter(|event| matches!(event, Event::ChampionDecided { .. }))
        .count();
    assert_eq!(champions, 1);

    Ok(())
}

#[test]
fn a_snapshot_survives_the_ron_round_trip() -> anyhow::Result<()> {
    let tournament = field(4)?;
    run_heat(&tournament, 1)?;
    tournament.submit_score(1, "anna", Beverage::Cappuccino, sweep(Side::Left))?;

    let snapshot = tournament.snapshot();
    let ron = ron::ser::to_string(&snapshot)?;
    let restored: Tournament = ron::from_str(&ron)?;

    assert_eq!(restored.phase, snapshot.phase);
    assert_eq!(restored.roster, snapshot.roster);
    assert_eq!(restored.rounds, snapshot.rounds);
    assert_eq!(restored.stations, snapshot.stations);

    Ok(())
}
