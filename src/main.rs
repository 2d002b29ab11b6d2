//! Lane Hopper headless runner
//!
//! Drives the simulation with the built-in autopilot and prints a JSON
//! snapshot of the final state. Useful for soak-testing balance changes
//! without a renderer attached.
//!
//! Usage: `lane-hopper [seed] [ticks]`

use rand::Rng;

use lane_hopper::sim::{GameState, Snapshot, TickInput, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(arg) => arg.parse().expect("seed must be an unsigned integer"),
        None => rand::rng().random(),
    };
    let ticks: u64 = match args.next() {
        Some(arg) => arg.parse().expect("tick count must be an unsigned integer"),
        None => 3600,
    };

    log::info!("lane-hopper starting: seed {seed}, {ticks} ticks");

    let mut state = GameState::new(seed);
    let input = TickInput {
        idle_mode: true,
        ..TickInput::default()
    };
    for _ in 0..ticks {
        tick(&mut state, &input);
        for event in state.take_events() {
            log::debug!("{event:?}");
        }
    }

    log::info!(
        "finished: level {}, score {}, {} actors live",
        state.level,
        state.score,
        state.actors.total()
    );
    let snapshot = Snapshot::capture(&state);
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).expect("snapshot serializes")
    );
}
