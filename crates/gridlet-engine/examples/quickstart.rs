//! Gridlet quickstart: a hand-authored episode stepped by hand.
//!
//! Demonstrates:
//!   1. Building an `Episode` from an explicit layout
//!   2. Wrapping it in an `Environment` with a seeded RNG
//!   3. Stepping into a goal, a wall and a hazard
//!   4. Resetting to a random episode
//!
//! Run with:
//!   cargo run --example quickstart

use gridlet_core::{Action, Entity, EntityKind, Position};
use gridlet_engine::{EntityStyles, EnvConfig, Environment, Episode};
use gridlet_space::SquareGrid;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ─── Layout ─────────────────────────────────────────────────────

const SIZE: u32 = 5;

fn entity(styles: &EntityStyles, kind: EntityKind, x: i32, y: i32) -> Entity {
    Entity::from_style(kind, Position::new(x, y), styles.get(kind))
}

// ─── ASCII map ──────────────────────────────────────────────────

fn draw(episode: &Episode) -> String {
    let n = SIZE as usize;
    let mut cells = vec![vec!['.'; n]; n];
    for e in episode.entities() {
        let glyph = match e.kind {
            EntityKind::Agent => 'A',
            EntityKind::Goal => 'G',
            EntityKind::Hazard => 'X',
        };
        cells[e.position.y as usize][e.position.x as usize] = glyph;
    }
    cells
        .iter()
        .map(|row| format!("  {}", row.iter().collect::<String>()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() {
    println!("=== gridlet quickstart ===\n");

    let config = EnvConfig::new(false, SIZE);
    let styles = &config.styles;
    let layout = vec![
        entity(styles, EntityKind::Agent, 1, 1),
        entity(styles, EntityKind::Goal, 1, 0),
        entity(styles, EntityKind::Goal, 4, 4),
        entity(styles, EntityKind::Goal, 3, 0),
        entity(styles, EntityKind::Hazard, 0, 0),
        entity(styles, EntityKind::Hazard, 2, 3),
    ];
    let grid = SquareGrid::new(SIZE).unwrap();
    let episode = Episode::from_entities(grid, layout).unwrap();
    let rng = ChaCha8Rng::seed_from_u64(42);
    let mut env = Environment::from_episode(config, episode, rng).unwrap();

    println!("Start:\n{}\n", draw(env.episode()));

    // Up collects the goal, Up again hits the top wall, Left steps onto
    // the hazard in the corner.
    for action in [Action::Up, Action::Up, Action::Left] {
        let result = env.step(action).unwrap();
        let what = match (result.info.movement.blocked, result.info.consumed) {
            (true, _) => "blocked".to_string(),
            (false, Some(c)) => format!(
                "consumed {} at {}, respawned at {}",
                c.kind, c.at, c.respawned_at
            ),
            (false, None) => "moved".to_string(),
        };
        println!("{action:?}: reward={:+.1} ({what})", result.reward);
        println!("{}\n", draw(env.episode()));
    }

    let stats = env.stats();
    println!(
        "Steps: {}, total reward: {:+.1}, goals: {}, hazards: {}, blocked: {}",
        stats.steps,
        stats.total_reward,
        stats.goals_collected,
        stats.hazards_hit,
        stats.blocked_moves
    );

    println!("\nResetting to a random episode...");
    let obs = env.reset().unwrap();
    println!("Observation shape: {:?}", obs.shape());
    println!("{}", draw(env.episode()));
}
