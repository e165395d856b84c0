//! Random-policy rollouts on the reference environment.
//!
//! Demonstrates: config → Environment → reset → 50 random steps →
//! reset → repeat, with engine events logged through `tracing`.
//!
//! Run with `RUST_LOG=gridlet_engine=debug` to see resets and
//! collisions, or `trace` for every step.

use gridlet_bench::{partial_profile, random_rollout, reference_profile, EPISODE_STEPS};
use gridlet_engine::Environment;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== gridlet random rollout ===\n");

    for (label, config) in [
        ("full view", reference_profile(42)),
        ("partial view", partial_profile(42)),
    ] {
        let mut env = Environment::new(config).unwrap();
        let mut policy = ChaCha8Rng::seed_from_u64(7);
        println!(
            "{label}: obs shape {:?}, {} actions",
            env.observation_shape(),
            env.action_count()
        );

        let mut returns = Vec::new();
        for episode in 0..5 {
            let summary = random_rollout(&mut env, &mut policy, EPISODE_STEPS).unwrap();
            println!(
                "  episode {episode}: return={:>5.1} goals={} hazards={}",
                summary.total_reward, summary.goals, summary.hazards,
            );
            returns.push(summary.total_reward);
        }
        let mean = returns.iter().sum::<f64>() / returns.len() as f64;
        println!("  mean return over {} episodes: {mean:.2}\n", returns.len());
    }
}
