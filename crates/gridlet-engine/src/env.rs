//! The reset/step environment façade.
//!
//! [`Environment`] owns one [`Episode`], one RNG and one [`Renderer`].
//! [`reset()`](Environment::reset) repopulates the episode and returns
//! its first observation; [`step()`](Environment::step) moves the agent,
//! resolves any collision, and returns the new observation with the
//! step's reward.
//!
//! # Ownership model
//!
//! `Environment` is [`Send`] when its RNG is. All mutation goes through
//! `&mut self`; there is no shared or global RNG state, so independent
//! environments never influence each other.

use gridlet_core::{Action, EntityKind};
use gridlet_obs::{Frame, Renderer};
use gridlet_space::SquareGrid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::collision::{resolve_collision, Consumption};
use crate::config::{ConfigError, EnvConfig};
use crate::episode::Episode;
use crate::error::EnvError;
use crate::movement::{apply_move, Movement};
use crate::stats::EpisodeStats;

// Compile-time assertion: the default Environment is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Environment>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Details of one step beyond `(observation, reward, done)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepInfo {
    /// The decoded action.
    pub action: Action,
    /// How the agent moved.
    pub movement: Movement,
    /// The entity consumed this step, if any.
    pub consumed: Option<Consumption>,
}

/// Result of a successful [`Environment::step()`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    /// Observation after the step.
    pub observation: Frame,
    /// Collision reward plus any blocked-move penalty.
    pub reward: f32,
    /// Always false: episodes have no terminal state.
    pub done: bool,
    /// Movement and collision details.
    pub info: StepInfo,
}

// ── Environment ─────────────────────────────────────────────────

/// A single grid-world environment.
///
/// # Examples
///
/// ```
/// use gridlet_engine::{EnvConfig, Environment};
///
/// let mut env = Environment::new(EnvConfig::new(false, 5)).unwrap();
/// assert_eq!(env.state().shape(), [84, 84, 3]);
///
/// let result = env.step(0u8).unwrap();
/// assert!(!result.done);
/// assert_eq!(result.observation.shape(), env.observation_shape());
/// ```
pub struct Environment<R = ChaCha8Rng> {
    config: EnvConfig,
    grid: SquareGrid,
    renderer: Renderer,
    episode: Episode,
    rng: R,
    state: Frame,
    stats: EpisodeStats,
    seed: Option<u64>,
}

impl Environment<ChaCha8Rng> {
    /// Create an environment seeded from `config.seed` and reset it.
    ///
    /// # Errors
    ///
    /// - [`EnvError::Config`] if `config` fails validation.
    /// - [`EnvError::Placement`] if the configured entities do not fit.
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        let seed = config.seed;
        Self::build(config, ChaCha8Rng::seed_from_u64(seed), Some(seed))
    }
}

impl<R: Rng + SeedableRng> Environment<R> {
    /// Reseed the RNG from `seed`, then [`reset()`](Self::reset).
    ///
    /// Two environments with the same configuration reset with the same
    /// seed produce the same episode and, given the same actions, the
    /// same observations and rewards.
    pub fn reset_with_seed(&mut self, seed: u64) -> Result<Frame, EnvError> {
        self.rng = R::seed_from_u64(seed);
        self.seed = Some(seed);
        self.reset()
    }
}

impl<R: Rng> Environment<R> {
    /// Create an environment drawing from `rng` and reset it.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: EnvConfig, rng: R) -> Result<Self, EnvError> {
        Self::build(config, rng, None)
    }

    /// Create an environment starting from a hand-authored episode.
    ///
    /// The episode is used as-is for the first observation; later
    /// resets populate randomly from `config` and `rng`.
    ///
    /// # Errors
    ///
    /// - [`EnvError::Config`] if `config` fails validation or its size
    ///   differs from the episode's grid.
    /// - [`EnvError::Obs`] if an entity paints an invalid channel.
    pub fn from_episode(config: EnvConfig, episode: Episode, rng: R) -> Result<Self, EnvError> {
        config.validate()?;
        let grid = config.grid()?;
        if *episode.grid() != grid {
            return Err(ConfigError::GridMismatch {
                configured: config.size,
                episode: episode.grid().size(),
            }
            .into());
        }
        let renderer = Renderer::new(config.render_spec())?;
        let state = renderer.render(&episode)?;
        Ok(Self {
            config,
            grid,
            renderer,
            episode,
            rng,
            state,
            stats: EpisodeStats::default(),
            seed: None,
        })
    }

    fn build(config: EnvConfig, mut rng: R, seed: Option<u64>) -> Result<Self, EnvError> {
        config.validate()?;
        let grid = config.grid()?;
        let renderer = Renderer::new(config.render_spec())?;
        let episode = Episode::populate(
            grid,
            config.goal_count,
            config.hazard_count,
            &config.styles,
            &mut rng,
        )?;
        let state = renderer.render(&episode)?;
        let env = Self {
            config,
            grid,
            renderer,
            episode,
            rng,
            state,
            stats: EpisodeStats::default(),
            seed,
        };
        env.log_reset();
        Ok(env)
    }

    /// Start a new episode and return its first observation.
    ///
    /// Consumes RNG draws, so successive resets differ. On error the
    /// current episode is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Placement`] if the configured entities do not
    /// fit on the grid.
    pub fn reset(&mut self) -> Result<Frame, EnvError> {
        let episode = Episode::populate(
            self.grid,
            self.config.goal_count,
            self.config.hazard_count,
            &self.config.styles,
            &mut self.rng,
        )?;
        self.state = self.renderer.render(&episode)?;
        self.episode = episode;
        self.stats = EpisodeStats::default();
        self.log_reset();
        Ok(self.state.clone())
    }

    /// Advance one step.
    ///
    /// Accepts an [`Action`] or any integer code convertible to one.
    /// The reward is the collision reward plus
    /// [`blocked_move_penalty`](EnvConfig::blocked_move_penalty) when the
    /// move was blocked.
    ///
    /// # Errors
    ///
    /// - [`EnvError::Action`] for a code outside `0..4`.
    /// - [`EnvError::Placement`] if a consumed entity cannot respawn.
    ///
    /// On error the episode, statistics and observation are left untouched.
    pub fn step<A>(&mut self, action: A) -> Result<StepResult, EnvError>
    where
        A: TryInto<Action>,
        EnvError: From<A::Error>,
    {
        let action = action.try_into()?;
        let movement = apply_move(&mut self.episode, action);
        let collision =
            match resolve_collision(&mut self.episode, &self.config.styles, &mut self.rng) {
                Ok(collision) => collision,
                Err(e) => {
                    self.episode.agent_mut().position = movement.from;
                    return Err(e.into());
                }
            };
        let penalty = if movement.blocked {
            self.config.blocked_move_penalty
        } else {
            0.0
        };
        let reward = collision.reward + penalty;
        self.stats.record(&movement, &collision, reward);
        self.state = self.renderer.render(&self.episode)?;
        tracing::trace!(
            step = self.stats.steps,
            ?action,
            position = %movement.to,
            reward,
            "step"
        );
        Ok(StepResult {
            observation: self.state.clone(),
            reward,
            done: collision.done,
            info: StepInfo {
                action,
                movement,
                consumed: collision.consumed,
            },
        })
    }

    fn log_reset(&self) {
        tracing::debug!(
            seed = ?self.seed,
            size = self.grid.size(),
            goals = self.episode.count(EntityKind::Goal),
            hazards = self.episode.count(EntityKind::Hazard),
            agent = %self.episode.agent().position,
            "episode reset"
        );
    }

    /// The most recent observation.
    pub fn state(&self) -> &Frame {
        &self.state
    }

    /// The current episode.
    pub fn episode(&self) -> &Episode {
        &self.episode
    }

    /// Totals for the current episode.
    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }

    /// The configuration this environment was built from.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// The seed of the current RNG stream, if it was seeded here.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of discrete actions (4).
    pub fn action_count(&self) -> usize {
        Action::COUNT
    }

    /// Shape of every observation: `[height, width, 3]`.
    pub fn observation_shape(&self) -> [usize; 3] {
        self.renderer.output_shape()
    }
}

impl<R> std::fmt::Debug for Environment<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("size", &self.config.size)
            .field("partial", &self.config.partial)
            .field("seed", &self.seed)
            .field("steps", &self.stats.steps)
            .field("agent", &self.episode.agent().position)
            .finish()
    }
}
