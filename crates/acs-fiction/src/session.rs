//! A play session over one loaded adventure.
//!
//! `Session` owns the world, the engine and the roll source, and runs one
//! line of input at a time through the interpreter and the engine.

use std::path::Path;

use acs_core::{AdventureDef, World};
use acs_mechanics::RollSource;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::EngineConfig;
use crate::engine::{TurnEngine, TurnReport};
use crate::error::FictionResult;
use crate::interpreter::{Interpretation, interpret};

const OVER: &str = "The adventure is over.";

/// The outcome of one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// How the line was read.
    pub interpretation: Interpretation,
    /// What happened.
    pub report: TurnReport,
}

/// An interactive adventure session.
pub struct Session<R: RollSource = StdRng> {
    world: World,
    engine: TurnEngine,
    rolls: R,
    turns: u32,
    over: bool,
}

impl Session<StdRng> {
    /// Start a session on a world. Dice are seeded from the config, or from
    /// the OS when no seed is set.
    pub fn new(world: World, config: EngineConfig) -> Self {
        let rolls = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rolls(world, config, rolls)
    }

    /// Load an adventure file and start a session on it.
    pub fn load(path: &Path, config: EngineConfig) -> FictionResult<Self> {
        let world = AdventureDef::load(path)?.into_world()?;
        tracing::info!(path = %path.display(), title = %world.title, "adventure loaded");
        Ok(Self::new(world, config))
    }
}

impl<R: RollSource> Session<R> {
    /// Start a session with an explicit roll source.
    pub fn with_rolls(world: World, config: EngineConfig, rolls: R) -> Self {
        Self {
            world,
            engine: TurnEngine::new(config),
            rolls,
            turns: 0,
            over: false,
        }
    }

    /// The opening narration: title, introduction and the starting room,
    /// which counts as visited from here on.
    pub fn intro(&mut self) -> FictionResult<Vec<String>> {
        let mut lines = vec![self.world.title.clone()];
        if !self.world.intro.is_empty() {
            lines.push(self.world.intro.clone());
        }
        let start = self.world.player.room.clone();
        self.world.player.visited.insert(start);
        lines.extend(crate::engine::room_lines(&self.world, true)?);
        Ok(lines)
    }

    /// Interpret and apply one line of input. Once the session is over the
    /// world is left alone and every input gets the same closing line.
    pub fn process(&mut self, input: &str) -> FictionResult<Turn> {
        let interpretation = interpret(input);
        if self.over {
            return Ok(Turn {
                interpretation,
                report: TurnReport {
                    lines: vec![OVER.to_string()],
                    ended: true,
                    ..TurnReport::default()
                },
            });
        }
        let mut report =
            self.engine
                .apply(&mut self.world, &interpretation.action, &mut self.rolls)?;

        if self.engine.config().echo_corrections {
            for correction in &interpretation.corrections {
                report.notes.push(format!(
                    "(reading \"{}\" as \"{}\")",
                    correction.from, correction.to
                ));
            }
        }
        if report.ambiguous {
            report
                .notes
                .push("(more than one thing matches; taking the first)".to_string());
        }

        if report.consumed {
            self.turns = self.turns.saturating_add(1);
        }
        if report.ended {
            self.over = true;
            tracing::info!(turns = self.turns, "session over");
        }
        Ok(Turn {
            interpretation,
            report,
        })
    }

    /// The world as it stands.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Turns that took game time.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The player died or quit.
    pub fn is_over(&self) -> bool {
        self.over
    }
}
