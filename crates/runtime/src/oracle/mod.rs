//! Static oracles for a session.
//!
//! Bundles the rule configuration, prize ladder and random source so the
//! session can build [`quiz_core::GameEnv`] snapshots on demand. The data is
//! immutable for the lifetime of a session; dynamic state lives in
//! [`quiz_core::GameState`].
use quiz_core::{Env, GameConfig, GameEnv, PcgRng, PrizeTable, RngOracle};

/// Manages all oracle implementations and provides unified access
#[derive(Clone, Debug)]
pub struct OracleManager<R = PcgRng> {
    pub(crate) config: GameConfig,
    pub(crate) prizes: PrizeTable,
    pub(crate) rng: R,
}

impl<R: RngOracle> OracleManager<R> {
    pub fn new(config: GameConfig, prizes: PrizeTable, rng: R) -> Self {
        Self { config, prizes, rng }
    }

    /// Converts oracle manager into GameEnv for quiz-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(&self.config, &self.rng, &self.prizes).as_game_env()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn prizes(&self) -> &PrizeTable {
        &self.prizes
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}
