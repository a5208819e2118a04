//! Traits describing read-only game data.
//!
//! Oracles expose the rule configuration, the prize ladder and the random
//! source. The [`Env`] aggregate bundles them so the engine can access
//! everything it needs without hard coupling to concrete implementations.
mod bank;
mod config;
mod error;
mod prizes;
mod rng;

pub use bank::QuestionBankLoader;
pub use config::ConfigOracle;
pub use error::OracleError;
pub use prizes::{Prize, PrizeTable};
pub use rng::{PcgRng, RngOracle, RollContext, compute_seed, shuffle};

/// Aggregates read-only oracles required by the action pipeline.
pub struct Env<'a, C, R>
where
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    config: Option<&'a C>,
    rng: Option<&'a R>,
    prizes: Option<&'a PrizeTable>,
}

// Manual impls: only references are held, so copying never needs `C: Copy`.
impl<C, R> Clone for Env<'_, C, R>
where
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, R> Copy for Env<'_, C, R>
where
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type GameEnv<'a> = Env<'a, dyn ConfigOracle + 'a, dyn RngOracle + 'a>;

impl<'a, C, R> Env<'a, C, R>
where
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(config: Option<&'a C>, rng: Option<&'a R>, prizes: Option<&'a PrizeTable>) -> Self {
        Self {
            config,
            rng,
            prizes,
        }
    }

    pub fn with_all(config: &'a C, rng: &'a R, prizes: &'a PrizeTable) -> Self {
        Self::new(Some(config), Some(rng), Some(prizes))
    }

    pub fn empty() -> Self {
        Self {
            config: None,
            rng: None,
            prizes: None,
        }
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the prize ladder, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PrizesNotAvailable` if no prize table was provided.
    pub fn prizes(&self) -> Result<&'a PrizeTable, OracleError> {
        self.prizes.ok_or(OracleError::PrizesNotAvailable)
    }
}

impl<'a, C, R> Env<'a, C, R>
where
    C: ConfigOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv` (borrows self).
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(config, rng, self.prizes)
    }
}
