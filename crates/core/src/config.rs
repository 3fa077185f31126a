use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ROUNDS: u32 = 5;
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 30;
pub const DEFAULT_BASE_SCORE: u32 = 100;
pub const DEFAULT_TIME_BONUS: u32 = 10;
pub const DEFAULT_HINT_PENALTY: u32 = 10;
pub const ENV_MAX_ROUNDS: &str = "CHARADES_MAX_ROUNDS";
pub const ENV_TIME_LIMIT_SECS: &str = "CHARADES_TIME_LIMIT_SECS";
pub const ENV_SEED: &str = "CHARADES_SEED";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundCount(u32);

impl RoundCount {
    pub fn new(rounds: u32) -> Result<Self, ConfigError> {
        if rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        Ok(Self(rounds))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for RoundCount {
    fn default() -> Self {
        Self(DEFAULT_MAX_ROUNDS)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeLimit {
    pub secs: u32,
}

impl TimeLimit {
    pub fn new(secs: u32) -> Result<Self, ConfigError> {
        if secs == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(Self { secs })
    }
}

impl Default for TimeLimit {
    fn default() -> Self {
        Self {
            secs: DEFAULT_TIME_LIMIT_SECS,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoringRules {
    pub base_score: u32,
    /// Added per second left on the clock when answered.
    pub time_bonus: u32,
    pub hint_penalty: u32,
}

impl ScoringRules {
    pub fn award(&self, remaining_secs: u32) -> u32 {
        self.base_score
            .saturating_add(remaining_secs.saturating_mul(self.time_bonus))
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            base_score: DEFAULT_BASE_SCORE,
            time_bonus: DEFAULT_TIME_BONUS,
            hint_penalty: DEFAULT_HINT_PENALTY,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub rounds: RoundCount,
    pub time_limit: TimeLimit,
    pub scoring: ScoringRules,
    /// Fixed word-selection seed; `None` draws from the OS.
    pub seed: Option<u64>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("round count must be > 0")]
    ZeroRounds,
    #[error("time limit must be > 0 s")]
    ZeroTimeLimit,
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: String, value: String },
}

pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Clone, Debug, Default)]
pub struct StdEnv;

impl Env for StdEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: std::collections::BTreeMap<String, String>,
}

impl MapEnv {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl Env for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key: key.to_owned(),
            value: value.to_owned(),
        })
}

/// CLI value, then `env_key`, then `default`.
pub fn resolve_u32_with_default(
    cli_value: Option<u32>,
    env_key: &str,
    env: &impl Env,
    default: u32,
) -> Result<u32, ConfigError> {
    match cli_value {
        Some(v) => Ok(v),
        None => match env.var(env_key) {
            Some(v) => parse_number(env_key, &v),
            None => Ok(default),
        },
    }
}

pub fn resolve_optional_u64(
    cli_value: Option<u64>,
    env_key: &str,
    env: &impl Env,
) -> Result<Option<u64>, ConfigError> {
    match cli_value {
        Some(v) => Ok(Some(v)),
        None => env.var(env_key).map(|v| parse_number(env_key, &v)).transpose(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_takes_precedence_over_env() {
        let env = MapEnv::default().with_var(ENV_MAX_ROUNDS, "9");
        let v = resolve_u32_with_default(Some(3), ENV_MAX_ROUNDS, &env, DEFAULT_MAX_ROUNDS);
        assert_eq!(v, Ok(3));
    }

    #[test]
    fn env_used_when_cli_missing() {
        let env = MapEnv::default().with_var(ENV_TIME_LIMIT_SECS, " 45 ");
        let v = resolve_u32_with_default(None, ENV_TIME_LIMIT_SECS, &env, 30);
        assert_eq!(v, Ok(45));
    }

    #[test]
    fn default_used_when_both_missing() {
        let v = resolve_u32_with_default(None, ENV_MAX_ROUNDS, &MapEnv::default(), 5);
        assert_eq!(v, Ok(5));
        let seed = resolve_optional_u64(None, ENV_SEED, &MapEnv::default());
        assert_eq!(seed, Ok(None));
    }

    #[test]
    fn malformed_env_value_is_an_error() {
        let env = MapEnv::default().with_var(ENV_SEED, "abc");
        let err = resolve_optional_u64(None, ENV_SEED, &env).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                key: ENV_SEED.to_owned(),
                value: "abc".to_owned()
            }
        );
    }

    #[test]
    fn zero_values_are_rejected() {
        assert_eq!(RoundCount::new(0), Err(ConfigError::ZeroRounds));
        assert_eq!(TimeLimit::new(0), Err(ConfigError::ZeroTimeLimit));
        assert_eq!(TimeLimit::new(30).map(|t| t.secs), Ok(30));
    }

    #[test]
    fn award_adds_time_bonus() {
        let rules = ScoringRules::default();
        assert_eq!(rules.award(0), 100);
        assert_eq!(rules.award(25), 350);
    }
}
