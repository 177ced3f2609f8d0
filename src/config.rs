//! Runtime configuration read from the environment.
//!
//! | Variable            | Default   |
//! |---------------------|-----------|
//! | `HOST`              | `0.0.0.0` |
//! | `PORT`              | `8080`    |
//! | `GROUP_SIZE`        | `6`       |
//! | `DUE_DATE_RULE`     | `weekly`  |
//! | `ROSTER_CSV`        | unset     |
//! | `SESSION_TTL_HOURS` | `12`      |

use crate::models::{DueDateRule, RosterEntry, DEFAULT_GROUP_SIZE};
use crate::roster::{load_roster_file, seed_roster};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub group_size: usize,
    pub due_date_rule: DueDateRule,
    /// CSV roster to use instead of the embedded sample.
    pub roster_csv: Option<PathBuf>,
    /// Idle schedules are dropped after this long.
    pub session_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            group_size: DEFAULT_GROUP_SIZE,
            due_date_rule: DueDateRule::Weekly,
            roster_csv: None,
            session_ttl: Duration::from_secs(12 * 3600),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values keep their default and log a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            group_size: parse_or("GROUP_SIZE", lookup("GROUP_SIZE"), defaults.group_size)
                .max(1),
            due_date_rule: parse_or(
                "DUE_DATE_RULE",
                lookup("DUE_DATE_RULE"),
                defaults.due_date_rule,
            ),
            roster_csv: lookup("ROSTER_CSV").map(PathBuf::from),
            session_ttl: Duration::from_secs(
                3600 * parse_or("SESSION_TTL_HOURS", lookup("SESSION_TTL_HOURS"), 12u64),
            ),
        }
    }

    /// Roster for new schedules: the configured CSV, else the embedded sample.
    pub fn load_roster(&self) -> Vec<RosterEntry> {
        match &self.roster_csv {
            Some(path) => match load_roster_file(path) {
                Ok(roster) => roster,
                Err(e) => {
                    log::warn!("{}; using the built-in roster", e);
                    seed_roster()
                }
            },
            None => seed_roster(),
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {}={:?}", key, value);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let c = config_from(&[]);
        assert_eq!(c.port, 8080);
        assert_eq!(c.group_size, 6);
        assert_eq!(c.due_date_rule, DueDateRule::Weekly);
        assert!(c.roster_csv.is_none());
    }

    #[test]
    fn reads_overrides() {
        let c = config_from(&[
            ("PORT", "9000"),
            ("GROUP_SIZE", "4"),
            ("DUE_DATE_RULE", "index-sum"),
            ("SESSION_TTL_HOURS", "1"),
        ]);
        assert_eq!(c.port, 9000);
        assert_eq!(c.group_size, 4);
        assert_eq!(c.due_date_rule, DueDateRule::IndexSum);
        assert_eq!(c.session_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn invalid_values_fall_back() {
        let c = config_from(&[("PORT", "http"), ("GROUP_SIZE", "0"), ("DUE_DATE_RULE", "daily")]);
        assert_eq!(c.port, 8080);
        assert_eq!(c.group_size, 1);
        assert_eq!(c.due_date_rule, DueDateRule::Weekly);
    }
}
