// File: uyabot-common/src/models/lookup.rs

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Error;

const DEFAULT_MAPS: &[(&str, &str)] = &[
    ("Bakisi_Isles", "Bakisi Isles"),
    ("Hoven_Gorge", "Hoven Gorge"),
    ("Outpost_x12", "Outpost x12"),
    ("Korgon_Outpost", "Korgon Outpost"),
    ("Metropolis", "Metropolis"),
    ("Blackwater_City", "Blackwater City"),
    ("Command_Center", "Command Center"),
    ("Blackwater_Docks", "Blackwater Docks"),
    ("Aquatos_Sewers", "Aquatos Sewers"),
    ("Marcadia_Palace", "Marcadia Palace"),
];

const DEFAULT_TIME_LIMITS: &[(&str, &str)] = &[
    ("0", "None"),
    ("5", "5 min"),
    ("10", "10 min"),
    ("15", "15 min"),
    ("20", "20 min"),
    ("25", "25 min"),
    ("30", "30 min"),
    ("35", "35 min"),
    ("40", "40 min"),
    ("45", "45 min"),
    ("50", "50 min"),
    ("55", "55 min"),
    ("60", "60 min"),
];

/// Display names for the codes the games endpoint sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTables {
    pub maps: HashMap<String, String>,
    pub time_limits: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct LookupOverrides {
    #[serde(default)]
    maps: HashMap<String, String>,
    #[serde(default)]
    time_limits: HashMap<String, String>,
}

fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect()
}

impl Default for LookupTables {
    fn default() -> Self {
        Self {
            maps: table(DEFAULT_MAPS),
            time_limits: table(DEFAULT_TIME_LIMITS),
        }
    }
}

impl LookupTables {
    /// An empty table set; every lookup misses.
    pub fn empty() -> Self {
        Self {
            maps: HashMap::new(),
            time_limits: HashMap::new(),
        }
    }

    /// Parses `{"maps": {...}, "time_limits": {...}}` and lays it over the
    /// built-in defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, Error> {
        let overrides: LookupOverrides = serde_json::from_str(raw)?;
        let mut tables = Self::default();
        debug!(
            "Applying {} map and {} time limit overrides",
            overrides.maps.len(),
            overrides.time_limits.len()
        );
        tables.maps.extend(overrides.maps);
        tables.time_limits.extend(overrides.time_limits);
        Ok(tables)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Unknown codes render as an empty string.
    pub fn map_name(&self, code: &str) -> &str {
        self.maps.get(code).map(String::as_str).unwrap_or("")
    }

    pub fn time_limit_name(&self, code: &str) -> &str {
        self.time_limits.get(code).map(String::as_str).unwrap_or("")
    }
}
