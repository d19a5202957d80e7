//! Types that mirror the /api/metrics JSON schema.

use serde::Deserialize;
use std::fmt;

/// CPU frequency as sent by the backend: either a bare number or an already
/// formatted string like "2400.00Mhz". Displayed verbatim either way.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Freq {
    Number(f64),
    Text(String),
}

impl fmt::Display for Freq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Freq::Number(n) => write!(f, "{n}"),
            Freq::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CpuStats {
    pub percent: f64,
    pub freq: Freq,
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub temp_f: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MemoryStats {
    pub percent: f64,
    // pre-formatted by the backend ("5.60GB")
    pub used: String,
    pub total: String,
    #[serde(default)]
    pub available: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IoStats {
    pub read_bytes: String,
    pub write_bytes: String,
    #[serde(default)]
    pub read_count: Option<u64>,
    #[serde(default)]
    pub write_count: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DiskUsage {
    pub mountpoint: String,
    pub device: String,
    pub used: String,
    pub total: String,
    pub percent: f64,
    #[serde(default)]
    pub free: Option<String>,
}

/// One full metrics payload for a single poll cycle.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub cpu: CpuStats,
    pub memory: MemoryStats,
    pub io: IoStats,
    pub disk: Vec<DiskUsage>,
}
