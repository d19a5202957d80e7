//! Render model: text fields, rolling series, charts and disk rows, updated once per snapshot.

use crate::history::{RollingSeries, SERIES_LEN};
use crate::types::{DiskUsage, MetricsSnapshot};
use crate::ui::chart::{ChartOptions, LiveChart};
use crate::ui::theme::{CPU_LINE, MEM_LINE};

pub const PLACEHOLDER: &str = "--";

/// `"23.5°C / 74.2°F"`, or `"--"` when the backend has no sensor reading.
/// Fahrenheit is derived from Celsius when the backend leaves it out.
pub fn format_temperature(temp_c: Option<f64>, temp_f: Option<f64>) -> String {
    match temp_c {
        Some(c) => {
            let f = temp_f.unwrap_or(c * 9.0 / 5.0 + 32.0);
            format!("{c:.1}°C / {f:.1}°F")
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Text shown in the scalar display fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields {
    pub cpu_percent: String,
    pub cpu_freq: String,
    pub cpu_temp: String,
    pub mem_percent: String,
    pub mem_used: String,
    pub mem_total: String,
    pub mem_available: Option<String>,
    pub io_read: String,
    pub io_write: String,
    pub io_read_count: Option<u64>,
    pub io_write_count: Option<u64>,
}

impl Default for Fields {
    fn default() -> Self {
        let p = || PLACEHOLDER.to_string();
        Self {
            cpu_percent: p(),
            cpu_freq: p(),
            cpu_temp: p(),
            mem_percent: p(),
            mem_used: p(),
            mem_total: p(),
            mem_available: None,
            io_read: p(),
            io_write: p(),
            io_read_count: None,
            io_write_count: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiskRow {
    /// "<mountpoint> (<device>)"
    pub label: String,
    pub device: String,
    /// "<used> / <total>"
    pub usage: String,
    pub free: Option<String>,
    pub percent: f64,
}

impl DiskRow {
    pub fn from_usage(d: &DiskUsage) -> Self {
        Self {
            label: format!("{} ({})", d.mountpoint, d.device),
            device: d.device.clone(),
            usage: format!("{} / {}", d.used, d.total),
            free: d.free.clone(),
            percent: d.percent,
        }
    }

    /// Fraction of the bar to fill, clamped to 0..=1.
    pub fn fill_ratio(&self) -> f64 {
        if self.percent.is_finite() {
            (self.percent / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

pub struct Dashboard {
    fields: Fields,
    cpu_hist: RollingSeries,
    mem_hist: RollingSeries,
    pub cpu_chart: LiveChart,
    pub mem_chart: LiveChart,
    disks: Vec<DiskRow>,
    redraw: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        let opts = ChartOptions::default();
        Self {
            fields: Fields::default(),
            cpu_hist: RollingSeries::new(SERIES_LEN),
            mem_hist: RollingSeries::new(SERIES_LEN),
            cpu_chart: LiveChart::new("CPU Usage", CPU_LINE, opts),
            mem_chart: LiveChart::new("Memory Usage", MEM_LINE, opts),
            disks: Vec::new(),
            redraw: true,
        }
    }

    pub fn apply(&mut self, m: &MetricsSnapshot) {
        // CPU
        self.fields.cpu_percent = m.cpu.percent.to_string();
        self.fields.cpu_freq = m.cpu.freq.to_string();
        self.fields.cpu_temp = format_temperature(m.cpu.temp_c, m.cpu.temp_f);
        self.cpu_hist.push(m.cpu.percent);
        self.cpu_chart.set_series(&self.cpu_hist);
        self.cpu_chart.request_redraw();

        // Memory
        self.fields.mem_percent = m.memory.percent.to_string();
        self.fields.mem_used = m.memory.used.clone();
        self.fields.mem_total = m.memory.total.clone();
        self.fields.mem_available = m.memory.available.clone();
        self.mem_hist.push(m.memory.percent);
        self.mem_chart.set_series(&self.mem_hist);
        self.mem_chart.request_redraw();

        // IO (already human-formatted by the backend)
        self.fields.io_read = m.io.read_bytes.clone();
        self.fields.io_write = m.io.write_bytes.clone();
        self.fields.io_read_count = m.io.read_count;
        self.fields.io_write_count = m.io.write_count;

        // Disks: full replace, backend order
        self.disks = m.disk.iter().map(DiskRow::from_usage).collect();

        self.redraw = true;
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Look up a display field by its element id (`cpu-percent`, `mem-used`, ...).
    pub fn field(&self, id: &str) -> Option<&str> {
        let f = &self.fields;
        let v = match id {
            "cpu-percent" => &f.cpu_percent,
            "cpu-freq" => &f.cpu_freq,
            "cpu-temp" => &f.cpu_temp,
            "mem-percent" => &f.mem_percent,
            "mem-used" => &f.mem_used,
            "mem-total" => &f.mem_total,
            "io-read" => &f.io_read,
            "io-write" => &f.io_write,
            _ => return None,
        };
        Some(v.as_str())
    }

    pub fn cpu_series(&self) -> &RollingSeries {
        &self.cpu_hist
    }

    pub fn mem_series(&self) -> &RollingSeries {
        &self.mem_hist
    }

    pub fn disks(&self) -> &[DiskRow] {
        &self.disks
    }

    /// True when fields changed or a chart asked for a redraw since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        let cpu = self.cpu_chart.take_redraw_request();
        let mem = self.mem_chart.take_redraw_request();
        std::mem::take(&mut self.redraw) || cpu || mem
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
