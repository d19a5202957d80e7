//! UI module root: exposes drawing functions for individual panels and window chrome.

pub mod chart;
pub mod chrome;
pub mod cpu;
pub mod disks;
pub mod header;
pub mod io;
pub mod mem;
pub mod theme;
pub mod util;
