//! sysdash: terminal dashboard that polls a `/api/metrics` endpoint and shows
//! the results in floating, stackable panels.

pub mod app;
pub mod cli;
pub mod dashboard;
pub mod history;
pub mod http;
pub mod input;
pub mod poller;
pub mod profiles;
pub mod types;
pub mod ui;
pub mod window;
