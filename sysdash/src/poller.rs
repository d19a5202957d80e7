//! Background poller: fetches a snapshot on every tick and forwards successes to the UI loop.
//!
//! Each tick spawns its own fetch task, so a slow response never delays the next
//! request. Responses may therefore arrive out of order; every fetch carries a
//! sequence number and the receiving side drops anything older than what it has
//! already applied (see [`SequenceGate`]).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error};

use crate::http::MetricsClient;
use crate::types::MetricsSnapshot;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct PollUpdate {
    pub seq: u64,
    pub snapshot: MetricsSnapshot,
}

/// Start polling. The first fetch goes out immediately, then one per `period`.
/// Stops once the receiving end of `tx` is dropped.
pub fn spawn_poller(
    client: MetricsClient,
    period: Duration,
    tx: UnboundedSender<PollUpdate>,
) -> JoinHandle<()> {
    let client = Arc::new(client);
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut seq: u64 = 0;
        loop {
            ticker.tick().await;
            if tx.is_closed() {
                debug!("poller receiver dropped; stopping");
                break;
            }
            seq += 1;
            let client = Arc::clone(&client);
            let tx = tx.clone();
            tokio::spawn(async move {
                match client.fetch().await {
                    Ok(snapshot) => {
                        let _ = tx.send(PollUpdate { seq, snapshot });
                    }
                    // skip this cycle; the next tick tries again
                    Err(e) => error!(seq, endpoint = %client.endpoint(), "error fetching metrics: {e}"),
                }
            });
        }
    })
}

/// Admits only updates newer than the last one applied.
#[derive(Debug, Default, Clone)]
pub struct SequenceGate {
    last_applied: Option<u64>,
}

impl SequenceGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admit(&mut self, seq: u64) -> bool {
        match self.last_applied {
            Some(last) if seq <= last => {
                debug!(seq, last, "discarding stale metrics response");
                false
            }
            _ => {
                self.last_applied = Some(seq);
                true
            }
        }
    }

    pub fn last_applied(&self) -> Option<u64> {
        self.last_applied
    }
}
