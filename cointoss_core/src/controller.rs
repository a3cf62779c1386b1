//! The flip controller: one in-flight flip at a time, statistics persisted
//! after every change.

use std::cell::Cell;
use std::time::Duration;

use crate::error::FlipError;
use crate::outcome::FlipOutcome;
use crate::service::{Delay, OutcomeService};
use crate::stats::Statistics;
use crate::store::{KeyValueStore, StatsStore};
use crate::view::{
    ViewSurface, FLIP_FAILED_MESSAGE, LABEL_FLIPPING, LABEL_FLIP_AGAIN, LABEL_TRY_AGAIN,
    RESET_CONFIRM_MESSAGE, RESET_NOTICE,
};

/// Must match the coin's CSS flip animation duration.
pub const FLIP_ANIMATION: Duration = Duration::from_millis(2000);

/// How long the reset notice stays up.
pub const NOTICE_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipState {
    #[default]
    Idle,
    Flipping,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlipReport {
    /// Another flip was already in flight.
    Ignored,
    Revealed(FlipOutcome),
    Failed(FlipError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReport {
    Declined,
    Reset,
}

/// Space and Enter trigger a flip, like a click.
pub fn is_flip_key(code: &str) -> bool {
    matches!(code, "Space" | "Enter")
}

pub struct FlipController<O, K, V, D> {
    service: O,
    store: StatsStore<K>,
    view: V,
    delay: D,
    stats: Cell<Statistics>,
    state: Cell<FlipState>,
    // bumped whenever the result panel changes hands
    panel_epoch: Cell<u64>,
}

impl<O, K, V, D> FlipController<O, K, V, D>
where
    O: OutcomeService,
    K: KeyValueStore,
    V: ViewSurface,
    D: Delay,
{
    /// Load saved statistics and render them before any flip happens.
    pub fn attach(service: O, store: K, view: V, delay: D) -> Self {
        let store = StatsStore::new(store);
        let stats = store.load();
        log::info!(
            "loaded statistics: heads={} tails={} total={}",
            stats.heads_count(),
            stats.tails_count(),
            stats.total_count()
        );
        view.render_stats(&stats);
        Self {
            service,
            store,
            view,
            delay,
            stats: Cell::new(stats),
            state: Cell::new(FlipState::Idle),
            panel_epoch: Cell::new(0),
        }
    }

    pub fn state(&self) -> FlipState {
        self.state.get()
    }

    pub fn statistics(&self) -> Statistics {
        self.stats.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store(&self) -> &StatsStore<K> {
        &self.store
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub async fn trigger_flip(&self) -> FlipReport {
        if self.state.get() == FlipState::Flipping {
            log::debug!("flip already in flight, ignoring trigger");
            return FlipReport::Ignored;
        }
        self.begin_flip();

        match self.service.fetch_outcome().await {
            Ok(outcome) => {
                self.delay.sleep(FLIP_ANIMATION).await;
                self.reveal(outcome);
                FlipReport::Revealed(outcome)
            }
            Err(err) => {
                self.fail(&err);
                FlipReport::Failed(err)
            }
        }
    }

    /// Ask for confirmation, then zero and persist the counters.
    pub async fn reset_statistics(&self) -> ResetReport {
        if !self.view.confirm(RESET_CONFIRM_MESSAGE) {
            log::debug!("reset declined");
            return ResetReport::Declined;
        }

        let mut stats = self.stats.get();
        stats.reset();
        self.commit(stats);
        log::info!("statistics reset");

        let epoch = self.claim_panel();
        self.view.show_notice(RESET_NOTICE);
        self.delay.sleep(NOTICE_DURATION).await;
        // a flip may have taken the panel over in the meantime
        if self.panel_epoch.get() == epoch {
            self.view.hide_notice();
        }
        ResetReport::Reset
    }

    fn begin_flip(&self) {
        self.state.set(FlipState::Flipping);
        self.view.set_button(false, LABEL_FLIPPING);
        self.claim_panel();
        self.view.hide_result();
        self.view.set_coin_flipping(true);
    }

    fn reveal(&self, outcome: FlipOutcome) {
        self.claim_panel();
        self.view.show_result(&outcome.display_text());

        let mut stats = self.stats.get();
        stats.record(outcome);
        self.commit(stats);
        log::debug!("revealed {outcome}, total={}", stats.total_count());

        self.view.set_coin_face(outcome.coin_face());
        self.view.set_coin_flipping(false);
        self.state.set(FlipState::Idle);
        self.view.set_button(true, LABEL_FLIP_AGAIN);
    }

    fn fail(&self, err: &FlipError) {
        log::error!("error flipping coin: {err}");
        self.view.set_coin_flipping(false);
        self.state.set(FlipState::Idle);
        self.view.set_button(true, LABEL_TRY_AGAIN);
        self.view.alert(FLIP_FAILED_MESSAGE);
    }

    fn commit(&self, stats: Statistics) {
        self.stats.set(stats);
        self.view.render_stats(&stats);
        if let Err(err) = self.store.save(&stats) {
            log::warn!("failed to save statistics: {err}");
        }
    }

    fn claim_panel(&self) -> u64 {
        let epoch = self.panel_epoch.get().wrapping_add(1);
        self.panel_epoch.set(epoch);
        epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_keys() {
        assert!(is_flip_key("Space"));
        assert!(is_flip_key("Enter"));
        assert!(!is_flip_key("KeyF"));
        assert!(!is_flip_key("NumpadEnter"));
    }
}
