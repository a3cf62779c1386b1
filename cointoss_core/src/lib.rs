pub mod controller;
pub mod error;
pub mod outcome;
pub mod rng;
pub mod service;
pub mod stats;
pub mod store;
pub mod view;

pub use crate::controller::{
    is_flip_key, FlipController, FlipReport, FlipState, ResetReport, FLIP_ANIMATION,
    NOTICE_DURATION,
};
pub use crate::error::{FlipError, StoreError};
pub use crate::outcome::{CoinFace, FlipOutcome};
pub use crate::rng::{derive_hash_hex, CoinRng};
#[cfg(feature = "http")]
pub use crate::service::HttpOutcomeService;
pub use crate::service::{Delay, OutcomeService};
pub use crate::stats::Statistics;
pub use crate::store::{decode_stats, KeyValueStore, MemoryStore, StatsStore, STATS_KEY};
pub use crate::view::ViewSurface;
