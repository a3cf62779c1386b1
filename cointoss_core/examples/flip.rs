use std::cell::Cell;
use std::time::Duration;

use async_trait::async_trait;
use cointoss_core::{
    CoinFace, CoinRng, Delay, FlipController, FlipError, FlipOutcome, MemoryStore,
    OutcomeService, Statistics, ViewSurface,
};

// Example end-to-end session without a server: outcomes come from a local seeded coin
struct LocalCoin {
    rng: CoinRng,
    nonce: Cell<u64>,
}

#[async_trait(?Send)]
impl OutcomeService for LocalCoin {
    async fn fetch_outcome(&self) -> Result<FlipOutcome, FlipError> {
        let nonce = self.nonce.get() + 1;
        self.nonce.set(nonce);
        Ok(self.rng.outcome(nonce))
    }
}

struct NoDelay;

#[async_trait(?Send)]
impl Delay for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}

struct PrintView;

impl ViewSurface for PrintView {
    fn set_button(&self, _enabled: bool, _label: &str) {}
    fn show_result(&self, text: &str) {
        println!("result: {text}");
    }
    fn hide_result(&self) {}
    fn show_notice(&self, text: &str) {
        println!("{text}");
    }
    fn hide_notice(&self) {}
    fn set_coin_flipping(&self, _flipping: bool) {}
    fn set_coin_face(&self, _face: CoinFace) {}
    fn render_stats(&self, stats: &Statistics) {
        println!(
            "heads={} tails={} total={}",
            stats.heads_count(),
            stats.tails_count(),
            stats.total_count()
        );
    }
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

fn main() {
    let rng = CoinRng::new("example-server-seed");
    println!("server_seed_hash={}", rng.server_seed_hash_hex());
    let controller = FlipController::attach(
        LocalCoin {
            rng,
            nonce: Cell::new(0),
        },
        MemoryStore::new(),
        PrintView,
        NoDelay,
    );
    futures::executor::block_on(async {
        for _ in 0..5 {
            controller.trigger_flip().await;
        }
        controller.reset_statistics().await;
    });
}
