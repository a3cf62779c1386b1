use std::io::{self, BufRead, Write};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use cointoss_core::{CoinFace, Delay, Statistics, ViewSurface};

pub struct TerminalView {
    assume_yes: bool,
}

impl TerminalView {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn stats_line(stats: &Statistics) -> String {
    format!(
        "heads {} | tails {} | total {}",
        stats.heads_count(),
        stats.tails_count(),
        stats.total_count()
    )
}

impl ViewSurface for TerminalView {
    fn set_button(&self, enabled: bool, label: &str) {
        debug!(enabled, label, "button");
    }

    fn show_result(&self, text: &str) {
        println!("{text}");
    }

    fn hide_result(&self) {}

    fn show_notice(&self, text: &str) {
        println!("{text}");
    }

    fn hide_notice(&self) {}

    fn set_coin_flipping(&self, flipping: bool) {
        if flipping {
            print!("flipping... ");
            let _ = io::stdout().flush();
        }
    }

    fn set_coin_face(&self, face: CoinFace) {
        debug!(?face, "coin face");
    }

    fn render_stats(&self, stats: &Statistics) {
        println!("{}", stats_line(stats));
    }

    fn alert(&self, message: &str) {
        // finish the "flipping..." line first
        println!();
        eprintln!("error: {message}");
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

pub struct TokioDelay {
    wait: bool,
}

impl TokioDelay {
    pub fn new() -> Self {
        Self { wait: true }
    }

    /// Returns at once, for commands with nothing on screen to wait for.
    pub fn instant() -> Self {
        Self { wait: false }
    }
}

impl Default for TokioDelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        if self.wait {
            tokio::time::sleep(duration).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }

    #[test]
    fn formats_counters() {
        assert_eq!(
            stats_line(&Statistics::new(3, 3)),
            "heads 3 | tails 3 | total 6"
        );
    }

    #[tokio::test]
    async fn delay_waits_for_the_duration() {
        let start = tokio::time::Instant::now();
        TokioDelay::new().sleep(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn instant_delay_skips_the_wait() {
        let start = tokio::time::Instant::now();
        TokioDelay::instant().sleep(Duration::from_secs(30)).await;
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
