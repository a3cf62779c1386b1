use crate::outcome::CoinFace;
use crate::stats::Statistics;

pub const LABEL_FLIPPING: &str = "Flipping...";
pub const LABEL_FLIP_AGAIN: &str = "Flip Again";
pub const LABEL_TRY_AGAIN: &str = "Try Again";

pub const FLIP_FAILED_MESSAGE: &str = "Oops! Something went wrong. Please try again.";
pub const RESET_CONFIRM_MESSAGE: &str = "Are you sure you want to reset all statistics?";
pub const RESET_NOTICE: &str = "Statistics Reset!";

/// The display elements the controller drives.
///
/// Methods take `&self`: browser handles are shared references anyway and
/// other implementations keep their own interior state.
pub trait ViewSurface {
    fn set_button(&self, enabled: bool, label: &str);

    fn show_result(&self, text: &str);

    fn hide_result(&self);

    /// Transient message shown in the result panel.
    fn show_notice(&self, text: &str);

    fn hide_notice(&self);

    fn set_coin_flipping(&self, flipping: bool);

    fn set_coin_face(&self, face: CoinFace);

    fn render_stats(&self, stats: &Statistics);

    /// Blocking error notification.
    fn alert(&self, message: &str);

    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;
}
