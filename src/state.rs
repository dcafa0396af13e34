use std::sync::Mutex;

use crate::config::AppConfig;
use crate::services::ledger::BookingLedger;

/// Shared application state. The ledger mutex is what serializes the
/// check-then-act booking sequence within this process.
pub struct AppState {
    pub ledger: Mutex<BookingLedger>,
    pub config: AppConfig,
}
