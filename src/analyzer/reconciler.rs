use crate::model::PersistedStatus;
use chrono::{Datelike, NaiveDate};
use tracing::info;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub status: PersistedStatus,
    pub changed: bool,
    /// Logged only. The matcher already re-evaluates each run, so the
    /// record is the same either way.
    pub month_rolled_over: bool,
}

/// Message shown on the badge when the month's promotion is exhausted.
pub fn exhausted_message(year: i32, month: u32) -> String {
    format!("{}年{}月 icash Pay 4%加碼已額滿", year, month)
}

/// Builds the next record from the previous one and this run's match.
pub fn reconcile(
    previous: &PersistedStatus,
    announcement: Option<&str>,
    today: NaiveDate,
) -> Reconciliation {
    let updated = today.format(DATE_FORMAT).to_string();
    let is_full = announcement.is_some();

    let month_rolled_over = !is_full && updated.get(..7) != Some(previous.updated_month());
    if month_rolled_over {
        info!("New month ({}), resetting exhausted status", &updated[..7]);
    }

    let status = PersistedStatus {
        uniopen_icash_full: is_full,
        uniopen_icash_msg: if is_full {
            exhausted_message(today.year(), today.month())
        } else {
            String::new()
        },
        uniopen_icash_date: announcement.unwrap_or_default().to_string(),
        updated,
    };
    let changed = previous.uniopen_icash_full != status.uniopen_icash_full;

    Reconciliation {
        status,
        changed,
        month_rolled_over,
    }
}
