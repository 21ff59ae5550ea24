//! Runtime configuration for the ledger.

use crate::error::{LedgerError, Result};
use chrono::{FixedOffset, Local, Offset, Utc};

/// Settings shared by every use case of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Offset used to cut operation timestamps into calendar days.
    pub utc_offset: FixedOffset,
}

impl Default for LedgerConfig {
    /// Uses the host's local offset at the time of the call.
    fn default() -> Self {
        Self {
            utc_offset: Local::now().offset().fix(),
        }
    }
}

impl LedgerConfig {
    pub fn utc() -> Self {
        Self {
            utc_offset: Utc.fix(),
        }
    }

    /// Builds a config from an offset expressed in minutes east of UTC.
    pub fn with_offset_minutes(minutes: i32) -> Result<Self> {
        let utc_offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                LedgerError::InvalidConfig(format!("UTC offset out of range: {minutes} minutes"))
            })?;
        Ok(Self { utc_offset })
    }
}
