use thiserror::Error;

/// Direction of the open position, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PositionSide {
    Long,
    Short,
    #[default]
    Flat,
}

/// Account state supplied by the external data source, read-only to the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinancialSnapshot {
    pub balance: f64,
    pub pnl: f64,
    pub position_side: PositionSide,
    pub position_size: f64,
    pub entry_price: f64,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("non-finite {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("negative balance: {0}")]
    NegativeBalance(f64),
}

impl FinancialSnapshot {
    /// A flat account with no open position.
    pub fn flat(balance: f64) -> Self {
        Self {
            balance,
            pnl: 0.0,
            position_side: PositionSide::Flat,
            position_size: 0.0,
            entry_price: 0.0,
        }
    }

    /// `true` when the account is losing; break-even counts as profit.
    #[inline]
    pub fn is_loss(&self) -> bool {
        self.pnl < 0.0
    }

    /// Reject values that would poison scene geometry.
    ///
    /// A non-finite coordinate silently breaks rendering downstream, so a
    /// snapshot carrying one is refused wholesale and the previous snapshot
    /// stays in effect.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for (field, value) in [
            ("balance", self.balance),
            ("pnl", self.pnl),
            ("position_size", self.position_size),
            ("entry_price", self.entry_price),
        ] {
            if !value.is_finite() {
                return Err(SnapshotError::NonFinite { field, value });
            }
        }
        if self.balance < 0.0 {
            return Err(SnapshotError::NegativeBalance(self.balance));
        }
        Ok(())
    }
}
