use app_core::{FinancialSnapshot, PositionSide};
use web_sys as web;

use crate::dom;

/// Refresh the text overlay from a snapshot.
///
/// Labels are plain DOM text; updating them never touches scene buffers, so
/// a balance move costs exactly three text writes.
pub fn update(document: &web::Document, snapshot: &FinancialSnapshot) {
    dom::set_text(
        document,
        "hud-balance",
        &format!("Balance: ${:.2}", snapshot.balance),
    );
    let sign = if snapshot.pnl >= 0.0 { "+" } else { "-" };
    dom::set_text(
        document,
        "hud-pnl",
        &format!("PnL: {sign}${:.2}", snapshot.pnl.abs()),
    );
    let position = match snapshot.position_side {
        PositionSide::Flat => "No open position".to_string(),
        PositionSide::Long => format!(
            "LONG {:.4} @ {:.2}",
            snapshot.position_size, snapshot.entry_price
        ),
        PositionSide::Short => format!(
            "SHORT {:.4} @ {:.2}",
            snapshot.position_size, snapshot.entry_price
        ),
    };
    dom::set_text(document, "hud-position", &position);
}
