use crate::shipping::carrier::CarrierQuote;
use crate::shipping::models::{RateCandidate, RateRow, RateSource};

pub mod carrier;
pub mod handlers;
pub mod models;
pub mod requests;
pub mod responses;
#[cfg(test)]
pub mod tests;

/// Combines configured rate rows with carrier quotes into one candidate
/// list, cheapest first. Free rows only apply once the subtotal clears
/// their threshold.
pub fn compose_rates(
    rows: &[RateRow],
    subtotal_cents: u64,
    carrier_quotes: &[CarrierQuote],
) -> Vec<RateCandidate> {
    let mut candidates = Vec::new();
    for row in rows {
        match row {
            RateRow::Flat {
                label,
                amount_cents,
                eta_days,
            } => candidates.push(RateCandidate {
                label: label.clone(),
                amount_cents: *amount_cents,
                eta_days: *eta_days,
                source: RateSource::Flat,
            }),
            RateRow::FreeOver {
                label,
                threshold_cents,
                eta_days,
            } => {
                if subtotal_cents >= *threshold_cents {
                    candidates.push(RateCandidate {
                        label: label.clone(),
                        amount_cents: 0,
                        eta_days: *eta_days,
                        source: RateSource::Free,
                    });
                }
            }
        }
    }
    for quote in carrier_quotes {
        candidates.push(RateCandidate {
            label: quote.service.clone(),
            amount_cents: quote.amount_cents,
            eta_days: quote.eta_days,
            source: RateSource::Carrier,
        });
    }
    candidates.sort_by(|lhs, rhs| lhs.amount_cents.cmp(&rhs.amount_cents));
    candidates
}
