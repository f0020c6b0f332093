use crate::errors::Error;
use crate::types::{Auction, HighestBid, BPS_DENOMINATOR};

/// Timestamp at which the auction stops accepting bids, or `None` while
/// its clock has not started (no bid yet).
///
/// A bid extends the window to `bid.timestamp + bid_time_extension`
/// whenever that lands past the nominal `start_time + duration`, so late
/// bids keep pushing the close forward (soft close).
pub fn deadline(auction: &Auction, highest: &HighestBid) -> Option<u64> {
    if highest.bidder.is_none() {
        return None;
    }

    let nominal = auction.start_time.saturating_add(auction.duration);
    let extended = highest
        .timestamp
        .saturating_add(auction.bid_time_extension);

    Some(nominal.max(extended))
}

pub fn is_live(auction: &Auction, highest: &HighestBid, now: u64) -> bool {
    if auction.is_settled {
        return false;
    }
    match deadline(auction, highest) {
        Some(deadline) => now < deadline,
        None => true,
    }
}

/// Smallest amount the next bid may carry.
///
/// The first bid is held to `min_bid`; every later one must beat the
/// current amount by `bid_increase_bps`, rounded down.
pub fn min_next_bid(auction: &Auction, highest: &HighestBid) -> Result<i128, Error> {
    if highest.bidder.is_none() {
        return Ok(auction.min_bid);
    }

    let factor = BPS_DENOMINATOR + i128::from(auction.bid_increase_bps);
    highest
        .amount
        .checked_mul(factor)
        .map(|scaled| scaled / BPS_DENOMINATOR)
        .ok_or(Error::Overflow)
}
