use soroban_sdk::contracterror;

/// Error codes returned by the auction registry.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller is not the registry admin
    Unauthorized = 3,
    /// Auction id was never assigned
    NotFound = 4,
    /// Auction is expired, cancelled, settled or unknown
    NotActive = 5,
    /// Bidder holds no allow-list balance
    NotAllowed = 6,
    /// Bid is under the minimum bid or the required raise
    BidTooLow = 7,
    /// Auction already has a bid and can no longer be cancelled
    AuctionStarted = 8,
    /// Auction was already cancelled or settled
    AlreadyTerminal = 9,
    /// Auction is still accepting bids
    StillActive = 10,
    Overflow = 11,
    /// No escrowed item is stranded for this auction
    NothingToRecover = 12,
}
