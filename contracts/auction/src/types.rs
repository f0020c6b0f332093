use soroban_sdk::{contracttype, Address, Env};

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Basis point scale used by `bid_increase_bps` (10000 = 100%).
pub const BPS_DENOMINATOR: i128 = 10_000;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    pub admin: Address,
    /// SEP-41 token bids are paid in
    pub payment_token: Address,
}

/// Creation parameters of an auction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionParams {
    pub duration: u64,
    pub bid_increase_bps: u32,
    pub bid_time_extension: u64,
    pub min_bid: i128,
    pub item_id: u64,
    pub beneficiary: Address,
    pub item_contract: Address,
    pub reward_contract: Option<Address>,
    pub allow_list_contract: Option<Address>,
    /// Item is pulled into escrow at creation instead of being issued at settlement
    pub item_exists: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub id: u64,
    pub duration: u64,
    pub bid_increase_bps: u32,
    pub bid_time_extension: u64,
    pub min_bid: i128,
    pub item_id: u64,
    /// Timestamp of the first bid; the auction clock runs from there.
    pub start_time: u64,
    pub beneficiary: Address,
    pub item_exists: bool,
    /// Account an escrowed item is returned to
    pub item_holder: Address,
    pub item_contract: Address,
    pub reward_contract: Option<Address>,
    pub allow_list_contract: Option<Address>,
    pub is_settled: bool,
}

impl Auction {
    pub fn new(id: u64, params: AuctionParams, item_holder: Address) -> Self {
        Auction {
            id,
            duration: params.duration,
            bid_increase_bps: params.bid_increase_bps,
            bid_time_extension: params.bid_time_extension,
            min_bid: params.min_bid,
            item_id: params.item_id,
            start_time: 0,
            beneficiary: params.beneficiary,
            item_exists: params.item_exists,
            item_holder,
            item_contract: params.item_contract,
            reward_contract: params.reward_contract,
            allow_list_contract: params.allow_list_contract,
            is_settled: false,
        }
    }

    /// Zero-valued record served for ids that were never assigned.
    /// Address fields point at the registry itself.
    pub fn unknown(env: &Env, id: u64) -> Self {
        let registry = env.current_contract_address();
        Auction {
            id,
            duration: 0,
            bid_increase_bps: 0,
            bid_time_extension: 0,
            min_bid: 0,
            item_id: 0,
            start_time: 0,
            beneficiary: registry.clone(),
            item_exists: false,
            item_holder: registry.clone(),
            item_contract: registry,
            reward_contract: None,
            allow_list_contract: None,
            is_settled: false,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighestBid {
    pub amount: i128,
    pub timestamp: u64,
    /// `None` until the first bid is accepted
    pub bidder: Option<Address>,
}

impl HighestBid {
    pub fn none() -> Self {
        HighestBid {
            amount: 0,
            timestamp: 0,
            bidder: None,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
pub enum StorageKey {
    Config,
    AuctionCount,
    Auction(u64),
    HighestBid(u64),
    BidHistory(u64),
    /// Escrowed item that settlement failed to forward
    StrandedItem(u64),
}
