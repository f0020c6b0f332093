use crate::types::{
    Auction, Bid, HighestBid, RegistryConfig, StorageKey, INSTANCE_TTL_AMOUNT,
    INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{Env, Vec};

// ========== Config ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Config)
}

pub fn get_config(env: &Env) -> Option<RegistryConfig> {
    env.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Auction Counter ==========

pub fn get_auction_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::AuctionCount)
        .unwrap_or(0)
}

/// Reserves the next sequential id. Ids start at 0.
pub fn next_auction_id(env: &Env) -> u64 {
    let id = get_auction_count(env);
    env.storage()
        .instance()
        .set(&StorageKey::AuctionCount, &(id + 1));
    id
}

// ========== Auctions ==========

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = StorageKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = StorageKey::Auction(auction.id);
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Bid Ledger ==========

pub fn get_highest_bid(env: &Env, auction_id: u64) -> HighestBid {
    let key = StorageKey::HighestBid(auction_id);
    match env.storage().persistent().get::<_, HighestBid>(&key) {
        Some(bid) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
            bid
        }
        None => HighestBid::none(),
    }
}

pub fn set_highest_bid(env: &Env, auction_id: u64, bid: &HighestBid) {
    let key = StorageKey::HighestBid(auction_id);
    env.storage().persistent().set(&key, bid);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn get_bid_history(env: &Env, auction_id: u64) -> Vec<Bid> {
    let key = StorageKey::BidHistory(auction_id);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env))
}

// ========== Stranded Items ==========

pub fn is_item_stranded(env: &Env, auction_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&StorageKey::StrandedItem(auction_id))
}

pub fn set_item_stranded(env: &Env, auction_id: u64) {
    let key = StorageKey::StrandedItem(auction_id);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn clear_item_stranded(env: &Env, auction_id: u64) {
    env.storage()
        .persistent()
        .remove(&StorageKey::StrandedItem(auction_id));
}

pub fn add_bid_to_history(env: &Env, auction_id: u64, bid: Bid) {
    let key = StorageKey::BidHistory(auction_id);
    let mut history = get_bid_history(env, auction_id);
    history.push_back(bid);
    env.storage().persistent().set(&key, &history);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
