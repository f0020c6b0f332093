//! Interfaces of the contracts an auction calls out to.
use soroban_sdk::{contractclient, Address, Env};

/// Contract that owns or mints the auctioned items.
#[contractclient(name = "ItemIssuerClient")]
pub trait ItemIssuer {
    /// Mint `item_id` straight to `to`.
    fn issue(env: Env, to: Address, item_id: u64);

    /// Move an existing item.
    fn transfer(env: Env, from: Address, to: Address, item_id: u64);
}

/// Optional bonus handed to bidders that ask for it.
#[contractclient(name = "RewardIssuerClient")]
pub trait RewardIssuer {
    fn issue(env: Env, to: Address);
}

/// Optional bidding gate. Any nonzero balance admits the holder.
#[contractclient(name = "AllowListClient")]
pub trait AllowList {
    fn balance(env: Env, id: Address) -> i128;
}
