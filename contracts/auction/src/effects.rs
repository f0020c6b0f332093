use soroban_sdk::{log, token, Address, Env};

use crate::external::{AllowListClient, ItemIssuerClient, RewardIssuerClient};
use crate::types::Auction;

/// Moves `amount` of the payment token. A failed transfer aborts the
/// whole invocation, so funds are never dropped silently.
pub fn transfer_funds(env: &Env, payment_token: &Address, from: &Address, to: &Address, amount: i128) {
    let token_client = token::Client::new(env, payment_token);
    token_client.transfer(from, to, &amount);
}

pub fn is_allowed(env: &Env, allow_list: &Address, bidder: &Address) -> bool {
    AllowListClient::new(env, allow_list).balance(bidder) > 0
}

/// Pulls the auctioned item from its holder into the registry's custody.
pub fn escrow_item(env: &Env, auction: &Auction) {
    ItemIssuerClient::new(env, &auction.item_contract).transfer(
        &auction.item_holder,
        &env.current_contract_address(),
        &auction.item_id,
    );
}

/// Hands the escrowed item back to its holder. Aborts on failure.
pub fn return_item(env: &Env, auction: &Auction) {
    ItemIssuerClient::new(env, &auction.item_contract).transfer(
        &env.current_contract_address(),
        &auction.item_holder,
        &auction.item_id,
    );
}

/// Delivers the item to the winner: the escrowed one is forwarded,
/// otherwise a fresh one is issued. Any failure of the item contract is
/// contained and reported as `false`; its own state changes are rolled back.
pub fn try_deliver_item(env: &Env, auction: &Auction, winner: &Address) -> bool {
    let item = ItemIssuerClient::new(env, &auction.item_contract);
    let delivered = if auction.item_exists {
        item.try_transfer(&env.current_contract_address(), winner, &auction.item_id)
    } else {
        item.try_issue(winner, &auction.item_id)
    };
    matches!(delivered, Ok(Ok(())))
}

/// Best-effort reward for a bidder; failure never affects the bid.
pub fn issue_reward(env: &Env, reward_contract: &Address, auction_id: u64, bidder: &Address) {
    let issued = RewardIssuerClient::new(env, reward_contract).try_issue(bidder);
    if !matches!(issued, Ok(Ok(()))) {
        log!(env, "reward issuance failed", auction_id, bidder.clone());
    }
}
