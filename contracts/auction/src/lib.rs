#![no_std]

mod admin;
mod effects;
mod errors;
mod events;
mod external;
mod lifecycle;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

pub use errors::Error;
pub use events::{BidMadeEvent, SettledEvent};
pub use external::{AllowList, ItemIssuer, RewardIssuer};
pub use types::{Auction, AuctionParams, Bid, HighestBid, RegistryConfig};

/// Registry of independent timed auctions over unique items.
///
/// Each auction collects ascending bids in the configured payment token,
/// refunding the displaced bidder on every raise. Late bids extend the
/// close (soft close). Once bidding stops, anyone may settle: the item
/// goes to the winner and the proceeds to the beneficiary, or, when the
/// item contract refuses delivery, the winner is refunded instead.
#[contract]
pub struct AuctionRegistry;

#[contractimpl]
impl AuctionRegistry {
    // ========== INITIALIZATION ==========

    pub fn initialize(env: Env, admin: Address, payment_token: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_config(
            &env,
            &RegistryConfig {
                admin: admin.clone(),
                payment_token: payment_token.clone(),
            },
        );
        storage::extend_instance_ttl(&env);

        events::emit_registry_initialized(&env, admin, payment_token);

        Ok(())
    }

    // ========== AUCTION MANAGEMENT (Admin Only) ==========

    /// Create an auction and return its id.
    ///
    /// When `params.item_exists` is set the item is pulled from the admin
    /// into escrow as part of the same invocation; if that transfer fails
    /// nothing is created.
    pub fn create(env: Env, admin: Address, params: AuctionParams) -> Result<u64, Error> {
        admin::require_admin(&env, &admin)?;

        let auction_id = storage::next_auction_id(&env);
        let auction = Auction::new(auction_id, params, admin);

        if auction.item_exists {
            effects::escrow_item(&env, &auction);
        }

        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);

        events::emit_auction_created(&env, auction_id, auction.item_id, auction.item_exists);

        Ok(auction_id)
    }

    /// Cancel an auction that has not received any bid yet.
    pub fn cancel(env: Env, admin: Address, auction_id: u64) -> Result<(), Error> {
        admin::require_admin(&env, &admin)?;

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::NotFound)?;

        if auction.is_settled {
            return Err(Error::AlreadyTerminal);
        }

        if storage::get_highest_bid(&env, auction_id).bidder.is_some() {
            return Err(Error::AuctionStarted);
        }

        auction.is_settled = true;
        storage::save_auction(&env, &auction);

        if auction.item_exists {
            effects::return_item(&env, &auction);
        }

        events::emit_auction_cancelled(
            &env,
            &events::AuctionCancelledEvent {
                auction_id,
                timestamp: env.ledger().timestamp(),
            },
        );
        storage::extend_instance_ttl(&env);

        Ok(())
    }

    // ========== BIDDING ==========

    /// Place a bid of `amount` payment tokens, pulled from `bidder`.
    ///
    /// The previous highest bidder is refunded in full; if that refund
    /// fails the whole bid is rejected. With `wants_reward` set and a
    /// reward contract configured, the bidder also receives one reward
    /// unit on a best-effort basis.
    pub fn bid(
        env: Env,
        auction_id: u64,
        bidder: Address,
        amount: i128,
        wants_reward: bool,
    ) -> Result<BidMadeEvent, Error> {
        let config = Self::require_initialized(&env)?;
        bidder.require_auth();

        let now = env.ledger().timestamp();
        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::NotActive)?;
        let previous = storage::get_highest_bid(&env, auction_id);

        if !lifecycle::is_live(&auction, &previous, now) {
            return Err(Error::NotActive);
        }

        if let Some(allow_list) = &auction.allow_list_contract {
            if !effects::is_allowed(&env, allow_list, &bidder) {
                return Err(Error::NotAllowed);
            }
        }

        if amount < 0 || amount < lifecycle::min_next_bid(&auction, &previous)? {
            return Err(Error::BidTooLow);
        }

        let registry = env.current_contract_address();
        effects::transfer_funds(&env, &config.payment_token, &bidder, &registry, amount);

        if previous.bidder.is_none() {
            auction.start_time = now;
            storage::save_auction(&env, &auction);
        }

        storage::set_highest_bid(
            &env,
            auction_id,
            &HighestBid {
                amount,
                timestamp: now,
                bidder: Some(bidder.clone()),
            },
        );
        storage::add_bid_to_history(
            &env,
            auction_id,
            Bid {
                bidder: bidder.clone(),
                amount,
                timestamp: now,
            },
        );

        if let Some(displaced) = &previous.bidder {
            effects::transfer_funds(&env, &config.payment_token, &registry, displaced, previous.amount);
        }

        let event = BidMadeEvent {
            auction_id,
            bidder: bidder.clone(),
            amount,
            timestamp: now,
        };
        events::emit_bid_made(&env, &event);

        if wants_reward {
            if let Some(reward_contract) = &auction.reward_contract {
                effects::issue_reward(&env, reward_contract, auction_id, &bidder);
            }
        }

        storage::extend_instance_ttl(&env);
        Ok(event)
    }

    // ========== SETTLEMENT ==========

    /// Settle an auction that no longer accepts bids. Callable by anyone.
    ///
    /// The auction is marked settled before any external call. If the
    /// item contract fails to deliver, the winning bid goes back to the
    /// winner instead of the beneficiary and the auction still settles.
    pub fn settle(env: Env, auction_id: u64) -> Result<SettledEvent, Error> {
        let config = Self::require_initialized(&env)?;

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::NotFound)?;

        if auction.is_settled {
            return Err(Error::AlreadyTerminal);
        }

        let now = env.ledger().timestamp();
        let highest = storage::get_highest_bid(&env, auction_id);

        // an auction without bids never expires
        let winner = match &highest.bidder {
            Some(winner) if !lifecycle::is_live(&auction, &highest, now) => winner.clone(),
            _ => return Err(Error::StillActive),
        };

        auction.is_settled = true;
        storage::save_auction(&env, &auction);

        let registry = env.current_contract_address();
        if effects::try_deliver_item(&env, &auction, &winner) {
            effects::transfer_funds(
                &env,
                &config.payment_token,
                &registry,
                &auction.beneficiary,
                highest.amount,
            );
        } else {
            log!(&env, "item delivery failed, refunding winner", auction_id);
            effects::transfer_funds(&env, &config.payment_token, &registry, &winner, highest.amount);
            if auction.item_exists {
                log!(&env, "escrowed item stranded", auction_id, auction.item_id);
                storage::set_item_stranded(&env, auction_id);
            }
            events::emit_settlement_failed(&env, auction_id, winner, highest.amount);
        }

        let event = SettledEvent {
            auction_id,
            timestamp: now,
        };
        events::emit_settled(&env, &event);
        storage::extend_instance_ttl(&env);

        Ok(event)
    }

    /// Hand an escrowed item that settlement failed to forward back to
    /// its holder.
    pub fn recover_item(env: Env, admin: Address, auction_id: u64) -> Result<(), Error> {
        admin::require_admin(&env, &admin)?;

        let auction = storage::get_auction(&env, auction_id).ok_or(Error::NotFound)?;

        if !storage::is_item_stranded(&env, auction_id) {
            return Err(Error::NothingToRecover);
        }

        storage::clear_item_stranded(&env, auction_id);
        effects::return_item(&env, &auction);

        events::emit_item_recovered(&env, auction_id, auction.item_id, auction.item_holder);
        storage::extend_instance_ttl(&env);

        Ok(())
    }

    // ========== QUERIES ==========

    /// Whether the auction currently accepts bids. False for unknown,
    /// cancelled, settled and expired auctions.
    pub fn is_active(env: Env, auction_id: u64) -> bool {
        match storage::get_auction(&env, auction_id) {
            Some(auction) => lifecycle::is_live(
                &auction,
                &storage::get_highest_bid(&env, auction_id),
                env.ledger().timestamp(),
            ),
            None => false,
        }
    }

    pub fn auction_count(env: Env) -> u64 {
        storage::get_auction_count(&env)
    }

    pub fn auction_exists(env: Env, auction_id: u64) -> bool {
        auction_id < storage::get_auction_count(&env)
    }

    /// Auction record; ids that were never assigned yield a zero-valued record.
    pub fn get_auction(env: Env, auction_id: u64) -> Auction {
        storage::get_auction(&env, auction_id)
            .unwrap_or_else(|| Auction::unknown(&env, auction_id))
    }

    /// Current highest bid; `bidder` is `None` while nobody has bid.
    pub fn get_highest_bid(env: Env, auction_id: u64) -> HighestBid {
        storage::get_highest_bid(&env, auction_id)
    }

    /// Every accepted bid, oldest first.
    pub fn get_bid_history(env: Env, auction_id: u64) -> Vec<Bid> {
        storage::get_bid_history(&env, auction_id)
    }

    // ========== ACCESS CONTROL ==========

    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        let mut config = admin::require_admin(&env, &admin)?;

        config.admin = new_admin.clone();
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        events::emit_admin_changed(&env, admin, new_admin);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<RegistryConfig, Error> {
        Self::require_initialized(&env)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_initialized(env: &Env) -> Result<RegistryConfig, Error> {
        storage::get_config(env).ok_or(Error::NotInitialized)
    }
}

#[cfg(test)]
mod test;
