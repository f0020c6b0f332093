use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryInitializedEvent {
    pub admin: Address,
    pub payment_token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEvent {
    pub auction_id: u64,
    pub item_id: u64,
    pub item_exists: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidMadeEvent {
    pub auction_id: u64,
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelledEvent {
    pub auction_id: u64,
    pub timestamp: u64,
}

/// Item delivery failed during settlement and the winning bid was refunded.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettlementFailedEvent {
    pub auction_id: u64,
    pub winner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettledEvent {
    pub auction_id: u64,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemRecoveredEvent {
    pub auction_id: u64,
    pub item_id: u64,
    pub holder: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChangedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
}

pub fn emit_registry_initialized(env: &Env, admin: Address, payment_token: Address) {
    let event = RegistryInitializedEvent { admin: admin.clone(), payment_token };
    env.events().publish(("registry_initialized", admin), event);
}

pub fn emit_auction_created(env: &Env, auction_id: u64, item_id: u64, item_exists: bool) {
    let event = AuctionCreatedEvent { auction_id, item_id, item_exists };
    env.events().publish(("auction_created", auction_id), event);
}

pub fn emit_bid_made(env: &Env, event: &BidMadeEvent) {
    env.events().publish(("bid_made", event.auction_id, event.bidder.clone()), event.clone());
}

pub fn emit_auction_cancelled(env: &Env, event: &AuctionCancelledEvent) {
    env.events().publish(("auction_cancelled", event.auction_id), event.clone());
}

pub fn emit_settlement_failed(env: &Env, auction_id: u64, winner: Address, amount: i128) {
    let event = SettlementFailedEvent { auction_id, winner: winner.clone(), amount };
    env.events().publish(("settlement_failed", auction_id, winner), event);
}

pub fn emit_settled(env: &Env, event: &SettledEvent) {
    env.events().publish(("settled", event.auction_id), event.clone());
}

pub fn emit_item_recovered(env: &Env, auction_id: u64, item_id: u64, holder: Address) {
    let event = ItemRecoveredEvent { auction_id, item_id, holder };
    env.events().publish(("item_recovered", auction_id), event);
}

pub fn emit_admin_changed(env: &Env, old_admin: Address, new_admin: Address) {
    let event = AdminChangedEvent { old_admin: old_admin.clone(), new_admin: new_admin.clone() };
    env.events().publish(("admin_changed", old_admin, new_admin), event);
}
