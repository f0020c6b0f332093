
use crate::{AuctionParams, AuctionRegistry, AuctionRegistryClient};
use mocks::allow_list::{MockAllowList, MockAllowListClient};
use mocks::item::{MockItem, MockItemClient};
use mocks::reward::{MockReward, MockRewardClient};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger, LedgerInfo, StellarAssetContract},
    token, Address, Env, Val, Vec,
};

pub const ONE_DAY: u64 = 60 * 60 * 24;
pub const TEN_MINUTES: u64 = 60 * 10;
pub const START_TIME: u64 = 1000;

/// Payment token units per whole coin; bid amounts in tests are written as fractions of it.
pub const COIN: i128 = 10_000_000;
pub const STARTING_BALANCE: i128 = 100 * COIN;

pub struct TestContext {
    pub env: Env,
    pub client: AuctionRegistryClient<'static>,
    pub registry: Address,
    pub admin: Address,
    pub beneficiary: Address,
    pub bidder1: Address,
    pub bidder2: Address,
    pub bidder3: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub asset: StellarAssetContract,
    pub item: MockItemClient<'static>,
    pub reward: MockRewardClient<'static>,
    pub allow_list: MockAllowListClient<'static>,
}

impl TestContext {
    /// Parameters of the auction most tests run: one day, 10% raise,
    /// ten minute extension, no minimum, item minted at settlement.
    pub fn generic_params(&self) -> AuctionParams {
        AuctionParams {
            duration: ONE_DAY,
            bid_increase_bps: 1000,
            bid_time_extension: TEN_MINUTES,
            min_bid: 0,
            item_id: 0,
            beneficiary: self.beneficiary.clone(),
            item_contract: self.item.address.clone(),
            reward_contract: None,
            allow_list_contract: None,
            item_exists: false,
        }
    }

    pub fn create_generic_auction(&self) -> u64 {
        self.client.create(&self.admin, &self.generic_params())
    }

    pub fn balance(&self, id: &Address) -> i128 {
        self.token.balance(id)
    }

    /// Topics and data of the events published by the registry itself,
    /// oldest first.
    pub fn registry_events(&self) -> Vec<(Vec<Val>, Val)> {
        let mut published = Vec::new(&self.env);
        for (contract, topics, data) in self.env.events().all().iter() {
            if contract == self.registry {
                published.push_back((topics, data));
            }
        }
        published
    }
}

pub fn setup_uninitialized() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    set_time(&env, START_TIME);

    let registry = env.register(AuctionRegistry, ());
    let client = AuctionRegistryClient::new(&env, &registry);

    let admin = Address::generate(&env);
    let beneficiary = Address::generate(&env);
    let bidder1 = Address::generate(&env);
    let bidder2 = Address::generate(&env);
    let bidder3 = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    for bidder in [&bidder1, &bidder2, &bidder3] {
        token_admin_client.mint(bidder, &STARTING_BALANCE);
    }

    let item = MockItemClient::new(&env, &env.register(MockItem, ()));
    let reward = MockRewardClient::new(&env, &env.register(MockReward, ()));
    let allow_list = MockAllowListClient::new(&env, &env.register(MockAllowList, ()));

    TestContext {
        env,
        client,
        registry,
        admin,
        beneficiary,
        bidder1,
        bidder2,
        bidder3,
        token: token_client,
        token_admin: token_admin_client,
        asset: token_contract,
        item,
        reward,
        allow_list,
    }
}

pub fn setup_test() -> TestContext {
    let ctx = setup_uninitialized();
    ctx.client.initialize(&ctx.admin, &ctx.token.address);
    ctx
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().set(LedgerInfo {
        timestamp,
        protocol_version: 23,
        sequence_number: env.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 10,
        min_persistent_entry_ttl: 10,
        max_entry_ttl: 3110400,
    });
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    set_time(env, env.ledger().timestamp() + seconds);
}
