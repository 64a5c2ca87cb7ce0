#![allow(dead_code)]

use fixed_rate_asset::FixedRateAsset;
use multiversx_sc::types::Address;
use multiversx_sc_scenario::{
    managed_address, managed_biguint, managed_buffer, rust_biguint, whitebox_legacy::*, DebugApi,
};
use mutual_fund::membership::MembershipModule;
use mutual_fund::proposals::ProposalsModule;
use mutual_fund::types::ProposalRequest;
use mutual_fund::MutualFund;

pub const FUND_WASM_PATH: &str = "output/mutual-fund.wasm";
pub const ASSET_WASM_PATH: &str = "fixed-rate-asset/output/fixed-rate-asset.wasm";

pub const VOTING_PERIOD: u64 = 2 * 60 * 60;
pub const GRACE_PERIOD: u64 = 60 * 60;
pub const EXPIRY_PERIOD: u64 = 5 * 24 * 60 * 60;

pub const GENESIS_TIMESTAMP: u64 = 1_000_000;
pub const ACCOUNT_BALANCE: u64 = 1_000_000;
pub const ASSET_RESERVE: u64 = 10_000;
/// One unit is worth one EGLD at this price.
pub const PAR_PRICE: u64 = 1_000;

pub struct FundSetup<FundBuilder, AssetBuilder>
where
    FundBuilder: 'static + Copy + Fn() -> mutual_fund::ContractObj<DebugApi>,
    AssetBuilder: 'static + Copy + Fn() -> fixed_rate_asset::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub founder: Address,
    pub member1: Address,
    pub member2: Address,
    pub now: u64,
    pub fund_wrapper: ContractObjWrapper<mutual_fund::ContractObj<DebugApi>, FundBuilder>,
    pub asset_wrapper: ContractObjWrapper<fixed_rate_asset::ContractObj<DebugApi>, AssetBuilder>,
    pub asset2_wrapper: ContractObjWrapper<fixed_rate_asset::ContractObj<DebugApi>, AssetBuilder>,
}

pub fn setup_fund<FundBuilder, AssetBuilder>(
    fund_builder: FundBuilder,
    asset_builder: AssetBuilder,
) -> FundSetup<FundBuilder, AssetBuilder>
where
    FundBuilder: 'static + Copy + Fn() -> mutual_fund::ContractObj<DebugApi>,
    AssetBuilder: 'static + Copy + Fn() -> fixed_rate_asset::ContractObj<DebugApi>,
{
    let rust_zero = rust_biguint!(0u64);
    let mut b_mock = BlockchainStateWrapper::new();
    b_mock.set_block_timestamp(GENESIS_TIMESTAMP);

    let founder = b_mock.create_user_account(&rust_biguint!(ACCOUNT_BALANCE));
    let member1 = b_mock.create_user_account(&rust_biguint!(ACCOUNT_BALANCE));
    let member2 = b_mock.create_user_account(&rust_biguint!(ACCOUNT_BALANCE));

    let fund_wrapper =
        b_mock.create_sc_account(&rust_zero, Some(&founder), fund_builder, FUND_WASM_PATH);
    b_mock
        .execute_tx(&founder, &fund_wrapper, &rust_zero, |sc| {
            sc.init(
                VOTING_PERIOD,
                GRACE_PERIOD,
                EXPIRY_PERIOD,
                managed_buffer!(b"admin"),
            );
        })
        .assert_ok();

    let fund_address = fund_wrapper.address_ref().clone();
    let mut deploy_asset = |name: &'static [u8]| {
        let wrapper = b_mock.create_sc_account(
            &rust_biguint!(ASSET_RESERVE),
            Some(&founder),
            asset_builder,
            ASSET_WASM_PATH,
        );
        b_mock
            .execute_tx(&founder, &wrapper, &rust_zero, |sc| {
                sc.init(
                    managed_buffer!(name),
                    managed_biguint!(PAR_PRICE),
                    managed_address!(&fund_address),
                );
            })
            .assert_ok();
        wrapper
    };
    let asset_wrapper = deploy_asset(b"GOLD");
    let asset2_wrapper = deploy_asset(b"SILVER");

    FundSetup {
        b_mock,
        founder,
        member1,
        member2,
        now: GENESIS_TIMESTAMP,
        fund_wrapper,
        asset_wrapper,
        asset2_wrapper,
    }
}

impl<FundBuilder, AssetBuilder> FundSetup<FundBuilder, AssetBuilder>
where
    FundBuilder: 'static + Copy + Fn() -> mutual_fund::ContractObj<DebugApi>,
    AssetBuilder: 'static + Copy + Fn() -> fixed_rate_asset::ContractObj<DebugApi>,
{
    pub fn fund_address(&self) -> Address {
        self.fund_wrapper.address_ref().clone()
    }

    pub fn asset_address(&self) -> Address {
        self.asset_wrapper.address_ref().clone()
    }

    pub fn asset2_address(&self) -> Address {
        self.asset2_wrapper.address_ref().clone()
    }

    pub fn advance(&mut self, seconds: u64) {
        self.now += seconds;
        self.b_mock.set_block_timestamp(self.now);
    }

    // ── Transactions ──

    pub fn submit<F>(&mut self, from: &Address, request: F) -> u64
    where
        F: FnOnce() -> ProposalRequest<DebugApi>,
    {
        let mut proposal_id = 0u64;
        self.b_mock
            .execute_tx(from, &self.fund_wrapper, &rust_biguint!(0u64), |sc| {
                proposal_id = sc.submit_proposal(request());
            })
            .assert_ok();
        proposal_id
    }

    pub fn submit_expect_err<F>(&mut self, from: &Address, request: F, message: &str)
    where
        F: FnOnce() -> ProposalRequest<DebugApi>,
    {
        self.b_mock
            .execute_tx(from, &self.fund_wrapper, &rust_biguint!(0u64), |sc| {
                let _ = sc.submit_proposal(request());
            })
            .assert_user_error(message);
    }

    pub fn vote(&mut self, from: &Address, proposal_id: u64, support: bool) {
        self.b_mock
            .execute_tx(from, &self.fund_wrapper, &rust_biguint!(0u64), |sc| {
                sc.vote(proposal_id, support);
            })
            .assert_ok();
    }

    pub fn vote_expect_err(
        &mut self,
        from: &Address,
        proposal_id: u64,
        support: bool,
        message: &str,
    ) {
        self.b_mock
            .execute_tx(from, &self.fund_wrapper, &rust_biguint!(0u64), |sc| {
                sc.vote(proposal_id, support);
            })
            .assert_user_error(message);
    }

    pub fn execute(&mut self, from: &Address, proposal_id: u64, value: u64) {
        self.b_mock
            .execute_tx(from, &self.fund_wrapper, &rust_biguint!(value), |sc| {
                sc.execute_proposal(proposal_id);
            })
            .assert_ok();
    }

    pub fn execute_expect_err(
        &mut self,
        from: &Address,
        proposal_id: u64,
        value: u64,
        message: &str,
    ) {
        self.b_mock
            .execute_tx(from, &self.fund_wrapper, &rust_biguint!(value), |sc| {
                sc.execute_proposal(proposal_id);
            })
            .assert_user_error(message);
    }

    pub fn exit(&mut self, from: &Address, percent: u64) -> u64 {
        let mut returned = 0u64;
        self.b_mock
            .execute_tx(from, &self.fund_wrapper, &rust_biguint!(0u64), |sc| {
                returned = sc.exit(percent).to_u64().unwrap();
            })
            .assert_ok();
        returned
    }

    pub fn exit_expect_err(&mut self, from: &Address, percent: u64, message: &str) {
        self.b_mock
            .execute_tx(from, &self.fund_wrapper, &rust_biguint!(0u64), |sc| {
                let _ = sc.exit(percent);
            })
            .assert_user_error(message);
    }

    // ── Composite flows ──

    /// Works whenever the author's proposal is approved by everyone
    /// else, e.g. a sole founder.
    pub fn deposit(&mut self, from: &Address, amount: u64) {
        let proposal_id = self.submit(from, || ProposalRequest::DepositFunds {
            amount: managed_biguint!(amount),
        });
        self.execute(from, proposal_id, amount);
    }

    pub fn add_member(&mut self, name: &'static [u8], address: &Address) {
        let founder = self.founder.clone();
        let address = address.clone();
        let proposal_id = self.submit(&founder, || ProposalRequest::AddMember {
            name: managed_buffer!(name),
            address: managed_address!(&address),
        });
        self.execute(&founder, proposal_id, 0);
    }

    pub fn add_asset(&mut self) {
        let asset = self.asset_address();
        self.register(&asset);
    }

    pub fn register(&mut self, asset: &Address) {
        let founder = self.founder.clone();
        let asset = asset.clone();
        let proposal_id = self.submit(&founder, || ProposalRequest::AddAsset {
            asset: managed_address!(&asset),
        });
        self.execute(&founder, proposal_id, 0);
    }

    pub fn set_asset_price(&mut self, price: u64) {
        let founder = self.founder.clone();
        self.b_mock
            .execute_tx(&founder, &self.asset_wrapper, &rust_biguint!(0u64), |sc| {
                sc.set_price(managed_biguint!(price));
            })
            .assert_ok();
    }

    pub fn set_asset2_price(&mut self, price: u64) {
        let founder = self.founder.clone();
        self.b_mock
            .execute_tx(&founder, &self.asset2_wrapper, &rust_biguint!(0u64), |sc| {
                sc.set_price(managed_biguint!(price));
            })
            .assert_ok();
    }

    // ── Queries ──

    pub fn check_member_balance(&mut self, address: &Address, expected: u64) {
        self.b_mock
            .execute_query(&self.fund_wrapper, |sc| {
                let member = sc.get_member(managed_address!(address));
                assert_eq!(member.balance, managed_biguint!(expected));
            })
            .assert_ok();
    }

    pub fn member_count(&mut self) -> usize {
        let mut count = 0;
        self.b_mock
            .execute_query(&self.fund_wrapper, |sc| {
                count = sc.members().len();
            })
            .assert_ok();
        count
    }

    pub fn proposal_count(&mut self) -> usize {
        let mut count = 0;
        self.b_mock
            .execute_query(&self.fund_wrapper, |sc| {
                count = sc.pending_proposals().len();
            })
            .assert_ok();
        count
    }

    pub fn check_egld(&self, address: &Address, expected: u64) {
        self.b_mock.check_egld_balance(address, &rust_biguint!(expected));
    }
}
