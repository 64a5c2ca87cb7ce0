#![no_std]

multiversx_sc::imports!();

pub mod asset_proxy;
pub mod assets;
pub mod errors;
pub mod events;
pub mod governance;
pub mod membership;
pub mod proposals;
pub mod treasury;
pub mod types;

use errors::*;
use types::{Configuration, ProposalRequest};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait MutualFund:
    membership::MembershipModule
    + assets::AssetsModule
    + proposals::ProposalsModule
    + governance::GovernanceModule
    + treasury::TreasuryModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // The deployer becomes the founder, with an empty balance.
    // ========================================================

    #[init]
    fn init(
        &self,
        voting_period: u64,
        grace_period: u64,
        proposal_expiry_period: u64,
        founder_name: ManagedBuffer,
    ) {
        require!(
            voting_period.checked_add(grace_period).is_some(),
            ERR_ARITHMETIC_OVERFLOW
        );

        let founder = self.blockchain().get_caller();
        self.configuration().set(Configuration {
            voting_period,
            grace_period,
            proposal_expiry_period,
            founder_name: founder_name.clone(),
        });
        self.total_balance().set(BigUint::zero());
        self.last_proposal_id().set(0u64);
        self.add_member(&founder_name, &founder);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: submitProposal
    // ========================================================

    #[endpoint(submitProposal)]
    fn submit_proposal(&self, request: ProposalRequest<Self::Api>) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);
        self.validate_request(&request);

        let proposal = self.insert_proposal(&caller, request);
        self.new_proposal_event(proposal.id, &caller, proposal.created_at);

        proposal.id
    }

    // ========================================================
    // ENDPOINT: vote
    // Weight is not fixed here: the tally reads the voter's
    // balance whenever the proposal is evaluated.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let proposal = self.require_proposal(proposal_id);
        require!(!self.is_expired(&proposal), ERR_PROPOSAL_EXPIRED);
        require!(self.voting_is_open(&proposal), ERR_VOTING_PERIOD_PASSED);

        self.record_vote(proposal_id, &caller, support);
        self.new_vote_event(proposal_id, &caller, support);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Anyone may trigger execution once the proposal is
    // executable. Deposits must be paid by their author.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        let proposal = self.require_proposal(proposal_id);
        if let Some(reason) = self.proposal_state(&proposal).blocking_reason() {
            sc_panic!(reason);
        }
        self.require_payment_matches(&proposal, &caller, &payment);

        // Gone before any effect or adapter call, so it cannot run twice.
        self.remove_proposal(proposal_id);
        self.apply_request(&proposal);

        self.proposal_executed_event(proposal_id);
    }

    // ========================================================
    // ENDPOINT: exit
    // Market-adjusted withdrawal of `percent` of the caller's
    // share of the whole treasury.
    // ========================================================

    #[endpoint(exit)]
    fn exit(&self, percent: u64) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let member_balance = self.member_balance(&caller).get();
        let burned = self.exit_share_units(&member_balance, percent);
        let native_payout = self.native_exit_share(&burned);
        let liquidations = self.asset_exit_shares(&burned);

        // ── Ledger first, transfers after ──
        self.burn_exit_share(&caller, &burned, percent);

        let mut amount_returned = native_payout.clone();
        if native_payout > 0u64 {
            self.send().direct_egld(&caller, &native_payout);
        }
        for liquidation in liquidations.iter() {
            amount_returned +=
                self.swap_out_of_asset(&liquidation.asset, &liquidation.units, &caller);
        }

        self.exit_event(&caller, percent, &amount_returned);
        amount_returned
    }

    // ========================================================
    // ENDPOINT: dropExpiredProposals
    // Maintenance, callable by anyone.
    // ========================================================

    #[endpoint(dropExpiredProposals)]
    fn drop_expired_proposals(&self) -> u64 {
        let expiry_period = self.configuration().get().proposal_expiry_period;
        let dropped = self.take_expired(self.now(), expiry_period);

        for proposal_id in dropped.iter() {
            self.proposal_dropped_event(proposal_id);
        }
        dropped.len() as u64
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(canExecuteProposal)]
    fn can_execute_proposal(&self, proposal_id: u64) -> MultiValue2<bool, ManagedBuffer> {
        let proposal = self.require_proposal(proposal_id);
        match self.proposal_state(&proposal).blocking_reason() {
            Some(reason) => (false, ManagedBuffer::from(reason)).into(),
            None => (true, ManagedBuffer::new()).into(),
        }
    }

    #[view(getConfiguration)]
    fn get_configuration(&self) -> Configuration<Self::Api> {
        self.configuration().get()
    }
}
