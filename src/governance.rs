multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{Configuration, Proposal, ProposalRequest};
use crate::{assets, membership, proposals};

// ============================================================
// Derived proposal state. Never stored: always recomputed from
// the clock, the votes and the current membership.
// ============================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    /// Past the expiry period. Takes precedence over every other state.
    Expired,
    /// Turnout incomplete and the voting/grace window still open.
    Voting,
    /// Some member dissented; execution waits out the grace period.
    AwaitingGrace,
    /// Grace period over and dissent outweighs support.
    Rejected,
    Executable,
}

impl ProposalState {
    /// Fault message for any state that blocks execution.
    pub fn blocking_reason(self) -> Option<&'static str> {
        match self {
            ProposalState::Expired => Some(ERR_PROPOSAL_EXPIRED),
            ProposalState::Voting => Some(ERR_VOTING_IN_PROGRESS),
            ProposalState::AwaitingGrace => Some(ERR_GRACE_IN_PROGRESS),
            ProposalState::Rejected => Some(ERR_PROPOSAL_REJECTED),
            ProposalState::Executable => None,
        }
    }
}

/// Votes of the current members, weighted by their balances.
pub struct Tally<M: ManagedTypeApi> {
    pub support: BigUint<M>,
    pub dissent: BigUint<M>,
    pub dissenters: usize,
    pub missing: usize,
    pub members: usize,
}

impl<M: ManagedTypeApi> Tally<M> {
    pub fn new() -> Self {
        Tally {
            support: BigUint::zero(),
            dissent: BigUint::zero(),
            dissenters: 0,
            missing: 0,
            members: 0,
        }
    }

    pub fn count(&mut self, weight: &BigUint<M>, vote: Option<bool>) {
        self.members += 1;
        match vote {
            Some(true) => self.support += weight,
            Some(false) => {
                self.dissent += weight;
                self.dissenters += 1;
            }
            None => self.missing += 1,
        }
    }

    /// An empty membership never agrees on anything.
    pub fn is_unanimous(&self) -> bool {
        self.members > 0 && self.missing == 0 && self.dissenters == 0
    }
}

impl<M: ManagedTypeApi> Default for Tally<M> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn evaluate<M: ManagedTypeApi>(
    created_at: u64,
    now: u64,
    config: &Configuration<M>,
    tally: &Tally<M>,
) -> ProposalState {
    if now > created_at.saturating_add(config.proposal_expiry_period) {
        return ProposalState::Expired;
    }

    // Everyone agreed: no need to wait for the deadline.
    if tally.is_unanimous() {
        return ProposalState::Executable;
    }

    let grace_end = created_at
        .saturating_add(config.voting_period)
        .saturating_add(config.grace_period);
    if now <= grace_end {
        return if tally.dissenters > 0 {
            ProposalState::AwaitingGrace
        } else {
            ProposalState::Voting
        };
    }

    if tally.dissent > tally.support {
        ProposalState::Rejected
    } else {
        ProposalState::Executable
    }
}

#[multiversx_sc::module]
pub trait GovernanceModule:
    membership::MembershipModule + assets::AssetsModule + proposals::ProposalsModule
{
    /// Members that have not voted abstain, except the author who
    /// implicitly supports their own proposal.
    fn tally(&self, proposal: &Proposal<Self::Api>) -> Tally<Self::Api> {
        let mut tally = Tally::new();
        for member in self.members().iter() {
            let vote = match proposal.vote_of(&member) {
                Some(support) => Some(support),
                None if member == proposal.author => Some(true),
                None => None,
            };
            tally.count(&self.member_balance(&member).get(), vote);
        }
        tally
    }

    fn proposal_state(&self, proposal: &Proposal<Self::Api>) -> ProposalState {
        let tally = self.tally(proposal);
        evaluate(
            proposal.created_at,
            self.now(),
            &self.configuration().get(),
            &tally,
        )
    }

    fn voting_is_open(&self, proposal: &Proposal<Self::Api>) -> bool {
        let voting_period = self.configuration().get().voting_period;
        self.now() <= proposal.created_at.saturating_add(voting_period)
    }

    fn is_expired(&self, proposal: &Proposal<Self::Api>) -> bool {
        let expiry_period = self.configuration().get().proposal_expiry_period;
        self.now() > proposal.created_at.saturating_add(expiry_period)
    }

    // ========================================================
    // Request validation (submission time)
    // ========================================================

    fn validate_request(&self, request: &ProposalRequest<Self::Api>) {
        match request {
            ProposalRequest::DepositFunds { amount } => {
                require!(*amount > 0u64, ERR_ZERO_AMOUNT);
            }
            ProposalRequest::AddAsset { asset } => {
                self.require_asset_registrable(asset);
            }
            ProposalRequest::Swap { amount, from, to } => {
                self.validate_swap(amount, from, to);
            }
            ProposalRequest::AddMember { address, .. } => {
                require!(!self.members().contains(address), ERR_MEMBER_EXISTS);
            }
            ProposalRequest::KickMember { address } => {
                self.require_member_exists(address);
            }
            ProposalRequest::ChangeVotingPeriod { seconds } => {
                let grace_period = self.configuration().get().grace_period;
                self.require_window_fits(*seconds, grace_period);
            }
            ProposalRequest::ChangeGracePeriod { seconds } => {
                let voting_period = self.configuration().get().voting_period;
                self.require_window_fits(voting_period, *seconds);
            }
        }
    }

    fn validate_swap(&self, amount: &BigUint, from: &ManagedAddress, to: &ManagedAddress) {
        require!(*amount > 0u64, ERR_ZERO_AMOUNT);
        require!(from != to, ERR_SWAP_SAME_ASSET);
        self.require_known_holding(from);
        self.require_known_holding(to);
        require!(
            amount <= &self.holding_balance(from),
            ERR_AMOUNT_EXCEEDS_BALANCE
        );
    }

    /// A proposal created now must be able to reach the end of its
    /// voting and grace window without overflowing the clock.
    fn require_window_fits(&self, voting_period: u64, grace_period: u64) {
        let window_end = self
            .now()
            .checked_add(voting_period)
            .and_then(|end| end.checked_add(grace_period));
        require!(window_end.is_some(), ERR_ARITHMETIC_OVERFLOW);
    }

    // ========================================================
    // Effects (execution time)
    // ========================================================

    fn require_payment_matches(
        &self,
        proposal: &Proposal<Self::Api>,
        caller: &ManagedAddress,
        payment: &BigUint,
    ) {
        match &proposal.request {
            ProposalRequest::DepositFunds { amount } => {
                require!(caller == &proposal.author, ERR_ONLY_AUTHOR_DEPOSITS);
                self.require_member_exists(&proposal.author);
                require!(payment == amount, ERR_WRONG_DEPOSIT);
            }
            _ => require!(*payment == 0u64, ERR_UNEXPECTED_PAYMENT),
        }
    }

    /// The proposal must already be removed from the store.
    fn apply_request(&self, proposal: &Proposal<Self::Api>) {
        match &proposal.request {
            ProposalRequest::DepositFunds { amount } => {
                self.credit_member(&proposal.author, amount);
            }
            ProposalRequest::AddAsset { asset } => {
                self.register_asset(asset);
            }
            ProposalRequest::Swap { amount, from, to } => {
                self.validate_swap(amount, from, to);
                self.execute_swap(amount, from, to);
            }
            ProposalRequest::AddMember { name, address } => {
                self.add_member(name, address);
            }
            ProposalRequest::KickMember { address } => {
                self.kick_member(address);
            }
            ProposalRequest::ChangeVotingPeriod { seconds } => {
                self.configuration().update(|config| config.voting_period = *seconds);
            }
            ProposalRequest::ChangeGracePeriod { seconds } => {
                self.configuration().update(|config| config.grace_period = *seconds);
            }
        }
    }

    fn execute_swap(&self, amount: &BigUint, from: &ManagedAddress, to: &ManagedAddress) {
        let fund = self.blockchain().get_sc_address();

        let native_amount = if self.is_native(from) {
            amount.clone()
        } else {
            self.swap_out_of_asset(from, amount, &fund)
        };

        if !self.is_native(to) && native_amount > 0u64 {
            self.swap_into_asset(to, &native_amount);
        }
    }

    /// Kicked members get back their recorded balance, not a share of
    /// the current treasury value.
    fn kick_member(&self, address: &ManagedAddress) {
        self.require_member_exists(address);
        let balance = self.member_balance(address).get();
        require!(balance <= self.native_balance(), ERR_INSUFFICIENT_NATIVE);

        self.remove_member(address);

        if balance > 0u64 {
            self.send().direct_egld(address, &balance);
        }
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("configuration")]
    fn configuration(&self) -> SingleValueMapper<Configuration<Self::Api>>;
}
