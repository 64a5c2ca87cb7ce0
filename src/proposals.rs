multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{Proposal, ProposalRequest, Vote};

// ============================================================
// Proposal store: pending proposals in submission order,
// keyed by a monotonically increasing id.
// ============================================================

#[multiversx_sc::module]
pub trait ProposalsModule {
    fn now(&self) -> u64 {
        self.blockchain().get_block_timestamp()
    }

    fn insert_proposal(
        &self,
        author: &ManagedAddress,
        request: ProposalRequest<Self::Api>,
    ) -> Proposal<Self::Api> {
        let proposal_id = self.last_proposal_id().get() + 1u64;

        let proposal = Proposal {
            id: proposal_id,
            created_at: self.now(),
            author: author.clone(),
            request,
            votes: ManagedVec::new(),
        };

        self.proposals(proposal_id).set(&proposal);
        self.pending_proposals().insert(proposal_id);
        self.last_proposal_id().set(proposal_id);

        proposal
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            self.pending_proposals().contains(&proposal_id),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    fn record_vote(&self, proposal_id: u64, member: &ManagedAddress, support: bool) {
        let mut proposal = self.require_proposal(proposal_id);
        require!(proposal.vote_of(member).is_none(), ERR_ALREADY_VOTED);

        proposal.votes.push(Vote {
            member: member.clone(),
            support,
        });
        self.proposals(proposal_id).set(&proposal);
    }

    fn remove_proposal(&self, proposal_id: u64) {
        require!(
            self.pending_proposals().remove(&proposal_id),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).clear();
    }

    /// Removes every proposal older than `expiry_period` and returns their ids.
    fn take_expired(&self, now: u64, expiry_period: u64) -> ManagedVec<Self::Api, u64> {
        let mut expired = ManagedVec::new();
        for proposal_id in self.pending_proposals().iter() {
            let created_at = self.proposals(proposal_id).get().created_at;
            if now > created_at.saturating_add(expiry_period) {
                expired.push(proposal_id);
            }
        }

        for proposal_id in expired.iter() {
            self.remove_proposal(proposal_id);
        }
        expired
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposals)]
    fn get_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for proposal_id in self.pending_proposals().iter() {
            result.push(self.proposals(proposal_id).get());
        }
        result
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("lastProposalId")]
    fn last_proposal_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("pendingProposals")]
    fn pending_proposals(&self) -> SetMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;
}
