multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("newProposal")]
    fn new_proposal_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] author: &ManagedAddress,
        created_at: u64,
    );

    #[event("newVote")]
    fn new_vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] member: &ManagedAddress,
        #[indexed] support: bool,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: u64);

    /// Emitted by the expiry sweep, once per removed proposal.
    #[event("proposalDropped")]
    fn proposal_dropped_event(&self, #[indexed] proposal_id: u64);

    #[event("exit")]
    fn exit_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] percent: u64,
        amount_returned: &BigUint,
    );
}
