multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Member: one entry of the membership ledger
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug)]
pub struct Member<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub addr: ManagedAddress<M>,
    /// Share units. Credited 1:1 with the native amount deposited.
    pub balance: BigUint<M>,
}

// ============================================================
// Proposal Request: what a proposal does once executed
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalRequest<M: ManagedTypeApi> {
    /// Author pays `amount` EGLD into the fund when executing.
    DepositFunds { amount: BigUint<M> },
    AddAsset { asset: ManagedAddress<M> },
    /// `amount` is denominated in the unit of `from`.
    /// The fund's own address stands for the native currency.
    Swap {
        amount: BigUint<M>,
        from: ManagedAddress<M>,
        to: ManagedAddress<M>,
    },
    AddMember {
        name: ManagedBuffer<M>,
        address: ManagedAddress<M>,
    },
    KickMember { address: ManagedAddress<M> },
    ChangeVotingPeriod { seconds: u64 },
    ChangeGracePeriod { seconds: u64 },
}

// ============================================================
// Vote: immutable once cast
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug)]
pub struct Vote<M: ManagedTypeApi> {
    pub member: ManagedAddress<M>,
    pub support: bool,
}

// ============================================================
// Proposal: pending governance action
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub created_at: u64,
    pub author: ManagedAddress<M>,
    pub request: ProposalRequest<M>,
    pub votes: ManagedVec<M, Vote<M>>,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn vote_of(&self, member: &ManagedAddress<M>) -> Option<bool> {
        self.votes
            .iter()
            .find(|vote| &vote.member == member)
            .map(|vote| vote.support)
    }
}

// ============================================================
// Configuration: set at genesis
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Configuration<M: ManagedTypeApi> {
    pub voting_period: u64,
    pub grace_period: u64,
    /// Never changes after init.
    pub proposal_expiry_period: u64,
    pub founder_name: ManagedBuffer<M>,
}

// ============================================================
// Asset views and exit bookkeeping
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug)]
pub struct AssetInfo<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    pub name: ManagedBuffer<M>,
    pub value: BigUint<M>,
}

/// Units of one asset to be sold on behalf of an exiting member.
#[derive(ManagedVecItem, Clone, Debug)]
pub struct AssetLiquidation<M: ManagedTypeApi> {
    pub asset: ManagedAddress<M>,
    pub units: BigUint<M>,
}
