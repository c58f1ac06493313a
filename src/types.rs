multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status: lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Accepting votes.
    Open,
    /// Settled in favour. The requested amount was paid out. Terminal.
    Approved,
    /// Settled against. Nothing was paid out. Terminal.
    Rejected,
}

// ============================================================
// Proposal: a request to pay treasury funds to its creator
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub title: ManagedBuffer<M>,
    pub summary: ManagedBuffer<M>,
    pub amount: BigUint<M>,
    pub justification: ManagedBuffer<M>,
    /// Always the proposer.
    pub recipient: ManagedAddress<M>,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
    pub status: ProposalStatus,
    pub created_at: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_finalized(&self) -> bool {
        self.status != ProposalStatus::Open
    }
}

// ============================================================
// Vote Record: one per (proposal, voter), never rewritten
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub support: bool,
    pub weight: BigUint<M>,
}

// ============================================================
// Governance policy: how votes are weighed and settled
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteWeighting {
    /// Every eligible staker casts exactly one vote.
    OnePerStaker,
    /// A vote weighs the caller's stake at the time it is cast.
    StakeWeighted,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ResolutionRule<M: ManagedTypeApi> {
    /// Approved when votes for strictly exceed votes against.
    SimpleMajority,
    /// Simple majority, provided at least `min_turnout` weight was cast.
    Quorum { min_turnout: BigUint<M> },
    /// Votes for must reach `approval_bps` basis points of the cast weight.
    Supermajority { approval_bps: u64 },
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct GovernancePolicy<M: ManagedTypeApi> {
    pub weighting: VoteWeighting,
    pub rule: ResolutionRule<M>,
    /// Settle inside `vote` as soon as the outcome can no longer change.
    pub auto_settle: bool,
    /// Seconds after creation before `finalizeProposal` is accepted.
    pub min_voting_period: u64,
}

impl<M: ManagedTypeApi> Default for GovernancePolicy<M> {
    fn default() -> Self {
        GovernancePolicy {
            weighting: VoteWeighting::OnePerStaker,
            rule: ResolutionRule::SimpleMajority,
            auto_settle: false,
            min_voting_period: 0,
        }
    }
}
