multiversx_sc::imports!();

use crate::errors::ERROR_PROPOSAL_NOT_FOUND;
use crate::types::{Proposal, ProposalStatus};

/// Proposal storage. Ids start at 1 and are never reused; records are
/// never removed.
#[multiversx_sc::module]
pub trait ProposalRegistryModule:
    crate::stake_ledger::StakeLedgerModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: createProposal
    // The creator is always the recipient of the payout.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        title: ManagedBuffer,
        summary: ManagedBuffer,
        amount: BigUint,
        justification: ManagedBuffer,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_eligible(&caller);

        let proposal_id = self.proposal_count().get() + 1u64;
        let timestamp = self.blockchain().get_block_timestamp();

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            title,
            summary,
            amount,
            justification,
            recipient: caller.clone(),
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            status: ProposalStatus::Open,
            created_at: timestamp,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.proposal_created_event(proposal_id, &caller, &proposal.amount, timestamp);

        proposal_id
    }

    fn load_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERROR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.load_proposal(proposal_id)
    }

    #[view(proposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        // ids 1..=proposal_count are all populated, records are never removed
        for id in start..=end {
            result.push(self.proposals(id).get());
        }
        result
    }

    #[view(getOpenProposals)]
    fn get_open_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();

        for id in 1..=total {
            let proposal = self.proposals(id).get();
            if !proposal.is_finalized() {
                result.push(proposal);
            }
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;
}
