multiversx_sc::imports!();

use crate::errors::{ERROR_ALREADY_FINALIZED, ERROR_DUPLICATE_VOTE, ERROR_VOTING_PERIOD_ACTIVE};
use crate::settlement::{Outcome, SettlementRule};
use crate::types::{GovernancePolicy, Proposal, ProposalStatus, VoteRecord, VoteWeighting};

/// Records votes, keeps the tallies and settles proposals against the
/// treasury. The only writer of `votes_for`, `votes_against` and `status`.
#[multiversx_sc::module]
pub trait VotingModule:
    crate::stake_ledger::StakeLedgerModule
    + crate::treasury::TreasuryModule
    + crate::proposals::ProposalRegistryModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: vote
    // One record per (proposal, voter). Weight follows the
    // configured weighting.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        let stake = self.require_eligible(&caller);

        let mut proposal = self.load_proposal(proposal_id);
        require!(!proposal.is_finalized(), ERROR_ALREADY_FINALIZED);
        require!(
            self.vote_records(proposal_id, &caller).is_empty(),
            ERROR_DUPLICATE_VOTE
        );

        let policy = self.governance_policy().get();
        let weight = match policy.weighting {
            VoteWeighting::OnePerStaker => BigUint::from(1u64),
            VoteWeighting::StakeWeighted => stake,
        };

        if support {
            proposal.votes_for += &weight;
        } else {
            proposal.votes_against += &weight;
        }

        self.vote_records(proposal_id, &caller).set(VoteRecord {
            support,
            weight: weight.clone(),
        });
        self.vote_event(proposal_id, &caller, support, &weight);

        if policy.auto_settle {
            let undecided = self.undecided_weight(proposal_id, policy.weighting);
            let early = policy.rule.early_outcome(
                &proposal.votes_for,
                &proposal.votes_against,
                &undecided,
            );
            if let Some(outcome) = early {
                // An approval the treasury cannot pay yet stays open.
                if outcome == Outcome::Rejected
                    || self.treasury_balance().get() >= proposal.amount
                {
                    self.settle(proposal, outcome);
                    return;
                }
            }
        }

        self.proposals(proposal_id).set(&proposal);
    }

    // ========================================================
    // ENDPOINT: finalizeProposal
    // Anyone may close an open proposal once the minimum voting
    // period has passed.
    // ========================================================

    #[endpoint(finalizeProposal)]
    fn finalize_proposal(&self, proposal_id: u64) -> ProposalStatus {
        let proposal = self.load_proposal(proposal_id);
        require!(!proposal.is_finalized(), ERROR_ALREADY_FINALIZED);

        let policy = self.governance_policy().get();
        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= proposal
                .created_at
                .saturating_add(policy.min_voting_period),
            ERROR_VOTING_PERIOD_ACTIVE
        );

        let outcome = policy
            .rule
            .settle(&proposal.votes_for, &proposal.votes_against);
        self.settle(proposal, outcome)
    }

    // ========================================================
    // INTERNAL: settlement
    // Terminal transition. The payout, when there is one, is
    // the last thing that happens.
    // ========================================================

    fn settle(&self, proposal: Proposal<Self::Api>, outcome: Outcome) -> ProposalStatus {
        let mut proposal = proposal;
        if outcome == Outcome::Approved {
            self.require_treasury_covers(&proposal.amount);
        }

        proposal.status = outcome.into();
        self.proposals(proposal.id).set(&proposal);

        match outcome {
            Outcome::Approved => {
                self.proposal_approved_event(
                    proposal.id,
                    &proposal.votes_for,
                    &proposal.votes_against,
                );
                self.disburse(&proposal.amount, &proposal.recipient);
            },
            Outcome::Rejected => {
                self.proposal_rejected_event(
                    proposal.id,
                    &proposal.votes_for,
                    &proposal.votes_against,
                );
            },
        }

        proposal.status
    }

    // ========================================================
    // INTERNAL: undecided weight
    // Weight of current stakers with no record on this proposal.
    // Tallies of voters who have since withdrawn stay cast and
    // are not counted again here.
    // ========================================================

    fn undecided_weight(&self, proposal_id: u64, weighting: VoteWeighting) -> BigUint {
        let mut undecided_voters = 0u64;
        let mut undecided_stake = BigUint::zero();

        for staker in self.stakers().iter() {
            if !self.vote_records(proposal_id, &staker).is_empty() {
                continue;
            }
            undecided_voters += 1;
            if weighting == VoteWeighting::StakeWeighted {
                undecided_stake += &self.stakes(&staker).get();
            }
        }

        match weighting {
            VoteWeighting::OnePerStaker => BigUint::from(undecided_voters),
            VoteWeighting::StakeWeighted => undecided_stake,
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, voter: ManagedAddress) -> bool {
        !self.vote_records(proposal_id, &voter).is_empty()
    }

    #[view(getVote)]
    fn get_vote(
        &self,
        proposal_id: u64,
        voter: ManagedAddress,
    ) -> OptionalValue<VoteRecord<Self::Api>> {
        let record = self.vote_records(proposal_id, &voter);
        if record.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(record.get())
        }
    }

    #[view(getGovernancePolicy)]
    fn get_governance_policy(&self) -> GovernancePolicy<Self::Api> {
        self.governance_policy().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("voteRecords")]
    fn vote_records(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoteRecord<Self::Api>>;

    #[storage_mapper("governancePolicy")]
    fn governance_policy(&self) -> SingleValueMapper<GovernancePolicy<Self::Api>>;
}
