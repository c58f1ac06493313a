multiversx_sc::imports!();

use crate::types::{ProposalStatus, ResolutionRule};

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Outcome {
    Approved,
    Rejected,
}

impl From<Outcome> for ProposalStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Approved => ProposalStatus::Approved,
            Outcome::Rejected => ProposalStatus::Rejected,
        }
    }
}

/// Decision function over a proposal's tallies.
pub trait SettlementRule<M: ManagedTypeApi> {
    /// Verdict when voting is closed with the tallies as they stand.
    fn settle(&self, votes_for: &BigUint<M>, votes_against: &BigUint<M>) -> Outcome;

    fn is_valid(&self) -> bool;

    /// Verdict that no split of the `undecided` weight (eligible, not yet
    /// voted) can overturn. `None` while undecided. Requires a rule where
    /// extra votes for never turn an approval into a rejection.
    fn early_outcome(
        &self,
        votes_for: &BigUint<M>,
        votes_against: &BigUint<M>,
        undecided: &BigUint<M>,
    ) -> Option<Outcome> {
        let all_for = votes_for + undecided;
        if self.settle(&all_for, votes_against) == Outcome::Rejected {
            return Some(Outcome::Rejected);
        }

        // abstaining lowers turnout, voting against lowers the margin
        let all_against = votes_against + undecided;
        if self.settle(votes_for, votes_against) == Outcome::Approved
            && self.settle(votes_for, &all_against) == Outcome::Approved
        {
            Some(Outcome::Approved)
        } else {
            None
        }
    }
}

impl<M: ManagedTypeApi> SettlementRule<M> for ResolutionRule<M> {
    fn settle(&self, votes_for: &BigUint<M>, votes_against: &BigUint<M>) -> Outcome {
        let majority = votes_for > votes_against;
        let approved = match self {
            ResolutionRule::SimpleMajority => majority,
            ResolutionRule::Quorum { min_turnout } => {
                let turnout = votes_for + votes_against;
                majority && &turnout >= min_turnout
            },
            ResolutionRule::Supermajority { approval_bps } => {
                let turnout = votes_for + votes_against;
                majority && votes_for * BPS_DENOMINATOR >= &turnout * *approval_bps
            },
        };

        if approved {
            Outcome::Approved
        } else {
            Outcome::Rejected
        }
    }

    fn is_valid(&self) -> bool {
        match self {
            ResolutionRule::SimpleMajority | ResolutionRule::Quorum { .. } => true,
            ResolutionRule::Supermajority { approval_bps } => {
                *approval_bps > BPS_DENOMINATOR / 2 && *approval_bps <= BPS_DENOMINATOR
            },
        }
    }
}
