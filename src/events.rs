multiversx_sc::imports!();

use crate::types::GovernancePolicy;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] staker: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_stake: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(&self, #[indexed] staker: &ManagedAddress, amount: &BigUint);

    #[event("donation")]
    fn donation_event(
        &self,
        #[indexed] donor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        treasury_balance: &BigUint,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] amount: &BigUint,
        created_at: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("proposalApproved")]
    fn proposal_approved_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] votes_for: &BigUint,
        votes_against: &BigUint,
    );

    #[event("proposalRejected")]
    fn proposal_rejected_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] votes_for: &BigUint,
        votes_against: &BigUint,
    );

    #[event("treasuryDisbursed")]
    fn treasury_disbursed_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] amount: &BigUint,
        treasury_balance: &BigUint,
    );

    #[event("governancePolicyChanged")]
    fn governance_policy_changed_event(
        &self,
        #[indexed] changed_by: &ManagedAddress,
        policy: &GovernancePolicy<Self::Api>,
    );
}
