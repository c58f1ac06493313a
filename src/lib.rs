#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod proposals;
pub mod settlement;
pub mod stake_ledger;
pub mod treasury;
pub mod types;
pub mod voting;

use errors::{ERROR_INVALID_POLICY, ERROR_UNAUTHORIZED};
use settlement::SettlementRule;
use types::GovernancePolicy;

// ============================================================
// Contract
// Stakers lock EGLD to gain a vote, propose payouts to
// themselves and settle them against a donated treasury.
// At every point: contract balance == total staked + treasury.
// ============================================================

#[multiversx_sc::contract]
pub trait StakeDao:
    stake_ledger::StakeLedgerModule
    + treasury::TreasuryModule
    + proposals::ProposalRegistryModule
    + voting::VotingModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, opt_policy: OptionalValue<GovernancePolicy<Self::Api>>) {
        let policy = match opt_policy {
            OptionalValue::Some(policy) => policy,
            OptionalValue::None => GovernancePolicy::default(),
        };
        require!(policy.rule.is_valid(), ERROR_INVALID_POLICY);

        let deployer = self.blockchain().get_caller();
        self.owner_address().set(&deployer);
        self.governance_policy().set(&policy);
        self.proposal_count().set(0u64);
        self.total_staked().set(BigUint::zero());
        self.treasury_balance().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setGovernancePolicy (owner only)
    // Applies to open proposals from their next vote or
    // finalization on.
    // ========================================================

    #[endpoint(setGovernancePolicy)]
    fn set_governance_policy(&self, policy: GovernancePolicy<Self::Api>) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner_address().get(), ERROR_UNAUTHORIZED);
        require!(policy.rule.is_valid(), ERROR_INVALID_POLICY);

        self.governance_policy().set(&policy);
        self.governance_policy_changed_event(&caller, &policy);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(owner)]
    fn owner(&self) -> ManagedAddress {
        self.owner_address().get()
    }

    /// Everything the contract accounts for. Matches its EGLD balance.
    #[view(getTotalHeld)]
    fn get_total_held(&self) -> BigUint {
        self.total_staked().get() + self.treasury_balance().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("owner")]
    fn owner_address(&self) -> SingleValueMapper<ManagedAddress>;
}
