multiversx_sc::imports!();

use crate::errors::{ERROR_INSUFFICIENT_STAKE, ERROR_NOT_ELIGIBLE, ERROR_ZERO_AMOUNT};

/// Per-address EGLD stake. A positive stake is what makes an address
/// eligible to propose and vote.
#[multiversx_sc::module]
pub trait StakeLedgerModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: deposit
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);

        self.stakes(&caller).update(|stake| *stake += &amount);
        self.total_staked().update(|total| *total += &amount);
        self.stakers().insert(caller.clone());

        let new_stake = self.stakes(&caller).get();
        self.deposit_event(&caller, &amount, &new_stake);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Always the full stake. Storage is cleared before the
    // transfer so a re-entrant call finds nothing to take.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.stakes(&caller).get();
        require!(amount > 0u64, ERROR_INSUFFICIENT_STAKE);

        self.stakes(&caller).clear();
        self.total_staked().update(|total| *total -= &amount);
        self.stakers().swap_remove(&caller);
        self.withdraw_event(&caller, &amount);

        self.send().direct_egld(&caller, &amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_eligible(&self, address: &ManagedAddress) -> BigUint {
        let stake = self.stakes(address).get();
        require!(stake > 0u64, ERROR_NOT_ELIGIBLE);
        stake
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(stakeOf)]
    fn stake_of(&self, address: ManagedAddress) -> BigUint {
        self.stakes(&address).get()
    }

    #[view(isEligible)]
    fn is_eligible(&self, address: ManagedAddress) -> bool {
        self.stakes(&address).get() > 0u64
    }

    #[view(getTotalStaked)]
    fn get_total_staked(&self) -> BigUint {
        self.total_staked().get()
    }

    #[view(getStakerCount)]
    fn get_staker_count(&self) -> u64 {
        self.stakers().len() as u64
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("stakes")]
    fn stakes(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("stakers")]
    fn stakers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
