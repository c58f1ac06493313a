multiversx_sc::imports!();

use crate::errors::{ERROR_INSUFFICIENT_TREASURY, ERROR_ZERO_AMOUNT};

/// Pooled donations, kept apart from every stake. Only settled
/// proposals draw from it.
#[multiversx_sc::module]
pub trait TreasuryModule: crate::events::EventsModule {
    #[endpoint(donate)]
    #[payable("EGLD")]
    fn donate(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);

        self.treasury_balance().update(|balance| *balance += &amount);

        let balance = self.treasury_balance().get();
        self.donation_event(&caller, &amount, &balance);
    }

    fn require_treasury_covers(&self, amount: &BigUint) {
        require!(
            &self.treasury_balance().get() >= amount,
            ERROR_INSUFFICIENT_TREASURY
        );
    }

    /// Pays `amount` out of the pool. The balance is decremented before
    /// the transfer is issued.
    fn disburse(&self, amount: &BigUint, recipient: &ManagedAddress) {
        self.require_treasury_covers(amount);

        self.treasury_balance().update(|balance| *balance -= amount);
        let balance = self.treasury_balance().get();
        self.treasury_disbursed_event(recipient, amount, &balance);

        if *amount > 0u64 {
            self.send().direct_egld(recipient, amount);
        }
    }

    #[view(getTreasuryBalance)]
    fn get_treasury_balance(&self) -> BigUint {
        self.treasury_balance().get()
    }

    #[storage_mapper("treasuryBalance")]
    fn treasury_balance(&self) -> SingleValueMapper<BigUint>;
}
