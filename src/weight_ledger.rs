multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_WEIGHT, ERR_TRANSFER_FAILED, ERR_ZERO_AMOUNT};

/// Weight is 1:1 with the EGLD a participant leaves in custody.
#[multiversx_sc::module]
pub trait WeightLedgerModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: acquireWeight
    // The attached EGLD is credited as weight. No cap.
    // ========================================================

    #[endpoint(acquireWeight)]
    #[payable("EGLD")]
    fn acquire_weight(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let new_weight = self.weight_of(&caller).update(|weight| {
            *weight += &amount;
            weight.clone()
        });
        self.total_voting_weight().update(|total| *total += &amount);

        self.weight_acquired_event(&caller, &amount, &new_weight);
    }

    // ========================================================
    // ENDPOINT: releaseWeight
    // Returns the caller's entire custodied value and zeroes
    // their weight. Ledger effects land before the payout.
    // ========================================================

    #[endpoint(releaseWeight)]
    fn release_weight(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.weight_of(&caller).get();
        require!(amount > 0u64, ERR_INSUFFICIENT_WEIGHT);

        // Only possible after an emergency drain.
        let custodied = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(custodied >= amount, ERR_TRANSFER_FAILED);

        self.weight_of(&caller).clear();
        self.total_voting_weight().update(|total| *total -= &amount);

        self.send().direct_egld(&caller, &amount);
        self.weight_released_event(&caller, &amount);
    }
}
