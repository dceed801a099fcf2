multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_INITIALIZED, ERR_NOT_INITIALIZED, ERR_UNAUTHORIZED};

#[multiversx_sc::module]
pub trait AdminModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: initialize
    // One-time. The first caller becomes the owner.
    // ========================================================

    #[endpoint(initialize)]
    fn initialize(&self) {
        require!(self.owner().is_empty(), ERR_ALREADY_INITIALIZED);

        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);

        self.initialized_event(&caller);
    }

    // ========================================================
    // ENDPOINT: emergencyDrain
    // Sweeps the whole custodied balance to the owner.
    //
    // WARNING: weightOf and totalVotingWeight are left untouched, so
    // after a drain every recorded weight is unbacked and releaseWeight
    // fails with "Transfer failed" until value is returned. Participants
    // must trust the owner not to call this.
    // ========================================================

    #[endpoint(emergencyDrain)]
    fn emergency_drain(&self) {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        if balance > 0u64 {
            self.send().direct_egld(&caller, &balance);
        }

        self.emergency_drained_event(&caller, &balance);
    }

    fn require_initialized(&self) {
        require!(!self.owner().is_empty(), ERR_NOT_INITIALIZED);
    }

    fn require_owner(&self, caller: &ManagedAddress) {
        let owner = self.owner();
        require!(!owner.is_empty(), ERR_NOT_INITIALIZED);
        require!(&owner.get() == caller, ERR_UNAUTHORIZED);
    }

    fn is_owner(&self, caller: &ManagedAddress) -> bool {
        let owner = self.owner();
        !owner.is_empty() && &owner.get() == caller
    }
}
