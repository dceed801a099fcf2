multiversx_sc::imports!();

/// One event per successful state transition. Rejected calls emit nothing.
#[multiversx_sc::module]
pub trait EventsModule {
    #[event("initialized")]
    fn initialized_event(&self, #[indexed] owner: &ManagedAddress);

    #[event("weightAcquired")]
    fn weight_acquired_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_weight: &BigUint,
    );

    #[event("weightReleased")]
    fn weight_released_event(&self, #[indexed] participant: &ManagedAddress, amount: &BigUint);

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] start_time: u64,
        end_time: u64,
    );

    #[event("metadataSet")]
    fn metadata_set_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        payload: &ManagedBuffer,
    );

    #[event("voted")]
    fn voted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] passed: bool,
        #[indexed] yes_weight: &BigUint,
        #[indexed] no_weight: &BigUint,
        quorum_threshold: &BigUint,
    );

    #[event("proposalCancelled")]
    fn proposal_cancelled_event(&self, #[indexed] proposal_id: u64, #[indexed] caller: &ManagedAddress);

    #[event("emergencyDrained")]
    fn emergency_drained_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);
}
