multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal — the single active governance record
// ============================================================

/// The proposal occupying the active slot. Its presence in storage is the
/// existence flag: the slot is cleared on execution and on cancellation.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub start_time: u64,
    /// `start_time + VOTING_PERIOD`. Voting is open on `[start_time, end_time)`.
    pub end_time: u64,
    pub yes_weight: BigUint<M>,
    pub no_weight: BigUint<M>,
    /// Always false in storage: execution clears the slot in the same call
    /// and records a `ProposalOutcome` instead.
    pub executed: bool,
    /// Opaque reference to the off-chain proposal text. Empty until set.
    pub metadata: ManagedBuffer<M>,
}

// ============================================================
// Outcome — what execution decided, kept after the slot clears
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ProposalOutcome<M: ManagedTypeApi> {
    pub proposal_id: u64,
    pub yes_weight: BigUint<M>,
    pub no_weight: BigUint<M>,
    pub quorum_threshold: BigUint<M>,
    pub passed: bool,
    pub executed_at: u64,
}
