multiversx_sc::imports!();

use crate::types::{Proposal, ProposalOutcome};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Administration ──

    /// Empty until `initialize`; never overwritten afterwards.
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Weight ledger ──

    #[storage_mapper("weightOf")]
    fn weight_of(&self, participant: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Always equal to the sum of every `weightOf` entry.
    #[storage_mapper("totalVotingWeight")]
    fn total_voting_weight(&self) -> SingleValueMapper<BigUint>;

    // ── Proposals ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("activeProposal")]
    fn active_proposal(&self) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalOutcome")]
    fn proposal_outcome(&self, proposal_id: u64) -> SingleValueMapper<ProposalOutcome<Self::Api>>;

    // ── Per-vote records, written once per (proposal, voter) ──

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("weightUsed")]
    fn weight_used(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
