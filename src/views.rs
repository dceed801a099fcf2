multiversx_sc::imports!();

use crate::{
    quorum,
    types::{Proposal, ProposalOutcome},
    QUORUM_PERCENTAGE, VOTING_PERIOD,
};

/// Read-only projections. Every view answers with a zero or empty value
/// when no proposal is active instead of failing.
#[multiversx_sc::module]
pub trait ViewsModule: crate::storage::StorageModule {
    // ── Active proposal ──

    #[view(getActiveProposalId)]
    fn get_active_proposal_id(&self) -> u64 {
        if self.active_proposal().is_empty() {
            return 0;
        }
        self.active_proposal().get().id
    }

    #[view(getActiveProposal)]
    fn get_active_proposal(&self) -> OptionalValue<Proposal<Self::Api>> {
        if self.active_proposal().is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.active_proposal().get())
    }

    #[view(getProposalWindow)]
    fn get_proposal_window(&self) -> MultiValue2<u64, u64> {
        if self.active_proposal().is_empty() {
            return (0u64, 0u64).into();
        }
        let proposal = self.active_proposal().get();
        (proposal.start_time, proposal.end_time).into()
    }

    #[view(getTally)]
    fn get_tally(&self) -> MultiValue2<BigUint, BigUint> {
        if self.active_proposal().is_empty() {
            return (BigUint::zero(), BigUint::zero()).into();
        }
        let proposal = self.active_proposal().get();
        (proposal.yes_weight, proposal.no_weight).into()
    }

    #[view(getMetadata)]
    fn get_metadata(&self) -> ManagedBuffer {
        if self.active_proposal().is_empty() {
            return ManagedBuffer::new();
        }
        self.active_proposal().get().metadata
    }

    #[view(getRemainingTime)]
    fn get_remaining_time(&self) -> u64 {
        if self.active_proposal().is_empty() {
            return 0;
        }
        let end_time = self.active_proposal().get().end_time;
        let now = self.blockchain().get_block_timestamp();
        end_time.saturating_sub(now)
    }

    // ── Votes ──

    #[view(hasVoted)]
    fn has_participant_voted(&self, proposal_id: u64, participant: &ManagedAddress) -> bool {
        self.has_voted(proposal_id, participant).get()
    }

    #[view(getWeightUsed)]
    fn get_weight_used(&self, proposal_id: u64, participant: &ManagedAddress) -> BigUint {
        self.weight_used(proposal_id, participant).get()
    }

    #[view(getProposalOutcome)]
    fn get_proposal_outcome(&self, proposal_id: u64) -> OptionalValue<ProposalOutcome<Self::Api>> {
        if self.proposal_outcome(proposal_id).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.proposal_outcome(proposal_id).get())
    }

    // ── Ledger ──

    #[view(getWeight)]
    fn get_weight(&self, participant: &ManagedAddress) -> BigUint {
        self.weight_of(participant).get()
    }

    #[view(getTotalVotingWeight)]
    fn get_total_voting_weight(&self) -> BigUint {
        self.total_voting_weight().get()
    }

    /// The threshold an execution would apply if it ran now.
    #[view(getQuorumThreshold)]
    fn get_quorum_threshold(&self) -> BigUint {
        quorum::quorum_threshold(&self.total_voting_weight().get())
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    // ── Administration ──

    #[view(getOwner)]
    fn get_owner(&self) -> OptionalValue<ManagedAddress> {
        if self.owner().is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.owner().get())
    }

    #[view(isInitialized)]
    fn is_initialized(&self) -> bool {
        !self.owner().is_empty()
    }

    #[view(getGovernanceConfig)]
    fn get_governance_config(&self) -> MultiValue2<u64, u64> {
        (VOTING_PERIOD, QUORUM_PERCENTAGE).into()
    }
}
