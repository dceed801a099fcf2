multiversx_sc::imports!();

use crate::{
    errors::{
        ERR_ALREADY_EXECUTED, ERR_NO_ACTIVE_PROPOSAL, ERR_PROPOSAL_ALREADY_ACTIVE,
        ERR_UNAUTHORIZED,
    },
    types::Proposal,
    VOTING_PERIOD,
};

#[multiversx_sc::module]
pub trait ProposalLifecycleModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::admin::AdminModule
{
    // ========================================================
    // ENDPOINT: createProposal
    // Opens the next proposal. A proposal whose window has closed
    // without execution is overwritten: its tally is dropped and it
    // never produces an outcome.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self) -> u64 {
        self.require_initialized();

        let now = self.blockchain().get_block_timestamp();
        if !self.active_proposal().is_empty() {
            let active = self.active_proposal().get();
            require!(now >= active.end_time, ERR_PROPOSAL_ALREADY_ACTIVE);
        }

        let caller = self.blockchain().get_caller();
        let proposal_id = self.proposal_count().get() + 1u64;
        let end_time = now + VOTING_PERIOD;

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            start_time: now,
            end_time,
            yes_weight: BigUint::zero(),
            no_weight: BigUint::zero(),
            executed: false,
            metadata: ManagedBuffer::new(),
        };

        self.active_proposal().set(&proposal);
        self.proposal_count().set(proposal_id);

        self.proposal_created_event(proposal_id, &caller, now, end_time);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: setMetadata
    // Proposer only. An empty payload leaves the stored reference
    // as it was.
    // ========================================================

    #[endpoint(setMetadata)]
    fn set_metadata(&self, payload: ManagedBuffer) {
        require!(!self.active_proposal().is_empty(), ERR_NO_ACTIVE_PROPOSAL);

        let caller = self.blockchain().get_caller();
        let mut proposal = self.active_proposal().get();
        require!(proposal.proposer == caller, ERR_UNAUTHORIZED);

        if payload.is_empty() {
            return;
        }

        proposal.metadata = payload;
        self.active_proposal().set(&proposal);

        self.metadata_set_event(proposal.id, &caller, &proposal.metadata);
    }

    // ========================================================
    // ENDPOINT: cancelProposal
    // Proposer or owner. Clears the slot without an outcome.
    // ========================================================

    #[endpoint(cancelProposal)]
    fn cancel_proposal(&self) {
        require!(!self.active_proposal().is_empty(), ERR_NO_ACTIVE_PROPOSAL);

        let proposal = self.active_proposal().get();
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);

        let caller = self.blockchain().get_caller();
        require!(
            proposal.proposer == caller || self.is_owner(&caller),
            ERR_UNAUTHORIZED
        );

        self.active_proposal().clear();

        self.proposal_cancelled_event(proposal.id, &caller);
    }
}
