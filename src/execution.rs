multiversx_sc::imports!();

use crate::{
    errors::{ERR_ALREADY_EXECUTED, ERR_NO_ACTIVE_PROPOSAL, ERR_VOTING_PERIOD_NOT_ENDED},
    quorum,
    types::ProposalOutcome,
};

#[multiversx_sc::module]
pub trait ExecutionModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: executeProposal
    // Permissionless once the window has closed. Quorum is taken
    // against the total weight at the moment of execution, not a
    // snapshot, so weight deposited after voting closed still
    // raises the bar.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self) -> bool {
        require!(!self.active_proposal().is_empty(), ERR_NO_ACTIVE_PROPOSAL);

        let proposal = self.active_proposal().get();
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);

        let now = self.blockchain().get_block_timestamp();
        require!(now >= proposal.end_time, ERR_VOTING_PERIOD_NOT_ENDED);

        let total_weight = self.total_voting_weight().get();
        let threshold = quorum::quorum_threshold(&total_weight);
        let passed = quorum::is_passed(&proposal.yes_weight, &proposal.no_weight, &threshold);

        // The outcome record is the persisted "executed" mark; the slot
        // itself is cleared below.
        self.proposal_outcome(proposal.id).set(ProposalOutcome {
            proposal_id: proposal.id,
            yes_weight: proposal.yes_weight.clone(),
            no_weight: proposal.no_weight.clone(),
            quorum_threshold: threshold.clone(),
            passed,
            executed_at: now,
        });

        self.proposal_executed_event(
            proposal.id,
            passed,
            &proposal.yes_weight,
            &proposal.no_weight,
            &threshold,
        );

        self.active_proposal().clear();

        passed
    }
}
