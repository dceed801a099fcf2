multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_VOTED, ERR_INSUFFICIENT_WEIGHT, ERR_NO_ACTIVE_PROPOSAL, ERR_VOTING_NOT_OPEN,
};

#[multiversx_sc::module]
pub trait VoteTallyModule: crate::storage::StorageModule + crate::events::EventsModule {
    #[endpoint(castVoteYes)]
    fn cast_vote_yes(&self) {
        self.cast_vote(true);
    }

    #[endpoint(castVoteNo)]
    fn cast_vote_no(&self) {
        self.cast_vote(false);
    }

    /// Counts the caller's current weight once for the active proposal.
    /// The weight is stored with the vote, so later deposits or releases
    /// never touch a tally already counted.
    fn cast_vote(&self, support: bool) {
        require!(!self.active_proposal().is_empty(), ERR_NO_ACTIVE_PROPOSAL);

        let mut proposal = self.active_proposal().get();
        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= proposal.start_time && now < proposal.end_time,
            ERR_VOTING_NOT_OPEN
        );

        let caller = self.blockchain().get_caller();
        require!(
            !self.has_voted(proposal.id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        let weight = self.weight_of(&caller).get();
        require!(weight > 0u64, ERR_INSUFFICIENT_WEIGHT);

        self.has_voted(proposal.id, &caller).set(true);
        self.weight_used(proposal.id, &caller).set(&weight);

        if support {
            proposal.yes_weight += &weight;
        } else {
            proposal.no_weight += &weight;
        }
        self.active_proposal().set(&proposal);

        self.voted_event(proposal.id, &caller, support, &weight);
    }
}
