// Every message below is signalled as a user error (status 4). The VM
// discards all storage writes of the failing call.

pub const ERR_ALREADY_INITIALIZED: &str = "Already initialized";
pub const ERR_NOT_INITIALIZED: &str = "Not initialized";
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_PROPOSAL_ALREADY_ACTIVE: &str = "Proposal already active";
pub const ERR_NO_ACTIVE_PROPOSAL: &str = "No active proposal";
pub const ERR_VOTING_NOT_OPEN: &str = "Voting is not open";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_INSUFFICIENT_WEIGHT: &str = "Insufficient weight";
pub const ERR_ALREADY_EXECUTED: &str = "Proposal already executed";
pub const ERR_VOTING_PERIOD_NOT_ENDED: &str = "Voting period has not ended";
pub const ERR_TRANSFER_FAILED: &str = "Transfer failed";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be greater than zero";
