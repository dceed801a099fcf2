#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod errors;
pub mod events;
pub mod execution;
pub mod proposal_lifecycle;
pub mod quorum;
pub mod storage;
pub mod types;
pub mod views;
pub mod vote_tally;
pub mod weight_ledger;
pub mod weighted_governance_proxy;

// ============================================================
// Constants
// ============================================================

/// Voting window: 24 hours in seconds
pub const VOTING_PERIOD: u64 = 86_400;

/// Turnout must reach 20% of total weight (rounded up) AND yes > no
pub const QUORUM_PERCENTAGE: u64 = 20;

pub const PERCENT_DENOMINATOR: u64 = 100;

// ============================================================
// Contract
// ============================================================

/// Weighted-voting governance with a single active proposal.
///
/// Participants deposit EGLD for weight, one proposal is open at a time,
/// votes are weighted by the voter's balance at voting time, and anyone
/// may execute once the window closes.
#[multiversx_sc::contract]
pub trait WeightedGovernance:
    storage::StorageModule
    + events::EventsModule
    + admin::AdminModule
    + weight_ledger::WeightLedgerModule
    + proposal_lifecycle::ProposalLifecycleModule
    + vote_tally::VoteTallyModule
    + execution::ExecutionModule
    + views::ViewsModule
{
    /// Deploy leaves the contract uninitialized; `initialize` picks the owner.
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}
}
