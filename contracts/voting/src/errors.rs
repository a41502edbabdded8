use soroban_sdk::contracterror;

/// The error codes for the contract.
#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VotingError {
    // Default errors to align with built-in contract
    InternalError = 1,
    AlreadyInitializedError = 3,

    UnauthorizedError = 4,

    // Voting Errors
    InvalidThresholdError = 200,
    NoOpChangeError = 201,
    NoVotingPowerError = 202,
    ProposalNotFoundError = 203,
    VotingClosedError = 204,
    CannotExecuteError = 205,
    ExecutionFailureError = 206,
    InvalidSettingsError = 207,
    SnapshotOpenError = 208,
}
