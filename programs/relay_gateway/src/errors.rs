use anchor_lang::prelude::*;

#[error_code]
pub enum GatewayError {
    #[msg("Caller is not authorized for this operation")]
    Unauthorized,

    #[msg("Entry not found")]
    NotFound,

    #[msg("Entry already exists")]
    AlreadyExists,

    #[msg("Invalid arguments")]
    ValidationError,

    #[msg("Registry is at capacity")]
    RegistryFull,

    #[msg("Destination chain is not supported")]
    ChainNotSupported,

    #[msg("Message type is not supported by the destination chain")]
    TypeNotSupported,

    #[msg("Payment does not match the configured fee")]
    IncorrectFee,

    #[msg("Message id already processed or stale")]
    StaleOrDuplicateMessage,

    #[msg("Insufficient treasury balance")]
    InsufficientBalance,

    #[msg("Fund transfer failed")]
    TransferFailed,

    #[msg("Reentrant call")]
    ReentrantCall,
}
