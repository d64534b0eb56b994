use {
    crate::{Addr, DenomId},
    strum_macros::Display,
    tokenfactory_math::{MathError, Uint256},
    tokenfactory_storage::StdError,
};

/// Coarse grouping of [`FactoryError`]s.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorClass {
    NotFound,
    Authorization,
    Validation,
    State,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactoryError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Math(#[from] MathError),

    // -------------------------------- not found --------------------------------
    #[error("denom auth not found: {denom}")]
    DenomAuthNotFound { denom: DenomId },

    #[error("denom does not exist: {denom}")]
    DenomDoesNotExist { denom: DenomId },

    #[error("denom not found: {denom}")]
    DenomNotFound { denom: DenomId },

    #[error("no admin proposal for denom: {denom}")]
    NoAdminProposal { denom: DenomId },

    #[error("key not found: {denom}")]
    KeyNotFound { denom: DenomId },

    // ------------------------------ authorization ------------------------------
    #[error("unauthorized! signer: {signer}, reason: {reason}")]
    Unauthorized { signer: Addr, reason: String },

    #[error("denom is locked: {denom}")]
    DenomLocked { denom: DenomId },

    // -------------------------------- validation -------------------------------
    #[error("invalid denom `{denom}`: {reason}")]
    InvalidDenom { denom: String, reason: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("bank admin {bank_admin} is already the bank admin of denom {denom}")]
    DuplicateBankAdminProposal { denom: DenomId, bank_admin: Addr },

    #[error("invalid minting cap for {denom}: cap {minting_cap} is less than minted {minted}")]
    InvalidMintingCap {
        denom: DenomId,
        minting_cap: Uint256,
        minted: Uint256,
    },

    #[error("minting cap of denom {denom} can no longer be changed")]
    CannotChangeMintingCap { denom: DenomId },

    #[error("insufficient funds of {denom}: required {required}, available {available}")]
    InsufficientFunds {
        denom: DenomId,
        required: Uint256,
        available: Uint256,
    },

    // ---------------------------------- state ----------------------------------
    #[error("denom already exists: {denom}")]
    DenomExists { denom: DenomId },
}

impl FactoryError {
    pub fn unauthorized<R>(signer: Addr, reason: R) -> Self
    where
        R: ToString,
    {
        Self::Unauthorized {
            signer,
            reason: reason.to_string(),
        }
    }

    pub fn invalid_denom<D, R>(denom: D, reason: R) -> Self
    where
        D: ToString,
        R: ToString,
    {
        Self::InvalidDenom {
            denom: denom.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_request<R>(reason: R) -> Self
    where
        R: ToString,
    {
        Self::InvalidRequest(reason.to_string())
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            FactoryError::DenomAuthNotFound { .. }
            | FactoryError::DenomDoesNotExist { .. }
            | FactoryError::DenomNotFound { .. }
            | FactoryError::NoAdminProposal { .. }
            | FactoryError::KeyNotFound { .. } => ErrorClass::NotFound,
            FactoryError::Unauthorized { .. } | FactoryError::DenomLocked { .. } => {
                ErrorClass::Authorization
            },
            FactoryError::InvalidDenom { .. }
            | FactoryError::InvalidRequest(_)
            | FactoryError::DuplicateBankAdminProposal { .. }
            | FactoryError::InvalidMintingCap { .. }
            | FactoryError::CannotChangeMintingCap { .. }
            | FactoryError::InsufficientFunds { .. } => ErrorClass::Validation,
            FactoryError::DenomExists { .. } => ErrorClass::State,
            FactoryError::Std(_) | FactoryError::Math(_) => ErrorClass::Internal,
        }
    }
}

pub type FactoryResult<T> = core::result::Result<T, FactoryError>;

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    fn denom() -> DenomId {
        DenomId::new_unchecked(["factory", "0x00000000000000000000000000000000000000aa", "foo"])
    }

    #[test_case(FactoryError::DenomAuthNotFound { denom: denom() } => ErrorClass::NotFound)]
    #[test_case(FactoryError::KeyNotFound { denom: denom() } => ErrorClass::NotFound)]
    #[test_case(FactoryError::DenomLocked { denom: denom() } => ErrorClass::Authorization)]
    #[test_case(FactoryError::unauthorized(Addr::mock(1), "x") => ErrorClass::Authorization)]
    #[test_case(FactoryError::invalid_request("zero amount") => ErrorClass::Validation)]
    #[test_case(FactoryError::CannotChangeMintingCap { denom: denom() } => ErrorClass::Validation)]
    #[test_case(FactoryError::DenomExists { denom: denom() } => ErrorClass::State)]
    #[test_case(FactoryError::Std(StdError::host("boom")) => ErrorClass::Internal)]
    fn classes(err: FactoryError) -> ErrorClass {
        err.class()
    }

    #[test]
    fn insufficient_funds_states_balance() {
        let err = FactoryError::InsufficientFunds {
            denom: denom(),
            required: Uint256::new_from_u128(50),
            available: Uint256::new_from_u128(7),
        };

        assert!(err.to_string().contains("available 7"));
    }
}
