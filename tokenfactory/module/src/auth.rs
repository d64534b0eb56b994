use {
    crate::DENOM_AUTHS,
    tokenfactory_storage::Storage,
    tokenfactory_types::{Action, Addr, DenomAuth, DenomId, FactoryError, FactoryResult},
};

/// Check whether `signer` may perform `action` on `denom`. Read-only.
///
/// On success, returns the denom's current admin record so that the caller
/// doesn't have to load it again.
pub fn authorize(
    storage: &dyn Storage,
    denom: &DenomId,
    action: Action,
    signer: &Addr,
) -> FactoryResult<DenomAuth> {
    let auth = DENOM_AUTHS
        .may_load(storage, denom)?
        .ok_or_else(|| FactoryError::DenomAuthNotFound {
            denom: denom.clone(),
        })?;

    if let Err(err) = auth.authorize(action, signer) {
        tracing::debug!(
            denom = denom.to_string(),
            action = action.to_string(),
            signer = signer.to_string(),
            err = err.to_string(),
            "Authorization rejected"
        );

        return Err(err);
    }

    Ok(auth)
}
