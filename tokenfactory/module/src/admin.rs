use {
    crate::{authorize, reindex, MutableCtx, DENOM_AUTHS, PROPOSALS},
    tokenfactory_types::{
        Action, Addr, DenomId, EvtAdminClaimed, EvtAdminDisabled, EvtAdminProposed,
        EvtMetadataAdminUpdated, FactoryError, FactoryEvent, FactoryResult, ProposedDenomAuth,
    },
};

/// Propose new admins for a denom. Replaces any earlier proposal.
///
/// Neither the admin record nor the index is touched until the proposal is
/// claimed.
pub fn propose_denom_admin(
    ctx: MutableCtx,
    denom: DenomId,
    bank_admin: Addr,
    metadata_admin: Option<Addr>,
) -> FactoryResult<()> {
    let auth = authorize(ctx.storage, &denom, Action::Bank, &ctx.sender)?;

    if auth.bank_admin() == Some(&bank_admin) {
        return Err(FactoryError::DuplicateBankAdminProposal { denom, bank_admin });
    }

    let proposal = ProposedDenomAuth {
        denom: denom.clone(),
        bank_admin,
        metadata_admin,
    };

    PROPOSALS.save(ctx.storage, &denom, &proposal)?;

    tracing::info!(
        denom = denom.to_string(),
        bank_admin = bank_admin.to_string(),
        metadata_admin = ?metadata_admin,
        "Proposed denom admin"
    );

    ctx.events.emit(FactoryEvent::AdminProposed(EvtAdminProposed {
        denom,
        bank_admin,
        metadata_admin,
    }));

    Ok(())
}

/// Accept a pending proposal. Only the proposed bank admin may do this, and
/// only while the denom's bank rights haven't been disabled.
pub fn claim_denom_admin(ctx: MutableCtx, denom: DenomId) -> FactoryResult<()> {
    let proposal = PROPOSALS
        .may_load(ctx.storage, &denom)?
        .ok_or_else(|| FactoryError::NoAdminProposal {
            denom: denom.clone(),
        })?;

    if ctx.sender != proposal.bank_admin {
        return Err(FactoryError::unauthorized(
            ctx.sender,
            format!("not the proposed bank admin of {denom}"),
        ));
    }

    let current = DENOM_AUTHS
        .may_load(ctx.storage, &denom)?
        .ok_or_else(|| FactoryError::DenomAuthNotFound {
            denom: denom.clone(),
        })?;

    if current.is_locked() {
        return Err(FactoryError::DenomLocked { denom });
    }

    let new = proposal.into_denom_auth();

    DENOM_AUTHS.save(ctx.storage, &denom, &new)?;
    PROPOSALS.remove(ctx.storage, &denom);
    reindex(ctx.storage, Some(&current), &new)?;

    tracing::info!(
        denom = denom.to_string(),
        bank_admin = ctx.sender.to_string(),
        "Claimed denom admin"
    );

    ctx.events.emit(FactoryEvent::AdminClaimed(EvtAdminClaimed {
        denom,
        bank_admin: ctx.sender,
        metadata_admin: new.metadata_admin().copied(),
    }));

    Ok(())
}

/// Permanently give up a denom's bank rights.
///
/// A pending proposal is left in place, but can no longer be claimed.
pub fn disable_denom_admin(ctx: MutableCtx, denom: DenomId) -> FactoryResult<()> {
    let current = authorize(ctx.storage, &denom, Action::Bank, &ctx.sender)?;
    let new = current.clone().lock();

    DENOM_AUTHS.save(ctx.storage, &denom, &new)?;
    reindex(ctx.storage, Some(&current), &new)?;

    tracing::info!(
        denom = denom.to_string(),
        former_bank_admin = ctx.sender.to_string(),
        "Disabled denom admin"
    );

    ctx.events.emit(FactoryEvent::AdminDisabled(EvtAdminDisabled {
        denom,
        former_bank_admin: ctx.sender,
    }));

    Ok(())
}

/// Change a denom's metadata admin.
///
/// Either admin may call this. Once bank rights are disabled, this is the only
/// way left to hand over the denom's metadata.
pub fn update_denom_metadata_admin(
    ctx: MutableCtx,
    denom: DenomId,
    metadata_admin: Option<Addr>,
) -> FactoryResult<()> {
    let current = authorize(ctx.storage, &denom, Action::Metadata, &ctx.sender)?;
    let new = current.clone().with_metadata_admin(metadata_admin);

    DENOM_AUTHS.save(ctx.storage, &denom, &new)?;
    reindex(ctx.storage, Some(&current), &new)?;

    tracing::info!(
        denom = denom.to_string(),
        metadata_admin = ?metadata_admin,
        "Updated metadata admin"
    );

    ctx.events
        .emit(FactoryEvent::MetadataAdminUpdated(EvtMetadataAdminUpdated {
            denom,
            metadata_admin,
        }));

    Ok(())
}
