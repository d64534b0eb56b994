use {
    crate::{authorize, ImmutableCtx, MutableCtx, DENOMS},
    tokenfactory_math::{IsZero, Uint256},
    tokenfactory_types::{
        Action, Addr, Coin, Denom, DenomId, DenomStats, EvtBurned, EvtMinted,
        EvtMintingCapUpdated, FactoryError, FactoryEvent, FactoryResult,
    },
};

pub fn mint(
    ctx: MutableCtx,
    denom: DenomId,
    amount: Uint256,
    recipient: Addr,
) -> FactoryResult<()> {
    if amount.is_zero() {
        return Err(FactoryError::invalid_request("mint amount must be non-zero"));
    }

    let mut record = DENOMS
        .may_load(ctx.storage, &denom)?
        .ok_or_else(|| FactoryError::KeyNotFound {
            denom: denom.clone(),
        })?;

    authorize(ctx.storage, &denom, Action::Bank, &ctx.sender)?;

    let new_minted = record.minted.checked_add(amount)?;
    if new_minted > record.minting_cap {
        return Err(FactoryError::invalid_request(format!(
            "minting {amount} of {denom} would exceed the minting cap: minted {}, cap {}",
            record.minted, record.minting_cap
        )));
    }

    let collector = ctx.collector()?;
    let coin = Coin::new(denom.clone(), amount);

    // The two steps are not atomic on their own. If the transfer fails, the
    // error aborts the whole transaction and the host discards the mint.
    ctx.ledger.mint(&collector, &coin)?;
    ctx.ledger.transfer_from_collector(&collector, &recipient, &coin)?;

    record.minted = new_minted;
    DENOMS.save(ctx.storage, &denom, &record)?;

    let total_supply = ctx.ledger.get_supply(&denom);

    tracing::info!(
        denom = denom.to_string(),
        amount = amount.to_string(),
        recipient = recipient.to_string(),
        minted = new_minted.to_string(),
        "Minted tokens"
    );

    ctx.events.emit(FactoryEvent::Minted(EvtMinted {
        denom,
        amount,
        recipient,
        minted: new_minted,
        total_supply,
    }));

    Ok(())
}

/// Burn tokens from the sender's balance.
///
/// Any denom the sender holds may be burned. Only factory denoms are required
/// to have a record; `minted` is left untouched either way.
pub fn burn(ctx: MutableCtx, denom: DenomId, amount: Uint256) -> FactoryResult<()> {
    if amount.is_zero() {
        return Err(FactoryError::invalid_request("burn amount must be non-zero"));
    }

    if denom.is_factory() && !DENOMS.has(ctx.storage, &denom) {
        return Err(FactoryError::KeyNotFound { denom });
    }

    let balance = ctx.ledger.get_balance(&ctx.sender, &denom);
    if balance < amount {
        return Err(FactoryError::InsufficientFunds {
            denom,
            required: amount,
            available: balance,
        });
    }

    let collector = ctx.collector()?;
    let coin = Coin::new(denom.clone(), amount);

    ctx.ledger
        .transfer_to_collector(&ctx.sender, &collector, &coin)?;
    ctx.ledger.burn(&collector, &coin)?;

    let total_supply = ctx.ledger.get_supply(&denom);

    tracing::info!(
        denom = denom.to_string(),
        amount = amount.to_string(),
        burner = ctx.sender.to_string(),
        "Burned tokens"
    );

    ctx.events.emit(FactoryEvent::Burned(EvtBurned {
        denom,
        amount,
        burner: ctx.sender,
        total_supply,
    }));

    Ok(())
}

/// Replace a denom's minting cap.
///
/// Checks happen in a fixed order: the denom must exist, its cap must still
/// be changeable, the new cap must cover what's been minted, and only then is
/// the signer's authorization considered.
pub fn update_minting_cap(
    ctx: MutableCtx,
    denom: DenomId,
    minting_cap: Uint256,
    can_change_minting_cap: bool,
) -> FactoryResult<()> {
    let mut record = DENOMS
        .may_load(ctx.storage, &denom)?
        .ok_or_else(|| FactoryError::DenomDoesNotExist {
            denom: denom.clone(),
        })?;

    if !record.can_change_minting_cap {
        return Err(FactoryError::CannotChangeMintingCap { denom });
    }

    if minting_cap < record.minted {
        return Err(FactoryError::InvalidMintingCap {
            denom,
            minting_cap,
            minted: record.minted,
        });
    }

    if minting_cap.is_zero() {
        return Err(FactoryError::invalid_request("minting cap must be non-zero"));
    }

    authorize(ctx.storage, &denom, Action::Bank, &ctx.sender)?;

    record.minting_cap = minting_cap;
    record.can_change_minting_cap = can_change_minting_cap;
    DENOMS.save(ctx.storage, &denom, &record)?;

    tracing::info!(
        denom = denom.to_string(),
        minting_cap = minting_cap.to_string(),
        can_change_minting_cap,
        "Updated minting cap"
    );

    ctx.events
        .emit(FactoryEvent::MintingCapUpdated(EvtMintingCapUpdated {
            denom,
            minting_cap,
            can_change_minting_cap,
        }));

    Ok(())
}

pub fn calculate_stats(ctx: ImmutableCtx, denom: &DenomId) -> FactoryResult<DenomStats> {
    let record = DENOMS
        .may_load(ctx.storage, denom)?
        .ok_or_else(|| FactoryError::DenomDoesNotExist {
            denom: denom.clone(),
        })?;

    let total_supply = ctx.ledger.get_supply(denom);

    Ok(compute_stats(&record, total_supply))
}

/// Derive supply figures from a denom's record.
///
/// Bridging can make the ledger supply exceed `minted` for a while, so both
/// subtractions clamp at zero.
pub fn compute_stats(record: &Denom, total_supply: Uint256) -> DenomStats {
    let total_burned = record.minted.saturating_sub(total_supply);
    let max_remaining_supply = record.minting_cap.saturating_sub(total_burned);

    DenomStats {
        total_burned,
        max_remaining_supply,
        total_supply,
    }
}

// ----------------------------------- tests -----------------------------------
