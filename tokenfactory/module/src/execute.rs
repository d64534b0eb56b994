use {
    crate::{
        authorize, burn, claim_denom_admin, context::module_address, disable_denom_admin, mint,
        propose_denom_admin, reindex, update_denom_metadata_admin, update_minting_cap,
        AssetLedger, MutableCtx, DENOMS, DENOM_AUTHS, GOVERNANCE_ACCOUNT, PARAMS,
    },
    std::str::FromStr,
    tokenfactory_math::{IsZero, Uint256},
    tokenfactory_types::{
        Action, Coin, Denom, DenomAuth, DenomId, EvtDenomCreated, EvtFeesWithdrawn,
        EvtMetadataUpdated, EvtParamsUpdated, ExecuteMsg, ExecuteResponse, FactoryError,
        FactoryEvent, FactoryResult, Metadata, Params,
    },
};

pub fn execute(ctx: MutableCtx, msg: ExecuteMsg) -> FactoryResult<ExecuteResponse> {
    match msg {
        ExecuteMsg::CreateDenom {
            sub_id,
            minting_cap,
            can_change_minting_cap,
            uri,
            uri_hash,
        } => create_denom(
            ctx,
            &sub_id,
            minting_cap,
            can_change_minting_cap,
            uri,
            uri_hash,
        )
        .map(ExecuteResponse::DenomCreated),
        ExecuteMsg::Mint {
            denom,
            amount,
            recipient,
        } => mint(ctx, denom, amount, recipient).map(|_| ExecuteResponse::None),
        ExecuteMsg::Burn { denom, amount } => {
            burn(ctx, denom, amount).map(|_| ExecuteResponse::None)
        },
        ExecuteMsg::UpdateMintingCap {
            denom,
            minting_cap,
            can_change_minting_cap,
        } => update_minting_cap(ctx, denom, minting_cap, can_change_minting_cap)
            .map(|_| ExecuteResponse::None),
        ExecuteMsg::ProposeDenomAdmin {
            denom,
            bank_admin,
            metadata_admin,
        } => propose_denom_admin(ctx, denom, bank_admin, metadata_admin)
            .map(|_| ExecuteResponse::None),
        ExecuteMsg::ClaimDenomAdmin { denom } => {
            claim_denom_admin(ctx, denom).map(|_| ExecuteResponse::None)
        },
        ExecuteMsg::DisableDenomAdmin { denom } => {
            disable_denom_admin(ctx, denom).map(|_| ExecuteResponse::None)
        },
        ExecuteMsg::UpdateDenomMetadataAdmin {
            denom,
            metadata_admin,
        } => update_denom_metadata_admin(ctx, denom, metadata_admin)
            .map(|_| ExecuteResponse::None),
        ExecuteMsg::SetDenomMetadata { denom, metadata } => {
            set_denom_metadata(ctx, denom, metadata).map(|_| ExecuteResponse::None)
        },
        ExecuteMsg::UpdateParams { params } => {
            update_params(ctx, params).map(|_| ExecuteResponse::None)
        },
        ExecuteMsg::WithdrawFees {} => withdraw_fees(ctx).map(ExecuteResponse::FeesWithdrawn),
    }
}

/// Create the denom `factory/{sender}/{sub_id}`.
///
/// All checks, including the fee balance, happen before anything is written.
pub fn create_denom(
    ctx: MutableCtx,
    sub_id: &str,
    minting_cap: Uint256,
    can_change_minting_cap: bool,
    uri: String,
    uri_hash: String,
) -> FactoryResult<Denom> {
    if minting_cap.is_zero() {
        return Err(FactoryError::invalid_request("minting cap must be non-zero"));
    }

    let denom = DenomId::factory(&ctx.sender, sub_id)?;

    if ctx.ledger.has_native_supply(&DenomId::from_str(sub_id)?) {
        return Err(FactoryError::invalid_denom(
            sub_id,
            "collides with a native denom",
        ));
    }

    if DENOMS.has(ctx.storage, &denom) || ctx.ledger.get_metadata(&denom).is_some() {
        return Err(FactoryError::DenomExists { denom });
    }

    let fee = PARAMS.load(ctx.storage)?.creation_fee()?;

    if let Some(fee) = &fee {
        if !ctx.ledger.has_balance(&ctx.sender, fee) {
            return Err(FactoryError::InsufficientFunds {
                denom: fee.denom.clone(),
                required: fee.amount,
                available: ctx.ledger.get_balance(&ctx.sender, &fee.denom),
            });
        }

        let collector = ctx.collector()?;
        ctx.ledger
            .transfer_to_collector(&ctx.sender, &collector, fee)?;
    }

    write_metadata(ctx.ledger, Metadata::new_default(&denom, uri, uri_hash));

    let auth = DenomAuth::new(denom.clone(), ctx.sender);
    DENOM_AUTHS.save(ctx.storage, &denom, &auth)?;
    reindex(ctx.storage, None, &auth)?;

    let record = Denom::new(ctx.sender, denom.clone(), minting_cap, can_change_minting_cap);
    DENOMS.save(ctx.storage, &denom, &record)?;

    tracing::info!(
        denom = denom.to_string(),
        creator = ctx.sender.to_string(),
        minting_cap = minting_cap.to_string(),
        "Created denom"
    );

    ctx.events.emit(FactoryEvent::DenomCreated(EvtDenomCreated {
        denom,
        creator: ctx.sender,
        minting_cap,
        can_change_minting_cap,
        fee,
    }));

    Ok(record)
}

/// Replace a denom's display metadata. Either admin may do this.
pub fn set_denom_metadata(
    ctx: MutableCtx,
    denom: DenomId,
    metadata: Metadata,
) -> FactoryResult<()> {
    if metadata.base != denom {
        return Err(FactoryError::invalid_denom(
            &metadata.base,
            format!("metadata base does not match denom {denom}"),
        ));
    }

    authorize(ctx.storage, &denom, Action::Metadata, &ctx.sender)?;

    write_metadata(ctx.ledger, metadata);

    tracing::info!(
        denom = denom.to_string(),
        signer = ctx.sender.to_string(),
        "Updated denom metadata"
    );

    ctx.events.emit(FactoryEvent::MetadataUpdated(EvtMetadataUpdated {
        denom,
        signer: ctx.sender,
    }));

    Ok(())
}

/// The only path through which the module writes metadata to the ledger.
fn write_metadata(ledger: &mut dyn AssetLedger, metadata: Metadata) {
    ledger.set_metadata(metadata.sanitize());
}

pub fn update_params(ctx: MutableCtx, params: Params) -> FactoryResult<()> {
    let gov = module_address(ctx.accounts, GOVERNANCE_ACCOUNT)?;

    if ctx.sender != gov {
        return Err(FactoryError::unauthorized(
            ctx.sender,
            "only governance can update params",
        ));
    }

    params.validate()?;

    PARAMS.save(ctx.storage, &params)?;

    tracing::info!(
        create_fee_denom = params.create_fee_denom.as_str(),
        create_fee_amount = params.create_fee_amount.to_string(),
        "Updated params"
    );

    ctx.events
        .emit(FactoryEvent::ParamsUpdated(EvtParamsUpdated { params }));

    Ok(())
}

/// Send the collector's entire balance of the creation fee denom to the
/// beneficiary.
pub fn withdraw_fees(ctx: MutableCtx) -> FactoryResult<Coin> {
    let params = PARAMS.load(ctx.storage)?;

    let Some(beneficiary) = params.beneficiary else {
        return Err(FactoryError::invalid_request("no beneficiary configured"));
    };

    if ctx.sender != beneficiary {
        return Err(FactoryError::unauthorized(
            ctx.sender,
            "only the beneficiary can withdraw fees",
        ));
    }

    let Ok(fee_denom) = DenomId::from_str(&params.create_fee_denom) else {
        return Err(FactoryError::invalid_request("no fee denom configured"));
    };

    let collector = ctx.collector()?;
    let balance = ctx.ledger.get_balance(&collector, &fee_denom);

    if balance.is_zero() {
        return Err(FactoryError::invalid_request("no fees to withdraw"));
    }

    let coin = Coin::new(fee_denom, balance);
    ctx.ledger
        .transfer_from_collector(&collector, &beneficiary, &coin)?;

    tracing::info!(
        beneficiary = beneficiary.to_string(),
        coin = coin.to_string(),
        "Withdrew fees"
    );

    ctx.events.emit(FactoryEvent::FeesWithdrawn(EvtFeesWithdrawn {
        beneficiary,
        coin: coin.clone(),
    }));

    Ok(coin)
}
