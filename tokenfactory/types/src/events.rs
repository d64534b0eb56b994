use {
    crate::{Addr, Coin, DenomId, Params},
    serde::{Deserialize, Serialize},
    strum_macros::AsRefStr,
    tokenfactory_math::Uint256,
};

/// Structured events emitted by the token factory. They are informational only,
/// and never affect control flow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum FactoryEvent {
    DenomCreated(EvtDenomCreated),
    Minted(EvtMinted),
    Burned(EvtBurned),
    MintingCapUpdated(EvtMintingCapUpdated),
    AdminProposed(EvtAdminProposed),
    AdminClaimed(EvtAdminClaimed),
    AdminDisabled(EvtAdminDisabled),
    MetadataAdminUpdated(EvtMetadataAdminUpdated),
    MetadataUpdated(EvtMetadataUpdated),
    ParamsUpdated(EvtParamsUpdated),
    FeesWithdrawn(EvtFeesWithdrawn),
}

impl FactoryEvent {
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtDenomCreated {
    pub denom: DenomId,
    pub creator: Addr,
    pub minting_cap: Uint256,
    pub can_change_minting_cap: bool,
    pub fee: Option<Coin>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtMinted {
    pub denom: DenomId,
    pub amount: Uint256,
    pub recipient: Addr,
    pub minted: Uint256,
    pub total_supply: Uint256,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtBurned {
    pub denom: DenomId,
    pub amount: Uint256,
    pub burner: Addr,
    pub total_supply: Uint256,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtMintingCapUpdated {
    pub denom: DenomId,
    pub minting_cap: Uint256,
    pub can_change_minting_cap: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtAdminProposed {
    pub denom: DenomId,
    pub bank_admin: Addr,
    pub metadata_admin: Option<Addr>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtAdminClaimed {
    pub denom: DenomId,
    pub bank_admin: Addr,
    pub metadata_admin: Option<Addr>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtAdminDisabled {
    pub denom: DenomId,
    pub former_bank_admin: Addr,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtMetadataAdminUpdated {
    pub denom: DenomId,
    pub metadata_admin: Option<Addr>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtMetadataUpdated {
    pub denom: DenomId,
    pub signer: Addr,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtParamsUpdated {
    pub params: Params,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtFeesWithdrawn {
    pub beneficiary: Addr,
    pub coin: Coin,
}
