use {
    crate::{Addr, Coin, Denom, DenomAuth, DenomId, Metadata, Params, ProposedDenomAuth},
    serde::{Deserialize, Serialize},
    tokenfactory_math::Uint256,
};

/// Everything the module persists about a single denom.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GenesisDenom {
    pub denom: Denom,
    pub auth: DenomAuth,
    #[serde(default)]
    pub proposal: Option<ProposedDenomAuth>,
}

/// Genesis state of the module. Also the response type of
/// [`QueryMsg::Genesis`], so that an export can be fed back in.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct InstantiateMsg {
    pub params: Params,
    #[serde(default)]
    pub denoms: Vec<GenesisDenom>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Create a new denom `factory/{sender}/{sub_id}`, paying the creation fee.
    CreateDenom {
        sub_id: String,
        minting_cap: Uint256,
        can_change_minting_cap: bool,
        #[serde(default)]
        uri: String,
        #[serde(default)]
        uri_hash: String,
    },
    /// Mint new tokens to a recipient. Bank admin only.
    Mint {
        denom: DenomId,
        amount: Uint256,
        recipient: Addr,
    },
    /// Burn tokens from the sender's own balance.
    Burn { denom: DenomId, amount: Uint256 },
    /// Replace the minting cap, and optionally give up the right to change it
    /// again. Bank admin only.
    UpdateMintingCap {
        denom: DenomId,
        minting_cap: Uint256,
        can_change_minting_cap: bool,
    },
    /// Propose new admins for a denom. Bank admin only.
    ProposeDenomAdmin {
        denom: DenomId,
        bank_admin: Addr,
        metadata_admin: Option<Addr>,
    },
    /// Accept a pending admin proposal. Proposed bank admin only.
    ClaimDenomAdmin { denom: DenomId },
    /// Give up bank admin rights permanently. Bank admin only.
    DisableDenomAdmin { denom: DenomId },
    /// Change the metadata admin. Either admin may do this.
    UpdateDenomMetadataAdmin {
        denom: DenomId,
        metadata_admin: Option<Addr>,
    },
    /// Replace a denom's display metadata. Either admin may do this.
    SetDenomMetadata { denom: DenomId, metadata: Metadata },
    /// Replace the module parameters. Governance only.
    UpdateParams { params: Params },
    /// Send the collected creation fees to the beneficiary. Beneficiary only.
    WithdrawFees {},
}

/// What a successful execution hands back to the caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteResponse {
    None,
    DenomCreated(Denom),
    FeesWithdrawn(Coin),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    /// Query the module parameters. Returns `Params`.
    Params {},
    /// Query a single denom. Returns `Denom`.
    Denom { denom: DenomId },
    /// Enumerate denoms. Returns `Vec<Denom>`.
    Denoms {
        start_after: Option<DenomId>,
        limit: Option<u32>,
    },
    /// Query a denom's admins. Returns `DenomAuth`.
    DenomAuth { denom: DenomId },
    /// Enumerate denom admins. Returns `Vec<DenomAuth>`.
    DenomAuths {
        start_after: Option<DenomId>,
        limit: Option<u32>,
    },
    /// Query the pending admin proposal of a denom. Returns
    /// `Option<ProposedDenomAuth>`.
    ProposedDenomAuth { denom: DenomId },
    /// Enumerate denoms administered by an address. Returns `Vec<DenomId>`.
    DenomsByAdmin {
        admin: Addr,
        start_after: Option<DenomId>,
        limit: Option<u32>,
    },
    /// Query derived supply figures of a denom. Returns `DenomStats`.
    Stats { denom: DenomId },
    /// Export the module state. Returns `InstantiateMsg`.
    Genesis {},
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json, std::str::FromStr};

    #[test]
    fn execute_msg_json() {
        let msg: ExecuteMsg = serde_json::from_value(json!({
            "create_denom": {
                "sub_id": "foo",
                "minting_cap": "1000",
                "can_change_minting_cap": true,
            }
        }))
        .unwrap();

        assert_eq!(msg, ExecuteMsg::CreateDenom {
            sub_id: "foo".to_string(),
            minting_cap: Uint256::new_from_u128(1000),
            can_change_minting_cap: true,
            uri: String::new(),
            uri_hash: String::new(),
        });

        let msg: ExecuteMsg = serde_json::from_value(json!({
            "burn": {
                "denom": "uatom",
                "amount": "5",
            }
        }))
        .unwrap();

        assert_eq!(msg, ExecuteMsg::Burn {
            denom: DenomId::from_str("uatom").unwrap(),
            amount: Uint256::new_from_u128(5),
        });
    }

    #[test]
    fn rejects_unknown_fields() {
        let res = serde_json::from_value::<QueryMsg>(json!({
            "params": { "extra": 1 }
        }));
        assert!(res.is_err());
    }

    #[test]
    fn instantiate_msg_defaults() {
        let msg: InstantiateMsg = serde_json::from_value(json!({
            "params": {}
        }))
        .unwrap();

        assert_eq!(msg, InstantiateMsg::default());
    }
}
