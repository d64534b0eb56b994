use {
    crate::{Addr, DenomId, FactoryError, FactoryResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    strum_macros::Display,
};

/// The two classes of privileged actions on a denom.
#[derive(
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    Display,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    /// Mint, change the minting cap, transfer or disable admin rights.
    Bank,
    /// Change display metadata.
    Metadata,
}

/// Who administers a denom.
///
/// Disabling bank rights moves a denom from `Active` to `Locked`, and nothing
/// moves it back.
#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdminState {
    Active {
        bank_admin: Addr,
        metadata_admin: Option<Addr>,
    },
    Locked {
        metadata_admin: Option<Addr>,
    },
}

#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DenomAuth {
    pub denom: DenomId,
    pub admins: AdminState,
}

impl DenomAuth {
    /// A freshly created denom is fully administered by its creator.
    pub fn new(denom: DenomId, creator: Addr) -> Self {
        Self {
            denom,
            admins: AdminState::Active {
                bank_admin: creator,
                metadata_admin: Some(creator),
            },
        }
    }

    pub fn bank_admin(&self) -> Option<&Addr> {
        match &self.admins {
            AdminState::Active { bank_admin, .. } => Some(bank_admin),
            AdminState::Locked { .. } => None,
        }
    }

    pub fn metadata_admin(&self) -> Option<&Addr> {
        match &self.admins {
            AdminState::Active { metadata_admin, .. } | AdminState::Locked { metadata_admin } => {
                metadata_admin.as_ref()
            },
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.admins, AdminState::Locked { .. })
    }

    /// All distinct admins of the denom, bank admin first.
    pub fn admins(&self) -> Vec<Addr> {
        let mut admins = Vec::with_capacity(2);
        admins.extend(self.bank_admin().copied());
        if let Some(metadata_admin) = self.metadata_admin() {
            if !admins.contains(metadata_admin) {
                admins.push(*metadata_admin);
            }
        }
        admins
    }

    /// Give up bank rights for good. The metadata admin is retained.
    pub fn lock(self) -> Self {
        let metadata_admin = self.metadata_admin().copied();
        Self {
            denom: self.denom,
            admins: AdminState::Locked { metadata_admin },
        }
    }

    pub fn with_metadata_admin(self, new_metadata_admin: Option<Addr>) -> Self {
        let admins = match self.admins {
            AdminState::Active { bank_admin, .. } => AdminState::Active {
                bank_admin,
                metadata_admin: new_metadata_admin,
            },
            AdminState::Locked { .. } => AdminState::Locked {
                metadata_admin: new_metadata_admin,
            },
        };

        Self {
            denom: self.denom,
            admins,
        }
    }

    /// Decide whether `signer` may perform `action` on this denom.
    ///
    /// - Bank actions require the denom to be active, and the signer to be its
    ///   bank admin.
    /// - Metadata actions are allowed for the bank admin; otherwise they
    ///   require a metadata admin to exist, and the signer to be it.
    pub fn authorize(&self, action: Action, signer: &Addr) -> FactoryResult<()> {
        match (action, &self.admins) {
            (Action::Bank, AdminState::Locked { .. }) => Err(FactoryError::DenomLocked {
                denom: self.denom.clone(),
            }),
            (Action::Bank, AdminState::Active { bank_admin, .. }) => {
                if signer != bank_admin {
                    return Err(FactoryError::unauthorized(
                        *signer,
                        format!("not the bank admin of {}", self.denom),
                    ));
                }

                Ok(())
            },
            (Action::Metadata, admins) => {
                if let AdminState::Active { bank_admin, .. } = admins {
                    if signer == bank_admin {
                        return Ok(());
                    }
                }

                let Some(metadata_admin) = self.metadata_admin() else {
                    return Err(FactoryError::DenomLocked {
                        denom: self.denom.clone(),
                    });
                };

                if signer != metadata_admin {
                    return Err(FactoryError::unauthorized(
                        *signer,
                        format!("not an admin of {}", self.denom),
                    ));
                }

                Ok(())
            },
        }
    }
}

/// A pending transfer of a denom's admin rights, waiting for the proposed bank
/// admin to claim it.
#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ProposedDenomAuth {
    pub denom: DenomId,
    pub bank_admin: Addr,
    pub metadata_admin: Option<Addr>,
}

impl ProposedDenomAuth {
    /// The admin record that results from claiming this proposal.
    pub fn into_denom_auth(self) -> DenomAuth {
        DenomAuth {
            denom: self.denom,
            admins: AdminState::Active {
                bank_admin: self.bank_admin,
                metadata_admin: self.metadata_admin,
            },
        }
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, std::str::FromStr, test_case::test_case};

    const BANK: Addr = Addr::mock(1);
    const META: Addr = Addr::mock(2);
    const OTHER: Addr = Addr::mock(3);

    fn auth(admins: AdminState) -> DenomAuth {
        DenomAuth {
            denom: DenomId::from_str("factory/x/foo").unwrap(),
            admins,
        }
    }

    fn active(metadata_admin: Option<Addr>) -> AdminState {
        AdminState::Active {
            bank_admin: BANK,
            metadata_admin,
        }
    }

    fn locked(metadata_admin: Option<Addr>) -> AdminState {
        AdminState::Locked { metadata_admin }
    }

    fn outcome(res: FactoryResult<()>) -> &'static str {
        match res {
            Ok(()) => "ok",
            Err(FactoryError::DenomLocked { .. }) => "locked",
            Err(FactoryError::Unauthorized { .. }) => "unauthorized",
            Err(_) => "other",
        }
    }

    #[test_case(active(Some(META)), Action::Bank, BANK => "ok"; "bank by bank admin")]
    #[test_case(active(Some(META)), Action::Bank, META => "unauthorized"; "bank by metadata admin")]
    #[test_case(active(Some(META)), Action::Bank, OTHER => "unauthorized"; "bank by stranger")]
    #[test_case(locked(Some(META)), Action::Bank, BANK => "locked"; "bank on locked denom")]
    #[test_case(active(Some(META)), Action::Metadata, BANK => "ok"; "metadata by bank admin")]
    #[test_case(active(Some(META)), Action::Metadata, META => "ok"; "metadata by metadata admin")]
    #[test_case(active(Some(META)), Action::Metadata, OTHER => "unauthorized"; "metadata by stranger")]
    #[test_case(active(None), Action::Metadata, BANK => "ok"; "metadata by bank admin without metadata admin")]
    #[test_case(active(None), Action::Metadata, OTHER => "locked"; "metadata without metadata admin")]
    #[test_case(locked(Some(META)), Action::Metadata, META => "ok"; "metadata on locked denom")]
    #[test_case(locked(Some(META)), Action::Metadata, BANK => "unauthorized"; "former bank admin on locked denom")]
    #[test_case(locked(None), Action::Metadata, META => "locked"; "fully locked denom")]
    fn authorization_matrix(admins: AdminState, action: Action, signer: Addr) -> &'static str {
        outcome(auth(admins).authorize(action, &signer))
    }

    #[test]
    fn locking_keeps_metadata_admin() {
        let locked = auth(active(Some(META))).lock();

        assert!(locked.is_locked());
        assert_eq!(locked.bank_admin(), None);
        assert_eq!(locked.metadata_admin(), Some(&META));
        assert_eq!(locked.admins(), [META]);
    }

    #[test]
    fn admins_are_deduplicated() {
        let auth = DenomAuth::new(DenomId::from_str("factory/x/foo").unwrap(), BANK);
        assert_eq!(auth.admins(), [BANK]);

        let auth = auth.with_metadata_admin(Some(META));
        assert_eq!(auth.admins(), [BANK, META]);

        let auth = auth.with_metadata_admin(None);
        assert_eq!(auth.admins(), [BANK]);
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(auth(locked(None))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "denom": "factory/x/foo",
                "admins": { "locked": { "metadata_admin": null } },
            })
        );
    }
}
