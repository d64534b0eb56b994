mod admin;
mod auth;
mod context;
mod execute;
mod genesis;
mod index;
mod invariants;
mod query;
mod state;
mod supply;
mod traits;

pub use {
    admin::*, auth::*, context::*, execute::*, genesis::*, index::*, invariants::*, query::*,
    state::*, supply::*, traits::*,
};

/// Name of the module account that collects creation fees, and through which
/// minted and burned tokens pass.
pub const COLLECTOR_ACCOUNT: &str = "tokenfactory";

/// Name of the module account allowed to update the parameters.
pub const GOVERNANCE_ACCOUNT: &str = "gov";
