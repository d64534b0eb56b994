mod accounts;
mod events;
mod ledger;
mod result;
mod suite;
mod tracing;

pub use {accounts::*, events::*, ledger::*, result::*, suite::*, tracing::*};
