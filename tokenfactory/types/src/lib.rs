mod address;
mod auth;
mod coin;
mod denom;
mod denom_id;
mod error;
mod events;
mod metadata;
mod msgs;
mod params;

pub use {
    address::*, auth::*, coin::*, denom::*, denom_id::*, error::*, events::*, metadata::*,
    msgs::*, params::*,
};
