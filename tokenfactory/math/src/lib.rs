mod error;
mod number_const;
mod uint;

pub use {error::*, number_const::*, uint::*};
