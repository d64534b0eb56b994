mod bound;
mod codec;
mod error;
mod item;
mod key;
mod map;
mod mock;
mod path;
mod prefix;
mod serializers;
mod set;
mod storage;
mod utils;

pub use {
    bound::*, codec::*, error::*, item::*, key::*, map::*, mock::*, path::*, prefix::*, serializers::*,
    set::*, storage::*, utils::*,
};
