/// Constants every amount type provides.
pub trait NumberConst {
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;
}

pub trait IsZero {
    fn is_zero(&self) -> bool;
}
