use std::any::type_name;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    #[error("addition overflow: {a} + {b} > {ty}::MAX")]
    OverflowAdd { ty: &'static str, a: String, b: String },

    #[error("subtraction overflow: {a} - {b} < {ty}::MIN")]
    OverflowSub { ty: &'static str, a: String, b: String },

    #[error("conversion overflow: {value} doesn't fit in {target}")]
    OverflowConversion { target: &'static str, value: String },

    #[error("failed to parse string `{input}` into {ty}: {reason}")]
    ParseNumber {
        ty: &'static str,
        input: String,
        reason: String,
    },
}

impl MathError {
    pub fn overflow_add<T, A, B>(a: A, b: B) -> Self
    where
        A: ToString,
        B: ToString,
    {
        Self::OverflowAdd {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_sub<T, A, B>(a: A, b: B) -> Self
    where
        A: ToString,
        B: ToString,
    {
        Self::OverflowSub {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_conversion<T, V>(value: V) -> Self
    where
        V: ToString,
    {
        Self::OverflowConversion {
            target: type_name::<T>(),
            value: value.to_string(),
        }
    }

    pub fn parse_number<T, I, R>(input: I, reason: R) -> Self
    where
        I: ToString,
        R: ToString,
    {
        Self::ParseNumber {
            ty: type_name::<T>(),
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type MathResult<T> = core::result::Result<T, MathError>;
