use thiserror::Error;

use crate::service::{MAX_PACK_COUNT, MAX_TABLE_LEN};

/// Errors raised while validating input or serving a calculation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    #[error("order size must be greater than 0")]
    OrderSizePositive,

    #[error("no pack sizes available")]
    NoPackSizes,

    #[error("pack sizes cannot be empty")]
    EmptyPackSizes,

    #[error("invalid pack size: {0}")]
    InvalidPackSize(i64),

    #[error("too many pack sizes: {0} (max {max})", max = MAX_PACK_COUNT)]
    TooManyPackSizes(usize),

    #[error(
        "order size {order_size} is too large for the configured pack sizes \
         (needs {required} table entries, max {max})",
        max = MAX_TABLE_LEN
    )]
    OrderTooLarge { order_size: i64, required: u64 },
}

pub type Result<T> = std::result::Result<T, PackError>;
