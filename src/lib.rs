//! Algorithm identifiers for X.509 and the PKCS family of standards.
//!
//! [`asn1::AlgorithmIdentifier`] maps an object identifier to a typed
//! variant carrying the algorithm specific parameters, and falls back to a
//! generic variant for everything it does not know. The [`crypto`] module
//! translates identifiers into the names a native crypto engine expects.

pub mod asn1;
pub mod crypto;
mod error;

pub use self::error::{Error, InvalidParameter, Result};

/// Like [`anyhow::ensure`], but returns the given error value.
#[macro_export]
macro_rules! ensure_err {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err.into());
        }
    };
}
