//! Capabilities shared between algorithm families, and the validation rules
//! they have in common.

use {
    crate::{ensure_err, InvalidParameter, Result},
    der::{asn1::Null, Any, AnyRef, Decode, Encode},
};

/// Algorithms carrying an optional initialization vector of fixed size.
pub trait HasInitializationVector: Sized {
    /// Initialization vector size in bytes.
    fn iv_size(&self) -> usize;

    fn initialization_vector(&self) -> Option<&[u8]>;

    /// Returns a copy with the given IV, `None` unsets it.
    fn with_initialization_vector(&self, iv: Option<Vec<u8>>) -> Result<Self>;
}

/// Algorithms that keep the parameter node they were decoded from, so that
/// re-encoding reproduces the input exactly.
pub trait PreservesRawParameters {
    fn raw_parameters(&self) -> &Any;
}

/// Algorithms whose identifier is the OID alone, optionally followed by a
/// NULL. Decoding accepts both forms.
pub trait FixedParameterlessEncoding {
    /// Whether the encoding carries an explicit NULL.
    fn emits_null(&self) -> bool {
        false
    }

    fn fixed_parameters(&self) -> Option<Any> {
        self.emits_null().then(null)
    }
}

/// An owned NULL parameter node.
pub(crate) fn null() -> Any {
    AnyRef::NULL.into()
}

/// Accepts an absent parameter field or a NULL.
pub(crate) fn expect_no_parameters(parameters: Option<&Any>) -> Result<()> {
    if let Some(any) = parameters {
        any.decode_as::<Null>()?;
    }
    Ok(())
}

pub(crate) fn require_parameters(parameters: Option<&Any>) -> Result<&Any> {
    parameters.ok_or_else(|| InvalidParameter::MissingParameters.into())
}

/// IVs are either unset or exactly `expected` bytes.
pub(crate) fn check_iv_size(iv: Option<&[u8]>, expected: usize) -> Result<()> {
    if let Some(iv) = iv {
        ensure_err!(
            iv.len() == expected,
            InvalidParameter::IvSize {
                expected,
                actual: iv.len(),
            }
        );
    }
    Ok(())
}

pub(crate) fn check_iteration_count(iteration_count: u64) -> Result<()> {
    ensure_err!(iteration_count > 0, InvalidParameter::IterationCount);
    Ok(())
}

/// Re-encodes a DER value as an opaque parameter node.
pub(crate) fn to_any<T: Encode>(value: &T) -> der::Result<Any> {
    Any::from_der(&value.to_der()?)
}
