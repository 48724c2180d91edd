//! Pure ASN1 types, no application logic.
//!
//! Parsing is done as deeply as possible, an `AlgorithmIdentifier` is parsed
//! into an enum of the known algorithm families with a catch-all for
//! unimplemented OIDs. This ensures that rich types are available for the
//! application to use, but still allows for parsing of all valid inputs.
//!
//! A second goal is for the parsing to be exactly reversible. In principle
//! this is guaranteed by DER, but the standards allow two ways of encoding
//! 'no parameters' and real world data uses both. Where an RFC asks us to
//! preserve what the sender wrote we store the input so that the output can
//! be exactly reconstructed, see [`RsaSignatureAlgorithmIdentifier`].
//! Elsewhere we accept both forms and write the canonical one.

mod algorithm_identifier;
mod cipher_algorithm_identifier;
mod digest_algorithm_identifier;
pub mod oid;
pub mod parameters;
mod pbe_algorithm_identifier;
mod private_key_info;
pub mod public_key_info;
mod signature_algorithm_identifier;

pub use self::{
    algorithm_identifier::AlgorithmIdentifier,
    cipher_algorithm_identifier::{
        Cipher, CipherAlgorithmIdentifier, RC2_DEFAULT_EFFECTIVE_KEY_BITS,
    },
    digest_algorithm_identifier::{DigestAlgorithmIdentifier, HmacAlgorithmIdentifier},
    parameters::{FixedParameterlessEncoding, HasInitializationVector, PreservesRawParameters},
    pbe_algorithm_identifier::{
        Pbes1AlgorithmIdentifier, Pbes1Scheme, Pbes2AlgorithmIdentifier,
        Pbkdf2AlgorithmIdentifier,
    },
    private_key_info::{AnyPrivateKeyInfo, PrivateKeyInfo},
    public_key_info::{
        AnySubjectPublicKeyInfo, EcPublicKeyAlgorithmIdentifier, PubkeyAlgorithmIdentifier,
        PublicKeyInfo,
    },
    signature_algorithm_identifier::{
        EcSignatureAlgorithmIdentifier, RsaSignatureAlgorithmIdentifier,
        SignatureAlgorithmIdentifier,
    },
};
use der::{asn1::ObjectIdentifier as Oid, Any, Sequence, ValueOrd};

/// An `AlgorithmIdentifier` as it appears on the wire.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Sequence, ValueOrd)]
pub struct AnyAlgorithmIdentifier {
    pub algorithm:  Oid,
    pub parameters: Option<Any>,
}
