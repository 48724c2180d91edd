mod pubkey_algorithm_identifier;

pub use self::pubkey_algorithm_identifier::{
    curve_size, EcPublicKeyAlgorithmIdentifier, PubkeyAlgorithmIdentifier,
};
use {
    super::{AlgorithmIdentifier, AnyAlgorithmIdentifier},
    crate::Result,
    der::{
        asn1::BitString,
        pem::{self, LineEnding, PemLabel},
        Decode, Encode, Sequence, Tag, ValueOrd,
    },
};

/// RFC 5280 4.1.2.7 `SubjectPublicKeyInfo` with the algorithm resolved.
///
/// The key bytes are not interpreted, that is left to key type parsers.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct PublicKeyInfo {
    algorithm:  AlgorithmIdentifier,
    public_key: Vec<u8>,
}

#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Sequence, ValueOrd)]
pub struct AnySubjectPublicKeyInfo {
    pub algorithm:          AnyAlgorithmIdentifier,
    pub subject_public_key: BitString,
}

impl PublicKeyInfo {
    pub fn new(algorithm: impl Into<AlgorithmIdentifier>, public_key: Vec<u8>) -> Self {
        Self {
            algorithm: algorithm.into(),
            public_key,
        }
    }

    pub const fn algorithm(&self) -> &AlgorithmIdentifier {
        &self.algorithm
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        Self::try_from(AnySubjectPublicKeyInfo::from_der(bytes)?)
    }

    pub fn to_der(&self) -> Result<Vec<u8>> {
        Ok(AnySubjectPublicKeyInfo {
            algorithm:          self.algorithm.to_any()?,
            subject_public_key: BitString::from_bytes(&self.public_key)?,
        }
        .to_der()?)
    }

    pub fn from_pem(pem: &str) -> Result<Self> {
        Self::from_der(&decode_pem::<Self>(pem)?)
    }

    pub fn to_pem(&self) -> Result<String> {
        encode_pem::<Self>(&self.to_der()?)
    }
}

impl TryFrom<AnySubjectPublicKeyInfo> for PublicKeyInfo {
    type Error = crate::Error;

    fn try_from(raw: AnySubjectPublicKeyInfo) -> Result<Self> {
        let public_key = raw
            .subject_public_key
            .as_bytes()
            .ok_or_else(|| Tag::BitString.value_error())?
            .to_vec();
        Ok(Self {
            algorithm: raw.algorithm.try_into()?,
            public_key,
        })
    }
}

impl PemLabel for PublicKeyInfo {
    const PEM_LABEL: &'static str = "PUBLIC KEY";
}

/// Strips the envelope, checking the label matches `T`.
pub(crate) fn decode_pem<T: PemLabel>(pem: &str) -> Result<Vec<u8>> {
    let (label, bytes) = pem::decode_vec(pem.as_bytes()).map_err(der::Error::from)?;
    T::validate_pem_label(label).map_err(der::Error::from)?;
    Ok(bytes)
}

pub(crate) fn encode_pem<T: PemLabel>(bytes: &[u8]) -> Result<String> {
    Ok(pem::encode_string(T::PEM_LABEL, LineEnding::LF, bytes).map_err(der::Error::from)?)
}
