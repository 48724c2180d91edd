use {
    super::{
        public_key_info::{decode_pem, encode_pem},
        AlgorithmIdentifier, AnyAlgorithmIdentifier,
    },
    crate::{Error, Result},
    der::{
        asn1::OctetString, pem::PemLabel, Any, Decode, DecodeValue, Encode, EncodeValue, Header,
        Length, Reader, Sequence, Writer,
    },
};

/// PKCS #8 v1 private key, RFC 5208 5.
///
/// ```text
/// PrivateKeyInfo ::= SEQUENCE {
///     version                   Version,
///     privateKeyAlgorithm       PrivateKeyAlgorithmIdentifier,
///     privateKey                PrivateKey,
///     attributes           [0]  IMPLICIT Attributes OPTIONAL }
/// ```
///
/// Attributes are skipped when decoding and never written.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct PrivateKeyInfo {
    algorithm:   AlgorithmIdentifier,
    private_key: Vec<u8>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnyPrivateKeyInfo {
    pub version:     u64,
    pub algorithm:   AnyAlgorithmIdentifier,
    pub private_key: OctetString,
}

impl PrivateKeyInfo {
    pub const VERSION: u64 = 0;

    pub fn new(algorithm: impl Into<AlgorithmIdentifier>, private_key: Vec<u8>) -> Self {
        Self {
            algorithm: algorithm.into(),
            private_key,
        }
    }

    pub const fn version(&self) -> u64 {
        Self::VERSION
    }

    pub const fn algorithm(&self) -> &AlgorithmIdentifier {
        &self.algorithm
    }

    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        Self::try_from(AnyPrivateKeyInfo::from_der(bytes)?)
    }

    pub fn to_der(&self) -> Result<Vec<u8>> {
        Ok(AnyPrivateKeyInfo {
            version:     Self::VERSION,
            algorithm:   self.algorithm.to_any()?,
            private_key: OctetString::new(self.private_key.as_slice())?,
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

impl TryFrom<AnyPrivateKeyInfo> for PrivateKeyInfo {
    type Error = Error;

    fn try_from(raw: AnyPrivateKeyInfo) -> Result<Self> {
        if raw.version != Self::VERSION {
            return Err(Error::UnsupportedVersion(raw.version));
        }
        Ok(Self {
            algorithm:   raw.algorithm.try_into()?,
            private_key: raw.private_key.into_bytes(),
        })
    }
}

impl PemLabel for PrivateKeyInfo {
    const PEM_LABEL: &'static str = "PRIVATE KEY";
}

impl Sequence<'_> for AnyPrivateKeyInfo {}

impl EncodeValue for AnyPrivateKeyInfo {
    fn value_len(&self) -> der::Result<Length> {
        self.version.encoded_len()?
            + self.algorithm.encoded_len()?
            + self.private_key.encoded_len()?
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        self.version.encode(writer)?;
        self.algorithm.encode(writer)?;
        self.private_key.encode(writer)
    }
}

impl<'a> DecodeValue<'a> for AnyPrivateKeyInfo {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |reader| {
            let result = Self {
                version:     u64::decode(reader)?,
                algorithm:   AnyAlgorithmIdentifier::decode(reader)?,
                private_key: OctetString::decode(reader)?,
            };
            // Attributes, and the public key of a v2 OneAsymmetricKey.
            while !reader.is_finished() {
                Any::decode(reader)?;
            }
            Ok(result)
        })
    }
}
