use {
    super::{oid::*, parameters::FixedParameterlessEncoding},
    crate::{Error, Result},
    der::asn1::ObjectIdentifier as Oid,
    sha1::Sha1,
    sha2::{Digest, Sha224, Sha256, Sha384, Sha512},
};

/// Message digest algorithms.
///
/// RFC 5754 2 says the parameters SHOULD be absent but implementations MUST
/// accept a NULL. We always write them absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DigestAlgorithmIdentifier {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

/// HMAC algorithms, the pseudorandom functions of PBKDF2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HmacAlgorithmIdentifier {
    /// RFC 3370 3.1 wants an explicit NULL for this one.
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithmIdentifier {
    pub const fn oid(self) -> Oid {
        match self {
            Self::Md5 => ID_MD5,
            Self::Sha1 => ID_SHA1,
            Self::Sha224 => ID_SHA224,
            Self::Sha256 => ID_SHA256,
            Self::Sha384 => ID_SHA384,
            Self::Sha512 => ID_SHA512,
        }
    }

    pub fn from_oid(oid: &Oid) -> Option<Self> {
        Some(match *oid {
            ID_MD5 => Self::Md5,
            ID_SHA1 => Self::Sha1,
            ID_SHA224 => Self::Sha224,
            ID_SHA256 => Self::Sha256,
            ID_SHA384 => Self::Sha384,
            ID_SHA512 => Self::Sha512,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Digest size in bytes.
    pub const fn output_size(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    pub fn hash_bytes(self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(match self {
            Self::Md5 => return Err(Error::UnsupportedFeature("md5 digest computation")),
            Self::Sha1 => Sha1::digest(data).to_vec(),
            Self::Sha224 => Sha224::digest(data).to_vec(),
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha384 => Sha384::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
        })
    }
}

impl FixedParameterlessEncoding for DigestAlgorithmIdentifier {}

impl HmacAlgorithmIdentifier {
    pub const fn oid(self) -> Oid {
        match self {
            Self::Sha1 => ID_HMAC_WITH_SHA1,
            Self::Sha224 => ID_HMAC_WITH_SHA224,
            Self::Sha256 => ID_HMAC_WITH_SHA256,
            Self::Sha384 => ID_HMAC_WITH_SHA384,
            Self::Sha512 => ID_HMAC_WITH_SHA512,
        }
    }

    pub fn from_oid(oid: &Oid) -> Option<Self> {
        Some(match *oid {
            ID_HMAC_WITH_SHA1 => Self::Sha1,
            ID_HMAC_WITH_SHA224 => Self::Sha224,
            ID_HMAC_WITH_SHA256 => Self::Sha256,
            ID_HMAC_WITH_SHA384 => Self::Sha384,
            ID_HMAC_WITH_SHA512 => Self::Sha512,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "hmacWithSHA1",
            Self::Sha224 => "hmacWithSHA224",
            Self::Sha256 => "hmacWithSHA256",
            Self::Sha384 => "hmacWithSHA384",
            Self::Sha512 => "hmacWithSHA512",
        }
    }

    /// The underlying hash function.
    pub const fn digest(self) -> DigestAlgorithmIdentifier {
        match self {
            Self::Sha1 => DigestAlgorithmIdentifier::Sha1,
            Self::Sha224 => DigestAlgorithmIdentifier::Sha224,
            Self::Sha256 => DigestAlgorithmIdentifier::Sha256,
            Self::Sha384 => DigestAlgorithmIdentifier::Sha384,
            Self::Sha512 => DigestAlgorithmIdentifier::Sha512,
        }
    }
}

/// PBKDF2 default, RFC 8018 A.2.
impl Default for HmacAlgorithmIdentifier {
    fn default() -> Self {
        Self::Sha1
    }
}

impl FixedParameterlessEncoding for HmacAlgorithmIdentifier {
    fn emits_null(&self) -> bool {
        matches!(self, Self::Sha1)
    }
}
