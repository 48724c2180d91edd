use {
    super::{
        oid::*,
        parameters::{null, PreservesRawParameters},
        AlgorithmIdentifier, DigestAlgorithmIdentifier,
    },
    crate::{Error, Result},
    der::{asn1::ObjectIdentifier as Oid, Any, Tag, Tagged},
    tracing::warn,
};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignatureAlgorithmIdentifier {
    Rsa(RsaSignatureAlgorithmIdentifier),
    Ec(EcSignatureAlgorithmIdentifier),
}

/// PKCS #1 v1.5 signatures.
///
/// RFC 4055 5:
///   When any of these four object identifiers appears within an
///   AlgorithmIdentifier, the parameters MUST be NULL.  Implementations
///   MUST accept the parameters being absent as well as present.
///
/// Whatever node was decoded is kept so re-encoding doesn't change the
/// input, even when it is not a NULL.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RsaSignatureAlgorithmIdentifier {
    digest:     DigestAlgorithmIdentifier,
    parameters: Any,
}

/// ECDSA signatures.
///
/// RFC 5758 3.2: the encoding MUST omit the parameters field. Parameters
/// present on decode are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EcSignatureAlgorithmIdentifier {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

/// Hash algorithm to RSA signature algorithm.
const RSA_SIGNATURES: [(Oid, Oid); 6] = [
    (ID_MD5, ID_MD5_WITH_RSA_ENCRYPTION),
    (ID_SHA1, ID_SHA1_WITH_RSA_ENCRYPTION),
    (ID_SHA224, ID_SHA224_WITH_RSA_ENCRYPTION),
    (ID_SHA256, ID_SHA256_WITH_RSA_ENCRYPTION),
    (ID_SHA384, ID_SHA384_WITH_RSA_ENCRYPTION),
    (ID_SHA512, ID_SHA512_WITH_RSA_ENCRYPTION),
];

/// Hash algorithm to ECDSA signature algorithm.
const EC_SIGNATURES: [(Oid, Oid); 5] = [
    (ID_SHA1, ID_ECDSA_WITH_SHA1),
    (ID_SHA224, ID_ECDSA_WITH_SHA224),
    (ID_SHA256, ID_ECDSA_WITH_SHA256),
    (ID_SHA384, ID_ECDSA_WITH_SHA384),
    (ID_SHA512, ID_ECDSA_WITH_SHA512),
];

impl SignatureAlgorithmIdentifier {
    /// Signature algorithm for keys of `crypto` hashing with `hash`.
    pub fn for_asymmetric_crypto(
        crypto: &AlgorithmIdentifier,
        hash: &AlgorithmIdentifier,
    ) -> Result<Self> {
        let table = match crypto.oid() {
            ID_RSA_ENCRYPTION => RSA_SIGNATURES.as_slice(),
            ID_EC_PUBLIC_KEY => EC_SIGNATURES.as_slice(),
            _ => &[],
        };
        table
            .iter()
            .find(|(hash_oid, _)| *hash_oid == hash.oid())
            .and_then(|(_, signature_oid)| Self::from_oid(signature_oid))
            .ok_or_else(|| Error::UnsupportedCombination {
                crypto: crypto.to_string(),
                hash:   hash.to_string(),
            })
    }

    /// Constructs the variant without parameters, RSA gets its NULL.
    pub fn from_oid(oid: &Oid) -> Option<Self> {
        RsaSignatureAlgorithmIdentifier::digest_for_oid(oid)
            .map(|digest| Self::Rsa(RsaSignatureAlgorithmIdentifier::new(digest)))
            .or_else(|| EcSignatureAlgorithmIdentifier::from_oid(oid).map(Self::Ec))
    }

    pub fn oid(&self) -> Oid {
        match self {
            Self::Rsa(rsa) => rsa.oid(),
            Self::Ec(ec) => ec.oid(),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rsa(rsa) => rsa.name(),
            Self::Ec(ec) => ec.name(),
        }
    }

    pub const fn digest(&self) -> DigestAlgorithmIdentifier {
        match self {
            Self::Rsa(rsa) => rsa.digest(),
            Self::Ec(ec) => ec.digest(),
        }
    }

    /// OID of the key algorithm this signature algorithm is computed with.
    pub const fn key_algorithm(&self) -> Oid {
        match self {
            Self::Rsa(_) => ID_RSA_ENCRYPTION,
            Self::Ec(_) => ID_EC_PUBLIC_KEY,
        }
    }

    pub fn supports_key_algorithm(&self, key_algorithm: &AlgorithmIdentifier) -> bool {
        key_algorithm.oid() == self.key_algorithm()
    }

    pub(crate) fn with_parameters(self, parameters: Option<&Any>) -> Self {
        match self {
            Self::Rsa(rsa) => Self::Rsa(RsaSignatureAlgorithmIdentifier::from_parameters(
                rsa.digest, parameters,
            )),
            Self::Ec(_) => self,
        }
    }

    pub(crate) fn parameters(&self) -> Option<Any> {
        match self {
            Self::Rsa(rsa) => Some(rsa.parameters.clone()),
            Self::Ec(_) => None,
        }
    }
}

impl RsaSignatureAlgorithmIdentifier {
    /// With the NULL parameters RFC 4055 asks for.
    pub fn new(digest: DigestAlgorithmIdentifier) -> Self {
        Self {
            digest,
            parameters: null(),
        }
    }

    pub(crate) fn from_parameters(
        digest: DigestAlgorithmIdentifier,
        parameters: Option<&Any>,
    ) -> Self {
        let mut result = Self::new(digest);
        if let Some(parameters) = parameters {
            if parameters.tag() != Tag::Null {
                warn!(
                    algorithm = result.name(),
                    "preserving non-NULL RSA signature parameters"
                );
            }
            result.parameters = parameters.clone();
        }
        result
    }

    pub fn digest_for_oid(oid: &Oid) -> Option<DigestAlgorithmIdentifier> {
        use DigestAlgorithmIdentifier::*;
        Some(match *oid {
            ID_MD5_WITH_RSA_ENCRYPTION => Md5,
            ID_SHA1_WITH_RSA_ENCRYPTION => Sha1,
            ID_SHA224_WITH_RSA_ENCRYPTION => Sha224,
            ID_SHA256_WITH_RSA_ENCRYPTION => Sha256,
            ID_SHA384_WITH_RSA_ENCRYPTION => Sha384,
            ID_SHA512_WITH_RSA_ENCRYPTION => Sha512,
            _ => return None,
        })
    }

    pub const fn oid(&self) -> Oid {
        match self.digest {
            DigestAlgorithmIdentifier::Md5 => ID_MD5_WITH_RSA_ENCRYPTION,
            DigestAlgorithmIdentifier::Sha1 => ID_SHA1_WITH_RSA_ENCRYPTION,
            DigestAlgorithmIdentifier::Sha224 => ID_SHA224_WITH_RSA_ENCRYPTION,
            DigestAlgorithmIdentifier::Sha256 => ID_SHA256_WITH_RSA_ENCRYPTION,
            DigestAlgorithmIdentifier::Sha384 => ID_SHA384_WITH_RSA_ENCRYPTION,
            DigestAlgorithmIdentifier::Sha512 => ID_SHA512_WITH_RSA_ENCRYPTION,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self.digest {
            DigestAlgorithmIdentifier::Md5 => "md5WithRSAEncryption",
            DigestAlgorithmIdentifier::Sha1 => "sha1WithRSAEncryption",
            DigestAlgorithmIdentifier::Sha224 => "sha224WithRSAEncryption",
            DigestAlgorithmIdentifier::Sha256 => "sha256WithRSAEncryption",
            DigestAlgorithmIdentifier::Sha384 => "sha384WithRSAEncryption",
            DigestAlgorithmIdentifier::Sha512 => "sha512WithRSAEncryption",
        }
    }

    pub const fn digest(&self) -> DigestAlgorithmIdentifier {
        self.digest
    }
}

impl PreservesRawParameters for RsaSignatureAlgorithmIdentifier {
    fn raw_parameters(&self) -> &Any {
        &self.parameters
    }
}

impl EcSignatureAlgorithmIdentifier {
    pub fn from_oid(oid: &Oid) -> Option<Self> {
        Some(match *oid {
            ID_ECDSA_WITH_SHA1 => Self::Sha1,
            ID_ECDSA_WITH_SHA224 => Self::Sha224,
            ID_ECDSA_WITH_SHA256 => Self::Sha256,
            ID_ECDSA_WITH_SHA384 => Self::Sha384,
            ID_ECDSA_WITH_SHA512 => Self::Sha512,
            _ => return None,
        })
    }

    pub const fn oid(self) -> Oid {
        match self {
            Self::Sha1 => ID_ECDSA_WITH_SHA1,
            Self::Sha224 => ID_ECDSA_WITH_SHA224,
            Self::Sha256 => ID_ECDSA_WITH_SHA256,
            Self::Sha384 => ID_ECDSA_WITH_SHA384,
            Self::Sha512 => ID_ECDSA_WITH_SHA512,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "ecdsa-with-SHA1",
            Self::Sha224 => "ecdsa-with-SHA224",
            Self::Sha256 => "ecdsa-with-SHA256",
            Self::Sha384 => "ecdsa-with-SHA384",
            Self::Sha512 => "ecdsa-with-SHA512",
        }
    }

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

impl From<RsaSignatureAlgorithmIdentifier> for SignatureAlgorithmIdentifier {
    fn from(rsa: RsaSignatureAlgorithmIdentifier) -> Self {
        Self::Rsa(rsa)
    }
}

impl From<EcSignatureAlgorithmIdentifier> for SignatureAlgorithmIdentifier {
    fn from(ec: EcSignatureAlgorithmIdentifier) -> Self {
        Self::Ec(ec)
    }
}
