use {
    super::{
        cipher_algorithm_identifier::{Cipher, CipherAlgorithmIdentifier},
        oid::*,
        parameters::{expect_no_parameters, FixedParameterlessEncoding},
        pbe_algorithm_identifier::{
            Pbes1AlgorithmIdentifier, Pbes1Scheme, Pbes2AlgorithmIdentifier,
            Pbkdf2AlgorithmIdentifier,
        },
        public_key_info::PubkeyAlgorithmIdentifier,
        AnyAlgorithmIdentifier, DigestAlgorithmIdentifier, HmacAlgorithmIdentifier,
        SignatureAlgorithmIdentifier,
    },
    crate::{Error, Result},
    const_oid::db::DB,
    der::{
        asn1::ObjectIdentifier as Oid, Decode, EncodeValue, FixedTag, Length, Tag, Writer,
    },
    std::fmt::{self, Display, Formatter},
    tracing::debug,
};

/// An `AlgorithmIdentifier` resolved to its algorithm family.
///
/// ```text
/// AlgorithmIdentifier ::= SEQUENCE {
///     algorithm   OBJECT IDENTIFIER,
///     parameters  ANY DEFINED BY algorithm OPTIONAL }
/// ```
///
/// Unknown OIDs decode to [`AlgorithmIdentifier::Generic`], which keeps the
/// parameters untouched so they re-encode to the same bytes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlgorithmIdentifier {
    Pubkey(PubkeyAlgorithmIdentifier),
    Signature(SignatureAlgorithmIdentifier),
    Digest(DigestAlgorithmIdentifier),
    Hmac(HmacAlgorithmIdentifier),
    Cipher(CipherAlgorithmIdentifier),
    Pbes1(Pbes1AlgorithmIdentifier),
    Pbkdf2(Pbkdf2AlgorithmIdentifier),
    Pbes2(Pbes2AlgorithmIdentifier),
    Generic(AnyAlgorithmIdentifier),
}

/// What an OID resolves to before its parameters are read.
enum Family {
    Pubkey(PubkeyAlgorithmIdentifier),
    Signature(SignatureAlgorithmIdentifier),
    Digest(DigestAlgorithmIdentifier),
    Hmac(HmacAlgorithmIdentifier),
    Cipher(Cipher),
    Pbes1(Pbes1Scheme),
    Pbkdf2,
    Pbes2,
}

/// The single OID to family mapping.
fn lookup(oid: &Oid) -> Option<Family> {
    match *oid {
        ID_PBKDF2 => return Some(Family::Pbkdf2),
        ID_PBES2 => return Some(Family::Pbes2),
        _ => {}
    }
    PubkeyAlgorithmIdentifier::from_oid(oid)
        .map(Family::Pubkey)
        .or_else(|| SignatureAlgorithmIdentifier::from_oid(oid).map(Family::Signature))
        .or_else(|| DigestAlgorithmIdentifier::from_oid(oid).map(Family::Digest))
        .or_else(|| HmacAlgorithmIdentifier::from_oid(oid).map(Family::Hmac))
        .or_else(|| Cipher::from_oid(oid).map(Family::Cipher))
        .or_else(|| Pbes1Scheme::from_oid(oid).map(Family::Pbes1))
}

impl AlgorithmIdentifier {
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        AnyAlgorithmIdentifier::from_der(bytes)?.try_into()
    }

    /// Whether the OID resolves to a modeled family.
    pub fn is_known(oid: &Oid) -> bool {
        lookup(oid).is_some()
    }

    pub fn oid(&self) -> Oid {
        match self {
            Self::Pubkey(pubkey) => pubkey.oid(),
            Self::Signature(signature) => signature.oid(),
            Self::Digest(digest) => digest.oid(),
            Self::Hmac(hmac) => hmac.oid(),
            Self::Cipher(cipher) => cipher.oid(),
            Self::Pbes1(pbes1) => pbes1.oid(),
            Self::Pbkdf2(_) => ID_PBKDF2,
            Self::Pbes2(_) => ID_PBES2,
            Self::Generic(any) => any.algorithm,
        }
    }

    /// Conventional name, `"unknown"` for OIDs missing from the OID database.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pubkey(pubkey) => pubkey.name(),
            Self::Signature(signature) => signature.name(),
            Self::Digest(digest) => digest.name(),
            Self::Hmac(hmac) => hmac.name(),
            Self::Cipher(cipher) => cipher.name(),
            Self::Pbes1(pbes1) => pbes1.scheme().name(),
            Self::Pbkdf2(_) => "pBKDF2",
            Self::Pbes2(_) => "pBES2",
            Self::Generic(any) => DB.by_oid(&any.algorithm).unwrap_or("unknown"),
        }
    }

    /// The identifier as OID and optional parameter node.
    pub fn to_any(&self) -> der::Result<AnyAlgorithmIdentifier> {
        let parameters = match self {
            Self::Pubkey(pubkey) => pubkey.parameters()?,
            Self::Signature(signature) => signature.parameters(),
            Self::Digest(digest) => digest.fixed_parameters(),
            Self::Hmac(hmac) => hmac.fixed_parameters(),
            Self::Cipher(cipher) => cipher.parameters()?,
            Self::Pbes1(pbes1) => Some(pbes1.parameters()?),
            Self::Pbkdf2(pbkdf2) => Some(pbkdf2.parameters()?),
            Self::Pbes2(pbes2) => Some(pbes2.parameters()?),
            Self::Generic(any) => return Ok(any.clone()),
        };
        Ok(AnyAlgorithmIdentifier {
            algorithm: self.oid(),
            parameters,
        })
    }
}

impl TryFrom<AnyAlgorithmIdentifier> for AlgorithmIdentifier {
    type Error = Error;

    fn try_from(any: AnyAlgorithmIdentifier) -> Result<Self> {
        let Some(family) = lookup(&any.algorithm) else {
            debug!(oid = %any.algorithm, "unknown algorithm, keeping parameters as is");
            return Ok(Self::Generic(any));
        };
        let parameters = any.parameters.as_ref();
        Ok(match family {
            Family::Pubkey(pubkey) => Self::Pubkey(pubkey.with_parameters(parameters)?),
            Family::Signature(signature) => Self::Signature(signature.with_parameters(parameters)),
            Family::Digest(digest) => {
                expect_no_parameters(parameters)?;
                Self::Digest(digest)
            }
            Family::Hmac(hmac) => {
                expect_no_parameters(parameters)?;
                Self::Hmac(hmac)
            }
            Family::Cipher(cipher) => {
                Self::Cipher(CipherAlgorithmIdentifier::from_parameters(cipher, parameters)?)
            }
            Family::Pbes1(scheme) => {
                Self::Pbes1(Pbes1AlgorithmIdentifier::from_parameters(scheme, parameters)?)
            }
            Family::Pbkdf2 => Self::Pbkdf2(Pbkdf2AlgorithmIdentifier::from_parameters(parameters)?),
            Family::Pbes2 => Self::Pbes2(Pbes2AlgorithmIdentifier::from_parameters(parameters)?),
        })
    }
}

impl TryFrom<&AnyAlgorithmIdentifier> for AlgorithmIdentifier {
    type Error = Error;

    fn try_from(any: &AnyAlgorithmIdentifier) -> Result<Self> {
        Self::try_from(any.clone())
    }
}

impl FixedTag for AlgorithmIdentifier {
    const TAG: Tag = Tag::Sequence;
}

impl EncodeValue for AlgorithmIdentifier {
    fn value_len(&self) -> der::Result<Length> {
        self.to_any()?.value_len()
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        self.to_any()?.encode_value(writer)
    }
}

impl Display for AlgorithmIdentifier {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Generic(any) => match DB.by_oid(&any.algorithm) {
                Some(name) => f.write_str(name),
                None => write!(f, "{}", any.algorithm),
            },
            _ => f.write_str(self.name()),
        }
    }
}

macro_rules! impl_from {
    ($($variant:ident($type:ty)),* $(,)?) => {
        $(
            impl From<$type> for AlgorithmIdentifier {
                fn from(value: $type) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    Pubkey(PubkeyAlgorithmIdentifier),
    Signature(SignatureAlgorithmIdentifier),
    Digest(DigestAlgorithmIdentifier),
    Hmac(HmacAlgorithmIdentifier),
    Cipher(CipherAlgorithmIdentifier),
    Pbes1(Pbes1AlgorithmIdentifier),
    Pbkdf2(Pbkdf2AlgorithmIdentifier),
    Pbes2(Pbes2AlgorithmIdentifier),
);

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::asn1::{
            parameters::PreservesRawParameters, EcSignatureAlgorithmIdentifier,
            RsaSignatureAlgorithmIdentifier,
        },
        der::Encode,
        hex_literal::hex,
    };

    #[test]
    fn test_digest_null_accepted_and_dropped() -> Result<()> {
        let with_null = hex!("300d 0609608648016503040201 0500");
        let without = hex!("300b 0609608648016503040201");
        let digest = AlgorithmIdentifier::from_der(&with_null)?;
        assert_eq!(digest, DigestAlgorithmIdentifier::Sha256.into());
        assert_eq!(digest.to_der()?, without);
        assert_eq!(AlgorithmIdentifier::from_der(&without)?, digest);
        Ok(())
    }

    #[test]
    fn test_rsa_signature_keeps_parameters() -> Result<()> {
        let with_null = hex!("300d 06092a864886f70d01010b 0500");
        let without = hex!("300b 06092a864886f70d01010b");

        let signature = AlgorithmIdentifier::from_der(&with_null)?;
        assert_eq!(signature.name(), "sha256WithRSAEncryption");
        assert_eq!(signature.to_der()?, with_null);

        // Absent on input, NULL on output.
        let signature = AlgorithmIdentifier::from_der(&without)?;
        assert_eq!(signature.to_der()?, with_null);

        // Non-NULL parameters are kept verbatim.
        let odd = hex!("300f 06092a864886f70d01010b 0402abcd");
        let signature = AlgorithmIdentifier::from_der(&odd)?;
        let AlgorithmIdentifier::Signature(SignatureAlgorithmIdentifier::Rsa(rsa)) = &signature
        else {
            panic!("expected RSA signature");
        };
        assert_eq!(rsa.raw_parameters().to_der()?, hex!("0402abcd"));
        assert_eq!(signature.to_der()?, odd);
        Ok(())
    }

    #[test]
    fn test_ecdsa_parameters_dropped() -> Result<()> {
        let with_null = hex!("300c 06082a8648ce3d040302 0500");
        let without = hex!("300a 06082a8648ce3d040302");
        let signature = AlgorithmIdentifier::from_der(&with_null)?;
        assert_eq!(
            signature,
            SignatureAlgorithmIdentifier::from(EcSignatureAlgorithmIdentifier::Sha256).into()
        );
        assert_eq!(signature.to_der()?, without);
        Ok(())
    }

    #[test]
    fn test_rsa_signature_constructed() -> Result<()> {
        let signature: AlgorithmIdentifier = SignatureAlgorithmIdentifier::from(
            RsaSignatureAlgorithmIdentifier::new(DigestAlgorithmIdentifier::Sha1),
        )
        .into();
        assert_eq!(signature.to_der()?, hex!("300d 06092a864886f70d010105 0500"));
        Ok(())
    }

    #[test]
    fn test_hmac_sha1_emits_null() -> Result<()> {
        let without = hex!("300a 06082a864886f70d0207");
        let hmac = AlgorithmIdentifier::from_der(&without)?;
        assert_eq!(hmac, HmacAlgorithmIdentifier::Sha1.into());
        assert_eq!(hmac.to_der()?, hex!("300c 06082a864886f70d0207 0500"));
        Ok(())
    }

    #[test]
    fn test_generic_passthrough() -> Result<()> {
        let der = hex!("3010 06092b0601040182371402 0403010203");
        let generic = AlgorithmIdentifier::from_der(&der)?;
        assert!(matches!(generic, AlgorithmIdentifier::Generic(_)));
        assert!(!AlgorithmIdentifier::is_known(&generic.oid()));
        assert_eq!(generic.to_der()?, der);
        Ok(())
    }

    #[test]
    fn test_known_oid_is_resolved() -> Result<()> {
        let any = AnyAlgorithmIdentifier {
            algorithm:  ID_SHA256,
            parameters: None,
        };
        let resolved: AlgorithmIdentifier = any.clone().try_into()?;
        assert_eq!(resolved, DigestAlgorithmIdentifier::Sha256.into());
        assert_eq!(AlgorithmIdentifier::try_from(&any)?, resolved);
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AlgorithmIdentifier::from(DigestAlgorithmIdentifier::Sha384).to_string(),
            "sha384"
        );
        // RSASSA-PSS is not modeled but is in the OID database.
        let pss = AlgorithmIdentifier::Generic(AnyAlgorithmIdentifier {
            algorithm:  Oid::new_unwrap("1.2.840.113549.1.1.10"),
            parameters: None,
        });
        assert_ne!(pss.name(), "unknown");
        assert_eq!(pss.to_string(), pss.name());
        let private = AlgorithmIdentifier::Generic(AnyAlgorithmIdentifier {
            algorithm:  Oid::new_unwrap("1.3.9999.1"),
            parameters: None,
        });
        assert_eq!(private.name(), "unknown");
        assert_eq!(private.to_string(), "1.3.9999.1");
    }

    #[test]
    fn test_malformed_parameters() {
        // Digest with an INTEGER parameter.
        let der = hex!("300e 0609608648016503040201 020101");
        assert!(matches!(
            AlgorithmIdentifier::from_der(&der),
            Err(Error::MalformedStructure(_))
        ));
        // Not a sequence.
        assert!(matches!(
            AlgorithmIdentifier::from_der(&hex!("0500")),
            Err(Error::MalformedStructure(_))
        ));
    }
}
