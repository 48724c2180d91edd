//! Password based cryptography, RFC 8018 (PKCS #5 v2.1).

use {
    super::{
        cipher_algorithm_identifier::{Cipher, CipherAlgorithmIdentifier},
        oid::*,
        parameters::{check_iteration_count, require_parameters, to_any, FixedParameterlessEncoding},
        AlgorithmIdentifier, AnyAlgorithmIdentifier, DigestAlgorithmIdentifier,
        HmacAlgorithmIdentifier,
    },
    crate::{ensure_err, Error, InvalidParameter, Result},
    der::{
        asn1::{ObjectIdentifier as Oid, OctetString},
        Any, Sequence, Tag, Tagged,
    },
};

/// PBES1 schemes, RFC 8018 A.3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pbes1Scheme {
    Md2AndDesCbc,
    Md5AndDesCbc,
    Md2AndRc2Cbc,
    Md5AndRc2Cbc,
    Sha1AndDesCbc,
    Sha1AndRc2Cbc,
}

/// ```text
/// PBEParameter ::= SEQUENCE {
///     salt OCTET STRING (SIZE(8)),
///     iterationCount INTEGER }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pbes1AlgorithmIdentifier {
    scheme:          Pbes1Scheme,
    salt:            [u8; 8],
    iteration_count: u64,
}

/// ```text
/// PBKDF2-params ::= SEQUENCE {
///     salt CHOICE {
///         specified OCTET STRING,
///         otherSource AlgorithmIdentifier {{PBKDF2-SaltSources}}
///     },
///     iterationCount INTEGER (1..MAX),
///     keyLength INTEGER (1..MAX) OPTIONAL,
///     prf AlgorithmIdentifier {{PBKDF2-PRFs}} DEFAULT
///     algid-hmacWithSHA1 }
/// ```
///
/// Only the `specified` salt is implemented.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pbkdf2AlgorithmIdentifier {
    salt:            Vec<u8>,
    iteration_count: u64,
    key_length:      Option<u64>,
    prf:             HmacAlgorithmIdentifier,
}

/// ```text
/// PBES2-params ::= SEQUENCE {
///     keyDerivationFunc AlgorithmIdentifier {{PBES2-KDFs}},
///     encryptionScheme AlgorithmIdentifier {{PBES2-Encs}} }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pbes2AlgorithmIdentifier {
    key_derivation_func: Pbkdf2AlgorithmIdentifier,
    encryption_scheme:   CipherAlgorithmIdentifier,
}

#[derive(Clone, Debug, PartialEq, Eq, Sequence)]
struct PbeParameter {
    salt:            OctetString,
    iteration_count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Sequence)]
struct Pbkdf2Params {
    salt:            Any,
    iteration_count: u64,
    key_length:      Option<u64>,
    prf:             Option<AnyAlgorithmIdentifier>,
}

#[derive(Clone, Debug, PartialEq, Eq, Sequence)]
struct Pbes2Params {
    key_derivation_func: AnyAlgorithmIdentifier,
    encryption_scheme:   AnyAlgorithmIdentifier,
}

impl Pbes1Scheme {
    pub const fn oid(self) -> Oid {
        match self {
            Self::Md2AndDesCbc => ID_PBE_WITH_MD2_AND_DES_CBC,
            Self::Md5AndDesCbc => ID_PBE_WITH_MD5_AND_DES_CBC,
            Self::Md2AndRc2Cbc => ID_PBE_WITH_MD2_AND_RC2_CBC,
            Self::Md5AndRc2Cbc => ID_PBE_WITH_MD5_AND_RC2_CBC,
            Self::Sha1AndDesCbc => ID_PBE_WITH_SHA1_AND_DES_CBC,
            Self::Sha1AndRc2Cbc => ID_PBE_WITH_SHA1_AND_RC2_CBC,
        }
    }

    pub fn from_oid(oid: &Oid) -> Option<Self> {
        Some(match *oid {
            ID_PBE_WITH_MD2_AND_DES_CBC => Self::Md2AndDesCbc,
            ID_PBE_WITH_MD5_AND_DES_CBC => Self::Md5AndDesCbc,
            ID_PBE_WITH_MD2_AND_RC2_CBC => Self::Md2AndRc2Cbc,
            ID_PBE_WITH_MD5_AND_RC2_CBC => Self::Md5AndRc2Cbc,
            ID_PBE_WITH_SHA1_AND_DES_CBC => Self::Sha1AndDesCbc,
            ID_PBE_WITH_SHA1_AND_RC2_CBC => Self::Sha1AndRc2Cbc,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Md2AndDesCbc => "pbeWithMD2AndDES-CBC",
            Self::Md5AndDesCbc => "pbeWithMD5AndDES-CBC",
            Self::Md2AndRc2Cbc => "pbeWithMD2AndRC2-CBC",
            Self::Md5AndRc2Cbc => "pbeWithMD5AndRC2-CBC",
            Self::Sha1AndDesCbc => "pbeWithSHA1AndDES-CBC",
            Self::Sha1AndRc2Cbc => "pbeWithSHA1AndRC2-CBC",
        }
    }

    /// The hash, `None` for MD2 which is not modeled.
    pub const fn digest(self) -> Option<DigestAlgorithmIdentifier> {
        match self {
            Self::Md2AndDesCbc | Self::Md2AndRc2Cbc => None,
            Self::Md5AndDesCbc | Self::Md5AndRc2Cbc => Some(DigestAlgorithmIdentifier::Md5),
            Self::Sha1AndDesCbc | Self::Sha1AndRc2Cbc => Some(DigestAlgorithmIdentifier::Sha1),
        }
    }

    /// RFC 8018 6.1: DES with a 56 bit key or RC2 with 64 effective key bits.
    pub const fn cipher(self) -> Cipher {
        match self {
            Self::Md2AndDesCbc | Self::Md5AndDesCbc | Self::Sha1AndDesCbc => Cipher::DesCbc,
            Self::Md2AndRc2Cbc | Self::Md5AndRc2Cbc | Self::Sha1AndRc2Cbc => Cipher::Rc2Cbc {
                effective_key_bits: 64,
            },
        }
    }
}

impl Pbes1AlgorithmIdentifier {
    pub fn new(scheme: Pbes1Scheme, salt: &[u8], iteration_count: u64) -> Result<Self> {
        let salt = <[u8; 8]>::try_from(salt)
            .map_err(|_| InvalidParameter::SaltLength(salt.len()))?;
        check_iteration_count(iteration_count)?;
        Ok(Self {
            scheme,
            salt,
            iteration_count,
        })
    }

    pub const fn scheme(&self) -> Pbes1Scheme {
        self.scheme
    }

    pub const fn oid(&self) -> Oid {
        self.scheme.oid()
    }

    pub const fn salt(&self) -> &[u8; 8] {
        &self.salt
    }

    pub const fn iteration_count(&self) -> u64 {
        self.iteration_count
    }

    pub(crate) fn from_parameters(scheme: Pbes1Scheme, parameters: Option<&Any>) -> Result<Self> {
        let params = require_parameters(parameters)?.decode_as::<PbeParameter>()?;
        Self::new(scheme, params.salt.as_bytes(), params.iteration_count)
    }

    pub(crate) fn parameters(&self) -> der::Result<Any> {
        to_any(&PbeParameter {
            salt:            OctetString::new(self.salt.as_slice())?,
            iteration_count: self.iteration_count,
        })
    }
}

impl Pbkdf2AlgorithmIdentifier {
    /// A `prf` of `None` selects the default, hmacWithSHA1.
    pub fn new(
        salt: Vec<u8>,
        iteration_count: u64,
        key_length: Option<u64>,
        prf: Option<HmacAlgorithmIdentifier>,
    ) -> Result<Self> {
        check_iteration_count(iteration_count)?;
        ensure_err!(key_length != Some(0), InvalidParameter::KeyLength);
        Ok(Self {
            salt,
            iteration_count,
            key_length,
            prf: prf.unwrap_or_default(),
        })
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub const fn iteration_count(&self) -> u64 {
        self.iteration_count
    }

    pub const fn key_length(&self) -> Option<u64> {
        self.key_length
    }

    pub const fn prf_algorithm_identifier(&self) -> HmacAlgorithmIdentifier {
        self.prf
    }

    pub(crate) fn from_parameters(parameters: Option<&Any>) -> Result<Self> {
        let params = require_parameters(parameters)?.decode_as::<Pbkdf2Params>()?;
        let salt = match params.salt.tag() {
            Tag::Sequence => {
                // Decoded only to tell a malformed source apart from an
                // unimplemented one.
                let source = params.salt.decode_as::<AnyAlgorithmIdentifier>()?;
                AlgorithmIdentifier::try_from(source)?;
                return Err(Error::UnsupportedFeature("otherSource not implemented"));
            }
            _ => params.salt.decode_as::<OctetString>()?.into_bytes(),
        };
        let prf = params
            .prf
            .map(|prf| match AlgorithmIdentifier::try_from(prf)? {
                AlgorithmIdentifier::Hmac(hmac) => Ok(hmac),
                other => Err(Error::IncompatibleAlgorithm {
                    oid:  other.oid(),
                    role: "pseudorandom function",
                }),
            })
            .transpose()?;
        Self::new(salt, params.iteration_count, params.key_length, prf)
    }

    pub(crate) fn parameters(&self) -> der::Result<Any> {
        let prf = if self.prf == HmacAlgorithmIdentifier::default() {
            None
        } else {
            Some(AnyAlgorithmIdentifier {
                algorithm:  self.prf.oid(),
                parameters: self.prf.fixed_parameters(),
            })
        };
        to_any(&Pbkdf2Params {
            salt: to_any(&OctetString::new(self.salt.as_slice())?)?,
            iteration_count: self.iteration_count,
            key_length: self.key_length,
            prf,
        })
    }
}

impl Pbes2AlgorithmIdentifier {
    pub const fn new(
        key_derivation_func: Pbkdf2AlgorithmIdentifier,
        encryption_scheme: CipherAlgorithmIdentifier,
    ) -> Self {
        Self {
            key_derivation_func,
            encryption_scheme,
        }
    }

    pub const fn key_derivation_func(&self) -> &Pbkdf2AlgorithmIdentifier {
        &self.key_derivation_func
    }

    pub const fn encryption_scheme(&self) -> &CipherAlgorithmIdentifier {
        &self.encryption_scheme
    }

    pub(crate) fn from_parameters(parameters: Option<&Any>) -> Result<Self> {
        let params = require_parameters(parameters)?.decode_as::<Pbes2Params>()?;
        let key_derivation_func = match AlgorithmIdentifier::try_from(params.key_derivation_func)? {
            AlgorithmIdentifier::Pbkdf2(kdf) => kdf,
            other => {
                return Err(Error::IncompatibleAlgorithm {
                    oid:  other.oid(),
                    role: "key derivation function",
                })
            }
        };
        let encryption_scheme = match AlgorithmIdentifier::try_from(params.encryption_scheme)? {
            AlgorithmIdentifier::Cipher(cipher) => cipher,
            other => {
                return Err(Error::IncompatibleAlgorithm {
                    oid:  other.oid(),
                    role: "encryption scheme",
                })
            }
        };
        Ok(Self::new(key_derivation_func, encryption_scheme))
    }

    pub(crate) fn parameters(&self) -> der::Result<Any> {
        to_any(&Pbes2Params {
            key_derivation_func: AnyAlgorithmIdentifier {
                algorithm:  ID_PBKDF2,
                parameters: Some(self.key_derivation_func.parameters()?),
            },
            encryption_scheme:   AnyAlgorithmIdentifier {
                algorithm:  self.encryption_scheme.oid(),
                parameters: self.encryption_scheme.parameters()?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        der::{Decode, Encode},
        hex_literal::hex,
    };

    #[test]
    fn test_pbes1_salt_length() {
        for len in [0, 7, 9, 16] {
            let result =
                Pbes1AlgorithmIdentifier::new(Pbes1Scheme::Sha1AndDesCbc, &vec![0; len], 2048);
            assert!(matches!(
                result,
                Err(Error::InvalidParameterValue(InvalidParameter::SaltLength(l))) if l == len
            ));
        }
        assert!(Pbes1AlgorithmIdentifier::new(Pbes1Scheme::Sha1AndDesCbc, &[0; 8], 2048).is_ok());
    }

    #[test]
    fn test_pbes1_iteration_count() {
        assert!(matches!(
            Pbes1AlgorithmIdentifier::new(Pbes1Scheme::Md5AndDesCbc, &[0; 8], 0),
            Err(Error::InvalidParameterValue(InvalidParameter::IterationCount))
        ));
        assert!(
            Pbes1AlgorithmIdentifier::new(Pbes1Scheme::Md5AndDesCbc, &[0; 8], u64::MAX).is_ok()
        );
    }

    #[test]
    fn test_pbes1_parameters() -> Result<()> {
        let pbe = Pbes1AlgorithmIdentifier::new(Pbes1Scheme::Sha1AndRc2Cbc, b"saltsalt", 1000)?;
        let params = pbe.parameters()?;
        assert_eq!(params.to_der()?, hex!("300e 04087361 6c747361 6c74 020203e8"));
        assert_eq!(
            Pbes1AlgorithmIdentifier::from_parameters(Pbes1Scheme::Sha1AndRc2Cbc, Some(&params))?,
            pbe
        );
        assert!(matches!(
            Pbes1AlgorithmIdentifier::from_parameters(Pbes1Scheme::Sha1AndRc2Cbc, None),
            Err(Error::InvalidParameterValue(InvalidParameter::MissingParameters))
        ));
        Ok(())
    }

    #[test]
    fn test_pbes1_scheme_components() {
        assert_eq!(Pbes1Scheme::Md5AndDesCbc.cipher(), Cipher::DesCbc);
        assert_eq!(Pbes1Scheme::Sha1AndRc2Cbc.digest(), Some(DigestAlgorithmIdentifier::Sha1));
        assert_eq!(Pbes1Scheme::Md2AndRc2Cbc.digest(), None);
    }

    #[test]
    fn test_pbkdf2_default_prf_elided() -> Result<()> {
        let kdf = Pbkdf2AlgorithmIdentifier::new(b"salt".to_vec(), 4096, None, None)?;
        assert_eq!(kdf.prf_algorithm_identifier(), HmacAlgorithmIdentifier::Sha1);
        assert_eq!(kdf.parameters()?.to_der()?, hex!("300a 040473616c74 02021000"));

        let explicit_default = Pbkdf2AlgorithmIdentifier::new(
            b"salt".to_vec(),
            4096,
            None,
            Some(HmacAlgorithmIdentifier::Sha1),
        )?;
        assert_eq!(explicit_default, kdf);
        Ok(())
    }

    #[test]
    fn test_pbkdf2_optional_fields() -> Result<()> {
        let kdf = Pbkdf2AlgorithmIdentifier::new(
            b"salt".to_vec(),
            4096,
            Some(32),
            Some(HmacAlgorithmIdentifier::Sha256),
        )?;
        assert_eq!(
            kdf.parameters()?.to_der()?,
            hex!("3019 040473616c74 02021000 020120 300a 06082a864886f70d0209")
        );
        let decoded = Pbkdf2AlgorithmIdentifier::from_parameters(Some(&kdf.parameters()?))?;
        assert_eq!(decoded, kdf);
        assert_eq!(decoded.key_length(), Some(32));
        Ok(())
    }

    #[test]
    fn test_pbkdf2_other_source() -> Result<()> {
        // salt: otherSource = { id-sha1 }
        let params = Any::from_der(&hex!("300d 3007 06052b0e03021a 02021000"))?;
        assert!(matches!(
            Pbkdf2AlgorithmIdentifier::from_parameters(Some(&params)),
            Err(Error::UnsupportedFeature("otherSource not implemented"))
        ));
        Ok(())
    }

    #[test]
    fn test_pbkdf2_prf_must_be_hmac() -> Result<()> {
        // prf: id-sha256
        let params = Any::from_der(&hex!(
            "3019 040473616c74 02021000 300d 0609608648016503040201 0500"
        ))?;
        assert!(matches!(
            Pbkdf2AlgorithmIdentifier::from_parameters(Some(&params)),
            Err(Error::IncompatibleAlgorithm { oid, .. }) if oid == ID_SHA256
        ));
        Ok(())
    }

    #[test]
    fn test_pbkdf2_zero_key_length() {
        assert!(matches!(
            Pbkdf2AlgorithmIdentifier::new(b"salt".to_vec(), 1, Some(0), None),
            Err(Error::InvalidParameterValue(InvalidParameter::KeyLength))
        ));
    }

    #[test]
    fn test_pbes2_parameters() -> Result<()> {
        let kdf = Pbkdf2AlgorithmIdentifier::new(
            hex!("0102030405060708").to_vec(),
            2048,
            None,
            Some(HmacAlgorithmIdentifier::Sha256),
        )?;
        let cipher = CipherAlgorithmIdentifier::new(Cipher::Aes256Cbc, Some(vec![0xaa; 16]))?;
        let pbes2 = Pbes2AlgorithmIdentifier::new(kdf, cipher);
        let params = pbes2.parameters()?;
        assert_eq!(Pbes2AlgorithmIdentifier::from_parameters(Some(&params))?, pbes2);
        Ok(())
    }

    #[test]
    fn test_pbes2_rejects_wrong_roles() -> Result<()> {
        // keyDerivationFunc: id-sha1, encryptionScheme: des-cbc
        let params = Any::from_der(&hex!(
            "3016 3007 06052b0e03021a 300b 06052b0e030207 0402 0000"
        ))?;
        assert!(matches!(
            Pbes2AlgorithmIdentifier::from_parameters(Some(&params)),
            Err(Error::IncompatibleAlgorithm {
                oid,
                role: "key derivation function",
            }) if oid == ID_SHA1
        ));
        Ok(())
    }
}
