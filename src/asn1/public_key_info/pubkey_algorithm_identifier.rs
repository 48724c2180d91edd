use {
    crate::{
        asn1::{
            oid::*,
            parameters::{expect_no_parameters, to_any, FixedParameterlessEncoding},
        },
        Error, Result,
    },
    der::{asn1::ObjectIdentifier as Oid, Any, Tag, Tagged},
};

/// Asymmetric key algorithms.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum PubkeyAlgorithmIdentifier {
    /// RFC 3279 2.3.1: parameters MUST be NULL. We also accept them absent.
    Rsa,
    Ec(EcPublicKeyAlgorithmIdentifier),
}

/// RFC 5480 2.1.1:
///
/// ```text
/// ECParameters ::= CHOICE {
///     namedCurve         OBJECT IDENTIFIER
///     -- implicitCurve   NULL
///     -- specifiedCurve  SpecifiedECDomain
/// }
/// ```
///
/// Only named curves are implemented. The parameters may be absent when the
/// curve is inherited from elsewhere.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Default)]
pub struct EcPublicKeyAlgorithmIdentifier {
    pub named_curve: Option<Oid>,
}

impl PubkeyAlgorithmIdentifier {
    pub const fn ec(named_curve: Option<Oid>) -> Self {
        Self::Ec(EcPublicKeyAlgorithmIdentifier { named_curve })
    }

    pub const fn oid(&self) -> Oid {
        match self {
            Self::Rsa => ID_RSA_ENCRYPTION,
            Self::Ec(_) => ID_EC_PUBLIC_KEY,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rsa => "rsaEncryption",
            Self::Ec(_) => "id-ecPublicKey",
        }
    }

    /// Constructs the variant without parameters.
    pub fn from_oid(oid: &Oid) -> Option<Self> {
        Some(match *oid {
            ID_RSA_ENCRYPTION => Self::Rsa,
            ID_EC_PUBLIC_KEY => Self::ec(None),
            _ => return None,
        })
    }

    pub(crate) fn with_parameters(self, parameters: Option<&Any>) -> Result<Self> {
        Ok(match self {
            Self::Rsa => {
                expect_no_parameters(parameters)?;
                Self::Rsa
            }
            Self::Ec(_) => Self::Ec(EcPublicKeyAlgorithmIdentifier::from_parameters(parameters)?),
        })
    }

    pub(crate) fn parameters(&self) -> der::Result<Option<Any>> {
        match self {
            Self::Rsa => Ok(self.fixed_parameters()),
            Self::Ec(ec) => ec.named_curve.as_ref().map(to_any).transpose(),
        }
    }
}

impl FixedParameterlessEncoding for PubkeyAlgorithmIdentifier {
    fn emits_null(&self) -> bool {
        matches!(self, Self::Rsa)
    }
}

impl EcPublicKeyAlgorithmIdentifier {
    fn from_parameters(parameters: Option<&Any>) -> Result<Self> {
        let Some(parameters) = parameters else {
            return Ok(Self::default());
        };
        match parameters.tag() {
            Tag::ObjectIdentifier => Ok(Self {
                named_curve: Some(parameters.decode_as()?),
            }),
            Tag::Null => Err(Error::UnsupportedFeature("implicit EC curve")),
            Tag::Sequence => Err(Error::UnsupportedFeature("explicit EC curve parameters")),
            tag => Err(tag.value_error().into()),
        }
    }

    /// Size of the curve in bits, `None` for curves we don't know.
    pub fn curve_size(&self) -> Option<u32> {
        self.named_curve.as_ref().and_then(curve_size)
    }
}

/// Field size in bits of the named curves.
pub fn curve_size(named_curve: &Oid) -> Option<u32> {
    Some(match *named_curve {
        ID_PRIME192V1 => 192,
        ID_SECP224R1 => 224,
        ID_PRIME256V1 => 256,
        ID_SECP384R1 => 384,
        ID_SECP521R1 => 521,
        _ => return None,
    })
}

impl From<EcPublicKeyAlgorithmIdentifier> for PubkeyAlgorithmIdentifier {
    fn from(ec: EcPublicKeyAlgorithmIdentifier) -> Self {
        Self::Ec(ec)
    }
}
