use {
    super::{
        oid::*,
        parameters::{check_iv_size, to_any, HasInitializationVector},
    },
    crate::{ensure_err, InvalidParameter, Result},
    der::{
        asn1::{ObjectIdentifier as Oid, OctetString},
        Any, Sequence,
    },
};

/// RC2 effective key bits when not given, RFC 8018 B.2.3 recommends 64 or more.
pub const RC2_DEFAULT_EFFECTIVE_KEY_BITS: u32 = 64;

/// Effective key bits of an RC2 parameter block without version, RFC 2268 6.
pub const RC2_UNVERSIONED_EFFECTIVE_KEY_BITS: u32 = 32;

const RC2_MAX_EFFECTIVE_KEY_BITS: u32 = 1024;

/// RFC 2268 6: `rc2ParameterVersion` for effective key bits below 256.
#[rustfmt::skip]
const RC2_VERSIONS: [u8; 256] = [
    0xbd, 0x56, 0xea, 0xf2, 0xa2, 0xf1, 0xac, 0x2a, 0xb0, 0x93, 0xd1, 0x9c, 0x1b, 0x33, 0xfd, 0xd0,
    0x30, 0x04, 0xb6, 0xdc, 0x7d, 0xdf, 0x32, 0x4b, 0xf7, 0xcb, 0x45, 0x9b, 0x31, 0xbb, 0x21, 0x5a,
    0x41, 0x9f, 0xe1, 0xd9, 0x4a, 0x4d, 0x9e, 0xda, 0xa0, 0x68, 0x2c, 0xc3, 0x27, 0x5f, 0x80, 0x36,
    0x3e, 0xee, 0xfb, 0x95, 0x1a, 0xfe, 0xce, 0xa8, 0x34, 0xa9, 0x13, 0xf0, 0xa6, 0x3f, 0xd8, 0x0c,
    0x78, 0x24, 0xaf, 0x23, 0x52, 0xc1, 0x67, 0x17, 0xf5, 0x66, 0x90, 0xe7, 0xe8, 0x07, 0xb8, 0x60,
    0x48, 0xe6, 0x1e, 0x53, 0xf3, 0x92, 0xa4, 0x72, 0x8c, 0x08, 0x15, 0x6e, 0x86, 0x00, 0x84, 0xfa,
    0xf4, 0x7f, 0x8a, 0x42, 0x19, 0xf6, 0xdb, 0xcd, 0x14, 0x8d, 0x50, 0x12, 0xba, 0x3c, 0x06, 0x4e,
    0xec, 0xb3, 0x35, 0x11, 0xa1, 0x88, 0x8e, 0x2b, 0x94, 0x99, 0xb7, 0x71, 0x74, 0xd3, 0xe4, 0xbf,
    0x3a, 0xde, 0x96, 0x0e, 0xbc, 0x0a, 0xed, 0x77, 0xfc, 0x37, 0x6b, 0x03, 0x79, 0x89, 0x62, 0xc6,
    0xd7, 0xc0, 0xd2, 0x7c, 0x6a, 0x8b, 0x22, 0xa3, 0x5b, 0x05, 0x5d, 0x02, 0x75, 0xd5, 0x61, 0xe3,
    0x18, 0x8f, 0x55, 0x51, 0xad, 0x1f, 0x0b, 0x5e, 0x85, 0xe5, 0xc2, 0x57, 0x63, 0xca, 0x3d, 0x6c,
    0xb4, 0xc5, 0xcc, 0x70, 0xb2, 0x91, 0x59, 0x0d, 0x47, 0x20, 0xc8, 0x4f, 0x58, 0xe0, 0x01, 0xe2,
    0x16, 0x38, 0xc4, 0x6f, 0x3b, 0x0f, 0x65, 0x46, 0xbe, 0x7e, 0x2d, 0x7b, 0x82, 0xf9, 0x40, 0xb5,
    0x1d, 0x73, 0xf8, 0xeb, 0x26, 0xc7, 0x87, 0x97, 0x25, 0x54, 0xb1, 0x28, 0xaa, 0x98, 0x9d, 0xa5,
    0x64, 0x6d, 0x7a, 0xd4, 0x10, 0x81, 0x44, 0xef, 0x49, 0xd6, 0xae, 0x2e, 0xdd, 0x76, 0x5c, 0x2f,
    0xa7, 0x1c, 0xc9, 0x09, 0x69, 0x9a, 0x83, 0xcf, 0x29, 0x39, 0xb9, 0xe9, 0x4c, 0xff, 0x43, 0xab,
];

const RC2_EFFECTIVE_KEY_BITS: [u8; 256] = invert(&RC2_VERSIONS);

/// Block ciphers in CBC mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cipher {
    DesCbc,
    DesEde3Cbc,
    Rc2Cbc { effective_key_bits: u32 },
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
}

/// A cipher together with its initialization vector.
///
/// The parameter field is present iff the IV is set. RC2 bundles the
/// effective key bits with the IV, so without an IV only the default
/// [`RC2_DEFAULT_EFFECTIVE_KEY_BITS`] can be represented.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CipherAlgorithmIdentifier {
    cipher: Cipher,
    iv:     Option<Vec<u8>>,
}

/// RFC 2268 6 / RFC 8018 B.2.3:
///
/// ```text
/// RC2-CBC-Parameter ::= SEQUENCE {
///     rc2ParameterVersion INTEGER OPTIONAL,
///     iv OCTET STRING (SIZE(8)) }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
struct Rc2CbcParameter {
    rc2_parameter_version: Option<u64>,
    iv:                    OctetString,
}

impl Cipher {
    pub const fn oid(self) -> Oid {
        match self {
            Self::DesCbc => ID_DES_CBC,
            Self::DesEde3Cbc => ID_DES_EDE3_CBC,
            Self::Rc2Cbc { .. } => ID_RC2_CBC,
            Self::Aes128Cbc => ID_AES_128_CBC,
            Self::Aes192Cbc => ID_AES_192_CBC,
            Self::Aes256Cbc => ID_AES_256_CBC,
        }
    }

    /// RC2 comes back with the default effective key bits.
    pub fn from_oid(oid: &Oid) -> Option<Self> {
        Some(match *oid {
            ID_DES_CBC => Self::DesCbc,
            ID_DES_EDE3_CBC => Self::DesEde3Cbc,
            ID_RC2_CBC => Self::Rc2Cbc {
                effective_key_bits: RC2_DEFAULT_EFFECTIVE_KEY_BITS,
            },
            ID_AES_128_CBC => Self::Aes128Cbc,
            ID_AES_192_CBC => Self::Aes192Cbc,
            ID_AES_256_CBC => Self::Aes256Cbc,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::DesCbc => "desCBC",
            Self::DesEde3Cbc => "des-EDE3-CBC",
            Self::Rc2Cbc { .. } => "rc2-cbc",
            Self::Aes128Cbc => "aes128-CBC",
            Self::Aes192Cbc => "aes192-CBC",
            Self::Aes256Cbc => "aes256-CBC",
        }
    }

    /// Key size in bytes.
    pub const fn key_size(self) -> usize {
        match self {
            Self::DesCbc => 8,
            Self::DesEde3Cbc | Self::Aes192Cbc => 24,
            Self::Rc2Cbc { effective_key_bits } => (effective_key_bits as usize).div_ceil(8),
            Self::Aes128Cbc => 16,
            Self::Aes256Cbc => 32,
        }
    }

    /// Initialization vector size in bytes, equal to the block size.
    pub const fn iv_size(self) -> usize {
        match self {
            Self::DesCbc | Self::DesEde3Cbc | Self::Rc2Cbc { .. } => 8,
            Self::Aes128Cbc | Self::Aes192Cbc | Self::Aes256Cbc => 16,
        }
    }
}

impl CipherAlgorithmIdentifier {
    pub fn new(cipher: Cipher, iv: Option<Vec<u8>>) -> Result<Self> {
        if let Cipher::Rc2Cbc { effective_key_bits } = cipher {
            ensure_err!(
                (1..=RC2_MAX_EFFECTIVE_KEY_BITS).contains(&effective_key_bits),
                InvalidParameter::EffectiveKeyBits(effective_key_bits)
            );
            ensure_err!(
                iv.is_some() || effective_key_bits == RC2_DEFAULT_EFFECTIVE_KEY_BITS,
                InvalidParameter::MissingIv
            );
        }
        check_iv_size(iv.as_deref(), cipher.iv_size())?;
        Ok(Self { cipher, iv })
    }

    pub const fn cipher(&self) -> Cipher {
        self.cipher
    }

    pub const fn oid(&self) -> Oid {
        self.cipher.oid()
    }

    pub const fn name(&self) -> &'static str {
        self.cipher.name()
    }

    pub const fn key_size(&self) -> usize {
        self.cipher.key_size()
    }

    pub const fn effective_key_bits(&self) -> Option<u32> {
        match self.cipher {
            Cipher::Rc2Cbc { effective_key_bits } => Some(effective_key_bits),
            _ => None,
        }
    }

    pub(crate) fn from_parameters(cipher: Cipher, parameters: Option<&Any>) -> Result<Self> {
        let Some(parameters) = parameters else {
            return Self::new(cipher, None);
        };
        match cipher {
            Cipher::Rc2Cbc { .. } => {
                let params = parameters.decode_as::<Rc2CbcParameter>()?;
                let effective_key_bits = params
                    .rc2_parameter_version
                    .map_or(RC2_UNVERSIONED_EFFECTIVE_KEY_BITS, rc2_effective_key_bits);
                Self::new(
                    Cipher::Rc2Cbc { effective_key_bits },
                    Some(params.iv.into_bytes()),
                )
            }
            _ => {
                let iv = parameters.decode_as::<OctetString>()?;
                Self::new(cipher, Some(iv.into_bytes()))
            }
        }
    }

    pub(crate) fn parameters(&self) -> der::Result<Option<Any>> {
        let Some(iv) = &self.iv else {
            return Ok(None);
        };
        let iv = OctetString::new(iv.clone())?;
        let any = match self.cipher {
            Cipher::Rc2Cbc { effective_key_bits } => to_any(&Rc2CbcParameter {
                rc2_parameter_version: Some(rc2_version(effective_key_bits)),
                iv,
            })?,
            _ => to_any(&iv)?,
        };
        Ok(Some(any))
    }
}

impl HasInitializationVector for CipherAlgorithmIdentifier {
    fn iv_size(&self) -> usize {
        self.cipher.iv_size()
    }

    fn initialization_vector(&self) -> Option<&[u8]> {
        self.iv.as_deref()
    }

    fn with_initialization_vector(&self, iv: Option<Vec<u8>>) -> Result<Self> {
        Self::new(self.cipher, iv)
    }
}

fn rc2_version(effective_key_bits: u32) -> u64 {
    match u8::try_from(effective_key_bits) {
        Ok(bits) => RC2_VERSIONS[usize::from(bits)].into(),
        Err(_) => effective_key_bits.into(),
    }
}

/// Out of range versions come back as is and fail the constructor check.
fn rc2_effective_key_bits(version: u64) -> u32 {
    match u8::try_from(version) {
        Ok(version) => RC2_EFFECTIVE_KEY_BITS[usize::from(version)].into(),
        Err(_) => u32::try_from(version).unwrap_or(u32::MAX),
    }
}

const fn invert(table: &[u8; 256]) -> [u8; 256] {
    let mut inverse = [0; 256];
    let mut i = 0;
    while i < 256 {
        inverse[table[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}
