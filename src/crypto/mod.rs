//! Translation to a native crypto engine.
//!
//! The engines work with algorithm names. [`Crypto`] resolves identifiers to
//! those names, checks that the inputs fit together and hands the work to
//! the engine.

#[cfg(feature = "software-engine")]
mod software;

#[cfg(feature = "software-engine")]
pub use self::software::SoftwareCipherEngine;
use {
    crate::{
        asn1::{
            AlgorithmIdentifier, Cipher, CipherAlgorithmIdentifier, DigestAlgorithmIdentifier,
            HasInitializationVector, PrivateKeyInfo, PublicKeyInfo, SignatureAlgorithmIdentifier,
        },
        ensure_err, Error, InvalidParameter, Result,
    },
    tracing::debug,
};

/// Native signing and verification.
pub trait SignatureEngine {
    fn sign(
        &self,
        data: &[u8],
        private_key: &PrivateKeyInfo,
        digest: &str,
    ) -> anyhow::Result<Vec<u8>>;

    fn verify(
        &self,
        data: &[u8],
        signature: &[u8],
        public_key: &PublicKeyInfo,
        digest: &str,
    ) -> anyhow::Result<bool>;
}

/// Native symmetric encryption, without padding.
pub trait CipherEngine {
    fn encrypt(&self, data: &[u8], key: &[u8], iv: &[u8], cipher: &str)
        -> anyhow::Result<Vec<u8>>;

    fn decrypt(&self, data: &[u8], key: &[u8], iv: &[u8], cipher: &str)
        -> anyhow::Result<Vec<u8>>;
}

/// Opaque wrapper for signatures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

#[derive(Clone, Debug, Default)]
pub struct Crypto<E> {
    engine: E,
}

impl Signature {
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl From<Vec<u8>> for Signature {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl<E> Crypto<E> {
    pub const fn new(engine: E) -> Self {
        Self { engine }
    }

    pub const fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E: SignatureEngine> Crypto<E> {
    pub fn sign(
        &self,
        data: &[u8],
        private_key: &PrivateKeyInfo,
        algorithm: &SignatureAlgorithmIdentifier,
    ) -> Result<Signature> {
        check_signature_key(algorithm, private_key.algorithm())?;
        let digest = digest_name(algorithm);
        debug!(algorithm = algorithm.name(), digest, "sign");
        self.engine
            .sign(data, private_key, digest)
            .map(Signature)
            .map_err(engine_failure)
    }

    pub fn verify(
        &self,
        data: &[u8],
        signature: &Signature,
        public_key: &PublicKeyInfo,
        algorithm: &SignatureAlgorithmIdentifier,
    ) -> Result<bool> {
        check_signature_key(algorithm, public_key.algorithm())?;
        let digest = digest_name(algorithm);
        debug!(algorithm = algorithm.name(), digest, "verify");
        self.engine
            .verify(data, signature.as_ref(), public_key, digest)
            .map_err(engine_failure)
    }
}

impl<E: CipherEngine> Crypto<E> {
    pub fn encrypt(
        &self,
        data: &[u8],
        key: &[u8],
        algorithm: &CipherAlgorithmIdentifier,
    ) -> Result<Vec<u8>> {
        let (cipher, iv) = cipher_inputs(key, algorithm)?;
        debug!(cipher, len = data.len(), "encrypt");
        self.engine
            .encrypt(data, key, iv, cipher)
            .map_err(engine_failure)
    }

    pub fn decrypt(
        &self,
        data: &[u8],
        key: &[u8],
        algorithm: &CipherAlgorithmIdentifier,
    ) -> Result<Vec<u8>> {
        let (cipher, iv) = cipher_inputs(key, algorithm)?;
        debug!(cipher, len = data.len(), "decrypt");
        self.engine
            .decrypt(data, key, iv, cipher)
            .map_err(engine_failure)
    }
}

/// Engine digest name for a signature algorithm.
///
/// ECDSA takes plain hash names, except SHA-1 which engines know by the
/// signature name.
pub const fn digest_name(algorithm: &SignatureAlgorithmIdentifier) -> &'static str {
    match algorithm {
        SignatureAlgorithmIdentifier::Rsa(rsa) => rsa.name(),
        SignatureAlgorithmIdentifier::Ec(ec) => match ec.digest() {
            DigestAlgorithmIdentifier::Sha1 => ec.name(),
            digest => digest.name(),
        },
    }
}

/// Engine cipher name for a cipher algorithm.
pub fn cipher_name(algorithm: &CipherAlgorithmIdentifier) -> Result<&'static str> {
    Ok(match algorithm.cipher() {
        Cipher::DesCbc => "DES-CBC",
        Cipher::DesEde3Cbc => "DES-EDE3-CBC",
        Cipher::Aes128Cbc => "AES-128-CBC",
        Cipher::Aes192Cbc => "AES-192-CBC",
        Cipher::Aes256Cbc => "AES-256-CBC",
        Cipher::Rc2Cbc {
            effective_key_bits: 128,
        } => "RC2-CBC",
        Cipher::Rc2Cbc {
            effective_key_bits: 64,
        } => "RC2-64-CBC",
        Cipher::Rc2Cbc {
            effective_key_bits: 40,
        } => "RC2-40-CBC",
        Cipher::Rc2Cbc { .. } => return Err(Error::UnknownAlgorithm(algorithm.oid())),
    })
}

fn check_signature_key(
    algorithm: &SignatureAlgorithmIdentifier,
    key_algorithm: &AlgorithmIdentifier,
) -> Result<()> {
    ensure_err!(
        algorithm.supports_key_algorithm(key_algorithm),
        Error::IncompatibleAlgorithm {
            oid:  key_algorithm.oid(),
            role: "signature key",
        }
    );
    Ok(())
}

fn cipher_inputs<'a>(
    key: &[u8],
    algorithm: &'a CipherAlgorithmIdentifier,
) -> Result<(&'static str, &'a [u8])> {
    let cipher = cipher_name(algorithm)?;
    ensure_err!(
        key.len() == algorithm.key_size(),
        InvalidParameter::KeySize {
            expected: algorithm.key_size(),
            actual:   key.len(),
        }
    );
    let iv = algorithm
        .initialization_vector()
        .ok_or(InvalidParameter::MissingIv)?;
    Ok((cipher, iv))
}

fn engine_failure(error: anyhow::Error) -> Error {
    Error::EngineFailure(format!("{error:#}"))
}
