use {der::asn1::ObjectIdentifier as Oid, thiserror::Error};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Wrong node shape, arity or tag.
    #[error("malformed structure: {0}")]
    MalformedStructure(#[from] der::Error),

    #[error("invalid parameter value: {0}")]
    InvalidParameterValue(#[from] InvalidParameter),

    /// Recognized but unimplemented encoding.
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(&'static str),

    /// No native name is known for the algorithm.
    #[error("unknown algorithm {0}")]
    UnknownAlgorithm(Oid),

    #[error("algorithm {oid} is not supported as {role}")]
    IncompatibleAlgorithm { oid: Oid, role: &'static str },

    #[error("no signature algorithm for {crypto} with {hash}")]
    UnsupportedCombination { crypto: String, hash: String },

    #[error("unsupported version {0}, expected 0")]
    UnsupportedVersion(u64),

    #[error("crypto engine failure: {0}")]
    EngineFailure(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidParameter {
    #[error("initialization vector must be {expected} bytes, got {actual}")]
    IvSize { expected: usize, actual: usize },

    #[error("salt must be 8 octets, got {0}")]
    SaltLength(usize),

    #[error("iteration count must be positive")]
    IterationCount,

    #[error("key length must be positive")]
    KeyLength,

    #[error("{0} effective key bits not supported for RC2")]
    EffectiveKeyBits(u32),

    #[error("key must be {expected} bytes, got {actual}")]
    KeySize { expected: usize, actual: usize },

    #[error("initialization vector not set")]
    MissingIv,

    #[error("parameters missing")]
    MissingParameters,
}
