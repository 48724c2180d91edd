//! Object identifiers of the modeled algorithms.

use der::asn1::ObjectIdentifier as Oid;

// RFC 8017 A.1, RFC 5480 2.1.1
pub const ID_RSA_ENCRYPTION: Oid = Oid::new_unwrap("1.2.840.113549.1.1.1");
pub const ID_EC_PUBLIC_KEY: Oid = Oid::new_unwrap("1.2.840.10045.2.1");

// RFC 8017 A.2.4, RFC 4055 5
pub const ID_MD5_WITH_RSA_ENCRYPTION: Oid = Oid::new_unwrap("1.2.840.113549.1.1.4");
pub const ID_SHA1_WITH_RSA_ENCRYPTION: Oid = Oid::new_unwrap("1.2.840.113549.1.1.5");
pub const ID_SHA256_WITH_RSA_ENCRYPTION: Oid = Oid::new_unwrap("1.2.840.113549.1.1.11");
pub const ID_SHA384_WITH_RSA_ENCRYPTION: Oid = Oid::new_unwrap("1.2.840.113549.1.1.12");
pub const ID_SHA512_WITH_RSA_ENCRYPTION: Oid = Oid::new_unwrap("1.2.840.113549.1.1.13");
pub const ID_SHA224_WITH_RSA_ENCRYPTION: Oid = Oid::new_unwrap("1.2.840.113549.1.1.14");

// RFC 5758 3.2, RFC 3279 2.2.3
pub const ID_ECDSA_WITH_SHA1: Oid = Oid::new_unwrap("1.2.840.10045.4.1");
pub const ID_ECDSA_WITH_SHA224: Oid = Oid::new_unwrap("1.2.840.10045.4.3.1");
pub const ID_ECDSA_WITH_SHA256: Oid = Oid::new_unwrap("1.2.840.10045.4.3.2");
pub const ID_ECDSA_WITH_SHA384: Oid = Oid::new_unwrap("1.2.840.10045.4.3.3");
pub const ID_ECDSA_WITH_SHA512: Oid = Oid::new_unwrap("1.2.840.10045.4.3.4");

// RFC 5480 2.1.1.1
pub const ID_PRIME192V1: Oid = Oid::new_unwrap("1.2.840.10045.3.1.1");
pub const ID_SECP224R1: Oid = Oid::new_unwrap("1.3.132.0.33");
pub const ID_PRIME256V1: Oid = Oid::new_unwrap("1.2.840.10045.3.1.7");
pub const ID_SECP384R1: Oid = Oid::new_unwrap("1.3.132.0.34");
pub const ID_SECP521R1: Oid = Oid::new_unwrap("1.3.132.0.35");

// RFC 3370 2, RFC 5754 2
pub const ID_MD5: Oid = Oid::new_unwrap("1.2.840.113549.2.5");
pub const ID_SHA1: Oid = Oid::new_unwrap("1.3.14.3.2.26");
pub const ID_SHA224: Oid = Oid::new_unwrap("2.16.840.1.101.3.4.2.4");
pub const ID_SHA256: Oid = Oid::new_unwrap("2.16.840.1.101.3.4.2.1");
pub const ID_SHA384: Oid = Oid::new_unwrap("2.16.840.1.101.3.4.2.2");
pub const ID_SHA512: Oid = Oid::new_unwrap("2.16.840.1.101.3.4.2.3");

// RFC 8018 B.1, RFC 4231 3.1
pub const ID_HMAC_WITH_SHA1: Oid = Oid::new_unwrap("1.2.840.113549.2.7");
pub const ID_HMAC_WITH_SHA224: Oid = Oid::new_unwrap("1.2.840.113549.2.8");
pub const ID_HMAC_WITH_SHA256: Oid = Oid::new_unwrap("1.2.840.113549.2.9");
pub const ID_HMAC_WITH_SHA384: Oid = Oid::new_unwrap("1.2.840.113549.2.10");
pub const ID_HMAC_WITH_SHA512: Oid = Oid::new_unwrap("1.2.840.113549.2.11");

// RFC 8018 B.2, RFC 3565 4.1
pub const ID_DES_CBC: Oid = Oid::new_unwrap("1.3.14.3.2.7");
pub const ID_RC2_CBC: Oid = Oid::new_unwrap("1.2.840.113549.3.2");
pub const ID_DES_EDE3_CBC: Oid = Oid::new_unwrap("1.2.840.113549.3.7");
pub const ID_AES_128_CBC: Oid = Oid::new_unwrap("2.16.840.1.101.3.4.1.2");
pub const ID_AES_192_CBC: Oid = Oid::new_unwrap("2.16.840.1.101.3.4.1.22");
pub const ID_AES_256_CBC: Oid = Oid::new_unwrap("2.16.840.1.101.3.4.1.42");

// RFC 8018 A.3, A.2, A.4
pub const ID_PBE_WITH_MD2_AND_DES_CBC: Oid = Oid::new_unwrap("1.2.840.113549.1.5.1");
pub const ID_PBE_WITH_MD5_AND_DES_CBC: Oid = Oid::new_unwrap("1.2.840.113549.1.5.3");
pub const ID_PBE_WITH_MD2_AND_RC2_CBC: Oid = Oid::new_unwrap("1.2.840.113549.1.5.4");
pub const ID_PBE_WITH_MD5_AND_RC2_CBC: Oid = Oid::new_unwrap("1.2.840.113549.1.5.6");
pub const ID_PBE_WITH_SHA1_AND_DES_CBC: Oid = Oid::new_unwrap("1.2.840.113549.1.5.10");
pub const ID_PBE_WITH_SHA1_AND_RC2_CBC: Oid = Oid::new_unwrap("1.2.840.113549.1.5.11");
pub const ID_PBKDF2: Oid = Oid::new_unwrap("1.2.840.113549.1.5.12");
pub const ID_PBES2: Oid = Oid::new_unwrap("1.2.840.113549.1.5.13");
