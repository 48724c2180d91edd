use {
    anyhow::{anyhow as err, ensure, Result},
    der::Encode,
    hex_literal::hex,
    pkix_algid::{
        asn1::{
            oid::*, AlgorithmIdentifier, Cipher, CipherAlgorithmIdentifier,
            DigestAlgorithmIdentifier, HasInitializationVector, HmacAlgorithmIdentifier,
            Pbes1AlgorithmIdentifier, Pbes1Scheme, Pbes2AlgorithmIdentifier,
            Pbkdf2AlgorithmIdentifier, PrivateKeyInfo, PubkeyAlgorithmIdentifier, PublicKeyInfo,
            SignatureAlgorithmIdentifier,
        },
        Error, InvalidParameter,
    },
};

/// Decodes and checks the encoding is reproduced.
fn round_trip(der: &[u8]) -> Result<AlgorithmIdentifier> {
    let algorithm = AlgorithmIdentifier::from_der(der)?;
    ensure!(
        algorithm.to_der()? == der,
        "{algorithm} does not re-encode to its input"
    );
    Ok(algorithm)
}

#[test]
fn test_canonical_round_trips() -> Result<()> {
    let cases: [(&[u8], &str); 8] = [
        (&hex!("300d 06092a864886f70d010101 0500"), "rsaEncryption"),
        (
            &hex!("3013 06072a8648ce3d0201 06082a8648ce3d030107"),
            "id-ecPublicKey",
        ),
        (&hex!("300d 06092a864886f70d01010c 0500"), "sha384WithRSAEncryption"),
        (&hex!("300a 06082a8648ce3d040303"), "ecdsa-with-SHA384"),
        (&hex!("300b 0609608648016503040203"), "sha512"),
        (&hex!("300a 06082a864886f70d020b"), "hmacWithSHA512"),
        (&hex!("300b 0609608648016503040116"), "aes192-CBC"),
        (
            &hex!("301b 06092a864886f70d01050a 300e 04087361 6c747361 6c74 020203e8"),
            "pbeWithSHA1AndDES-CBC",
        ),
    ];
    for (der, name) in cases {
        assert_eq!(round_trip(der)?.name(), name);
    }
    Ok(())
}

#[test]
fn test_cipher_iv() -> Result<()> {
    let der = hex!("301d 0609608648016503040102 0410 000102030405060708090a0b0c0d0e0f");
    let AlgorithmIdentifier::Cipher(aes) = round_trip(&der)? else {
        return Err(err!("expected a cipher"));
    };
    assert_eq!(aes.cipher(), Cipher::Aes128Cbc);
    assert_eq!(aes.key_size(), 16);
    assert_eq!(
        aes.initialization_vector(),
        Some(hex!("000102030405060708090a0b0c0d0e0f").as_slice())
    );

    // Without IV the parameters are omitted.
    let without = aes.with_initialization_vector(None)?;
    assert_eq!(
        AlgorithmIdentifier::from(without).to_der()?,
        hex!("300b 0609608648016503040102")
    );

    // IV of the wrong size fails the same way as the constructor.
    let short = hex!("3015 0609608648016503040102 0408 0001020304050607");
    assert!(matches!(
        AlgorithmIdentifier::from_der(&short),
        Err(Error::InvalidParameterValue(InvalidParameter::IvSize {
            expected: 16,
            actual:   8,
        }))
    ));
    Ok(())
}

#[test]
fn test_rc2_without_version() -> Result<()> {
    let der = hex!("3016 06082a864886f70d0302 300a 04080000000000000000");
    let AlgorithmIdentifier::Cipher(rc2) = AlgorithmIdentifier::from_der(&der)? else {
        return Err(err!("expected a cipher"));
    };
    assert_eq!(rc2.effective_key_bits(), Some(32));
    assert_eq!(rc2.key_size(), 4);

    // Written back with the explicit version for 32 bits.
    let encoded = AlgorithmIdentifier::from(rc2.clone()).to_der()?;
    assert_eq!(
        encoded,
        hex!("3019 06082a864886f70d0302 300d 020141 04080000000000000000")
    );
    assert_eq!(AlgorithmIdentifier::from_der(&encoded)?, AlgorithmIdentifier::Cipher(rc2));
    Ok(())
}

#[test]
fn test_rc2_key_bits_round_trip() -> Result<()> {
    for effective_key_bits in [1, 40, 64, 100, 128, 255, 256, 1024] {
        let cipher = Cipher::Rc2Cbc { effective_key_bits };
        let rc2 = CipherAlgorithmIdentifier::new(cipher, Some(vec![0x11; 8]))?;
        let decoded = round_trip(&AlgorithmIdentifier::from(rc2.clone()).to_der()?)?;
        assert_eq!(decoded, AlgorithmIdentifier::Cipher(rc2));
    }

    // Without an IV only the default key bits are representable.
    let default = CipherAlgorithmIdentifier::new(
        Cipher::Rc2Cbc {
            effective_key_bits: 64,
        },
        None,
    )?;
    let der = AlgorithmIdentifier::from(default.clone()).to_der()?;
    assert_eq!(der, hex!("300a 06082a864886f70d0302"));
    assert_eq!(AlgorithmIdentifier::from_der(&der)?, AlgorithmIdentifier::Cipher(default));
    let forty = Cipher::Rc2Cbc {
        effective_key_bits: 40,
    };
    assert!(matches!(
        CipherAlgorithmIdentifier::new(forty, None),
        Err(Error::InvalidParameterValue(InvalidParameter::MissingIv))
    ));
    Ok(())
}

#[test]
fn test_unknown_oid_passthrough() -> Result<()> {
    // Ed25519 with a bogus parameter, neither is modeled.
    let der = hex!("3009 06032b6570 0202 0539");
    let generic = round_trip(&der)?;
    let AlgorithmIdentifier::Generic(any) = &generic else {
        return Err(err!("expected a generic identifier"));
    };
    assert_eq!(any.algorithm.to_string(), "1.3.101.112");
    assert_eq!(
        any.parameters.as_ref().map(Encode::to_der).transpose()?,
        Some(hex!("02020539").to_vec())
    );
    Ok(())
}

#[test]
fn test_pbkdf2_elision() -> Result<()> {
    let pbkdf2 = Pbkdf2AlgorithmIdentifier::new(b"saltsalt".to_vec(), 2000, Some(16), None)?;
    let der = AlgorithmIdentifier::from(pbkdf2.clone()).to_der()?;
    assert_eq!(
        der,
        hex!("301e 06092a864886f70d01050c 3011 040873616c7473616c74 020207d0 020110")
    );
    let decoded = round_trip(&der)?;
    assert_eq!(decoded, AlgorithmIdentifier::Pbkdf2(pbkdf2));

    // An explicit default PRF decodes to the same value.
    let explicit = hex!(
        "302c 06092a864886f70d01050c"
        "301f 040873616c7473616c74 020207d0 020110 300c 06082a864886f70d0207 0500"
    );
    assert_eq!(AlgorithmIdentifier::from_der(&explicit)?, decoded);
    Ok(())
}

#[test]
fn test_pbes2() -> Result<()> {
    let der = hex!(
        "3055 06092a864886f70d01050d"
        "3048"
        "3027 06092a864886f70d01050c"
        "301a 040873616c7473616c74 02020800 300a 06082a864886f70d0209"
        "301d 060960864801650304012a 0410 000102030405060708090a0b0c0d0e0f"
    );
    let AlgorithmIdentifier::Pbes2(pbes2) = round_trip(&der)? else {
        return Err(err!("expected PBES2"));
    };
    let kdf = pbes2.key_derivation_func();
    assert_eq!(kdf.salt(), b"saltsalt");
    assert_eq!(kdf.iteration_count(), 2048);
    assert_eq!(kdf.key_length(), None);
    assert_eq!(kdf.prf_algorithm_identifier(), HmacAlgorithmIdentifier::Sha256);
    assert_eq!(pbes2.encryption_scheme().cipher(), Cipher::Aes256Cbc);

    let built = Pbes2AlgorithmIdentifier::new(
        Pbkdf2AlgorithmIdentifier::new(
            b"saltsalt".to_vec(),
            2048,
            None,
            Some(HmacAlgorithmIdentifier::Sha256),
        )?,
        CipherAlgorithmIdentifier::new(Cipher::Aes256Cbc, Some((0..16).collect()))?,
    );
    assert_eq!(AlgorithmIdentifier::from(built).to_der()?, der);
    Ok(())
}

#[test]
fn test_pbes2_wrong_kdf() {
    let der = hex!(
        "3035 06092a864886f70d01050d"
        "3028 3007 06052b0e03021a"
        "301d 060960864801650304012a 0410 000102030405060708090a0b0c0d0e0f"
    );
    assert!(matches!(
        AlgorithmIdentifier::from_der(&der),
        Err(Error::IncompatibleAlgorithm {
            oid: ID_SHA1,
            role: "key derivation function",
        })
    ));
}

#[test]
fn test_pbes1_salt() -> Result<()> {
    let pbes1 = Pbes1AlgorithmIdentifier::new(Pbes1Scheme::Md5AndRc2Cbc, b"12345678", 1)?;
    assert_eq!(
        pbes1.scheme().cipher(),
        Cipher::Rc2Cbc {
            effective_key_bits: 64,
        }
    );
    assert_eq!(pbes1.scheme().digest(), Some(DigestAlgorithmIdentifier::Md5));
    round_trip(&AlgorithmIdentifier::from(pbes1).to_der()?)?;

    // Salt of 7 bytes on the wire.
    let der = hex!("301a 06092a864886f70d010503 300d 040773616c7473616c 020203e8");
    assert!(matches!(
        AlgorithmIdentifier::from_der(&der),
        Err(Error::InvalidParameterValue(InvalidParameter::SaltLength(7)))
    ));
    Ok(())
}

#[test]
fn test_signature_factory() -> Result<()> {
    let rsa = PubkeyAlgorithmIdentifier::Rsa.into();
    let ec = PubkeyAlgorithmIdentifier::ec(Some(ID_SECP384R1)).into();

    let signature = SignatureAlgorithmIdentifier::for_asymmetric_crypto(
        &rsa,
        &DigestAlgorithmIdentifier::Sha256.into(),
    )?;
    assert_eq!(signature.name(), "sha256WithRSAEncryption");
    assert_eq!(
        AlgorithmIdentifier::from(signature).to_der()?,
        hex!("300d 06092a864886f70d01010b 0500")
    );

    let signature = SignatureAlgorithmIdentifier::for_asymmetric_crypto(
        &ec,
        &DigestAlgorithmIdentifier::Sha1.into(),
    )?;
    assert_eq!(signature.name(), "ecdsa-with-SHA1");
    assert!(signature.supports_key_algorithm(&ec));
    assert!(!signature.supports_key_algorithm(&rsa));

    // SHA3-256 is not modeled.
    let sha3 = AlgorithmIdentifier::from_der(&hex!("300b 0609608648016503040208"))?;
    assert!(matches!(sha3, AlgorithmIdentifier::Generic(_)));
    assert!(matches!(
        SignatureAlgorithmIdentifier::for_asymmetric_crypto(&rsa, &sha3),
        Err(Error::UnsupportedCombination { .. })
    ));
    Ok(())
}

#[test]
fn test_private_key_info() -> Result<()> {
    let der = hex!(
        "3016 020100 300d 06092a864886f70d010101 0500 0402 cafe"
    );
    let info = PrivateKeyInfo::from_der(&der)?;
    assert_eq!(info.algorithm(), &PubkeyAlgorithmIdentifier::Rsa.into());
    assert_eq!(info.private_key(), hex!("cafe"));
    assert_eq!(info.to_der()?, der);

    let v1 = hex!("3016 020101 300d 06092a864886f70d010101 0500 0402 cafe");
    assert!(matches!(
        PrivateKeyInfo::from_der(&v1),
        Err(Error::UnsupportedVersion(1))
    ));
    Ok(())
}

#[test]
fn test_key_info_pem() -> Result<()> {
    let public =
        PublicKeyInfo::new(PubkeyAlgorithmIdentifier::Rsa, hex!("3006020101020103").to_vec());
    let pem = public.to_pem()?;
    assert!(pem.contains("BEGIN PUBLIC KEY"));
    assert_eq!(PublicKeyInfo::from_pem(&pem)?, public);

    let private =
        PrivateKeyInfo::new(PubkeyAlgorithmIdentifier::ec(Some(ID_PRIME256V1)), vec![1; 32]);
    let pem = private.to_pem()?;
    assert!(pem.contains("BEGIN PRIVATE KEY"));
    assert_eq!(PrivateKeyInfo::from_pem(&pem)?, private);
    assert!(PublicKeyInfo::from_pem(&pem).is_err());
    Ok(())
}
