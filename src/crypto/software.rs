//! CBC mode block ciphers in pure Rust.

use {
    super::CipherEngine,
    aes::{Aes128, Aes192, Aes256},
    anyhow::{anyhow, bail, ensure, Result},
    cipher::{
        block_padding::NoPadding, BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit,
        KeyIvInit,
    },
    des::{Des, TdesEde3},
};

/// [`CipherEngine`] for DES, 3DES and AES. RC2 is not available.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftwareCipherEngine;

impl CipherEngine for SoftwareCipherEngine {
    fn encrypt(&self, data: &[u8], key: &[u8], iv: &[u8], cipher: &str) -> Result<Vec<u8>> {
        match cipher {
            "DES-CBC" => encrypt_cbc::<Des>(data, key, iv),
            "DES-EDE3-CBC" => encrypt_cbc::<TdesEde3>(data, key, iv),
            "AES-128-CBC" => encrypt_cbc::<Aes128>(data, key, iv),
            "AES-192-CBC" => encrypt_cbc::<Aes192>(data, key, iv),
            "AES-256-CBC" => encrypt_cbc::<Aes256>(data, key, iv),
            _ => bail!("Cipher {cipher} not supported"),
        }
    }

    fn decrypt(&self, data: &[u8], key: &[u8], iv: &[u8], cipher: &str) -> Result<Vec<u8>> {
        match cipher {
            "DES-CBC" => decrypt_cbc::<Des>(data, key, iv),
            "DES-EDE3-CBC" => decrypt_cbc::<TdesEde3>(data, key, iv),
            "AES-128-CBC" => decrypt_cbc::<Aes128>(data, key, iv),
            "AES-192-CBC" => decrypt_cbc::<Aes192>(data, key, iv),
            "AES-256-CBC" => decrypt_cbc::<Aes256>(data, key, iv),
            _ => bail!("Cipher {cipher} not supported"),
        }
    }
}

fn encrypt_cbc<C>(data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    ensure!(
        data.len() % C::block_size() == 0,
        "Data must be a multiple of the block size"
    );
    let encryptor = cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| anyhow!("Invalid key or IV length"))?;
    Ok(encryptor.encrypt_padded_vec_mut::<NoPadding>(data))
}

fn decrypt_cbc<C>(data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    ensure!(
        data.len() % C::block_size() == 0,
        "Data must be a multiple of the block size"
    );
    let decryptor = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| anyhow!("Invalid key or IV length"))?;
    decryptor
        .decrypt_padded_vec_mut::<NoPadding>(data)
        .map_err(|_| anyhow!("Decryption failed"))
}
