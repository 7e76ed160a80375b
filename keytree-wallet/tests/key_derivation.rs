//! Tests for seed and key-tree derivation

use keytree_wallet::crypto::keys::*;
use keytree_wallet::crypto::seed::*;
use keytree_wallet::Error;

const ABANDON: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn bip32_vector_master() -> HdNode {
    let bytes = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let seed = Seed::from_bytes(&bytes).unwrap();
    HdNode::master_from_seed(&seed).unwrap()
}

#[test]
fn test_bip32_vector1_extended_keys() {
    let master = bip32_vector_master();
    assert_eq!(
        master.to_extended_private(&BIP44).unwrap(),
        "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi"
    );

    let child = master.derive_child(HARDENED_OFFSET).unwrap();
    assert_eq!(
        child.to_extended_private(&BIP44).unwrap(),
        "xprv9uHRZZhk6KAJC1avXpDAp4MDc3sQKNxDiPvvkX8Br5ngLNv1TxvUxt4cV1rGL5hj6KCesnDYUhd7oWgT11eZG7XnxHrnYeSvkzY7d2bhkJ7"
    );
}

#[test]
fn test_known_first_address_per_profile() {
    // First external address of the all-"abandon" mnemonic at
    // m/purpose'/0'/0'/0/0 for each of the four schemes.
    let seed = derive_seed(ABANDON, "").unwrap();

    let expected = [
        (BIP44, "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA"),
        (BIP49, "37VucYSaXLCAsxYyAPfbSi9eh4iEcbShgf"),
        (BIP84, "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu"),
        (
            BIP86,
            "bc1p5cyxnuxmeuwuvkwfem96lqzszd02n6xdcjrs20cac6yqjjwudpxqkedrcr",
        ),
    ];

    for (profile, address) in expected {
        let account = derive_account_chain(&seed, &profile, 0).unwrap();
        let change = derive_change(&account, false).unwrap();
        let leaf = derive_address_node(&change, 0).unwrap();
        let encoded =
            keytree_wallet::crypto::encode_address(
                &leaf.public_key_bytes(),
                profile.script_type,
                &keytree_wallet::crypto::BITCOIN,
            )
            .unwrap();
        assert_eq!(encoded, address, "wrong address for {}", profile.name);
    }
}

#[test]
fn test_extended_key_prefixes_follow_profile_versions() {
    let seed = derive_seed(ABANDON, "").unwrap();

    let account44 = derive_account_chain(&seed, &BIP44, 0).unwrap();
    assert!(account44.to_extended_private(&BIP44).unwrap().starts_with("xprv"));
    assert!(account44.to_extended_public(&BIP44).starts_with("xpub"));

    let account49 = derive_account_chain(&seed, &BIP49, 0).unwrap();
    assert!(account49.to_extended_private(&BIP49).unwrap().starts_with("yprv"));
    assert!(account49.to_extended_public(&BIP49).starts_with("ypub"));

    let account84 = derive_account_chain(&seed, &BIP84, 0).unwrap();
    assert!(account84.to_extended_private(&BIP84).unwrap().starts_with("zprv"));
    assert!(account84.to_extended_public(&BIP84).starts_with("zpub"));
}

#[test]
fn test_watch_only_account_export() {
    // Neutering the account node and deriving the receive branch publicly
    // must agree with the private-side derivation.
    let seed = derive_seed(ABANDON, "").unwrap();
    let account = derive_account_chain(&seed, &BIP84, 0).unwrap();
    let watch_only = account.neuter();

    for index in 0..5u32 {
        let private_side = derive_address_node(&derive_change(&account, false).unwrap(), index)
            .unwrap()
            .neuter();
        let public_side =
            derive_address_node(&derive_change(&watch_only, false).unwrap(), index).unwrap();
        assert_eq!(private_side, public_side);
    }
}

#[test]
fn test_watch_only_cannot_derive_hardened() {
    let seed = derive_seed(ABANDON, "").unwrap();
    let account = derive_account_chain(&seed, &BIP44, 0).unwrap();
    let watch_only = account.neuter();

    assert!(matches!(
        watch_only.derive_child(HARDENED_OFFSET),
        Err(Error::HardenedFromPublic)
    ));
    assert!(matches!(
        watch_only.to_extended_private(&BIP44),
        Err(Error::NoPrivateKey)
    ));
}

#[test]
fn test_same_path_same_node() {
    let seed = derive_seed("action action action action action action action action action action action action", "").unwrap();
    let a = derive_account_chain(&seed, &BIP86, 0).unwrap();
    let b = derive_account_chain(&seed, &BIP86, 0).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a.to_extended_private(&BIP86).unwrap(),
        b.to_extended_private(&BIP86).unwrap()
    );
}
