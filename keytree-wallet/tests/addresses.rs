//! Tests for address encoding across derived key trees

use keytree_wallet::crypto::encoding::{base58check_decode, segwit_decode};
use keytree_wallet::crypto::hash::hash160;
use keytree_wallet::crypto::keys::*;
use keytree_wallet::crypto::seed::derive_seed;
use keytree_wallet::crypto::{encode_address, BITCOIN};

const PHRASE: &str =
    "action action action action action action action action action action action action";

#[test]
fn test_addresses_decode_back_to_deriving_key() {
    let seed = derive_seed(PHRASE, "").unwrap();

    for profile in &PROFILES {
        let account = derive_account_chain(&seed, profile, 0).unwrap();
        let change = derive_change(&account, false).unwrap();

        for node in address_nodes(&change, 0..10) {
            let node = node.unwrap();
            let pubkey = node.public_key_bytes();
            let address = encode_address(&pubkey, profile.script_type, &BITCOIN).unwrap();

            match profile.script_type {
                ScriptType::P2pkh => {
                    let (version, payload) = base58check_decode(&address).unwrap();
                    assert_eq!(version, BITCOIN.p2pkh_version);
                    assert_eq!(payload, hash160(&pubkey));
                }
                ScriptType::P2shP2wpkh => {
                    let (version, payload) = base58check_decode(&address).unwrap();
                    assert_eq!(version, BITCOIN.p2sh_version);
                    let mut redeem_script = vec![0x00, 0x14];
                    redeem_script.extend_from_slice(&hash160(&pubkey));
                    assert_eq!(payload, hash160(&redeem_script));
                }
                ScriptType::P2wpkh => {
                    let (hrp, version, program) = segwit_decode(&address).unwrap();
                    assert_eq!(hrp, "bc");
                    assert_eq!(version, 0);
                    assert_eq!(program, hash160(&pubkey));
                }
                ScriptType::P2tr => {
                    let (hrp, version, program) = segwit_decode(&address).unwrap();
                    assert_eq!(hrp, "bc");
                    assert_eq!(version, 1);
                    assert_eq!(program.len(), 32);
                }
            }
        }
    }
}

#[test]
fn test_addresses_distinct_within_and_across_profiles() {
    let seed = derive_seed(PHRASE, "").unwrap();
    let mut all = Vec::new();

    for profile in &PROFILES {
        let account = derive_account_chain(&seed, profile, 0).unwrap();
        let change = derive_change(&account, false).unwrap();
        for node in address_nodes(&change, 0..10) {
            let pubkey = node.unwrap().public_key_bytes();
            all.push(encode_address(&pubkey, profile.script_type, &BITCOIN).unwrap());
        }
    }

    assert_eq!(all.len(), 40);
    let mut deduped = all.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), 40);
}

#[test]
fn test_internal_branch_yields_different_addresses() {
    let seed = derive_seed(PHRASE, "").unwrap();
    let account = derive_account_chain(&seed, &BIP84, 0).unwrap();

    let external = derive_change(&account, false).unwrap();
    let internal = derive_change(&account, true).unwrap();

    let a = derive_address_node(&external, 0).unwrap();
    let b = derive_address_node(&internal, 0).unwrap();
    assert_ne!(
        encode_address(&a.public_key_bytes(), ScriptType::P2wpkh, &BITCOIN).unwrap(),
        encode_address(&b.public_key_bytes(), ScriptType::P2wpkh, &BITCOIN).unwrap()
    );
}
