//! Plain-text rendering of the full derivation structure

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use keytree_wallet::crypto::keys::{
    address_nodes, derive_account_chain, derive_change, HdNode, BIP44, HARDENED_OFFSET, PROFILES,
};
use keytree_wallet::crypto::seed::derive_seed;
use keytree_wallet::crypto::{encode_address, BITCOIN};

/// Explicit report configuration; the core holds no process-wide state.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Seed phrase the structure is derived from
    pub phrase: String,
    /// Optional BIP39-style passphrase
    pub passphrase: String,
    /// Account index to walk (hardened)
    pub account: u32,
    /// Number of external addresses per profile (indices 0..max_index)
    pub max_index: u32,
}

/// Render the full structure for all four purpose profiles.
///
/// Any core derivation error aborts the whole report; nothing is retried or
/// skipped.
pub fn render_report(config: &ReportConfig) -> anyhow::Result<String> {
    let seed = derive_seed(&config.phrase, &config.passphrase)?;
    let master = HdNode::master_from_seed(&seed)?;

    let mut out = String::new();
    writeln!(out, "=== MNEMONIC ===")?;
    writeln!(out, "{}\n", config.phrase)?;

    writeln!(out, "=== MASTER KEY (m) ===")?;
    writeln!(out, "xprv (m): {}", master.to_extended_private(&BIP44)?)?;
    writeln!(out, "xpub (m): {}\n", master.to_extended_public(&BIP44))?;

    for profile in &PROFILES {
        debug!(profile = profile.name, "rendering profile block");
        writeln!(
            out,
            "\n################## {} - {} ##################",
            profile.name, profile.description
        )?;

        // Intermediate levels, re-derived step by step so each one can be
        // printed with the profile's version bytes.
        let purpose = master.derive_child(profile.purpose + HARDENED_OFFSET)?;
        writeln!(out, "\n=== Purpose level (m/{}') ===", profile.purpose)?;
        writeln!(out, "xprv: {}", purpose.to_extended_private(profile)?)?;
        writeln!(out, "xpub: {}", purpose.to_extended_public(profile))?;

        let coin = purpose.derive_child(profile.coin_type + HARDENED_OFFSET)?;
        writeln!(
            out,
            "\n=== Coin level (m/{}'/{}') ===",
            profile.purpose, profile.coin_type
        )?;
        writeln!(out, "xprv: {}", coin.to_extended_private(profile)?)?;
        writeln!(out, "xpub: {}", coin.to_extended_public(profile))?;

        let account = derive_account_chain(&seed, profile, config.account)?;
        writeln!(
            out,
            "\n=== Account level (m/{}'/{}'/{}') ===",
            profile.purpose, profile.coin_type, config.account
        )?;
        writeln!(out, "xprv: {}", account.to_extended_private(profile)?)?;
        writeln!(out, "xpub: {}", account.to_extended_public(profile))?;

        if config.max_index > 0 {
            let change = derive_change(&account, false)?;
            writeln!(
                out,
                "\n=== Addresses m/{}'/{}'/{}'/0/i, i = 0..{} ===",
                profile.purpose,
                profile.coin_type,
                config.account,
                config.max_index - 1
            )?;
            for (i, node) in address_nodes(&change, 0..config.max_index).enumerate() {
                let node = node?;
                let address =
                    encode_address(&node.public_key_bytes(), profile.script_type, &BITCOIN)?;
                writeln!(out, "[{}] {}", i, address)?;
            }
        }
    }

    Ok(out)
}

/// Render the report and write it to `path`.
pub fn write_report(config: &ReportConfig, path: &Path) -> anyhow::Result<()> {
    let report = render_report(config)?;
    std::fs::write(path, &report)
        .with_context(|| format!("failed to write report to {}", path.display()))?;

    info!(
        path = %path.display(),
        profiles = PROFILES.len(),
        addresses_per_profile = config.max_index,
        "report written"
    );
    Ok(())
}
