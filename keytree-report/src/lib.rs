//! Report writer for keytree HD derivation structures
//!
//! A thin consumer of the `keytree-wallet` core: walks the four built-in
//! purpose profiles and renders extended keys plus leaf addresses as plain
//! text. Contains no cryptography of its own.

pub mod report;

pub use report::{render_report, write_report, ReportConfig};
