// パス: src/lib.rs
// 役割: Crate root wiring modules and exports
// 意図: Expose minimal API surface for the cipher engine and menu
// 関連ファイル: src/cipher.rs, src/key.rs, src/errors.rs
//! Vigenère 暗号 (Rust) ルートモジュール
//!
//! 目的:
//! - 古典的な多表式換字暗号の学習用実装を提供する。
//! - 実装は読みやすさと変更容易性を最優先。
//!
//! 方針:
//! - コメント/ドキュメントは日本語、識別子は英語。
//! - 文字分類は ASCII の明示的な範囲判定に限定する。
//! - パブリックAPIは最小限。
//!
//! 暗号学的な安全性は目的に含まれない。実際の秘匿用途には使わないこと。

pub mod alphabet;
pub mod cipher;
pub mod errors;
pub mod key;
pub mod menu;

// 便利な再エクスポート（利用側からは変換関数とエラー型のみ直接参照可）
pub use crate::cipher::{decrypt, encrypt};
pub use crate::errors::{CipherError, CipherResult};
pub use crate::key::{build_key_stream, keyword_is_valid, CleanKey};
