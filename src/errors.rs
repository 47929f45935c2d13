// パス: src/errors.rs
// 役割: 暗号エンジン共通のエラー型とエイリアスを定義する
// 意図: 空文字列センチネルに頼らず失敗を型で表現する
// 関連ファイル: src/cipher.rs, src/key.rs, src/menu/cmd.rs
//! 暗号エンジンが返すエラー型の定義。
//!
//! 元実装は「不正なキーワード」を空文字列の返却で通知していたが、
//! 空メッセージの正常結果と区別できないため、明示的なエラー型で表し直す。

use thiserror::Error;

/// Vigenère エンジンで発生しうるエラー種別。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// キーワードに ASCII アルファベットが 1 文字も含まれていない。
    #[error("keyword must contain at least one alphabetic character (A-Z)")]
    InvalidKeyword,
}

/// 暗号エンジンの結果を表す型。
pub type CipherResult<T> = Result<T, CipherError>;
