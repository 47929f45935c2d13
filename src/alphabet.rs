// パス: src/alphabet.rs
// 役割: ASCII アルファベットと 0-25 インデックスの相互変換
// 意図: ロケール非依存の明示的な文字分類を一箇所へ集約する
// 関連ファイル: src/key.rs, src/cipher.rs, src/lib.rs
//! 暗号エンジンが用いる文字分類とインデックス変換のユーティリティ。
//!
//! 分類は ASCII の範囲 (A-Z / a-z) のみを対象とし、ロケール依存の挙動を
//! 持ち込まない。非 ASCII の文字はすべて「非アルファベット」として扱い、
//! 変換対象から外す。

/// 換字表の文字数。
pub const ALPHABET_LEN: u8 = 26;

/// `c` が変換対象の ASCII アルファベットかどうかを判定する。
#[inline]
pub fn is_cipher_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ASCII アルファベットを大文字小文字の区別なく 0-25 へ写像する。
///
/// 前提条件: `c` は ASCII アルファベットであること。呼び出し側が保証する。
#[inline]
pub fn letter_index(c: char) -> u8 {
    debug_assert!(c.is_ascii_alphabetic());
    (c.to_ascii_uppercase() as u8) - b'A'
}

/// 0-25 のインデックスを指定されたケースのアルファベットへ戻す。
///
/// 前提条件: `idx < 26`。呼び出し側が保証する。
#[inline]
pub fn index_letter(idx: u8, uppercase: bool) -> char {
    debug_assert!(idx < ALPHABET_LEN);
    let base = if uppercase { b'A' } else { b'a' };
    (base + idx) as char
}
