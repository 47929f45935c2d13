// パス: src/key.rs
// 役割: キーワードの清浄化とキーストリーム構築
// 意図: 鍵の検証を前段へ寄せ、変換本体を純粋な写像に保つ
// 関連ファイル: src/alphabet.rs, src/cipher.rs, src/errors.rs
//! キーワードの清浄化 (非アルファベット除去) と、メッセージへ整列させた
//! キーストリームの構築を担当するモジュール。
//!
//! 鍵位置はアルファベットのメッセージ文字に対してのみ進み、空白や記号は
//! 鍵を消費しない。この整列規則が復号の対称性を支える不変条件になる。

use crate::alphabet::is_cipher_letter;
use crate::errors::{CipherError, CipherResult};

/// キーワードから非アルファベットを除去した「清浄化済み鍵」。
///
/// 文字の並びは入力順のまま、ケースも入力どおりに保持する
/// (数値変換はケースを無視するため、表示用の情報としてのみ残る)。
/// 構築に成功した時点で 1 文字以上であることが保証される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanKey {
    letters: Vec<char>,
}

impl CleanKey {
    /// キーワードを清浄化して構築する。アルファベットが無ければエラー。
    pub fn parse(keyword: &str) -> CipherResult<Self> {
        let letters: Vec<char> = keyword.chars().filter(|c| is_cipher_letter(*c)).collect();
        if letters.is_empty() {
            return Err(CipherError::InvalidKeyword);
        }
        Ok(Self { letters })
    }

    /// 清浄化済みの文字数を返す。常に 1 以上。
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// `parse` が空の鍵を拒否するため、常に `false` を返す。
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// 鍵位置 `pos` に対応する文字を周回しながら取り出す。
    pub fn letter_at(&self, pos: usize) -> char {
        self.letters[pos % self.letters.len()]
    }

    /// 清浄化結果を文字列として返す。
    pub fn as_string(&self) -> String {
        self.letters.iter().collect()
    }
}

/// キーワードが有効 (アルファベットを 1 文字以上含む) かを前段で検査する。
pub fn keyword_is_valid(keyword: &str) -> bool {
    keyword.chars().any(is_cipher_letter)
}

/// メッセージへ鍵文字を整列させたキーストリームを構築する。
///
/// アルファベットの位置にだけ鍵文字を周回供給し、それ以外の位置には元の
/// 文字をプレースホルダとして置く (後段で値は参照されない)。
/// 結果の文字数はメッセージと常に一致する。
pub fn build_key_stream(message: &str, key: &CleanKey) -> String {
    let mut stream = String::with_capacity(message.len());
    let mut key_pos = 0usize;
    for mc in message.chars() {
        if is_cipher_letter(mc) {
            stream.push(key.letter_at(key_pos));
            key_pos += 1;
        } else {
            stream.push(mc);
        }
    }
    stream
}
