// パス: src/cipher.rs
// 役割: Vigenère 暗号の暗号化・復号変換本体
// 意図: 加算と減算だけが異なる対称変換を単一の経路へまとめる
// 関連ファイル: src/alphabet.rs, src/key.rs, src/errors.rs
//! Vigenère 暗号の変換本体。
//!
//! 暗号化は平文インデックスへ鍵インデックスを加算し、復号は減算する。
//! アルファベット以外の文字は位置を保ったまま素通しし、各文字のケースは
//! 入力側のものを引き継ぐ。内部状態を持たない純粋な変換であり、結果の
//! 文字数は入力と常に一致する。

use crate::alphabet::{index_letter, is_cipher_letter, letter_index, ALPHABET_LEN};
use crate::errors::CipherResult;
use crate::key::{build_key_stream, CleanKey};

/// 1 文字ぶんのシフト方向。暗号化は加算、復号は減算。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shift {
    Forward,
    Backward,
}

/// キーストリームに沿って全文字へシフトを適用する共通経路。
fn transform(text: &str, keyword: &str, shift: Shift) -> CipherResult<String> {
    let key = CleanKey::parse(keyword)?;
    let stream = build_key_stream(text, &key);
    let mut out = String::with_capacity(text.len());
    for (tc, kc) in text.chars().zip(stream.chars()) {
        if is_cipher_letter(tc) {
            let t = letter_index(tc);
            let k = letter_index(kc);
            let idx = match shift {
                Shift::Forward => (t + k) % ALPHABET_LEN,
                // 26 を足してから剰余を取り、負値を避ける。
                Shift::Backward => (t + ALPHABET_LEN - k) % ALPHABET_LEN,
            };
            out.push(index_letter(idx, tc.is_ascii_uppercase()));
        } else {
            // 非アルファベットは鍵を消費せずそのまま写す。
            out.push(tc);
        }
    }
    Ok(out)
}

/// 平文をキーワードで暗号化する。
///
/// キーワードにアルファベットが無い場合は
/// [`CipherError::InvalidKeyword`](crate::errors::CipherError::InvalidKeyword)
/// を返す。空の平文と有効な鍵の組み合わせは `Ok("")` であり、両者は
/// 型レベルで区別される。
///
/// # Examples
/// ```
/// let cipher = vigenere::encrypt("ATTACKATDAWN", "LEMON").unwrap();
/// assert_eq!(cipher, "LXFOPVEFRNHR");
/// ```
pub fn encrypt(plaintext: &str, keyword: &str) -> CipherResult<String> {
    transform(plaintext, keyword, Shift::Forward)
}

/// 暗号文をキーワードで復号する。
///
/// # Examples
/// ```
/// let plain = vigenere::decrypt("LXFOPVEFRNHR", "LEMON").unwrap();
/// assert_eq!(plain, "ATTACKATDAWN");
/// ```
pub fn decrypt(ciphertext: &str, keyword: &str) -> CipherResult<String> {
    transform(ciphertext, keyword, Shift::Backward)
}

#[cfg(test)]
mod tests {
    use super::{decrypt, encrypt};
    use crate::errors::CipherError;

    #[test]
    /// 標準の参照ベクトルが一致することを確認する。
    fn encrypt_matches_reference_vector() {
        assert_eq!(
            encrypt("ATTACKATDAWN", "LEMON").unwrap(),
            "LXFOPVEFRNHR"
        );
    }

    #[test]
    /// 参照ベクトルの復号が元の平文へ戻ることを確認する。
    fn decrypt_matches_reference_vector() {
        assert_eq!(
            decrypt("LXFOPVEFRNHR", "LEMON").unwrap(),
            "ATTACKATDAWN"
        );
    }

    #[test]
    /// 各文字のケースが入力どおり保持されることを検証する。
    fn transform_preserves_per_character_case() {
        let cipher = encrypt("Attack", "lemon").unwrap();
        assert!(cipher.chars().next().unwrap().is_ascii_uppercase());
        assert!(cipher.chars().skip(1).all(|c| c.is_ascii_lowercase()));
        assert_eq!(decrypt(&cipher, "LEMON").unwrap(), "Attack");
    }

    #[test]
    /// 記号と空白が位置を保ったまま素通しされることを確認する。
    fn transform_passes_punctuation_through() {
        let cipher = encrypt("Attack, at dawn!", "lemon").unwrap();
        assert_eq!(&cipher[6..8], ", ");
        assert!(cipher.ends_with('!'));
        assert_eq!(cipher.len(), "Attack, at dawn!".len());
        assert_eq!(decrypt(&cipher, "lemon").unwrap(), "Attack, at dawn!");
    }

    #[test]
    /// 不正なキーワードが明示的なエラーとして返ることを検証する。
    fn transform_rejects_invalid_keyword() {
        assert_eq!(encrypt("HELLO", "123"), Err(CipherError::InvalidKeyword));
        assert_eq!(decrypt("HELLO", " ,!"), Err(CipherError::InvalidKeyword));
    }

    #[test]
    /// 空メッセージと有効な鍵の組み合わせが正常な空文字列になることを確認する。
    fn empty_message_with_valid_keyword_is_ok() {
        assert_eq!(encrypt("", "LEMON").unwrap(), "");
        assert_eq!(decrypt("", "LEMON").unwrap(), "");
    }

    #[test]
    /// 鍵の清浄化が暗号結果へ影響しないことを検証する。
    fn cleaned_keyword_produces_identical_output() {
        let with_noise = encrypt("ATTACKATDAWN", "L3E!M,O.N").unwrap();
        let plain_key = encrypt("ATTACKATDAWN", "LEMON").unwrap();
        assert_eq!(with_noise, plain_key);
    }

    #[test]
    /// 非 ASCII 文字が鍵を消費せず素通しされることを確認する。
    fn non_ascii_characters_pass_through() {
        let cipher = encrypt("AéB", "KEY").unwrap();
        let mut chars = cipher.chars();
        assert_eq!(chars.next(), Some('K')); // A + K
        assert_eq!(chars.next(), Some('é'));
        assert_eq!(chars.next(), Some('F')); // B + E
        assert_eq!(decrypt(&cipher, "KEY").unwrap(), "AéB");
    }
}
