// パス: src/menu/printer.rs
// 役割: メニュー表示と結果・エラーメッセージの描画ヘルパ
// 意図: 対話時の出力文言を一箇所へまとめて統一する
// 関連ファイル: src/menu/cmd.rs, src/menu/console.rs
//! 対話メニューで用いるバナー・選択肢・結果表示を集約したモジュール。
//! 表示形式を一箇所にまとめ、文言の揺れを防ぐ。

use std::io::{self, Write};

/// 起動時に 1 度だけ表示するバナー。
const BANNER_TEXT: &str = concat!(
    "=== Vigenere Cipher (Encrypt / Decrypt) ===\n",
    "Note: Spaces and punctuation are preserved.\n",
    "\n",
);

/// 毎周回の冒頭に表示する選択肢一覧。
const MENU_TEXT: &str = concat!(
    "Choose an option:\n",
    "  1) Encrypt\n",
    "  2) Decrypt\n",
    "  3) Exit\n",
);

/// 選択肢入力のプロンプト。改行せず行内で入力を待つ。
pub(crate) const CHOICE_PROMPT: &str = "Enter choice (1-3): ";
/// メッセージ入力のプロンプト。直前の出力と 1 行空ける。
pub(crate) const MESSAGE_PROMPT: &str = "\nEnter message: ";
/// キーワード入力のプロンプト。
pub(crate) const KEYWORD_PROMPT: &str = "Enter keyword: ";

/// 数値として解釈できない選択肢入力への応答。
pub(crate) const INVALID_NUMBER_MSG: &str = "Invalid input. Please enter a number.";
/// 範囲外の選択肢への応答。
pub(crate) const INVALID_CHOICE_MSG: &str = "Invalid choice. Try again.";
/// アルファベットを含まないキーワードへの応答。
pub(crate) const INVALID_KEYWORD_MSG: &str =
    "ERROR: Keyword must contain at least one alphabetic character (A-Z).";
/// 終了時の挨拶。
pub(crate) const GOODBYE_MSG: &str = "Goodbye!";

/// 暗号化結果の見出し。
pub(crate) const CIPHERTEXT_LABEL: &str = "Ciphertext:";
/// 復号結果の見出し。
pub(crate) const PLAINTEXT_LABEL: &str = "Plaintext:";

/// バナーを任意のライターへ描画する。
pub(crate) fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(BANNER_TEXT.as_bytes())
}

/// 選択肢一覧を任意のライターへ描画する。
pub(crate) fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(MENU_TEXT.as_bytes())
}

/// 前後を空行で挟んだ 1 行メッセージを描画する。
pub(crate) fn render_notice<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "\n{}\n", msg)
}

/// 見出し付きで変換結果を描画する。
pub(crate) fn render_result<W: Write>(out: &mut W, label: &str, text: &str) -> io::Result<()> {
    writeln!(out, "\n{}\n{}\n", label, text)
}
