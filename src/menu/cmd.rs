// パス: src/menu/cmd.rs
// 役割: メニューのメインループと選択肢の解釈
// 意図: 入力の検証を局所回復に留め、ループを落とさず回し続ける
// 関連ファイル: src/menu/console.rs, src/menu/printer.rs, src/cipher.rs
//! 対話メニューにおける選択肢処理と状態遷移を担当するモジュール。
//! 利用者の入力を選択肢として解釈し、暗号エンジンへ橋渡しする。
//!
//! 不正な入力 (数値でない・範囲外・鍵が不正) はすべてその場で報告して
//! メニューへ戻り、ループ自体は Exit か入力終端まで走り続ける。

use std::io::{self, Write};

use crate::cipher::{decrypt, encrypt};
use crate::errors::CipherResult;
use crate::key::keyword_is_valid;

use super::console::{Console, ReadResult};
use super::printer::{
    render_banner, render_menu, render_notice, render_result, CHOICE_PROMPT, CIPHERTEXT_LABEL,
    GOODBYE_MSG, INVALID_CHOICE_MSG, INVALID_KEYWORD_MSG, INVALID_NUMBER_MSG, KEYWORD_PROMPT,
    MESSAGE_PROMPT, PLAINTEXT_LABEL,
};

/// 対話メニューを開始し、Exit が選ばれるか入力が尽きるまで処理し続ける。
///
/// # Examples
/// ```no_run
/// # fn main() {
/// vigenere::menu::run_menu();
/// # }
/// ```
pub fn run_menu() {
    let mut console = Console::new();
    let mut stdout = io::stdout();
    if let Err(err) = run_menu_with(&mut console, &mut stdout) {
        let _ = writeln!(io::stderr(), "I/O error in interactive session: {}", err);
    }
}

/// メニューが必要とする最小限の行入力抽象。
pub(crate) trait MenuLineSource {
    /// プロンプトを提示して 1 行または入力終端を取得する。
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadResult>;
}

impl MenuLineSource for Console {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadResult> {
        Console::read_line(self, prompt)
    }
}

/// 入力行を取得し、終端なら `None` を返す読み取りヘルパ。
fn read_or_eof<S: MenuLineSource>(source: &mut S, prompt: &str) -> io::Result<Option<String>> {
    match source.read_line(prompt)? {
        ReadResult::Line(line) => Ok(Some(line)),
        ReadResult::Eof => Ok(None),
    }
}

pub(crate) fn run_menu_with<S, W>(source: &mut S, out: &mut W) -> io::Result<()>
where
    S: MenuLineSource,
    W: Write,
{
    render_banner(out)?;

    loop {
        render_menu(out)?;
        let Some(line) = read_or_eof(source, CHOICE_PROMPT)? else {
            break;
        };
        match parse_menu_choice(&line) {
            MenuChoice::NotANumber => render_notice(out, INVALID_NUMBER_MSG)?,
            MenuChoice::OutOfRange => render_notice(out, INVALID_CHOICE_MSG)?,
            MenuChoice::Exit => {
                writeln!(out, "{}", GOODBYE_MSG)?;
                break;
            }
            MenuChoice::Encrypt => {
                if run_transform(source, out, TransformMode::Encrypt)? == Flow::Quit {
                    break;
                }
            }
            MenuChoice::Decrypt => {
                if run_transform(source, out, TransformMode::Decrypt)? == Flow::Quit {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// 1 回ぶんの暗号化/復号フロー。メッセージと鍵を読み、結果か
/// エラー通知を表示してメニューへ戻る。入力終端ならループ終了を指示する。
fn run_transform<S, W>(source: &mut S, out: &mut W, mode: TransformMode) -> io::Result<Flow>
where
    S: MenuLineSource,
    W: Write,
{
    let Some(message) = read_or_eof(source, MESSAGE_PROMPT)? else {
        return Ok(Flow::Quit);
    };
    let Some(keyword) = read_or_eof(source, KEYWORD_PROMPT)? else {
        return Ok(Flow::Quit);
    };

    if !keyword_is_valid(&keyword) {
        render_notice(out, INVALID_KEYWORD_MSG)?;
        return Ok(Flow::Continue);
    }

    match mode.apply(&message, &keyword) {
        Ok(text) => render_result(out, mode.label(), &text)?,
        // 前段検証済みのため通常は到達しないが、センチネルには頼らない。
        Err(_) => render_notice(out, INVALID_KEYWORD_MSG)?,
    }
    Ok(Flow::Continue)
}

/// ループ継続か終了かを示す制御信号。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// 変換の向き。表示する見出しと適用する変換を束ねる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransformMode {
    Encrypt,
    Decrypt,
}

impl TransformMode {
    /// 結果表示に使う見出しを返す。
    fn label(self) -> &'static str {
        match self {
            Self::Encrypt => CIPHERTEXT_LABEL,
            Self::Decrypt => PLAINTEXT_LABEL,
        }
    }

    /// 対応するエンジン変換を適用する。
    fn apply(self, message: &str, keyword: &str) -> CipherResult<String> {
        match self {
            Self::Encrypt => encrypt(message, keyword),
            Self::Decrypt => decrypt(message, keyword),
        }
    }
}

/// メニューが解釈できる選択肢の集合。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    /// `1` で暗号化フローへ入る。
    Encrypt,
    /// `2` で復号フローへ入る。
    Decrypt,
    /// `3` でセッションを終了する。
    Exit,
    /// 数値として解釈できない入力。
    NotANumber,
    /// 数値だが 1-3 の範囲外の入力。
    OutOfRange,
}

/// 生の入力文字列を `MenuChoice` 列挙に解析する。
pub(crate) fn parse_menu_choice(input: &str) -> MenuChoice {
    match input.trim().parse::<i64>() {
        Err(_) => MenuChoice::NotANumber,
        Ok(1) => MenuChoice::Encrypt,
        Ok(2) => MenuChoice::Decrypt,
        Ok(3) => MenuChoice::Exit,
        Ok(_) => MenuChoice::OutOfRange,
    }
}
