// パス: src/bin/vigenere.rs
// 役割: Binary entrypoint providing menu and one-shot subcommands
// 意図: Offer a CLI executable for interactive and scripted cipher use
// 関連ファイル: src/menu/mod.rs, src/lib.rs, src/cipher.rs
//! `vigenere-cli` 実行ファイルのエントリポイント。
//!
//! サブコマンド無しで起動すると対話メニューに入る。`encrypt` / `decrypt`
//! サブコマンドはスクリプトから使える 1 回きりの変換面で、メッセージを
//! 引数で渡すか標準入力から読み込む。

use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use vigenere::{decrypt, encrypt, menu, CipherError, CipherResult};

#[derive(Parser, Debug)]
#[command(
    name = "vigenere-cli",
    version,
    about = "Classical Vigenere cipher (encrypt / decrypt)"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

/// 1 回きりの変換を行うサブコマンド群。未指定なら対話メニューへ。
#[derive(Subcommand, Debug)]
enum Command {
    /// メッセージをキーワードで暗号化する
    Encrypt {
        /// 繰り返し適用するアルファベットのキーワード
        #[arg(short, long)]
        keyword: String,
        /// 変換するメッセージ (省略時は標準入力から読む)
        message: Option<String>,
    },
    /// 暗号文をキーワードで復号する
    Decrypt {
        /// 暗号化に使ったものと同じキーワード
        #[arg(short, long)]
        keyword: String,
        /// 変換する暗号文 (省略時は標準入力から読む)
        message: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        None => {
            menu::run_menu();
            ExitCode::SUCCESS
        }
        Some(Command::Encrypt { keyword, message }) => run_one_shot(&keyword, message, encrypt),
        Some(Command::Decrypt { keyword, message }) => run_one_shot(&keyword, message, decrypt),
    }
}

/// 1 回きりの変換を実行し、結果を標準出力へ書き出す。
/// 不正なキーワードは終了コード 2 で報告する。
fn run_one_shot(
    keyword: &str,
    message: Option<String>,
    transform: fn(&str, &str) -> CipherResult<String>,
) -> ExitCode {
    let message = match message {
        Some(text) => text,
        None => match read_message_from_stdin() {
            Ok(text) => text,
            Err(err) => {
                eprintln!("ERROR: failed to read message from stdin: {}", err);
                return ExitCode::FAILURE;
            }
        },
    };
    match transform(&message, keyword) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(CipherError::InvalidKeyword) => {
            eprintln!("ERROR: Keyword must contain at least one alphabetic character (A-Z).");
            ExitCode::from(2)
        }
    }
}

/// 標準入力の全体をメッセージとして読み込み、末尾の改行 1 つだけ除去する。
fn read_message_from_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    if buf.ends_with('\n') {
        buf.pop();
    }
    if buf.ends_with('\r') {
        buf.pop();
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    /// サブコマンド無しの起動が対話メニュー扱いになることを確認する。
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["vigenere-cli"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    /// encrypt サブコマンドの引数が期待どおり束縛されるか検証する。
    fn encrypt_subcommand_binds_keyword_and_message() {
        let cli =
            Cli::try_parse_from(["vigenere-cli", "encrypt", "--keyword", "LEMON", "ATTACKATDAWN"])
                .unwrap();
        match cli.command {
            Some(Command::Encrypt { keyword, message }) => {
                assert_eq!(keyword, "LEMON");
                assert_eq!(message.as_deref(), Some("ATTACKATDAWN"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    /// decrypt サブコマンドでメッセージ省略 (標準入力読み) が許されることを確認する。
    fn decrypt_subcommand_allows_stdin_message() {
        let cli = Cli::try_parse_from(["vigenere-cli", "decrypt", "-k", "LEMON"]).unwrap();
        match cli.command {
            Some(Command::Decrypt { keyword, message }) => {
                assert_eq!(keyword, "LEMON");
                assert!(message.is_none());
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    /// キーワード必須の制約が効いていることを検証する。
    fn keyword_flag_is_required() {
        assert!(Cli::try_parse_from(["vigenere-cli", "encrypt", "MESSAGE"]).is_err());
    }
}
