// パス: src/menu/console.rs
// 役割: 標準入力からのプロンプト付き行読み取り
// 意図: 行バッファ入力と EOF 検出を移植性のある形で提供する
// 関連ファイル: src/menu/cmd.rs, src/menu/printer.rs
//! 対話メニューが使う行リーダ。
//!
//! プロンプトを標準出力へ書き出してから 1 行を読み取り、改行を除去して
//! 返す。ストリーム終端は `Eof` として区別し、ループ側が正常終了できる
//! ようにする。

use std::io::{self, Write};

/// 行入力が返す 2 種類の結果を表す列挙体。
pub(crate) enum ReadResult {
    Line(String),
    Eof,
}

/// 標準入出力に対するプロンプト付きの行リーダ。
pub(crate) struct Console;

impl Console {
    /// 新しいリーダを構築する。
    pub(crate) fn new() -> Self {
        Self
    }

    /// プロンプトを出力し、1 行分の入力または終端を取得する。
    pub(crate) fn read_line(&mut self, prompt: &str) -> io::Result<ReadResult> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;
        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Ok(ReadResult::Eof);
        }
        if line.ends_with('\n') {
            line.pop();
        }
        if line.ends_with('\r') {
            line.pop();
        }
        Ok(ReadResult::Line(line))
    }
}

/// 既定の初期化は `new` を呼び出して共通化する。
impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
