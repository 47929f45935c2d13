// パス: src/menu/mod.rs
// 役割: 対話メニューを構成するモジュール群のファサード
// 意図: 対話エントリポイントだけを公開し内部構造を隠す
// 関連ファイル: src/menu/cmd.rs, src/menu/printer.rs, src/bin/vigenere.rs
//! 対話メニューを構成するモジュール群をまとめたファサード。
//!
//! 入力・選択肢の解釈・表示を役割ごとに分け、外部には最小限の API のみを公開する。
//! - `cmd`: メインループと選択肢の解釈
//! - `console`: 標準入力からのプロンプト付き行読み取り
//! - `printer`: ユーザー向けの表示ロジック

pub mod cmd;
mod console;
mod printer;

pub use cmd::run_menu;
