// crates/cli/src/args.rs
use clap::Parser;

/// Top-level CLI arguments parsed via clap.
///
/// 走査ルートと対象拡張子はビルド時に固定のため、引数はありません。
/// clap を通すのは `--help` / `--version` と余分な引数の拒否のためです。
#[derive(Parser, Debug)]
#[command(
    name = "logfix",
    version = crate::VERSION,
    about = "コメントアウトされた複数行ログ呼び出しの補完ツール"
)]
pub struct Args {}
