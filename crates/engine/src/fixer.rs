// crates/engine/src/fixer.rs
//! コメントアウトされた複数行ログ呼び出しの補完処理
//!
//! 開始行 (`// log.info(` など) だけがコメントアウトされ、引数行と終端の
//! `])` が生のまま残っているブロックを検出し、残りの行にもコメント
//! マーカーを付与します。
//!
//! 認識は行頭パターンのみで行い、対象言語の構文解析は行いません。

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Line comment marker of the target language.
const COMMENT_MARKER: &str = "//";

/// Opening line: comment marker, then a `log.<method>(` call head.
fn opening_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*//\s*log\.(info|debug|warning|error)\(").unwrap())
}

/// スキャン状態
///
/// ファイルごとにリセットされ、行処理ルーチンの外には出ません。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    InsideLogCall,
}

/// 行単位のフィクサ
///
/// `process_line` を 1 行ずつ呼び出すと、出力すべき行が返ります。
/// 行の挿入や削除は行わないため、出力の行数は常に入力と一致します。
#[derive(Debug, Default)]
pub struct LogCommentFixer {
    state: ScanState,
}

impl LogCommentFixer {
    pub fn new() -> Self {
        Self {
            state: ScanState::Normal,
        }
    }

    /// Current scan state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Reset to the initial state, as at the start of a file.
    pub fn reset(&mut self) {
        self.state = ScanState::Normal;
    }

    /// 1 行を処理し、出力すべき行を返す
    pub fn process_line<'a>(&mut self, line: &'a str) -> Cow<'a, str> {
        match self.state {
            ScanState::Normal => {
                if opening_re().is_match(line) {
                    self.state = ScanState::InsideLogCall;
                }
                Cow::Borrowed(line)
            }
            ScanState::InsideLogCall => self.process_inside(line),
        }
    }

    fn process_inside<'a>(&mut self, line: &'a str) -> Cow<'a, str> {
        let trimmed = line.trim_start();

        if trimmed.starts_with("])") {
            // Terminal line left bare: fixed 4-space indent, original indent dropped.
            self.state = ScanState::Normal;
            return Cow::Owned(format!("    {} {}", COMMENT_MARKER, line.trim()));
        }

        if is_commented_closing(trimmed) {
            // Terminal line that was already commented out.
            self.state = ScanState::Normal;
            return Cow::Borrowed(line);
        }

        if trimmed.starts_with(COMMENT_MARKER) {
            // Interior line already commented. A second opening pattern while
            // inside a block lands here and stays interior content.
            return Cow::Borrowed(line);
        }

        // Bare interior line: keep the original indent, comment the content.
        // A line with no indent at all gets the default 4 spaces.
        let indent = match &line[..line.len() - trimmed.len()] {
            "" => "    ",
            run => run,
        };
        Cow::Owned(format!("{indent}{} {}", COMMENT_MARKER, line.trim()))
    }
}

/// 修正済みの終端行 (`// ])`) かどうか
fn is_commented_closing(trimmed: &str) -> bool {
    trimmed
        .strip_prefix(COMMENT_MARKER)
        .is_some_and(|rest| rest.trim_start().starts_with("])"))
}

/// Run `content` through a fresh fixer, line by line.
///
/// Lines outside a recognized block are returned untouched, so input with no
/// opening pattern round-trips byte-for-byte.
pub fn fix_content(content: &str) -> String {
    let mut fixer = LogCommentFixer::new();
    let lines: Vec<Cow<'_, str>> = content.split('\n').map(|l| fixer.process_line(l)).collect();

    if fixer.state() == ScanState::InsideLogCall {
        // EOF inside a block is not an error; the scan just ends.
        log::debug!("input ended inside a log call block");
    }

    lines.join("\n")
}
