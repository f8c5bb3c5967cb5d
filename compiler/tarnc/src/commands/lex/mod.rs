//! The `lex` command: tokenize files and dump the token stream.

use std::io::{self, Write};
use std::path::PathBuf;

use tarn_diagnostic::emitter::{ColorMode, DiagnosticEmitter};
use tarn_ir::{FileId, TokenValue};
use tarn_lexer::{Lexer, LexerOutput};

/// Parsed `tarnc lex` arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexArgs {
    /// Print per-file counts instead of the token dump.
    pub summary: bool,
    /// Include spaces, newlines, and comments in the dump.
    pub trivia: bool,
    pub color: ColorMode,
    pub paths: Vec<PathBuf>,
}

impl LexArgs {
    /// Parse the arguments that follow `lex`.
    ///
    /// Flags may appear anywhere; everything else is a path.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut parsed = LexArgs {
            summary: false,
            trivia: true,
            color: ColorMode::Auto,
            paths: Vec::new(),
        };
        for arg in args {
            if arg == "--summary" || arg == "-s" {
                parsed.summary = true;
            } else if arg == "--no-trivia" {
                parsed.trivia = false;
            } else if let Some(mode) = arg.strip_prefix("--color=") {
                parsed.color = match mode {
                    "auto" => ColorMode::Auto,
                    "always" => ColorMode::Always,
                    "never" => ColorMode::Never,
                    _ => return Err(format!("invalid color mode '{mode}'")),
                };
            } else if arg.starts_with('-') {
                return Err(format!("unknown option '{arg}'"));
            } else {
                parsed.paths.push(PathBuf::from(arg));
            }
        }
        if parsed.paths.is_empty() {
            return Err("missing file path".to_owned());
        }
        Ok(parsed)
    }
}

/// What a `lex` invocation found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexReport {
    pub files: u32,
    pub tokens: u32,
    pub errors: u32,
    pub warnings: u32,
    /// Paths that could not be read.
    pub unreadable: u32,
}

impl LexReport {
    /// Whether the command should exit with a failure status.
    pub fn failed(&self) -> bool {
        self.errors > 0 || self.unreadable > 0
    }
}

/// Tokenize every file in `args` into one shared context.
///
/// Token dumps (or summaries) go to `out`, diagnostics to `emitter`. A file
/// that cannot be read is reported on `errors` and skipped.
pub fn lex_files(
    args: &LexArgs,
    out: &mut impl Write,
    emitter: &mut impl DiagnosticEmitter,
    errors: &mut impl Write,
) -> io::Result<LexReport> {
    let mut lexer = Lexer::new();
    let mut output = lexer.output();
    let mut report = LexReport::default();

    for path in &args.paths {
        let file = match lexer.run_file(&mut output, path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %path.display(), "skipping unreadable file");
                writeln!(errors, "error: {err}")?;
                report.unreadable += 1;
                continue;
            }
        };
        report.files += 1;

        if args.summary {
            write_summary(&output, file, out)?;
        } else {
            write_tokens(&output, file, args.trivia, out)?;
        }
        for diagnostic in output.diagnostics().for_file(file) {
            emitter.emit(diagnostic, path);
        }
    }

    report.tokens = output.tokens().len();
    report.errors = output.diagnostics().error_count();
    report.warnings = output.diagnostics().warning_count();
    emitter.emit_summary(report.errors, report.warnings);
    emitter.flush();
    out.flush()?;
    Ok(report)
}

/// One line per token: index, 1-based position, kind, byte range, value.
pub(crate) fn write_tokens(
    output: &LexerOutput,
    file: FileId,
    trivia: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let Some(entry) = output.file(file) else {
        return Ok(());
    };
    writeln!(
        out,
        "Tokens for '{}' ({} tokens):",
        entry.path().display(),
        entry.token_count()
    )?;
    for (index, token) in (entry.begin_token..entry.end_token)
        .zip(output.tokens().range(entry.begin_token, entry.end_token))
    {
        if !trivia && token.kind.is_trivia() {
            continue;
        }
        let at = format!("{}:{}", token.span.line + 1, token.span.column + 1);
        let kind = token.kind.to_string();
        let range = format!("{}..{}", token.span.offset, token.span.end());
        write!(out, "  {index:>6}  {at:<9} {kind:<26} {range}")?;
        match describe_value(output, token.value) {
            Some(value) => writeln!(out, "  {value}")?,
            None => writeln!(out)?,
        }
    }
    Ok(())
}

fn write_summary(output: &LexerOutput, file: FileId, out: &mut impl Write) -> io::Result<()> {
    let Some(entry) = output.file(file) else {
        return Ok(());
    };
    let (errors, warnings) = output
        .diagnostics()
        .for_file(file)
        .fold((0u32, 0u32), |(e, w), d| {
            if d.is_error() {
                (e + 1, w)
            } else {
                (e, w + 1)
            }
        });
    writeln!(
        out,
        "{}: {} bytes, {} tokens, {errors} errors, {warnings} warnings",
        entry.path().display(),
        entry.byte_len,
        entry.token_count()
    )
}

fn describe_value(output: &LexerOutput, value: TokenValue) -> Option<String> {
    match value {
        TokenValue::None => None,
        TokenValue::Integer(n) => Some(n.to_string()),
        TokenValue::Float(_) => value.as_float().map(|f| format!("{f:?}")),
        TokenValue::Rune(ch) => Some(format!("{ch:?}")),
        TokenValue::String(handle) => Some(format!("{:?}", output.strings().resolve_str(handle))),
    }
}
