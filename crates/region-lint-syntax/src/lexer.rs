//! # Lexer - Tokenizing C# Source
//!
//! This module provides the first stage of parsing: breaking source text into
//! tokens using the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! Every byte in the input appears in exactly one token. Nothing is skipped,
//! including whitespace, comments and preprocessor lines:
//!
//! ```
//! use region_lint_syntax::lexer::lex;
//!
//! let input = "#region Fields\nint x; // note\n#endregion\n";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Two-Step Classification
//!
//! Logos sees a preprocessor line as one `#...` run and a line comment as one
//! `//...` run. [`lex`] then looks at the first word of each to decide whether
//! it is a scope marker (`#region`, `#endif`, `// endregion`, ...) or ordinary
//! trivia. Keeping the regexes coarse avoids equal-length conflicts between
//! overlapping Logos patterns.
//!
//! ## Public API
//!
//! - [`lex`] - Tokenize input, returning `Vec<Token>`
//! - [`lex_with_spans`] - Tokenize with byte offset spans
//! - [`Token`] - A token with its kind and text slice

use logos::Logos;

use crate::syntax_kind::SyntaxKind;

/// Token kinds produced by the Logos lexer.
///
/// This enum exists separately from [`SyntaxKind`] because Logos needs to
/// derive on it. Most variants map one-to-one; `Directive` and `LineComment`
/// are refined by [`lex`] after looking at their text.
///
/// [`SyntaxKind`]: crate::syntax_kind::SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"")]
pub enum TokenKind {
    #[regex(r"[ \t]+")]
    Whitespace,

    /// Line ending (LF or CRLF)
    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    /// A whole preprocessor line, without its line ending
    #[regex(r"#[^\r\n]*")]
    Directive,

    #[regex(r"@?[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9][0-9A-Za-z_]*")]
    Number,

    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    #[regex(r#"\$"([^"\\\r\n]|\\.)*""#)]
    #[regex(r#"@"([^"]|"")*""#)]
    String,

    #[regex(r"'([^'\\\r\n]|\\.)*'")]
    Char,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBrack,
    #[token("]")]
    RBrack,
    #[token("<")]
    LAngle,
    #[token(">")]
    RAngle,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,
    #[token("=>")]
    FatArrow,
    #[token("?")]
    Question,

    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    #[token("++")]
    #[token("--")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("??")]
    #[token("??=")]
    #[token("?.")]
    #[token("->")]
    #[token("::")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("!")]
    #[token("~")]
    #[token("$")]
    #[token("@")]
    Operator,

    #[token("using")]
    Using,
    #[token("namespace")]
    Namespace,
    #[token("class")]
    Class,
    #[token("struct")]
    Struct,
    #[token("interface")]
    Interface,
    #[token("enum")]
    Enum,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("for")]
    For,
    #[token("foreach")]
    Foreach,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,
    #[token("finally")]
    Finally,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("default")]
    Default,
    #[token("return")]
    Return,
    #[token("lock")]
    Lock,
    #[token("fixed")]
    Fixed,
    #[token("checked")]
    Checked,
    #[token("unchecked")]
    Unchecked,
    #[token("unsafe")]
    Unsafe,
}

impl TokenKind {
    /// Convert to SyntaxKind.
    ///
    /// `Directive` and `LineComment` map to their generic kinds here; use
    /// [`classify_directive`] and [`classify_comment`] to refine them.
    pub fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::LineComment => SyntaxKind::LINE_COMMENT,
            TokenKind::BlockComment => SyntaxKind::BLOCK_COMMENT,
            TokenKind::Directive => SyntaxKind::DIRECTIVE,
            TokenKind::Ident => SyntaxKind::IDENT,
            TokenKind::Number => SyntaxKind::NUMBER,
            TokenKind::String => SyntaxKind::STRING,
            TokenKind::Char => SyntaxKind::CHAR,
            TokenKind::LBrace => SyntaxKind::L_BRACE,
            TokenKind::RBrace => SyntaxKind::R_BRACE,
            TokenKind::LParen => SyntaxKind::L_PAREN,
            TokenKind::RParen => SyntaxKind::R_PAREN,
            TokenKind::LBrack => SyntaxKind::L_BRACK,
            TokenKind::RBrack => SyntaxKind::R_BRACK,
            TokenKind::LAngle => SyntaxKind::L_ANGLE,
            TokenKind::RAngle => SyntaxKind::R_ANGLE,
            TokenKind::Semicolon => SyntaxKind::SEMICOLON,
            TokenKind::Comma => SyntaxKind::COMMA,
            TokenKind::Dot => SyntaxKind::DOT,
            TokenKind::Colon => SyntaxKind::COLON,
            TokenKind::Eq => SyntaxKind::EQ,
            TokenKind::FatArrow => SyntaxKind::FAT_ARROW,
            TokenKind::Question => SyntaxKind::QUESTION,
            TokenKind::Operator => SyntaxKind::OPERATOR,
            TokenKind::Using => SyntaxKind::USING_KW,
            TokenKind::Namespace => SyntaxKind::NAMESPACE_KW,
            TokenKind::Class => SyntaxKind::CLASS_KW,
            TokenKind::Struct => SyntaxKind::STRUCT_KW,
            TokenKind::Interface => SyntaxKind::INTERFACE_KW,
            TokenKind::Enum => SyntaxKind::ENUM_KW,
            TokenKind::If => SyntaxKind::IF_KW,
            TokenKind::Else => SyntaxKind::ELSE_KW,
            TokenKind::While => SyntaxKind::WHILE_KW,
            TokenKind::Do => SyntaxKind::DO_KW,
            TokenKind::For => SyntaxKind::FOR_KW,
            TokenKind::Foreach => SyntaxKind::FOREACH_KW,
            TokenKind::Try => SyntaxKind::TRY_KW,
            TokenKind::Catch => SyntaxKind::CATCH_KW,
            TokenKind::Finally => SyntaxKind::FINALLY_KW,
            TokenKind::Switch => SyntaxKind::SWITCH_KW,
            TokenKind::Case => SyntaxKind::CASE_KW,
            TokenKind::Default => SyntaxKind::DEFAULT_KW,
            TokenKind::Return => SyntaxKind::RETURN_KW,
            TokenKind::Lock => SyntaxKind::LOCK_KW,
            TokenKind::Fixed => SyntaxKind::FIXED_KW,
            TokenKind::Checked => SyntaxKind::CHECKED_KW,
            TokenKind::Unchecked => SyntaxKind::UNCHECKED_KW,
            TokenKind::Unsafe => SyntaxKind::UNSAFE_KW,
        }
    }
}

/// First identifier-like word of `text`, after leading whitespace.
fn leading_word(text: &str) -> &str {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(text.len());
    &text[..end]
}

/// Refine a `#...` line into the matching directive kind.
pub fn classify_directive(text: &str) -> SyntaxKind {
    let body = text.strip_prefix('#').unwrap_or(text);
    match leading_word(body) {
        "region" => SyntaxKind::REGION_DIRECTIVE,
        "endregion" => SyntaxKind::END_REGION_DIRECTIVE,
        "if" => SyntaxKind::IF_DIRECTIVE,
        "elif" => SyntaxKind::ELIF_DIRECTIVE,
        "else" => SyntaxKind::ELSE_DIRECTIVE,
        "endif" => SyntaxKind::END_IF_DIRECTIVE,
        _ => SyntaxKind::DIRECTIVE,
    }
}

/// Refine a `//...` comment into a region comment when it is one.
///
/// Recognises the `// region Name` / `// endregion` convention as well as
/// NetBeans-style `// <editor-fold>` / `// </editor-fold>` pairs.
pub fn classify_comment(text: &str) -> SyntaxKind {
    let body = text.strip_prefix("//").unwrap_or(text).trim_start();
    if body.starts_with("<editor-fold") {
        return SyntaxKind::REGION_COMMENT;
    }
    if body.starts_with("</editor-fold") {
        return SyntaxKind::END_REGION_COMMENT;
    }
    match leading_word(body) {
        "region" => SyntaxKind::REGION_COMMENT,
        "endregion" => SyntaxKind::END_REGION_COMMENT,
        _ => SyntaxKind::LINE_COMMENT,
    }
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
}

fn refine(result: Result<TokenKind, ()>, text: &str) -> SyntaxKind {
    match result {
        Ok(TokenKind::Directive) => classify_directive(text),
        Ok(TokenKind::LineComment) => classify_comment(text),
        Ok(token_kind) => token_kind.to_syntax_kind(),
        // Logos error means unrecognized input - keep it as an error token
        Err(()) => SyntaxKind::ERROR_TOKEN,
    }
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let text = lexer.slice();
        let kind = refine(result, text);
        tokens.push(Token { kind, text });
    }

    tokens
}

/// Lex and return tokens along with their byte spans.
pub fn lex_with_spans(input: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let kind = refine(result, text);
        tokens.push((Token { kind, text }, span));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn token(kind: SyntaxKind, text: &str) -> Token<'_> {
        Token { kind, text }
    }

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        lex(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lex_empty_input() {
        assert_eq!(lex(""), vec![]);
    }

    #[test]
    fn lex_identifier() {
        assert_eq!(lex("value"), vec![token(SyntaxKind::IDENT, "value")]);
    }

    #[test]
    fn keywords_win_over_identifiers() {
        assert_eq!(
            kinds("class classes"),
            vec![
                SyntaxKind::CLASS_KW,
                SyntaxKind::WHITESPACE,
                SyntaxKind::IDENT
            ]
        );
    }

    #[test]
    fn lex_newline_crlf() {
        assert_eq!(lex("\r\n"), vec![token(SyntaxKind::NEWLINE, "\r\n")]);
    }

    #[test]
    fn lex_method_header() {
        let tokens = lex("void Run() {");
        assert_eq!(
            tokens,
            vec![
                token(SyntaxKind::IDENT, "void"),
                token(SyntaxKind::WHITESPACE, " "),
                token(SyntaxKind::IDENT, "Run"),
                token(SyntaxKind::L_PAREN, "("),
                token(SyntaxKind::R_PAREN, ")"),
                token(SyntaxKind::WHITESPACE, " "),
                token(SyntaxKind::L_BRACE, "{"),
            ]
        );
    }

    #[test]
    fn lex_region_directive_keeps_name_in_token() {
        let tokens = lex("#region Private helpers\n");
        assert_eq!(
            tokens,
            vec![
                token(SyntaxKind::REGION_DIRECTIVE, "#region Private helpers"),
                token(SyntaxKind::NEWLINE, "\n"),
            ]
        );
    }

    #[rstest]
    #[case("#region", SyntaxKind::REGION_DIRECTIVE)]
    #[case("# region Spaced", SyntaxKind::REGION_DIRECTIVE)]
    #[case("#endregion", SyntaxKind::END_REGION_DIRECTIVE)]
    #[case("#endregion Name", SyntaxKind::END_REGION_DIRECTIVE)]
    #[case("#if DEBUG", SyntaxKind::IF_DIRECTIVE)]
    #[case("#elif TRACE", SyntaxKind::ELIF_DIRECTIVE)]
    #[case("#else", SyntaxKind::ELSE_DIRECTIVE)]
    #[case("#endif", SyntaxKind::END_IF_DIRECTIVE)]
    #[case("#pragma warning disable", SyntaxKind::DIRECTIVE)]
    #[case("#regionally", SyntaxKind::DIRECTIVE)]
    fn classifies_directives(#[case] text: &str, #[case] expected: SyntaxKind) {
        assert_eq!(classify_directive(text), expected);
    }

    #[rstest]
    #[case("// region Fields", SyntaxKind::REGION_COMMENT)]
    #[case("//region", SyntaxKind::REGION_COMMENT)]
    #[case("// endregion", SyntaxKind::END_REGION_COMMENT)]
    #[case("// <editor-fold desc=\"Fields\">", SyntaxKind::REGION_COMMENT)]
    #[case("// </editor-fold>", SyntaxKind::END_REGION_COMMENT)]
    #[case("// regions are discouraged", SyntaxKind::LINE_COMMENT)]
    #[case("// plain comment", SyntaxKind::LINE_COMMENT)]
    fn classifies_comments(#[case] text: &str, #[case] expected: SyntaxKind) {
        assert_eq!(classify_comment(text), expected);
    }

    #[test]
    fn hash_inside_string_is_not_a_directive() {
        assert_eq!(
            kinds(r##"s = "#region";"##),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::WHITESPACE,
                SyntaxKind::EQ,
                SyntaxKind::WHITESPACE,
                SyntaxKind::STRING,
                SyntaxKind::SEMICOLON,
            ]
        );
    }

    #[test]
    fn lambda_arrow_and_comparison() {
        assert_eq!(
            kinds("x => x == 1"),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::WHITESPACE,
                SyntaxKind::FAT_ARROW,
                SyntaxKind::WHITESPACE,
                SyntaxKind::IDENT,
                SyntaxKind::WHITESPACE,
                SyntaxKind::OPERATOR,
                SyntaxKind::WHITESPACE,
                SyntaxKind::NUMBER,
            ]
        );
    }

    #[test]
    fn generic_closers_stay_separate() {
        assert_eq!(
            kinds("List<List<int>>"),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::L_ANGLE,
                SyntaxKind::IDENT,
                SyntaxKind::L_ANGLE,
                SyntaxKind::IDENT,
                SyntaxKind::R_ANGLE,
                SyntaxKind::R_ANGLE,
            ]
        );
    }

    #[test]
    fn unknown_bytes_become_error_tokens() {
        let tokens = lex("a é");
        assert_eq!(tokens.last().map(|t| t.kind), Some(SyntaxKind::ERROR_TOKEN));
        let reconstructed: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(reconstructed, "a é");
    }

    #[test]
    fn all_bytes_preserved_complex() {
        let input = "namespace A {\n  class B {\n#region R\n    /* c */ void M() { var s = @\"x\"\"y\"; }\n#endregion\n  }\n}\n";
        let tokens = lex(input);
        let reconstructed: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(input, reconstructed);
    }

    #[test]
    fn spans_are_correct() {
        let input = "int x = 1; // done";
        let tokens = lex_with_spans(input);
        for (token, span) in &tokens {
            assert_eq!(token.text, &input[span.clone()]);
        }
    }
}
