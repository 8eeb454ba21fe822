//! SyntaxKind enum for all tokens and nodes in the C#-like CST.
//!
//! Following the rust-analyzer model, all tokens and nodes share a single enum.
//! Every byte in the source must appear as a token in the tree.

/// All syntax kinds for the CST.
///
/// This enum represents both tokens (lexer output) and composite nodes (parser output).
/// The `repr(u16)` ensures efficient storage in rowan's green tree.
///
/// We use SCREAMING_CASE following the rust-analyzer convention for SyntaxKind.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // === Trivia (lexer output, skipped by the parser's lookahead) ===
    /// Horizontal whitespace (spaces, tabs)
    WHITESPACE,
    /// Line ending
    NEWLINE,
    /// `// ...` up to the end of the line
    LINE_COMMENT,
    /// `/* ... */`
    BLOCK_COMMENT,
    /// `// region Name` or `// <editor-fold ...>`
    REGION_COMMENT,
    /// `// endregion` or `// </editor-fold>`
    END_REGION_COMMENT,
    /// `#region Name`
    REGION_DIRECTIVE,
    /// `#endregion`
    END_REGION_DIRECTIVE,
    /// `#if CONDITION`
    IF_DIRECTIVE,
    /// `#elif CONDITION`
    ELIF_DIRECTIVE,
    /// `#else`
    ELSE_DIRECTIVE,
    /// `#endif`
    END_IF_DIRECTIVE,
    /// Any other preprocessor line (`#define`, `#pragma`, ...)
    DIRECTIVE,

    // === Significant tokens ===
    /// Identifiers and contextual keywords (`get`, `set`, `record`, ...)
    IDENT,
    /// Numeric literal
    NUMBER,
    /// String literal (regular or verbatim)
    STRING,
    /// Character literal
    CHAR,
    /// `{`
    L_BRACE,
    /// `}`
    R_BRACE,
    /// `(`
    L_PAREN,
    /// `)`
    R_PAREN,
    /// `[`
    L_BRACK,
    /// `]`
    R_BRACK,
    /// `<`
    L_ANGLE,
    /// `>`
    R_ANGLE,
    /// `;`
    SEMICOLON,
    /// `,`
    COMMA,
    /// `.`
    DOT,
    /// `:`
    COLON,
    /// `=`
    EQ,
    /// `=>`
    FAT_ARROW,
    /// `?`
    QUESTION,
    /// Any other operator (`+`, `==`, `&&`, `??=`, ...)
    OPERATOR,

    USING_KW,
    NAMESPACE_KW,
    CLASS_KW,
    STRUCT_KW,
    INTERFACE_KW,
    ENUM_KW,
    IF_KW,
    ELSE_KW,
    WHILE_KW,
    DO_KW,
    FOR_KW,
    FOREACH_KW,
    TRY_KW,
    CATCH_KW,
    FINALLY_KW,
    SWITCH_KW,
    CASE_KW,
    DEFAULT_KW,
    RETURN_KW,
    LOCK_KW,
    FIXED_KW,
    CHECKED_KW,
    UNCHECKED_KW,
    UNSAFE_KW,

    /// Byte sequence the lexer could not classify
    ERROR_TOKEN,
    /// End of file marker
    EOF,

    // === Composite Nodes (parser output) ===
    /// Root compilation unit
    ROOT,
    /// `using System.Text;`
    USING_DIRECTIVE,
    /// `namespace A.B { ... }` or file-scoped `namespace A.B;`
    NAMESPACE,
    /// Braces of a block-scoped namespace
    NAMESPACE_BODY,
    /// `[Attribute(...)]`
    ATTRIBUTE,
    CLASS,
    STRUCT,
    INTERFACE,
    RECORD,
    ENUM,
    /// Braces of a class, struct, interface or record
    TYPE_BODY,
    /// Braces of an enum
    ENUM_BODY,
    METHOD,
    CONSTRUCTOR,
    /// Parenthesised parameter list of a method or constructor
    PARAM_LIST,
    PROPERTY,
    /// `{ get; set; }`
    ACCESSOR_LIST,
    /// A single `get`/`set`/`init`/`add`/`remove` accessor
    ACCESSOR,
    /// Field or event declaration, with optional initializer
    FIELD,
    /// `=> expression;`
    EXPR_BODY,
    /// Braces-delimited statement body; the only block container
    BLOCK,
    IF_STMT,
    ELSE_CLAUSE,
    WHILE_STMT,
    DO_STMT,
    FOR_STMT,
    FOREACH_STMT,
    TRY_STMT,
    CATCH_CLAUSE,
    FINALLY_CLAUSE,
    SWITCH_STMT,
    /// Braces of a switch statement (not a block)
    SWITCH_BODY,
    /// `case X:` labels and the statements that follow them
    SWITCH_SECTION,
    RETURN_STMT,
    USING_STMT,
    LOCK_STMT,
    FIXED_STMT,
    CHECKED_STMT,
    UNSAFE_STMT,
    EXPR_STMT,
    EMPTY_STMT,
    /// Parenthesised statement header (`if (...)`, `for (...)`, ...)
    CONDITION,
    /// A run of expression tokens
    EXPR,
    /// Object, collection or switch-expression braces inside an expression
    INITIALIZER,

    /// Error recovery node
    ERROR,
}

impl SyntaxKind {
    /// Returns true if this kind represents a token (lexer output).
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::EOF as u16)
    }

    /// Returns true if this kind represents a composite node.
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns true if this kind is trivia: skipped by the parser and
    /// attached to whichever node surrounds the neighbouring token.
    pub fn is_trivia(self) -> bool {
        (self as u16) <= (Self::DIRECTIVE as u16)
    }

    /// Returns true for preprocessor lines and region comments that open,
    /// continue or close a scope.
    pub fn is_scope_marker(self) -> bool {
        matches!(
            self,
            Self::REGION_COMMENT
                | Self::END_REGION_COMMENT
                | Self::REGION_DIRECTIVE
                | Self::END_REGION_DIRECTIVE
                | Self::IF_DIRECTIVE
                | Self::ELIF_DIRECTIVE
                | Self::ELSE_DIRECTIVE
                | Self::END_IF_DIRECTIVE
        )
    }

    /// Returns true for trivia that always sits on its own line and is
    /// therefore never trailing trivia of the previous token.
    pub fn is_directive(self) -> bool {
        matches!(
            self,
            Self::REGION_DIRECTIVE
                | Self::END_REGION_DIRECTIVE
                | Self::IF_DIRECTIVE
                | Self::ELIF_DIRECTIVE
                | Self::ELSE_DIRECTIVE
                | Self::END_IF_DIRECTIVE
                | Self::DIRECTIVE
        )
    }

    /// Returns true for braces-delimited statement bodies.
    pub fn is_block_container(self) -> bool {
        self == Self::BLOCK
    }

    /// Returns true for type declarations.
    pub fn is_type_decl(self) -> bool {
        matches!(
            self,
            Self::CLASS | Self::STRUCT | Self::INTERFACE | Self::RECORD | Self::ENUM
        )
    }

    /// Returns true for members that can own an element body.
    pub fn is_member(self) -> bool {
        matches!(
            self,
            Self::METHOD | Self::CONSTRUCTOR | Self::PROPERTY | Self::ACCESSOR | Self::FIELD
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language definition for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CSharpLang {}

impl rowan::Language for CSharpLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::ERROR as u16);
        // SAFETY: We check bounds above and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type alias for our syntax nodes.
pub type SyntaxNode = rowan::SyntaxNode<CSharpLang>;
/// Type alias for our syntax tokens.
pub type SyntaxToken = rowan::SyntaxToken<CSharpLang>;
/// Type alias for syntax elements (node or token).
pub type SyntaxElement = rowan::SyntaxElement<CSharpLang>;
