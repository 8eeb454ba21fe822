//! Typed view over scope-marker trivia.
//!
//! A scope marker is a preprocessor line or a region comment that opens,
//! continues or closes a logical scope. Markers are tokens, not nodes: their
//! position in the tree is the node they are attached to as trivia.

use region_lint_syntax::{SyntaxKind, SyntaxNode, SyntaxToken};
use rowan::TextRange;

/// Which markers pair with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerFamily {
    /// `#region` / `#endregion`
    Region,
    /// `#if` / `#elif` / `#else` / `#endif`
    Conditional,
    /// `// region` / `// endregion` and `<editor-fold>` comments
    CommentRegion,
}

/// Position of a marker within its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    Opener,
    Intermediate,
    Closer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    RegionStart,
    RegionEnd,
    If,
    Elif,
    Else,
    EndIf,
    CommentRegionStart,
    CommentRegionEnd,
}

impl MarkerKind {
    pub fn from_syntax(kind: SyntaxKind) -> Option<Self> {
        let kind = match kind {
            SyntaxKind::REGION_DIRECTIVE => Self::RegionStart,
            SyntaxKind::END_REGION_DIRECTIVE => Self::RegionEnd,
            SyntaxKind::IF_DIRECTIVE => Self::If,
            SyntaxKind::ELIF_DIRECTIVE => Self::Elif,
            SyntaxKind::ELSE_DIRECTIVE => Self::Else,
            SyntaxKind::END_IF_DIRECTIVE => Self::EndIf,
            SyntaxKind::REGION_COMMENT => Self::CommentRegionStart,
            SyntaxKind::END_REGION_COMMENT => Self::CommentRegionEnd,
            _ => return None,
        };
        Some(kind)
    }

    pub fn family(self) -> MarkerFamily {
        match self {
            Self::RegionStart | Self::RegionEnd => MarkerFamily::Region,
            Self::If | Self::Elif | Self::Else | Self::EndIf => MarkerFamily::Conditional,
            Self::CommentRegionStart | Self::CommentRegionEnd => MarkerFamily::CommentRegion,
        }
    }

    pub fn role(self) -> MarkerRole {
        match self {
            Self::RegionStart | Self::If | Self::CommentRegionStart => MarkerRole::Opener,
            Self::Elif | Self::Else => MarkerRole::Intermediate,
            Self::RegionEnd | Self::EndIf | Self::CommentRegionEnd => MarkerRole::Closer,
        }
    }

    /// True for markers that begin a scope.
    pub fn is_start(self) -> bool {
        self.role() == MarkerRole::Opener
    }

    /// Returns true for the two kinds of region start the analyzer reports on.
    pub fn is_region_start(self) -> bool {
        matches!(self, Self::RegionStart | Self::CommentRegionStart)
    }

    /// Keyword that introduces the marker in source text.
    fn keyword(self) -> &'static str {
        match self {
            Self::RegionStart | Self::CommentRegionStart => "region",
            Self::RegionEnd | Self::CommentRegionEnd => "endregion",
            Self::If => "if",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::EndIf => "endif",
        }
    }
}

/// A scope-marker token together with its classified kind.
///
/// Equality is token identity: two markers are equal only if they are the
/// same token in the same tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeMarker {
    token: SyntaxToken,
    kind: MarkerKind,
}

impl ScopeMarker {
    /// Wrap `token` if it is a scope marker.
    pub fn cast(token: SyntaxToken) -> Option<Self> {
        let kind = MarkerKind::from_syntax(token.kind())?;
        Some(Self { token, kind })
    }

    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    pub fn token(&self) -> &SyntaxToken {
        &self.token
    }

    /// Node this marker is attached to.
    pub fn node(&self) -> Option<SyntaxNode> {
        self.token.parent()
    }

    pub fn text_range(&self) -> TextRange {
        self.token.text_range()
    }

    /// Text following the marker keyword: the region name or the condition.
    ///
    /// `<editor-fold>` comments take their name from the `desc` attribute.
    pub fn name(&self) -> Option<&str> {
        let text = self.token.text();
        let body = match self.kind.family() {
            MarkerFamily::CommentRegion => text.strip_prefix("//").unwrap_or(text).trim_start(),
            _ => text.strip_prefix('#').unwrap_or(text).trim_start(),
        };

        let name = if body.starts_with("<editor-fold") || body.starts_with("</editor-fold") {
            editor_fold_description(body)?
        } else {
            body.strip_prefix(self.kind.keyword()).unwrap_or(body)
        };

        let name = name.trim();
        (!name.is_empty()).then_some(name)
    }
}

fn editor_fold_description(body: &str) -> Option<&str> {
    let start = body.find("desc=\"")? + "desc=\"".len();
    let len = body[start..].find('"')?;
    Some(&body[start..start + len])
}

/// Every scope marker in `root`, in source order.
pub fn markers(root: &SyntaxNode) -> impl Iterator<Item = ScopeMarker> + '_ {
    root.descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| token.kind().is_scope_marker())
        .filter_map(ScopeMarker::cast)
}
