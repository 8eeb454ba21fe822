//! Containment check: do all markers of a group sit inside the same
//! element body?
//!
//! An element body is the outermost [`SyntaxKind::BLOCK`] enclosing a
//! marker: a method, constructor, accessor or local function body, with
//! nested statement blocks and lambda bodies folded into it. A marker with
//! no enclosing block is at type or namespace level.
//!
//! Markers are trivia, so a marker's ancestors are those of the node it is
//! attached to. Markers attached to the opening `{` of a body or inside a
//! statement are both found by walking up from the token.

use region_lint_syntax::{SyntaxKind, SyntaxNode, SyntaxToken};
use thiserror::Error;

use crate::marker::ScopeMarker;
use crate::pairing::{MarkerGroup, OnDemandResolver, PairingResolver};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainmentError {
    #[error("token of kind {kind:?} is not a scope marker")]
    NotAScopeMarker { kind: SyntaxKind },
}

/// The outermost block container enclosing `marker`, if any.
pub fn outermost_block(marker: &ScopeMarker) -> Option<SyntaxNode> {
    let mut outermost = None;
    for ancestor in marker.node()?.ancestors() {
        if ancestor.kind().is_block_container() {
            outermost = Some(ancestor);
        }
    }
    outermost
}

/// The member declaration that owns `body`: method, constructor, accessor,
/// or the field or property whose initializer holds a lambda.
pub fn owning_member(body: &SyntaxNode) -> Option<SyntaxNode> {
    body.ancestors()
        .take_while(|node| !node.kind().is_type_decl())
        .find(|node| node.kind().is_member())
}

/// The element body shared by every marker of `group`: each marker has an
/// outermost block and all of them are the same node.
pub fn shared_body(group: &MarkerGroup) -> Option<SyntaxNode> {
    let mut shared: Option<SyntaxNode> = None;

    for marker in group.iter() {
        let Some(body) = outermost_block(marker) else {
            log::trace!("{:?} is outside any element body", marker.kind());
            return None;
        };

        match &shared {
            None => shared = Some(body),
            Some(first) if *first == body => {}
            Some(_) => {
                log::trace!("{:?} is in a different element body", marker.kind());
                return None;
            }
        }
    }

    shared
}

/// True when every marker of `group` sits in the same element body.
pub fn group_shares_body(group: &MarkerGroup) -> bool {
    shared_body(group).is_some()
}

/// Answers containment questions using a pairing resolver.
pub struct ContainmentChecker<'r, R: PairingResolver + ?Sized> {
    resolver: &'r R,
}

impl<'r, R: PairingResolver + ?Sized> ContainmentChecker<'r, R> {
    pub fn new(resolver: &'r R) -> Self {
        Self { resolver }
    }

    /// Containment for an already classified marker.
    pub fn is_contained(&self, marker: &ScopeMarker) -> bool {
        let group = self.resolver.group_of(marker);
        group_shares_body(&group)
    }

    /// Containment for a raw token.
    ///
    /// Fails when `token` is not one of the scope-marker kinds.
    pub fn is_completely_contained_in_body(
        &self,
        token: &SyntaxToken,
    ) -> Result<bool, ContainmentError> {
        let marker = ScopeMarker::cast(token.clone())
            .ok_or(ContainmentError::NotAScopeMarker { kind: token.kind() })?;
        Ok(self.is_contained(&marker))
    }
}

/// Whether the group `token` belongs to lies entirely within one element
/// body. Pairs the markers of the whole tree on each call; use a
/// [`ContainmentChecker`] over a [`crate::DirectiveMap`] for repeated queries.
pub fn is_completely_contained_in_body(token: &SyntaxToken) -> Result<bool, ContainmentError> {
    ContainmentChecker::new(&OnDemandResolver).is_completely_contained_in_body(token)
}
