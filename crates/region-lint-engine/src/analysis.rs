//! Whole-file analysis: report every region that lies entirely inside one
//! element body.

use std::fmt;

use region_lint_syntax::{SyntaxKind, SyntaxNode, parse};
use rowan::TextRange;

use crate::containment::{owning_member, shared_body};
use crate::marker::{MarkerKind, markers};
use crate::pairing::{DirectiveMap, PairingResolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Also report `// region` and `<editor-fold>` comment regions.
    pub comment_markers: bool,
    /// Report regions whose end marker is missing.
    pub report_unterminated: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            comment_markers: true,
            report_unterminated: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    RegionWithinElement,
}

impl Rule {
    pub fn code(self) -> &'static str {
        match self {
            Rule::RegionWithinElement => "RL0001",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub rule: Rule,
    /// Range of the region start marker
    pub range: TextRange,
    pub name: Option<String>,
    pub marker: MarkerKind,
    pub terminated: bool,
    /// Kind of the member whose body holds the region
    pub element: Option<SyntaxKind>,
}

impl Finding {
    pub fn message(&self) -> String {
        match &self.name {
            Some(name) => format!("region '{name}' is located within an element body"),
            None => "region is located within an element body".to_string(),
        }
    }
}

/// Findings for one parsed tree, in source order.
pub fn analyze(root: &SyntaxNode, options: &AnalyzerOptions) -> Vec<Finding> {
    let map = DirectiveMap::build(root);
    let mut findings = Vec::new();

    for marker in markers(root) {
        let kind = marker.kind();
        if !kind.is_region_start() {
            continue;
        }
        if kind == MarkerKind::CommentRegionStart && !options.comment_markers {
            continue;
        }

        let group = map.group_of(&marker);
        let terminated = group.is_terminated();
        if !terminated && !options.report_unterminated {
            log::trace!("skipping unterminated region at {:?}", marker.text_range());
            continue;
        }

        if let Some(body) = shared_body(&group) {
            findings.push(Finding {
                rule: Rule::RegionWithinElement,
                range: marker.text_range(),
                name: marker.name().map(str::to_string),
                marker: kind,
                terminated,
                element: owning_member(&body).map(|member| member.kind()),
            });
        }
    }

    log::debug!("{} regions within element bodies", findings.len());
    findings
}

/// Parse `source` and analyze it.
pub fn analyze_source(source: &str, options: &AnalyzerOptions) -> Vec<Finding> {
    analyze(&parse(source), options)
}
