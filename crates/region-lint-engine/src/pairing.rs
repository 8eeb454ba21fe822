//! Directive pairing: which markers belong together.
//!
//! Markers are matched with a stack per [`MarkerFamily`], last opened first
//! closed. Region end markers are matched by position only; a name after
//! `#endregion` is informational, as in C#.

use std::collections::HashMap;

use region_lint_syntax::SyntaxNode;

use crate::marker::{MarkerFamily, MarkerRole, ScopeMarker, markers};

/// An ordered, non-empty group of mutually matched markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerGroup {
    markers: Vec<ScopeMarker>,
}

impl MarkerGroup {
    fn single(marker: ScopeMarker) -> Self {
        Self {
            markers: vec![marker],
        }
    }

    /// The first marker in source order (the opener, when there is one).
    pub fn first(&self) -> &ScopeMarker {
        &self.markers[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScopeMarker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Always false; kept alongside `len` for the usual collection API.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn contains(&self, marker: &ScopeMarker) -> bool {
        self.markers.contains(marker)
    }

    /// True when the group starts with an opener and ends with a closer.
    pub fn is_terminated(&self) -> bool {
        self.first().kind().is_start()
            && self
                .markers
                .last()
                .is_some_and(|m| m.kind().role() == MarkerRole::Closer)
    }
}

/// Supplies the group a marker belongs to.
pub trait PairingResolver {
    /// The group containing `marker`. Must be total: a marker the resolver
    /// knows nothing about forms a group on its own.
    fn group_of(&self, marker: &ScopeMarker) -> MarkerGroup;
}

/// Precomputed groups for every marker of one tree.
#[derive(Debug, Default)]
pub struct DirectiveMap {
    groups: Vec<MarkerGroup>,
    group_index: HashMap<ScopeMarker, usize>,
}

impl DirectiveMap {
    /// Scan `root` and pair all of its markers.
    pub fn build(root: &SyntaxNode) -> Self {
        let mut map = Self::default();
        let mut open: HashMap<MarkerFamily, Vec<usize>> = HashMap::new();

        for marker in markers(root) {
            let family = marker.kind().family();
            let stack = open.entry(family).or_default();

            match marker.kind().role() {
                MarkerRole::Opener => {
                    let index = map.push_group(marker);
                    stack.push(index);
                }
                MarkerRole::Intermediate => match stack.last() {
                    Some(&index) => map.join_group(index, marker),
                    None => {
                        map.push_group(marker);
                    }
                },
                MarkerRole::Closer => match stack.pop() {
                    Some(index) => map.join_group(index, marker),
                    None => {
                        log::trace!("unmatched {:?} at {:?}", marker.kind(), marker.text_range());
                        map.push_group(marker);
                    }
                },
            }
        }

        log::debug!(
            "paired {} markers into {} groups",
            map.group_index.len(),
            map.groups.len()
        );
        map
    }

    fn push_group(&mut self, marker: ScopeMarker) -> usize {
        let index = self.groups.len();
        self.group_index.insert(marker.clone(), index);
        self.groups.push(MarkerGroup::single(marker));
        index
    }

    fn join_group(&mut self, index: usize, marker: ScopeMarker) {
        self.group_index.insert(marker.clone(), index);
        self.groups[index].markers.push(marker);
    }

    /// All groups, ordered by their first marker.
    pub fn groups(&self) -> &[MarkerGroup] {
        &self.groups
    }
}

impl PairingResolver for DirectiveMap {
    fn group_of(&self, marker: &ScopeMarker) -> MarkerGroup {
        match self.group_index.get(marker) {
            Some(&index) => self.groups[index].clone(),
            None => MarkerGroup::single(marker.clone()),
        }
    }
}

/// Resolver that pairs markers from scratch on every request, starting at
/// the root of the marker's own tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnDemandResolver;

impl PairingResolver for OnDemandResolver {
    fn group_of(&self, marker: &ScopeMarker) -> MarkerGroup {
        match marker.token().parent_ancestors().last() {
            Some(root) => DirectiveMap::build(&root).group_of(marker),
            None => MarkerGroup::single(marker.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::MarkerKind;
    use pretty_assertions::assert_eq;
    use region_lint_syntax::parse;

    fn group_shapes(source: &str) -> Vec<Vec<MarkerKind>> {
        let tree = parse(source);
        DirectiveMap::build(&tree)
            .groups()
            .iter()
            .map(|g| g.iter().map(|m| m.kind()).collect())
            .collect()
    }

    #[test]
    fn nested_regions_pair_innermost_first() {
        let source = "#region Outer\n#region Inner\n#endregion\n#endregion\n";
        let tree = parse(source);
        let map = DirectiveMap::build(&tree);
        let all: Vec<_> = markers(&tree).collect();

        let outer = map.group_of(&all[0]);
        let inner = map.group_of(&all[1]);

        assert_eq!(outer.iter().cloned().collect::<Vec<_>>(), vec![all[0].clone(), all[3].clone()]);
        assert_eq!(inner.iter().cloned().collect::<Vec<_>>(), vec![all[1].clone(), all[2].clone()]);
        assert!(outer.is_terminated());
    }

    #[test]
    fn conditional_chain_forms_one_group() {
        assert_eq!(
            group_shapes("#if A\n#elif B\n#else\n#endif\n"),
            vec![vec![
                MarkerKind::If,
                MarkerKind::Elif,
                MarkerKind::Else,
                MarkerKind::EndIf
            ]]
        );
    }

    #[test]
    fn families_do_not_interfere() {
        assert_eq!(
            group_shapes("#region R\n#if A\n// region C\n#endregion\n// endregion\n#endif\n"),
            vec![
                vec![MarkerKind::RegionStart, MarkerKind::RegionEnd],
                vec![MarkerKind::If, MarkerKind::EndIf],
                vec![MarkerKind::CommentRegionStart, MarkerKind::CommentRegionEnd],
            ]
        );
    }

    #[test]
    fn unbalanced_markers_form_singletons() {
        let shapes = group_shapes("#endregion\n#region A\n#else\n");
        assert_eq!(
            shapes,
            vec![
                vec![MarkerKind::RegionEnd],
                vec![MarkerKind::RegionStart],
                vec![MarkerKind::Else],
            ]
        );

        let tree = parse("#region A\n");
        let map = DirectiveMap::build(&tree);
        let group = &map.groups()[0];
        assert_eq!(group.len(), 1);
        assert!(!group.is_terminated());
    }

    #[test]
    fn every_marker_belongs_to_exactly_one_group() {
        let source = "#region A\n#if X\n#region B\n#endregion\n#else\n#endregion\n#endif\n#endif\n// endregion\n";
        let tree = parse(source);
        let map = DirectiveMap::build(&tree);

        for marker in markers(&tree) {
            let containing = map.groups().iter().filter(|g| g.contains(&marker)).count();
            assert_eq!(containing, 1, "{:?}", marker);
            assert!(map.group_of(&marker).contains(&marker));
        }
    }

    #[test]
    fn on_demand_resolver_matches_prebuilt_map() {
        let tree = parse("class C { void M() {\n#region R\n x();\n#endregion\n } }");
        let map = DirectiveMap::build(&tree);

        for marker in markers(&tree) {
            assert_eq!(OnDemandResolver.group_of(&marker), map.group_of(&marker));
        }
    }

    #[test]
    fn unknown_marker_resolves_to_itself() {
        let other = parse("#region Elsewhere\n");
        let marker = markers(&other).next().unwrap();
        let map = DirectiveMap::build(&parse("#region Here\n#endregion\n"));

        let group = map.group_of(&marker);
        assert_eq!(group.len(), 1);
        assert_eq!(group.first(), &marker);
    }
}
