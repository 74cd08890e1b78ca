use hashbrown::HashSet as FastHashSet;

use super::{ContextKeyExtractor, RouteComparator};
use crate::enums::RouteKind;
use crate::errors::{ManifestError, ManifestResult};
use crate::tree::RouteNode;

pub type FlatRoute<'a> = (String, &'a RouteNode);

#[derive(Debug, Default)]
pub struct FlattenedRoutes<'a> {
    pub api: Vec<FlatRoute<'a>>,
    pub html: Vec<FlatRoute<'a>>,
    pub not_found: Vec<FlatRoute<'a>>,
}

pub fn canonical_key<E>(extractor: &E, name: &str) -> String
where
    E: ContextKeyExtractor + ?Sized,
{
    strip_index(extractor.context_key(name))
}

fn strip_index(key: String) -> String {
    match key.strip_suffix("/index") {
        Some("") => "/".to_string(),
        Some(stripped) => stripped.to_string(),
        None if key.is_empty() => "/".to_string(),
        None => key,
    }
}

pub fn flatten_routes<'a, C, E>(
    root: &'a RouteNode,
    comparator: &C,
    extractor: &E,
) -> ManifestResult<FlattenedRoutes<'a>>
where
    C: RouteComparator + ?Sized,
    E: ContextKeyExtractor + ?Sized,
{
    let mut flat = Vec::new();
    collect_leaves(root, extractor, &mut flat)?;

    // descending stable sort, then flipped
    flat.sort_by(|(_, a), (_, b)| comparator.compare(b, a));
    flat.reverse();

    let mut api = Vec::new();
    let mut html = Vec::new();
    let mut not_found = Vec::new();

    for entry in flat {
        let node = entry.1;
        match node.kind {
            RouteKind::Api => api.push(entry),
            RouteKind::Route if node.is_not_found() => not_found.push(entry),
            RouteKind::Route => html.push(entry),
            _ => {}
        }
    }

    let flattened = FlattenedRoutes {
        api: unique_by_key(api, "api"),
        html: unique_by_key(html, "html"),
        not_found: unique_by_key(not_found, "not_found"),
    };

    tracing::event!(
        tracing::Level::TRACE,
        operation = "flatten_routes",
        api = flattened.api.len() as u64,
        html = flattened.html.len() as u64,
        not_found = flattened.not_found.len() as u64
    );

    Ok(flattened)
}

fn collect_leaves<'a, E>(
    node: &'a RouteNode,
    extractor: &E,
    out: &mut Vec<FlatRoute<'a>>,
) -> ManifestResult<()>
where
    E: ContextKeyExtractor + ?Sized,
{
    if let RouteKind::Unknown(kind) = &node.kind {
        return Err(ManifestError::UnsupportedRouteKind {
            kind: kind.clone(),
            context_key: node.context_key.clone(),
        });
    }

    if !node.is_leaf() {
        for child in &node.children {
            collect_leaves(child, extractor, out)?;
        }
        return Ok(());
    }

    if !node.kind.is_matchable() {
        tracing::debug!(
            kind = %node.kind,
            context_key = %node.context_key,
            "skipping leaf that cannot be matched"
        );
        return Ok(());
    }

    // API identity ignores layout and group segments above the file.
    let key = match node.kind {
        RouteKind::Api => strip_index(extractor.file_key(&node.context_key)),
        _ => canonical_key(extractor, &node.route),
    };
    out.push((key, node));
    Ok(())
}

fn unique_by_key<'a>(routes: Vec<FlatRoute<'a>>, category: &'static str) -> Vec<FlatRoute<'a>> {
    let mut seen: FastHashSet<String> = FastHashSet::with_capacity(routes.len());
    routes
        .into_iter()
        .filter(|(key, node)| {
            if seen.insert(key.clone()) {
                return true;
            }
            tracing::debug!(
                category,
                key = %key,
                context_key = %node.context_key,
                "dropping duplicate route"
            );
            false
        })
        .collect()
}
