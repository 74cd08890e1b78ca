use super::Manifest;
use crate::errors::ManifestResult;
use crate::flatten::{
    ContextKeyExtractor, ContextKeys, FlatRoute, RouteComparator, SpecificityOrder,
    flatten_routes,
};
use crate::options::ManifestOptions;
use crate::pattern::{CompiledMatcher, compile_named_route_with};
use crate::tree::RouteNode;

#[derive(Debug, Clone)]
pub struct ManifestBuilder<C = SpecificityOrder, E = ContextKeys> {
    options: ManifestOptions,
    comparator: C,
    extractor: E,
}

impl ManifestBuilder {
    pub fn new(options: Option<ManifestOptions>) -> Self {
        let options = options.unwrap_or_default();
        let extractor = ContextKeys::with_roots(&options.source_roots);
        Self {
            options,
            comparator: SpecificityOrder,
            extractor,
        }
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<C, E> ManifestBuilder<C, E> {
    pub fn options(&self) -> &ManifestOptions {
        &self.options
    }

    pub fn with_comparator<C2>(self, comparator: C2) -> ManifestBuilder<C2, E>
    where
        C2: RouteComparator,
    {
        ManifestBuilder {
            options: self.options,
            comparator,
            extractor: self.extractor,
        }
    }

    pub fn with_extractor<E2>(self, extractor: E2) -> ManifestBuilder<C, E2>
    where
        E2: ContextKeyExtractor,
    {
        ManifestBuilder {
            options: self.options,
            comparator: self.comparator,
            extractor,
        }
    }
}

impl<C, E> ManifestBuilder<C, E>
where
    C: RouteComparator,
    E: ContextKeyExtractor,
{
    #[tracing::instrument(level = "trace", skip(self, root), fields(root=%root.context_key))]
    pub fn build(&self, root: &RouteNode) -> ManifestResult<Manifest> {
        self.options.validate()?;
        let flattened = flatten_routes(root, &self.comparator, &self.extractor)?;

        let manifest = Manifest {
            api_routes: self.compile_all(&flattened.api)?,
            html_routes: self.compile_all(&flattened.html)?,
            not_found_routes: self.compile_all(&flattened.not_found)?,
        };

        tracing::event!(
            tracing::Level::TRACE,
            operation = "build_manifest",
            routes = manifest.len() as u64
        );
        Ok(manifest)
    }

    fn compile_all(&self, routes: &[FlatRoute<'_>]) -> ManifestResult<Vec<CompiledMatcher>> {
        routes
            .iter()
            .map(|(key, node)| self.compile(key, node))
            .collect()
    }

    fn compile(&self, key: &str, node: &RouteNode) -> ManifestResult<CompiledMatcher> {
        let page = self.extractor.context_key(&node.route);
        let mut matcher = compile_named_route_with(key, &page, &node.context_key, &self.options);

        if node.generated {
            matcher.generated = Some(true);
        }
        if self.options.validate_patterns {
            matcher.to_regex()?;
        }
        Ok(matcher)
    }
}
