pub mod enums;
pub mod errors;
pub mod flatten;
pub mod manifest;
pub mod options;
pub mod pattern;
pub mod segment;
pub mod tree;
pub mod types;

pub use enums::RouteKind;
pub use errors::{ManifestError, ManifestResult};
pub use flatten::{ContextKeyExtractor, ContextKeys, RouteComparator, SpecificityOrder};
pub use manifest::{Manifest, ManifestBuilder};
pub use options::{ManifestOptions, ManifestOptionsBuilder, ManifestOptionsError};
pub use pattern::{CompiledMatcher, SafeKeyGenerator, compile_named_route};
pub use tree::{DynamicSegment, RouteNode};
pub use types::{RouteKeys, RouteParams};

pub fn get_server_manifest(root: &RouteNode) -> ManifestResult<Manifest> {
    ManifestBuilder::new(None).build(root)
}
