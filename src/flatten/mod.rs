mod collect;
mod context_key;
mod priority;

pub use collect::{FlatRoute, FlattenedRoutes, canonical_key, flatten_routes};
pub use context_key::{ContextKeyExtractor, ContextKeys};
pub use priority::{RouteComparator, SpecificityOrder};
