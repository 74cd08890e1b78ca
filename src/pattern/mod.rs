mod compiler;
mod error;
mod matcher;
mod safe_key;

pub use compiler::{
    NamedRoute, compile_named_route, compile_named_route_with, named_parameterized_route,
};
pub use error::{PatternError, PatternResult};
pub use matcher::CompiledMatcher;
pub use safe_key::SafeKeyGenerator;
