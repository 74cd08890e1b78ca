mod builder;

pub use builder::ManifestBuilder;

use crate::errors::{ManifestError, ManifestResult};
use crate::pattern::CompiledMatcher;
use serde::{Deserialize, Serialize};

/// Compiled routes grouped by category, each list in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub api_routes: Vec<CompiledMatcher>,
    pub html_routes: Vec<CompiledMatcher>,
    pub not_found_routes: Vec<CompiledMatcher>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.api_routes.len() + self.html_routes.len() + self.not_found_routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledMatcher> {
        self.api_routes
            .iter()
            .chain(&self.html_routes)
            .chain(&self.not_found_routes)
    }

    pub fn to_json(&self) -> ManifestResult<String> {
        serde_json::to_string_pretty(self).map_err(|source| ManifestError::Encode { source })
    }
}
