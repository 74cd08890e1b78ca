use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{PatternError, PatternResult};
use crate::types::{RouteKeys, RouteParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledMatcher {
    pub file: String,
    pub page: String,
    pub named_regex: String,
    pub route_keys: RouteKeys,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<bool>,
}

impl CompiledMatcher {
    pub fn is_generated(&self) -> bool {
        self.generated.unwrap_or(false)
    }

    pub fn to_regex(&self) -> PatternResult<Regex> {
        Regex::new(&self.named_regex).map_err(|err| PatternError::RegexInvalid {
            pattern: self.named_regex.clone(),
            file: self.file.clone(),
            error: err.to_string(),
        })
    }

    /// Pairs are in capture-group order.
    pub fn resolve_params(&self, path: &str) -> PatternResult<Option<RouteParams>> {
        let regex = self.to_regex()?;
        let Some(captures) = regex.captures(path) else {
            return Ok(None);
        };

        let mut params = RouteParams::new();
        for key in regex.capture_names().flatten() {
            if let (Some(value), Some(original)) = (captures.name(key), self.route_keys.get(key)) {
                params.push((original.clone(), value.as_str().to_string()));
            }
        }
        Ok(Some(params))
    }
}
