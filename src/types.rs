use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Capture-group key to the parameter name the author wrote.
pub type RouteKeys = BTreeMap<String, String>;

pub type RouteParams = SmallVec<[(String, String); 4]>;
