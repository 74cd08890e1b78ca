use crate::enums::RouteKind;
use crate::errors::{ManifestError, ManifestResult};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicSegment {
    pub name: String,
    /// Catch-all (`[...name]`) segment.
    #[serde(default)]
    pub deep: bool,
    #[serde(default)]
    pub not_found: bool,
}

impl DynamicSegment {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            deep: false,
            not_found: false,
        }
    }

    pub fn deep<S: Into<String>>(name: S) -> Self {
        Self {
            deep: true,
            ..Self::new(name)
        }
    }

    pub fn not_found() -> Self {
        Self {
            name: "+not-found".to_string(),
            deep: true,
            not_found: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    #[serde(rename = "type")]
    pub kind: RouteKind,
    /// Route path as authored, e.g. `blog/[slug]`.
    pub route: String,
    pub context_key: String,
    #[serde(default)]
    pub generated: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dynamic: Vec<DynamicSegment>,
    #[serde(default)]
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn new<R, C>(kind: RouteKind, route: R, context_key: C) -> Self
    where
        R: Into<String>,
        C: Into<String>,
    {
        Self {
            kind,
            route: route.into(),
            context_key: context_key.into(),
            generated: false,
            dynamic: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn page<R: Into<String>, C: Into<String>>(route: R, context_key: C) -> Self {
        Self::new(RouteKind::Route, route, context_key)
    }

    pub fn api<R: Into<String>, C: Into<String>>(route: R, context_key: C) -> Self {
        Self::new(RouteKind::Api, route, context_key)
    }

    pub fn layout<R: Into<String>, C: Into<String>>(
        route: R,
        context_key: C,
        children: Vec<RouteNode>,
    ) -> Self {
        Self::new(RouteKind::Layout, route, context_key).with_children(children)
    }

    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_dynamic(mut self, dynamic: Vec<DynamicSegment>) -> Self {
        self.dynamic = dynamic;
        self
    }

    pub fn mark_generated(mut self) -> Self {
        self.generated = true;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_dynamic(&self) -> bool {
        !self.dynamic.is_empty()
    }

    pub fn is_not_found(&self) -> bool {
        self.dynamic.last().is_some_and(|segment| segment.not_found)
    }

    pub fn from_json(input: &str) -> ManifestResult<Self> {
        serde_json::from_str(input).map_err(|source| ManifestError::TreeDecode { source })
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DynamicSegment>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<DynamicSegment>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_provider_json() {
        let tree = RouteNode::from_json(
            r#"{
                "type": "layout",
                "route": "",
                "contextKey": "./_layout.tsx",
                "dynamic": null,
                "children": [
                    { "type": "route", "route": "blog/[slug]", "contextKey": "./blog/[slug].tsx",
                      "dynamic": [{ "name": "slug", "deep": false }] },
                    { "type": "route", "route": "+not-found", "contextKey": "./+not-found.tsx",
                      "generated": true,
                      "dynamic": [{ "name": "+not-found", "deep": true, "notFound": true }] }
                ]
            }"#,
        )
        .expect("tree should decode");

        assert_eq!(tree.kind, RouteKind::Layout);
        assert!(tree.dynamic.is_empty());
        assert_eq!(tree.children.len(), 2);
        assert!(!tree.children[0].is_not_found());
        assert!(tree.children[1].is_not_found());
        assert!(tree.children[1].generated);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = RouteNode::from_json("{\"type\": \"route\"}").expect_err("missing fields");
        match err {
            ManifestError::TreeDecode { .. } => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
