pub trait ContextKeyExtractor {
    fn context_key(&self, name: &str) -> String;

    fn file_key(&self, file: &str) -> String {
        self.context_key(file)
    }
}

impl<F> ContextKeyExtractor for F
where
    F: Fn(&str) -> String,
{
    fn context_key(&self, name: &str) -> String {
        self(name)
    }
}

const SUPPORTED_EXTENSIONS: [&str; 4] = [".tsx", ".ts", ".jsx", ".js"];
const API_MARKER: &str = "+api";
const LAYOUT_FILE: &str = "_layout";

/// Source roots only apply to `file_key`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextKeys {
    roots: Vec<String>,
}

impl ContextKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roots<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            roots: roots
                .into_iter()
                .map(|root| root.as_ref().trim_matches('/').to_string())
                .filter(|root| !root.is_empty())
                .collect(),
        }
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    fn strip_root<'a>(&self, name: &'a str) -> &'a str {
        for root in &self.roots {
            if let Some(rest) = name.strip_prefix(root.as_str()) {
                if rest.is_empty() {
                    return rest;
                }
                if let Some(rest) = rest.strip_prefix('/') {
                    return rest;
                }
            }
        }
        name
    }
}

impl ContextKeyExtractor for ContextKeys {
    fn context_key(&self, name: &str) -> String {
        normalize(trimmed_stem(name))
    }

    fn file_key(&self, file: &str) -> String {
        normalize(self.strip_root(trimmed_stem(file)))
    }
}

fn trimmed_stem(name: &str) -> &str {
    let name = strip_file_system_dots(name);
    strip_supported_extension(name).trim_start_matches('/')
}

fn normalize(name: &str) -> String {
    if name == LAYOUT_FILE {
        return "/".to_string();
    }
    match name.strip_suffix(LAYOUT_FILE) {
        Some(parent) if parent.ends_with('/') => format!("/{}", parent.trim_end_matches('/')),
        _ => format!("/{name}"),
    }
}

fn strip_file_system_dots(mut name: &str) -> &str {
    loop {
        if let Some(rest) = name.strip_prefix("./") {
            name = rest;
        } else if let Some(rest) = name.strip_prefix("../") {
            name = rest;
        } else {
            return name;
        }
    }
}

fn strip_supported_extension(name: &str) -> &str {
    for extension in SUPPORTED_EXTENSIONS {
        if let Some(stem) = name.strip_suffix(extension) {
            return stem.strip_suffix(API_MARKER).unwrap_or(stem);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_dots_and_extensions() {
        let keys = ContextKeys::new();
        assert_eq!(keys.context_key("./blog/[slug].tsx"), "/blog/[slug]");
        assert_eq!(keys.context_key("../../about.js"), "/about");
        assert_eq!(keys.context_key("./api/users+api.ts"), "/api/users");
        assert_eq!(keys.context_key("blog/[slug]"), "/blog/[slug]");
        assert_eq!(keys.context_key("/blog/[slug]"), "/blog/[slug]");
        assert_eq!(keys.context_key(""), "/");
    }

    #[test]
    fn layouts_map_to_their_directory() {
        let keys = ContextKeys::new();
        assert_eq!(keys.context_key("./_layout.tsx"), "/");
        assert_eq!(keys.context_key("./(app)/blog/_layout.tsx"), "/(app)/blog");
        assert_eq!(keys.file_key("./(app)/_layout.tsx"), "/(app)");
    }

    #[test]
    fn names_ending_in_layout_keep_their_segment() {
        let keys = ContextKeys::new();
        assert_eq!(keys.context_key("./blog/post_layout.tsx"), "/blog/post_layout");
        assert_eq!(keys.context_key("blog/post_layout"), "/blog/post_layout");
        assert_eq!(keys.context_key("my_layout"), "/my_layout");
        assert_eq!(keys.context_key("_layouts/home"), "/_layouts/home");
    }

    #[test]
    fn index_inside_a_name_is_kept() {
        let keys = ContextKeys::new();
        assert_eq!(keys.context_key("./reindex.tsx"), "/reindex");
        assert_eq!(keys.context_key("docs/reindex"), "/docs/reindex");
    }

    #[test]
    fn strips_configured_roots_from_files_on_segment_boundaries() {
        let keys = ContextKeys::with_roots(["pages/api/", ""]);
        assert_eq!(keys.roots(), &["pages/api".to_string()]);
        assert_eq!(keys.file_key("pages/api/users/index"), "/users/index");
        assert_eq!(keys.file_key("pages/api"), "/");
        assert_eq!(keys.file_key("pages/apiary"), "/pages/apiary");
    }

    #[test]
    fn route_names_matching_a_root_are_not_stripped() {
        let keys = ContextKeys::with_roots(["app"]);
        assert_eq!(keys.context_key("app/settings"), "/app/settings");
        assert_eq!(keys.context_key("app"), "/app");
        assert_eq!(keys.file_key("app/settings+api.ts"), "/settings");
    }

    #[test]
    fn closures_act_as_extractors() {
        let upper = |name: &str| name.to_uppercase();
        assert_eq!(upper.context_key("/a"), "/A");
        assert_eq!(upper.file_key("/b"), "/B");
    }
}
