use smallvec::SmallVec;

use super::{CompiledMatcher, SafeKeyGenerator};
use crate::options::ManifestOptions;
use crate::segment::{SegmentDescriptor, SegmentShape, classify_segment, escape_literal};
use crate::types::RouteKeys;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRoute {
    pub pattern: String,
    pub route_keys: RouteKeys,
}

pub fn compile_named_route(normalized_route: &str, page: &str, file: &str) -> CompiledMatcher {
    compile_named_route_with(normalized_route, page, file, &ManifestOptions::default())
}

#[tracing::instrument(level = "trace", skip(page, file, options), fields(file=%file))]
pub fn compile_named_route_with(
    normalized_route: &str,
    page: &str,
    file: &str,
    options: &ManifestOptions,
) -> CompiledMatcher {
    let named = named_parameterized_route(normalized_route, options);

    CompiledMatcher {
        file: file.to_string(),
        page: page.to_string(),
        named_regex: format!("^{}(?:/)?$", named.pattern),
        route_keys: named.route_keys,
        generated: None,
    }
}

pub fn named_parameterized_route(route: &str, options: &ManifestOptions) -> NamedRoute {
    let trimmed = remove_trailing_slash(route);
    let mut chars = trimmed.chars();
    chars.next();
    let body = chars.as_str();

    let segments: SmallVec<[&str; 8]> = if body.is_empty() {
        SmallVec::new()
    } else {
        body.split('/').collect()
    };
    let last = segments.len().saturating_sub(1);

    let mut safe_keys = SafeKeyGenerator::new();
    let mut route_keys = RouteKeys::new();
    let mut pattern = String::with_capacity(route.len() * 2);

    for (index, &segment) in segments.iter().enumerate() {
        let shape = if index == last && segment == options.not_found_segment {
            SegmentShape::Dynamic(SegmentDescriptor::not_found())
        } else {
            classify_segment(segment)
        };

        match shape {
            SegmentShape::Dynamic(descriptor) => {
                let key = route_key_for(
                    &descriptor.name,
                    &route_keys,
                    &mut safe_keys,
                    options.max_param_name_len,
                );
                push_capture(&mut pattern, &key, &descriptor);
                route_keys.insert(key, descriptor.name);
            }
            SegmentShape::Group(alternatives) => push_group(&mut pattern, &alternatives),
            SegmentShape::Static(literal) => {
                pattern.push('/');
                pattern.push_str(&escape_literal(literal));
            }
        }
    }

    tracing::event!(
        tracing::Level::TRACE,
        operation = "named_parameterized_route",
        route = %route,
        segments = segments.len() as u64,
        keys = route_keys.len() as u64
    );

    NamedRoute {
        pattern,
        route_keys,
    }
}

fn remove_trailing_slash(route: &str) -> &str {
    let stripped = route.strip_suffix('/').unwrap_or(route);
    if stripped.is_empty() { "/" } else { stripped }
}

fn route_key_for(
    name: &str,
    route_keys: &RouteKeys,
    safe_keys: &mut SafeKeyGenerator,
    max_len: usize,
) -> String {
    let cleaned: String = name
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        .collect();

    let invalid = cleaned.is_empty()
        || cleaned.len() > max_len
        || cleaned.as_bytes()[0].is_ascii_digit()
        || route_keys.contains_key(&cleaned);

    if !invalid {
        return cleaned;
    }

    loop {
        let key = safe_keys.next_key();
        if !route_keys.contains_key(&key) {
            return key;
        }
    }
}

fn push_capture(pattern: &mut String, key: &str, descriptor: &SegmentDescriptor) {
    let (open, close) = match (descriptor.repeat, descriptor.optional) {
        (true, true) => ("(?:/(?<", ">.+?))?"),
        (true, false) => ("/(?<", ">.+?)"),
        (false, _) => ("/(?<", ">[^/]+?)"),
    };
    pattern.push_str(open);
    pattern.push_str(key);
    pattern.push_str(close);
}

fn push_group(pattern: &mut String, alternatives: &[&str]) {
    match alternatives {
        [] => {}
        [single] => {
            pattern.push_str("(?:/");
            pattern.push_str(&escape_literal(single));
            pattern.push_str(")?");
        }
        many => {
            pattern.push_str("(?:/(?:");
            for (index, alternative) in many.iter().enumerate() {
                if index > 0 {
                    pattern.push('|');
                }
                pattern.push_str(&escape_literal(alternative));
            }
            pattern.push_str("))?");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_removed_once() {
        assert_eq!(remove_trailing_slash("/blog/"), "/blog");
        assert_eq!(remove_trailing_slash("/blog"), "/blog");
        assert_eq!(remove_trailing_slash("/"), "/");
        assert_eq!(remove_trailing_slash(""), "/");
    }

    #[test]
    fn generated_key_skips_names_already_taken() {
        let mut route_keys = RouteKeys::new();
        route_keys.insert("a".to_string(), "a".to_string());
        let mut safe_keys = SafeKeyGenerator::new();

        let key = route_key_for("1st", &route_keys, &mut safe_keys, 30);
        assert_eq!(key, "b");
    }

    #[test]
    fn name_at_length_limit_is_kept() {
        let name = "p".repeat(30);
        let key = route_key_for(&name, &RouteKeys::new(), &mut SafeKeyGenerator::new(), 30);
        assert_eq!(key, name);

        let longer = "p".repeat(31);
        let key = route_key_for(&longer, &RouteKeys::new(), &mut SafeKeyGenerator::new(), 30);
        assert_eq!(key, "a");
    }
}
