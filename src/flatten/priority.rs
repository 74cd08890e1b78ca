use std::cmp::Ordering;

use crate::segment::match_group_name;
use crate::tree::{DynamicSegment, RouteNode};

pub trait RouteComparator {
    fn compare(&self, a: &RouteNode, b: &RouteNode) -> Ordering;
}

impl<F> RouteComparator for F
where
    F: Fn(&RouteNode, &RouteNode) -> Ordering,
{
    fn compare(&self, a: &RouteNode, b: &RouteNode) -> Ordering {
        self(a, b)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecificityOrder;

impl RouteComparator for SpecificityOrder {
    fn compare(&self, a: &RouteNode, b: &RouteNode) -> Ordering {
        match (a.is_dynamic(), b.is_dynamic()) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (true, true) => {
                let by_dynamic = compare_dynamic(&a.dynamic, &b.dynamic);
                if by_dynamic != Ordering::Equal {
                    return by_dynamic;
                }
            }
            (false, false) => {}
        }

        match (is_index_like(&a.route), is_index_like(&b.route)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.route.len().cmp(&b.route.len()),
        }
    }
}

fn compare_dynamic(a: &[DynamicSegment], b: &[DynamicSegment]) -> Ordering {
    if a.len() != b.len() {
        return b.len().cmp(&a.len());
    }

    for (left, right) in a.iter().zip(b) {
        let ordering = match (left.not_found, right.not_found) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => compare_deep(left, right),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn compare_deep(a: &DynamicSegment, b: &DynamicSegment) -> Ordering {
    match (a.deep, b.deep) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

fn is_index_like(route: &str) -> bool {
    route.trim_start_matches('/') == "index" || match_group_name(route).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_routes_sort_before_dynamic() {
        let about = RouteNode::page("about", "./about.tsx");
        let slug = RouteNode::page("[slug]", "./[slug].tsx")
            .with_dynamic(vec![DynamicSegment::new("slug")]);

        assert_eq!(SpecificityOrder.compare(&about, &slug), Ordering::Less);
        assert_eq!(SpecificityOrder.compare(&slug, &about), Ordering::Greater);
    }

    #[test]
    fn catch_all_sorts_after_single_segment() {
        let slug = RouteNode::page("[slug]", "./[slug].tsx")
            .with_dynamic(vec![DynamicSegment::new("slug")]);
        let rest = RouteNode::page("[...rest]", "./[...rest].tsx")
            .with_dynamic(vec![DynamicSegment::deep("rest")]);
        let missing = RouteNode::page("+not-found", "./+not-found.tsx")
            .with_dynamic(vec![DynamicSegment::not_found()]);

        assert_eq!(SpecificityOrder.compare(&slug, &rest), Ordering::Less);
        assert_eq!(SpecificityOrder.compare(&rest, &missing), Ordering::Less);
    }

    #[test]
    fn index_routes_sort_before_longer_siblings() {
        let index = RouteNode::page("index", "./index.tsx");
        let about = RouteNode::page("abc", "./abc.tsx");
        assert_eq!(SpecificityOrder.compare(&index, &about), Ordering::Less);

        let short = RouteNode::page("ab", "./ab.tsx");
        assert_eq!(SpecificityOrder.compare(&about, &short), Ordering::Greater);
    }
}
