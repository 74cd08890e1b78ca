mod node;

pub use node::{DynamicSegment, RouteNode};
