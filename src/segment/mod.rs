mod escape;
mod parser;

pub use escape::escape_literal;
pub use parser::{
    SegmentDescriptor, SegmentShape, classify_segment, is_dynamic_segment, is_group_segment,
    match_group_name, parse_parameter,
};
