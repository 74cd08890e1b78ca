use smallvec::SmallVec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentDescriptor {
    pub name: String,
    pub optional: bool,
    pub repeat: bool,
}

impl SegmentDescriptor {
    pub fn not_found() -> Self {
        Self {
            name: "not-found".to_string(),
            optional: true,
            repeat: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentShape<'a> {
    Dynamic(SegmentDescriptor),
    /// Trimmed, non-empty alternatives of a `(a,b)` group.
    Group(SmallVec<[&'a str; 4]>),
    Static(&'a str),
}

fn strip_brackets(segment: &str) -> Option<&str> {
    segment.strip_prefix('[')?.strip_suffix(']')
}

pub fn is_dynamic_segment(segment: &str) -> bool {
    strip_brackets(segment).is_some()
}

pub fn is_group_segment(segment: &str) -> bool {
    segment
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .is_some()
}

/// `[name]`, `[[name]]`, `[...name]` and `[[...name]]`.
#[tracing::instrument(level = "trace")]
pub fn parse_parameter(segment: &str) -> SegmentDescriptor {
    let mut name = strip_brackets(segment).unwrap_or(segment);
    let mut optional = false;
    let mut repeat = false;

    if let Some(inner) = strip_brackets(name) {
        optional = true;
        name = inner;
    }

    if let Some(rest) = name.strip_prefix("...") {
        repeat = true;
        name = rest;
    }

    SegmentDescriptor {
        name: name.to_string(),
        optional,
        repeat,
    }
}

/// Group body stops at the first `/` or `\`.
pub fn match_group_name(name: &str) -> Option<&str> {
    let open = name.find('(')?;
    if name[..open].contains(&[')', '\\'][..]) {
        return None;
    }

    let body = &name[open + 1..];
    let limit = body.find(&['/', '\\'][..]).unwrap_or(body.len());
    let close = body[..limit].rfind(')')?;
    if close == 0 {
        return None;
    }
    Some(&body[..close])
}

pub fn classify_segment(segment: &str) -> SegmentShape<'_> {
    if is_dynamic_segment(segment) {
        return SegmentShape::Dynamic(parse_parameter(segment));
    }

    if is_group_segment(segment) {
        let alternatives: SmallVec<[&str; 4]> = match_group_name(segment)
            .map(|group| {
                group
                    .split(',')
                    .map(str::trim)
                    .filter(|alternative| !alternative.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        return SegmentShape::Group(alternatives);
    }

    SegmentShape::Static(segment)
}
