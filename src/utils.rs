use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

// Characters that must not appear literally inside a path segment. Chat and
// message ids contain '@' and '_' which stay as-is; '/' would split the
// segment and '%' would be misread as an escape.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'/')
    .add(b'%');

/// Percent-encode a caller-supplied id for use as one URL path segment.
pub(crate) fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
