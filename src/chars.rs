use crate::node::Node;
use crate::parser::Parser;
use crate::state::State;

/// Parser that matches a maximal non-empty run of characters drawn
/// from a class.
///
/// The class spec is a compact list of single characters and `a-z`
/// style ranges, e.g. `"a-zA-Z0-9_"`. A `-` in first or last position
/// is literal. The spec string doubles as the expected description in
/// diagnostics.
pub struct Chars {
    spec: String,
    ranges: Vec<(char, char)>,
}

impl Chars {
    pub fn new(spec: impl Into<String>) -> Self {
        let spec = spec.into();
        let ranges = parse_spec(&spec);
        Self { spec, ranges }
    }

    fn matches(&self, c: char) -> bool {
        self.ranges.iter().any(|&(lo, hi)| c >= lo && c <= hi)
    }
}

fn parse_spec(spec: &str) -> Vec<(char, char)> {
    let chars: Vec<char> = spec.chars().collect();
    let mut ranges = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if i + 2 < chars.len() && chars[i + 1] == '-' {
            ranges.push((chars[i], chars[i + 2]));
            i += 3;
        } else {
            ranges.push((chars[i], chars[i]));
            i += 1;
        }
    }
    ranges
}

impl<'code> Parser<'code> for Chars {
    fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
        let start = state.pos();
        state.skip_whitespace();
        let rest = state.rest();

        let mut len = 0;
        for c in rest.chars() {
            if !self.matches(c) {
                break;
            }
            len += c.len_utf8();
        }

        if len == 0 {
            state.record_error(state.pos(), &self.spec);
            state.restore(start);
            return None;
        }

        state.advance(len);
        Some(Node::token(&rest[..len]))
    }
}

/// Convenience function to create a Chars parser.
pub fn chars(spec: impl Into<String>) -> Chars {
    Chars::new(spec)
}
