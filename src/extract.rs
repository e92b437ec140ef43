use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

// Maximal run of digit groups joined by single dots. Shape and boundary
// checks happen on the run so that longer dotted tokens are never split.
const DOTTED_RUN_PATTERN: &str = r"\d+(?:\.\d+)*";

#[derive(Debug, Clone)]
pub struct Extractor {
    pattern: Regex,
    strict: bool,
}

impl Extractor {
    pub fn new(strict: bool) -> Result<Self> {
        let pattern =
            Regex::new(DOTTED_RUN_PATTERN).context("Failed to compile IPv4 lexical pattern")?;
        debug!(
            action = "build",
            component = "extractor",
            strict = strict,
            "Extractor ready"
        );
        Ok(Self { pattern, strict })
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Every dotted-quad token in `line`, left to right, before any range
    /// validation.
    pub fn lexical_matches<'s, 'l: 's>(
        &'s self,
        line: &'l str,
    ) -> impl Iterator<Item = &'l str> + 's {
        self.pattern.find_iter(line).filter_map(move |m| {
            let token = m.as_str();
            if has_ipv4_shape(token) && is_detached(line, m.start(), m.end()) {
                Some(token)
            } else {
                None
            }
        })
    }

    pub fn accepts(&self, candidate: &str) -> bool {
        !self.strict || is_valid_octets(candidate)
    }

    pub fn candidates<'s, 'l: 's>(
        &'s self,
        line: &'l str,
    ) -> impl Iterator<Item = &'l str> + 's {
        self.lexical_matches(line)
            .filter(move |candidate| self.accepts(candidate))
    }
}

/// Four dot-separated groups, each parsing as a base-10 integer in 0..=255.
/// Leading zeros are fine; anything unparseable is simply invalid.
pub fn is_valid_octets(candidate: &str) -> bool {
    let mut octets = 0;
    for group in candidate.split('.') {
        octets += 1;
        match group.parse::<u16>() {
            Ok(value) if value <= 255 => {}
            _ => return false,
        }
    }
    octets == 4
}

fn has_ipv4_shape(token: &str) -> bool {
    let mut groups = 0;
    for group in token.split('.') {
        groups += 1;
        if groups > 4 || !(1..=3).contains(&group.chars().count()) {
            return false;
        }
    }
    groups == 4
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_detached(line: &str, start: usize, end: usize) -> bool {
    !touches_word(line[..start].chars().rev()) && !touches_word(line[end..].chars())
}

// A neighbouring dot only glues the token to something when a word
// character sits right behind it, so "at 10.0.0.1." still counts.
fn touches_word(mut side: impl Iterator<Item = char>) -> bool {
    match side.next() {
        Some('.') => side.next().is_some_and(is_word_char),
        Some(c) => is_word_char(c),
        None => false,
    }
}
