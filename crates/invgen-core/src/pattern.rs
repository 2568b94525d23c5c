//! Bracketed range patterns in host names.
//!
//! A pattern occurrence is a `[...]` span holding one or more comma-separated
//! items, each either a single integer (`7`) or an inclusive range (`1-3`).
//! `db[1,3-4]` therefore denotes `db1`, `db3` and `db4`. Names with several
//! occurrences expand to the cross product, leftmost occurrence outermost.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::config::HostDeclaration;
use crate::error::PatternError;

/// Regex for one pattern occurrence.
/// Items are ASCII digits, optionally followed by `-` and more digits; anything
/// else inside the brackets leaves them as literal text.
const HOST_PATTERN: &str = r"\[[0-9]+(?:-[0-9]+)?(?:,[0-9]+(?:-[0-9]+)?)*\]";

static HOST_PATTERN_REGEX: OnceLock<Regex> = OnceLock::new();

fn host_pattern_regex() -> &'static Regex {
    HOST_PATTERN_REGEX.get_or_init(|| Regex::new(HOST_PATTERN).expect("invalid regex pattern"))
}

/// Location of a pattern occurrence inside a host name, brackets included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternOccurrence {
    /// Byte offset of the opening `[`.
    pub start: usize,
    /// Byte offset one past the closing `]`.
    pub end: usize,
}

impl PatternOccurrence {
    /// Returns the occurrence text, brackets included.
    pub fn as_str<'a>(&self, name: &'a str) -> &'a str {
        &name[self.start..self.end]
    }

    /// Returns the comma-separated items between the brackets.
    pub fn body<'a>(&self, name: &'a str) -> &'a str {
        &name[self.start + 1..self.end - 1]
    }
}

/// Returns every integer between `lo` and `hi` inclusive as decimal strings.
///
/// Bounds may be given in either order.
pub fn expand_range(lo: u64, hi: u64) -> Vec<String> {
    let (from, to) = (lo.min(hi), lo.max(hi));
    debug!("calculating int interval between {} and {}", from, to);
    (from..=to).map(|value| value.to_string()).collect()
}

/// Finds the leftmost pattern occurrence in `name`.
pub fn find_pattern(name: &str) -> Option<PatternOccurrence> {
    host_pattern_regex()
        .find(name)
        .map(|m| PatternOccurrence {
            start: m.start(),
            end: m.end(),
        })
}

/// Replaces one occurrence with each value it denotes.
///
/// Output follows item order, then ascending value order within a range.
/// Other occurrences in `name` are left as they are.
pub fn expand_pattern(
    name: &str,
    occurrence: PatternOccurrence,
) -> Result<Vec<String>, PatternError> {
    let prefix = &name[..occurrence.start];
    let suffix = &name[occurrence.end..];

    let mut expanded = Vec::new();
    for item in occurrence.body(name).split(',') {
        let candidates = match item.split_once('-') {
            Some((lo, hi)) => expand_range(
                parse_bound(name, item, lo)?,
                parse_bound(name, item, hi)?,
            ),
            None => vec![parse_bound(name, item, item)?.to_string()],
        };
        debug!("possibilities for '{}': {:?}", item, candidates);
        expanded.extend(
            candidates
                .into_iter()
                .map(|candidate| format!("{prefix}{candidate}{suffix}")),
        );
    }
    Ok(expanded)
}

fn parse_bound(host: &str, item: &str, bound: &str) -> Result<u64, PatternError> {
    bound.parse().map_err(|_| PatternError::InvalidBound {
        host: host.to_string(),
        item: item.to_string(),
        bound: bound.to_string(),
    })
}

/// Expands every pattern occurrence of a declaration into concrete records.
///
/// Each produced record keeps the declaration's groups and variables. A name
/// without any occurrence comes back unchanged as a single record.
pub fn resolve_host(declaration: &HostDeclaration) -> Result<Vec<HostDeclaration>, PatternError> {
    let mut resolved = Vec::new();
    match find_pattern(&declaration.host) {
        None => resolved.push(declaration.clone()),
        Some(occurrence) => resolve_into(declaration, occurrence, &mut resolved)?,
    }
    Ok(resolved)
}

fn resolve_into(
    declaration: &HostDeclaration,
    occurrence: PatternOccurrence,
    resolved: &mut Vec<HostDeclaration>,
) -> Result<(), PatternError> {
    debug!(
        "processing pattern {} found in host name: {}",
        occurrence.as_str(&declaration.host),
        declaration.host
    );
    for name in expand_pattern(&declaration.host, occurrence)? {
        let next = find_pattern(&name);
        let record = declaration.with_host(name);
        match next {
            Some(next) => resolve_into(&record, next, resolved)?,
            None => resolved.push(record),
        }
    }
    Ok(())
}
