//! Inline directives embedded in task names.
//!
//! Two directive forms are recognised inside the free-text name:
//!
//! - `!before DD.MM.YYYY` (or `DD-MM-YYYY`) sets the deadline.
//! - `!1` to `!4` set the priority, from critical to low.
//!
//! Each extractor is a pure function returning the stripped name alongside
//! the resolved value. A value supplied out of band always wins over the
//! inline directive, but the directive text is still removed from the name.
//! A deadline directive whose date cannot be parsed is left in the name
//! verbatim so the user can see it.

use super::Priority;
use chrono::NaiveDate;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Date formats accepted after `!before`.
const DEADLINE_FORMATS: [&str; 2] = ["%d.%m.%Y", "%d-%m-%Y"];

#[expect(
    clippy::expect_used,
    reason = "the pattern is a compile-time constant covered by unit tests"
)]
static DEADLINE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)!before\s+([0-9]{2}[.-][0-9]{2}[.-][0-9]{4})")
        .expect("deadline directive pattern is valid")
});

#[expect(
    clippy::expect_used,
    reason = "the pattern is a compile-time constant covered by unit tests"
)]
static PRIORITY_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"![0-9]").expect("priority directive pattern is valid"));

/// Name and field values after all inline directives have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDirectives {
    /// Trimmed name with recognised directives removed.
    pub name: String,
    /// Deadline from the out-of-band value or the inline directive.
    pub deadline: Option<NaiveDate>,
    /// Priority from the out-of-band value, the inline directive, or the
    /// default.
    pub priority: Priority,
}

/// Applies the deadline directive and then the priority directive to `name`.
#[must_use]
pub fn resolve_directives(
    name: &str,
    deadline: Option<NaiveDate>,
    priority: Option<Priority>,
) -> ResolvedDirectives {
    let (without_deadline, resolved_deadline) = extract_deadline(name, deadline);
    let (stripped, resolved_priority) = extract_priority(&without_deadline, priority);
    ResolvedDirectives {
        name: stripped,
        deadline: resolved_deadline,
        priority: resolved_priority,
    }
}

/// Extracts `!before <date>` directives from `name`.
///
/// With a `supplied` deadline every directive is stripped and the supplied
/// value is returned. Without one, the first directive with a parseable date
/// provides the deadline and every parseable directive is stripped; the rest
/// stay in place.
#[must_use]
pub fn extract_deadline(name: &str, supplied: Option<NaiveDate>) -> (String, Option<NaiveDate>) {
    let strip_unparsed = supplied.is_some();
    let mut resolved = supplied;
    let mut stripped = name.trim().to_owned();

    while let Some((range, date)) = next_deadline_directive(&stripped, strip_unparsed) {
        if resolved.is_none() {
            resolved = date;
        }
        stripped.replace_range(range, "");
        let trimmed = stripped.trim().to_owned();
        stripped = trimmed;
    }

    (stripped, resolved)
}

/// Extracts `!<digit>` directives from `name`.
///
/// The supplied priority wins; otherwise `!1` to `!4` are checked in that
/// order and the first present selects the priority. Every `!<digit>`
/// occurrence is stripped either way.
#[must_use]
pub fn extract_priority(name: &str, supplied: Option<Priority>) -> (String, Priority) {
    let resolved = supplied
        .or_else(|| {
            Priority::DIRECTIVE_ORDER
                .into_iter()
                .find(|priority| name.contains(priority.directive()))
        })
        .unwrap_or_default();

    let mut stripped = name.trim().to_owned();
    while PRIORITY_DIRECTIVE.is_match(&stripped) {
        let next = PRIORITY_DIRECTIVE
            .replace_all(&stripped, "")
            .trim()
            .to_owned();
        stripped = next;
    }

    (stripped, resolved)
}

/// Parses the date portion of a deadline directive.
#[must_use]
pub fn parse_directive_date(value: &str) -> Option<NaiveDate> {
    DEADLINE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Finds the first deadline directive that should be stripped.
fn next_deadline_directive(
    name: &str,
    strip_unparsed: bool,
) -> Option<(Range<usize>, Option<NaiveDate>)> {
    DEADLINE_DIRECTIVE.captures_iter(name).find_map(|captures| {
        let directive = captures.get(0)?;
        let date = parse_directive_date(captures.get(1)?.as_str());
        (date.is_some() || strip_unparsed).then(|| (directive.range(), date))
    })
}
