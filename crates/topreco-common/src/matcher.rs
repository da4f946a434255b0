//! Sample-name predicates built from a list of reference strings.
//!
//! A [`SampleMatcher`] owns its references and never mutates them, so one
//! matcher can be shared across threads and queried any number of times.

/// How a candidate is compared against the reference list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Candidate equals some reference.
    #[default]
    Exact,
    /// Candidate starts with some reference, scanning in order.
    ///
    /// An empty reference ends the scan: the result is then "candidate is empty",
    /// whatever later references would have said.
    Prefix,
    /// Shell-style `*x`, `x*`, `*x*` patterns; anything else is exact.
    Wildcard,
}

impl MatchMode {
    pub const NAMES: [&'static str; 3] = ["exact", "prefix", "wildcard"];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Exact => "exact",
            MatchMode::Prefix => "prefix",
            MatchMode::Wildcard => "wildcard",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exact" => Some(MatchMode::Exact),
            "prefix" | "begin" => Some(MatchMode::Prefix),
            "wildcard" | "glob" => Some(MatchMode::Wildcard),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleMatcher {
    mode: MatchMode,
    references: Vec<String>,
}

impl SampleMatcher {
    pub fn new<I, S>(mode: MatchMode, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode,
            references: references.into_iter().map(Into::into).collect(),
        }
    }

    pub fn exact<I, S>(references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(MatchMode::Exact, references)
    }

    pub fn prefix<I, S>(references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(MatchMode::Prefix, references)
    }

    pub fn wildcard<I, S>(references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(MatchMode::Wildcard, references)
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self.mode {
            MatchMode::Exact => exact_match(&self.references, candidate),
            MatchMode::Prefix => prefix_match(&self.references, candidate),
            MatchMode::Wildcard => wildcard_match(&self.references, candidate),
        }
    }

    /// Matching candidates, in input order.
    pub fn filter<'a, I>(&self, candidates: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates.into_iter().filter(|c| self.matches(c)).collect()
    }

    /// Turn the matcher into a standalone predicate.
    pub fn into_fn(self) -> impl Fn(&str) -> bool + Clone + Send + Sync + 'static {
        move |candidate: &str| self.matches(candidate)
    }
}

/// Predicate that is true iff the candidate equals one of `references`.
pub fn make_string_check<I, S>(references: I) -> impl Fn(&str) -> bool + Clone + Send + Sync
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SampleMatcher::exact(references).into_fn()
}

/// Predicate that is true iff the candidate starts with one of `references`.
///
/// See [`MatchMode::Prefix`] for how an empty reference behaves.
pub fn make_string_check_begin<I, S>(
    references: I,
) -> impl Fn(&str) -> bool + Clone + Send + Sync
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SampleMatcher::prefix(references).into_fn()
}

fn exact_match(references: &[String], candidate: &str) -> bool {
    references.iter().any(|r| r == candidate)
}

fn prefix_match(references: &[String], candidate: &str) -> bool {
    for reference in references {
        if reference.is_empty() {
            return candidate.is_empty();
        }
        if candidate.starts_with(reference.as_str()) {
            return true;
        }
    }
    false
}

fn wildcard_match(references: &[String], candidate: &str) -> bool {
    references.iter().any(|r| wildcard_entry(r, candidate))
}

fn wildcard_entry(pattern: &str, candidate: &str) -> bool {
    let stars = pattern.matches('*').count();
    if stars == 1
        && let Some(suffix) = pattern.strip_prefix('*')
    {
        return candidate.ends_with(suffix);
    }
    if stars == 1
        && let Some(prefix) = pattern.strip_suffix('*')
    {
        return candidate.starts_with(prefix);
    }
    if stars == 2
        && let Some(inner) = pattern
            .strip_prefix('*')
            .and_then(|rest| rest.strip_suffix('*'))
    {
        return candidate.contains(inner);
    }
    pattern == candidate
}
