use topreco_common::{MatchMode, SampleMatcher};

/// Include/exclude selection over sample names.
///
/// A sample is kept iff it passes the include list (or that list is empty) and
/// does not hit the exclude list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleFilter {
    include: Option<SampleMatcher>,
    exclude: Option<SampleMatcher>,
}

impl SampleFilter {
    pub fn new(mode: MatchMode, include: Vec<String>, exclude: Vec<String>) -> Self {
        let build = |refs: Vec<String>| (!refs.is_empty()).then(|| SampleMatcher::new(mode, refs));
        Self {
            include: build(include),
            exclude: build(exclude),
        }
    }

    pub fn keeps(&self, sample: &str) -> bool {
        let included = self.include.as_ref().is_none_or(|m| m.matches(sample));
        let excluded = self.exclude.as_ref().is_some_and(|m| m.matches(sample));
        included && !excluded
    }

    pub fn select<'a, I>(&self, samples: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        samples.into_iter().filter(|s| self.keeps(s)).collect()
    }
}
