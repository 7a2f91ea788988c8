use crate::validation;

/// Whether rows for contacts on the exclude list are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InclusionMode {
    ExcludeKnown,
    IncludeKnown,
}

impl InclusionMode {
    pub fn from_include_flag(include_excluded: bool) -> Self {
        if include_excluded {
            InclusionMode::IncludeKnown
        } else {
            InclusionMode::ExcludeKnown
        }
    }
}

/// A name search, already turned into a case-insensitive `LIKE` pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSpec {
    pub pattern: String,
    /// Also match the pattern against first names, not only last names.
    pub match_first_name: bool,
}

impl SearchSpec {
    pub fn last_name(spec: Option<&str>) -> Self {
        Self {
            pattern: validation::like_pattern(spec),
            match_first_name: false,
        }
    }

    pub fn any_name(spec: Option<&str>) -> Self {
        Self {
            pattern: validation::like_pattern(spec),
            match_first_name: true,
        }
    }

    pub fn everyone() -> Self {
        Self::last_name(None)
    }
}
