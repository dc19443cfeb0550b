//! Institution name filtering and canonicalization.
//!
//! Rules are ordered lookup tables evaluated top to bottom; the first match
//! wins. The table contents mirror the curated lists from the member-export
//! cleanup and are exhaustive, not heuristic.

/// Placeholder values that mean "no institution given".
const PLACEHOLDER_NAMES: &[&str] = &[
    "unknown",
    "not specified",
    "na",
    "n/a",
    "unknown (not specified)",
    "not applicable",
    "none",
    "nil",
];

/// Personal-title words that mark a row as a person, not an institution.
const TITLE_KEYWORDS: &[&str] = &[
    "professor",
    "teacher",
    "manager",
    "consultant",
    "associate",
    "advisor",
    "researcher",
    "engineer",
    "student",
    "studying",
    "msc",
    "phd",
    "candidate",
    "lecturer",
    "faculty",
    "scholar",
    "fellow",
    "applicant",
    "nominee",
];

/// A title keyword alone does not exclude a row that names a university;
/// one of these must also be present.
const TITLE_TRIGGERS: &[&str] = &["studying", "professor", "lecturer"];

/// Known noise entries removed after canonicalization.
const EXPLICIT_REMOVALS: &[&str] = &[
    "sagacia jewelry",
    "aeonfly",
    "world health organization",
    "dumpsboss",
    "mystudy education consulting",
    "ctspoint",
    "the student helpline",
    "vibrant finance",
    "ascent innovations",
    "ministry of education",
    "moselewapula junior secondary school",
    "organization",
    "volunteer at star scholars network",
];

const MAX_NAME_CHARS: usize = 120;

struct AliasRule {
    /// Lowercase substrings that select this rule.
    contains: &'static [&'static str],
    /// Lowercase whole-name matches that select this rule.
    equals: &'static [&'static str],
    canonical: &'static str,
}

const ALIAS_RULES: &[AliasRule] = &[
    AliasRule {
        contains: &["kathmandu university", "ku school", "kusoe"],
        equals: &[],
        canonical: "Kathmandu University",
    },
    AliasRule {
        contains: &[
            "tribhuvan university",
            "tribhuwan university",
            "central department of economics",
            "institute of engineering (ioe)",
        ],
        equals: &[],
        canonical: "Tribhuvan University",
    },
    AliasRule {
        contains: &["morgan state university"],
        equals: &[],
        canonical: "Morgan State University",
    },
    AliasRule {
        contains: &["op jindal", "o.p. jindal", "jindal global"],
        equals: &[],
        canonical: "O.P. Jindal Global University",
    },
    AliasRule {
        contains: &["american university in the emirates"],
        equals: &["aue"],
        canonical: "American University in the Emirates",
    },
    AliasRule {
        contains: &["university of algiers"],
        equals: &[],
        canonical: "University of Algiers",
    },
    AliasRule {
        contains: &["nepal open university", "nou"],
        equals: &[],
        canonical: "Nepal Open University",
    },
    AliasRule {
        contains: &["musashino university"],
        equals: &[],
        canonical: "Musashino University",
    },
    AliasRule {
        contains: &["far western university"],
        equals: &[],
        canonical: "Far Western University",
    },
    AliasRule {
        contains: &["michigan state university"],
        equals: &[],
        canonical: "Michigan State University",
    },
    AliasRule {
        contains: &["istanbul aydin university"],
        equals: &[],
        canonical: "Istanbul Aydin University",
    },
    AliasRule {
        contains: &["federal university wukari"],
        equals: &[],
        canonical: "Federal University Wukari",
    },
    AliasRule {
        contains: &["saarland university"],
        equals: &[],
        canonical: "Saarland University of Applied Sciences",
    },
    AliasRule {
        contains: &["masinde muliro university"],
        equals: &[],
        canonical: "Masinde Muliro University",
    },
    AliasRule {
        contains: &["northwestern university"],
        equals: &[],
        canonical: "Northwestern University",
    },
];

/// Trim and collapse internal whitespace runs to single spaces.
pub fn collapse_whitespace(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map a raw spelling to its canonical display name. Falls back to the
/// whitespace-collapsed original (original casing) when no rule matches.
pub fn canonical_name(raw: &str) -> String {
    let collapsed = collapse_whitespace(raw);
    let lower = collapsed.to_lowercase();

    for rule in ALIAS_RULES {
        if rule.contains.iter().any(|pat| lower.contains(pat))
            || rule.equals.iter().any(|pat| lower == *pat)
        {
            return rule.canonical.to_string();
        }
    }

    collapsed
}

/// Apply the exclusion rules in order and return the canonical institution
/// name for rows that survive, `None` for excluded rows.
pub fn filter_institution(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lower = trimmed.to_lowercase();
    if PLACEHOLDER_NAMES.contains(&lower.as_str()) {
        return None;
    }

    if trimmed.chars().count() > MAX_NAME_CHARS {
        return None;
    }

    // Personal records ("Associate Professor at ...") masquerading as
    // institutions. Only fires when the text also names a university and one
    // of the trigger words is present; a bare title keyword passes through.
    if TITLE_KEYWORDS.iter().any(|kw| lower.contains(kw))
        && lower.contains("university")
        && TITLE_TRIGGERS.iter().any(|t| lower.contains(t))
    {
        return None;
    }

    let canonical = canonical_name(trimmed);
    let canonical_lower = canonical.to_lowercase();

    if EXPLICIT_REMOVALS.iter().any(|rem| canonical_lower.contains(rem)) {
        return None;
    }

    if !canonical_lower.contains("university") {
        return None;
    }

    Some(canonical)
}
