//! Fixed canonical-tag merge table.
//!
//! Rules are evaluated in declared order; the first match wins.

/// A canonical tag and the synonyms folded into it.
#[derive(Debug, Clone, Copy)]
pub struct MergeRule {
    pub canonical: &'static str,
    pub synonyms: &'static [&'static str],
}

impl MergeRule {
    /// Exact synonym, or any synonym occurring inside the tag (case-insensitive).
    pub fn matches_synonym(&self, tag: &str) -> bool {
        if self.synonyms.contains(&tag) {
            return true;
        }
        let tag_lower = tag.to_lowercase();
        self.synonyms
            .iter()
            .any(|syn| tag_lower.contains(&syn.to_lowercase()))
    }

    /// Canonical name inside the tag, or the tag inside the canonical name.
    pub fn matches_canonical(&self, tag: &str) -> bool {
        let tag_lower = tag.to_lowercase();
        let canonical_lower = self.canonical.to_lowercase();
        canonical_lower.contains(&tag_lower) || tag_lower.contains(&canonical_lower)
    }

    pub fn matches(&self, tag: &str) -> bool {
        self.matches_synonym(tag) || self.matches_canonical(tag)
    }
}

pub const MERGE_RULES: &[MergeRule] = &[
    MergeRule {
        canonical: "Financial Planning",
        synonyms: &["Budgeting", "Budget", "Finance", "Money Management"],
    },
    MergeRule {
        canonical: "Investment",
        synonyms: &["Investing", "Trading", "Portfolio", "Wealth"],
    },
    MergeRule {
        canonical: "Cryptocurrency",
        synonyms: &["Crypto", "Bitcoin", "Ethereum", "Blockchain"],
    },
    MergeRule {
        canonical: "Career Development",
        synonyms: &["Career Growth", "Professional Growth", "Job Search", "Career"],
    },
    MergeRule {
        canonical: "Entrepreneurship",
        synonyms: &["Startup", "Business", "Entrepreneur"],
    },
    MergeRule {
        canonical: "Technology",
        synonyms: &["Tech", "AI", "Software", "Digital"],
    },
    MergeRule {
        canonical: "Marketing",
        synonyms: &["Branding", "Social Media", "Content Marketing"],
    },
    MergeRule {
        canonical: "Personal Growth",
        synonyms: &["Self Development", "Learning", "Motivation"],
    },
    MergeRule {
        canonical: "Leadership",
        synonyms: &["Management", "Team Building"],
    },
    MergeRule {
        canonical: "Networking",
        synonyms: &["Professional Network", "Connections"],
    },
    MergeRule {
        canonical: "Industry Insights",
        synonyms: &["Market Trends", "Analysis"],
    },
    // Locations and vague places carry no topic
    MergeRule {
        canonical: "General",
        synonyms: &["Pakistan", "Karachi", "Lahore", "Islamabad", "Location", "City"],
    },
];

/// First rule matching a (title-cased) tag.
pub fn find_rule(tag: &str) -> Option<&'static MergeRule> {
    MERGE_RULES.iter().find(|rule| rule.matches(tag))
}
