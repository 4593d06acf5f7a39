//! Keyword-scoring tag heuristic, used when the classifier is unavailable.

/// Tag used when no category keyword occurs in the text.
pub const DEFAULT_CATEGORY: &str = "Business";

/// Category → keywords, in tie-break order.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    ("Career Development", &["job", "career", "interview", "resume", "hiring", "work", "employment"]),
    ("Entrepreneurship", &["startup", "business", "entrepreneur", "company", "founder"]),
    ("Technology", &["tech", "ai", "software", "coding", "digital", "development"]),
    ("Investment", &["investment", "crypto", "trading", "portfolio", "wealth", "money"]),
    ("Marketing", &["marketing", "brand", "content", "social", "advertising"]),
    ("Personal Growth", &["growth", "learning", "motivation", "success", "development"]),
    ("Leadership", &["leadership", "management", "team", "leader", "mentor"]),
    ("Networking", &["network", "connection", "linkedin", "professional", "relationship"]),
    ("Education", &["education", "learning", "skill", "training", "course"]),
    ("Healthcare", &["health", "medical", "healthcare", "wellness", "fitness"]),
    ("Finance", &["financial", "budget", "planning", "economy", "banking"]),
    ("Sales", &["sales", "customer", "client", "revenue", "deal"]),
    ("Consulting", &["consulting", "advice", "strategy", "solution", "expert"]),
    ("Innovation", &["innovation", "creative", "idea", "solution", "breakthrough"]),
    ("Communication", &["communication", "presentation", "speaking", "writing", "message"]),
];

/// Pick the category whose keywords occur most often as substrings.
///
/// Ties keep the earlier category; no hits at all yields [`DEFAULT_CATEGORY`].
pub fn extract_tag_fallback(text: &str) -> &'static str {
    let text_lower = text.to_lowercase();

    let mut best_category = DEFAULT_CATEGORY;
    let mut best_score = 0;

    for &(category, keywords) in CATEGORIES {
        let score = keywords.iter().filter(|kw| text_lower.contains(**kw)).count();
        if score > best_score {
            best_score = score;
            best_category = category;
        }
    }

    best_category
}
