//! English vs. Urduish detection by pattern matching.

use ghostwriter_core::Language;
use once_cell::sync::Lazy;
use regex::Regex;

static URDU_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Arabic/Urdu script
        r"[\x{0600}-\x{06FF}]",
        // Function words and pronouns
        r"(?i)\b(aur|hai|hain|ke|ki|ko|se|me|mein|bhi|nahi|kya|kaise|kab|kahan|yeh|woh|main|ap|aap|bhai|sahab|ji)\b",
        // Emphasis and verb forms
        r"(?i)\b(thora|thore|bht|bhut|bohot|krna|karna|krte|karte|hoga|hogi|hoge|wala|wali|vale)\b",
        // Currency and religious terms
        r"(?i)\b(paisa|paise|rupay|rupee|lakh|crore|insha|mashaallah|alhamdulillah)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// `Urduish` if any Urdu pattern matches anywhere in the text, else `English`.
pub fn detect_language(text: &str) -> Language {
    if URDU_PATTERNS.iter().any(|re| re.is_match(text)) {
        Language::Urduish
    } else {
        Language::English
    }
}
