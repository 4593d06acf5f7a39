//! Few-shot prompt construction.
//!
//! The prompt has a fixed layout: role and objective, the three numbered
//! inputs, a style guide, output rules, and up to two example posts pulled
//! from the corpus.

use ghostwriter_core::{Language, LengthBucket};
use ghostwriter_corpus::Corpus;

/// Maximum number of corpus examples embedded in a prompt.
pub const MAX_EXAMPLES: usize = 2;

/// Whose voice to write in, and how.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptStyle {
    pub persona: String,
    pub tone: String,
    /// Catchphrase the author uses now and then.
    pub signature_phrase: Option<String>,
}

impl Default for PromptStyle {
    fn default() -> Self {
        Self {
            persona: "Hamza Bhatti".into(),
            tone: "storytelling".into(),
            signature_phrase: Some("Dedo Mazo Ayo".into()),
        }
    }
}

fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::Urduish => "Write in Roman Urdu blended naturally with English.",
        Language::English => "Keep it clean, modern, and simple.",
    }
}

/// Build the generation prompt for a length bucket, language and topic tag.
pub fn build_prompt(
    corpus: &Corpus,
    length: LengthBucket,
    language: Language,
    tag: &str,
    style: &PromptStyle,
) -> String {
    let persona = &style.persona;

    let mut prompt = format!(
        "You are a professional content creator trained to write like {persona}, \
a popular influencer known for deep, relatable, and emotionally-driven posts on LinkedIn. \
Write in a **{tone}** tone.

== Objective ==
Generate a new original LinkedIn post in the voice of {persona}, matching the tone and \
rhythm of the inputs and examples below. Output only the post text, nothing else.

== Inputs ==
1) Topic: {tag}
2) Post Length: {range}
3) Language: {language}
   - {instruction}

== Style Guide (Critical) ==
- Open with a relatable hook or a personal truth.
- Write reflectively and conversationally, as if speaking to a friend.
- Use **short sentences**, whitespace, and **line breaks** generously.
- Avoid generic advice. Every sentence should **feel personal and grounded**.
- Keep a **raw, human** voice. Emotion matters more than perfection.
- No emojis. No hashtags.
",
        range = length.human_range(),
        language = language.as_str(),
        instruction = language_instruction(language),
        tone = style.tone,
    );

    if let Some(phrase) = &style.signature_phrase {
        prompt.push_str(&format!(
            "- You may occasionally use the line {persona} is known for: \"{phrase}\"\n"
        ));
    }

    prompt.push_str(&format!(
        "
== Output ==
- The final output must **look and feel like** it was written by {persona}.
- Do not copy or reuse lines from the examples; use their style as inspiration only.
"
    ));

    let examples = corpus.filter(length, language.as_str(), tag);
    if !examples.is_empty() {
        prompt.push_str(&format!(
            "
== Writing Examples ==
(Real posts by {persona}. Match this tone.)"
        ));
        for (i, post) in examples.iter().take(MAX_EXAMPLES).enumerate() {
            prompt.push_str(&format!("\n\nExample {}:\n\n{}", i + 1, post.text));
        }
    }

    prompt
}

/// Builds prompts against a fixed corpus and style.
pub struct PromptBuilder<'a> {
    corpus: &'a Corpus,
    style: PromptStyle,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(corpus: &'a Corpus, style: PromptStyle) -> Self {
        Self { corpus, style }
    }

    pub fn build(&self, length: LengthBucket, language: Language, tag: &str) -> String {
        build_prompt(self.corpus, length, language, tag, &self.style)
    }

    pub fn style(&self) -> &PromptStyle {
        &self.style
    }
}
