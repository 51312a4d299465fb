//! # Text Generation
//!
//! Narrative text shown next to search results and song details. The
//! [`TextGenerator`] trait is the seam; [`TemplateGenerator`] fills canned
//! templates and attaches decorative source citations. Nothing produced here
//! feeds back into song filtering.

use async_trait::async_trait;

use crate::{
    management::Latency,
    types::{GeneratedText, GroundingChunk},
};

pub const DEFAULT_MODEL: &str = "template-v1";

pub const CHAT_SYSTEM_INSTRUCTION: &str =
    "You are a helpful music expert. Provide concise and informative answers.";

const DESCRIBE_PREFIX: &str = "describe song:";
const REASON_PREFIX: &str = "suggest reason:";
const INTERPRET_PREFIX: &str = "interpret query:";

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model label, for display only.
    fn model(&self) -> &str;

    async fn generate(&self, prompt: &str, use_search: bool) -> GeneratedText;

    async fn chat(&self, message: &str) -> GeneratedText;
}

/// Deterministic template-based generator.
#[derive(Debug, Clone)]
pub struct TemplateGenerator {
    model: String,
    latency: Latency,
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

impl TemplateGenerator {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            latency: Latency::None,
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    fn render(&self, prompt: &str, use_search: bool) -> GeneratedText {
        let lowered = prompt.to_lowercase();

        if let Some(song_info) = lowered.strip_prefix(DESCRIBE_PREFIX) {
            return plain(format!(
                "This is a generated description for the song: {}. It likely features intricate \
                 melodies and a captivating rhythm, perfectly embodying its genre. The \
                 instrumentation might include [instrument 1] and [instrument 2], creating a \
                 unique soundscape. Its mood is often described as [mood].",
                song_info.trim()
            ));
        }

        if let Some(reason_info) = lowered.strip_prefix(REASON_PREFIX) {
            return plain(format!(
                "This song, {}, is recommended because it aligns with your interest in music \
                 that is both thought-provoking and sonically rich. Its theoretical \
                 underpinnings showcase a masterful use of [music theory concept].",
                reason_info.trim()
            ));
        }

        if let Some(query) = lowered.strip_prefix(INTERPRET_PREFIX) {
            let query = query.trim();
            let mut sources = Vec::new();
            if query.contains("recent news") || query.contains("olympics 2024") {
                sources.push(chunk(
                    "https://mock-olympics-news.com/results",
                    "Mock Olympics 2024 Results",
                ));
                sources.push(chunk(
                    "https://mock-sports-analysis.com/paris2024",
                    "Analysis of Paris 2024 Medalists",
                ));
            }
            return GeneratedText {
                text: format!(
                    "Interpreted query: '{}'. The system understands you are looking for songs \
                     with characteristics such as [characteristic 1] and [characteristic 2].",
                    query
                ),
                sources,
            };
        }

        if use_search {
            return GeneratedText {
                text: format!(
                    "Based on a search for '{}', here's some information: [search result snippet].",
                    prompt
                ),
                sources: vec![
                    chunk("https://mock-search-result1.com", "Mock Search Result 1"),
                    chunk("https://mock-search-result2.com/page", "Detailed Mock Info Page 2"),
                ],
            };
        }

        plain("This is a generic generated response.".to_string())
    }
}

#[async_trait]
impl TextGenerator for TemplateGenerator {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str, use_search: bool) -> GeneratedText {
        self.latency.pause_between(300, 800).await;
        self.render(prompt, use_search)
    }

    async fn chat(&self, message: &str) -> GeneratedText {
        self.latency.pause_between(200, 500).await;
        plain(format!(
            "Chat reply to \"{}\". System instruction was: \"{}\"",
            message, CHAT_SYSTEM_INSTRUCTION
        ))
    }
}

pub async fn describe_song(
    generator: &dyn TextGenerator,
    song_title: &str,
    artist_names: &str,
) -> GeneratedText {
    generator
        .generate(
            &format!(
                "Describe song: {} by {}. Focus on musical elements, mood, and instrumentation.",
                song_title, artist_names
            ),
            false,
        )
        .await
}

pub async fn recommendation_reason(
    generator: &dyn TextGenerator,
    song_title: &str,
    query_context: &str,
) -> GeneratedText {
    generator
        .generate(
            &format!(
                "Suggest reason: {} based on this context: {}?",
                song_title, query_context
            ),
            false,
        )
        .await
}

pub async fn interpret_query(generator: &dyn TextGenerator, query: &str) -> GeneratedText {
    generator
        .generate(&format!("Interpret query: {}", query), false)
        .await
}

fn plain(text: String) -> GeneratedText {
    GeneratedText {
        text,
        sources: Vec::new(),
    }
}

fn chunk(uri: &str, title: &str) -> GroundingChunk {
    GroundingChunk {
        uri: uri.to_string(),
        title: title.to_string(),
    }
}
