//! Static Trend Dataset
//!
//! Built-in "Viral Trends" records. Always available, never fails; the
//! acquisition orchestrator serves it for the trend category and prepends it
//! for the "All" category.

use std::sync::{Arc, OnceLock};

use prompt_feed_core::{Category, FacetValue, Prompt};

type TrendRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
);

// (id, prompt text, target model, platform, country, trending date, tags)
const TRENDS: &[TrendRow] = &[
    (
        "trend-tiktok-ghibli-selfie",
        "Turn this selfie into a hand-painted Studio Ghibli style frame with soft watercolor lighting and a cozy countryside background.",
        "Midjourney v6",
        "TikTok",
        "Global",
        "2024-03-01",
        &["anime", "portrait", "art"],
    ),
    (
        "trend-instagram-action-figure",
        "Create a boxed action figure of me with accessories that match my job, packaged in a retro toy blister pack with a bold title card.",
        "GPT-4o",
        "Instagram",
        "USA",
        "2024-04-12",
        &["toy", "portrait", "retro"],
    ),
    (
        "trend-x-bollywood-poster",
        "Design a 90s Bollywood movie poster starring the person in this photo, with dramatic typography and hand-drawn film grain.",
        "Imagen 3",
        "X",
        "India",
        "2024-02-18",
        &["poster", "retro", "bollywood"],
    ),
    (
        "trend-youtube-explainer-hook",
        "Write a 15-second hook for a YouTube Short that explains a surprising science fact, ending on a cliffhanger question.",
        "Gemini 2.5 Flash",
        "YouTube",
        "UK",
        "2024-05-06",
        &["script", "shorts", "science"],
    ),
    (
        "trend-tiktok-carnival-filter",
        "Restyle this dance clip still as a vibrant carnival parade scene with feathered costumes and confetti motion blur.",
        "Stable Diffusion XL",
        "TikTok",
        "Brazil",
        "2024-02-10",
        &["dance", "festival", "art"],
    ),
    (
        "trend-instagram-pixel-city",
        "Render my hometown skyline as an isometric pixel-art diorama at dusk, with tiny animated-looking pedestrians.",
        "DALL-E 3",
        "Instagram",
        "Japan",
        "2024-06-22",
        &["pixel-art", "city", "isometric"],
    ),
    (
        "trend-x-thread-summary",
        "Summarize today's top tech thread into five punchy tweets with one emoji each and a closing call to action.",
        "Claude 3.5 Sonnet",
        "X",
        "Global",
        "2024-07-03",
        &["thread", "summary", "tech"],
    ),
    (
        "trend-tiktok-batik-remix",
        "Blend a traditional batik pattern into a streetwear jacket design, shown on a model walking through a night market.",
        "Midjourney v6",
        "TikTok",
        "Indonesia",
        "2024-08-15",
        &["fashion", "pattern", "art"],
    ),
    (
        "trend-youtube-afrobeats-cover",
        "Write lyrics for an Afrobeats cover of a classic lullaby, with a catchy chorus and a call-and-response bridge.",
        "GPT-4o",
        "YouTube",
        "Nigeria",
        "2024-09-09",
        &["music", "lyrics"],
    ),
    (
        "trend-instagram-vintage-yearbook",
        "Transform this photo into a 1990s high school yearbook portrait with a mottled blue backdrop and soft studio flash.",
        "Imagen 3",
        "Instagram",
        "USA",
        "2024-10-01",
        &["portrait", "retro", "photo"],
    ),
];

static DATASET: OnceLock<Arc<[Prompt]>> = OnceLock::new();

/// The built-in trend records, materialised once per process.
pub fn trend_dataset() -> Arc<[Prompt]> {
    DATASET
        .get_or_init(|| TRENDS.iter().map(build_record).collect())
        .clone()
}

fn build_record(row: &TrendRow) -> Prompt {
    let (id, text, model, platform, country, date, tags) = *row;
    Prompt::new(id, text, Category::ViralTrends.as_str(), model)
        .with_trend(platform, country, date)
        .with_tags(tags.iter().copied())
}
