use rand::Rng;
use rand::seq::IndexedRandom;

/// The one-word prompts a session can start with.
pub const PROMPTS: [&str; 50] = [
    "Dream",
    "Journey",
    "Hope",
    "Memory",
    "Change",
    "Discovery",
    "Adventure",
    "Wonder",
    "Courage",
    "Peace",
    "Growth",
    "Freedom",
    "Mystery",
    "Strength",
    "Joy",
    "Challenge",
    "Harmony",
    "Passion",
    "Vision",
    "Trust",
    "Resilience",
    "Balance",
    "Clarity",
    "Purpose",
    "Gratitude",
    "Transformation",
    "Serenity",
    "Innovation",
    "Connection",
    "Reflection",
    "Inspiration",
    "Wisdom",
    "Creativity",
    "Energy",
    "Focus",
    "Curiosity",
    "Simplicity",
    "Abundance",
    "Patience",
    "Love",
    "Nature",
    "Success",
    "Beauty",
    "Truth",
    "Spirit",
    "Opportunity",
    "Intention",
    "Kindness",
    "Progress",
    "Potential",
];

/// Prompt used when the list offers nothing to choose from.
pub const FALLBACK_PROMPT: &str = "Journey";

/// Pick a prompt uniformly at random.
pub fn random_prompt<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PROMPTS.choose(rng).copied().unwrap_or(FALLBACK_PROMPT)
}
