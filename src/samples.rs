use rand::seq::SliceRandom;

/// Demo inputs covering each sentiment.
pub const SAMPLE_TEXTS: [&str; 3] = [
    "This is absolutely amazing! I love it so much! Best purchase ever!",
    "It's okay, nothing special. Does what it's supposed to do.",
    "Terrible experience. Would not recommend to anyone. Very disappointed.",
];

pub fn random_sample() -> &'static str {
    SAMPLE_TEXTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(SAMPLE_TEXTS[0])
}
