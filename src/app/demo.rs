use crate::app::conversation::{ChatMessage, Conversation, Role};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

const USER_SENTENCES: &[&str] = &[
    "Can you explain how the scheduler picks the next task?",
    "What happens if the model runs out of context?",
    "Show me a shorter version of that.",
    "Why does the second approach allocate less?",
    "Could this be done without a lock?",
    "Thanks, that makes sense.",
    "Try it again with a smaller batch size.",
];

const ASSISTANT_SENTENCES: &[&str] = &[
    "The scheduler keeps a ready queue ordered by deadline and always pops the earliest one.",
    "When the context fills up, the oldest turns are summarised and the summary replaces them.",
    "Here is the short version: keep one owner, borrow everywhere else.",
    "The second approach reuses the buffer between iterations instead of allocating per item.",
    "A lock-free version is possible with an atomic swap, but the ordering rules get subtle.",
    "Running locally means the first token takes a moment while the weights are paged in.",
    "With a batch size of eight the throughput drops slightly but latency is much steadier.",
    "Each chunk is measured before it is shown, so the scroll position can be corrected.",
];

/// Synthetic conversation with `count` alternating messages of varying length. Each message
/// starts with `#<index>` so it can be located on screen.
pub fn generate_conversation(
    id: impl Into<String>,
    title: impl Into<String>,
    count: usize,
    seed: u64,
) -> Conversation {
    let mut rng = StdRng::seed_from_u64(seed);

    let messages = (0..count)
        .map(|index| {
            let (role, pool, max_sentences) = if index % 2 == 0 {
                (Role::User, USER_SENTENCES, 2)
            } else {
                (Role::Assistant, ASSISTANT_SENTENCES, 5)
            };

            let sentences = rng.gen_range(1..=max_sentences);
            let body = (0..sentences)
                .filter_map(|_| pool.choose(&mut rng).copied())
                .collect::<Vec<_>>()
                .join(" ");

            ChatMessage::new(role, format!("#{} {}", index, body))
        })
        .collect();

    Conversation::new(id, title).with_messages(messages)
}

/// The conversations shown when no transcript is given: one long enough to be windowed, one
/// short one, and one just past the default threshold.
pub fn demo_conversations(long_count: usize, seed: u64) -> Vec<Conversation> {
    vec![
        generate_conversation("demo-long", "Long session", long_count, seed),
        generate_conversation("demo-short", "Quick question", 12, seed.wrapping_add(1)),
        generate_conversation("demo-medium", "Follow-up", 64, seed.wrapping_add(2)),
    ]
}
