//! Motivational phrase lookup keyed by day of month.
//!
//! # Invariants
//! - The table holds exactly [`PHRASE_COUNT`] phrases, one per day 1..=30.
//! - Lookup is total: unparsable or out-of-range days yield
//!   [`FALLBACK_PHRASE`].

/// Returned when the day cannot be derived or has no phrase.
pub const FALLBACK_PHRASE: &str = "Stay positive and keep going!";

/// Number of phrases in the table.
pub const PHRASE_COUNT: usize = 30;

/// Shown on the home screen above the navigation buttons.
pub const HOME_PHRASE: &str = MOTIVATIONAL_PHRASES[0];

/// Ordered phrase table; index `day - 1`.
pub const MOTIVATIONAL_PHRASES: [&str; PHRASE_COUNT] = [
    "Every day is a new beginning. Take a deep breath and start again.",
    "You are stronger than you think.",
    "Don't give up; great things take time.",
    "Believe in yourself and your abilities.",
    "Small steps lead to big victories.",
    "Today is the best day for new beginnings.",
    "Be grateful for every moment.",
    "Mistakes are lessons, not failures.",
    "Focus on what you can change.",
    "You are capable of more than you imagine.",
    "Keep pushing forward, no matter what.",
    "Stay positive, work hard, make it happen.",
    "Your potential is endless.",
    "Success is the sum of small efforts repeated daily.",
    "Dream it. Wish it. Do it.",
    "Believe you can and you're halfway there.",
    "Stay patient and trust your journey.",
    "Progress, not perfection.",
    "You are your only limit.",
    "Push yourself because no one else is going to do it for you.",
    "The harder you work for something, the greater you'll feel when you achieve it.",
    "Don't watch the clock; do what it does. Keep going.",
    "Great things never come from comfort zones.",
    "Dream bigger. Do bigger.",
    "Don't stop until you're proud.",
    "Work hard in silence, let success be your noise.",
    "The key to success is to focus on goals, not obstacles.",
    "Believe in your dreams and they may come true.",
    "Success doesn't just find you. You have to go out and get it.",
    "Stay focused and never give up.",
];

/// Extracts the 1-based day from the last two characters of `date`.
///
/// `"2025-07-03"` yields `Some(3)`. Returns `None` when those characters are
/// not a number.
pub fn day_of_month(date: &str) -> Option<u32> {
    let mut tail = date.chars().rev().take(2).collect::<Vec<_>>();
    tail.reverse();
    tail.into_iter().collect::<String>().parse::<u32>().ok()
}

/// Returns the phrase for the day encoded in `date`.
pub fn phrase_for(date: &str) -> &'static str {
    day_of_month(date)
        .and_then(|day| usize::try_from(day).ok())
        .and_then(|day| day.checked_sub(1))
        .and_then(|index| MOTIVATIONAL_PHRASES.get(index).copied())
        .unwrap_or(FALLBACK_PHRASE)
}
