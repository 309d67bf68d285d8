//! Affiliate referral codes.
//!
//! A referral code is the uppercase initials of the affiliate's name, the year they joined
//! and three random digits, e.g. `JB2026417` for Jordan Blake.

use rand::Rng;

/// Build a referral code from a name, a year and a random source.
pub fn referral_code<R: Rng + ?Sized>(name: &str, year: i32, rng: &mut R) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    format!("{}{}{:03}", initials, year, rng.random_range(0..1000))
}
