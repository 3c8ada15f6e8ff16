//! Synthetic book data for seeding and tests.
//!
//! A [`BookGenerator`] is a finite, forward-only producer: once drained it
//! stays empty. Ask the repository (or [`BookGenerator::new`]) for a fresh
//! one to start over.

use crate::models::book::NewBook;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

pub const MAX_TITLE_CHARS: usize = 20;
pub const MAX_AUTHORS: usize = 3;
pub const PAGES_RANGE: std::ops::RangeInclusive<i64> = 0..=1000;
pub const YEAR_RANGE: std::ops::RangeInclusive<i64> = 1900..=2021;
pub const MAX_PRICE_CENTS: i64 = 1_000_000;
pub const DISCOUNTS: [Option<i64>; 10] = [
    None,
    Some(10),
    Some(20),
    Some(30),
    Some(40),
    Some(50),
    Some(60),
    Some(70),
    Some(80),
    Some(90),
];

const TITLE_WORDS: &[&str] = &[
    "river", "silent", "winter", "garden", "letters", "shadow", "north", "glass", "harbor",
    "moon", "orchard", "stone", "distant", "echo", "paper", "lantern", "hollow", "autumn",
    "salt", "city", "quiet", "ember", "tide", "forest", "bridge", "violet", "storm", "map",
];

const FIRST_NAMES: &[&str] = &[
    "Anna", "Boris", "Clara", "Dmitri", "Elena", "Fyodor", "Galina", "Igor", "Irina", "Katya",
    "Lev", "Maria", "Nikolai", "Olga", "Pavel", "Sofia", "Viktor", "Yulia",
];

const LAST_NAMES: &[&str] = &[
    "Antonova", "Belov", "Chekhova", "Durov", "Egorova", "Fomin", "Gromova", "Ivanov", "Kuznetsov",
    "Lebedeva", "Morozov", "Novikova", "Orlov", "Petrova", "Sokolov", "Volkova", "Zaitsev",
];

pub struct BookGenerator {
    remaining: usize,
    rng: StdRng,
    issued_isbns: HashSet<String>,
}

impl BookGenerator {
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, StdRng::from_entropy())
    }

    /// Reproducible sequence: the same seed and count yield the same books.
    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self::with_rng(count, StdRng::seed_from_u64(seed))
    }

    fn with_rng(count: usize, rng: StdRng) -> Self {
        Self {
            remaining: count,
            rng,
            issued_isbns: HashSet::new(),
        }
    }

    fn title(&mut self) -> String {
        let budget = MAX_TITLE_CHARS - 1; // trailing '.'
        let mut title = String::new();

        loop {
            let word = *TITLE_WORDS.choose(&mut self.rng).unwrap_or(&"book");
            let needed = if title.is_empty() { word.len() } else { word.len() + 1 };
            if title.len() + needed > budget {
                break;
            }
            if !title.is_empty() {
                title.push(' ');
            }
            title.push_str(word);
            if self.rng.gen_bool(0.35) {
                break;
            }
        }

        let mut chars = title.chars();
        let mut out = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        out.push('.');
        out
    }

    fn authors(&mut self) -> String {
        let count = self.rng.gen_range(1..=MAX_AUTHORS);
        (0..count)
            .map(|_| {
                let first = FIRST_NAMES.choose(&mut self.rng).unwrap_or(&"Anna");
                let last = LAST_NAMES.choose(&mut self.rng).unwrap_or(&"Ivanov");
                format!("{first} {last}")
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn isbn13(&mut self) -> String {
        loop {
            let candidate = random_isbn13(&mut self.rng);
            if self.issued_isbns.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

impl Iterator for BookGenerator {
    type Item = NewBook;

    fn next(&mut self) -> Option<NewBook> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let title = self.title();
        let authors = self.authors();
        let isbn13 = self.isbn13();
        let pages = self.rng.gen_range(PAGES_RANGE);
        let year = self.rng.gen_range(YEAR_RANGE);
        let price = self.rng.gen_range(0..=MAX_PRICE_CENTS) as f64 / 100.0;
        let discount = *DISCOUNTS.choose(&mut self.rng).unwrap_or(&None);

        Some(NewBook {
            title,
            authors,
            isbn13,
            pages,
            year,
            price,
            discount,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BookGenerator {}

/// Hyphenated ISBN-13 (`978-5-1234-5678-9`) with a valid check digit.
fn random_isbn13<R: Rng>(rng: &mut R) -> String {
    let prefix: u32 = if rng.gen_bool(0.5) { 978 } else { 979 };
    let group: u32 = rng.gen_range(0..=9);
    let registrant_len = rng.gen_range(2..=6);
    let body: Vec<u32> = (0..8).map(|_| rng.gen_range(0..=9)).collect();

    let mut digits: Vec<u32> = prefix
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();
    digits.push(group);
    digits.extend(&body);
    let check = isbn13_check_digit(&digits);

    let (registrant, publication) = body.split_at(registrant_len);
    let join = |part: &[u32]| part.iter().map(u32::to_string).collect::<String>();
    format!(
        "{prefix}-{group}-{}-{}-{check}",
        join(registrant),
        join(publication)
    )
}

/// Check digit over the first twelve digits (weights 1, 3, 1, 3, ...).
pub fn isbn13_check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .take(12)
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    (10 - sum % 10) % 10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn isbn_digits(isbn: &str) -> Vec<u32> {
        isbn.chars().filter_map(|c| c.to_digit(10)).collect()
    }

    #[test]
    fn yields_exactly_count_books() {
        assert_eq!(BookGenerator::with_seed(25, 1).count(), 25);
        assert_eq!(BookGenerator::with_seed(0, 1).count(), 0);
    }

    #[test]
    fn values_stay_within_ranges() {
        for book in BookGenerator::with_seed(500, 7) {
            assert!(book.title.chars().count() <= MAX_TITLE_CHARS, "{}", book.title);
            assert!(book.title.ends_with('.'));

            let authors = book.authors.split(", ").count();
            assert!((1..=MAX_AUTHORS).contains(&authors));

            assert!(PAGES_RANGE.contains(&book.pages));
            assert!(YEAR_RANGE.contains(&book.year));
            assert!((0.0..=10_000.0).contains(&book.price));
            assert!(((book.price * 100.0).round() - book.price * 100.0).abs() < 1e-6);
            assert!(DISCOUNTS.contains(&book.discount));
        }
    }

    #[test]
    fn isbns_are_valid_and_unique() {
        let books: Vec<_> = BookGenerator::with_seed(1000, 11).collect();
        let mut seen = HashSet::new();

        for book in &books {
            let digits = isbn_digits(&book.isbn13);
            assert_eq!(digits.len(), 13, "{}", book.isbn13);
            assert!(book.isbn13.starts_with("978-") || book.isbn13.starts_with("979-"));
            assert_eq!(isbn13_check_digit(&digits), digits[12]);
            assert!(seen.insert(book.isbn13.clone()));
        }
    }

    #[test]
    fn known_check_digit() {
        assert_eq!(isbn13_check_digit(&isbn_digits("978000000000")), 2);
        assert_eq!(isbn13_check_digit(&isbn_digits("978030640615")), 7);
    }

    #[test]
    fn huge_count_is_produced_lazily() {
        let books: Vec<_> = BookGenerator::with_seed(usize::MAX / 2, 1).take(2).collect();
        assert_eq!(books.len(), 2);

        let generator = BookGenerator::with_seed(usize::MAX, 1);
        assert_eq!(generator.len(), usize::MAX);
        assert_eq!(generator.take(2).count(), 2);
    }

    #[test]
    fn drained_generator_stays_empty() {
        let mut generator = BookGenerator::with_seed(2, 3);
        assert_eq!(generator.len(), 2);
        assert!(generator.next().is_some());
        assert!(generator.next().is_some());
        assert!(generator.next().is_none());
        assert!(generator.next().is_none());
    }

    #[test]
    fn same_seed_same_books() {
        let a: Vec<_> = BookGenerator::with_seed(10, 42).collect();
        let b: Vec<_> = BookGenerator::with_seed(10, 42).collect();
        assert_eq!(a, b);
    }
}
