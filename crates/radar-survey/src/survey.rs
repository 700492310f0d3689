// File: crates/radar-survey/src/survey.rs
// Summary: Interactive persona survey: random category pick, validated ratings, profile summary.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use rand::Rng;
use radar_core::metrics::{RATING_MAX, RATING_MIN};
use radar_core::MetricSet;
use tracing::debug;

pub const ANIMALS: [&str; 10] =
    ["Lion", "Eagle", "Dolphin", "Wolf", "Elephant", "Giraffe", "Penguin", "Bear", "Fox", "Owl"];

/// How many animals one survey asks about.
pub const PICK_COUNT: usize = 5;

/// Source of uniform indices; injected so selection can be replayed in tests.
pub trait RandomSource {
    /// Uniform index in `0..bound`. Contract: `bound > 0`.
    fn below(&mut self, bound: usize) -> usize;
}

/// Thread-local RNG from `rand`.
pub struct ThreadRandom(rand::rngs::ThreadRng);

impl ThreadRandom {
    pub fn new() -> Self { Self(rand::rng()) }
}

impl Default for ThreadRandom {
    fn default() -> Self { Self::new() }
}

impl RandomSource for ThreadRandom {
    fn below(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

/// Pick `count` distinct entries of `pool` in random order (partial Fisher-Yates).
/// `count` is clamped to the pool size.
pub fn pick_categories<R: RandomSource + ?Sized>(pool: &[&str], count: usize, rng: &mut R) -> Vec<String> {
    let mut items: Vec<&str> = pool.to_vec();
    let count = count.min(items.len());
    for i in 0..count {
        let j = i + rng.below(items.len() - i);
        items.swap(i, j);
    }
    items.into_iter().take(count).map(str::to_owned).collect()
}

/// Parse a rating; only whole numbers on the survey scale are accepted.
pub fn parse_rating(input: &str) -> Option<u8> {
    let n: i64 = input.trim().parse().ok()?;
    if (RATING_MIN as i64..=RATING_MAX as i64).contains(&n) {
        Some(n as u8)
    } else {
        None
    }
}

/// Bar of `█` blocks, one per rating point. Clamped to the scale; NaN draws nothing.
pub fn rating_bar(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    "█".repeat(value.clamp(0.0, RATING_MAX as f64).round() as usize)
}

/// Ratings collected for one person. Both sets share category order; `interests` may be empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Profile {
    pub name: String,
    pub skills: MetricSet,
    pub interests: MetricSet,
}

/// `Name:` line followed by one line per category:
/// `<category>: skill <n>/5 <bar>`, plus ` | interest <n>/5 <bar>` when an interest was rated.
pub fn profile_summary(profile: &Profile) -> Vec<String> {
    let mut lines = vec![format!("Name: {}", profile.name)];
    for m in &profile.skills {
        let mut line = format!("{}: skill {}/{} {}", m.name, m.value, RATING_MAX, rating_bar(m.value));
        if let Some(interest) = profile.interests.get(&m.name) {
            line.push_str(&format!(" | interest {}/{} {}", interest, RATING_MAX, rating_bar(interest)));
        }
        lines.push(line);
    }
    lines
}

/// Prompt/answer loop over any line-oriented input and output.
pub struct Survey<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Survey<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` (no newline) and read one trimmed answer line.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading answer")?;
        if read == 0 {
            bail!("input closed while waiting for: {}", question.trim_end());
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer is a rating on the scale.
    pub fn ask_rating(&mut self, category: &str, metric: &str) -> Result<u8> {
        let question = format!("{category} {metric} ({RATING_MIN}=Low, {RATING_MAX}=High): ");
        loop {
            let answer = self.ask(&question)?;
            match parse_rating(&answer) {
                Some(rating) => return Ok(rating),
                None => {
                    debug!(%category, %answer, "rejected rating");
                    writeln!(self.output, "Please enter a number between {RATING_MIN} and {RATING_MAX}.")?;
                }
            }
        }
    }

    /// Full survey: name, then skill and interest ratings for each randomly picked animal.
    pub fn run<G: RandomSource + ?Sized>(&mut self, rng: &mut G) -> Result<Profile> {
        let name = self.ask("What is your name? ")?;
        let animals = pick_categories(&ANIMALS, PICK_COUNT, rng);

        writeln!(
            self.output,
            "\nHello, {name}! Please rate your skill level for each animal ({RATING_MIN}-{RATING_MAX}):\n"
        )?;
        let skills = self.rate_all(&animals, "skill")?;

        writeln!(
            self.output,
            "\nNow rate your interest level for each animal ({RATING_MIN}-{RATING_MAX}):\n"
        )?;
        let interests = self.rate_all(&animals, "interest")?;

        Ok(Profile { name, skills, interests })
    }

    fn rate_all(&mut self, categories: &[String], metric: &str) -> Result<MetricSet> {
        let mut ratings = MetricSet::new();
        for category in categories {
            let rating = self.ask_rating(category, metric)?;
            ratings.insert(category.as_str(), rating)?;
        }
        Ok(ratings)
    }
}
