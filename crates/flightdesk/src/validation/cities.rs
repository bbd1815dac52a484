//! Recognized-city registry.
//!
//! Holds the closed set of city names accepted as departure or destination,
//! normalizes user input against it, and offers a did-you-mean suggestion for
//! near misses.

use tracing::trace;

/// Cities recognized when no list is configured.
pub const DEFAULT_CITIES: &[&str] = &[
    "Cairo", "London", "New York", "Tokyo", "Paris", "Berlin", "Dubai", "Rome", "Beijing",
    "Toronto",
];

/// Minimum normalized Levenshtein similarity for a suggestion.
pub const DEFAULT_SUGGESTION_CUTOFF: f64 = 0.6;

/// An immutable set of recognized city names.
///
/// Names are stored in their normalized form (see [`normalize`]) and kept in
/// the order given; suggestion ties go to the earlier name.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRegistry {
    names: Vec<String>,
    cutoff: f64,
}

impl Default for CityRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_CITIES.iter().copied())
    }
}

impl CityRegistry {
    /// Build a registry from a list of names.
    ///
    /// Each name is normalized on the way in, so `"new york"` registers as
    /// `"New York"`. Duplicates after normalization are dropped.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for name in names {
            let name = normalize(name.as_ref());
            if !name.is_empty() && !normalized.contains(&name) {
                normalized.push(name);
            }
        }
        Self {
            names: normalized,
            cutoff: DEFAULT_SUGGESTION_CUTOFF,
        }
    }

    /// Set the similarity cutoff for suggestions, clamped to `0.0..=1.0`.
    ///
    /// NaN falls back to [`DEFAULT_SUGGESTION_CUTOFF`].
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = if cutoff.is_nan() {
            DEFAULT_SUGGESTION_CUTOFF
        } else {
            cutoff.clamp(0.0, 1.0)
        };
        self
    }

    /// The recognized names, in registry order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The similarity cutoff used for suggestions.
    #[must_use]
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Whether `name` is an exact member. No normalization is applied.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|known| known == name)
    }

    /// Normalize `input` and look it up.
    ///
    /// Returns the canonical name on a hit. On a miss returns the best
    /// suggestion, if any name scores at or above the cutoff.
    ///
    /// # Errors
    ///
    /// Returns `Err(suggestion)` when the normalized input is not recognized.
    pub fn resolve(&self, input: &str) -> std::result::Result<&str, Option<&str>> {
        let normalized = normalize(input);
        match self.names.iter().find(|known| **known == normalized) {
            Some(known) => Ok(known.as_str()),
            None => Err(self.suggest(&normalized)),
        }
    }

    /// Find the closest recognized name to `candidate`.
    ///
    /// Comparison is case-sensitive; pass an already-normalized candidate.
    #[must_use]
    pub fn suggest(&self, candidate: &str) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for known in &self.names {
            let score = strsim::normalized_levenshtein(candidate, known);
            trace!(candidate, known = known.as_str(), score, "city similarity");
            if score < self.cutoff {
                continue;
            }
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((known.as_str(), score));
            }
        }
        best.map(|(name, _)| name)
    }
}

/// Trim and title-case a city name.
///
/// A letter is upper-cased when the previous character is not a letter and
/// lower-cased otherwise, so `"  new YORK "` becomes `"New York"`.
#[must_use]
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;
    for ch in input.trim().chars() {
        if is_letter(ch) {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}

/// Whether `ch` counts as a letter in names and city names.
///
/// Letter-like numerals such as `Ⅷ` are alphabetic to Unicode but are not
/// letters here.
#[must_use]
pub fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() && !ch.is_numeric()
}
