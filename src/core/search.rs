use std::rc::Rc;

use crate::models::Listing;
use crate::services::cache::SearchCache;

pub const DEFAULT_THRESHOLD: f64 = 0.3;
pub const DEFAULT_DISTANCE: u32 = 100;
pub const DEFAULT_LOCATION: usize = 0;

/// Tuning for approximate title matching
///
/// A title is a hit when `errors / pattern_len + |start - location| / distance`
/// is at most `threshold`. A threshold of 0.0 demands a perfect match at
/// `location`; 1.0 matches almost anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    pub threshold: f64,
    pub distance: u32,
    pub location: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            distance: DEFAULT_DISTANCE,
            location: DEFAULT_LOCATION,
        }
    }
}

/// A title that passed the threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    /// Position of the listing in the indexed collection
    pub index: usize,
    /// Length-normalised score, lower is better
    pub score: f64,
}

/// Raw match score of `pattern` against the best-aligned region of `text`
///
/// Every start offset in `text` is tried: the pattern is aligned against the
/// text from that offset with the cheapest end, and the edit cost is weighed
/// with how far the offset lies from `options.location`. The lowest combined
/// score wins. Both inputs are expected lowercased already.
pub fn match_score(pattern: &[char], text: &[char], options: &SearchOptions) -> f64 {
    let m = pattern.len();
    if m == 0 {
        return 0.0;
    }

    let mut column = vec![0; m + 1];
    let mut best = f64::INFINITY;

    for start in 0..=text.len() {
        // a perfect alignment here could not beat what we have
        if alignment_score(0, start, m, options) >= best {
            continue;
        }
        let errors = min_prefix_distance(pattern, &text[start..], &mut column);
        best = best.min(alignment_score(errors, start, m, options));
    }

    best
}

/// Fewest edits turning `pattern` into some prefix of `text`
fn min_prefix_distance(pattern: &[char], text: &[char], column: &mut [usize]) -> usize {
    let m = pattern.len();
    for (i, cell) in column.iter_mut().enumerate() {
        *cell = i;
    }

    let mut best = column[m];
    for (j, &ch) in text.iter().enumerate() {
        if best == 0 {
            break;
        }
        let mut diagonal = column[0];
        column[0] = j + 1;
        for i in 1..=m {
            let left = column[i];
            let substitution = (pattern[i - 1] != ch) as usize;
            column[i] = (diagonal + substitution)
                .min(left + 1)
                .min(column[i - 1] + 1);
            diagonal = left;
        }
        best = best.min(column[m]);
    }

    best
}

#[inline]
fn alignment_score(errors: usize, start: usize, pattern_len: usize, options: &SearchOptions) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    let proximity = start.abs_diff(options.location);

    if options.distance == 0 {
        return if proximity > 0 { 1.0 } else { accuracy };
    }

    accuracy + proximity as f64 / options.distance as f64
}

/// Longer titles get a softer score so short exact-ish titles rank first
#[inline]
fn field_norm(text: &str) -> f64 {
    let tokens = text.split(' ').filter(|t| !t.is_empty()).count().max(1);
    let norm = 1.0 / (tokens as f64).sqrt();
    (norm * 1000.0).round() / 1000.0
}

#[inline]
fn normalized_score(raw: f64, norm: f64) -> f64 {
    let base = if raw == 0.0 { f64::EPSILON } else { raw };
    base.powf(norm)
}

#[derive(Debug)]
struct IndexedTitle {
    chars: Vec<char>,
    norm: f64,
}

/// Fuzzy search index over listing titles
///
/// Built once per catalogue. Results are memoised per query string.
pub struct FuzzyIndex {
    entries: Vec<IndexedTitle>,
    options: SearchOptions,
    cache: SearchCache,
}

impl FuzzyIndex {
    pub fn new(listings: &[Listing], options: SearchOptions, cache_size: usize) -> Self {
        Self::from_titles(listings.iter().map(|l| l.title.as_str()), options, cache_size)
    }

    pub fn from_titles<I, S>(titles: I, options: SearchOptions, cache_size: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: Vec<IndexedTitle> = titles
            .into_iter()
            .map(|title| {
                let title = title.as_ref();
                IndexedTitle {
                    chars: title.to_lowercase().chars().collect(),
                    norm: field_norm(title),
                }
            })
            .collect();

        tracing::debug!("Indexed {} titles for fuzzy search", entries.len());

        Self {
            entries,
            options,
            cache: SearchCache::new(cache_size),
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hits for `query` in relevance order, ties kept in collection order
    pub fn search(&self, query: &str) -> Rc<[SearchHit]> {
        if let Some(hits) = self.cache.get(query) {
            return hits;
        }

        let hits: Rc<[SearchHit]> = self.scan(query).into();
        self.cache.put(query, Rc::clone(&hits));
        hits
    }

    fn scan(&self, query: &str) -> Vec<SearchHit> {
        let pattern: Vec<char> = query.to_lowercase().chars().collect();

        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let raw = match_score(&pattern, &entry.chars, &self.options);
                (raw <= self.options.threshold).then(|| SearchHit {
                    index,
                    score: normalized_score(raw, entry.norm),
                })
            })
            .collect();

        // Stable, so equal scores stay in collection order
        hits.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Fuzzy search {:?}: {} of {} titles within threshold {}",
            query,
            hits.len(),
            self.entries.len(),
            self.options.threshold
        );

        hits
    }
}

impl std::fmt::Debug for FuzzyIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzyIndex")
            .field("entries", &self.entries.len())
            .field("options", &self.options)
            .finish()
    }
}
