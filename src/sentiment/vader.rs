//! Rule-based VADER polarity model over an injected lexicon
//!
//! Implements the VADER valence rules (Hutto & Gilbert, 2014) as shipped
//! with NLTK: negation, booster and dampener words, ALL-CAPS emphasis
//! relative to the rest of the text, the "but" contrast shift, "least"
//! handling, "never so/this" intensification, special idioms and
//! exclamation/question mark emphasis. Results are rounded to 3 decimals
//! (neg/neu/pos) and 4 decimals (compound).
//!
//! Only the word valences come from the [`Lexicon`]. [`LexiconModel::vader`]
//! uses the bundled VADER lexicon; a small fixture lexicon gives
//! hand-checkable scores.

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::models::SentimentScore;
use crate::sentiment::scorer::PolarityModel;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

/// Empirically derived booster increment
const B_INCR: f64 = 0.293;

/// Empirically derived dampener decrement
const B_DECR: f64 = -0.293;

/// Increment for an ALL-CAPS word in mixed-case text
const C_INCR: f64 = 0.733;

/// Valence multiplier applied after a negation
const N_SCALAR: f64 = -0.74;

/// Normalization constant approximating the max expected sum
const ALPHA: f64 = 15.0;

/// Punctuation runs stripped from the edges of a word
const PUNC_LIST: &[&str] = &[
    ".", "!", "?", ",", ";", ":", "-", "'", "\"", "!!", "!!!", "??", "???", "?!?", "!?!", "?!?!",
    "!?!?", "?!?!?", "!?!?!",
];

static NEGATE: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt",
        "ain't", "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't",
        "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
        "don't", "hadn't", "hasn't", "haven't", "isn't", "mightn't", "mustn't",
        "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing", "nowhere",
        "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
        "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't",
        "without", "wont", "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
    ]
    .into_iter()
    .collect()
});

static BOOSTER_DICT: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let boosters = [
        "absolutely", "amazingly", "awfully", "completely", "considerably",
        "decidedly", "deeply", "effing", "enormously", "entirely", "especially",
        "exceptionally", "extremely", "fabulously", "flipping", "flippin",
        "fricking", "frickin", "frigging", "friggin", "fully", "fucking",
        "greatly", "hella", "highly", "hugely", "incredibly", "intensely",
        "majorly", "more", "most", "particularly", "purely", "quite", "really",
        "remarkably", "so", "substantially", "thoroughly", "totally",
        "tremendously", "uber", "unbelievably", "unusually", "utterly", "very",
    ];
    let dampeners = [
        "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof",
        "kind-of", "less", "little", "marginally", "occasionally", "partly",
        "scarcely", "slightly", "somewhat", "sort of", "sorta", "sortof", "sort-of",
    ];
    boosters
        .into_iter()
        .map(|w| (w, B_INCR))
        .chain(dampeners.into_iter().map(|w| (w, B_DECR)))
        .collect()
});

static SPECIAL_CASE_IDIOMS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    [
        ("the shit", 3.0),
        ("the bomb", 3.0),
        ("bad ass", 1.5),
        ("yeah right", -2.0),
        ("cut the mustard", 2.0),
        ("kiss of death", -1.5),
        ("hand to mouth", -2.0),
    ]
    .into_iter()
    .collect()
});

/// VADER rule engine bound to a lexicon
#[derive(Debug, Clone)]
pub struct LexiconModel {
    lexicon: Cow<'static, Lexicon>,
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::vader()
    }
}

impl LexiconModel {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Cow::Owned(lexicon),
        }
    }

    /// Model over the shared bundled VADER lexicon
    pub fn vader() -> Self {
        Self {
            lexicon: Cow::Borrowed(Lexicon::vader()),
        }
    }

    /// Build a model from a lexicon file in VADER layout
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(Lexicon::from_file(path)?))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn sentiment_valence(&self, words: &[String], lowered: &[String], i: usize, is_cap_diff: bool) -> f64 {
        let Some(mut valence) = self.lexicon.get(&lowered[i]) else {
            return 0.0;
        };

        if is_cap_diff && is_upper(&words[i]) {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            let prev = i.wrapping_sub(start_i + 1);
            if i > start_i && !self.lexicon.contains(&lowered[prev]) {
                let mut scalar = scalar_inc_dec(&words[prev], valence, is_cap_diff);
                if start_i == 1 && scalar != 0.0 {
                    scalar *= 0.95;
                }
                if start_i == 2 && scalar != 0.0 {
                    scalar *= 0.9;
                }
                valence += scalar;
                valence = never_check(valence, words, start_i, i);
                if start_i == 2 {
                    valence = special_idioms_check(valence, words, i);
                }
            }
        }

        self.least_check(valence, lowered, i)
    }

    fn least_check(&self, valence: f64, lowered: &[String], i: usize) -> f64 {
        if i > 1 && !self.lexicon.contains(&lowered[i - 1]) && lowered[i - 1] == "least" {
            if lowered[i - 2] != "at" && lowered[i - 2] != "very" {
                return valence * N_SCALAR;
            }
        } else if i > 0 && !self.lexicon.contains(&lowered[i - 1]) && lowered[i - 1] == "least" {
            return valence * N_SCALAR;
        }
        valence
    }
}

impl PolarityModel for LexiconModel {
    fn polarity_scores(&self, text: &str) -> SentimentScore {
        let words = words_and_emoticons(text);
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let is_cap_diff = allcap_differential(&words);

        let mut sentiments = Vec::with_capacity(words.len());
        for (idx, word) in words.iter().enumerate() {
            // Repeated tokens are scored in the context of their first occurrence
            let i = words[..idx].iter().position(|w| w == word).unwrap_or(idx);
            let kind_of = i + 1 < words.len() && lowered[i] == "kind" && lowered[i + 1] == "of";
            if kind_of || BOOSTER_DICT.contains_key(lowered[i].as_str()) {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&words, &lowered, i, is_cap_diff));
        }

        but_check(&lowered, &mut sentiments);
        score_valence(&sentiments, text)
    }
}

/// Split on whitespace, drop one-character tokens and strip a punctuation
/// run from either edge of a word
fn words_and_emoticons(text: &str) -> Vec<String> {
    let no_punc: String = text.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    let words_only: HashSet<&str> = no_punc
        .split_whitespace()
        .filter(|w| w.chars().count() > 1)
        .collect();

    text.split_whitespace()
        .filter(|we| we.chars().count() > 1)
        .map(|we| strip_edge_punctuation(we, &words_only).unwrap_or(we).to_string())
        .collect()
}

fn strip_edge_punctuation<'a>(token: &'a str, words_only: &HashSet<&str>) -> Option<&'a str> {
    // Trailing punctuation takes precedence over leading
    PUNC_LIST
        .iter()
        .filter_map(|p| token.strip_suffix(*p))
        .find(|w| words_only.contains(w))
        .or_else(|| {
            PUNC_LIST
                .iter()
                .filter_map(|p| token.strip_prefix(*p))
                .find(|w| words_only.contains(w))
        })
}

/// At least one cased character and no lowercase ones
fn is_upper(word: &str) -> bool {
    let mut cased = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// True when some but not all words are ALL CAPS
fn allcap_differential(words: &[String]) -> bool {
    let allcap_words = words.iter().filter(|w| is_upper(w)).count();
    let cap_differential = words.len() - allcap_words;
    cap_differential > 0 && cap_differential < words.len()
}

fn negated(word: &str) -> bool {
    let lower = word.to_lowercase();
    NEGATE.contains(lower.as_str()) || lower.contains("n't")
}

fn scalar_inc_dec(word: &str, valence: f64, is_cap_diff: bool) -> f64 {
    let Some(&base) = BOOSTER_DICT.get(word.to_lowercase().as_str()) else {
        return 0.0;
    };

    let mut scalar = if valence < 0.0 { -base } else { base };
    if is_cap_diff && is_upper(word) {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn never_check(valence: f64, words: &[String], start_i: usize, i: usize) -> f64 {
    let so_or_this = |w: &String| w == "so" || w == "this";

    match start_i {
        0 if negated(&words[i - 1]) => valence * N_SCALAR,
        1 if words[i - 2] == "never" && so_or_this(&words[i - 1]) => valence * 1.5,
        1 if negated(&words[i - 2]) => valence * N_SCALAR,
        2 if (words[i - 3] == "never" && so_or_this(&words[i - 2])) || so_or_this(&words[i - 1]) => {
            valence * 1.25
        }
        2 if negated(&words[i - 3]) => valence * N_SCALAR,
        _ => valence,
    }
}

/// Only reached for `i >= 3`
fn special_idioms_check(mut valence: f64, words: &[String], i: usize) -> f64 {
    let onezero = format!("{} {}", words[i - 1], words[i]);
    let twoonezero = format!("{} {} {}", words[i - 2], words[i - 1], words[i]);
    let twoone = format!("{} {}", words[i - 2], words[i - 1]);
    let threetwoone = format!("{} {} {}", words[i - 3], words[i - 2], words[i - 1]);
    let threetwo = format!("{} {}", words[i - 3], words[i - 2]);

    for seq in [&onezero, &twoonezero, &twoone, &threetwoone, &threetwo] {
        if let Some(&idiom) = SPECIAL_CASE_IDIOMS.get(seq.as_str()) {
            valence = idiom;
            break;
        }
    }

    if words.len() - 1 > i {
        let zeroone = format!("{} {}", words[i], words[i + 1]);
        if let Some(&idiom) = SPECIAL_CASE_IDIOMS.get(zeroone.as_str()) {
            valence = idiom;
        }
    }

    if words.len() - 1 > i + 1 {
        let zeroonetwo = format!("{} {} {}", words[i], words[i + 1], words[i + 2]);
        if let Some(&idiom) = SPECIAL_CASE_IDIOMS.get(zeroonetwo.as_str()) {
            valence = idiom;
        }
    }

    if BOOSTER_DICT.contains_key(threetwo.as_str()) || BOOSTER_DICT.contains_key(twoone.as_str()) {
        valence += B_DECR;
    }

    valence
}

/// Halve everything before the first "but", boost everything after it
fn but_check(lowered: &[String], sentiments: &mut [f64]) {
    let Some(bi) = lowered.iter().position(|w| w == "but") else {
        return;
    };

    for (idx, sentiment) in sentiments.iter_mut().enumerate() {
        if idx < bi {
            *sentiment *= 0.5;
        } else if idx > bi {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let ep_count = text.matches('!').count().min(4);
    let ep_amplifier = ep_count as f64 * 0.292;

    let qm_count = text.matches('?').count();
    let qm_amplifier = match qm_count {
        0 | 1 => 0.0,
        2..=3 => qm_count as f64 * 0.18,
        _ => 0.96,
    };

    ep_amplifier + qm_amplifier
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> SentimentScore {
    if sentiments.is_empty() {
        return SentimentScore::ZERO;
    }

    let punct_emph_amplifier = punctuation_emphasis(text);

    let mut sum_s: f64 = sentiments.iter().sum();
    if sum_s > 0.0 {
        sum_s += punct_emph_amplifier;
    } else if sum_s < 0.0 {
        sum_s -= punct_emph_amplifier;
    }
    let compound = normalize(sum_s);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0usize;
    for &sentiment in sentiments {
        if sentiment > 0.0 {
            pos_sum += sentiment + 1.0;
        }
        if sentiment < 0.0 {
            neg_sum += sentiment - 1.0;
        }
        if sentiment == 0.0 {
            neu_count += 1;
        }
    }

    if pos_sum > f64::abs(neg_sum) {
        pos_sum += punct_emph_amplifier;
    } else if pos_sum < f64::abs(neg_sum) {
        neg_sum -= punct_emph_amplifier;
    }

    let total = pos_sum + neg_sum.abs() + neu_count as f64;

    SentimentScore {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count as f64 / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_model() -> LexiconModel {
        LexiconModel::new(Lexicon::from_pairs([("good", 1.9), ("bad", -2.5)]))
    }

    fn assert_scores(text: &str, neg: f64, neu: f64, pos: f64, compound: f64) {
        let score = fixture_model().polarity_scores(text);
        let expected = [neg, neu, pos, compound];
        let actual = [score.neg, score.neu, score.pos, score.compound];
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(
                (a - e).abs() < 1e-9,
                "'{text}': expected {expected:?}, got {actual:?}"
            );
        }
    }

    #[test]
    fn test_single_positive_word() {
        assert_scores("good", 0.0, 0.0, 1.0, 0.4404);
    }

    #[test]
    fn test_negation_flips_valence() {
        assert_scores("not good", 0.706, 0.294, 0.0, -0.3412);
    }

    #[test]
    fn test_booster_increases_valence() {
        assert_scores("very good", 0.0, 0.238, 0.762, 0.4927);
    }

    #[test]
    fn test_but_shifts_weight() {
        assert_scores("good but bad", 0.617, 0.13, 0.253, -0.5859);
    }

    #[test]
    fn test_exclamation_emphasis() {
        assert_scores("good!", 0.0, 0.0, 1.0, 0.4926);
    }

    #[test]
    fn test_question_mark_emphasis() {
        assert_scores("good??", 0.0, 0.0, 1.0, 0.504);
    }

    #[test]
    fn test_all_caps_emphasis() {
        assert_scores("GOOD news", 0.0, 0.216, 0.784, 0.5622);
    }

    #[test]
    fn test_least_negates_unless_at_least() {
        assert_scores("least good", 0.706, 0.294, 0.0, -0.3412);
        assert_scores("at least good", 0.0, 0.408, 0.592, 0.4404);
    }

    #[test]
    fn test_never_so_intensifies() {
        assert_scores("never so good", 0.0, 0.318, 0.682, 0.6474);
        assert_scores("never this good", 0.0, 0.342, 0.658, 0.5927);
    }

    #[test]
    fn test_repeated_word_uses_first_occurrence_context() {
        assert_scores("not good news, good", 0.706, 0.294, 0.0, -0.5875);
    }

    #[test]
    fn test_exclamation_without_sentiment_stays_neutral() {
        assert_scores("news today!", 0.0, 1.0, 0.0, 0.0);
    }

    #[test]
    fn test_default_model_shares_bundled_lexicon() {
        let model = LexiconModel::default();
        assert!(std::ptr::eq(model.lexicon(), Lexicon::vader()));
    }

    #[test]
    fn test_no_lexicon_words_is_neutral() {
        assert_scores("news today", 0.0, 1.0, 0.0, 0.0);
    }

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(fixture_model().polarity_scores(""), SentimentScore::ZERO);
        // Single characters are not words
        assert_eq!(fixture_model().polarity_scores("a ! ?"), SentimentScore::ZERO);
    }

    #[test]
    fn test_words_and_emoticons_strips_edge_punctuation() {
        let words = words_and_emoticons("Wow, good!! :) a b");
        assert_eq!(words, vec!["Wow", "good", ":)"]);
    }

    #[test]
    fn test_allcap_differential() {
        let mixed = vec!["GOOD".to_string(), "news".to_string()];
        let all = vec!["GOOD".to_string(), "NEWS".to_string()];
        assert!(allcap_differential(&mixed));
        assert!(!allcap_differential(&all));
    }

    #[test]
    fn test_punctuation_emphasis_caps() {
        assert!((punctuation_emphasis("!!!!!!!") - 4.0 * 0.292).abs() < 1e-12);
        assert!((punctuation_emphasis("?????") - 0.96).abs() < 1e-12);
        assert_eq!(punctuation_emphasis("?"), 0.0);
    }

    #[test]
    fn test_normalize_bounds() {
        assert!(normalize(1e9) <= 1.0);
        assert!(normalize(-1e9) >= -1.0);
        assert_eq!(normalize(0.0), 0.0);
    }
}
