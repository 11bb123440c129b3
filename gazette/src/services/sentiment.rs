//! Lexicon-based polarity scoring.
//!
//! Each word found in the lexicon contributes its polarity, scaled by any
//! intensifiers right before it and flipped (at half strength) by a
//! preceding negation. The score is the mean contribution, in `[-1, 1]`.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}+(?:'\p{L}+)?").unwrap());

const NEGATION_FACTOR: f64 = -0.5;

static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("good", 0.7),
        ("great", 0.8),
        ("best", 1.0),
        ("better", 0.5),
        ("excellent", 1.0),
        ("outstanding", 0.5),
        ("amazing", 0.6),
        ("impressive", 1.0),
        ("strong", 0.43),
        ("stronger", 0.5),
        ("positive", 0.23),
        ("successful", 0.75),
        ("success", 0.3),
        ("record", 0.2),
        ("high", 0.16),
        ("higher", 0.25),
        ("top", 0.5),
        ("leading", 0.4),
        ("new", 0.14),
        ("innovative", 0.5),
        ("major", 0.06),
        ("big", 0.0),
        ("huge", 0.4),
        ("large", 0.21),
        ("happy", 0.8),
        ("lucky", 0.33),
        ("win", 0.8),
        ("wins", 0.8),
        ("winning", 0.5),
        ("winner", 0.5),
        ("growth", 0.2),
        ("growing", 0.1),
        ("grows", 0.2),
        ("boost", 0.3),
        ("boosts", 0.3),
        ("gain", 0.3),
        ("gains", 0.3),
        ("rise", 0.2),
        ("rises", 0.2),
        ("improved", 0.4),
        ("improve", 0.4),
        ("expand", 0.2),
        ("expands", 0.2),
        ("approved", 0.3),
        ("approves", 0.3),
        ("welcome", 0.8),
        ("welcomes", 0.8),
        ("celebrates", 0.5),
        ("award", 0.4),
        ("awards", 0.4),
        ("safe", 0.5),
        ("secure", 0.4),
        ("responsible", 0.2),
        ("legal", 0.2),
        ("popular", 0.6),
        ("exciting", 0.3),
        ("fun", 0.3),
        ("free", 0.4),
        ("first", 0.25),
        ("full", 0.35),
        ("easy", 0.43),
        ("stable", 0.1),
        ("profit", 0.3),
        ("profits", 0.3),
        ("profitable", 0.5),
        ("bad", -0.7),
        ("worse", -0.4),
        ("worst", -1.0),
        ("poor", -0.4),
        ("weak", -0.38),
        ("weaker", -0.4),
        ("negative", -0.3),
        ("low", -0.1),
        ("lower", -0.2),
        ("loss", -0.4),
        ("losses", -0.4),
        ("lose", -0.5),
        ("loses", -0.5),
        ("lost", -0.5),
        ("decline", -0.3),
        ("declines", -0.3),
        ("drop", -0.3),
        ("drops", -0.3),
        ("fall", -0.3),
        ("falls", -0.3),
        ("fell", -0.3),
        ("down", -0.16),
        ("illegal", -0.5),
        ("unlicensed", -0.4),
        ("fraud", -0.7),
        ("scam", -0.7),
        ("crime", -0.5),
        ("criminal", -0.6),
        ("fine", 0.42),
        ("fined", -0.4),
        ("penalty", -0.4),
        ("ban", -0.4),
        ("bans", -0.4),
        ("banned", -0.5),
        ("closed", -0.1),
        ("closes", -0.1),
        ("closure", -0.3),
        ("crisis", -0.6),
        ("risk", -0.3),
        ("risky", -0.5),
        ("problem", -0.4),
        ("problems", -0.4),
        ("addiction", -0.6),
        ("harmful", -0.6),
        ("dangerous", -0.6),
        ("difficult", -0.5),
        ("hard", -0.29),
        ("sad", -0.5),
        ("angry", -0.5),
        ("terrible", -1.0),
        ("horrible", -1.0),
        ("awful", -1.0),
        ("failed", -0.5),
        ("fails", -0.5),
        ("failure", -0.5),
        ("lawsuit", -0.3),
        ("investigation", -0.2),
        ("suspended", -0.4),
        ("cuts", -0.2),
        ("layoffs", -0.5),
        ("uncertain", -0.2),
        ("controversial", -0.3),
    ]
    .into_iter()
    .collect()
});

static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("very", 1.3),
        ("really", 1.3),
        ("extremely", 1.5),
        ("highly", 1.3),
        ("most", 1.2),
        ("more", 1.1),
        ("so", 1.2),
        ("too", 1.2),
        ("slightly", 0.5),
        ("somewhat", 0.6),
        ("less", 0.7),
    ]
    .into_iter()
    .collect()
});

fn is_negation(token: &str) -> bool {
    matches!(token, "not" | "no" | "never" | "nor" | "without") || token.ends_with("n't")
}

/// Polarity of `text` in `[-1, 1]`; 0.0 when no word carries sentiment.
pub fn polarity(text: &str) -> f64 {
    let text = text.to_lowercase();

    let mut scores: Vec<f64> = vec![];
    let mut negated = false;
    let mut intensity = 1.0;

    for token in TOKEN.find_iter(&text).map(|m| m.as_str()) {
        if is_negation(token) {
            negated = true;
            continue;
        }
        if let Some(factor) = INTENSIFIERS.get(token) {
            intensity *= factor;
            continue;
        }
        if let Some(value) = LEXICON.get(token) {
            let mut score = value * intensity;
            if negated {
                score *= NEGATION_FACTOR;
            }
            scores.push(score.clamp(-1.0, 1.0));
        }
        negated = false;
        intensity = 1.0;
    }

    if scores.is_empty() {
        return 0.0;
    }

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    mean.clamp(-1.0, 1.0)
}
