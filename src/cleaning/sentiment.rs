//! Lexicon-based polarity scoring.
//!
//! Each token found in the lexicon contributes its polarity, scaled by a
//! directly preceding intensifier and flipped (at half strength) by a preceding
//! negator. The document score is the mean contribution of matched tokens.

use std::collections::HashMap;

/// Anything that maps text to a polarity in `[-1.0, 1.0]`.
pub trait SentimentModel: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
    fn name(&self) -> &str;
}

pub struct LexiconSentiment {
    polarities: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
    negators: &'static [&'static str],
}

const NEGATION_FACTOR: f64 = -0.5;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self {
            polarities: Self::build_polarity_lexicon(),
            intensifiers: Self::build_intensifiers(),
            negators: &[
                "not", "no", "never", "nobody", "nothing", "neither", "nor", "without",
                "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't",
                "won't", "can't", "cannot", "couldn't", "shouldn't", "wouldn't",
            ],
        }
    }

    fn build_polarity_lexicon() -> HashMap<&'static str, f64> {
        [
            // Positive
            ("good", 0.7), ("great", 0.8), ("best", 1.0), ("better", 0.5),
            ("excellent", 1.0), ("amazing", 0.6), ("incredible", 0.9), ("awesome", 1.0),
            ("talented", 0.7), ("promising", 0.5), ("encouraging", 0.5), ("compelling", 0.5),
            ("important", 0.4), ("essential", 0.3), ("successful", 0.75), ("success", 0.6),
            ("improved", 0.5), ("improve", 0.4), ("improvement", 0.4), ("improvements", 0.4),
            ("optimistic", 0.6), ("hopeful", 0.5), ("happy", 0.8), ("glad", 0.5),
            ("helpful", 0.5), ("useful", 0.3), ("valuable", 0.6), ("fair", 0.7),
            ("equitable", 0.5), ("real", 0.2), ("right", 0.29), ("overdue", 0.1),
            ("eye-opening", 0.4), ("game-changer", 0.6), ("finally", 0.2), ("thank", 0.4),
            ("appreciate", 0.5), ("supportive", 0.5), ("proud", 0.8), ("love", 0.5),
            ("easy", 0.43), ("strong", 0.43), ("effective", 0.6), ("benefit", 0.4),
            ("dramatically", 0.2), ("significantly", 0.2), ("top", 0.5), ("win", 0.8),
            ("opportunity", 0.3), ("interesting", 0.5), ("clear", 0.1), ("new", 0.14),
            ("silver", 0.1), ("totally", 0.1), ("agree", 0.4),
            // Negative
            ("bad", -0.7), ("worse", -0.4), ("worst", -1.0), ("terrible", -1.0),
            ("awful", -1.0), ("horrible", -1.0), ("broken", -0.4), ("brutal", -0.875),
            ("devastating", -0.8), ("stressful", -0.6), ("suffocating", -0.6), ("tough", -0.39),
            ("hard", -0.29), ("harder", -0.3), ("difficult", -0.5), ("struggling", -0.4),
            ("wrong", -0.5), ("worried", -0.5), ("worry", -0.4), ("fear", -0.5),
            ("afraid", -0.6), ("frustrating", -0.6), ("frustrated", -0.7), ("angry", -0.5),
            ("unfair", -0.5), ("biased", -0.4), ("biases", -0.3), ("meaningless", -0.5),
            ("incomprehensible", -0.5), ("staggering", -0.3), ("penalize", -0.4), ("lose", -0.3),
            ("lost", -0.3), ("loses", -0.3), ("layoffs", -0.4), ("fired", -0.5),
            ("black", -0.17), ("hole", -0.1), ("void", -0.3), ("buzzword", -0.3),
            ("problem", -0.3), ("problems", -0.3), ("barrier", -0.3), ("barriers", -0.3),
            ("misconception", -0.3), ("irony", -0.2), ("blocking", -0.3), ("outdated", -0.4),
            ("underperformers", -0.4), ("stuck", -0.4), ("useless", -0.5), ("sad", -0.5),
            ("impossible", -0.67), ("slow", -0.3), ("worse-off", -0.5), ("disappointed", -0.75),
        ]
        .into_iter()
        .collect()
    }

    fn build_intensifiers() -> HashMap<&'static str, f64> {
        [
            ("very", 1.3), ("really", 1.3), ("extremely", 1.5), ("incredibly", 1.4),
            ("so", 1.2), ("truly", 1.2), ("absolutely", 1.5), ("totally", 1.3),
            ("especially", 1.2), ("particularly", 1.2), ("most", 1.3), ("fundamentally", 1.3),
            ("desperately", 1.4), ("deeply", 1.3), ("slightly", 0.7), ("somewhat", 0.8),
            ("fairly", 0.9), ("cautiously", 0.7),
        ]
        .into_iter()
        .collect()
    }

    fn is_negator(&self, token: &str) -> bool {
        self.negators.contains(&token) || token.ends_with("n't")
    }
}

impl SentimentModel for LexiconSentiment {
    fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut total = 0.0;
        let mut matched = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.polarities.get(token.as_str()) else {
                continue;
            };

            let mut value = base;
            let prev = i.checked_sub(1).map(|j| tokens[j].as_str());
            let prev2 = i.checked_sub(2).map(|j| tokens[j].as_str());

            if let Some(factor) = prev.and_then(|p| self.intensifiers.get(p)) {
                value *= factor;
            }
            if prev.map(|p| self.is_negator(p)).unwrap_or(false)
                || prev2.map(|p| self.is_negator(p)).unwrap_or(false)
            {
                value *= NEGATION_FACTOR;
            }

            total += value.clamp(-1.0, 1.0);
            matched += 1;
        }

        if matched == 0 {
            return 0.0;
        }
        (total / matched as f64).clamp(-1.0, 1.0)
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase word tokens; keeps inner apostrophes and hyphens (`don't`, `game-changer`).
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '-' || c == '\u{2019}'))
        .map(|t| t.trim_matches(|c: char| c == '\'' || c == '-' || c == '\u{2019}'))
        .filter(|t| !t.is_empty())
        .map(|t| t.replace('\u{2019}', "'").to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_when_no_lexicon_words() {
        let model = LexiconSentiment::new();
        assert_eq!(model.polarity("The GS-13 posting closes on Friday."), 0.0);
        assert_eq!(model.polarity(""), 0.0);
    }

    #[test]
    fn test_sign_follows_lexicon() {
        let model = LexiconSentiment::new();
        assert!(model.polarity("Structured interviews were great, an excellent change.") > 0.1);
        assert!(model.polarity("The RIF process is brutal and devastating.") < -0.1);
    }

    #[test]
    fn test_negation_flips_and_dampens() {
        let model = LexiconSentiment::new();
        let plain = model.polarity("good");
        let negated = model.polarity("not good");
        assert!(negated < 0.0);
        assert!((negated - plain * NEGATION_FACTOR).abs() < 1e-9);
        assert!(model.polarity("it isn't bad") > 0.0);
    }

    #[test]
    fn test_intensifier_scales_and_clamps() {
        let model = LexiconSentiment::new();
        assert!(model.polarity("very good") > model.polarity("good"));
        assert_eq!(model.polarity("absolutely excellent"), 1.0);
        assert_eq!(model.polarity("extremely terrible"), -1.0);
    }

    #[test]
    fn test_score_always_in_range() {
        let model = LexiconSentiment::new();
        for text in [
            "best best best awesome amazing",
            "worst terrible awful horrible",
            "not not not bad",
            "I'm cautiously optimistic, but the timeline is brutal.",
        ] {
            let score = model.polarity(text);
            assert!((-1.0..=1.0).contains(&score), "{} -> {}", text, score);
        }
    }

    #[test]
    fn test_tokenize_keeps_contractions() {
        assert_eq!(
            tokenize("Don\u{2019}t stop -- it's a game-changer!"),
            vec!["don't", "stop", "it's", "a", "game-changer"]
        );
    }
}
