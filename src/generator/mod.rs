//! Seeded synthetic dataset with the defects the cleaning pipeline must repair:
//! duplicated rows, empty or missing bodies, and timestamps outside the study window.

pub mod corpus;

use chrono::{Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, LogNormal};
use std::collections::{BTreeMap, HashMap};

use crate::config::{midnight, StudyWindow};
use crate::error::{Error, Result};
use crate::models::{RawRecord, RecordType};
use corpus::*;

const ID_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const GS_GRADES: [u32; 8] = [5, 7, 9, 11, 12, 13, 14, 15];

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub rows: usize,
    pub post_fraction: f64,
    pub duplicates: usize,
    pub empty_bodies: usize,
    pub window: StudyWindow,
    pub outlier_dates: Vec<NaiveDateTime>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rows: 500,
            post_fraction: 0.30,
            duplicates: 15,
            empty_bodies: 5,
            window: StudyWindow::default(),
            outlier_dates: vec![
                midnight(2021, 11, 15) + Duration::seconds(8 * 3600 + 23 * 60 + 11),
                midnight(2021, 12, 3) + Duration::seconds(14 * 3600 + 5 * 60 + 44),
                midnight(2025, 8, 12) + Duration::seconds(19 * 3600 + 45 * 60),
                midnight(2025, 9, 1) + Duration::seconds(10 * 3600 + 30 * 60 + 22),
            ],
        }
    }
}

/// What a generation run produced, for logging.
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    pub rows: usize,
    pub posts: usize,
    pub comments: usize,
    pub by_subreddit: BTreeMap<String, usize>,
    pub min_score: i64,
    pub max_score: i64,
    pub mean_score: f64,
    pub earliest: Option<NaiveDateTime>,
    pub latest: Option<NaiveDateTime>,
    pub empty_bodies: usize,
    pub duplicate_key_rows: usize,
}

pub struct DatasetGenerator {
    rng: StdRng,
    config: GeneratorConfig,
    scores: LogNormal<f64>,
}

impl DatasetGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        if !(0.0..=1.0).contains(&config.post_fraction) {
            return Err(Error::Config(format!(
                "post fraction must be within 0..=1, got {}",
                config.post_fraction
            )));
        }
        if config.rows > 0 && config.post_fraction * (config.rows as f64) < 1.0 {
            return Err(Error::Config(
                "at least one post is needed to attach comments to".to_string(),
            ));
        }
        let scores = LogNormal::new(2.5, 0.9)
            .map_err(|e| Error::Config(format!("score distribution: {}", e)))?;

        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            scores,
        })
    }

    pub fn generate(&mut self) -> Vec<RawRecord> {
        let n_posts = (self.config.rows as f64 * self.config.post_fraction) as usize;
        let n_comments = self.config.rows - n_posts;

        let mut rows = Vec::with_capacity(self.config.rows + self.config.duplicates);
        let mut thread_ids = Vec::with_capacity(n_posts);

        for _ in 0..n_posts {
            let tid = self.reddit_id();
            thread_ids.push(tid.clone());
            let title = self.pick(POST_TITLES).to_string();
            let body = self.make_body(POST_BODY_SENTENCES);
            rows.push(self.record(RecordType::Post, tid.clone(), tid, title, body));
        }

        for _ in 0..n_comments {
            let Some(parent) = thread_ids.choose(&mut self.rng).cloned() else {
                break;
            };
            let cid = self.reddit_id();
            let body = self.make_body(COMMENT_BODY_SENTENCES);
            rows.push(self.record(RecordType::Comment, parent, cid, String::new(), body));
        }

        // Exact copies, as overlapping collection runs would produce
        let dup_count = self.config.duplicates.min(rows.len());
        for idx in index::sample(&mut self.rng, rows.len(), dup_count).into_iter() {
            let copy = rows[idx].clone();
            rows.push(copy);
        }

        // Alternate empty strings and missing values
        let empty_count = self.config.empty_bodies.min(rows.len());
        for (i, idx) in index::sample(&mut self.rng, rows.len(), empty_count)
            .into_iter()
            .enumerate()
        {
            rows[idx].body = if i % 2 == 0 { Some(String::new()) } else { None };
        }

        let outliers = self.config.outlier_dates.clone();
        let outlier_count = outliers.len().min(rows.len());
        for (idx, ts) in index::sample(&mut self.rng, rows.len(), outlier_count)
            .into_iter()
            .zip(outliers)
        {
            rows[idx].created_utc = ts;
        }

        rows.shuffle(&mut self.rng);
        rows.sort_by_key(|r| r.created_utc);
        rows
    }

    fn record(
        &mut self,
        kind: RecordType,
        thread_id: String,
        id: String,
        title: String,
        body: String,
    ) -> RawRecord {
        RawRecord {
            kind: Some(kind),
            thread_id,
            id: Some(id),
            title: Some(title),
            body: Some(body),
            created_utc: self.random_date(),
            score: self.random_score(),
            subreddit: self.pick(SUBREDDITS).to_string(),
            author: Some(self.make_username()),
        }
    }

    fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        pool.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn reddit_id(&mut self) -> String {
        (0..6)
            .map(|_| ID_CHARS[self.rng.gen_range(0..ID_CHARS.len())] as char)
            .collect()
    }

    fn make_username(&mut self) -> String {
        let base = self.pick(USERNAME_PREFIXES);
        let suffix = match self.rng.gen_range(0..3) {
            0 => String::new(),
            1 => format!("_{}", self.rng.gen_range(1..=99)),
            _ => self.rng.gen_range(0..=9999).to_string(),
        };
        format!("{}{}", base, suffix)
    }

    fn random_date(&mut self) -> NaiveDateTime {
        let window = self.config.window;
        let span = (window.end - window.start).num_seconds().max(0);
        window.start + Duration::seconds(self.rng.gen_range(0..=span))
    }

    /// Mostly 5-50, with a long tail into the hundreds.
    fn random_score(&mut self) -> i64 {
        let raw = self.scores.sample(&mut self.rng);
        (raw as i64).max(1)
    }

    fn make_body(&mut self, pool: &[&'static str]) -> String {
        let n = self.rng.gen_range(2..=5).min(pool.len());
        let chosen: Vec<&str> = pool.choose_multiple(&mut self.rng, n).copied().collect();
        chosen
            .into_iter()
            .map(|s| self.fill_template(s))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn fill_template(&mut self, sentence: &str) -> String {
        let years = self.rng.gen_range(2..=25).to_string();
        let gs = GS_GRADES.choose(&mut self.rng).copied().unwrap_or(9).to_string();
        sentence.replace("{years}", &years).replace("{gs}", &gs)
    }
}

pub fn summarize(rows: &[RawRecord]) -> GenerationSummary {
    let mut summary = GenerationSummary {
        rows: rows.len(),
        ..Default::default()
    };
    if rows.is_empty() {
        return summary;
    }

    let mut keys: HashMap<(&str, &str), usize> = HashMap::new();
    let mut score_total = 0i64;
    summary.min_score = i64::MAX;
    summary.max_score = i64::MIN;

    for row in rows {
        match row.record_type() {
            RecordType::Post => summary.posts += 1,
            RecordType::Comment => summary.comments += 1,
        }
        *summary.by_subreddit.entry(row.subreddit.clone()).or_default() += 1;
        summary.min_score = summary.min_score.min(row.score);
        summary.max_score = summary.max_score.max(row.score);
        score_total += row.score;
        if !row.has_body() {
            summary.empty_bodies += 1;
        }
        *keys.entry((&row.thread_id, row.record_id())).or_default() += 1;
    }

    summary.mean_score = score_total as f64 / rows.len() as f64;
    summary.earliest = rows.iter().map(|r| r.created_utc).min();
    summary.latest = rows.iter().map(|r| r.created_utc).max();
    summary.duplicate_key_rows = keys.values().filter(|&&n| n > 1).sum();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn generate(config: GeneratorConfig) -> Vec<RawRecord> {
        DatasetGenerator::new(config).unwrap().generate()
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate(GeneratorConfig::default());
        let b = generate(GeneratorConfig::default());
        assert_eq!(a, b);

        let c = generate(GeneratorConfig {
            seed: 7,
            ..GeneratorConfig::default()
        });
        assert_ne!(a, c);
    }

    #[test]
    fn test_row_counts_and_shape() {
        let rows = generate(GeneratorConfig::default());
        assert_eq!(rows.len(), 515);

        let posts: HashSet<_> = rows
            .iter()
            .filter(|r| r.kind == Some(RecordType::Post))
            .map(|r| r.thread_id.clone())
            .collect();
        for row in &rows {
            assert!(posts.contains(&row.thread_id), "orphan comment {:?}", row.id);
            assert!(row.score >= 1);
            assert_eq!(row.id.as_ref().map(|id| id.len()), Some(6));
            if row.kind == Some(RecordType::Comment) {
                assert_eq!(row.title.as_deref(), Some(""));
            }
        }
        assert!(rows.windows(2).all(|w| w[0].created_utc <= w[1].created_utc));
    }

    #[test]
    fn test_injected_defects() {
        let config = GeneratorConfig::default();
        let window = config.window;
        let rows = generate(config);
        let summary = summarize(&rows);

        assert_eq!(summary.empty_bodies, 5);
        assert!(rows.iter().any(|r| r.body.is_none()));
        assert!(rows.iter().any(|r| r.body.as_deref() == Some("")));

        let outside = rows.iter().filter(|r| !window.contains(r.created_utc)).count();
        assert_eq!(outside, 4);

        assert!(summary.duplicate_key_rows >= 30);
    }

    #[test]
    fn test_templates_are_filled() {
        let rows = generate(GeneratorConfig::default());
        for body in rows.iter().filter_map(|r| r.body.as_deref()) {
            assert!(!body.contains("{years}") && !body.contains("{gs}"));
        }
    }

    #[test]
    fn test_rejects_bad_post_fraction() {
        let config = GeneratorConfig {
            post_fraction: 1.5,
            ..GeneratorConfig::default()
        };
        assert!(DatasetGenerator::new(config).is_err());
    }
}
