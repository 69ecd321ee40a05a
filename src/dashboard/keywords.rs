use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

/// A named theme matched by one or more case-insensitive patterns.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    patterns: Vec<Regex>,
}

impl Theme {
    fn new(name: &str, patterns: &[&str]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| Error::Config(format!("bad pattern for {}: {}", name, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name: name.to_string(),
            patterns,
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

/// Ordered collection of themes; chart legends follow this order.
#[derive(Debug, Clone)]
pub struct ThemeSet {
    themes: Vec<Theme>,
}

impl ThemeSet {
    /// Tracked keywords for the overview trends chart.
    pub fn keywords() -> Result<Self> {
        let mut set = Self { themes: Vec::new() };
        set.add("Skills-based", &[r"skills?.based"])?;
        set.add("STARs", &[r"\bstars?\b"])?;
        set.add("Degree requirement", &[r"degree.?require"])?;
        set.add("Hiring reform", &[r"hiring.?reform"])?;
        set.add("RIF", &[r"\brif\b"])?;
        set.add("Competency", &[r"competen"])?;
        Ok(set)
    }

    /// Discourse frames for the frames view.
    pub fn frames() -> Result<Self> {
        let mut set = Self { themes: Vec::new() };
        set.init_frames()?;
        Ok(set)
    }

    fn init_frames(&mut self) -> Result<()> {
        self.add(
            "Credential barriers",
            &[
                r"\bdegrees?\b",
                r"credential",
                r"transcripts?",
                r"\bbachelor",
                r"\bmaster'?s\b",
                r"paper ceiling",
            ],
        )?;
        self.add(
            "Workforce reductions",
            &[
                r"\brif(?:'?d|s)?\b",
                r"reductions? in force",
                r"layoffs?",
                r"laid off",
                r"\bdoge\b",
                r"hiring freeze",
            ],
        )?;
        self.add(
            "Hiring process",
            &[
                r"usajobs",
                r"hiring process",
                r"questionnaire",
                r"self.?certif",
                r"referral list",
                r"time.?to.?hire",
                r"black hole",
            ],
        )?;
        self.add(
            "Assessment reform",
            &[
                r"skills?.based",
                r"assessments?",
                r"structured interview",
                r"competen",
                r"\bsme\b",
                r"subject matter expert",
            ],
        )?;
        self.add(
            "Equity & opportunity",
            &[
                r"\bstars?\b",
                r"alternative routes",
                r"opportunit",
                r"equit(?:y|able)",
                r"non.?traditional",
                r"veterans?",
            ],
        )?;
        self.add(
            "Pay & classification",
            &[
                r"\bgs.?\d{1,2}\b",
                r"pay (?:scale|band|grade)",
                r"classification",
                r"general schedule",
                r"\bsalary\b",
            ],
        )?;
        Ok(())
    }

    fn add(&mut self, name: &str, patterns: &[&str]) -> Result<()> {
        self.themes.push(Theme::new(name, patterns)?);
        Ok(())
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn names(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn matching<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a Theme> + 'a {
        self.themes.iter().filter(move |t| t.matches(text))
    }
}
