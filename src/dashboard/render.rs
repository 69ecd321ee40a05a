use serde_json::{Map, Value};
use std::fmt::Write as _;

use crate::dashboard::filters::{ContentType, DashboardFilters, DataBounds};
use crate::dashboard::DashboardVariant;
use crate::models::EngagementTier;

const VEGA_SCRIPTS: [&str; 3] = [
    "https://cdn.jsdelivr.net/npm/vega@5",
    "https://cdn.jsdelivr.net/npm/vega-lite@5",
    "https://cdn.jsdelivr.net/npm/vega-embed@6",
];

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;color:#222;display:flex}\
aside{width:260px;min-height:100vh;padding:16px;background:#f4f5f7;box-sizing:border-box}\
aside label{display:block;font-weight:600;margin:12px 0 4px}\
aside select,aside input[type=text],aside input[type=date]{width:100%}\
aside .note{font-size:12px;color:#666}\
main{flex:1;padding:16px 24px;min-width:0}\
.metrics{display:flex;flex-wrap:wrap;gap:12px}\
.metric{background:#fafafa;border:1px solid #e3e3e3;border-radius:6px;padding:8px 14px;min-width:120px}\
.metric .label{font-size:12px;color:#666}.metric .value{font-size:22px;font-weight:600}\
.row{display:flex;gap:16px}.row>div{flex:1;min-width:0}\
.notice{padding:10px 14px;border-radius:6px;margin:8px 0}\
.warning{background:#fff4e5;border:1px solid #f0c36d}.info{background:#e8f1fb;border:1px solid #9cc3ea}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// A standalone file; the sidebar only records the filters used.
    Static,
    /// Served per request; the sidebar submits back to the server.
    Live,
}

#[derive(Debug, Clone, Copy)]
pub enum NoticeKind {
    Info,
    Warning,
}

/// Accumulates page sections and the chart specs they reference.
pub struct Page {
    title: String,
    body: String,
    charts: Map<String, Value>,
}

impl Page {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            body: String::new(),
            charts: Map::new(),
        }
    }

    pub fn section(&mut self, heading: &str) {
        let _ = writeln!(self.body, "<h2>{}</h2>", escape_html(heading));
    }

    pub fn metrics(&mut self, items: &[(&str, String)]) {
        self.body.push_str("<div class=\"metrics\">\n");
        for (label, value) in items {
            let _ = writeln!(
                self.body,
                "<div class=\"metric\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>",
                escape_html(label),
                escape_html(value)
            );
        }
        self.body.push_str("</div>\n");
    }

    /// Places the specs side by side in one row.
    pub fn charts(&mut self, specs: Vec<Value>) {
        self.body.push_str("<div class=\"row\">\n");
        for spec in specs {
            let id = format!("chart-{}", self.charts.len() + 1);
            let _ = writeln!(self.body, "<div id=\"{}\"></div>", id);
            self.charts.insert(id, spec);
        }
        self.body.push_str("</div>\n");
    }

    pub fn notice(&mut self, kind: NoticeKind, text: &str) {
        let class = match kind {
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
        };
        let _ = writeln!(
            self.body,
            "<div class=\"notice {}\">{}</div>",
            class,
            escape_html(text)
        );
    }

    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    pub fn finish(self, sidebar: &str) -> String {
        let mut html = String::with_capacity(self.body.len() + 4096);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape_html(&self.title));
        let _ = writeln!(html, "<style>{}</style>", STYLE);
        if !self.charts.is_empty() {
            for src in VEGA_SCRIPTS {
                let _ = writeln!(html, "<script src=\"{}\"></script>", src);
            }
        }
        html.push_str("</head>\n<body>\n");
        html.push_str(sidebar);
        html.push_str("<main>\n");
        let _ = writeln!(html, "<h1>{}</h1>", escape_html(&self.title));
        html.push_str(&self.body);
        html.push_str("</main>\n");

        if !self.charts.is_empty() {
            let specs = embed_json(&Value::Object(self.charts));
            let _ = writeln!(
                html,
                "<script>\nconst specs = {};\nfor (const [id, spec] of Object.entries(specs)) {{\n  vegaEmbed('#' + id, spec, {{ actions: false }});\n}}\n</script>",
                specs
            );
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

/// Sidebar form. In static mode the controls are disabled and only show
/// which filters produced the page.
pub fn sidebar(
    filters: &DashboardFilters,
    bounds: &DataBounds,
    variant: DashboardVariant,
    mode: RenderMode,
) -> String {
    let mut out = String::new();
    out.push_str("<aside>\n<form method=\"get\" action=\"/\">\n");
    if mode == RenderMode::Static {
        out.push_str("<fieldset disabled style=\"border:0;padding:0;margin:0\">\n");
    }
    out.push_str("<h3>Filters</h3>\n");

    out.push_str("<label for=\"variant\">View</label>\n<select id=\"variant\" name=\"variant\">\n");
    for v in [DashboardVariant::Overview, DashboardVariant::Frames] {
        option(&mut out, v.key(), v.title(), v == variant);
    }
    out.push_str("</select>\n");

    let start = filters.start.or(bounds.min_date);
    let end = filters.end.or(bounds.max_date);
    let date_attr = |d: Option<chrono::NaiveDate>| {
        d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
    };
    let min = date_attr(bounds.min_date);
    let max = date_attr(bounds.max_date);
    let _ = writeln!(
        out,
        "<label for=\"start\">From</label>\n<input type=\"date\" id=\"start\" name=\"start\" value=\"{}\" min=\"{}\" max=\"{}\">",
        date_attr(start),
        min,
        max
    );
    let _ = writeln!(
        out,
        "<label for=\"end\">To</label>\n<input type=\"date\" id=\"end\" name=\"end\" value=\"{}\" min=\"{}\" max=\"{}\">",
        date_attr(end),
        min,
        max
    );

    // The empty hidden value marks the control as submitted even with nothing selected
    out.push_str("<label for=\"subreddit\">Subreddits</label>\n<input type=\"hidden\" name=\"subreddit\" value=\"\">\n");
    let _ = writeln!(
        out,
        "<select id=\"subreddit\" name=\"subreddit\" multiple size=\"{}\">",
        bounds.subreddits.len().clamp(2, 8)
    );
    for sub in &bounds.subreddits {
        let selected = filters
            .subreddits
            .as_ref()
            .map(|s| s.contains(sub))
            .unwrap_or(true);
        option(&mut out, sub, &format!("r/{}", sub), selected);
    }
    out.push_str("</select>\n");

    out.push_str("<label>Content type</label>\n");
    for content in [ContentType::All, ContentType::Posts, ContentType::Comments] {
        let _ = writeln!(
            out,
            "<div><input type=\"radio\" id=\"content-{key}\" name=\"content\" value=\"{key}\"{checked}> <span>{label}</span></div>",
            key = content.key(),
            label = content.label(),
            checked = if content == filters.content { " checked" } else { "" },
        );
    }

    out.push_str("<label for=\"tier\">Engagement tier</label>\n<input type=\"hidden\" name=\"tier\" value=\"\">\n");
    out.push_str("<select id=\"tier\" name=\"tier\" multiple size=\"4\">\n");
    for tier in EngagementTier::all() {
        let selected = filters
            .tiers
            .as_ref()
            .map(|t| t.contains(&tier))
            .unwrap_or(true);
        let key = tier.to_string();
        option(&mut out, &key, &key, selected);
    }
    out.push_str("</select>\n");

    let _ = writeln!(
        out,
        "<label for=\"q\">Search text</label>\n<input type=\"text\" id=\"q\" name=\"q\" value=\"{}\" placeholder=\"e.g. degree\">",
        escape_html(filters.search.as_deref().unwrap_or(""))
    );

    match mode {
        RenderMode::Live => {
            out.push_str("<p><button type=\"submit\">Apply filters</button></p>\n");
        }
        RenderMode::Static => {
            out.push_str("</fieldset>\n<p class=\"note\">Static snapshot. Run <code>skillpulse serve</code> for live filtering.</p>\n");
        }
    }
    out.push_str("</form>\n</aside>\n");
    out
}

fn option(out: &mut String, value: &str, label: &str, selected: bool) {
    let _ = writeln!(
        out,
        "<option value=\"{}\"{}>{}</option>",
        escape_html(value),
        if selected { " selected" } else { "" },
        escape_html(label)
    );
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON safe to inline in a `<script>` element.
pub fn embed_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}
