//! Vega-Lite v5 specifications. Each builder returns a complete spec that the
//! page hands to vega-embed; month axes share one UTC time scale so policy
//! markers line up with the data.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::Result;
use crate::models::PolicyEvent;

const SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";
const HEIGHT: u32 = 320;

const POSITIVE_COLOR: &str = "#2ca02c";
const NEUTRAL_COLOR: &str = "#9e9e9e";
const NEGATIVE_COLOR: &str = "#d62728";

fn base(title: &str) -> Value {
    json!({
        "$schema": SCHEMA,
        "title": title,
        "width": "container",
        "height": HEIGHT,
    })
}

fn extend(mut target: Value, extra: Value) -> Value {
    if let (Some(t), Value::Object(e)) = (target.as_object_mut(), extra) {
        t.extend(e);
    }
    target
}

fn values<T: Serialize>(rows: &[T]) -> Result<Value> {
    let rows = serde_json::to_value(rows)?;
    Ok(json!({ "values": rows }))
}

fn month_axis(title: &str) -> Value {
    json!({
        "field": "month",
        "timeUnit": "utcyearmonth",
        "type": "temporal",
        "title": title,
        "scale": { "type": "utc" },
        "axis": { "format": "%b %Y" },
    })
}

/// Wraps a month-axis layer with zoom/pan and, when present, policy markers.
fn timeline<T: Serialize>(
    title: &str,
    rows: &[T],
    layer: Value,
    events: &[PolicyEvent],
) -> Result<Value> {
    let main = extend(
        layer,
        json!({
            "data": values(rows)?,
            "params": [{ "name": "zoom", "select": "interval", "bind": "scales" }],
        }),
    );
    let mut layers = vec![main];

    if !events.is_empty() {
        let event_data = values(events)?;
        let x = json!({
            "field": "date",
            "type": "temporal",
            "scale": { "type": "utc" },
        });
        layers.push(json!({
            "data": event_data.clone(),
            "mark": { "type": "rule", "strokeDash": [4, 4], "color": "#555" },
            "encoding": {
                "x": x.clone(),
                "tooltip": [
                    { "field": "label", "type": "nominal", "title": "Event" },
                    { "field": "date", "type": "temporal", "title": "Date", "format": "%Y-%m-%d" },
                ],
            },
        }));
        layers.push(json!({
            "data": event_data,
            "mark": { "type": "text", "angle": 270, "align": "left", "dx": 4, "dy": -4, "fontSize": 10, "color": "#555" },
            "encoding": {
                "x": x,
                "y": { "value": 0 },
                "text": { "field": "label" },
            },
        }));
    }

    Ok(extend(base(title), json!({ "layer": layers })))
}

pub fn monthly_volume<T: Serialize>(rows: &[T], events: &[PolicyEvent]) -> Result<Value> {
    timeline(
        "Monthly Post and Comment Volume",
        rows,
        json!({
            "mark": { "type": "bar" },
            "encoding": {
                "x": month_axis("Month"),
                "y": { "field": "count", "type": "quantitative", "title": "Records", "stack": "zero" },
                "color": { "field": "series", "type": "nominal", "title": "Type" },
                "tooltip": [
                    { "field": "month", "type": "temporal", "timeUnit": "utcyearmonth", "title": "Month" },
                    { "field": "series", "type": "nominal", "title": "Type" },
                    { "field": "count", "type": "quantitative", "title": "Records" },
                ],
            },
        }),
        events,
    )
}

pub fn score_histogram<T: Serialize>(rows: &[T]) -> Result<Value> {
    Ok(extend(
        base("Score Distribution"),
        json!({
            "data": values(rows)?,
            "mark": { "type": "bar", "opacity": 0.85 },
            "params": [{ "name": "zoom", "select": "interval", "bind": "scales" }],
            "encoding": {
                "x": { "field": "score", "type": "quantitative", "bin": { "maxbins": 30 }, "title": "Score" },
                "y": { "aggregate": "count", "type": "quantitative", "title": "Records" },
                "color": { "field": "type", "type": "nominal", "title": "Type" },
                "tooltip": [
                    { "field": "score", "bin": { "maxbins": 30 }, "type": "quantitative", "title": "Score" },
                    { "aggregate": "count", "type": "quantitative", "title": "Records" },
                ],
            },
        }),
    ))
}

/// Line chart of monthly mention counts; used for keywords and frames.
pub fn theme_trends<T: Serialize>(
    title: &str,
    legend: &str,
    rows: &[T],
    events: &[PolicyEvent],
) -> Result<Value> {
    timeline(
        title,
        rows,
        json!({
            "mark": { "type": "line", "point": true },
            "encoding": {
                "x": month_axis("Month"),
                "y": { "field": "count", "type": "quantitative", "title": "Mentions" },
                "color": { "field": "series", "type": "nominal", "title": legend },
                "tooltip": [
                    { "field": "month", "type": "temporal", "timeUnit": "utcyearmonth", "title": "Month" },
                    { "field": "series", "type": "nominal", "title": legend },
                    { "field": "count", "type": "quantitative", "title": "Mentions" },
                ],
            },
        }),
        events,
    )
}

pub fn monthly_sentiment<T: Serialize>(rows: &[T], events: &[PolicyEvent]) -> Result<Value> {
    timeline(
        "Average Sentiment by Month and Subreddit",
        rows,
        json!({
            "mark": { "type": "line", "point": true },
            "encoding": {
                "x": month_axis("Month"),
                "y": { "field": "value", "type": "quantitative", "title": "Average sentiment", "scale": { "domain": [-1, 1] } },
                "color": { "field": "series", "type": "nominal", "title": "Subreddit" },
                "tooltip": [
                    { "field": "month", "type": "temporal", "timeUnit": "utcyearmonth", "title": "Month" },
                    { "field": "series", "type": "nominal", "title": "Subreddit" },
                    { "field": "value", "type": "quantitative", "title": "Average sentiment", "format": "+.3f" },
                ],
            },
        }),
        events,
    )
}

pub fn subreddit_volume<T: Serialize>(rows: &[T]) -> Result<Value> {
    Ok(extend(
        base("Posts and Comments by Subreddit"),
        json!({
            "data": values(rows)?,
            "transform": [
                { "fold": ["posts", "comments"], "as": ["kind", "count"] },
            ],
            "mark": { "type": "bar" },
            "encoding": {
                "x": { "field": "subreddit", "type": "nominal", "title": "Subreddit", "axis": { "labelAngle": -30 } },
                "xOffset": { "field": "kind", "type": "nominal" },
                "y": { "field": "count", "type": "quantitative", "title": "Records" },
                "color": { "field": "kind", "type": "nominal", "title": "Type" },
                "tooltip": [
                    { "field": "subreddit", "type": "nominal", "title": "Subreddit" },
                    { "field": "kind", "type": "nominal", "title": "Type" },
                    { "field": "count", "type": "quantitative", "title": "Records" },
                    { "field": "avg_score", "type": "quantitative", "title": "Average score", "format": ".1f" },
                ],
            },
        }),
    ))
}

/// A zero average counts with the negative bars.
const SENTIMENT_SIGN: &str = "datum.avg_sentiment > 0 ? 'positive' : 'non-positive'";

pub fn subreddit_sentiment<T: Serialize>(rows: &[T]) -> Result<Value> {
    Ok(extend(
        base("Average Sentiment by Subreddit"),
        json!({
            "data": values(rows)?,
            "transform": [
                { "calculate": SENTIMENT_SIGN, "as": "sign" },
            ],
            "mark": { "type": "bar" },
            "encoding": {
                "x": { "field": "subreddit", "type": "nominal", "title": "Subreddit", "sort": "-y", "axis": { "labelAngle": -30 } },
                "y": { "field": "avg_sentiment", "type": "quantitative", "title": "Average sentiment" },
                "color": {
                    "field": "sign",
                    "type": "nominal",
                    "legend": null,
                    "scale": { "domain": ["positive", "non-positive"], "range": [POSITIVE_COLOR, NEGATIVE_COLOR] },
                },
                "tooltip": [
                    { "field": "subreddit", "type": "nominal", "title": "Subreddit" },
                    { "field": "avg_sentiment", "type": "quantitative", "title": "Average sentiment", "format": "+.3f" },
                ],
            },
        }),
    ))
}

pub fn theme_prevalence<T: Serialize>(rows: &[T]) -> Result<Value> {
    Ok(extend(
        base("Frame Prevalence"),
        json!({
            "data": values(rows)?,
            "mark": { "type": "bar" },
            "encoding": {
                "y": { "field": "theme", "type": "nominal", "title": null, "sort": "-x" },
                "x": { "field": "share", "type": "quantitative", "title": "Share of records", "axis": { "format": "%" } },
                "tooltip": [
                    { "field": "theme", "type": "nominal", "title": "Frame" },
                    { "field": "records", "type": "quantitative", "title": "Records" },
                    { "field": "share", "type": "quantitative", "title": "Share", "format": ".1%" },
                ],
            },
        }),
    ))
}

pub fn theme_sentiment<T: Serialize>(rows: &[T]) -> Result<Value> {
    Ok(extend(
        base("Average Sentiment by Frame"),
        json!({
            "data": values(rows)?,
            "transform": [
                { "filter": "datum.avg_sentiment != null" },
                { "calculate": SENTIMENT_SIGN, "as": "sign" },
            ],
            "mark": { "type": "bar" },
            "encoding": {
                "y": { "field": "theme", "type": "nominal", "title": null },
                "x": { "field": "avg_sentiment", "type": "quantitative", "title": "Average sentiment" },
                "color": {
                    "field": "sign",
                    "type": "nominal",
                    "legend": null,
                    "scale": { "domain": ["positive", "non-positive"], "range": [POSITIVE_COLOR, NEGATIVE_COLOR] },
                },
                "tooltip": [
                    { "field": "theme", "type": "nominal", "title": "Frame" },
                    { "field": "records", "type": "quantitative", "title": "Records" },
                    { "field": "avg_sentiment", "type": "quantitative", "title": "Average sentiment", "format": "+.3f" },
                ],
            },
        }),
    ))
}

pub fn tier_sentiment_mix<T: Serialize>(rows: &[T]) -> Result<Value> {
    Ok(extend(
        base("Sentiment Mix by Engagement Tier"),
        json!({
            "data": values(rows)?,
            "mark": { "type": "bar" },
            "encoding": {
                "x": {
                    "field": "tier",
                    "type": "ordinal",
                    "title": "Engagement tier",
                    "sort": ["low", "medium", "high", "viral"],
                },
                "y": { "field": "count", "type": "quantitative", "stack": "normalize", "title": "Share", "axis": { "format": "%" } },
                "color": {
                    "field": "label",
                    "type": "nominal",
                    "title": "Sentiment",
                    "scale": {
                        "domain": ["positive", "neutral", "negative"],
                        "range": [POSITIVE_COLOR, NEUTRAL_COLOR, NEGATIVE_COLOR],
                    },
                },
                "tooltip": [
                    { "field": "tier", "type": "nominal", "title": "Tier" },
                    { "field": "label", "type": "nominal", "title": "Sentiment" },
                    { "field": "count", "type": "quantitative", "title": "Records" },
                    { "field": "share", "type": "quantitative", "title": "Share", "format": ".1%" },
                ],
            },
        }),
    ))
}
