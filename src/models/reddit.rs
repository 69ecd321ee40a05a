use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record::{RawRecord, RecordType};
use super::timestamp;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing<T> {
    pub kind: String,
    pub data: ListingData<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingData<T> {
    pub children: Vec<Thing<T>>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thing<T> {
    pub kind: String,
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    #[serde(default)]
    pub author: Option<String>,
    pub subreddit: String,
    pub created_utc: f64,
    pub score: i64,
    #[serde(default)]
    pub num_comments: u32,
}

impl Submission {
    pub fn to_record(&self) -> Option<RawRecord> {
        Some(RawRecord {
            kind: Some(RecordType::Post),
            thread_id: self.id.clone(),
            id: Some(self.id.clone()),
            title: Some(self.title.clone()),
            body: Some(self.selftext.clone()),
            created_utc: timestamp::from_epoch(self.created_utc)?,
            score: self.score,
            subreddit: self.subreddit.clone(),
            author: Some(author_or_none(self.author.as_deref())),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author: Option<String>,
    pub created_utc: f64,
    pub score: i64,
}

impl Comment {
    /// Comments inherit thread and subreddit from their submission.
    pub fn to_record(&self, submission: &Submission) -> Option<RawRecord> {
        Some(RawRecord {
            kind: Some(RecordType::Comment),
            thread_id: submission.id.clone(),
            id: Some(self.id.clone()),
            title: Some(String::new()),
            body: Some(self.body.clone()),
            created_utc: timestamp::from_epoch(self.created_utc)?,
            score: self.score,
            subreddit: submission.subreddit.clone(),
            author: Some(author_or_none(self.author.as_deref())),
        })
    }
}

/// Deleted accounts come back as a missing author; keep the literal the API client prints.
fn author_or_none(author: Option<&str>) -> String {
    author.unwrap_or("None").to_string()
}

/// Flattens the `/comments/{id}` payload into every loaded comment.
///
/// The response is `[submission listing, comment listing]`. `replies` is either
/// an empty string or a nested listing; `more` stubs are skipped.
pub fn flatten_comment_tree(payload: &Value) -> Vec<Comment> {
    let mut comments = Vec::new();
    if let Some(listing) = payload.get(1) {
        collect_comments(listing, &mut comments);
    }
    comments
}

fn collect_comments(listing: &Value, out: &mut Vec<Comment>) {
    let Some(children) = listing
        .get("data")
        .and_then(|d| d.get("children"))
        .and_then(|c| c.as_array())
    else {
        return;
    };

    for child in children {
        if child.get("kind").and_then(|k| k.as_str()) != Some("t1") {
            continue;
        }
        let Some(data) = child.get("data") else {
            continue;
        };
        match serde_json::from_value::<Comment>(data.clone()) {
            Ok(comment) => out.push(comment),
            Err(e) => tracing::debug!("Skipping malformed comment: {}", e),
        }
        if let Some(replies) = data.get("replies") {
            if replies.is_object() {
                collect_comments(replies, out);
            }
        }
    }
}

/// One page of archive search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveResponse {
    pub data: Vec<ArchiveSubmission>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveSubmission {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub selftext: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub created_utc: f64,
    #[serde(default)]
    pub score: i64,
    pub subreddit: String,
}

impl ArchiveSubmission {
    pub fn to_record(&self) -> Option<RawRecord> {
        Some(RawRecord {
            kind: Some(RecordType::Post),
            thread_id: self.id.clone(),
            id: Some(self.id.clone()),
            title: self.title.clone(),
            body: self.selftext.clone(),
            created_utc: timestamp::from_epoch(self.created_utc)?,
            score: self.score,
            subreddit: self.subreddit.clone(),
            author: self.author.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn comment_json(id: &str, body: &str, replies: Value) -> Value {
        json!({
            "kind": "t1",
            "data": {
                "id": id, "body": body, "author": "fed_employee",
                "created_utc": 1_704_067_200.0, "score": 7, "replies": replies
            }
        })
    }

    #[test]
    fn test_flatten_comment_tree_walks_replies() {
        let nested = json!({
            "kind": "Listing",
            "data": { "children": [comment_json("c2", "reply", json!(""))] }
        });
        let payload = json!([
            { "kind": "Listing", "data": { "children": [] } },
            {
                "kind": "Listing",
                "data": {
                    "children": [
                        comment_json("c1", "top", nested),
                        { "kind": "more", "data": { "count": 12, "children": ["x"] } },
                        comment_json("c3", "second", json!(""))
                    ]
                }
            }
        ]);

        let ids: Vec<_> = flatten_comment_tree(&payload)
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_comment_inherits_thread() {
        let submission = Submission {
            id: "t3x".into(),
            title: "RIF notice received".into(),
            selftext: "What now?".into(),
            author: Some("gov_analyst".into()),
            subreddit: "FedEmployees".into(),
            created_utc: 1_704_067_200.0,
            score: 40,
            num_comments: 1,
        };
        let comment = Comment {
            id: "c9".into(),
            body: "Contact your union rep.".into(),
            author: None,
            created_utc: 1_704_070_800.0,
            score: 6,
        };

        let record = comment.to_record(&submission).unwrap();
        assert_eq!(record.thread_id, "t3x");
        assert_eq!(record.subreddit, "FedEmployees");
        assert_eq!(record.title.as_deref(), Some(""));
        assert_eq!(record.author.as_deref(), Some("None"));
        assert_eq!(record.kind, Some(RecordType::Comment));
    }

    #[test]
    fn test_archive_submission_normalizes_to_post() {
        let page: ArchiveResponse = serde_json::from_value(json!({
            "data": [{
                "id": "p1", "title": "Hiring freeze again", "selftext": "",
                "created_utc": 1_650_000_000, "score": 12, "subreddit": "jobs"
            }]
        }))
        .unwrap();

        let record = page.data[0].to_record().unwrap();
        assert_eq!(record.record_id(), "p1");
        assert_eq!(record.record_type(), RecordType::Post);
        assert_eq!(record.author, None);
        assert_eq!(record.body.as_deref(), Some(""));
    }
}
