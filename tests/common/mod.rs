#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use skillpulse::{CleanConfig, CleaningPipeline, CleaningReport, StudyWindow};

pub const RAW_HEADER: &str = "type,thread_id,id,title,body,created_utc,score,subreddit,author";

/// Nine raw rows:
/// - a1 post and its c1 comment, with c1 duplicated verbatim
/// - c2 with an empty body
/// - b1 posted before the study window
/// - b2 post (duplicated verbatim) with c3 (blank author) and c4 (exactly on the window end)
///
/// Cleaning must keep a1, c1, b2, c3, c4 in that order.
pub fn raw_fixture() -> String {
    [
        RAW_HEADER,
        r#"post,a1,a1,Skills-based hiring finally,"Great news, skills-based hiring is finally here.",2024-01-15 10:00:00,42,FedEmployees,alice"#,
        r#"comment,a1,c1,,"This is terrible, the process is awful.",2024-01-16 11:00:00,8,FedEmployees,bob"#,
        r#"comment,a1,c1,,"This is terrible, the process is awful.",2024-01-16 11:00:00,8,FedEmployees,bob"#,
        r#"comment,a1,c2,,,2024-01-17 12:00:00,3,FedEmployees,carol"#,
        r#"post,b1,b1,Old thread,Posted before the window.,2021-12-01 09:00:00,15,jobs,dave"#,
        r#"post,b2,b2,RIF notice,Got the RIF notice today.,2024-03-02 08:30:00,150,govfire,erin"#,
        r#"post,b2,b2,RIF notice,Got the RIF notice today.,2024-03-02 08:30:00,150,govfire,erin"#,
        r#"comment,b2,c3,,I am hopeful about competency assessments.,2024-03-03 09:15:00,25,govfire,"#,
        r#"comment,b2,c4,,Ok.,2025-06-30 00:00:00,10,govfire,frank"#,
    ]
    .join("\n")
        + "\n"
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

pub fn write_policy_events(dir: &Path) -> PathBuf {
    write_file(
        dir,
        "policy_events.csv",
        "date,label\n2024-02-20,Chance to Compete Act signed\n2019-06-01,Outside the data\n",
    )
}

/// Runs the cleaning pipeline over `raw` inside `dir` with the default window.
pub fn clean_into(dir: &Path, raw: &str) -> (PathBuf, CleaningReport) {
    let input = write_file(dir, "raw/reddit_skills_raw.csv", raw);
    let output = dir.join("cleaned").join("reddit_skills_cleaned.csv");
    let config = CleanConfig {
        input,
        output: output.clone(),
        window: StudyWindow::default(),
    };
    let report = CleaningPipeline::new(config).run().unwrap();
    (output, report)
}
