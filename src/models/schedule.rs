//! Schedule document (`schedule.json`).
//!
//! Two incompatible schemas exist: a list of days holding table rows, and a
//! flat list of sessions holding nested segments. The shape is decided once
//! here, by which top-level key is present.

use serde::Deserialize;

use super::{null_as_default, Paper};

/// Header block shown above the schedule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TutorialInfo {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One day of a day/session schedule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    #[serde(default, deserialize_with = "null_as_default")]
    pub day_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sessions: Vec<DaySession>,
}

/// A table row within a day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySession {
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_break: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
}

/// A top-level block of the outline schedule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineSession {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_break: bool,
    /// Break label.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub session_title: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub segments: Vec<Segment>,
}

/// A timed part of an outline session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Segment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub papers: Vec<Paper>,
}

/// The schedule body, resolved to exactly one schema.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleBody {
    Days(Vec<Day>),
    Sessions(Vec<OutlineSession>),
    /// Neither `days` nor `sessions` was present.
    Empty,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchedule {
    #[serde(default)]
    tutorial_info: Option<TutorialInfo>,
    #[serde(default)]
    days: Option<Vec<Day>>,
    #[serde(default)]
    sessions: Option<Vec<OutlineSession>>,
}

/// Contents of `schedule.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawSchedule")]
pub struct ScheduleDocument {
    pub tutorial_info: Option<TutorialInfo>,
    pub body: ScheduleBody,
}

impl From<RawSchedule> for ScheduleDocument {
    fn from(raw: RawSchedule) -> Self {
        let body = match (raw.days, raw.sessions) {
            (Some(days), _) => ScheduleBody::Days(days),
            (None, Some(sessions)) => ScheduleBody::Sessions(sessions),
            (None, None) => ScheduleBody::Empty,
        };
        Self {
            tutorial_info: raw.tutorial_info,
            body,
        }
    }
}

impl ScheduleDocument {
    /// Days, if this is a day/session schedule.
    pub fn days(&self) -> Option<&[Day]> {
        match &self.body {
            ScheduleBody::Days(days) => Some(days),
            _ => None,
        }
    }

    /// Sessions, if this is an outline schedule.
    pub fn sessions(&self) -> Option<&[OutlineSession]> {
        match &self.body {
            ScheduleBody::Sessions(sessions) => Some(sessions),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_days_schema() {
        let doc: ScheduleDocument = serde_json::from_str(
            r#"{
                "tutorialInfo": {"date": "June 1", "time": "9:00", "location": "Room 1"},
                "days": [{"dayTitle": "Day 1", "date": "June 1", "sessions": [
                    {"time": "9:00", "title": "Intro", "topics": ["a", "b"]},
                    {"time": "10:00", "title": "Coffee", "isBreak": true}
                ]}]
            }"#,
        )
        .unwrap();

        let days = doc.days().unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].sessions[0].topics, vec!["a", "b"]);
        assert!(days[0].sessions[1].is_break);
        assert!(doc.sessions().is_none());
        assert_eq!(doc.tutorial_info.unwrap().location.as_deref(), Some("Room 1"));
    }

    #[test]
    fn test_detects_sessions_schema() {
        let doc: ScheduleDocument = serde_json::from_str(
            r#"{"sessions": [
                {"sessionTitle": "Foundations", "duration": "60 min", "segments": [
                    {"time": "9:00", "title": "Basics", "papers": [
                        {"title": "P", "url": "http://p", "authors": "X et al.", "venue": "ICML"}
                    ]}
                ]},
                {"isBreak": true, "title": "Lunch", "duration": "45 min"}
            ]}"#,
        )
        .unwrap();

        let sessions = doc.sessions().unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(
            sessions[0].segments[0].papers[0].link.as_deref(),
            Some("http://p")
        );
        assert!(sessions[1].is_break);
    }

    #[test]
    fn test_days_win_when_both_keys_present() {
        let doc: ScheduleDocument =
            serde_json::from_str(r#"{"days": [], "sessions": []}"#).unwrap();
        assert_eq!(doc.body, ScheduleBody::Days(Vec::new()));
    }

    #[test]
    fn test_missing_keys_is_empty() {
        let doc: ScheduleDocument = serde_json::from_str(r#"{"tutorialInfo": {}}"#).unwrap();
        assert_eq!(doc.body, ScheduleBody::Empty);
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let doc: ScheduleDocument = serde_json::from_str(
            r#"{"sessions": [{"sessionTitle": "S", "segments": [
                {"time": "9", "title": "T", "topics": null, "papers": null}
            ]}, {"isBreak": true, "title": "Lunch", "segments": null}]}"#,
        )
        .unwrap();

        let sessions = doc.sessions().unwrap();
        let segment = &sessions[0].segments[0];
        assert_eq!(segment.title, "T");
        assert!(segment.topics.is_empty());
        assert!(segment.papers.is_empty());
        assert!(sessions[1].segments.is_empty());
    }

    #[test]
    fn test_null_break_topics_and_sessions() {
        let doc: ScheduleDocument = serde_json::from_str(
            r#"{"days": [
                {"dayTitle": "Day 1", "date": null, "sessions": [
                    {"time": "10:00", "title": "Coffee", "isBreak": true, "topics": null}
                ]},
                {"dayTitle": "Day 2", "date": "June 2", "sessions": null}
            ]}"#,
        )
        .unwrap();

        let days = doc.days().unwrap();
        assert!(days[0].sessions[0].is_break);
        assert!(days[0].sessions[0].topics.is_empty());
        assert_eq!(days[0].date, "");
        assert!(days[1].sessions.is_empty());
    }
}
