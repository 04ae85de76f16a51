//! Schedule markup: day tables and the nested session outline.

use crate::models::{Day, DaySession, OutlineSession, Paper, Segment, TutorialInfo};
use crate::utils::{external_link, html_escape};

/// Date/time/location header. Empty when none of those are set.
pub fn tutorial_info(info: &TutorialInfo) -> String {
    let lines: Vec<String> = [
        ("Date", info.date.as_deref()),
        ("Time", info.time.as_deref()),
        ("Location", info.location.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        value.map(|v| format!("<p><strong>{}:</strong> {}</p>", label, html_escape(v)))
    })
    .collect();

    if lines.is_empty() {
        return String::new();
    }
    format!(r#"<div class="tutorial-info">{}</div>"#, lines.concat())
}

fn table_row(session: &DaySession) -> String {
    let time = html_escape(&session.time);
    let title = html_escape(&session.title);
    if session.is_break {
        return format!(
            r#"<tr class="break-row"><td>{}</td><td colspan="2">{}</td></tr>"#,
            time, title
        );
    }

    let topics = session
        .topics
        .iter()
        .map(|t| format!("• {}", html_escape(t)))
        .collect::<Vec<_>>()
        .join("<br>");
    format!("<tr><td>{}</td><td>{}</td><td>{}</td></tr>", time, title, topics)
}

/// One table per day, in document order.
///
/// Day headers are only emitted when there is more than one day; a lone
/// day would just repeat the page heading.
pub fn schedule_tables(info: Option<&TutorialInfo>, days: &[Day]) -> String {
    let mut html = info.map(tutorial_info).unwrap_or_default();
    let show_headers = days.len() > 1;

    for day in days {
        if show_headers {
            html.push_str(&format!(
                r#"<div class="day-header"><h3>{}</h3><p class="day-date">{}</p></div>"#,
                html_escape(&day.day_title),
                html_escape(&day.date)
            ));
        }

        let rows: String = day.sessions.iter().map(table_row).collect();
        html.push_str(&format!(
            concat!(
                r#"<div class="schedule-table-wrapper"><table class="schedule-table">"#,
                "<thead><tr><th>Time</th><th>Section</th><th>Topics</th></tr></thead>",
                "<tbody>{}</tbody></table></div>"
            ),
            rows
        ));
    }

    html
}

fn paper_card(paper: &Paper) -> String {
    let byline: Vec<&str> = [paper.authors.as_deref(), paper.venue.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    let byline = if byline.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span class="paper-authors">{}</span>"#,
            html_escape(&byline.join(", "))
        )
    };

    let inner = format!(
        r#"<span class="paper-title-text">{}</span>{}"#,
        html_escape(&paper.title),
        byline
    );
    format!(
        r#"<div class="paper-card">{}</div>"#,
        external_link(paper.href(), None, &inner)
    )
}

fn segment_block(segment: &Segment) -> String {
    let mut html = format!(
        r#"<div class="segment"><div class="segment-header"><span class="segment-time">{}</span><div class="segment-title">{}</div></div>"#,
        html_escape(&segment.time),
        html_escape(&segment.title)
    );

    if let Some(description) = segment.description.as_deref().filter(|d| !d.is_empty()) {
        html.push_str(&format!(
            r#"<div class="segment-description">{}</div>"#,
            html_escape(description)
        ));
    }

    if !segment.topics.is_empty() {
        html.push_str(r#"<ul class="segment-topics">"#);
        for topic in &segment.topics {
            html.push_str(&format!("<li>{}</li>", html_escape(topic)));
        }
        html.push_str("</ul>");
    }

    if !segment.papers.is_empty() {
        html.push_str(r#"<div class="segment-papers">"#);
        for paper in &segment.papers {
            html.push_str(&paper_card(paper));
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}

fn break_block(session: &OutlineSession) -> String {
    let duration = session
        .duration
        .as_deref()
        .map(|d| format!(r#"<div class="break-duration-text">{}</div>"#, html_escape(d)))
        .unwrap_or_default();
    format!(
        r#"<div class="outline-break"><div class="break-label">Break</div><div class="break-title">{}</div>{}</div>"#,
        html_escape(session.title.as_deref().unwrap_or_default()),
        duration
    )
}

/// Nested outline: numbered sessions with segments, and break dividers.
///
/// Breaks do not consume a session number.
pub fn outline(sessions: &[OutlineSession]) -> String {
    let mut html = String::new();
    let mut number = 0;

    for session in sessions {
        if session.is_break {
            html.push_str(&break_block(session));
            continue;
        }

        number += 1;
        let title = session
            .session_title
            .as_deref()
            .or(session.title.as_deref())
            .unwrap_or_default();
        let duration = session
            .duration
            .as_deref()
            .map(|d| format!(r#"<span class="session-duration">{}</span>"#, html_escape(d)))
            .unwrap_or_default();
        let segments: String = session.segments.iter().map(segment_block).collect();

        html.push_str(&format!(
            r#"<div class="outline-session"><div class="session-number">{}</div><h3 class="session-header-title">{}</h3>{}<div class="session-segments">{}</div></div>"#,
            number,
            html_escape(title),
            duration,
            segments
        ));
    }

    html
}
