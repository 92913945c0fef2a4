//! HTML rendering for the DQ counter page.

use dq_counter::EventSummary;
use dq_counter::export::EXPORT_FILE_NAME;

/// What the page shows below the form
pub enum Outcome {
    Summary { summary: EventSummary, csv: Vec<u8> },
    Error(String),
}

/// Everything needed to render the page
pub struct PageView<'a> {
    pub event_input: &'a str,
    pub has_default_token: bool,
    pub outcome: Option<Outcome>,
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;display:flex;color:#262730}\
aside{width:18rem;padding:1.5rem;background:#f0f2f6;min-height:100vh;box-sizing:border-box}\
main{max-width:46rem;padding:2rem 3rem;flex:1}\
.caption{color:#6b6f76;font-size:.9rem}\
.metrics{display:flex;gap:1rem;margin:1.5rem 0}\
.metric{flex:1}\
.metric .label{font-size:.9rem;color:#6b6f76}\
.metric .value{font-size:2.2rem}\
.error{background:#ffe9e9;color:#7d1a1a;padding:.8rem 1rem;border-radius:.4rem;white-space:pre-wrap}\
.info{background:#e8f1fb;color:#0b4c8c;padding:.8rem 1rem;border-radius:.4rem}\
table{border-collapse:collapse;width:100%}\
th,td{border-bottom:1px solid #e6e6e6;padding:.4rem .6rem;text-align:left}\
input[type=text],input[type=password]{width:100%;padding:.5rem;box-sizing:border-box}\
button,.download{margin-top:.8rem;padding:.5rem 1rem;border-radius:.4rem;border:1px solid #ff4b4b;\
background:#ff4b4b;color:#fff;text-decoration:none;display:inline-block;cursor:pointer}";

/// Render the full page
pub fn render_page(view: &PageView<'_>) -> String {
    let token_help = if view.has_default_token {
        "Leave blank to use the server's START_GG_TOKEN."
    } else {
        "From start.gg developer settings."
    };

    let outcome = match &view.outcome {
        None => String::new(),
        Some(Outcome::Error(message)) => {
            format!("<div class=\"error\">{}</div>", escape_html(message))
        }
        Some(Outcome::Summary { summary, csv }) => render_summary(summary, csv),
    };

    format!(
        "<!DOCTYPE html>\
<html lang=\"en\"><head><meta charset=\"utf-8\">\
<title>start.gg Event DQ Counter</title><style>{STYLE}</style></head><body>\
<aside>\
<label for=\"token\">API Token (Bearer)</label>\
<input type=\"password\" id=\"token\" name=\"token\" form=\"count\" autocomplete=\"off\">\
<p class=\"caption\">{token_help}</p><hr>\
<p><strong>Tips</strong></p><ul class=\"caption\">\
<li>Example URL: <code>https://www.start.gg/tournament/&lt;slug&gt;/event/&lt;slug&gt;</code></li>\
<li>You can set <code>START_GG_TOKEN</code> in a <code>.env</code> file to prefill.</li>\
</ul></aside>\
<main><h1>start.gg Event DQ Counter</h1>\
<p class=\"caption\">Enter an Event URL or Event ID. Uses GraphQL <code>event -&gt; entrants</code> \
and <code>Entrant.isDisqualified</code>.</p>\
<form id=\"count\" method=\"post\" action=\"/count\">\
<label for=\"event\">Event URL or numeric Event ID</label>\
<input type=\"text\" id=\"event\" name=\"event\" value=\"{event}\" \
placeholder=\"https://www.start.gg/tournament/.../event/...\">\
<button type=\"submit\">Count DQs</button></form>\
{outcome}</main></body></html>",
        event = escape_html(view.event_input),
    )
}

fn render_summary(summary: &EventSummary, csv: &[u8]) -> String {
    let mut html = format!(
        "<div class=\"metrics\">\
<div class=\"metric\"><div class=\"label\">Total Players (summary)</div><div class=\"value\">{}</div></div>\
<div class=\"metric\"><div class=\"label\">Disqualifications</div><div class=\"value\">{}</div></div>\
</div><h2>{}</h2><p class=\"caption\">Event ID: {} • Slug: {}</p>",
        summary.total_players,
        summary.dq_count,
        escape_html(summary.event_name.as_deref().unwrap_or("Event")),
        summary.event_id,
        escape_html(summary.event_slug.as_deref().unwrap_or("unknown")),
    );

    if summary.dq_rows.is_empty() {
        html.push_str("<div class=\"info\">No disqualifications found for this event.</div>");
        return html;
    }

    html.push_str(
        "<h3>DQ Entrants</h3><table><thead><tr>\
<th>Entrant Name</th><th>Participants</th><th>Entrant ID</th></tr></thead><tbody>",
    );
    for row in &summary.dq_rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(row.entrant_name.as_deref().unwrap_or_default()),
            escape_html(&row.participants),
            row.entrant_id.map(|id| id.to_string()).unwrap_or_default(),
        ));
    }
    html.push_str("</tbody></table>");

    html.push_str(&format!(
        "<a class=\"download\" download=\"{EXPORT_FILE_NAME}\" \
href=\"data:text/csv;charset=utf-8,{}\">Download CSV</a>",
        urlencoding::encode_binary(csv),
    ));

    html
}

/// Escape text for HTML element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
