//! HTML rendering for eventfeed pages.
//!
//! Markup is assembled as plain strings; the `Render` trait adds an HTML
//! rendering to core types. Store-supplied text always goes through
//! `escape` before landing in a page.

use eventfeed_core::{Event, Period};

/// Extension trait for HTML rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let mut parts = Vec::new();

        if let Some(image) = &self.image {
            parts.push(format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape(image),
                escape(&self.title)
            ));
        }
        parts.push(format!("<h2>{}</h2>", escape(&self.title)));
        parts.push(format!(
            "<time datetime=\"{}\">{}</time>",
            self.date,
            self.date.format("%B %-d, %Y")
        ));
        if let Some(location) = &self.location {
            parts.push(format!("<address>{}</address>", escape(location)));
        }
        if let Some(description) = &self.description {
            parts.push(format!("<p>{}</p>", escape(description)));
        }
        parts.push(format!(
            "<a href=\"/events/{}/{}\">Explore {}</a>",
            self.date.format("%Y"),
            self.date.format("%-m"),
            self.date.format("%B %Y")
        ));

        format!("<article class=\"event-item\">{}</article>", parts.join(""))
    }
}

impl Render for Period {
    fn render(&self) -> String {
        format!("<h1>Events in {}</h1>", self.label())
    }
}

/// Full page shell with title and description meta.
pub fn page(title: &str, description: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         <meta name=\"description\" content=\"{}\">\n\
         </head>\n\
         <body>\n{}\n</body>\n\
         </html>\n",
        escape(title),
        escape(description),
        body
    )
}

/// Unordered list of event cards, in the order given.
pub fn event_list(events: &[Event]) -> String {
    let items: Vec<String> = events
        .iter()
        .map(|event| format!("<li>{}</li>", event.render()))
        .collect();

    format!("<ul class=\"events-list\">\n{}\n</ul>", items.join("\n"))
}

/// Alert box plus the link back to the unfiltered list.
pub fn alert(message: &str) -> String {
    format!(
        "<section class=\"alert\"><p>{}</p></section>\n\
         <div class=\"center\"><a href=\"/events\">Show All Events</a></div>",
        escape(message)
    )
}

/// Year/month search form, submitting to the redirect endpoint.
pub fn search_form() -> String {
    let years: Vec<String> = (eventfeed_core::MIN_FILTER_YEAR..=eventfeed_core::MAX_FILTER_YEAR)
        .map(|year| format!("<option value=\"{year}\">{year}</option>"))
        .collect();
    let months: Vec<String> = (1..=12)
        .map(|month| format!("<option value=\"{month}\">{month}</option>"))
        .collect();

    format!(
        "<form class=\"events-search\" action=\"/events/search\" method=\"get\">\n\
         <label for=\"year\">Year</label>\n\
         <select id=\"year\" name=\"year\">{}</select>\n\
         <label for=\"month\">Month</label>\n\
         <select id=\"month\" name=\"month\">{}</select>\n\
         <button>Find Events</button>\n\
         </form>",
        years.join(""),
        months.join("")
    )
}

/// Minimal HTML escaping for store-supplied text.
fn escape(text: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event() -> Event {
        Event {
            id: "e1".to_string(),
            title: "Coding <together>".to_string(),
            date: NaiveDate::from_ymd_opt(2022, 5, 10).unwrap(),
            description: Some("Bring your laptop & ideas".to_string()),
            location: None,
            image: None,
            is_featured: false,
        }
    }

    #[test]
    fn test_event_markup_is_escaped() {
        let html = event().render();

        assert!(html.contains("Coding &lt;together&gt;"));
        assert!(html.contains("Bring your laptop &amp; ideas"));
        assert!(!html.contains("<together>"));
    }

    #[test]
    fn test_event_markup_links_to_its_period() {
        let html = event().render();
        assert!(html.contains("href=\"/events/2022/5\""));
        assert!(html.contains("May 10, 2022"));
    }

    #[test]
    fn test_period_render_uses_label() {
        let html = Period { year: 2022, month: 5 }.render();
        assert_eq!(html, "<h1>Events in May 2022</h1>");
    }

    #[test]
    fn test_alert_keeps_show_all_link() {
        let html = alert("No events found for the chosen filter!");
        assert!(html.contains("href=\"/events\""));
        assert!(html.contains("No events found"));
    }

    #[test]
    fn test_page_carries_title_and_description() {
        let html = page("All Events", "Browse every event", "<p>x</p>");
        assert!(html.contains("<title>All Events</title>"));
        assert!(html.contains("content=\"Browse every event\""));
        assert!(html.contains("<p>x</p>"));
    }
}
