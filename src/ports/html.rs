// src/ports/html.rs
use html_escape::encode_text;
use tracing::instrument;

use crate::application::QuoteBrowser;
use crate::domain::Record;
use crate::util::text::or_unknown;

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    fn render_quote(&self, record: &Record) -> String {
        format!(
            r#"<blockquote class="quote">
            <p><em>{quote}</em></p>
            <footer>— <strong>{character}</strong>, <cite>{anime}</cite></footer>
        </blockquote>"#,
            quote = encode_text(&record.quote),
            character = encode_text(or_unknown(record.character.as_deref())),
            anime = encode_text(or_unknown(record.anime.as_deref())),
        )
    }

    fn render_daily(&self, record: Option<&Record>) -> String {
        match record {
            Some(record) => self.render_quote(record),
            None => r#"<p class="empty">The vault is empty.</p>"#.to_string(),
        }
    }

    #[instrument(level = "debug", skip_all, fields(generation = browser.generation()))]
    pub fn render(&self, browser: &QuoteBrowser) -> String {
        let visible = browser.visible_records();
        let quotes = visible
            .iter()
            .map(|record| self.render_quote(record))
            .collect::<Vec<_>>()
            .join("\n        <hr>\n        ");

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Anime Wisdom Vault</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .daily {{
            background: #e8f1fb;
            border-radius: 8px;
            padding: 1rem 2rem;
        }}
        .quote {{
            margin: 1rem 0;
            padding-left: 1rem;
            border-left: 4px solid #ccc;
        }}
        .info {{
            font-size: 0.9em;
            color: #666;
        }}
    </style>
</head>
<body>
    <h1>Anime Wisdom Vault</h1>
    <p class="info">{size} quote(s) in the vault, generation {generation}</p>
    <section class="daily">
        <h2>Quote of the Day ({today})</h2>
        {daily}
    </section>
    <section class="quotes">
        <h2>Quotes</h2>
        <p>Showing {count} quote(s):</p>
        {quotes}
    </section>
</body>
</html>"#,
            size = browser.catalog_size(),
            generation = browser.generation(),
            today = browser.today(),
            daily = self.render_daily(browser.daily_quote()),
            count = visible.len(),
            quotes = quotes,
        )
    }
}
