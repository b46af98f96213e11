// src/ports/text.rs
use crate::domain::{FilterOptions, Record};
use crate::util::text::or_unknown;

/// Plain-text rendering for the terminal.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn attribution(&self, record: &Record) -> String {
        format!(
            "— {}, {}",
            or_unknown(record.character.as_deref()),
            or_unknown(record.anime.as_deref())
        )
    }

    pub fn render_daily(&self, record: Option<&Record>) -> String {
        match record {
            Some(record) => format!("{}\n\n{}", record.quote, self.attribution(record)),
            None => "No quote of the day: the vault is empty.".to_string(),
        }
    }

    pub fn render_list(&self, records: &[&Record]) -> String {
        let mut out = format!("Showing {} quote(s):\n", records.len());
        for record in records {
            out.push_str(&format!(
                "\n> {}\n> {}\n---\n",
                record.quote,
                self.attribution(record)
            ));
        }
        out
    }

    pub fn render_options(&self, options: &FilterOptions) -> String {
        let section = |title: &str, values: &[String]| {
            if values.is_empty() {
                format!("{title}: (none)\n")
            } else {
                format!("{title}:\n{}\n", values.iter().map(|v| format!("  {v}")).collect::<Vec<_>>().join("\n"))
            }
        };
        format!(
            "{}{}",
            section("Anime", &options.anime),
            section("Characters", &options.characters)
        )
    }
}
