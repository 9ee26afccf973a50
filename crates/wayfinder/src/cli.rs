//! Catalog inspection commands

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table};
use wayfinder_core::{nav_items, Locale, Translator};

pub fn run_locales(json: bool) {
    if json {
        println!("{}", locales_json());
    } else {
        println!("{}", locales_table());
    }
}

pub fn run_translate(key: &str, locale: Locale) -> Result<()> {
    let translator = Translator::new().context("Failed to load message catalogs")?;
    if !translator.has_message(locale, key) {
        tracing::warn!(key, locale = locale.code(), "Message not in catalog");
    }
    println!("{}", translator.tr(locale, key));
    Ok(())
}

fn locales_json() -> serde_json::Value {
    serde_json::json!(Locale::ALL
        .iter()
        .map(|locale| serde_json::json!({
            "code": locale.code(),
            "label": locale.label(),
            "default": *locale == Locale::DEFAULT,
        }))
        .collect::<Vec<_>>())
}

fn locales_table() -> String {
    let translator = Translator::new().unwrap_or_else(|e| {
        tracing::error!("Failed to load message catalogs: {}", e);
        Translator::empty()
    });

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["Code".to_string(), "Label".to_string()];
    header.extend(nav_items().iter().map(|item| item.key.to_string()));
    table.set_header(header);

    for locale in Locale::ALL {
        let mut row = vec![locale.code().to_string(), locale.label().to_string()];
        row.extend(nav_items().iter().map(|item| translator.tr(locale, item.key)));
        table.add_row(row);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locales_json_marks_default() {
        let json = locales_json();
        assert_eq!(json[0]["code"], "en");
        assert_eq!(json[0]["default"], true);
        assert_eq!(json[1]["code"], "ja");
        assert_eq!(json[1]["default"], false);
    }

    #[test]
    fn test_locales_table_lists_translations() {
        let table = locales_table();
        assert!(table.contains("English"));
        assert!(table.contains("Japanese"));
        assert!(table.contains("Members"));
        assert!(table.contains("メンバー"));
    }

    #[test]
    fn test_translate_unknown_key_is_not_an_error() {
        assert!(run_translate("no-such-message", Locale::Ja).is_ok());
    }
}
