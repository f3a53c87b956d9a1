use chrono::DateTime;

use crate::models::DisplayRecord;
use crate::store::StoreSnapshot;
use crate::view::ViewSnapshot;

const MISSING: &str = "n/a";

/// Formats one city card into a human-readable string
pub fn format_card(city: &str, record: &DisplayRecord) -> String {
    let mut output = format!("{}:\n", city);

    output.push_str(&format!("  Time: {}\n", format_time(record.time)));
    output.push_str(&format!(
        "  Temperature: {} - {}\n",
        format_number(record.temp_min, "\u{00b0}C"),
        format_number(record.temp_max, "\u{00b0}C")
    ));

    let conditions = match (&record.weather_desc, &record.weather_icon) {
        (Some(desc), Some(icon)) => format!("{} ({})", desc, icon),
        (Some(desc), None) => desc.clone(),
        (None, Some(icon)) => format!("({})", icon),
        (None, None) => MISSING.to_string(),
    };
    output.push_str(&format!("  Conditions: {}\n", conditions));

    output.push_str(&format!(
        "  Humidity: {}\n",
        format_number(record.humidity, "%")
    ));
    output.push_str(&format!(
        "  Wind Speed: {}\n",
        format_number(record.wind_speed, " m/s")
    ));

    output
}

/// Formats every stored card, in the order cities were first looked up
pub fn format_cards(store: &StoreSnapshot, view: &ViewSnapshot) -> String {
    let mut output = String::new();

    if let Some(message) = &view.field_message {
        output.push_str(&format!("{}\n\n", message));
    }
    if let Some(error) = &view.last_error {
        output.push_str(&format!("Last lookup failed: {}\n\n", error));
    }

    if view.loading {
        output.push_str("Weather lookup in progress, check again shortly.");
        return output;
    }
    if store.is_empty() {
        output.push_str("No weather checked yet. Use check_weather with a city name.");
        return output;
    }

    output.push_str("Weather:\n\n");
    for (city, record) in &store.entries {
        output.push_str(&format_card(city, record));
        output.push('\n');
    }
    output
}

fn format_number(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.1}{}", v, unit),
        None => MISSING.to_string(),
    }
}

fn format_time(dt: Option<i64>) -> String {
    dt.and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|time| time.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> DisplayRecord {
        DisplayRecord {
            city_name: "Paris".to_string(),
            time: Some(1_700_000_000),
            temp_min: Some(10.0),
            temp_max: Some(15.0),
            weather_icon: Some("01d".to_string()),
            weather_desc: Some("clear sky".to_string()),
            humidity: Some(60.0),
            wind_speed: Some(3.0),
        }
    }

    #[test]
    fn test_card_shows_all_fields() {
        let card = format_card("Paris", &paris());
        assert!(card.starts_with("Paris:\n"));
        assert!(card.contains("Time: 2023-11-14 22:13 UTC"));
        assert!(card.contains("Temperature: 10.0\u{00b0}C - 15.0\u{00b0}C"));
        assert!(card.contains("Conditions: clear sky (01d)"));
        assert!(card.contains("Humidity: 60.0%"));
        assert!(card.contains("Wind Speed: 3.0 m/s"));
    }

    #[test]
    fn test_card_missing_fields() {
        let record = DisplayRecord {
            city_name: "Nowhere".to_string(),
            time: None,
            temp_min: None,
            temp_max: None,
            weather_icon: None,
            weather_desc: None,
            humidity: None,
            wind_speed: None,
        };
        let card = format_card("Nowhere", &record);
        assert!(card.contains("Time: n/a"));
        assert!(card.contains("Temperature: n/a - n/a"));
        assert!(card.contains("Conditions: n/a"));
    }

    #[test]
    fn test_cards_in_store_order() {
        let mut oslo = paris();
        oslo.city_name = "Oslo".to_string();
        let store = StoreSnapshot {
            revision: 2,
            entries: vec![("Oslo".to_string(), oslo), ("Paris".to_string(), paris())],
        };
        let view = ViewSnapshot {
            results_visible: true,
            ..Default::default()
        };

        let output = format_cards(&store, &view);

        let oslo_at = output.find("Oslo:").unwrap();
        let paris_at = output.find("Paris:").unwrap();
        assert!(oslo_at < paris_at);
    }

    #[test]
    fn test_cards_report_last_error() {
        let view = ViewSnapshot {
            results_visible: true,
            last_error: Some("No location found for \"Atlantis\"".to_string()),
            ..Default::default()
        };

        let output = format_cards(&StoreSnapshot::default(), &view);

        assert!(output.contains("Last lookup failed"));
        assert!(output.contains("No weather checked yet"));
    }

    #[test]
    fn test_cards_while_lookup_in_progress() {
        let store = StoreSnapshot {
            revision: 1,
            entries: vec![("Paris".to_string(), paris())],
        };
        let view = ViewSnapshot {
            loading: true,
            results_visible: false,
            ..Default::default()
        };

        let output = format_cards(&store, &view);

        assert!(output.contains("in progress"));
        assert!(!output.contains("No weather checked yet"));
    }
}
