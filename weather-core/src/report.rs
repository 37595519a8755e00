//! Text rendering of a weather payload.

use tracing::debug;

use crate::model::{CurrentConditions, Units, WeatherPayload};

pub const NO_DATA_MESSAGE: &str = "No data available to display.";

/// Render the report for a fetched payload, or the "no data" message when the
/// fetch failed.
///
/// A payload that lacks the fields of a report produces a single error line
/// naming the location, or `unknown` if the payload has no name either.
pub fn render(payload: Option<&WeatherPayload>, units: Units) -> String {
    let Some(payload) = payload else {
        return NO_DATA_MESSAGE.to_string();
    };

    match CurrentConditions::from_payload(payload) {
        Ok(conditions) => render_conditions(&conditions, units),
        Err(err) => {
            debug!(error = %err, "payload is missing report fields");
            format!(
                "Error: Unable to retrieve weather data for {}.",
                payload.name().unwrap_or("unknown")
            )
        }
    }
}

fn render_conditions(conditions: &CurrentConditions, units: Units) -> String {
    let symbol = units.temperature_symbol();

    [
        format!("Weather in {}:", capitalize(&conditions.location_name)),
        format!("Temperature: {}{symbol}", conditions.temperature),
        format!("Feels like: {}{symbol}", conditions.feels_like),
        format!("Condition: {}", conditions.condition),
        format!("Humidity: {}%", conditions.humidity_pct),
        format!("Pressure: {} hPa", conditions.pressure_hpa),
        format!("Visibility: {}", format_visibility(conditions.visibility_m)),
        format!("Wind Speed: {} m/s", conditions.wind_speed_mps),
    ]
    .join("\n")
}

fn format_visibility(meters: Option<f64>) -> String {
    match meters {
        Some(m) => format!("{:.2} km", m / 1000.0),
        None => "n/a".to_string(),
    }
}

/// Upper-case the first character, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn london() -> Value {
        json!({
            "name": "london",
            "main": { "temp": 15, "feels_like": 14, "humidity": 60, "pressure": 1012 },
            "weather": [{ "description": "clear sky" }],
            "wind": { "speed": 3.5 },
            "visibility": 10000
        })
    }

    fn render_value(value: Value, units: Units) -> String {
        render(Some(&WeatherPayload::from(value)), units)
    }

    #[test]
    fn renders_full_metric_report_in_order() {
        let report = render_value(london(), Units::Metric);
        let expected = [
            "Weather in London:",
            "Temperature: 15°C",
            "Feels like: 14°C",
            "Condition: clear sky",
            "Humidity: 60%",
            "Pressure: 1012 hPa",
            "Visibility: 10.00 km",
            "Wind Speed: 3.5 m/s",
        ];
        assert_eq!(report.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn temperature_symbol_follows_units() {
        let imperial = render_value(london(), Units::Imperial);
        assert!(imperial.contains("Temperature: 15°F"));
        assert!(imperial.contains("Feels like: 14°F"));

        let standard = render_value(london(), Units::Standard);
        assert!(standard.contains("Temperature: 15K"));
        assert!(standard.contains("Feels like: 14K"));
    }

    #[test]
    fn fractional_values_keep_their_precision() {
        let mut value = london();
        value["main"]["temp"] = json!(288.71);
        value["main"]["feels_like"] = json!(-0.5);
        let report = render_value(value, Units::Standard);
        assert!(report.contains("Temperature: 288.71K"));
        assert!(report.contains("Feels like: -0.5K"));
    }

    #[test]
    fn numbers_print_as_the_provider_sent_them() {
        let mut value = london();
        value["main"]["temp"] = json!(15.0);
        value["main"]["feels_like"] = json!(14);
        value["main"]["pressure"] = json!(1012.0);
        value["wind"]["speed"] = json!(4.0);
        let report = render_value(value, Units::Metric);
        assert!(report.contains("Temperature: 15.0°C"));
        assert!(report.contains("Feels like: 14°C"));
        assert!(report.contains("Pressure: 1012.0 hPa"));
        assert!(report.contains("Wind Speed: 4.0 m/s"));
    }

    #[test]
    fn visibility_is_meters_over_a_thousand_with_two_decimals() {
        for (meters, shown) in [(10000, "10.00"), (1234, "1.23"), (999, "1.00"), (0, "0.00")] {
            let mut value = london();
            value["visibility"] = json!(meters);
            for units in Units::all() {
                let report = render_value(value.clone(), *units);
                assert!(
                    report.contains(&format!("Visibility: {shown} km")),
                    "{meters} m in {units}: {report}"
                );
            }
        }
    }

    #[test]
    fn missing_visibility_is_shown_as_unavailable() {
        let mut value = london();
        value.as_object_mut().unwrap().remove("visibility");
        let report = render_value(value, Units::Metric);
        assert!(report.contains("Visibility: n/a"));
        assert!(report.contains("Wind Speed: 3.5 m/s"));
    }

    #[test]
    fn capitalizes_only_the_first_letter() {
        let mut value = london();
        value["name"] = json!("san FRANCISCO");
        let report = render_value(value, Units::Metric);
        assert!(report.starts_with("Weather in San FRANCISCO:"));

        value = london();
        value["name"] = json!("Ångström");
        assert!(render_value(value, Units::Metric).starts_with("Weather in Ångström:"));
    }

    #[test]
    fn absent_payload_renders_no_data_only() {
        assert_eq!(render(None, Units::Metric), "No data available to display.");
        assert_eq!(render(None, Units::Imperial), NO_DATA_MESSAGE);
    }

    #[test]
    fn missing_main_names_the_city() {
        let mut value = london();
        value.as_object_mut().unwrap().remove("main");
        assert_eq!(
            render_value(value, Units::Metric),
            "Error: Unable to retrieve weather data for london."
        );
    }

    #[test]
    fn missing_weather_without_name_says_unknown() {
        let value = json!({ "cod": "404", "message": "city not found" });
        assert_eq!(
            render_value(value, Units::Metric),
            "Error: Unable to retrieve weather data for unknown."
        );
    }

    #[test]
    fn empty_condition_list_is_an_error_line() {
        let mut value = london();
        value["weather"] = json!([]);
        assert_eq!(
            render_value(value, Units::Metric),
            "Error: Unable to retrieve weather data for london."
        );
    }

    #[test]
    fn capitalize_handles_empty_and_multibyte() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("été"), "Été");
        assert_eq!(capitalize("ß"), "SS");
    }
}
