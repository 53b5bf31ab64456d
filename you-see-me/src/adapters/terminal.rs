use std::io::{self, Write};

use colored::Colorize;
use geoip_rs::{IpData, Provider};

use crate::domain::ports::presenter::Presenter;

const RULE: &str = "------------------------------------";

const MISSING: &str = "N/A";

const NO_DATA: &str = "No data found for the provided IP.";

/// Label shown to the user and the provider field it is read from.
const FIELDS: [(&str, &str); 10] = [
    ("IP", "ip"),
    ("City", "city"),
    ("Region", "region"),
    ("Country", "country_name"),
    ("Continent", "continent_name"),
    ("Time Zone", "time_zone"),
    ("Currency", "currency"),
    ("Calling Code", "calling_code"),
    ("Organisation", "organisation"),
    ("ASN", "asn"),
];

pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Uncolored result rows, one per known field.
pub fn render_rows(data: &IpData) -> Vec<String> {
    FIELDS
        .iter()
        .map(|(label, key)| {
            let value = match (*key, data.field(key)) {
                ("calling_code", Some(code)) => format!("+{}", code.trim_start_matches('+')),
                (_, Some(value)) => value,
                (_, None) => MISSING.to_string(),
            };
            format!(" {:<13}:  {}", label, value)
        })
        .collect()
}

/// The whole result block: framed rows, or the no-data line when there is nothing to show.
pub fn render_result(data: Option<&IpData>) -> Vec<String> {
    match data {
        Some(data) if !data.is_empty() => {
            let mut lines = Vec::with_capacity(FIELDS.len() + 2);
            lines.push(RULE.to_string());
            lines.extend(render_rows(data));
            lines.push(RULE.to_string());
            lines
        }
        _ => vec![NO_DATA.to_string()],
    }
}

impl Presenter for TerminalPresenter {
    fn banner(&self) {
        println!("{}", "YouSeeMe - IP Tracker".red().bold());
    }

    fn provider_status(&self, provider: &Provider, reachable: bool) {
        if reachable {
            println!("{}", format!("API URL {provider} is accessible.").green());
        } else {
            println!(
                "{}",
                format!("API URL {provider} is not accessible or requires authorization.").yellow()
            );
        }
    }

    fn no_providers(&self) {
        println!("{}", "No accessible API URLs found. Exiting.".red());
    }

    fn prompt(&self) {
        print!("Enter target IP address (or 'exit' to quit): ");
        // A failed flush only delays the prompt.
        let _ = io::stdout().flush();
    }

    fn empty_input(&self) {
        println!("{}", "Please enter a valid IP address.".red());
    }

    fn ip_data(&self, data: Option<&IpData>) {
        let found = data.is_some_and(|d| !d.is_empty());
        for line in render_result(data) {
            if !found {
                println!("{}", line.red());
            } else if line == RULE {
                println!("{line}");
            } else {
                println!("{}", line.green());
            }
        }
    }

    fn interrupted(&self) {
        println!("{}", "\nProgram terminated by user.".red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: serde_json::Value) -> IpData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn renders_known_fields_and_marks_missing_ones() {
        let rows = render_rows(&data(json!({ "ip": "8.8.8.8", "city": "Mountain View" })));

        assert_eq!(rows.len(), FIELDS.len());
        assert_eq!(rows[0], " IP           :  8.8.8.8");
        assert_eq!(rows[1], " City         :  Mountain View");
        assert_eq!(rows[2], " Region       :  N/A");
        assert_eq!(rows[7], " Calling Code :  N/A");
        assert_eq!(rows[9], " ASN          :  N/A");
    }

    #[test]
    fn prefixes_calling_code_once() {
        let rows = render_rows(&data(json!({ "calling_code": "1" })));
        assert_eq!(rows[7], " Calling Code :  +1");

        let rows = render_rows(&data(json!({ "calling_code": "+33" })));
        assert_eq!(rows[7], " Calling Code :  +33");
    }

    #[test]
    fn result_without_data_is_a_single_line() {
        assert_eq!(render_result(None), vec!["No data found for the provided IP."]);
        assert_eq!(
            render_result(Some(&data(json!({})))),
            vec!["No data found for the provided IP."]
        );
    }

    #[test]
    fn result_frames_rows_with_rules() {
        let lines = render_result(Some(&data(json!({ "ip": "8.8.8.8", "city": "Mountain View" }))));

        assert_eq!(lines.len(), FIELDS.len() + 2);
        assert_eq!(lines[0], RULE);
        assert_eq!(lines[1], " IP           :  8.8.8.8");
        assert_eq!(lines[2], " City         :  Mountain View");
        assert_eq!(lines[3], " Region       :  N/A");
        assert_eq!(lines[FIELDS.len() + 1], RULE);
    }

    #[test]
    fn renders_numeric_fields() {
        let rows = render_rows(&data(json!({ "asn": 15169, "calling_code": 1 })));
        assert_eq!(rows[7], " Calling Code :  +1");
        assert_eq!(rows[9], " ASN          :  15169");
    }
}
