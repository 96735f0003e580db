// Built-in uses
use std::env;

/// Parses the provided fixture in a form of `VARIABLE_NAME=variable_value` lines.
/// Quotes around the value are stripped, empty lines are skipped.
pub fn parse_vars(fixture: &str) -> Vec<(String, String)> {
    fixture
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (name, value) = line.split_once('=').unwrap_or_else(|| {
                panic!("Incorrect line for setting environment variable: {}", line)
            });
            (name.to_string(), value.trim_matches('"').to_string())
        })
        .collect()
}

/// Parses the provided fixture and sets every variable in the process environment.
pub fn set_env(fixture: &str) {
    for (name, value) in parse_vars(fixture) {
        env::set_var(name, value);
    }
}
