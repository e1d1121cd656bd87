//! Environment variable validation with typo suggestions
//!
//! Invalid values fall back to the default and print a warning naming the
//! variable, the accepted values and the closest match.

use std::io::Write;

/// Validator for one environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, warning on stderr and returning `default` if invalid
    pub fn parse<T, F>(&self, value: &str, parser: F, default: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, default, &mut std::io::stderr())
    }

    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        default: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value.trim()) {
            return parsed;
        }

        let suggestion = match closest(&value.trim().to_lowercase(), self.valid_values) {
            Some(s) if !s.eq_ignore_ascii_case(value.trim()) => {
                format!(". Did you mean '{}'?", s)
            }
            _ => String::new(),
        };
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name, value, suggestion
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        default
    }
}

/// Closest candidate within two edits
pub(crate) fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    candidates
        .iter()
        .map(|c| (*c, levenshtein(input, c)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(c, _)| c)
}

/// Levenshtein distance over bytes
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
