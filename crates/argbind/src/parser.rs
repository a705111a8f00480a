//! Command line tokenizer: flat argv tokens to a multi-valued option map.

use indexmap::IndexMap;

/// Reserved key the operand tail is recorded under.
pub const OPERANDS_KEY: &str = "--";

/// Parsed command line arguments.
///
/// Maps option names (without their dash prefix) to the list of raw string
/// values recorded for them, in first-seen order. Exact duplicate values are
/// suppressed per key. The operand tail captured by an explicit `--` lives
/// under [`OPERANDS_KEY`] as a single space-joined string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    values: IndexMap<String, Vec<String>>,
}

impl ParsedArguments {
    /// All raw values recorded for an option name.
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// Whether anything was recorded for an option name.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The operand tail captured by an explicit `--`, if any.
    ///
    /// An empty tail after `--` is never recorded, so it is
    /// indistinguishable from "no delimiter seen".
    pub fn operands(&self) -> Option<&str> {
        self.values
            .get(OPERANDS_KEY)
            .and_then(|values| values.first().map(String::as_str))
    }

    /// Iterates `(name, values)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keys, the operand tail included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn add(&mut self, key: &str, value: &str) {
        let values = self.values.entry(key.to_string()).or_default();
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
}

/// Maps an array of command line tokens to a multi-valued option map.
///
/// Scans left to right; a token consumed as a value is still re-examined on
/// the next iteration, so `--a x -b -a` records `-a` both as the value of
/// `b` and as its own flag. Parsing never fails: tokens matching no rule
/// are ignored here and recoverable later as operands.
pub fn parse<S: AsRef<str>>(args: &[S]) -> ParsedArguments {
    let mut results = ParsedArguments::default();
    for i in 0..args.len() {
        let key = args[i].as_ref();
        let next = args.get(i + 1).map(|s| s.as_ref()).unwrap_or("");
        if key == OPERANDS_KEY {
            if !next.is_empty() {
                results.add(OPERANDS_KEY, &join(&args[i + 1..]));
            }
            break;
        } else if let Some(name) = long_option(key) {
            // A token that could itself be an option never becomes a long
            // option's value.
            let value = if next == OPERANDS_KEY || looks_like_option(next) {
                ""
            } else {
                next
            };
            results.add(name, value);
        } else if let Some(name) = short_option(key) {
            if next.is_empty() || next == OPERANDS_KEY {
                results.add(name, "true");
            } else {
                results.add(name, next);
            }
        } else if let Some(group) = boolean_group(key) {
            for flag in group.chars() {
                results.add(flag.encode_utf8(&mut [0u8; 4]), "true");
            }
        }
    }
    tracing::trace!(keys = results.len(), "parsed arguments");
    results
}

fn long_option(token: &str) -> Option<&str> {
    token.strip_prefix("--").filter(|name| !name.is_empty())
}

fn short_option(token: &str) -> Option<&str> {
    let name = token.strip_prefix('-')?;
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '-' => Some(name),
        _ => None,
    }
}

fn boolean_group(token: &str) -> Option<&str> {
    token
        .strip_prefix('-')
        .filter(|group| group.chars().count() > 1)
}

/// A dash-prefixed token counts as an option unless it reads as a number:
/// `-5` or `-0.25` after a long option is a value, `-b` is not.
fn looks_like_option(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-') && token.parse::<f64>().is_err()
}

fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn of(line: &str) -> Vec<String> {
        line.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn single_value_short_options() {
        let parsed = parse(&["-a", "test a", "-b", "TEST B"]);

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.values("a").unwrap(), ["test a"]);
        assert_eq!(parsed.values("b").unwrap(), ["TEST B"]);
    }

    #[test]
    fn single_value_short_and_long_options() {
        let parsed = parse(&["--a", "test a", "-b", "TEST B"]);

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.values("a").unwrap(), ["test a"]);
        assert_eq!(parsed.values("b").unwrap(), ["TEST B"]);
    }

    #[test]
    fn multi_value_options_preserve_order() {
        let parsed = parse(&["--a", "test a", "-b", "TEST B", "--a", "other a"]);

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.values("a").unwrap(), ["test a", "other a"]);
        assert_eq!(parsed.values("b").unwrap(), ["TEST B"]);
    }

    #[test]
    fn flag_as_last_argument() {
        let parsed = parse(&["--a", "test a", "-b"]);

        assert_eq!(parsed.values("a").unwrap(), ["test a"]);
        assert_eq!(parsed.values("b").unwrap(), ["true"]);
    }

    #[test]
    fn operands_after_delimiter() {
        let parsed = parse(&of("--a aaa -b -- operand text -x not an option"));

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed.values("a").unwrap(), ["aaa"]);
        assert_eq!(parsed.values("b").unwrap(), ["true"]);
        assert_eq!(parsed.operands(), Some("operand text -x not an option"));
    }

    #[test]
    fn empty_operand_tail_is_not_recorded() {
        let parsed = parse(&of("--a aaa -b --"));

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.values("a").unwrap(), ["aaa"]);
        assert_eq!(parsed.values("b").unwrap(), ["true"]);
        assert_eq!(parsed.operands(), None);
    }

    #[test]
    fn duplicate_values_are_suppressed() {
        let parsed = parse(&["--a", "test a", "-b", "b value", "-a", "test a"]);

        assert_eq!(parsed.values("a").unwrap(), ["test a"]);
        assert_eq!(parsed.values("b").unwrap(), ["b value"]);
    }

    #[test]
    fn duplicate_keys_with_new_values_append() {
        let parsed = parse(&of("-a x -a x -a y"));

        assert_eq!(parsed.values("a").unwrap(), ["x", "y"]);
    }

    #[test]
    fn option_looking_token_is_consumed_as_short_option_value() {
        let parsed = parse(&["--a", "test a", "-b", "-a"]);

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.values("a").unwrap(), ["test a", "true"]);
        assert_eq!(parsed.values("b").unwrap(), ["-a"]);
    }

    #[test]
    fn option_looking_token_is_not_a_long_option_value() {
        let parsed = parse(&of("--a -b"));

        assert_eq!(parsed.values("a").unwrap(), [""]);
        assert_eq!(parsed.values("b").unwrap(), ["true"]);
    }

    #[test]
    fn negative_numbers_are_values() {
        let parsed = parse(&of("--threshold -5 -t -0.25"));

        assert_eq!(parsed.values("threshold").unwrap(), ["-5"]);
        assert_eq!(parsed.values("t").unwrap(), ["-0.25"]);
    }

    #[test]
    fn boolean_group_unpacks() {
        let parsed = parse(&["-abc"]);

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed.values("a").unwrap(), ["true"]);
        assert_eq!(parsed.values("b").unwrap(), ["true"]);
        assert_eq!(parsed.values("c").unwrap(), ["true"]);
    }

    #[test]
    fn end_of_options_before_and_after_values() {
        let parsed = parse(&of("-a 1 -- x y"));
        assert_eq!(parsed.values("a").unwrap(), ["1"]);
        assert_eq!(parsed.operands(), Some("x y"));

        let parsed = parse(&of("-a 1 --"));
        assert_eq!(parsed.values("a").unwrap(), ["1"]);
        assert_eq!(parsed.operands(), None);
    }

    #[test]
    fn flag_followed_by_delimiter_is_boolean() {
        let parsed = parse(&of("-a -- x"));

        assert_eq!(parsed.values("a").unwrap(), ["true"]);
        assert_eq!(parsed.operands(), Some("x"));
    }

    #[test]
    fn junk_tokens_are_ignored() {
        let parsed = parse(&of("1 - s ks 0-"));

        assert!(parsed.is_empty());
    }

    #[test]
    fn parsing_is_idempotent() {
        let args = of("--a aaa -b -1.5 -xyz -- tail here");

        assert_eq!(parse(&args), parse(&args));
    }
}
