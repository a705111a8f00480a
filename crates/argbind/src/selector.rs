//! Value selection across an option's short and long names.

use indexmap::IndexSet;

use crate::declare::OptionSpec;
use crate::parser::ParsedArguments;

/// Selects the parsed values that apply to one option declaration.
///
/// Returns `None` when neither name was recorded, leaving the field
/// untouched. Otherwise the result is the union of both value lists in
/// short-name-first order, with order-preserving deduplication.
pub fn select(parsed: &ParsedArguments, spec: &OptionSpec) -> Option<Vec<String>> {
    let short = spec.short_key().and_then(|key| parsed.values(&key));
    let long = spec.long_name().and_then(|name| parsed.values(name));
    if short.is_none() && long.is_none() {
        return None;
    }
    let mut values: IndexSet<&String> = IndexSet::new();
    for value in short.into_iter().flatten().chain(long.into_iter().flatten()) {
        values.insert(value);
    }
    Some(values.into_iter().cloned().collect())
}
