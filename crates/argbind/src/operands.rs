//! Declaration-driven operand boundary recovery.
//!
//! Used when the parse captured no explicit `--` operand tail. Re-scans the
//! original tokens against every declared option and returns whatever
//! follows the last recognized construct.

use std::collections::HashSet;

use crate::declare::DeclaredOption;

/// Returns the space-joined operands of `args` given the declared options.
///
/// Boolean options consume one token, value-taking options consume two, and
/// a dash-prefixed token whose every character is a declared boolean short
/// consumes one. Unrecognized dash-prefixed tokens are not consumed, so
/// trailing unknown flags stay in the operand string from their own
/// position.
pub fn resolve<S: AsRef<str>>(args: &[S], declared: &[DeclaredOption]) -> String {
    let boolean_shorts: HashSet<char> = declared
        .iter()
        .filter(|option| !option.takes_value)
        .filter_map(|option| option.short)
        .collect();
    let boolean_longs: HashSet<&str> = declared
        .iter()
        .filter(|option| !option.takes_value)
        .filter_map(|option| option.long)
        .collect();
    let all_shorts: HashSet<char> = declared.iter().filter_map(|option| option.short).collect();
    let all_longs: HashSet<&str> = declared.iter().filter_map(|option| option.long).collect();

    let mut operands_index = 0;
    for (index, arg) in args.iter().enumerate() {
        let arg = arg.as_ref();
        if let Some(key) = arg.strip_prefix("--").filter(|key| !key.is_empty()) {
            if boolean_longs.contains(key) {
                operands_index = index + 1; // --verbose
            } else if all_longs.contains(key) {
                operands_index = index + 2; // --file input.txt
            }
        } else if let Some(key) = short_name(arg) {
            if boolean_shorts.contains(&key) {
                operands_index = index + 1; // -v
            } else if all_shorts.contains(&key) {
                operands_index = index + 2; // -f input.txt
            }
        } else if let Some(group) = arg.strip_prefix('-').filter(|g| g.chars().count() > 1) {
            if !boolean_shorts.is_empty() && group.chars().all(|c| boolean_shorts.contains(&c)) {
                operands_index = index + 1; // -cjvf
            }
        }
    }

    // A value-taking flag in last position would point past the end.
    let start = operands_index.min(args.len());
    args[start..]
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

fn short_name(arg: &str) -> Option<char> {
    let name = arg.strip_prefix('-')?;
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '-' => Some(c),
        _ => None,
    }
}
