//! String-to-value coercion strategies.

use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

/// One-string constructor for a field's semantic type.
///
/// Strategies return `None` instead of failing so the binder can report
/// coercion errors with full field context; no error-driven control flow.
/// Implement this for custom field types, or route through an existing
/// `FromStr` impl with [`from_str_arg`].
pub trait FromArg: Sized {
    fn from_arg(raw: &str) -> Option<Self>;
}

/// Coerces through the type's `FromStr` implementation.
pub fn from_str_arg<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

impl FromArg for String {
    fn from_arg(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FromArg for char {
    // A character field accepts exactly one character.
    fn from_arg(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl FromArg for PathBuf {
    fn from_arg(raw: &str) -> Option<Self> {
        Some(PathBuf::from(raw))
    }
}

impl FromArg for OsString {
    fn from_arg(raw: &str) -> Option<Self> {
        Some(OsString::from(raw))
    }
}

macro_rules! from_arg_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromArg for $ty {
                fn from_arg(raw: &str) -> Option<Self> {
                    from_str_arg(raw)
                }
            }
        )*
    };
}

from_arg_via_from_str!(
    bool,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    std::net::IpAddr,
    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::SocketAddr,
);
