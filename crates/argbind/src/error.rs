use std::error::Error;
use std::fmt;

/// Failure raised while binding parsed values onto a target field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// Multiple candidate values for a scalar field while both selection
    /// preferences are disabled.
    Ambiguous {
        field: &'static str,
        values: Vec<String>,
    },
    /// No coercion strategy could convert the raw value to the field type.
    Coerce {
        field: &'static str,
        value: String,
        target: &'static str,
    },
    /// The write slot rejected the value.
    Mutation {
        field: &'static str,
        reason: String,
    },
}

impl BindError {
    pub(crate) fn coerce(field: &'static str, value: &str, target: &'static str) -> Self {
        Self::Coerce {
            field,
            value: value.to_string(),
            target,
        }
    }

    /// Name of the declared field the failure belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Ambiguous { field, .. }
            | Self::Coerce { field, .. }
            | Self::Mutation { field, .. } => field,
        }
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ambiguous { field, values } => write!(
                f,
                "cannot select single value for '{field}' from [{}]",
                values.join(",")
            ),
            Self::Coerce {
                field,
                value,
                target,
            } => write!(f, "cannot map '{value}' to {target} for '{field}'"),
            Self::Mutation { field, reason } => write!(f, "cannot write '{field}': {reason}"),
        }
    }
}

impl Error for BindError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_message_enumerates_candidates() {
        let err = BindError::Ambiguous {
            field: "name",
            values: vec!["bob".to_string(), "jack".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "cannot select single value for 'name' from [bob,jack]"
        );
    }

    #[test]
    fn coerce_message_names_value_and_type() {
        let err = BindError::coerce("size", "ten", "u32");

        assert_eq!(err.field(), "size");
        assert_eq!(err.to_string(), "cannot map 'ten' to u32 for 'size'");
    }
}
