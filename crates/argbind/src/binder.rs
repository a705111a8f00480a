//! Field binder: applies selected values onto target fields.

use crate::declare::Bindings;
use crate::error::BindError;
use crate::parser::ParsedArguments;
use crate::selector::select;

/// Binding configuration and driver.
///
/// Walks a declaration table in registration order and applies every field
/// for which the parsed arguments hold at least one value. Fields with no
/// values keep their prior state.
#[derive(Debug, Clone, Copy)]
pub struct Binder {
    use_first: bool,
    use_last: bool,
    fail_fast: bool,
}

impl Default for Binder {
    fn default() -> Self {
        Self {
            use_first: true,
            use_last: true,
            fail_fast: true,
        }
    }
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefer the first of multiple values for a scalar field (default).
    pub fn with_use_first(mut self, use_first: bool) -> Self {
        self.use_first = use_first;
        self
    }

    /// Prefer the last of multiple values for a scalar field. Only
    /// consulted when use-first is disabled. Disabling both makes multiple
    /// values for a scalar field an error.
    pub fn with_use_last(mut self, use_last: bool) -> Self {
        self.use_last = use_last;
        self
    }

    /// Abort on the first field failure (default). When disabled, failed
    /// fields keep their prior values and binding continues.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Binds every declared field of `target` that has parsed values.
    pub fn bind<T: 'static>(
        &self,
        target: &mut T,
        bindings: &Bindings<T>,
        parsed: &ParsedArguments,
    ) -> Result<(), BindError> {
        for binding in bindings.fields() {
            let Some(values) = select(parsed, &binding.spec) else {
                continue;
            };
            tracing::trace!(
                field = binding.spec.field(),
                values = values.len(),
                "binding field"
            );
            match (binding.apply)(target, &values, self) {
                Ok(()) => {}
                Err(err) if self.fail_fast => return Err(err),
                Err(err) => {
                    tracing::debug!(field = binding.spec.field(), %err, "field binding skipped")
                }
            }
        }
        Ok(())
    }

    /// Applies the configured single-value selection policy.
    pub fn select_value<'a>(
        &self,
        field: &'static str,
        values: &'a [String],
    ) -> Result<&'a str, BindError> {
        if !self.use_first && !self.use_last && values.len() > 1 {
            return Err(BindError::Ambiguous {
                field,
                values: values.to_vec(),
            });
        }
        let chosen = if self.use_first {
            values.first()
        } else {
            values.last()
        };
        Ok(chosen.map(String::as_str).unwrap_or_default())
    }
}
