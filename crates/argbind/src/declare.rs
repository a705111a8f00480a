//! Static option declarations replacing runtime field discovery.
//!
//! Every bindable field of a target type is registered up front in a
//! [`Bindings`] table: the option names it answers to, whether it takes a
//! value, and a typed setter. The binder walks this table instead of
//! inspecting the target at run time.

use std::hash::Hash;

use indexmap::IndexSet;

use crate::binder::Binder;
use crate::coerce::FromArg;
use crate::error::BindError;

/// Names one bindable field: a short option and/or a long option.
///
/// At least one of the two names must be attached before the spec is
/// registered in a [`Bindings`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    field: &'static str,
    short: Option<char>,
    long: Option<&'static str>,
}

impl OptionSpec {
    /// Starts a spec for the given field name.
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            short: None,
            long: None,
        }
    }

    /// Attaches the single-character option name.
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Attaches the long option name.
    pub fn long(mut self, long: &'static str) -> Self {
        self.long = Some(long);
        self
    }

    /// The declared field name, used in error messages.
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    pub fn long_name(&self) -> Option<&'static str> {
        self.long
    }

    pub(crate) fn short_key(&self) -> Option<String> {
        self.short.map(|c| c.to_string())
    }
}

/// Option metadata consumed by the operand boundary resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclaredOption {
    pub short: Option<char>,
    pub long: Option<&'static str>,
    pub takes_value: bool,
}

pub(crate) struct FieldBinding<T> {
    pub(crate) spec: OptionSpec,
    pub(crate) takes_value: bool,
    pub(crate) apply: Box<dyn Fn(&mut T, &[String], &Binder) -> Result<(), BindError>>,
}

/// Declaration table for one target type.
///
/// Fields bind in registration order.
pub struct Bindings<T> {
    fields: Vec<FieldBinding<T>>,
}

impl<T: 'static> Bindings<T> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Boolean field; mere presence of the option binds `true`.
    pub fn flag(self, spec: OptionSpec, set: fn(&mut T, bool)) -> Self {
        self.register(spec, false, move |target, _values, _binder| {
            set(target, true);
            Ok(())
        })
    }

    /// Scalar field using the default coercion strategies of `U`.
    pub fn scalar<U: FromArg + 'static>(self, spec: OptionSpec, set: fn(&mut T, U)) -> Self {
        self.scalar_with(spec, U::from_arg, set)
    }

    /// Scalar field with a caller-supplied coercion strategy.
    pub fn scalar_with<U: 'static>(
        self,
        spec: OptionSpec,
        coerce: fn(&str) -> Option<U>,
        set: fn(&mut T, U),
    ) -> Self {
        let field = spec.field();
        self.register(spec, true, move |target, values, binder| {
            let raw = binder.select_value(field, values)?;
            let value = coerce(raw)
                .ok_or_else(|| BindError::coerce(field, raw, std::any::type_name::<U>()))?;
            set(target, value);
            Ok(())
        })
    }

    /// List field: the full ordered value list, each element coerced.
    pub fn list<U: FromArg + 'static>(self, spec: OptionSpec, set: fn(&mut T, Vec<U>)) -> Self {
        let field = spec.field();
        self.register(spec, true, move |target, values, _binder| {
            set(target, coerce_all(field, values)?);
            Ok(())
        })
    }

    /// Set field: insertion-ordered, deduplicated after coercion.
    pub fn set<U>(self, spec: OptionSpec, set: fn(&mut T, IndexSet<U>)) -> Self
    where
        U: FromArg + Hash + Eq + 'static,
    {
        let field = spec.field();
        self.register(spec, true, move |target, values, _binder| {
            let values: Vec<U> = coerce_all(field, values)?;
            set(target, values.into_iter().collect());
            Ok(())
        })
    }

    /// Array field: sized to the value count. A coercion failure on any
    /// element fails the whole bind and leaves the field untouched.
    pub fn array<U: FromArg + 'static>(self, spec: OptionSpec, set: fn(&mut T, Box<[U]>)) -> Self {
        let field = spec.field();
        self.register(spec, true, move |target, values, _binder| {
            let values: Vec<U> = coerce_all(field, values)?;
            set(target, values.into_boxed_slice());
            Ok(())
        })
    }

    /// Escape hatch for custom strategies and fallible write slots.
    ///
    /// The closure receives the selected raw values and the active binder
    /// configuration; [`Binder::select_value`] applies the single-value
    /// policy. Returning [`BindError::Mutation`] reports a rejected write.
    pub fn custom(
        self,
        spec: OptionSpec,
        takes_value: bool,
        apply: impl Fn(&mut T, &[String], &Binder) -> Result<(), BindError> + 'static,
    ) -> Self {
        self.register(spec, takes_value, apply)
    }

    fn register(
        mut self,
        spec: OptionSpec,
        takes_value: bool,
        apply: impl Fn(&mut T, &[String], &Binder) -> Result<(), BindError> + 'static,
    ) -> Self {
        assert!(
            spec.short_name().is_some() || spec.long_name().is_some(),
            "option spec for field '{}' declares neither a short nor a long name",
            spec.field()
        );
        self.fields.push(FieldBinding {
            spec,
            takes_value,
            apply: Box::new(apply),
        });
        self
    }

    pub(crate) fn fields(&self) -> &[FieldBinding<T>] {
        &self.fields
    }

    /// Option metadata of every registered field.
    pub fn declared(&self) -> Vec<DeclaredOption> {
        self.fields
            .iter()
            .map(|f| DeclaredOption {
                short: f.spec.short_name(),
                long: f.spec.long_name(),
                takes_value: f.takes_value,
            })
            .collect()
    }
}

impl<T: 'static> Default for Bindings<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Declaration discovery seam: a target type that knows its own table.
pub trait Options: Sized {
    fn bindings() -> Bindings<Self>;
}

fn coerce_all<U: FromArg>(field: &'static str, values: &[String]) -> Result<Vec<U>, BindError> {
    values
        .iter()
        .map(|raw| {
            U::from_arg(raw)
                .ok_or_else(|| BindError::coerce(field, raw, std::any::type_name::<U>()))
        })
        .collect()
}
