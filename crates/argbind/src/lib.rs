//! POSIX-style argument parsing with declaration-driven struct binding.
//!
//! Two stages:
//! 1. [`parse`] maps raw argv tokens to an ordered multi-valued option map
//!    ([`ParsedArguments`]). Short flags (`-v`), short options with value
//!    (`-n bob`), grouped boolean flags (`-abc`), long options
//!    (`--name bob`) and a literal `--` end-of-options delimiter are
//!    supported. Parsing never fails.
//! 2. [`Binder`] resolves a static declaration table ([`Bindings`]) against
//!    that map, selects values per field, coerces them to the field's type
//!    ([`FromArg`]) and writes them through the registered setters.
//!
//! [`ArgBind`] ties both stages together for one command line and any
//! number of target objects, and exposes the trailing operands.
//!
//! ```
//! use argbind::{ArgBind, Bindings, OptionSpec, Options};
//!
//! #[derive(Default)]
//! struct Config {
//!     verbose: bool,
//!     name: String,
//! }
//!
//! impl Options for Config {
//!     fn bindings() -> Bindings<Self> {
//!         Bindings::<Self>::new()
//!             .flag(OptionSpec::new("verbose").short('v').long("verbose"), |c, v| {
//!                 c.verbose = v
//!             })
//!             .scalar(OptionSpec::new("name").short('n').long("name"), |c, v: String| {
//!                 c.name = v
//!             })
//!     }
//! }
//!
//! let mut config = Config::default();
//! let mut args = ArgBind::new(&["-v", "-n", "bob", "--", "input.txt"]);
//! args.bind(&mut config).unwrap();
//!
//! assert!(config.verbose);
//! assert_eq!(config.name, "bob");
//! assert_eq!(args.operands(), "input.txt");
//! ```

mod binder;
mod coerce;
mod declare;
mod error;
mod operands;
mod parser;
mod selector;

pub use binder::Binder;
pub use coerce::{FromArg, from_str_arg};
pub use declare::{Bindings, DeclaredOption, OptionSpec, Options};
pub use error::BindError;
pub use operands::resolve as resolve_operands;
pub use parser::{OPERANDS_KEY, ParsedArguments, parse};
pub use selector::select;

/// Single-use binding session: parses a command line once and binds any
/// number of target objects against it.
pub struct ArgBind {
    arguments: Vec<String>,
    parsed: ParsedArguments,
    binder: Binder,
    declared: Vec<DeclaredOption>,
}

impl ArgBind {
    /// Parses the given arguments (program name excluded).
    pub fn new<S: AsRef<str>>(arguments: &[S]) -> Self {
        let arguments: Vec<String> = arguments.iter().map(|s| s.as_ref().to_string()).collect();
        let parsed = parse(&arguments);
        tracing::debug!(
            tokens = arguments.len(),
            keys = parsed.len(),
            "parsed command line"
        );
        Self {
            arguments,
            parsed,
            binder: Binder::default(),
            declared: Vec::new(),
        }
    }

    /// Replaces the binder configuration.
    pub fn with_binder(mut self, binder: Binder) -> Self {
        self.binder = binder;
        self
    }

    /// Binds a target through its own declaration table.
    pub fn bind<T: Options + 'static>(&mut self, target: &mut T) -> Result<(), BindError> {
        self.bind_with(target, &T::bindings())
    }

    /// Binds a target through an explicit declaration table.
    ///
    /// The table's option metadata is remembered for operand recovery.
    pub fn bind_with<T: 'static>(
        &mut self,
        target: &mut T,
        bindings: &Bindings<T>,
    ) -> Result<(), BindError> {
        self.declared.extend(bindings.declared());
        self.binder.bind(target, bindings, &self.parsed)
    }

    /// The parsed option map.
    pub fn parsed(&self) -> &ParsedArguments {
        &self.parsed
    }

    /// Trailing operands, trimmed; empty when there are none.
    ///
    /// Prefers the tail captured by an explicit `--`. Without one, the
    /// boundary is recovered from the declarations of every target bound
    /// so far.
    pub fn operands(&self) -> String {
        match self.parsed.operands() {
            Some(tail) => tail.trim().to_string(),
            None => operands::resolve(&self.arguments, &self.declared)
                .trim()
                .to_string(),
        }
    }
}
