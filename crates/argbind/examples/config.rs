//! Binds a small config struct from the process command line.
//!
//! ```text
//! cargo run --example config -- -v -n demo -s 10 -s 20 report.txt
//! ```

use anyhow::Result;
use argbind::{ArgBind, Bindings, OptionSpec, Options};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Default)]
struct Config {
    verbose: bool,
    name: String,
    sizes: Vec<u32>,
}

impl Options for Config {
    fn bindings() -> Bindings<Self> {
        Bindings::<Self>::new()
            .flag(OptionSpec::new("verbose").short('v').long("verbose"), |c, v| {
                c.verbose = v
            })
            .scalar(OptionSpec::new("name").short('n').long("name"), |c, v: String| {
                c.name = v
            })
            .list(OptionSpec::new("sizes").short('s').long("size"), |c, v| {
                c.sizes = v
            })
    }
}

fn main() -> Result<()> {
    init_tracing();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut config = Config::default();
    let mut args = ArgBind::new(&argv);
    args.bind(&mut config)?;

    println!("config:   {config:?}");
    println!("operands: {}", args.operands());

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).compact().init();
}
