//! mbti: cognitive-function stacks for Myers-Briggs types
//!
//! ## Example Usage
//!
//! ```bash
//! # Print the primary stack of a type (any case, any letter order)
//! mbti entj
//! # ENTJ -> [Te, Ni, Se, Fi]
//!
//! # Full report with shadow stack and complement
//! mbti --json infp
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use mbti::config::Config;
use mbti::{logging, output, Type};

#[derive(Parser)]
#[command(
    name = "mbti",
    author,
    version,
    about = "Cognitive-function stacks for Myers-Briggs types"
)]
struct Cli {
    /// Four-letter type code, e.g. ENTJ (case and letter order are ignored)
    #[arg(value_name = "TYPE")]
    codes: Vec<String>,

    /// Output as JSON instead of human-readable format
    #[arg(long)]
    json: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let Cli {
        codes,
        json,
        verbose,
    } = Cli::parse();
    let config = Config::from_env().with_flags(json, verbose);
    logging::init(&config.log_filter);
    debug!(?config, "resolved config");

    let [code] = codes.as_slice() else {
        println!("{}", output::USAGE);
        return Ok(());
    };

    let ty: Type = code.parse()?;
    debug!(input = %code, code = %ty.code(), "parsed type");
    println!("{}", output::render(&ty, config.json)?);
    Ok(())
}
