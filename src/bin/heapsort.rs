//! Sort integers from the command line or standard input.
//!
//! Build/run:
//!   cargo run --features cli --bin heapsort -- 5 3 8 1 9 2
//!   echo "5 3 8 1 9 2" | cargo run --features cli --bin heapsort -- --reverse

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "heapsort", about = "Sort integers with heap sort")]
struct Args {
    /// Values to sort. Read whitespace-separated from stdin when omitted.
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Print in non-increasing order.
    #[arg(short, long)]
    reverse: bool,

    /// Separator placed between printed values.
    #[arg(short, long, default_value = " ")]
    separator: String,
}

fn parse_values<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Vec<i64>> {
    tokens
        .into_iter()
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<i64>()
                .with_context(|| format!("value #{} ('{}') is not an integer", i + 1, token))
        })
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut values = if args.values.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        parse_values(input.split_whitespace())?
    } else {
        parse_values(args.values.iter().map(String::as_str))?
    };

    if args.reverse {
        heapsort::sort_by(&mut values, |x, y| y.cmp(x));
    } else {
        heapsort::sort(&mut values);
    }

    let line = values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(&args.separator);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}").context("failed to write output")?;
    Ok(())
}
