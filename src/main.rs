use std::fs;

use clap::Parser;
use treemath::solve_expression;

/// treemath evaluates an arithmetic expression by growing it into a
/// precedence-ordered binary tree and reducing the tree to one number.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells treemath to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match solve_expression(expression.trim()) {
        Ok(result) => println!("{result}"),
        Err(e) => eprintln!("{e}"),
    }
}
