use clap::{Parser as ClapParser, Subcommand};
use ofilter::cli::{self, CliError, CompileOptions, CompileResult};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "ofilter")]
#[command(about = "ofilter - Compiles typed predicate trees into OData-style $filter expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a JSON-encoded predicate into a filter expression
    Compile {
        /// The predicate tree as JSON (reads from stdin if not provided)
        predicate: Option<String>,

        /// Only validate that the predicate decodes, don't compile
        #[arg(long)]
        parse_only: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile {
            predicate,
            parse_only,
        } => run_compile(predicate, parse_only),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_compile(predicate: Option<String>, parse_only: bool) -> Result<(), CliError> {
    let predicate = match predicate {
        Some(s) => s,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            buffer
        }
        None => return Err(CliError::NoInput),
    };

    let options = CompileOptions {
        predicate,
        parse_only,
    };

    match cli::execute_compile(&options)? {
        CompileResult::ParseValid => println!("Predicate is valid"),
        CompileResult::Success(filter) => println!("{}", filter),
    }
    Ok(())
}
