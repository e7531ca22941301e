use clap::Parser;
use clap::Subcommand;
use fraceval::CalcError;
use fraceval::Lexer;

#[derive(Parser, Debug)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the token stream for an expression
    Tokenize { expression: String },
    /// Print the postfix (RPN) form of an expression
    Postfix { expression: String },
    /// Evaluate an expression to a canonical fraction
    Eval { expression: String },
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Tokenize { expression } => {
            for token in Lexer::new(&expression) {
                let token = match token {
                    Ok(token) => token,
                    Err(e) => return Err(report(e)),
                };
                println!("{token}");
            }
            println!("EOF");
        }
        Commands::Postfix { expression } => {
            let rpn = fraceval::tokenize(&expression)
                .and_then(fraceval::to_postfix)
                .map_err(report)?;
            let rpn = rpn.iter().map(|t| t.literal).collect::<Vec<_>>();
            println!("{}", rpn.join(" "));
        }
        Commands::Eval { expression } => {
            let result = fraceval::evaluate(&expression).map_err(report)?;
            println!("{result}");
        }
    }
    Ok(())
}

/// Input errors print the spanned report themselves and exit 65, the
/// convention for bad user input; anything else bubbles up to miette.
fn report(e: CalcError) -> miette::Report {
    if let Some(line) = e.line() {
        eprintln!("[line {line}] Error: {e}");
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(65);
    }
    e.into()
}
