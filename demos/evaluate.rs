use clap::Parser;

use proplogic::ast::Sentence;
use proplogic::lexer::lex;
use proplogic::parser::parse;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Sentence to evaluate.
    #[arg(value_name = "SENTENCE", default_value = "(alpha and beta) ==> (c or true)")]
    sentence: String,

    /// Print the full truth table.
    #[clap(long)]
    table: bool,

    /// Enable debug logging.
    #[clap(long)]
    debug: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.debug {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let tokens = lex(&args.sentence);
    println!("tokens = {:?}", tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>());
    let sentence: Sentence = parse(&tokens)?;
    println!("sentence = {}", sentence.print());
    println!("variables = {:?}", sentence.variables());

    println!("valid: {}", sentence.is_valid());
    println!("satisfiable: {}", sentence.is_satisfiable());
    println!("unsatisfiable: {}", sentence.is_unsatisfiable());
    match sentence.one_sat() {
        Some(model) => println!("first model: {}", model),
        None => println!("no model"),
    }

    if args.table {
        println!();
        print!("{}", sentence.truth_table());
    }

    let time_total = time_total.elapsed();
    println!("\nAll done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
