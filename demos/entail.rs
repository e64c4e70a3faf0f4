use clap::Parser;

use proplogic::ast::Sentence;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Premise.
    #[arg(value_name = "A", default_value = "A <=> B")]
    a: String,

    /// Conclusion.
    #[arg(value_name = "B", default_value = "~A or B")]
    b: String,

    /// Also check whether the sentences are equivalent.
    #[clap(long)]
    equivalent: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let a: Sentence = args.a.parse()?;
    let b: Sentence = args.b.parse()?;

    println!("1st sentence: {}", a.print());
    println!("2nd sentence: {}", b.print());
    println!("1st sentence entails 2nd sentence: {}", a.entails(&b));
    if args.equivalent {
        println!("sentences are equivalent: {}", a.equivalent(&b));
    }

    Ok(())
}
