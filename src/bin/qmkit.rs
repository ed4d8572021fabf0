//! Quine–McCluskey minimizer - Command Line Interface

use clap::Parser;
use itertools::Itertools;
use qmkit::{
    parse_expression, parse_with_inferred_variables, KarnaughMap, MergeStage, Minimizer,
    MinimizerConfig, QmError, Solution, VarList, ASCII_FMT_CFG, UNICODE_FMT_CFG,
};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "qmkit")]
#[command(about = "Minimize a Boolean expression into SOP and POS forms", long_about = None)]
#[command(version)]
struct Args {
    /// Boolean expression, for example "a & !b | c"
    #[arg(value_name = "EXPR")]
    expression: String,

    /// Ordered list of variables (defaults to the identifiers of the expression, sorted)
    #[arg(short = 'v', long = "vars")]
    variables: Option<String>,

    /// Use ASCII symbols (& | !) instead of unicode ones
    #[arg(long)]
    ascii: bool,

    /// Print the merge stages of the prime implicant extraction
    #[arg(long)]
    stages: bool,

    /// Print the Karnaugh map (2 to 4 variables)
    #[arg(long)]
    kmap: bool,

    /// Largest accepted number of variables
    #[arg(long = "max-vars", default_value_t = 6)]
    max_vars: usize,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), QmError> {
    let (expr, variables) = match &args.variables {
        Some(names) => {
            let variables: VarList = names.parse()?;
            (parse_expression(&args.expression, &variables)?, variables)
        }
        None => parse_with_inferred_variables(&args.expression)?,
    };

    let formatter = if args.ascii {
        &ASCII_FMT_CFG
    } else {
        &UNICODE_FMT_CFG
    };
    let config = MinimizerConfig::default()
        .with_max_variables(args.max_vars)
        .with_formatter(formatter);
    let result = Minimizer::new(config).minimize(expr, &variables)?;
    let table = result.table();

    println!("Variables: {}", variables);
    println!("\nTruth table:\n{}", table);
    println!("Canonical SOP: {}", result.canonical_sop());
    println!("Canonical POS: {}", result.canonical_pos());
    println!("\nNumeric forms:\n{}\n{}", table.numeric_sop(), table.numeric_pos());
    match table.index_value() {
        Some(value) => println!("\nIndex form: {} - {}", value, table.index_form()),
        None => println!("\nIndex form: {}", table.index_form()),
    }

    if args.stages {
        print_stages("SOP", result.sop());
        print_stages("POS", result.pos());
    }

    println!("\nMinimal SOP: {}", result.formatted_sop());
    println!("Minimal POS: {}", result.formatted_pos());

    if args.kmap {
        println!("\nKarnaugh map:\n{}", KarnaughMap::new(table)?);
    }
    Ok(())
}

fn print_stages(label: &str, solution: &Solution) {
    println!("\nMerge stages ({}):", label);
    for (i, stage) in solution.stages().iter().enumerate() {
        println!("  {}: {}", i + 1, describe(stage));
    }
    println!("  prime implicants: {}", solution.primes());
    println!("  cover: {}", solution.cover());
}

fn describe(stage: &MergeStage) -> String {
    format!(
        "[{}] -> [{}], prime: [{}]",
        stage.candidates.iter().join(" "),
        stage.merged.iter().join(" "),
        stage.primes.iter().join(" ")
    )
}
