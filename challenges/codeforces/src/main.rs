use clap::{Parser, Subcommand};
use log::error;

#[derive(Parser)]
#[command(name = "codeforces")]
#[command(about = "Codeforces Problem Solutions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Binary Search problems
    BinarySearch {
        /// Problem name to run
        problem: String,
    },
    /// Run the fixture cases under data/ for a problem
    Test {
        /// Problem category
        category: String,
        /// Problem name to test
        problem: String,
    },
}

fn main() {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::BinarySearch { problem } => codeforces::binary_search::tasks().run(&problem),
        Commands::Test { category, problem } => {
            run_fixtures(&category, &problem);
            Ok(())
        }
    };

    if let Err(err) = result {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run_fixtures(category: &str, problem: &str) {
    let group = match category {
        "binary_search" => codeforces::binary_search::tasks(),
        other => {
            eprintln!("Unknown category {}", other);
            std::process::exit(2);
        }
    };

    let Some(solve) = group.get(problem) else {
        eprintln!("Unknown problem {}/{}", category, problem);
        std::process::exit(2);
    };

    codeforces::testing::run_all_tests(category, problem, solve);
}
