use clap::{Parser, Subcommand};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::io::{self, BufRead, Write};
use vlsm_quiz::config::Config;
use vlsm_quiz::output::{
    allocation_rows, render_allocation_table, render_puzzle, render_report, render_walkthrough,
    AddressStyle,
};
use vlsm_quiz::{solve, Block, Difficulty, FieldSet, Session};

#[derive(Parser, Debug)]
#[command(name = "vlsm-quiz", version, about = "IPv4 VLSM subnetting quiz")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new puzzle
    New {
        #[arg(short, long, value_enum, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
        /// RNG seed, overrides VLSM_QUIZ_SEED
        #[arg(long)]
        seed: Option<u64>,
        /// Print the puzzle as JSON
        #[arg(long)]
        json: bool,
        /// Also print the expected allocation
        #[arg(long)]
        answers: bool,
        /// Show addresses in dotted binary
        #[arg(long)]
        binary: bool,
    },
    /// Pack host requirements into a block, largest first
    Solve {
        /// Base block, e.g. 192.168.1.0/24
        base: String,
        /// Host requirements
        #[arg(required = true)]
        hosts: Vec<u32>,
        #[arg(long)]
        binary: bool,
    },
    /// Answer puzzles interactively on stdin
    Play {
        #[arg(short, long, value_enum, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
        #[arg(long)]
        seed: Option<u64>,
        /// Number of puzzles to play
        #[arg(long, default_value_t = 1)]
        rounds: usize,
        #[arg(long)]
        binary: bool,
    },
}

fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    if log4rs::init_file(path, Default::default()).is_ok() {
        return Ok(());
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    log::debug!("{path} not loaded, logging to stderr");
    Ok(())
}

fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => {
            log::info!("Using seed {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    }
}

fn style(binary: bool) -> AddressStyle {
    if binary {
        AddressStyle::Binary
    } else {
        AddressStyle::Decimal
    }
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> Option<String> {
    print!("  {label}: ");
    io::stdout().flush().ok()?;
    lines.next()?.ok()
}

fn read_fields(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<FieldSet> {
    Some(FieldSet {
        mask: prompt(lines, "Mask")?,
        cidr: prompt(lines, "CIDR")?,
        network: prompt(lines, "Network ID")?,
        broadcast: prompt(lines, "Broadcast")?,
        gateway: prompt(lines, "First usable (Gateway)")?,
        last: prompt(lines, "Last usable")?,
    })
}

fn play(
    config: &Config,
    difficulty: Difficulty,
    seed: Option<u64>,
    rounds: usize,
    style: AddressStyle,
) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new(make_rng(seed), difficulty, config.max_attempts);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for round in 1..=rounds {
        let puzzle = session.new_puzzle()?.clone();
        println!("\n#{round} {}", render_puzzle(&puzzle, style));

        let mut answers = Vec::with_capacity(puzzle.allocations.len());
        for (i, hosts) in puzzle.requirements.iter().enumerate() {
            println!("Subnet {} ({hosts} hosts)", i + 1);
            match read_fields(&mut lines) {
                Some(fields) => answers.push(fields),
                None => {
                    log::info!("stdin closed during round {round}");
                    return Ok(());
                }
            }
        }

        let Some(result) = session.check(&answers) else {
            continue;
        };
        for (i, report) in result.reports.iter().enumerate() {
            println!("{}", render_report(i, puzzle.requirements[i], report));
        }
        for (i, report) in result.reports.iter().enumerate() {
            if !report.all_correct() {
                println!(
                    "\n{}",
                    render_walkthrough(i, puzzle.requirements[i], &puzzle.allocations[i], style)
                );
            }
        }
        println!(
            "\nStreak: {} (best {})",
            result.streak, result.best_streak
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    let cli = Cli::parse();
    match cli.command {
        Command::New {
            difficulty,
            seed,
            json,
            answers,
            binary,
        } => {
            let mut session =
                Session::new(make_rng(seed.or(config.seed)), difficulty, config.max_attempts);
            let puzzle = session.new_puzzle()?;
            if json {
                println!("{}", serde_json::to_string_pretty(puzzle)?);
            } else {
                println!("{}", render_puzzle(puzzle, style(binary)));
                if answers {
                    let rows = allocation_rows(
                        puzzle.base,
                        &puzzle.requirements,
                        &puzzle.allocations,
                        style(binary),
                    );
                    println!("\n{}", render_allocation_table(&rows));
                }
            }
        }
        Command::Solve { base, hosts, binary } => {
            let base: Block = base.parse()?;
            let (requirements, allocations) = solve(base, &hosts)?;
            let rows = allocation_rows(base, &requirements, &allocations, style(binary));
            println!("{}", render_allocation_table(&rows));
        }
        Command::Play {
            difficulty,
            seed,
            rounds,
            binary,
        } => play(&config, difficulty, seed.or(config.seed), rounds, style(binary))?,
    }

    Ok(())
}
