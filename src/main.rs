use clap::{Parser, Subcommand};
use log::LevelFilter;
use sea_battle::{
    init_logging, render_side_by_side, CliPlayer, FleetGenerator, MatchConfig, MatchSummary,
    RandomPlayer, Referee, Side, TurnError, Visibility,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle on a 10x10 grid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer (default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Show where the computer's vessels are before the first shot")]
        reveal: bool,
    },
    /// Watch two computer players fight it out.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        reveal: false,
    });
    match command {
        Commands::Play { seed, reveal } => play(seed, reveal),
        Commands::Auto { seed } => auto(seed),
    }
}

fn config_for(seed: Option<u64>) -> MatchConfig {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    MatchConfig {
        seed,
        ..MatchConfig::default()
    }
}

fn play(seed: Option<u64>, reveal: bool) -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    println!("Welcome to Sea Battle!");
    println!("Your fleet: one 3-deck, two 2-deck and four 1-deck vessels. Vessels never touch.");
    println!("A hit lets you fire again. Sink every enemy vessel to win.");

    let config = config_for(seed);
    let mut rng = config.rng();
    let generator = FleetGenerator::new(&config);
    let mut referee = Referee::setup(
        &mut rng,
        &generator,
        Box::new(CliPlayer::stdio()),
        Box::new(RandomPlayer::new()),
    )?;
    if reveal {
        let enemy = referee.game().view(Side::Second, Side::Second);
        println!("\nComputer fleet (revealed):\n{}", enemy);
    }

    match referee.run(&mut rng) {
        Ok(summary) => {
            print_final(&referee);
            println!(
                "You fired {} shots, the computer fired {}.",
                summary.shots[Side::First.index()],
                summary.shots[Side::Second.index()]
            );
            Ok(())
        }
        Err(TurnError::NoTarget(Side::First)) => {
            println!("\nGame abandoned.");
            print_final(&referee);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn auto(seed: Option<u64>) -> anyhow::Result<()> {
    init_logging(LevelFilter::Info);
    println!("Starting computer vs computer game...");

    let config = config_for(seed);
    let mut rng = config.rng();
    let generator = FleetGenerator::new(&config);
    let mut referee = Referee::setup(
        &mut rng,
        &generator,
        Box::new(RandomPlayer::new()),
        Box::new(RandomPlayer::new()),
    )?;
    let summary: MatchSummary = referee.run(&mut rng)?;
    print_final(&referee);
    println!(
        "{} wins after {} turns ({} vs {} shots).",
        summary.winner,
        summary.turns,
        summary.shots[Side::First.index()],
        summary.shots[Side::Second.index()]
    );
    Ok(())
}

/// Both boards fully revealed, from the first player's point of view.
fn print_final(referee: &Referee) {
    let game = referee.game();
    let own = game.board(Side::First).snapshot(Visibility::Revealed);
    let other = game.board(Side::Second).snapshot(Visibility::Revealed);
    println!("\n{}", render_side_by_side(&own, &other));
}
