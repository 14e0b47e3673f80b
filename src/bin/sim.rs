use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{init_logging, Board, FleetGenerator, Match, RandomPlayer, Referee, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    init_logging(LevelFilter::Warn);

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let generator = FleetGenerator::default();

    let mut b1 = Board::new();
    let mut b2 = Board::new();
    generator.populate(&mut rng1, &mut b1)?;
    generator.populate(&mut rng2, &mut b2)?;

    let game = Match::new(b1, b2)?;
    let mut referee = Referee::new(
        game,
        Box::new(RandomPlayer::new()),
        Box::new(RandomPlayer::new()),
    );
    let summary = referee.run(&mut rng1)?;

    let result = json!({
        "winner": summary.winner.to_string(),
        "shots": {
            "player1": summary.shots[Side::First.index()],
            "player2": summary.shots[Side::Second.index()],
        },
        "turns": summary.turns,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
