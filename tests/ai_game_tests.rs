use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    Board, BoardError, BoardSnapshot, Coordinate, FleetGenerator, Match, MatchStatus,
    Orientation, Player, RandomPlayer, Referee, Side, TurnError, TurnOutcome, Vessel,
    TOTAL_FLEET_CELLS,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_ai_vs_ai_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let generator = FleetGenerator::default();
    let mut referee = Referee::setup(
        &mut rng,
        &generator,
        Box::new(RandomPlayer::new()),
        Box::new(RandomPlayer::new()),
    )
    .unwrap();

    let summary = referee.run(&mut rng).unwrap();
    let game = referee.game();
    assert_eq!(game.status(), MatchStatus::Won(summary.winner));
    assert!(game.board(summary.winner.opponent()).all_sunk());
    assert!(!game.board(summary.winner).all_sunk());
    // the winner fired at least once per enemy vessel cell, never more than the board
    let winner_shots = summary.shots[summary.winner.index()];
    assert!(winner_shots >= TOTAL_FLEET_CELLS && winner_shots <= 100);
    assert!(summary.turns >= 1);
}

#[test]
fn test_random_player_never_repeats() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut board = Board::new();
    FleetGenerator::default()
        .populate(&mut rng, &mut board)
        .unwrap();
    let mut player = RandomPlayer::new();
    for _ in 0..100 {
        let view = board.snapshot(sea_battle::Visibility::Concealed);
        let target = player.select_target(&mut rng, &view).unwrap();
        board.fire_at(target).unwrap();
    }
    assert!(board.all_sunk());
    let view = board.snapshot(sea_battle::Visibility::Concealed);
    assert_eq!(player.select_target(&mut rng, &view), None);
}

/// Fires at a fixed list of targets and records what it is told.
struct Scripted {
    targets: Vec<Coordinate>,
    log: Rc<RefCell<Vec<String>>>,
}

impl Scripted {
    fn new(targets: &[(i32, i32)], log: Rc<RefCell<Vec<String>>>) -> Self {
        let mut targets: Vec<_> = targets.iter().map(|&(x, y)| Coordinate::new(x, y)).collect();
        targets.reverse();
        Self { targets, log }
    }
}

impl Player for Scripted {
    fn select_target(&mut self, _rng: &mut SmallRng, _opp: &BoardSnapshot) -> Option<Coordinate> {
        self.targets.pop()
    }

    fn handle_rejected_shot(&mut self, target: Coordinate, error: &BoardError) {
        self.log
            .borrow_mut()
            .push(format!("rejected {} {:?}", target, error));
    }

    fn handle_shot_result(&mut self, outcome: &TurnOutcome) {
        self.log
            .borrow_mut()
            .push(format!("shot {} {:?}", outcome.target, outcome.report.outcome.is_hit()));
    }

    fn handle_match_end(&mut self, won: bool) {
        self.log.borrow_mut().push(format!("end {}", won));
    }
}

fn one_vessel_each() -> Match {
    let mut first = Board::new();
    first
        .place_vessel(Vessel::new(1, Coordinate::new(0, 0), Orientation::Horizontal).unwrap())
        .unwrap();
    let mut second = Board::new();
    second
        .place_vessel(Vessel::new(2, Coordinate::new(5, 5), Orientation::Vertical).unwrap())
        .unwrap();
    Match::new(first, second).unwrap()
}

#[test]
fn test_referee_retries_rejected_and_repeats_on_hit() {
    let log1 = Rc::new(RefCell::new(Vec::new()));
    let log2 = Rc::new(RefCell::new(Vec::new()));
    let p1 = Scripted::new(&[(-1, 0), (5, 5), (5, 5), (5, 6)], log1.clone());
    let p2 = Scripted::new(&[], log2.clone());
    let mut referee = Referee::new(one_vessel_each(), Box::new(p1), Box::new(p2));
    let mut rng = SmallRng::seed_from_u64(0);

    let summary = referee.run(&mut rng).unwrap();
    assert_eq!(summary.winner, Side::First);
    assert_eq!(summary.shots, [2, 0]);
    assert_eq!(summary.turns, 1);
    assert_eq!(
        *log1.borrow(),
        vec![
            "rejected (-1, 0) OutOfBounds(Coordinate { x: -1, y: 0 })".to_string(),
            "shot (5, 5) true".to_string(),
            "rejected (5, 5) AlreadyTargeted(Coordinate { x: 5, y: 5 })".to_string(),
            "shot (5, 6) true".to_string(),
            "end true".to_string(),
        ]
    );
    assert_eq!(*log2.borrow(), vec!["end false".to_string()]);
}

#[test]
fn test_referee_reports_player_that_gives_up() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let p1 = Scripted::new(&[(9, 9)], log.clone());
    let p2 = Scripted::new(&[], log.clone());
    let mut referee = Referee::new(one_vessel_each(), Box::new(p1), Box::new(p2));
    let mut rng = SmallRng::seed_from_u64(0);

    assert_eq!(referee.run(&mut rng), Err(TurnError::NoTarget(Side::Second)));
    assert_eq!(referee.game().to_move(), Side::Second);
    assert_eq!(referee.game().status(), MatchStatus::InProgress);
}
