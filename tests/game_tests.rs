use find_carrot::{
    Direction, Field, GameEngine, GameError, GameState, Move, MoveOutcome, Position, Tile,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn engine_with(layout: &[&str], carrot: Position) -> GameEngine {
    let field = Field::from_rows(layout).unwrap();
    let mut engine = GameEngine::new(field);
    engine.start_with_carrot(carrot).unwrap();
    engine
}

fn open_4x4() -> GameEngine {
    engine_with(&["░░░░", "░░░░", "░░░░", "░░░░"], Position::new(1, 1))
}

#[test]
fn test_start_places_player_and_carrot() {
    let engine = open_4x4();
    assert_eq!(engine.state(), GameState::Playing);
    assert_eq!(engine.player(), Position::ORIGIN);
    assert_eq!(engine.carrot(), Some(Position::new(1, 1)));
    assert_eq!(engine.field().get(Position::ORIGIN).unwrap(), Tile::Player);
    assert_eq!(engine.field().count(Tile::Player), 1);
    assert_eq!(engine.field().count(Tile::Carrot), 1);
}

#[test]
fn test_random_start() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let field = Field::generate(5, 9, 0.2, &mut rng).unwrap();
        let mut engine = GameEngine::new(field);
        engine.start(&mut rng).unwrap();
        let carrot = engine.carrot().unwrap();
        assert_ne!(carrot, Position::ORIGIN);
        assert_eq!(engine.field().find(Tile::Carrot), Some(carrot));
        assert_eq!(engine.field().count(Tile::Player), 1);
    }
}

#[test]
fn test_start_twice_fails() {
    let mut engine = open_4x4();
    assert_eq!(
        engine.start_with_carrot(Position::new(2, 2)).unwrap_err(),
        GameError::AlreadyStarted
    );
}

#[test]
fn test_move_before_start_fails() {
    let mut engine = GameEngine::new(Field::new(4, 4).unwrap());
    assert_eq!(engine.state(), GameState::Setup);
    assert_eq!(
        engine.apply_move(Move::Go(Direction::Right)).unwrap_err(),
        GameError::NotPlaying(GameState::Setup)
    );
}

#[test]
fn test_hole_at_origin_is_covered_by_player() {
    let engine = engine_with(&["O░░░", "░░░░", "░░░░", "░░░░"], Position::new(2, 2));
    assert_eq!(engine.field().get(Position::ORIGIN).unwrap(), Tile::Player);
    assert_eq!(engine.field().count(Tile::Hole), 0);
}

#[test]
fn test_stray_player_marker_is_cleared() {
    let engine = engine_with(&["░░░░", "░░░░", "░░░░", "░░░*"], Position::new(1, 2));
    assert_eq!(engine.field().count(Tile::Player), 1);
    assert_eq!(engine.field().find(Tile::Player), Some(Position::ORIGIN));
}

#[test]
fn test_right_then_down_finds_carrot() {
    let mut engine = open_4x4();
    assert_eq!(
        engine.apply_move(Move::Go(Direction::Right)).unwrap(),
        MoveOutcome::Moved(Position::new(0, 1))
    );
    assert_eq!(engine.field().get(Position::ORIGIN).unwrap(), Tile::Grass);
    assert_eq!(engine.apply_move(Move::Go(Direction::Down)).unwrap(), MoveOutcome::Won);
    assert_eq!(engine.state(), GameState::Won);
    assert_eq!(engine.turns(), 2);

    // terminal: nothing more is accepted
    assert_eq!(
        engine.apply_move(Move::Go(Direction::Left)).unwrap_err(),
        GameError::NotPlaying(GameState::Won)
    );
}

#[test]
fn test_out_of_bounds_loses_without_mutation() {
    for dir in [Direction::Up, Direction::Left] {
        let mut engine = open_4x4();
        let before = engine.field().clone();
        assert_eq!(engine.apply_move(Move::Go(dir)).unwrap(), MoveOutcome::OutOfBounds);
        assert_eq!(engine.state(), GameState::Lost);
        assert_eq!(engine.field(), &before);
        assert_eq!(engine.player(), Position::ORIGIN);
    }
}

#[test]
fn test_out_of_bounds_on_far_edge() {
    let mut engine = engine_with(&["░░░░", "░░░░", "░░░░", "░░░░"], Position::new(3, 3));
    for _ in 0..3 {
        engine.apply_move(Move::Go(Direction::Right)).unwrap();
    }
    assert_eq!(engine.player(), Position::new(0, 3));
    let before = engine.field().clone();
    assert_eq!(
        engine.apply_move(Move::Go(Direction::Right)).unwrap(),
        MoveOutcome::OutOfBounds
    );
    assert_eq!(engine.field(), &before);
}

#[test]
fn test_hole_loses_without_mutation() {
    let mut engine = engine_with(&["░O░░", "░░░░", "░░░░", "░░░░"], Position::new(2, 2));
    let before = engine.field().clone();
    assert_eq!(
        engine.apply_move(Move::Go(Direction::Right)).unwrap(),
        MoveOutcome::FellInHole
    );
    assert_eq!(engine.state(), GameState::Lost);
    assert_eq!(engine.field(), &before);
    assert_eq!(engine.player(), Position::ORIGIN);
}

#[test]
fn test_quit_keeps_position() {
    let mut engine = open_4x4();
    engine.apply_move(Move::Go(Direction::Down)).unwrap();
    assert_eq!(engine.apply_move(Move::Quit).unwrap(), MoveOutcome::Quit);
    assert_eq!(engine.state(), GameState::Quit);
    assert_eq!(engine.player(), Position::new(1, 0));
}

#[test]
fn test_grass_move_changes_only_two_cells() {
    let mut engine = engine_with(&["░░O░", "░░░░", "O░░░", "░░░░"], Position::new(3, 3));
    let before = engine.field().clone();
    engine.apply_move(Move::Go(Direction::Down)).unwrap();
    let after = engine.field();
    let mut changed = Vec::new();
    for r in 0..4 {
        for c in 0..4 {
            let pos = Position::new(r, c);
            if before.get(pos).unwrap() != after.get(pos).unwrap() {
                changed.push(pos);
            }
        }
    }
    assert_eq!(changed, vec![Position::new(0, 0), Position::new(1, 0)]);
}

#[test]
fn test_outcome_messages() {
    assert_eq!(MoveOutcome::Moved(Position::ORIGIN).message(), None);
    assert_eq!(
        MoveOutcome::Won.message(),
        Some("You've found the carrot. You've won the game!")
    );
    assert_eq!(
        MoveOutcome::FellInHole.message(),
        Some("You've dropped into the hole. You've lost the game.")
    );
    assert_eq!(
        MoveOutcome::OutOfBounds.message(),
        Some("You've moved out of the filed. You've lost the game.")
    );
    assert_eq!(MoveOutcome::Quit.message(), Some("Thank you. You quit the game"));
}

#[test]
fn test_move_parse() {
    assert_eq!(Move::parse("u"), Some(Move::Go(Direction::Up)));
    assert_eq!(Move::parse("D"), Some(Move::Go(Direction::Down)));
    assert_eq!(Move::parse(" l "), Some(Move::Go(Direction::Left)));
    assert_eq!(Move::parse("R"), Some(Move::Go(Direction::Right)));
    assert_eq!(Move::parse("Q"), Some(Move::Quit));
    assert_eq!(Move::parse(""), None);
    assert_eq!(Move::parse("up"), None);
    assert_eq!(Move::parse("x"), None);
}
