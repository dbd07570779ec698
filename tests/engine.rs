use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use wrapsnake::{Cell, Direction, Engine, EngineConfig, Food, Grid, Snake, StartCell, StartDirection};

const RNG_SEED: u64 = 0x0123456789ABCDEF;

fn cells(coords: &[(u16, u16)]) -> Vec<Cell> {
    coords.iter().map(|&(c, r)| Cell::new(c, r)).collect()
}

fn scripted(width: u16, height: u16, body: &[(u16, u16)], direction: Direction, food: (u16, u16)) -> Engine {
    let config = EngineConfig::new(width, height).with_start_cell(StartCell::At(Cell::new(1, 1)));
    let grid = config.validate().expect("valid grid");
    let snake = Snake::from_body(grid, cells(body), direction).expect("valid body");
    Engine::from_parts(config, snake, Food::new(Cell::new(food.0, food.1)), ChaCha12Rng::seed_from_u64(RNG_SEED))
        .expect("food off the snake")
}

#[test]
fn eats_food_straight_ahead() {
    let mut engine = scripted(8, 8, &[(4, 4)], Direction::Right, (5, 4));

    let outcome = engine.tick(None);

    assert!(outcome.moved && outcome.ate && !outcome.collided);
    assert_eq!(engine.snake().head(), Cell::new(5, 4));
    assert_eq!(engine.snake().body(), &cells(&[(5, 4), (4, 4)])[..]);
    let food = engine.food().position();
    assert!(food != Cell::new(4, 4) && food != Cell::new(5, 4));
}

#[test]
fn wraps_left_while_tail_moves_away() {
    let mut engine = scripted(8, 8, &[(0, 2), (1, 2), (2, 2)], Direction::Left, (5, 5));

    let outcome = engine.tick(None);

    assert!(!outcome.collided);
    assert_eq!(outcome.head, Cell::new(7, 2));
    assert_eq!(outcome.vacated, Some(Cell::new(2, 2)));
    assert_eq!(engine.snake().body(), &cells(&[(7, 2), (0, 2), (1, 2)])[..]);
}

#[test]
fn wraps_on_all_four_edges() {
    let cases = [
        ((7, 3), Direction::Right, (0, 3)),
        ((0, 3), Direction::Left, (7, 3)),
        ((3, 0), Direction::Up, (3, 5)),
        ((3, 5), Direction::Down, (3, 0)),
    ];

    for (start, direction, expected) in cases {
        let mut engine = scripted(8, 6, &[start], direction, (4, 2));
        let outcome = engine.tick(None);
        assert_eq!(outcome.head, Cell::new(expected.0, expected.1), "moving {:?} from {:?}", direction, start);
    }
}

#[test]
fn reversal_input_is_ignored() {
    let mut engine = scripted(8, 8, &[(4, 4), (3, 4), (2, 4)], Direction::Right, (0, 0));

    let outcome = engine.tick(Some(Direction::Left));

    assert!(!outcome.collided);
    assert_eq!(engine.snake().direction(), Direction::Right);
    assert_eq!(engine.snake().head(), Cell::new(5, 4));
}

#[test]
fn hitting_the_body_resets_to_start() {
    // Head at (2, 2) turning down into (2, 3), which is mid-body.
    let body = [(2, 2), (3, 2), (3, 3), (2, 3), (1, 3)];
    let mut engine = scripted(8, 8, &body, Direction::Left, (6, 6));

    let outcome = engine.tick(Some(Direction::Down));

    assert!(outcome.collided && !outcome.moved);
    assert_eq!(engine.snake().body(), &[Cell::new(1, 1)]);
    assert_eq!(engine.snake().target_length(), 1);
    assert_ne!(engine.food().position(), Cell::new(1, 1));
}

#[test]
fn random_play_keeps_invariants() {
    let config = EngineConfig::new(6, 5)
        .with_start_cell(StartCell::Random)
        .with_start_direction(StartDirection::Random);
    let mut engine = Engine::with_rng(config, ChaCha12Rng::seed_from_u64(RNG_SEED)).unwrap();
    let mut input_rng = ChaCha12Rng::seed_from_u64(RNG_SEED ^ 0xFF);
    let (mut meals, mut crashes) = (0, 0);

    for _ in 0..20_000 {
        let before = engine.length();
        let input = if input_rng.gen_bool(0.3) { Some(input_rng.gen::<Direction>()) } else { None };

        let outcome = engine.tick(input);

        let body = engine.snake().body();
        let distinct: HashSet<_> = body.iter().collect();
        assert_eq!(distinct.len(), body.len(), "body overlaps itself: {:?}", body);
        assert!(!body.contains(&engine.food().position()));
        assert!(body.iter().all(|c| engine.grid().contains(*c)));

        if outcome.collided {
            crashes += 1;
            assert_eq!(engine.length(), 1);
        } else if outcome.ate {
            meals += 1;
            assert_eq!(engine.length(), before + 1);
        } else {
            assert_eq!(engine.length(), before);
        }

        // Stop short of a full board, where food has nowhere to go.
        if engine.length() + 1 >= engine.grid().area() {
            engine.restart();
        }
    }

    assert!(meals > 0 && crashes > 0);
}

#[test]
fn same_seed_same_game() {
    let play = || {
        let mut engine = Engine::new(EngineConfig::new(10, 10).with_seed(9)).unwrap();
        let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
        (0..200)
            .map(|i| {
                engine.tick(if i % 7 == 0 { Some(turns[i / 7 % 4]) } else { None });
                (engine.snake().head(), engine.food().position())
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(play(), play());
}

#[test]
fn undersized_grid_is_rejected() {
    assert!(Engine::new(EngineConfig::new(2, 2)).is_err());
    assert!(Grid::new(3, 3).is_ok());
}
