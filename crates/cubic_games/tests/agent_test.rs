//! Tests for the random and human agents.

use cubic_games::{Agent, HumanAgent, PROMPT, RandomAgent};
use cubic_tictactoe::{Action, Board, Cell, Engine, Player, legal_actions};
use std::io::Cursor;

fn act(block: u8, row: u8, col: u8) -> Action {
    Action::new(block, row, col).expect("coordinates in range")
}

fn human(input: &str) -> HumanAgent<Cursor<Vec<u8>>, Vec<u8>> {
    HumanAgent::new("tester", Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_random_agent_picks_legal_moves() {
    let mut engine = Engine::new();
    let mut agent = RandomAgent::new("random", 42);

    while !engine.is_done() {
        let action = agent
            .act(engine.board())
            .expect("agent succeeds")
            .expect("random agent never quits");
        assert!(legal_actions(engine.board()).contains(&action));
        engine.step(action).expect("legal move");
    }
}

#[test]
fn test_random_agent_is_reproducible() {
    let engine = Engine::replay(&[act(1, 1, 1), act(0, 0, 0)]).expect("valid replay");
    let mut first = RandomAgent::new("a", 7);
    let mut second = RandomAgent::new("b", 7);

    for _ in 0..10 {
        let a = first.act(engine.board()).expect("agent succeeds");
        let b = second.act(engine.board()).expect("agent succeeds");
        assert_eq!(a, b);
    }
}

#[test]
fn test_random_agent_errors_on_full_board() {
    let mut board = Board::new();
    for action in Action::all() {
        board.set(action, Cell::Occupied(Player::One));
    }
    assert!(RandomAgent::new("late", 1).act(&board).is_err());
}

#[test]
fn test_human_accepts_valid_move() {
    let mut agent = human("120\n");
    let action = agent.act(&Board::new()).expect("read ok");
    assert_eq!(action, Some(act(1, 2, 0)));

    let output = String::from_utf8(agent.into_output()).expect("utf8");
    assert_eq!(output, PROMPT);
}

#[test]
fn test_human_reprompts_on_bad_input() {
    let engine = Engine::replay(&[act(0, 0, 0)]).expect("valid replay");
    let mut agent = human("12\nabc\n000\n301\n222\n");

    let action = agent.act(engine.board()).expect("read ok");
    assert_eq!(action, Some(act(2, 2, 2)));

    let output = String::from_utf8(agent.into_output()).expect("utf8");
    assert_eq!(output.matches(PROMPT).count(), 5);
    assert!(output.contains("Invalid input: '12'"));
    assert!(output.contains("Invalid input: 'abc'"));
    assert!(output.contains("Illegal position: '000'"));
    assert!(output.contains("Illegal position: '301'"));
}

#[test]
fn test_human_quit_returns_none() {
    for quit in ["q\n", "Q\n"] {
        let mut agent = human(quit);
        assert_eq!(agent.act(Engine::new().board()).expect("read ok"), None);
    }
}

#[test]
fn test_human_errors_when_input_ends() {
    let mut agent = human("9\n");
    assert!(agent.act(Engine::new().board()).is_err());
}

#[derive(Clone, Default)]
struct SharedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for SharedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SharedLog {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("log lock").clone()).expect("utf-8 log")
    }
}

/// Plays bad, occupied, then valid input with logging captured at `level`.
fn human_session_log(level: tracing::Level) -> String {
    let log = SharedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let mut board = Board::new();
    board.set(act(1, 1, 1), Cell::Occupied(Player::One));
    let mut agent = human("12\n999\n111\n000\n");

    let chosen = tracing::subscriber::with_default(subscriber, || agent.act(&board))
        .expect("agent reads input");
    assert_eq!(chosen, Some(act(0, 0, 0)));
    log.contents()
}

#[test]
fn test_human_rejections_stay_below_warn() {
    let log = human_session_log(tracing::Level::WARN);
    assert!(log.is_empty(), "unexpected log output: {log}");
}

#[test]
fn test_human_rejections_logged_at_debug() {
    let log = human_session_log(tracing::Level::DEBUG);
    assert!(log.contains("Rejected input"));
    assert!(log.contains("Cell already taken"));
}
