// tests/executor.rs
use glam::IVec2;
use std::rc::Rc;
use toy_robot::{
    Board, Command, CommandExecutor, Heading, Level, RecordingDiagnostics, Robot, RobotState,
};

fn setup() -> (CommandExecutor, Rc<RecordingDiagnostics>) {
    let diagnostics = Rc::new(RecordingDiagnostics::new());
    let executor = CommandExecutor::new(Board::default()).with_diagnostics(diagnostics.clone());
    (executor, diagnostics)
}

fn place(x: i32, y: i32, heading: Heading) -> Command {
    Command::Place {
        position: IVec2::new(x, y),
        heading,
    }
}

#[test]
fn test_commands_before_place_never_reach_robot() {
    let (mut executor, diagnostics) = setup();

    for command in [Command::Move, Command::Left, Command::Right, Command::Report] {
        assert_eq!(executor.execute(command), None);
    }

    assert!(!executor.robot().is_placed());
    // The robot itself would have warned if it had been called.
    assert!(diagnostics.at_level(Level::Warn).is_empty());

    let ignored = diagnostics.at_level(Level::Debug);
    assert_eq!(ignored.len(), 4, "one debug entry per ignored command");
    assert!(ignored.iter().all(|entry| entry.context == "CommandExecutor"));
    assert_eq!(ignored[0].message, "Robot not placed, ignoring MOVE");
    assert_eq!(diagnostics.entries().len(), 4);
}

#[test]
fn test_gate_stays_closed_after_rejected_place() {
    let (mut executor, _) = setup();

    executor.execute(place(7, 7, Heading::North));
    assert_eq!(executor.execute(Command::Report), None);
    assert!(!executor.robot().is_placed());
}

#[test]
fn test_gate_opens_after_successful_place() {
    let (mut executor, diagnostics) = setup();

    assert_eq!(executor.execute(place(0, 0, Heading::North)), None);
    executor.execute(Command::Right);
    executor.execute(Command::Move);

    let report = executor.execute(Command::Report);
    assert_eq!(report, Some(RobotState::new(IVec2::new(1, 0), Heading::East)));

    let reports: Vec<_> = diagnostics
        .at_level(Level::Info)
        .into_iter()
        .filter(|entry| entry.context == "ReportCommand")
        .collect();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].message, "1,0,EAST");
}

#[test]
fn test_was_placed_reflects_status_before_each_place() {
    let (mut executor, _) = setup();
    assert!(!executor.was_placed());

    executor.execute(place(1, 1, Heading::North));
    assert!(!executor.was_placed(), "robot was off the table before the first PLACE");

    executor.execute(place(2, 2, Heading::South));
    assert!(executor.was_placed());
}

#[test]
fn test_was_placed_ignores_other_commands() {
    let (mut executor, _) = setup();

    executor.execute(place(1, 1, Heading::North));
    executor.execute(Command::Move);
    executor.execute(Command::Report);
    assert!(!executor.was_placed());
}

#[test]
fn test_rejected_move_is_absorbed() {
    let (mut executor, diagnostics) = setup();

    executor.execute(place(4, 4, Heading::North));
    assert_eq!(executor.execute(Command::Move), None);

    assert_eq!(
        executor.execute(Command::Report),
        Some(RobotState::new(IVec2::new(4, 4), Heading::North))
    );
    assert_eq!(diagnostics.at_level(Level::Warn).len(), 1);
}

#[test]
fn test_from_robot_keeps_existing_placement() {
    let mut robot = Robot::new(Board::default());
    robot.place(IVec2::new(3, 3), Heading::West);

    let mut executor = CommandExecutor::from_robot(robot);
    assert_eq!(
        executor.execute(Command::Report),
        Some(RobotState::new(IVec2::new(3, 3), Heading::West))
    );
}
