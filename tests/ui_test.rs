use rchess::game::mv::SquareParseError;
use rchess::game::{Color, Game, Piece, PieceKind, Square};
use rchess::ui::input::{parse_command, Command, InputError};
use rchess::ui::renderer::BoardRenderer;

#[test]
fn parses_a_move() {
    assert_eq!(
        parse_command("e2 e4", "exit"),
        Ok(Command::Move(Square::new(6, 4), Square::new(4, 4)))
    );
    assert_eq!(
        parse_command("  g1   f3 \n", "exit"),
        Ok(Command::Move(Square::new(7, 6), Square::new(5, 5)))
    );
}

#[test]
fn quit_word_on_either_token() {
    assert_eq!(parse_command("exit", "exit"), Ok(Command::Quit));
    assert_eq!(parse_command("EXIT", "exit"), Ok(Command::Quit));
    assert_eq!(parse_command("e2 Exit", "exit"), Ok(Command::Quit));
    assert_eq!(parse_command("quit", "quit"), Ok(Command::Quit));
}

#[test]
fn malformed_input_is_rejected() {
    assert_eq!(parse_command("", "exit"), Err(InputError::Empty));
    assert_eq!(parse_command("e2", "exit"), Err(InputError::MissingDestination));
    assert_eq!(
        parse_command("e2 e4 e5", "exit"),
        Err(InputError::TrailingInput("e5".into()))
    );
    assert_eq!(
        parse_command("e2 e9", "exit"),
        Err(InputError::Square(SquareParseError::Rank('9')))
    );
    assert_eq!(
        parse_command("z2 e4", "exit"),
        Err(InputError::Square(SquareParseError::File('z')))
    );
}

#[test]
fn renders_the_starting_position() {
    let rendered = BoardRenderer::default().render(&Game::new().snapshot());
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "8 r n b q k b n r ");
    assert_eq!(lines[1], "7 p p p p p p p p ");
    assert_eq!(lines[4], "4 - - - - - - - - ");
    assert_eq!(lines[7], "1 R N B Q K B N R ");
    assert_eq!(lines[8], "  a b c d e f g h");
}

#[test]
fn renderer_honours_its_options() {
    let renderer = BoardRenderer {
        empty: '.',
        show_files: false,
    };
    let rendered = renderer.render(&Game::new().snapshot());
    assert_eq!(rendered.lines().count(), 8);
    assert!(rendered.contains("5 . . . . . . . . "));
}

#[test]
fn renders_score_prompt_and_capture() {
    let renderer = BoardRenderer::default();
    let mut game = Game::new();
    assert_eq!(
        renderer.render_score(&game.snapshot()),
        "White captured: \nBlack captured: \n"
    );
    assert_eq!(renderer.render_prompt(&game), "White to move. Format: e2 e4");

    for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "d5")] {
        game.attempt_move(from.parse().unwrap(), to.parse().unwrap()).unwrap();
    }
    assert_eq!(
        renderer.render_score(&game.snapshot()),
        "White captured: p \nBlack captured: \n"
    );
    assert_eq!(renderer.render_prompt(&game), "Black to move. Format: e2 e4");
    assert_eq!(
        renderer.render_capture(Color::White, &Piece::new(PieceKind::Pawn, Color::Black)),
        "White captured p"
    );
}
