//! Headless demo: a scripted drawing session exported to PNG.

use kurbo::Point;
use omniboard_app::shortcuts::ShortcutRegistry;
use omniboard_app::{EditIntent, Modifiers, edit_intent, export_png};
use omniboard_core::{Rgba, Session, Tool};
use omniboard_render::Board;
use std::path::Path;

fn main() {
    env_logger::init();

    let mut session = Session::new();
    let mut board = Board::new(800, 600);

    // Freehand squiggle
    session.set_tool(Tool::Pencil);
    session.color = Rgba::new(200, 40, 40, 255);
    session.stroke_width = 4.0;
    session.pointer_down(Point::new(60.0, 60.0));
    for i in 1..=40 {
        let t = i as f64 / 40.0;
        session.pointer_move(Point::new(
            60.0 + t * 300.0,
            60.0 + (t * std::f64::consts::TAU * 2.0).sin() * 30.0,
        ));
    }
    session.pointer_up(Point::new(360.0, 60.0));

    // A 3D cube and a wireframe sphere
    session.three_d = true;
    session.color = Rgba::black();
    session.stroke_width = 2.0;
    session.set_tool(Tool::Rectangle);
    session.pointer_down(Point::new(100.0, 250.0));
    session.pointer_up(Point::new(260.0, 380.0));

    session.set_tool(Tool::Circle);
    session.pointer_down(Point::new(450.0, 300.0));
    session.pointer_up(Point::new(530.0, 300.0));

    // A flat star, then exercise the undo/redo shortcut path
    session.three_d = false;
    session.set_tool(Tool::Star);
    session.color = Rgba::new(40, 40, 200, 255);
    session.pointer_down(Point::new(620.0, 150.0));
    session.pointer_up(Point::new(700.0, 150.0));

    let ctrl = Modifiers {
        ctrl: true,
        ..Modifiers::default()
    };
    if let Some(EditIntent::Undo) = edit_intent("z", ctrl) {
        session.undo();
    }
    session.redo();

    board.replay(session.history());
    log::info!(
        "session holds {} elements (can_undo={}, can_redo={})",
        session.history().len(),
        session.can_undo(),
        session.can_redo()
    );

    ShortcutRegistry::print_all();

    match export_png(&board, Path::new(".")) {
        Ok(path) => println!("Exported drawing to {}", path.display()),
        Err(err) => {
            log::error!("export failed: {err}");
            std::process::exit(1);
        }
    }
}
