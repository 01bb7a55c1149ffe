use std::path::Path;

use four_d_chess::board::{Board, MoveOutcome};
use four_d_chess::chess::config::RulesConfig;
use four_d_chess::core::color::Color;
use four_d_chess::core::coord::Coord;
use four_d_chess::positions;

const USAGE: &str = "Usage: four_d_chess [--position <name>] [--rules <file.json>] \
                     [--slice <z> <w>] [--move fx fy fz fw tx ty tz tw]...";

fn usage_exit(msg: &str) -> ! {
    eprintln!("{msg}\n\n{USAGE}\n\nAvailable positions:\n  - {}", positions::names().join("\n  - "));
    std::process::exit(2);
}

fn parse_ints(args: &[String], n: usize, flag: &str) -> Vec<i32> {
    if args.len() < n {
        usage_exit(&format!("{flag} requires {n} integer arguments"));
    }
    args[..n]
        .iter()
        .map(|a| match a.parse::<i32>() {
            Ok(v) => v,
            Err(e) => usage_exit(&format!("invalid {flag} argument {a}: {e}")),
        })
        .collect()
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut position = "standard".to_string();
    let mut rules_path: Option<String> = None;
    let mut slice = (0, 0);
    let mut moves: Vec<(Coord, Coord)> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--position" => {
                let Some(v) = args.get(i + 1) else {
                    usage_exit("--position requires a name");
                };
                position = v.clone();
                i += 2;
            }
            "--rules" => {
                let Some(v) = args.get(i + 1) else {
                    usage_exit("--rules requires a path");
                };
                rules_path = Some(v.clone());
                i += 2;
            }
            "--slice" => {
                let v = parse_ints(&args[i + 1..], 2, "--slice");
                slice = (v[0], v[1]);
                i += 3;
            }
            "--move" => {
                let v = parse_ints(&args[i + 1..], 8, "--move");
                moves.push((
                    Coord::new(v[0], v[1], v[2], v[3]),
                    Coord::new(v[4], v[5], v[6], v[7]),
                ));
                i += 9;
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            x => usage_exit(&format!("Unknown option: {x}")),
        }
    }

    let config = match rules_path {
        None => RulesConfig::default(),
        Some(p) => match RulesConfig::load(Path::new(&p)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load rules: {e}");
                std::process::exit(1);
            }
        },
    };

    let mut board = match positions::by_name(&position, config) {
        Ok(Some(b)) => b,
        Ok(None) => usage_exit(&format!("Unknown position: {position}")),
        Err(e) => {
            eprintln!("Failed to build position {position}: {e}");
            std::process::exit(1);
        }
    };

    for (from, to) in moves {
        match board.apply_move(from, to) {
            Ok(MoveOutcome::Moved) => println!("{from} -> {to}: moved"),
            Ok(MoveOutcome::Captured(p)) => println!("{from} -> {to}: captured {p}"),
            Ok(MoveOutcome::Rejected(reason)) => println!("{from} -> {to}: rejected ({reason:?})"),
            Err(e) => println!("{from} -> {to}: error: {e}"),
        }
    }

    print!("{}", board.render_slice(slice.0, slice.1));
    println!("pieces: {}", board.piece_count());
    for color in Color::ALL {
        report(&board, color);
    }
}

fn report(board: &Board, color: Color) {
    match (board.is_check(color), board.is_checkmate(color)) {
        (Ok(check), Ok(mate)) => println!("{color}: check={check} checkmate={mate}"),
        (Err(e), _) | (_, Err(e)) => println!("{color}: {e}"),
    }
}
