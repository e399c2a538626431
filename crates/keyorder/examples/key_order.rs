//! Prints the key declaration order of a JSON file, one object per line.
//!
//! ```text
//! $ cargo run -p keyorder --example key_order -- config.json
//! root: ["name", "age", "favoriteFruits"]
//! root.favoriteFruits: ["bannana", "apple", "peach"]
//! ```
//!
//! This is exactly what a JSON decoder into an unordered map cannot tell
//! you: the order in which the source declared its keys.

use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: key_order <file.json>");
        return ExitCode::FAILURE;
    };

    match keyorder::parse_file(&path) {
        Ok(map) => {
            for (object_path, keys) in map.iter() {
                println!("{object_path}: {keys:?}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{path}: {err}");
            ExitCode::FAILURE
        }
    }
}
