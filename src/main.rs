use std::{env, fs::read_to_string, path::PathBuf, process};

use dolang::{compile, display_error};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: dolang <file>");
        process::exit(1);
    }

    let file_path = &args[1];
    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("cannot open file {}: {}", file_path, error);
            process::exit(1);
        }
    };

    match compile(&source) {
        Ok(output) => print!("{}", output),
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            process::exit(1);
        }
    }
}
