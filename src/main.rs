use std::{
    env,
    fs::{self, read_to_string},
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use paslex::{
    errors::errors::{ErrorTip, LexError},
    get_line,
    lexer::scanner::scan,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: paslex <source-file>");
        process::exit(1);
    }

    let input_path = PathBuf::from(&args[1]);
    let source = match read_to_string(&input_path) {
        Ok(contents) => contents,
        Err(_) => {
            eprintln!(
                "File '{}' not found. Create the file with the source code.",
                input_path.display()
            );
            process::exit(1);
        }
    };

    let start = Instant::now();
    let output = scan(&source);
    println!("Scanned in {:?}", start.elapsed());

    let listing: String = output
        .tokens
        .iter()
        .map(|token| format!("{}\n", token))
        .collect();

    let output_path = token_listing_path(&input_path);
    if let Err(err) = fs::write(&output_path, listing) {
        eprintln!("Failed to write '{}': {}", output_path.display(), err);
        process::exit(1);
    }

    println!(
        "Analysis complete. {} tokens written to '{}'.",
        output.tokens.len(),
        output_path.display()
    );

    println!("Symbol table (identifiers):");
    for (_, entry) in output.symbols.iter() {
        println!(
            "  {} -> occurrences: {}",
            entry.original_spelling, entry.occurrences
        );
    }

    for token in &output.tokens {
        if let Some(cause) = token.cause {
            let error = LexError::new(cause, token.lexeme.clone(), token.pos);
            display_error(error, &source, &input_path);
        }
    }
}

fn token_listing_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("out"));

    input.with_file_name(format!("{}_tokens.txt", stem))
}

fn display_error(error: LexError, source: &str, file: &Path) {
    /*
        Error: name (tip)
        -> final.pas
           |
        20 | x := #;
           | -----^
    */

    let position = error.get_position();
    let line_text = get_line(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.display());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
