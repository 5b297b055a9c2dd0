use std::{env, fs, path::PathBuf, time::Instant};

use minilex::{
    display_error,
    lexer::lexer::{dump_tokens, tokenize},
    symtab::symtab::SymbolTable,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        panic!("Usage: minilex <source-file> [token-dump-file]");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let path = PathBuf::from(file_path);
    let file_contents = fs::read_to_string(&path).expect("Failed to read file!");

    let start = Instant::now();

    let mut symbols = SymbolTable::new();
    let tokens = tokenize(file_contents, Some(String::from(file_name)), &mut symbols);

    if tokens.is_err() {
        display_error(tokens.err().unwrap(), path);
        panic!()
    }

    println!("Tokenized in {:?}", start.elapsed());

    let tokens = tokens.unwrap();
    let dump = dump_tokens(&tokens);

    if args.len() == 3 {
        fs::write(&args[2], &dump).expect("Failed to write token dump!");
        println!("Wrote {} tokens to {}", tokens.len(), args[2]);
    } else {
        print!("{}", dump);
    }

    println!("Registered {} identifiers", symbols.len());
    for entry in symbols.entries() {
        println!("  {}", entry.get_text());
    }
}
