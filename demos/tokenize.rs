//! Tokenizes a GraphQL source file given on the command line and prints one
//! line per token to stdout. Logging is routed through `env_logger`, same as
//! the teacher workspace's own standalone binaries.

use std::env;
use std::fs;
use std::process::ExitCode;

use gql_lexer::Lexer;

fn main() -> ExitCode {
    env_logger::init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), String> {
    let path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: tokenize <path/to/file.graphql>".to_string())?;

    let source = fs::read_to_string(&path).map_err(|e| format!("reading {}: {}", path, e))?;

    let mut lexer = Lexer::new(source.as_bytes()).map_err(|e| e.to_string())?;
    loop {
        let more = lexer.advance().map_err(|e| e.to_string())?;
        let token = lexer.current_token();
        println!(
            "{:>4}:{:<4} {:?} [{}, {}) {:?}",
            token.line,
            token.column,
            token.kind,
            token.start,
            token.end,
            token.value_str(),
        );
        if !more {
            break;
        }
    }

    Ok(())
}
