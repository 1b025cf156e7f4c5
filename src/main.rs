use std::{env, fs::read_to_string, path::PathBuf, process::exit, sync::Once, time::Instant};

use indent_lexer::{display_error, lexer::{lexer::Lexer, tokens::TokenKind}};

static TRACING_INIT: Once = Once::new();

/// Enable with `RUST_LOG=indent_lexer=debug` or `RUST_LOG=indent_lexer=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file>", args.first().map(String::as_str).unwrap_or("indent_lexer"));
        exit(2);
    }

    let file_path = PathBuf::from(&args[1]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args[1].clone());

    let file_contents = match read_to_string(&file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path.display(), error);
            exit(1);
        }
    };

    let start = Instant::now();
    let mut lexer = Lexer::new(file_contents, Some(file_name));
    let mut count = 0;

    loop {
        match lexer.next_token() {
            Ok(token) => {
                token.debug();
                count += 1;

                if token.kind == TokenKind::EOF {
                    break;
                }
            }
            Err(error) => {
                display_error(&error, file_path.clone());
                exit(1);
            }
        }
    }

    eprintln!("Tokenized {} tokens in {:?}", count, start.elapsed());
}
