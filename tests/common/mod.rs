#![allow(dead_code)]

use pathtrie::Matcher;

/// Build a single-route matcher chain from a pattern such as
/// `/users/{id}/files/{*rest}`.
///
/// Test-only stand-in for the registration layer: no prefix sharing, no
/// conflict detection.
pub fn chain<T>(pattern: &str, data: T) -> Matcher<T> {
    let mut pieces: Vec<Piece> = Vec::new();
    let mut rest = pattern;
    while let Some(open) = rest.find('{') {
        if open > 0 {
            pieces.push(Piece::Literal(rest[..open].to_string()));
        }
        let close = rest[open..].find('}').expect("unterminated parameter") + open;
        let name = &rest[open + 1..close];
        match name.strip_prefix('*') {
            Some(catch_all) => pieces.push(Piece::CatchAll(catch_all.to_string())),
            None => pieces.push(Piece::Wild(name.to_string())),
        }
        rest = &rest[close + 1..];
    }
    if !rest.is_empty() {
        pieces.push(Piece::Literal(rest.to_string()));
    }

    let mut pieces = pieces.into_iter().rev();
    let mut matcher = match pieces.next() {
        Some(Piece::CatchAll(name)) => Matcher::catch_all(name, data).unwrap(),
        Some(piece) => wrap(piece, Matcher::data(data)),
        None => Matcher::data(data),
    };
    for piece in pieces {
        matcher = wrap(piece, matcher);
    }
    matcher
}

/// A Linear matcher over one chain per `(pattern, data)` pair.
pub fn routes<T: Clone>(table: &[(&str, T)]) -> Matcher<T> {
    Matcher::linear(
        table
            .iter()
            .map(|(pattern, data)| chain(pattern, data.clone())),
    )
    .unwrap()
}

/// Route `tracing` output through the test harness for the current thread.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}

enum Piece {
    Literal(String),
    Wild(String),
    CatchAll(String),
}

fn wrap<T>(piece: Piece, child: Matcher<T>) -> Matcher<T> {
    match piece {
        Piece::Literal(literal) => Matcher::static_path(literal, child).unwrap(),
        Piece::Wild(name) => Matcher::wild(name, child).unwrap(),
        Piece::CatchAll(_) => panic!("catch-all must be the last piece of a pattern"),
    }
}
