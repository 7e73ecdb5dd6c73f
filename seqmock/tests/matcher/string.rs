use seqmock::matcher::{is_empty, str_contains, str_ends_with, str_starts_with};
use seqmock::{args, Call};

#[test]
fn string_matchers() {
    let expected = Call::new("log").with_args(args![
        str_starts_with("GET"),
        str_ends_with(".html"),
        str_contains("200"),
        is_empty(),
    ]);

    let matching = Call::new("log").with_args(args![
        "GET /",
        String::from("index.html"),
        "status 200 ok",
        ""
    ]);
    let wrong = Call::new("log").with_args(args!["POST /", "index.html", "status 200 ok", ""]);

    assert_eq!(expected, matching);
    assert_ne!(expected, wrong);
}

#[test]
fn non_string_never_matches() {
    let expected = Call::new("log").with_args(args![str_contains("1")]);

    assert_ne!(expected, Call::new("log").with_args(args![1]));
}
