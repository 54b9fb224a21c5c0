//! Integration tests for display options

use toolbox_debug::{DisplayOptions, parse_options};

#[test]
fn every_form_is_parsed() {
    let forms = [
        parse_options(()),
        parse_options("console"),
        parse_options(String::from("vardump")),
        parse_options(["console", "vardump"]),
        parse_options(vec![String::from("console")]),
    ];
    assert!(forms.iter().all(DisplayOptions::is_parsed));
}

#[test]
fn parsing_twice_changes_nothing() {
    let once = parse_options(["vardump", " console "]);
    let twice = parse_options(&once);
    assert_eq!(once, twice);
    assert_eq!(twice.to_string(), "[console, parsed, vardump]");
}

#[test]
fn unknown_flags_are_kept_but_inert() {
    let options = parse_options("shout");
    assert!(options.has("shout"));
    assert!(!options.is_console());
    assert!(!options.is_vardump());
}

#[test]
fn builder_flags() {
    let options = DisplayOptions::new().console().vardump();
    assert!(options.is_console());
    assert!(options.is_vardump());
    let flags: Vec<&str> = options.flags().collect();
    assert_eq!(flags, vec!["console", "parsed", "vardump"]);
}
