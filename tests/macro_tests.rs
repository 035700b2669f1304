use ini_doc::{ini, to_string_with_options, FormatOptions, Ini};

#[test]
fn test_empty() {
    let config = ini!();
    assert_eq!(config, Ini::new());
}

#[test]
fn test_single_section() {
    let config = ini! {
        "server" => { "host" => "localhost", "port" => "8080" }
    };
    assert_eq!(config.sections(), vec!["server"]);
    assert_eq!(config.items("server"), vec!["host", "port"]);
    assert_eq!(config.get("server", "host"), Some("localhost"));
}

#[test]
fn test_multiple_sections_with_trailing_commas() {
    let config = ini! {
        "a" => { "x" => "1", },
        "b" => {},
        "c" => { "y" => "2" },
    };
    assert_eq!(config.sections(), vec!["a", "b", "c"]);
    assert!(config.items("b").is_empty());
    assert_eq!(
        to_string_with_options(&config, FormatOptions::compact()),
        "[a]\r\nx=1\r\n[b]\r\n[c]\r\ny=2\r\n"
    );
}

#[test]
fn test_runtime_expressions() {
    let section = String::from("dynamic");
    let port = 9000 + 1;
    let config = ini! {
        section => { "port" => port.to_string() }
    };
    assert_eq!(config.get("dynamic", "port"), Some("9001"));
}

#[test]
fn test_repeated_item_overwrites() {
    let config = ini! {
        "s" => { "k" => "first", "k" => "second" }
    };
    assert_eq!(config.items("s"), vec!["k"]);
    assert_eq!(config.get("s", "k"), Some("second"));
}

#[test]
fn test_macro_matches_parsed_document() {
    let built = ini! {
        "section1" => { "item1" => "value1" },
    };
    let parsed = ini_doc::from_str("[section1]\nitem1 = value1\n");
    assert_eq!(built, parsed);
}
