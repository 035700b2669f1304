use ini_doc::{from_str, to_string, FormatOptions, Ini};

const CONTENT: &str = "
	[section1]
		item1=value1
	# comment with a sharp
	item2=value2
; comment with a dot-comma
 [ section2  ]
	item1=value1
	; comment 3
	item2=value2
";

#[test]
fn test_walkthrough() {
    let mut ini = from_str(CONTENT);

    assert_eq!(ini.sections().len(), 2);
    assert_eq!(ini.items("section1").len(), 2);

    assert!(ini.section_exists("section1"));
    assert!(!ini.section_exists("does not exists"));
    assert!(ini.exists("section1", "item1"));
    assert!(!ini.exists("section1", "does not exists"));
    assert!(!ini.exists("does not exists", "does not exists"));

    assert_eq!(ini.get("section1", "item1"), Some("value1"));

    assert!(ini.set("section1", "item2", "edit value"));
    assert_eq!(ini.get("section1", "item2"), Some("edit value"));

    assert!(ini.rename_section("section2", "section3"));
    assert!(ini.section_exists("section3"));

    assert!(ini.rename_item("section3", "item1", "edit item"));
    assert!(ini.exists("section3", "edit item"));

    assert!(ini.add_section("added section"));
    assert!(!ini.add_section("added section"));

    assert!(ini.add_item("added section", "added item", "add value"));
    assert!(!ini.add_item("added section", "added item", "add value"));

    ini.set_or_create("new section", "new item", "new value");
    assert_eq!(ini.get("new section", "new item"), Some("new value"));
    ini.set_or_create("new section", "new item", "another value");
    assert_eq!(ini.get("new section", "new item"), Some("another value"));

    assert_eq!(
        ini.sections(),
        vec!["section1", "section3", "added section", "new section"]
    );
}

#[test]
fn test_top_comment_scenario() {
    let ini = from_str("; top comment\n[section1]\nitem1=value1\n");

    assert_eq!(ini.sections(), vec!["section1"]);
    assert!(ini.item_comments("section1", "item1").is_empty());
    assert_eq!(ini.section_comments("section1"), ["top comment"]);
    assert_eq!(ini.get("section1", "item1"), Some("value1"));
}

#[test]
fn test_section_comments_keep_order() {
    let ini = from_str("; first\n# second\n[sec]\nkey = value\n");
    assert_eq!(ini.section_comments("sec"), ["first", "second"]);
    assert!(ini.item_comments("sec", "key").is_empty());
}

#[test]
fn test_implicit_section_creation() {
    let mut ini = Ini::new();
    assert!(ini.add_item("S", "K", "V"));
    assert!(ini.section_exists("S"));
    assert!(ini.section_comments("S").is_empty());
    assert_eq!(ini.get("S", "K"), Some("V"));
}

#[test]
fn test_delete_twice() {
    let mut ini = from_str(CONTENT);
    assert!(ini.delete_item("section1", "item1"));
    assert!(!ini.item_exists("section1", "item1"));
    assert!(!ini.delete_item("section1", "item1"));
    assert!(ini.delete_section("section1"));
    assert!(!ini.delete_section("section1"));
}

#[test]
fn test_comment_index_deletion() {
    let mut ini = from_str("[s]\n; a\n; b\n; c\nk = v\n");
    assert!(ini.delete_item_comment("s", "k", 1));
    assert_eq!(ini.item_comments("s", "k"), ["a", "c"]);
    assert!(ini.delete_item_comment("s", "k", 99));
    assert_eq!(ini.item_comments("s", "k"), ["a", "c"]);
}

#[test]
fn test_load_resets_format_options() {
    let mut ini = from_str("[a]\nx = 1\n");
    ini.set_options(FormatOptions::compact().with_comments(false));
    assert_eq!(to_string(&ini), "[a]\r\nx=1\r\n");

    ini.load_from_str("; kept\n[b]\ny = 2\n");
    assert_eq!(ini.options(), &FormatOptions::default());
    assert_eq!(ini.sections(), vec!["b"]);
    assert_eq!(to_string(&ini), "; kept\r\n[b]\r\n  y = 2\r\n");
}

#[test]
fn test_edit_then_reparse() {
    let mut ini = from_str(CONTENT);
    ini.add_section_comment("section1", "managed by tooling");
    ini.add_item_comment("section2", "item1", "primary");
    ini.rename_item("section1", "item2", "renamed");
    ini.delete_section_comments("section2");

    let reparsed = from_str(&to_string(&ini));
    assert_eq!(reparsed, ini);
    assert_eq!(reparsed.section_comments("section1"), ["managed by tooling"]);
    assert_eq!(reparsed.item_comments("section2", "item1"), ["primary"]);
    assert!(reparsed.section_comments("section2").is_empty());
    assert_eq!(reparsed.items("section1"), vec!["item1", "renamed"]);
}

#[test]
fn test_values_are_not_coerced() {
    let ini = from_str("[n]\ncount = 007\nflag = TRUE\nratio = 1.50\n");
    assert_eq!(ini.get("n", "count"), Some("007"));
    assert_eq!(ini.get("n", "flag"), Some("TRUE"));
    let ratio: f64 = ini.get("n", "ratio").unwrap().parse().unwrap();
    assert_eq!(ratio, 1.5);
}

#[test]
fn test_case_sensitive_names() {
    let ini = from_str("[Server]\nHost = a\n");
    assert!(ini.section_exists("Server"));
    assert!(!ini.section_exists("server"));
    assert_eq!(ini.get("Server", "host"), None);
}
