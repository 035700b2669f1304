//! Working with section and item comments.
//!
//! Run with: cargo run --example comments

use ini_doc::Ini;

fn main() {
    let mut ini = ini_doc::from_str(
        "; Database configuration\n\
         # edited by hand\n\
         [database]\n\
         ; account used by the app\n\
         user = app\n\
         password = secret\n\
         ; nothing follows this comment, so it is dropped\n",
    );

    println!("Section comments: {:?}", ini.section_comments("database"));
    println!("Item comments:    {:?}", ini.item_comments("database", "user"));

    ini.add_item_comment("database", "password", "rotate every 90 days");
    ini.delete_section_comment("database", 1);

    println!("\nWith comments:\n{}", ini);

    ini.options_mut().with_comments = false;
    println!("Without comments:\n{}", ini);

    let mut copy = Ini::new();
    copy.load_from_str(&ini_doc::to_string_with_options(
        &ini,
        ini_doc::FormatOptions::default(),
    ));
    assert_eq!(copy.item_comments("database", "password"), ["rotate every 90 days"]);
}
