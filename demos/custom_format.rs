//! Customizing INI output with FormatOptions.
//!
//! Run with: cargo run --example custom_format

use ini_doc::{ini, to_string_with_options, FormatOptions};

fn main() {
    let mut config = ini! {
        "app" => { "name" => "MyApp", "version" => "1.0.0" },
        "paths" => { "data" => "/var/lib/myapp", "logs" => "/var/log/myapp" },
    };
    config.add_section_comment("paths", "absolute paths only");

    println!("Default:");
    println!("{}", config);

    println!("Compact:");
    println!("{}", to_string_with_options(&config, FormatOptions::compact()));

    println!("Tabs and hash comments:");
    let options = FormatOptions::new()
        .with_item_prefix("\t")
        .with_item_separator("")
        .with_comment_prefix("# ");
    println!("{}", to_string_with_options(&config, options));
}
