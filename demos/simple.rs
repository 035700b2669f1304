//! Parse, edit and print an INI document.
//!
//! Run with: cargo run --example simple

use ini_doc::from_str;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "\
; connection settings
[server]
host = localhost
port = 8080

[features]
beta = false
";

    let mut ini = from_str(text);
    println!("Sections: {:?}", ini.sections());

    let port: u16 = ini.get("server", "port").unwrap_or("80").parse()?;
    println!("Port: {}", port);

    ini.set("server", "host", "0.0.0.0");
    ini.set_or_create("features", "beta", "true");
    ini.add_item("logging", "level", "info");

    println!("\nINI output:\n{}", ini);

    let reparsed = from_str(&ini.to_string());
    assert_eq!(reparsed, ini);
    println!("✓ Round-trip successful");

    Ok(())
}
