use ini_doc::{from_str, Ini};
use serde_json::json;

#[test]
fn test_export_to_json() {
    let ini = from_str("; top\n[server]\n; addr\nhost = localhost\nport = 80\n");
    let value = serde_json::to_value(&ini).unwrap();

    assert_eq!(
        value,
        json!({
            "sections": {
                "server": {
                    "items": {
                        "host": { "value": "localhost", "comments": ["addr"] },
                        "port": { "value": "80", "comments": [] }
                    },
                    "comments": ["top"]
                }
            }
        })
    );
}

#[test]
fn test_json_preserves_order() {
    let ini = from_str("[z]\n[a]\n[m]\n");
    let text = serde_json::to_string(&ini).unwrap();
    let z = text.find("\"z\"").unwrap();
    let a = text.find("\"a\"").unwrap();
    let m = text.find("\"m\"").unwrap();
    assert!(z < a && a < m);
}

#[test]
fn test_import_from_json() {
    let ini = from_str("; top\n[server]\nhost = localhost\n");
    let text = serde_json::to_string(&ini).unwrap();
    let back: Ini = serde_json::from_str(&text).unwrap();
    assert_eq!(back, ini);
    assert_eq!(back.to_string(), ini.to_string());
}
