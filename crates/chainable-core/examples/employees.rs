//! Walk an employee directory through a chain of transformations
//!
//! Run with `cargo run --example employees`.

use chainable_core::{chain, Accessor, Result};
use serde_json::{json, Value};

fn main() -> Result<()> {
    let directory = json!({
        "1": {"firstName": "Nick", "lastName": "Coronado", "isAdmin": true, "hr_id": "NICK"},
        "2": {"firstName": "Joe", "lastName": "Shmoe", "isAdmin": false, "hr_id": "JSHMO"},
        "3": {"firstName": "Jane", "lastName": "Doe", "isAdmin": true, "hr_id": "WHO"}
    });

    // Re-key admins by HR id, keeping only their names.
    let admins = chain(directory.clone())
        .filter(|entry| entry.value["isAdmin"] == json!(true))?
        .to_array()?
        .to_object("hr_id")?
        .map(|entry| {
            let first = entry.value["firstName"].as_str().unwrap_or_default();
            let last = entry.value["lastName"].as_str().unwrap_or_default();
            Value::String(format!("{} {}", first, last))
        })?
        .done();
    println!("admins: {}", serde_json::to_string_pretty(&admins)?);

    let by_role = chain(directory)
        .to_array()?
        .group_by_with(
            Accessor::func(|e| json!(if e["isAdmin"] == json!(true) { "admin" } else { "staff" })),
            "hr_id",
        )?
        .done();
    println!("by role: {}", by_role);

    Ok(())
}
