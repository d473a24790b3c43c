//! Schema-backed branded types: a phone number brand compiled from a JSON
//! Schema document.

use branded::prelude::*;
use serde_json::json;

enum PhoneNumber {}

type Phone = Branded<String, PhoneNumber>;

fn main() -> Result<(), SchemaError> {
    // Constructed once, passed explicitly to every handler it compiles.
    let compiler = JsonSchemaCompiler::new();

    let handler = TypeHandler::<String, PhoneNumber>::from_schema(
        &compiler,
        &json!({ "pattern": "^[0-9]{10}$" }),
    )?;

    let phone: Phone = match handler.cast("0123456789".to_string()) {
        Ok(phone) => phone,
        Err(error) => {
            println!("unexpected: {error}");
            return Ok(());
        }
    };
    println!("branded phone number: {phone}");

    // Safe conversion branches on absence instead of failing loudly.
    if let Some(phone) = handler.create("123".to_string()) {
        println!("branded: {phone}");
    } else if let Err(error) = handler.validate(&"123".to_string()) {
        println!("\"123\" is not a phone number: {error}");
    }

    Ok(())
}
