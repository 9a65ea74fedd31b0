use sc_core::SpellcastError;

pub(crate) fn emit_error(error: SpellcastError) -> i32 {
    tracing::error!(code = error.code(), "{}", error);
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code());
    println!(
        "ERROR_MSG_JSON:{}",
        serde_json::to_string(&error.to_string()).expect("string json")
    );
    1
}
