pub mod account;
pub mod connection;
pub mod transaction;

/// Derive the storage table name for a program: `prefix_{programId}` with
/// every character outside `[A-Za-z0-9_]` replaced by `_`, so the result is
/// safe to splice into DDL.
pub fn table_name(prefix: &str, program_id: &str) -> String {
    let sanitized: String = program_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    format!("{}_{}", prefix, sanitized)
}
