//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Task records.
    ///
    /// `id` is a `BIGSERIAL` primary key assigned by the store on insert.
    tasks (id) {
        /// Primary key assigned by the store.
        id -> Int8,
        /// Task name; validated as non-blank before it reaches the store.
        name -> Text,
        /// Completion flag, `false` unless supplied.
        done -> Bool,
    }
}
