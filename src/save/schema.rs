/// Schema metadata for PostgreSQL tables.
///
/// Pure description of table structure; statements are built at compile
/// time with [`const_format::concatcp!`]. Reads and writes live with the
/// store that owns the table.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}
