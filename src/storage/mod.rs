use anyhow::Context;
use rusqlite::{Connection, params};
use std::path::Path;

/// Fixed key under which the theme preference is stored.
const DARK_MODE_KEY: &str = "dark_mode";

pub struct Prefs {
    conn: Connection,
}

impl Prefs {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }

        let conn = Connection::open(path).with_context(|| format!("open {}", path.display()))?;
        let s = Self { conn };
        s.init_schema()?;
        Ok(s)
    }

    fn init_schema(&self) -> anyhow::Result<()> {
        self.conn
            .execute_batch(
                r#"
CREATE TABLE IF NOT EXISTS prefs (
  key TEXT PRIMARY KEY,
  value TEXT NOT NULL
);
"#,
            )
            .context("init schema")?;
        Ok(())
    }

    /// Stored as the literal strings "true" / "false". Anything else (or
    /// nothing) reads as light mode.
    pub fn dark_mode(&self) -> anyhow::Result<bool> {
        Ok(self.get(DARK_MODE_KEY)?.as_deref() == Some("true"))
    }

    pub fn set_dark_mode(&self, on: bool) -> anyhow::Result<()> {
        self.set(DARK_MODE_KEY, if on { "true" } else { "false" })
    }

    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM prefs WHERE key=?1")
            .context("prepare pref read")?;
        let mut rows = stmt.query(params![key]).context("query pref")?;
        if let Some(row) = rows.next().context("read pref row")? {
            let value: String = row.get(0)?;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.conn
            .execute(
                r#"
INSERT INTO prefs(key, value)
VALUES(?1, ?2)
ON CONFLICT(key) DO UPDATE SET
  value=excluded.value
"#,
                params![key, value],
            )
            .context("write pref")?;
        Ok(())
    }
}
