pub mod employee;
pub mod report;

use assetreg_core::Table;
use serde::Serialize;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Where and how command results are printed
///
/// Results go to stdout as one text block or one JSON document; logs go to
/// stderr.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Print a result table (aligned text or JSON)
    pub fn table(&self, table: &Table) -> CliResult {
        if self.json {
            return self.value(table);
        }
        print!("{}", table.render());
        println!("({} rows)", table.len());
        Ok(())
    }

    /// Print a status line with no table (e.g. "not found")
    pub fn notice(&self, status: &str, message: &str) -> CliResult {
        if self.json {
            return self.value(&Notice {
                status,
                message,
                table: None,
            });
        }
        println!("{}", message);
        Ok(())
    }

    /// Print a status line followed by the resulting table
    pub fn outcome(&self, status: &str, message: &str, table: &Table) -> CliResult {
        if self.json {
            return self.value(&Notice {
                status,
                message,
                table: Some(table),
            });
        }
        println!("{}", message);
        self.table(table)
    }

    pub fn value<T: Serialize + ?Sized>(&self, value: &T) -> CliResult {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

#[derive(Serialize)]
struct Notice<'a> {
    status: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<&'a Table>,
}
