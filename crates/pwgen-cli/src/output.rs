use std::io::{self, Write};

/// Width assumed when the terminal size is unknown.
pub const DEFAULT_TERM_WIDTH: usize = 80;
/// Rows printed when filling a screen in column mode.
pub const SCREEN_ROWS: usize = 20;

pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .ok()
        .map(|(columns, _)| usize::from(columns))
        .filter(|width| *width > 0)
        .unwrap_or(DEFAULT_TERM_WIDTH)
}

/// Passwords per line: as many as fit with one separating space.
pub fn column_count(width: usize, length: usize) -> usize {
    (width / (length + 1)).max(1)
}

/// Count used when none was requested: a screenful in column mode,
/// otherwise a single password.
pub fn default_count(columns: Option<usize>) -> usize {
    match columns {
        Some(columns) => columns * SCREEN_ROWS,
        None => 1,
    }
}

/// Write passwords separated by spaces, breaking the line every `columns`.
pub fn write_passwords<W: Write>(
    out: &mut W,
    passwords: &[String],
    columns: usize,
) -> io::Result<()> {
    let columns = columns.max(1);
    for (index, password) in passwords.iter().enumerate() {
        out.write_all(password.as_bytes())?;
        let last_in_row = index % columns == columns - 1;
        if last_in_row || index + 1 == passwords.len() {
            out.write_all(b"\n")?;
        } else {
            out.write_all(b" ")?;
        }
    }
    out.flush()
}
