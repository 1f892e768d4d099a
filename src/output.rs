use std::io::{self, Write};

/// Writes each cookie on its own line. Writes nothing for an empty slice.
pub fn write_cookies<W: Write>(out: &mut W, cookies: &[String]) -> io::Result<()> {
    for cookie in cookies {
        writeln!(out, "{}", cookie)?;
    }
    out.flush()
}

pub fn print_cookies(cookies: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_cookies(&mut handle, cookies)
}
