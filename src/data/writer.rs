use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::model::Invitation;
use crate::error::Result;

/// Write one `<user_id> <name>` line per invitation, in the given order.
pub fn write_guestlist<W: Write>(invitations: &[Invitation], mut writer: W) -> Result<()> {
    for invitation in invitations {
        writeln!(writer, "{invitation}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the guest list to `path`, replacing any existing file.
pub fn write_guestlist_file(invitations: &[Invitation], path: &Path) -> Result<()> {
    replace_file(path, |out| write_guestlist(invitations, out))
}

/// Write into a temp file next to `path` and rename it over `path` only once
/// `write` has succeeded. On any error the destination is left as it was.
fn replace_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        write(&mut out)?;
        out.flush()?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
