use std::io::Write;

use crate::Result;
use crate::log_targets;
use crate::common::checker;


/// Write `names[i] ids[i][0] ids[i][1] ...` as the `i`-th line.
/// Fails with `InconsistentNamesLength`
/// if `names` and `ids` differ in length; nothing is written then.
pub fn write_partitions<W, S>(mut writer: W, names: &[S], ids: &[Vec<usize>])
    -> Result<()>
    where W: Write,
          S: AsRef<str>,
{
    checker::names_aligned(names.len(), ids.len())?;

    for (name, group) in names.iter().zip(ids) {
        let mut line = name.as_ref().to_string();
        for id in group {
            line.push(' ');
            line.push_str(&id.to_string());
        }
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;

    log::debug!(target: log_targets::WRITER, "wrote {} partitions", names.len());
    Ok(())
}
