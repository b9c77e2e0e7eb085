use std::io::Write;

use tempfile::NamedTempFile;

/// Writes `content` to a fresh temporary file and returns its handle.
pub fn write_fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp fixture");
    write!(file, "{}", content).expect("write temp fixture");
    file
}

/// Record file mirroring the shape of the production export: a non-data
/// banner row, three records for user 10 and five for user 11.
pub fn presence_fixture() -> NamedTempFile {
    write_fixture(
        "# presence records export\n\
         10,2013-09-10,09:39:05,17:59:52\n\
         10,2013-09-11,09:19:52,16:07:37\n\
         10,2013-09-12,10:48:46,17:23:51\n\
         11,2013-09-09,09:12:14,15:54:17\n\
         11,2013-09-10,09:19:50,13:55:54\n\
         11,2013-09-11,09:13:26,16:15:27\n\
         11,2013-09-12,10:18:36,16:41:25\n\
         11,2013-09-13,08:59:25,16:23:54\n",
    )
}
