use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub fn load_dump(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .expect("failed to read stdin");
        return Ok(buf);
    }
    fs::read_to_string(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dump_file_reads_as_an_error() {
        let err = load_dump(Path::new("/no/such/tsdecl-dump.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
