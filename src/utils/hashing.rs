//! Content digests for merge reports

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Hex-encoded SHA-256 of a file's content, read in fixed-size blocks.
pub fn file_sha256(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::file_sha256;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn digest_of_empty_file() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("empty.js");
        fs::write(&path, "").expect("write");
        assert_eq!(
            file_sha256(&path).expect("hash"),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn digest_changes_with_content() {
        let tmp = TempDir::new().expect("tmp");
        let a = tmp.path().join("a.js");
        let b = tmp.path().join("b.js");
        fs::write(&a, "x=1;\n").expect("write");
        fs::write(&b, "x=2;\n").expect("write");
        assert_ne!(file_sha256(&a).expect("hash"), file_sha256(&b).expect("hash"));
    }
}
