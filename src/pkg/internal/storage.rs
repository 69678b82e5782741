use std::path::{Path, PathBuf};

use tokio::{fs, io::AsyncWriteExt};
use uuid::Uuid;

use crate::prelude::Result;

// resumes land on the local filesystem; the stored reference is the bare
// filename, resolvable via resume_disk_path
pub async fn save_resume(upload_dir: &str, original_filename: &str, data: &[u8]) -> Result<String> {
    fs::create_dir_all(upload_dir).await?;
    let safe_name = sanitize(original_filename);
    let filename = format!("{}-{}", Uuid::new_v4(), safe_name);
    let path = Path::new(upload_dir).join(&filename);
    let mut file = fs::File::create(&path).await?;
    file.write_all(data).await?;
    tracing::debug!("stored resume at {}", path.display());
    Ok(filename)
}

pub fn resume_disk_path(upload_dir: &str, filename: &str) -> PathBuf {
    Path::new(upload_dir).join(filename)
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ' ' => '_',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[tokio::test]
    #[traced_test]
    async fn test_save_and_resolve_resume() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let dir_str = dir.path().to_str().expect("utf8 tempdir").to_string();
        let filename = save_resume(&dir_str, "my resume.pdf", b"%PDF-1.4 fake").await?;
        assert!(filename.ends_with("my_resume.pdf"));
        let stored = resume_disk_path(&dir_str, &filename);
        let contents = fs::read(&stored).await?;
        assert_eq!(contents, b"%PDF-1.4 fake");
        Ok(())
    }

    #[test]
    fn test_sanitize_strips_path_separators() {
        assert_eq!(sanitize("../etc/passwd"), ".._etc_passwd");
    }
}
