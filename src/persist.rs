use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::error::{Result, TaskFetchError};
use crate::models::Task;

/// Pretty-printed JSON for the surviving tasks, two-space indented.
pub fn render_json(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tasks)?)
}

/// Replaces `path` with the rendered tasks. The content lands in a sibling
/// temp file first and is renamed over the target, so readers never see a
/// half-written file. The replacement keeps the permissions of the file it
/// replaces; a new file gets the same mode a plain create would give it.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    let json = render_json(tasks)?;
    let write_err = |source: io::Error| TaskFetchError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = staging_file(dir).map_err(write_err)?;
    if let Ok(existing) = fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }
    file.write_all(json.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    log::info!("wrote {} tasks to {}", tasks.len(), path.display());
    Ok(())
}

// Temp files default to 0600; ask for 0666 so the umask decides, as with
// `File::create`.
#[cfg(unix)]
fn staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::fs;

    #[test]
    fn empty_collection_is_an_empty_array() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn output_is_indented_and_keeps_field_order() {
        let tasks = [Task::new(json!({ "titulo": "Format", "concluida": true, "id": 7 }))];
        let text = render_json(&tasks).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"titulo\": \"Format\",\n    \"concluida\": true,\n    \"id\": 7\n  }\n]"
        );
    }

    #[test]
    fn overwrites_previous_content_and_keeps_accents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.json");
        fs::write(&path, "conteúdo antigo que é bem mais longo do que o novo").unwrap();

        let title = "Tarefa com acento é ç";
        write_tasks(&path, &[Task::new(json!({ "titulo": title, "concluida": true }))]).unwrap();

        let saved: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved[0]["titulo"], title);
    }

    #[cfg(unix)]
    #[test]
    fn rewrite_keeps_the_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.json");
        for mode in [0o644, 0o640] {
            fs::write(&path, "[]").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();

            write_tasks(&path, &[Task::new(json!({ "titulo": "T1" }))]).unwrap();

            let after = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
            assert_eq!(after, mode, "mode {mode:o} became {after:o}");
        }
    }

    #[cfg(unix)]
    #[test]
    fn new_file_gets_the_same_mode_as_a_plain_create() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("reference.json");
        fs::write(&reference, "[]").unwrap();
        let path = dir.path().join("output.json");

        write_tasks(&path, &[]).unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&reference));
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nao").join("existe").join("output.json");

        let err = write_tasks(&path, &[]).unwrap_err();
        assert!(matches!(err, TaskFetchError::Write { .. }));
        assert!(!path.exists());
    }
}
