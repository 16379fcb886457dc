//! JSON snapshot file repository.
//!
//! Keeps the table in memory and rewrites the whole file after every
//! mutation. The new snapshot goes to a sibling `.tmp` file which is then
//! renamed over the target, so a crash mid-write leaves the previous snapshot
//! intact. Mutations run on tokio's blocking pool so the file I/O never
//! stalls an async worker.

use async_trait::async_trait;
use log::{debug, info};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::table::StudentTable;
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, StudentRepository};
use crate::models::Student;

/// File-backed repository storing students as a pretty-printed JSON array.
pub struct FileRepository {
    store: Arc<FileStore>,
}

struct FileStore {
    path: PathBuf,
    // Held across the file write so snapshots land in mutation order.
    table: Mutex<StudentTable>,
}

impl FileRepository {
    /// Open the repository at `path`.
    ///
    /// A missing file starts an empty repository; the file is created on the
    /// first write.
    ///
    /// # Errors
    /// `RepositoryError::ConfigurationError` if the file exists but cannot be
    /// read or does not hold a JSON array of students.
    pub fn open(path: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let path = path.into();
        let students = load_snapshot(&path)?;
        info!(
            "Opened student file {} with {} record(s)",
            path.display(),
            students.len()
        );

        Ok(Self {
            store: Arc::new(FileStore {
                path,
                table: Mutex::new(StudentTable::from_students(students)),
            }),
        })
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.store.path
    }

    async fn mutate<T, F>(&self, operation: &'static str, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut StudentTable) -> RepositoryResult<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.mutate(operation, f))
            .await
            .map_err(|e| {
                RepositoryError::internal_with_context(
                    format!("Task join error: {}", e),
                    ErrorContext::new(operation),
                )
            })?
    }
}

impl FileStore {
    fn mutate<T>(
        &self,
        operation: &str,
        f: impl FnOnce(&mut StudentTable) -> RepositoryResult<T>,
    ) -> RepositoryResult<T> {
        let mut table = self.table.lock();
        let mut staged = table.clone();
        let out = f(&mut staged)?;
        self.write_snapshot(&staged)
            .map_err(|e| e.with_operation(operation))?;
        *table = staged;
        Ok(out)
    }

    fn write_snapshot(&self, table: &StudentTable) -> RepositoryResult<()> {
        let body = serde_json::to_vec_pretty(&table.list())?;
        let tmp = self.path.with_extension("tmp");
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;
        debug!(
            "Wrote {} student(s) to {}",
            table.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn load_snapshot(path: &Path) -> RepositoryResult<Vec<Student>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let context = || {
        ErrorContext::new("open_file_repository").with_details(path.display().to_string())
    };
    let content = fs::read_to_string(path).map_err(|e| {
        RepositoryError::configuration_with_context(
            format!("Failed to read student file: {}", e),
            context(),
        )
    })?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|e| {
        RepositoryError::configuration_with_context(
            format!("Failed to parse student file: {}", e),
            context(),
        )
    })
}

#[async_trait]
impl StudentRepository for FileRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let path = self.path();
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(path.exists() || dir.is_dir())
    }

    async fn list_students(&self) -> RepositoryResult<Vec<Student>> {
        Ok(self.store.table.lock().list())
    }

    async fn get_student(&self, id: &str) -> RepositoryResult<Student> {
        self.store.table.lock().get(id)
    }

    async fn insert_student(&self, student: &Student) -> RepositoryResult<Student> {
        let student = student.clone();
        self.mutate("insert_student", move |table| table.insert(&student))
            .await
    }

    async fn replace_student(&self, student: &Student) -> RepositoryResult<Student> {
        let student = student.clone();
        self.mutate("replace_student", move |table| table.replace(&student))
            .await
    }

    async fn delete_student(&self, id: &str) -> RepositoryResult<()> {
        let id = id.to_string();
        self.mutate("delete_student", move |table| table.remove(&id).map(|_| ()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grace() -> Student {
        Student::new("s2", "Grace Hopper", "Computer Science", 3.8)
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileRepository::open(dir.path().join("students.json")).unwrap();

        assert!(repo.list_students().await.unwrap().is_empty());
        assert!(repo.health_check().await.unwrap());
        assert!(!repo.path().exists());
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");

        {
            let repo = FileRepository::open(&path).unwrap();
            repo.insert_student(&grace()).await.unwrap();
            repo.insert_student(&Student::new("s1", "Ada", "", 3.9))
                .await
                .unwrap();
            repo.delete_student("s1").await.unwrap();
        }

        let reopened = FileRepository::open(&path).unwrap();
        assert_eq!(reopened.list_students().await.unwrap(), vec![grace()]);
        assert!(!path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        let repo = FileRepository::open(&path).unwrap();
        repo.insert_student(&grace()).await.unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let err = repo.insert_student(&grace()).await.unwrap_err();
        assert!(err.is_already_exists());
        assert!(repo.delete_student("missing").await.unwrap_err().is_not_found());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_all_reach_the_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        let repo = Arc::new(FileRepository::open(&path).unwrap());

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    let student = Student::new(format!("s{:02}", i), "Student", "", 2.0);
                    repo.insert_student(&student).await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let reopened = FileRepository::open(&path).unwrap();
        assert_eq!(reopened.list_students().await.unwrap().len(), 16);
    }

    #[test]
    fn test_corrupt_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileRepository::open(&path).err().unwrap();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }

    #[test]
    fn test_blank_file_is_empty_repository() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        fs::write(&path, "\n").unwrap();

        assert!(FileRepository::open(&path).is_ok());
    }
}
