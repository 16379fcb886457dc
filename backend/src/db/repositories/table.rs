//! Ordered in-memory student table shared by the bundled repositories.

use std::collections::BTreeMap;

use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult};
use crate::models::Student;

/// Students keyed by id. Iteration order is id order.
#[derive(Debug, Clone, Default)]
pub(crate) struct StudentTable {
    rows: BTreeMap<String, Student>,
}

impl StudentTable {
    pub(crate) fn from_students(students: impl IntoIterator<Item = Student>) -> Self {
        Self {
            rows: students
                .into_iter()
                .map(|student| (student.id.clone(), student))
                .collect(),
        }
    }

    pub(crate) fn list(&self) -> Vec<Student> {
        self.rows.values().cloned().collect()
    }

    pub(crate) fn get(&self, id: &str) -> RepositoryResult<Student> {
        self.rows
            .get(id)
            .cloned()
            .ok_or_else(|| not_found("get_student", id))
    }

    pub(crate) fn insert(&mut self, student: &Student) -> RepositoryResult<Student> {
        if self.rows.contains_key(&student.id) {
            return Err(RepositoryError::already_exists_with_context(
                format!("student with id '{}' already exists", student.id),
                ErrorContext::student("insert_student", &student.id),
            ));
        }
        self.rows.insert(student.id.clone(), student.clone());
        Ok(student.clone())
    }

    pub(crate) fn replace(&mut self, student: &Student) -> RepositoryResult<Student> {
        match self.rows.get_mut(&student.id) {
            Some(existing) => {
                *existing = student.clone();
                Ok(student.clone())
            }
            None => Err(not_found("replace_student", &student.id)),
        }
    }

    pub(crate) fn remove(&mut self, id: &str) -> RepositoryResult<Student> {
        self.rows
            .remove(id)
            .ok_or_else(|| not_found("delete_student", id))
    }

    pub(crate) fn clear(&mut self) {
        self.rows.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

fn not_found(operation: &str, id: &str) -> RepositoryError {
    RepositoryError::not_found_with_context(
        "Student not found",
        ErrorContext::student(operation, id),
    )
}
