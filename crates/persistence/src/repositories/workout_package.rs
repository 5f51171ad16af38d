//! Workout package repository for database operations.

use domain::models::exercise::encode_exercises;
use domain::models::workout_package::NewWorkoutPackage;
use sqlx::SqlitePool;

use crate::entities::WorkoutPackageEntity;
use crate::metrics::QueryTimer;
use crate::repositories::RepositoryError;

/// Repository for workout package database operations.
#[derive(Clone)]
pub struct WorkoutPackageRepository {
    pool: SqlitePool,
}

impl WorkoutPackageRepository {
    /// Creates a new WorkoutPackageRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all packages, newest first.
    pub async fn list(&self) -> Result<Vec<WorkoutPackageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_workout_packages");
        let result = sqlx::query_as::<_, WorkoutPackageEntity>(
            r#"
            SELECT id, name, exercises, focus, duration, created_by, created_at
            FROM workout_packages
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a new package.
    pub async fn create(&self, package: &NewWorkoutPackage) -> Result<(), RepositoryError> {
        let exercises = encode_exercises(&package.exercises)?;

        let timer = QueryTimer::new("create_workout_package");
        let result = sqlx::query(
            r#"
            INSERT INTO workout_packages (id, name, exercises, focus, duration, created_by, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&package.id)
        .bind(&package.name)
        .bind(exercises)
        .bind(&package.focus)
        .bind(&package.duration)
        .bind(&package.created_by)
        .bind(&package.created_at)
        .execute(&self.pool)
        .await;
        timer.record();
        result?;
        Ok(())
    }

    /// Delete a package. Returns false when no package had this id.
    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_workout_package");
        let result = sqlx::query("DELETE FROM workout_packages WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        result.map(|r| r.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::tests::provisioned_pool;
    use domain::models::{Exercise, WorkoutPackage};

    fn package(id: &str, created_at: &str) -> NewWorkoutPackage {
        NewWorkoutPackage {
            id: id.to_string(),
            name: format!("Package {id}"),
            exercises: vec![
                Exercise::named("Squat").with("sets", 3),
                Exercise::named("Lunge").with("reps", "12 each"),
            ],
            focus: Some("Legs".to_string()),
            duration: None,
            created_by: "akshay".to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_newest_first() {
        let repo = WorkoutPackageRepository::new(provisioned_pool().await);
        repo.create(&package("a", "2024-01-01T00:00:00.000Z")).await.unwrap();
        repo.create(&package("b", "2024-02-01T00:00:00.000Z")).await.unwrap();

        let packages: Vec<WorkoutPackage> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| WorkoutPackage::try_from(e).unwrap())
            .collect();

        assert_eq!(packages[0].id, "b");
        assert_eq!(packages[1].id, "a");
        assert_eq!(packages[0].exercises, package("b", "").exercises);
        assert!(packages[0].duration.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = WorkoutPackageRepository::new(provisioned_pool().await);
        repo.create(&package("a", "2024-01-01T00:00:00.000Z")).await.unwrap();

        assert!(repo.delete("a").await.unwrap());
        assert!(!repo.delete("a").await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_id_is_database_error() {
        let repo = WorkoutPackageRepository::new(provisioned_pool().await);
        tokio_test::assert_ok!(repo.create(&package("a", "2024-01-01T00:00:00.000Z")).await);

        let err = tokio_test::assert_err!(repo.create(&package("a", "2024-03-01T00:00:00.000Z")).await);
        match err {
            RepositoryError::Database(e) => assert!(e
                .as_database_error()
                .map(|d| d.is_unique_violation())
                .unwrap_or(false)),
            other => panic!("unexpected {other:?}"),
        }
    }
}
