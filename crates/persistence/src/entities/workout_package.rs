//! Workout package entity (database row mapping).

use domain::models::exercise::decode_exercises;
use sqlx::FromRow;

/// Database row mapping for the workout_packages table.
///
/// `exercises` holds the JSON-encoded exercise list.
#[derive(Debug, Clone, FromRow)]
pub struct WorkoutPackageEntity {
    pub id: String,
    pub name: String,
    pub exercises: String,
    pub focus: Option<String>,
    pub duration: Option<String>,
    pub created_by: String,
    pub created_at: String,
}

impl TryFrom<WorkoutPackageEntity> for domain::models::WorkoutPackage {
    type Error = serde_json::Error;

    fn try_from(entity: WorkoutPackageEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            exercises: decode_exercises(&entity.exercises)?,
            id: entity.id,
            name: entity.name,
            focus: entity.focus,
            duration: entity.duration,
            created_by: entity.created_by,
            created_at: entity.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::WorkoutPackage;

    fn entity(exercises: &str) -> WorkoutPackageEntity {
        WorkoutPackageEntity {
            id: "pkg-1".to_string(),
            name: "Full Body".to_string(),
            exercises: exercises.to_string(),
            focus: None,
            duration: Some("30 min".to_string()),
            created_by: "guest".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_decodes_exercises() {
        let package =
            WorkoutPackage::try_from(entity(r#"[{"name":"Burpee","reps":10}]"#)).unwrap();
        assert_eq!(package.exercises.len(), 1);
        assert_eq!(package.exercises[0].name, "Burpee");
        assert_eq!(package.exercises[0].details["reps"], 10);
    }

    #[test]
    fn test_rejects_malformed_exercises() {
        assert!(WorkoutPackage::try_from(entity("{broken")).is_err());
    }
}
