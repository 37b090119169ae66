use crate::error::AppError;
use serde::Deserialize;
use std::fmt;
use std::fmt::Formatter;
use std::path::Path;

/// The dispatcher on duty for this desk session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DispatcherProfile {
    pub name: String,
    pub employee_id: String,
    /// Free-form label, usually Morning, Evening or Night.
    pub shift: String,
    pub age: u32,
    pub contact: String,
    pub email: String,
}

impl DispatcherProfile {
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, AppError> {
        let data = std::fs::read_to_string(path).map_err(|source| AppError::ReadProfile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data).map_err(|source| AppError::ParseProfile {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl fmt::Display for DispatcherProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Employee ID: {}", self.employee_id)?;
        writeln!(f, "Shift: {}", self.shift)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Contact: {}", self.contact)?;
        write!(f, "Email: {}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> DispatcherProfile {
        DispatcherProfile {
            name: "Dana Reyes".to_string(),
            employee_id: "D-042".to_string(),
            shift: "Night".to_string(),
            age: 37,
            contact: "555-0142".to_string(),
            email: "dana@tower.example".to_string(),
        }
    }

    #[test]
    fn test_display_lists_every_field() {
        let text = sample().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            vec![
                "Name: Dana Reyes",
                "Employee ID: D-042",
                "Shift: Night",
                "Age: 37",
                "Contact: 555-0142",
                "Email: dana@tower.example",
            ],
            lines
        );
    }

    #[test]
    fn test_from_json() {
        let profile = DispatcherProfile::from_json(
            r#"{"name":"Dana Reyes","employee_id":"D-042","shift":"Night","age":37,
                "contact":"555-0142","email":"dana@tower.example"}"#,
        )
        .unwrap();
        assert_eq!(sample(), profile);
    }

    #[test]
    fn test_from_json_rejects_negative_age() {
        let result = DispatcherProfile::from_json(
            r#"{"name":"A","employee_id":"B","shift":"C","age":-1,"contact":"D","email":"E"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_bundled_profile() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/dispatcher.json");
        let profile = DispatcherProfile::load_from_file(&path).unwrap();
        assert_eq!("Morning", profile.shift);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = DispatcherProfile::load_from_file(Path::new("no/such/profile.json")).unwrap_err();
        assert!(matches!(err, AppError::ReadProfile { .. }));
        assert!(err.to_string().contains("no/such/profile.json"));
    }
}
