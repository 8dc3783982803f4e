use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Session Value Objects
// ============================================================================

/// Students order food; admins run a canteen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "student"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// The signed-in account. `canteen_id` is set for admins only and names the
/// canteen they manage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canteen_id: Option<Uuid>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_wire_shape_omits_canteen() {
        let user = User {
            id: Uuid::from_u128(2),
            name: "Student User".to_string(),
            email: "student@campus.edu".to_string(),
            role: UserRole::Student,
            canteen_id: None,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["role"], "student");
        assert!(value.get("canteenId").is_none());

        let restored: User = serde_json::from_value(value).unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn test_admin_wire_shape_carries_canteen() {
        let user = User {
            id: Uuid::from_u128(1),
            name: "Admin".to_string(),
            email: "admin@canteenq.com".to_string(),
            role: UserRole::Admin,
            canteen_id: Some(Uuid::from_u128(0xC1)),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["role"], "admin");
        assert_eq!(value["canteenId"], Uuid::from_u128(0xC1).to_string());
        assert!(user.is_admin());
    }
}
