//! Repository operations for [`StudentProfile`] records.

use siwes_shared::{validate, Role, UserId};

use crate::error::{Result, StoreError};
use crate::models::StudentProfile;
use crate::store::Store;

impl Store {
    /// Insert a placement profile.
    ///
    /// The owner must be an existing student without a profile, the
    /// supervisor (when given) an existing supervisor, and the placement
    /// period must not end before it starts.
    pub fn add_student_profile(&mut self, profile: StudentProfile) -> Result<StudentProfile> {
        validate::require_field("matric number", &profile.matric_number)?;
        validate::date_range(profile.start_date, profile.end_date)?;

        if self.profiles.contains(&profile.id) {
            return Err(StoreError::DuplicateId(profile.id.to_string()));
        }
        self.require_user_with_role(&profile.user_id, Role::Student)?;
        if self.get_student_profile(&profile.user_id).is_some() {
            tracing::warn!(user_id = %profile.user_id, "student already has a profile");
            return Err(StoreError::DuplicateProfile(profile.user_id));
        }
        if let Some(supervisor_id) = &profile.supervisor_id {
            self.require_user_with_role(supervisor_id, Role::Supervisor)?;
        }

        tracing::info!(
            profile_id = %profile.id,
            user_id = %profile.user_id,
            supervisor_id = ?profile.supervisor_id.as_ref().map(UserId::as_str),
            "student profile added"
        );
        self.profiles
            .insert(profile.id.clone(), profile.user_id.clone(), profile.clone());
        Ok(profile)
    }

    /// The placement profile of a student, if one was recorded.
    pub fn get_student_profile(&self, user_id: &UserId) -> Option<&StudentProfile> {
        self.profiles.owned_by(user_id).next()
    }

    /// Profiles whose supervisor is `supervisor_id`, in insertion order.
    pub fn profiles_supervised_by(&self, supervisor_id: &UserId) -> Vec<&StudentProfile> {
        self.profiles
            .iter()
            .filter(|p| p.supervisor_id.as_ref() == Some(supervisor_id))
            .collect()
    }

    pub fn list_student_profiles(&self) -> Vec<&StudentProfile> {
        self.profiles.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use siwes_shared::{ProfileId, ValidationError};

    use super::*;
    use crate::models::User;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn store_with_people() -> Store {
        let mut store = Store::new();
        for (id, role) in [
            ("student-1", Role::Student),
            ("student-2", Role::Student),
            ("sup-1", Role::Supervisor),
            ("admin-1", Role::Admin),
        ] {
            store
                .add_user(User {
                    id: UserId::from(id),
                    name: id.to_string(),
                    email: format!("{id}@example.com"),
                    role,
                    profile_image: None,
                })
                .unwrap();
        }
        store
    }

    fn profile(id: &str, user: &str, supervisor: Option<&str>) -> StudentProfile {
        StudentProfile {
            id: ProfileId::from(id),
            user_id: UserId::from(user),
            matric_number: "MAT12345".into(),
            department: "Computer Science".into(),
            level: "300".into(),
            company: "Tech Solutions Ltd".into(),
            supervisor_id: supervisor.map(UserId::from),
            start_date: date(5, 1),
            end_date: date(8, 31),
        }
    }

    #[test]
    fn test_one_profile_per_student() {
        let mut store = store_with_people();
        store
            .add_student_profile(profile("p1", "student-1", Some("sup-1")))
            .unwrap();

        let err = store
            .add_student_profile(profile("p2", "student-1", None))
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateProfile(UserId::from("student-1")));
        assert_eq!(store.stats().profiles, 1);
    }

    #[test]
    fn test_lookup_by_user() {
        let mut store = store_with_people();
        store
            .add_student_profile(profile("p1", "student-1", Some("sup-1")))
            .unwrap();

        let found = store
            .get_student_profile(&UserId::from("student-1"))
            .unwrap();
        assert_eq!(found.id, ProfileId::from("p1"));
        assert!(store
            .get_student_profile(&UserId::from("student-2"))
            .is_none());
    }

    #[test]
    fn test_reversed_placement_period_rejected() {
        let mut store = store_with_people();
        let mut bad = profile("p1", "student-1", None);
        bad.start_date = date(9, 1);

        let err = store.add_student_profile(bad).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::InvalidDateRange { .. })
        ));
        assert_eq!(store.stats().profiles, 0);
    }

    #[test]
    fn test_owner_must_be_student() {
        let mut store = store_with_people();
        let err = store
            .add_student_profile(profile("p1", "admin-1", None))
            .unwrap_err();
        assert!(matches!(err, StoreError::RoleMismatch { .. }));
    }

    #[test]
    fn test_supervisor_must_be_supervisor() {
        let mut store = store_with_people();
        let err = store
            .add_student_profile(profile("p1", "student-1", Some("student-2")))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::RoleMismatch {
                expected: Role::Supervisor,
                ..
            }
        ));
    }

    #[test]
    fn test_supervised_profiles() {
        let mut store = store_with_people();
        store
            .add_student_profile(profile("p1", "student-1", Some("sup-1")))
            .unwrap();
        store
            .add_student_profile(profile("p2", "student-2", None))
            .unwrap();

        let supervised = store.profiles_supervised_by(&UserId::from("sup-1"));
        assert_eq!(supervised.len(), 1);
        assert_eq!(supervised[0].user_id, UserId::from("student-1"));
        assert!(store
            .profiles_supervised_by(&UserId::from("admin-1"))
            .is_empty());
        assert_eq!(store.list_student_profiles().len(), 2);
    }
}
