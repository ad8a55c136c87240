use crate::server::error::role_list::RoleListError;

/// Parses a comma separated list of person IDs such as `"1,2, 3"`.
///
/// Duplicates are dropped, keeping the first occurrence. Fails for an empty list or any entry
/// that is not a positive integer.
pub fn parse_person_ids(ids: &str) -> Result<Vec<i32>, RoleListError> {
    let mut person_ids = Vec::new();

    for part in ids.split(',') {
        let id = part
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| RoleListError::InvalidIds(ids.to_string()))?;

        if !person_ids.contains(&id) {
            person_ids.push(id);
        }
    }

    Ok(person_ids)
}
