//! Tests for the bulk role list endpoints.

mod create;
mod destroy;
mod update;

use roster::model::role_list::{RoleDescriptorDto, RoleListParams};

fn params(ids: &[i32], role_type: &str) -> RoleListParams {
    RoleListParams {
        ids: join_ids(ids),
        role: RoleDescriptorDto {
            role_type: role_type.to_string(),
            group_id: None,
        },
    }
}

fn join_ids(ids: &[i32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
