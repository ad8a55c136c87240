use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Role type and optional target group of a bulk role operation
#[derive(Clone, Serialize, Deserialize, ToSchema, Debug)]
pub struct RoleDescriptorDto {
    /// Fully qualified role type, e.g. `Group::TopGroup::Member`
    #[serde(rename = "type")]
    pub role_type: String,
    /// Target group, only read when moving roles
    #[serde(default)]
    pub group_id: Option<i32>,
}

/// Body of the bulk create & destroy requests
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct RoleListParams {
    /// Comma separated person IDs
    pub ids: String,
    pub role: RoleDescriptorDto,
}

/// Body of the bulk move request
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct RoleListUpdateParams {
    /// Comma separated person IDs
    pub ids: String,
    /// Role type the people currently hold in the group
    pub moving_role_type: String,
    pub role: RoleDescriptorDto,
}

#[derive(Serialize, Deserialize, IntoParams, Debug)]
pub struct RoleListMoveQuery {
    /// Comma separated person IDs
    pub ids: String,
    /// Role type that is about to be moved
    pub role_type: String,
}

#[derive(Serialize, Deserialize, IntoParams, Debug)]
pub struct RoleListDeletableQuery {
    /// Comma separated person IDs
    pub ids: String,
}

/// Result of a bulk create, destroy or move
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct RoleListResultDto {
    pub count: u64,
    pub notice: String,
}

/// Confirmation data shown before moving roles
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct RoleListMoveDto {
    pub moving_people: String,
    pub moving_role_type: String,
    pub moving_roles_count: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Eq)]
pub struct RoleTypeCountDto {
    pub role_type: String,
    pub count: u64,
}
