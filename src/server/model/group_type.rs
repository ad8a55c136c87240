//! Registry of group types and the role types they accept.
//!
//! Group and role types are stored in the database by name (e.g. `Group::TopGroup` and
//! `Group::TopGroup::Member`). The registry resolves those names to their static definition,
//! which tells whether a group type is a layer, which role types may exist in a group of that
//! type and which permissions each role type grants.

/// A permission granted by a role type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    /// Manage the role's layer and every layer below it
    LayerAndBelowFull,
    /// Manage every group of the role's layer
    LayerFull,
    /// Manage the role's own group
    GroupFull,
    /// Read the role's own group
    GroupRead,
    /// See contact data of people in the role's group
    ContactData,
}

/// A role type and the permissions it grants.
#[derive(Debug, PartialEq, Eq)]
pub struct RoleType {
    pub name: &'static str,
    pub permissions: &'static [Permission],
}

impl RoleType {
    /// Looks up a role type by name across all group types.
    pub fn find(name: &str) -> Option<&'static RoleType> {
        GROUP_TYPES
            .iter()
            .flat_map(|group_type| group_type.role_types.iter())
            .find(|role_type| role_type.name == name)
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

/// A group type, whether it forms a layer, and the role types it accepts.
#[derive(Debug, PartialEq, Eq)]
pub struct GroupType {
    pub name: &'static str,
    pub layer: bool,
    pub role_types: &'static [RoleType],
}

impl GroupType {
    /// Looks up a group type by name.
    pub fn find(name: &str) -> Option<&'static GroupType> {
        GROUP_TYPES.iter().find(|group_type| group_type.name == name)
    }

    /// Returns the role type if groups of this type accept it.
    pub fn role_type(&self, name: &str) -> Option<&'static RoleType> {
        self.role_types.iter().find(|role_type| role_type.name == name)
    }

    pub fn accepts(&self, role_type: &str) -> bool {
        self.role_type(role_type).is_some()
    }
}

/// Returns true if the group type name is registered as a layer.
pub fn is_layer(group_type: &str) -> bool {
    GroupType::find(group_type).is_some_and(|group_type| group_type.layer)
}

use Permission::*;

pub static GROUP_TYPES: &[GroupType] = &[
    GroupType {
        name: "Group::TopLayer",
        layer: true,
        role_types: &[RoleType {
            name: "Group::TopLayer::TopAdmin",
            permissions: &[LayerAndBelowFull, ContactData],
        }],
    },
    GroupType {
        name: "Group::TopGroup",
        layer: false,
        role_types: &[
            RoleType {
                name: "Group::TopGroup::Leader",
                permissions: &[LayerAndBelowFull, ContactData],
            },
            RoleType {
                name: "Group::TopGroup::LocalGuide",
                permissions: &[LayerFull],
            },
            RoleType {
                name: "Group::TopGroup::Secretary",
                permissions: &[GroupFull, ContactData],
            },
            RoleType {
                name: "Group::TopGroup::Member",
                permissions: &[GroupRead, ContactData],
            },
        ],
    },
    GroupType {
        name: "Group::BottomLayer",
        layer: true,
        role_types: &[
            RoleType {
                name: "Group::BottomLayer::Leader",
                permissions: &[LayerAndBelowFull, ContactData],
            },
            RoleType {
                name: "Group::BottomLayer::LocalGuide",
                permissions: &[LayerFull],
            },
            RoleType {
                name: "Group::BottomLayer::Member",
                permissions: &[GroupRead],
            },
        ],
    },
    GroupType {
        name: "Group::BottomGroup",
        layer: false,
        role_types: &[
            RoleType {
                name: "Group::BottomGroup::Leader",
                permissions: &[GroupFull],
            },
            RoleType {
                name: "Group::BottomGroup::Member",
                permissions: &[GroupRead],
            },
        ],
    },
];
