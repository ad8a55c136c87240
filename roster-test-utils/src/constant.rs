//! Group & role type names registered by the server's group type registry.

pub static TOP_LAYER: &str = "Group::TopLayer";
pub static TOP_GROUP: &str = "Group::TopGroup";
pub static BOTTOM_LAYER: &str = "Group::BottomLayer";
pub static BOTTOM_GROUP: &str = "Group::BottomGroup";

pub static TOP_LAYER_TOP_ADMIN: &str = "Group::TopLayer::TopAdmin";

pub static TOP_GROUP_LEADER: &str = "Group::TopGroup::Leader";
pub static TOP_GROUP_LOCAL_GUIDE: &str = "Group::TopGroup::LocalGuide";
pub static TOP_GROUP_SECRETARY: &str = "Group::TopGroup::Secretary";
pub static TOP_GROUP_MEMBER: &str = "Group::TopGroup::Member";

pub static BOTTOM_LAYER_LEADER: &str = "Group::BottomLayer::Leader";
pub static BOTTOM_LAYER_LOCAL_GUIDE: &str = "Group::BottomLayer::LocalGuide";
pub static BOTTOM_LAYER_MEMBER: &str = "Group::BottomLayer::Member";

pub static BOTTOM_GROUP_LEADER: &str = "Group::BottomGroup::Leader";
pub static BOTTOM_GROUP_MEMBER: &str = "Group::BottomGroup::Member";
