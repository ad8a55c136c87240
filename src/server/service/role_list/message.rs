/// Bulk role operations a notice can report on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleListAction {
    Create,
    Destroy,
    Move,
}

impl RoleListAction {
    fn participle(self) -> &'static str {
        match self {
            Self::Create => "erstellt",
            Self::Destroy => "gelöscht",
            Self::Move => "verschoben",
        }
    }
}

/// Pluralized notice for `count` roles affected by `action`, e.g. "2 Rollen wurden erstellt"
pub fn notice(action: RoleListAction, count: u64) -> String {
    let participle = action.participle();

    match count {
        0 => format!("Keine Rollen wurden {}", participle),
        1 => format!("Eine Rolle wurde {}", participle),
        n => format!("{} Rollen wurden {}", n, participle),
    }
}
