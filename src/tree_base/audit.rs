use bitmask_enum::bitmask;

#[bitmask(u8)]
pub enum Violations {
    Ok = 0,
    // a key in some left subtree is not strictly less than its ancestor.
    LeftOrder = 1,
    // a key in some right subtree is less than its ancestor.
    RightOrder = 2,
    // two nodes carry equal keys.
    DuplicateKey = 4,
    // a child's parent link does not point back at its parent.
    ParentLink = 8,
    // the maintained size differs from the number of reachable nodes.
    SizeMismatch = 16,
}

/// Outcome of a full structural audit of a tree.
pub struct AuditReport {
    pub flags: Violations,
    pub reachable: usize,
}

impl AuditReport {
    pub fn new(flags: Violations, reachable: usize) -> Self {
        Self { flags, reachable }
    }

    pub fn has(&self, flag: Violations) -> bool {
        self.flags.contains(flag)
    }

    pub fn is_valid(&self) -> bool {
        self.flags.bits() == 0
    }

    /// True when the BST ordering holds, whatever the other checks say.
    pub fn is_ordered(&self) -> bool {
        !self.has(Violations::LeftOrder) && !self.has(Violations::RightOrder)
    }

    pub(crate) fn flag(&mut self, flag: Violations) {
        self.flags = self.flags | flag;
    }
}

impl std::fmt::Debug for AuditReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = [
            (Violations::LeftOrder, "left-order"),
            (Violations::RightOrder, "right-order"),
            (Violations::DuplicateKey, "duplicate-key"),
            (Violations::ParentLink, "parent-link"),
            (Violations::SizeMismatch, "size-mismatch"),
        ];
        let mut list = f.debug_list();
        for (flag, name) in names {
            if self.has(flag) {
                list.entry(&name);
            }
        }
        list.finish()?;
        write!(f, " ({} reachable)", self.reachable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_flags() {
        let mut report = AuditReport::new(Violations::Ok, 3);
        assert!(report.is_valid());
        assert!(report.is_ordered());

        report.flag(Violations::DuplicateKey);
        assert!(!report.is_valid());
        assert!(report.is_ordered());
        assert!(report.has(Violations::DuplicateKey));
        assert!(!report.has(Violations::ParentLink));

        report.flag(Violations::RightOrder);
        assert!(!report.is_ordered());
        assert_eq!(
            format!("{:?}", report),
            "[\"right-order\", \"duplicate-key\"] (3 reachable)"
        );
    }
}
