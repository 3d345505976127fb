use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Caller's authorization rank.
///
/// Ranks between the named reference points belong to the tier of the
/// point below them. Tier membership is a half-open range test, except
/// that [`Role::SUPERUSER`] is a member of every tier from normal upward.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Role(i32);

impl Role {
    /// Banned caller.
    pub const BANNED: Role = Role(-2);
    /// Unauthenticated caller.
    pub const ANONYMOUS: Role = Role(-1);
    /// Ordinary signed-in user.
    pub const NORMAL: Role = Role(0);
    /// Project developer.
    pub const DEVELOPER: Role = Role(2_000_000_000);
    /// Platform administrator.
    pub const ADMIN: Role = Role(2_147_483_000);
    /// Superuser, the largest representable rank.
    pub const SUPERUSER: Role = Role(i32::MAX);

    /// Wraps a raw rank.
    pub const fn new(rank: i32) -> Self {
        Self(rank)
    }

    /// Raw rank.
    pub const fn rank(self) -> i32 {
        self.0
    }

    /// Normal tier, or superuser.
    pub const fn is_user(self) -> bool {
        self.is_superuser() || (self.0 >= Self::NORMAL.0 && self.0 < Self::DEVELOPER.0)
    }

    /// Developer tier, or superuser.
    pub const fn is_developer(self) -> bool {
        self.is_superuser() || (self.0 >= Self::DEVELOPER.0 && self.0 < Self::ADMIN.0)
    }

    /// Admin tier, or superuser.
    pub const fn is_admin(self) -> bool {
        self.is_superuser() || (self.0 >= Self::ADMIN.0 && self.0 < Self::SUPERUSER.0)
    }

    /// Exactly the superuser rank.
    pub const fn is_superuser(self) -> bool {
        self.0 == Self::SUPERUSER.0
    }

    /// The single tier this rank falls in.
    pub const fn tier(self) -> Tier {
        if self.is_superuser() {
            Tier::Superuser
        } else if self.0 >= Self::ADMIN.0 {
            Tier::Admin
        } else if self.0 >= Self::DEVELOPER.0 {
            Tier::Developer
        } else if self.0 >= Self::NORMAL.0 {
            Tier::Normal
        } else if self.0 == Self::ANONYMOUS.0 {
            Tier::Anonymous
        } else {
            Tier::Banned
        }
    }

    /// Tier membership, with the superuser override for normal and above.
    pub const fn satisfies(self, required: Tier) -> bool {
        match required {
            Tier::Normal => self.is_user(),
            Tier::Developer => self.is_developer(),
            Tier::Admin => self.is_admin(),
            Tier::Superuser => self.is_superuser(),
            Tier::Anonymous => matches!(self.tier(), Tier::Anonymous),
            Tier::Banned => matches!(self.tier(), Tier::Banned),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Role {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Role)
    }
}

impl From<i32> for Role {
    fn from(rank: i32) -> Self {
        Self(rank)
    }
}

impl From<Role> for i32 {
    fn from(role: Role) -> Self {
        role.0
    }
}

/// Named authorization tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Below anonymous.
    Banned,
    /// Exactly the anonymous rank.
    Anonymous,
    /// Normal up to developer.
    Normal,
    /// Developer up to admin.
    Developer,
    /// Admin up to superuser.
    Admin,
    /// The superuser rank.
    Superuser,
}

impl Tier {
    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Tier::Banned => "banned",
            Tier::Anonymous => "anonymous",
            Tier::Normal => "normal",
            Tier::Developer => "developer",
            Tier::Admin => "admin",
            Tier::Superuser => "superuser",
        }
    }

    /// Reference rank of the tier.
    pub const fn floor(self) -> Role {
        match self {
            Tier::Banned => Role::BANNED,
            Tier::Anonymous => Role::ANONYMOUS,
            Tier::Normal => Role::NORMAL,
            Tier::Developer => Role::DEVELOPER,
            Tier::Admin => Role::ADMIN,
            Tier::Superuser => Role::SUPERUSER,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superuser_is_member_of_every_tier() {
        let su = Role::SUPERUSER;
        assert!(su.is_user());
        assert!(su.is_developer());
        assert!(su.is_admin());
        assert!(su.is_superuser());
        assert_eq!(su.rank(), 2_147_483_647);
    }

    #[test]
    fn developer_boundary_is_developer_only() {
        let dev = Role::new(2_000_000_000);
        assert!(dev.is_developer());
        assert!(!dev.is_user());
        assert!(!dev.is_admin());
        assert!(!dev.is_superuser());
    }

    #[test]
    fn ranges_are_half_open() {
        assert!(Role::new(1_999_999_999).is_user());
        assert!(Role::new(2_147_482_999).is_developer());
        assert!(Role::new(2_147_483_646).is_admin());
        assert!(!Role::new(2_147_483_646).is_superuser());
        assert!(!Role::ANONYMOUS.is_user());
        assert!(!Role::BANNED.is_user());
    }

    #[test]
    fn tier_classification() {
        assert_eq!(Role::new(-100).tier(), Tier::Banned);
        assert_eq!(Role::BANNED.tier(), Tier::Banned);
        assert_eq!(Role::ANONYMOUS.tier(), Tier::Anonymous);
        assert_eq!(Role::new(42).tier(), Tier::Normal);
        assert_eq!(Role::new(2_100_000_000).tier(), Tier::Developer);
        assert_eq!(Role::ADMIN.tier(), Tier::Admin);
        assert_eq!(Role::SUPERUSER.tier(), Tier::Superuser);
    }

    #[test]
    fn satisfies_is_membership_not_ordering() {
        assert!(!Role::DEVELOPER.satisfies(Tier::Normal));
        assert!(Role::SUPERUSER.satisfies(Tier::Normal));
        assert!(!Role::SUPERUSER.satisfies(Tier::Anonymous));
        assert!(Role::ANONYMOUS.satisfies(Tier::Anonymous));
    }

    #[test]
    fn display_renders_raw_rank() {
        assert_eq!(Role::ADMIN.to_string(), "2147483000");
        assert_eq!(Role::BANNED.to_string(), "-2");
        assert_eq!("  12 ".parse::<Role>().unwrap(), Role::new(12));
    }
}
