// crates/ujuzi-core/src/access.rs
//
// Capability table: principal -> set of named roles.
//
// Each component owns one table and checks it at the top of every guarded
// operation, before any state is touched. Granting and revoking require
// DefaultAdmin on the same table and are logged as events.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::UjuziError;
use crate::event::{Component, Event};
use crate::identity::Principal;

/// Named capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// May grant and revoke every role on the table.
    DefaultAdmin,
    /// Validator-registry administration and entry status overrides.
    Admin,
    /// May mint reputation tokens.
    Minter,
    /// May burn reputation tokens.
    Burner,
    /// May record validation outcomes against validator reputation.
    Registrar,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::DefaultAdmin => "DEFAULT_ADMIN_ROLE",
            Role::Admin => "ADMIN_ROLE",
            Role::Minter => "MINTER_ROLE",
            Role::Burner => "BURNER_ROLE",
            Role::Registrar => "REGISTRAR_ROLE",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessControl {
    component: Component,
    roles: BTreeMap<Principal, BTreeSet<Role>>,
}

impl AccessControl {
    /// Create a table for `component` with `deployer` as DefaultAdmin.
    pub fn new(component: Component, deployer: Principal) -> Self {
        let mut roles = BTreeMap::new();
        roles.insert(deployer, BTreeSet::from([Role::DefaultAdmin]));
        Self { component, roles }
    }

    /// Create a table with `deployer` as DefaultAdmin plus the deploy-time
    /// grants in `initial`. Later grants go through [`grant_role`](Self::grant_role).
    pub fn with_roles(
        component: Component,
        deployer: Principal,
        initial: &[(Role, Principal)],
    ) -> Self {
        let mut acl = Self::new(component, deployer);
        for (role, account) in initial {
            acl.insert(*role, *account);
        }
        acl
    }

    pub fn component(&self) -> Component {
        self.component
    }

    pub fn has_role(&self, role: Role, who: &Principal) -> bool {
        self.roles
            .get(who)
            .map(|set| set.contains(&role))
            .unwrap_or(false)
    }

    /// Fail with `Unauthorized` unless `who` holds `role`.
    pub fn require(&self, role: Role, who: &Principal) -> Result<(), UjuziError> {
        if self.has_role(role, who) {
            Ok(())
        } else {
            Err(UjuziError::Unauthorized(format!(
                "account {} is missing role {}",
                who, role
            )))
        }
    }

    /// Fail with `Unauthorized` unless `who` holds at least one of `roles`.
    pub fn require_any(&self, roles: &[Role], who: &Principal) -> Result<(), UjuziError> {
        if roles.iter().any(|r| self.has_role(*r, who)) {
            Ok(())
        } else {
            let names: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
            Err(UjuziError::Unauthorized(format!(
                "account {} holds none of [{}]",
                who,
                names.join(", ")
            )))
        }
    }

    /// Grant `role` to `account`. Granting a role already held is a no-op
    /// and emits nothing.
    pub fn grant_role(
        &mut self,
        sender: &Principal,
        role: Role,
        account: Principal,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        self.require(Role::DefaultAdmin, sender)?;
        if self.insert(role, account) {
            tracing::info!(component = ?self.component, %role, account = %account.short(), "Role granted");
            events.push(Event::RoleGranted {
                component: self.component,
                role,
                account,
                sender: *sender,
            });
        }
        Ok(())
    }

    /// Revoke `role` from `account`. Revoking a role not held is a no-op.
    pub fn revoke_role(
        &mut self,
        sender: &Principal,
        role: Role,
        account: Principal,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        self.require(Role::DefaultAdmin, sender)?;
        let removed = match self.roles.get_mut(&account) {
            Some(set) => set.remove(&role),
            None => false,
        };
        if removed {
            if self.roles.get(&account).is_some_and(|set| set.is_empty()) {
                self.roles.remove(&account);
            }
            tracing::info!(component = ?self.component, %role, account = %account.short(), "Role revoked");
            events.push(Event::RoleRevoked {
                component: self.component,
                role,
                account,
                sender: *sender,
            });
        }
        Ok(())
    }

    /// Returns `true` if the role was newly added.
    fn insert(&mut self, role: Role, account: Principal) -> bool {
        self.roles.entry(account).or_default().insert(role)
    }

    /// All principals holding `role`, in key order.
    pub fn members(&self, role: Role) -> Vec<Principal> {
        self.roles
            .iter()
            .filter(|(_, set)| set.contains(&role))
            .map(|(p, _)| *p)
            .collect()
    }
}
