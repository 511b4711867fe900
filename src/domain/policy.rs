//! Permission policy: who may do what.
//!
//! Every permission decision in the application flows through
//! [`authorize`], a single role x action table, so no handler or
//! service re-derives the rules. The named predicates are thin
//! wrappers kept for readability at call sites.
//!
//! Denial is an expected outcome, not an error: everything here is a
//! pure boolean function of (actor, action).

use uuid::Uuid;

use super::role::AppRole;

/// The acting principal, as far as permissions are concerned.
/// Anonymous visitors have neither id nor role; an authenticated user
/// without an assigned role carries `role: None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Option<Uuid>,
    pub role: Option<AppRole>,
}

impl Actor {
    pub fn anonymous() -> Self {
        Self {
            id: None,
            role: None,
        }
    }

    pub fn new(id: Uuid, role: Option<AppRole>) -> Self {
        Self { id: Some(id), role }
    }

    pub fn is_authenticated(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(AppRole::Admin)
    }
}

/// Everything an actor can be allowed or denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AccessAdmin,
    ManageUsers,
    ManageCatalog,
    ManageBanners,
    CreateContent,
    /// Editing is ownership-scoped: the owner of the targeted content,
    /// if it has one.
    EditContent { owner_id: Option<Uuid> },
    PublishContent,
    DeleteContent,
    /// Copying requires authentication but no role.
    CopyContent,
}

/// The policy table. Single entry point for permission checks.
pub fn authorize(actor: &Actor, action: Action) -> bool {
    match action {
        Action::AccessAdmin
        | Action::ManageUsers
        | Action::ManageCatalog
        | Action::ManageBanners
        | Action::PublishContent
        | Action::DeleteContent => actor.is_admin(),

        Action::CreateContent => {
            matches!(actor.role, Some(AppRole::Admin) | Some(AppRole::Editor))
        }

        Action::EditContent { owner_id } => match actor.role {
            Some(AppRole::Admin) => true,
            Some(AppRole::Editor) => match (actor.id, owner_id) {
                (Some(me), Some(owner)) => me == owner,
                _ => false,
            },
            _ => false,
        },

        Action::CopyContent => actor.is_authenticated(),
    }
}

impl Actor {
    pub fn can_access_admin(&self) -> bool {
        authorize(self, Action::AccessAdmin)
    }

    pub fn can_create_content(&self) -> bool {
        authorize(self, Action::CreateContent)
    }

    pub fn can_edit_content(&self, owner_id: Option<Uuid>) -> bool {
        authorize(self, Action::EditContent { owner_id })
    }

    pub fn can_publish_content(&self) -> bool {
        authorize(self, Action::PublishContent)
    }

    pub fn can_manage_users(&self) -> bool {
        authorize(self, Action::ManageUsers)
    }

    /// Check membership in a required-role set. An absent role never
    /// satisfies any requirement.
    pub fn has_role(&self, required: &[AppRole]) -> bool {
        match self.role {
            Some(role) => required.contains(&role),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: Option<AppRole>) -> Actor {
        Actor::new(Uuid::new_v4(), role)
    }

    #[test]
    fn test_admin_passes_every_action() {
        let admin = actor(Some(AppRole::Admin));
        let someone_else = Some(Uuid::new_v4());

        assert!(admin.can_access_admin());
        assert!(admin.can_create_content());
        assert!(admin.can_edit_content(someone_else));
        assert!(admin.can_edit_content(None));
        assert!(admin.can_publish_content());
        assert!(admin.can_manage_users());
    }

    #[test]
    fn test_editor_edits_only_own_content() {
        let editor = actor(Some(AppRole::Editor));
        let own = editor.id;
        let other = Some(Uuid::new_v4());

        assert!(editor.can_create_content());
        assert!(editor.can_edit_content(own));
        assert!(!editor.can_edit_content(other));
        assert!(!editor.can_edit_content(None));
        assert!(!editor.can_publish_content());
        assert!(!editor.can_access_admin());
    }

    #[test]
    fn test_sales_and_anonymous_cannot_mutate() {
        let sales = actor(Some(AppRole::Sales));
        let anonymous = Actor::anonymous();
        let owner = Some(Uuid::new_v4());

        for a in [&sales, &anonymous] {
            assert!(!a.can_create_content());
            assert!(!a.can_edit_content(owner));
            assert!(!a.can_publish_content());
            assert!(!a.can_manage_users());
            assert!(!a.can_access_admin());
        }
    }

    #[test]
    fn test_roleless_user_is_never_elevated() {
        let no_role = actor(None);
        assert!(!no_role.can_create_content());
        assert!(!no_role.can_edit_content(no_role.id));
        assert!(!no_role.has_role(&[AppRole::Admin, AppRole::Editor, AppRole::Sales]));
    }

    #[test]
    fn test_copy_requires_authentication_only() {
        assert!(authorize(&actor(None), Action::CopyContent));
        assert!(authorize(&actor(Some(AppRole::Sales)), Action::CopyContent));
        assert!(!authorize(&Actor::anonymous(), Action::CopyContent));
    }

    #[test]
    fn test_has_role_set_membership() {
        let editor = actor(Some(AppRole::Editor));
        assert!(editor.has_role(&[AppRole::Editor]));
        assert!(editor.has_role(&[AppRole::Admin, AppRole::Editor]));
        assert!(!editor.has_role(&[AppRole::Admin]));
        assert!(!editor.has_role(&[]));
    }
}
