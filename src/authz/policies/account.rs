//! Policy for user accounts as targets.

use crate::authz::principal::Principal;
use crate::authz::Action;
use crate::models::UserRecord;

pub fn user(principal: &Principal, action: Action, record: &UserRecord) -> bool {
    let is_self = principal.is(record.id);

    match action {
        Action::Create => principal.is_admin() && record.new_record,
        Action::Read => {
            principal.is_admin() || is_self || (principal.is_employee() && record.is_employee())
        }
        Action::Update => principal.is_admin() || is_self,
        Action::Destroy => principal.is_admin() && !is_self,
        _ => false,
    }
}
