//! Issue and task types: global records without an ancestor chain.

use crate::authz::principal::Principal;
use crate::authz::Action;
use crate::models::WorkItemType;

pub fn work_item_type(principal: &Principal, action: Action, _item_type: &WorkItemType) -> bool {
    Action::CRUD.contains(&action) && principal.is_admin()
}
