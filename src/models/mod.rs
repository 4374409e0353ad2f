pub mod artifact;
pub mod category;
pub mod decision;
pub mod progression;
pub mod project;
pub mod resolution;
pub mod resource;
pub mod review;
pub mod user;
pub mod work_item;

pub use artifact::{Closure, Comment, Connection, Reopening, Subscription};
pub use category::Category;
pub use progression::Progression;
pub use project::Project;
pub use resolution::Resolution;
pub use resource::{Resource, ResourceKind};
pub use review::{Review, ReviewState};
pub use user::UserRecord;
pub use work_item::{Issue, Status, Task, WorkItem, WorkItemType};
