pub use super::document::Entity as Document;
pub use super::page::Entity as Page;
pub use super::school::Entity as School;
