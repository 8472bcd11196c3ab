pub use super::sessions::Entity as Sessions;
