pub mod author;
pub mod course;
pub mod dispatch;
pub mod init;
pub mod lesson;
pub mod schema;
pub mod shared;
pub mod tags;
