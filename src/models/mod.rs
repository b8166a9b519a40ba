pub mod comment;
pub mod follow;
pub mod group;
pub mod post;
pub mod user;

pub use comment::Comment;
pub use follow::Follow;
pub use group::Group;
pub use post::Post;
pub use user::User;

/// Short display form of a text body: its first 15 characters.
pub(crate) fn summarize(text: &str) -> String {
    text.chars().take(15).collect()
}
