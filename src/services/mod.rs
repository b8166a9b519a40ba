pub mod comment_service;
pub mod follow_service;
pub mod post_service;
