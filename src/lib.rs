// ============================================================================
// Comment Store
// ============================================================================

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod id;
pub mod models;
pub mod repository;
pub mod seed;
pub mod server;
pub mod state;

// Re-export main types for convenience
pub use app::build_router;
pub use config::{AppConfig, NotFoundPolicy};
pub use error::{AppError, AppResult};
pub use models::Comment;
pub use repository::{CommentRepository, InMemoryCommentRepository};
pub use server::{bootstrap, init_tracing, run, shutdown_signal};
pub use state::AppState;
