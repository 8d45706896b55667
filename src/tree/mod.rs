//! Tree model and filesystem walking.

pub mod node;
pub mod walker;

pub use node::TreeNode;
pub use walker::TreeWalker;
